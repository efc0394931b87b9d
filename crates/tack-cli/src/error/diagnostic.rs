//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use miette::Report;
use tack_config::ConfigError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::FileNotFound(path) => miette::miette!(
            help = "Paths are resolved against --root (default: the current directory)",
            "File not found: {}",
            path.display()
        ),
        _ => miette::miette!("{}", err),
    }
}

/// Convert a library error, carrying its hint into the help section
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match &err {
        ConfigError::EntryNotFound { .. } => miette::miette!(
            help = "Every entry source must exist under the project root",
            "{}",
            err
        ),
        ConfigError::NotFound => miette::miette!(
            help = "Create a tack.toml or add a \"tack\" field to package.json",
            "{}",
            err
        ),
        _ => match err.hint() {
            Some(hint) => miette::miette!(help = hint.to_string(), "{}", err),
            None => miette::miette!("{}", err),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_become_help() {
        let report = config_error_to_miette(ConfigError::InvalidValue {
            field: "watch".to_string(),
            hint: Some("expected a boolean".to_string()),
        });
        let help = report.help().map(|h| h.to_string());
        assert_eq!(help.as_deref(), Some("expected a boolean"));
    }

    #[test]
    fn plain_errors_keep_message() {
        let report = cli_error_to_miette(CliError::InvalidArgument("bad".to_string()));
        assert_eq!(report.to_string(), "Invalid argument: bad");
    }
}
