//! Error handling for the Tack CLI.
//!
//! `CliError` is the top-level type returned by every command. Library errors
//! convert into it through `#[from]`, and [`ResultExt`] attaches paths or
//! hints on the way up.
//!
//! # Example
//!
//! ```rust,no_run
//! use tack_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_asset(path: &Path) -> Result<Vec<u8>> {
//!     std::fs::read(path).with_path(path)
//! }
//! ```

mod diagnostic;

use std::path::PathBuf;
use thiserror::Error;

pub use diagnostic::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Config loading, descriptor validation and asset I/O errors
    #[error("Configuration error: {0}")]
    Config(#[from] tack_config::ConfigError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Append a hint line to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            CliError::Config(tack_config::ConfigError::Io(io_err))
                if io_err.kind() == std::io::ErrorKind::NotFound =>
            {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tack_config::ConfigError;

    #[test]
    fn test_cli_error_from_config_error() {
        let cli_err: CliError = ConfigError::NotFound.into();
        assert!(matches!(cli_err, CliError::Config(ConfigError::NotFound)));
    }

    #[test]
    fn test_config_error_message_is_prefixed() {
        let err: CliError = ConfigError::EntryNotFound {
            path: PathBuf::from("assets/main/index.js"),
        }
        .into();
        let msg = err.to_string();
        assert!(msg.starts_with("Configuration error:"));
        assert!(msg.contains("assets/main/index.js"));
    }

    #[test]
    fn test_result_ext_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let err = result.with_path("/test/path.txt").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_result_ext_with_path_keeps_other_errors() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));

        let err = result.with_path("/test/path.txt").unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn test_result_ext_with_hint() {
        let result: std::result::Result<(), ConfigError> = Err(ConfigError::NotFound);

        let err = result.with_hint("Create a tack.toml").unwrap_err();
        assert!(err.to_string().contains("Hint: Create a tack.toml"));
    }
}
