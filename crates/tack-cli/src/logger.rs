//! Logging setup for the Tack CLI.
//!
//! Library code logs through `tracing` macros; this module installs the
//! subscriber that decides what reaches the terminal.
//!
//! # Example
//!
//! ```rust,no_run
//! use tack_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false, None);
//! info!("describing pipeline");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "tack=debug,tack_config=debug,tack_cli=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_LEVEL: &str = "info";

/// Initialize the tracing subscriber.
///
/// Call once, before anything logs.
///
/// # Verbosity Levels
///
/// The filter is chosen in this order:
/// 1. `--verbose`: DEBUG for tack crates
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG` environment variable
/// 4. `settings.log_level` from the project config
/// 5. INFO for tack crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool, configured: Option<&str>) {
    init_logger_with_filter(build_filter(verbose, quiet, configured), no_color);
}

/// Initialize logger with a custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .with_writer(std::io::stderr)
        .compact();

    // A subscriber may already be installed
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

pub(crate) fn build_filter(verbose: bool, quiet: bool, configured: Option<&str>) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let level = configured.unwrap_or(DEFAULT_LEVEL);
            EnvFilter::try_new(scoped(level)).unwrap_or_else(|_| EnvFilter::new(scoped(DEFAULT_LEVEL)))
        })
    }
}

/// Scope a bare level to the tack crates; full directives pass through.
fn scoped(level: &str) -> String {
    if level.contains('=') || level.contains(',') {
        level.to_string()
    } else {
        format!("tack={level},tack_config={level},tack_cli={level}")
    }
}

/// Whether colored output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise the
/// terminal decides.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::Term::stderr().features().colors_supported()
}
