//! Terminal output: colored status lines and asset summaries on stderr.
//!
//! Machine-readable output (descriptor JSON, rendered filenames) goes to
//! stdout; everything here goes to stderr so it never mixes with it.
//!
//! # Examples
//!
//! ```no_run
//! use tack_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Descriptor is valid");
//! ui::warning("Style pruning is disabled in watch mode");
//! ```

mod format;
mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{format_size, print_asset_summary};
pub use messages::{error, info, success, warning};

static COLORS: AtomicBool = AtomicBool::new(true);

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr()
}

/// Decide once whether status lines are colored.
///
/// `--no-color` always wins over the environment.
pub fn init_colors(no_color: bool) {
    COLORS.store(!no_color && should_use_color(), Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}
