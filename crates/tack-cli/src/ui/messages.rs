//! Status message functions for terminal output.

use owo_colors::{OwoColorize, Style};

use super::colors_enabled;

fn paint(text: &str, style: Style) -> String {
    if colors_enabled() {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Print a success message to stderr.
///
/// ```no_run
/// use tack_cli::ui::success;
///
/// success("Wrote manifest.json");
/// ```
pub fn success(message: &str) {
    eprintln!("{} {}", paint("✓", Style::new().green().bold()), message);
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!("{} {}", paint("ℹ", Style::new().blue().bold()), message);
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!(
        "{} {}",
        paint("⚠", Style::new().yellow().bold()),
        paint(message, Style::new().yellow())
    );
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    eprintln!(
        "{} {}",
        paint("✗", Style::new().red().bold()),
        paint(message, Style::new().red())
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        // These should not panic
        success("Success message");
        info("Info message");
        warning("Warning message");
        error("Error message");
    }

    #[test]
    fn test_paint_without_colors_is_plain() {
        crate::ui::init_colors(true);
        assert_eq!(paint("✓", Style::new().green()), "✓");
    }
}
