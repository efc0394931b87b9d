//! Formatting utilities for sizes and emitted-asset summaries.

use console::Term;
use owo_colors::OwoColorize;

use super::colors_enabled;

/// Format file size in human-readable format.
///
/// ```
/// use tack_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1024), "1.00 KB");
/// assert_eq!(format_size(1_048_576), "1.00 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", size as u64, UNITS[unit_idx])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// Print a table of emitted assets to stderr.
///
/// Each entry is `(logical name, hashed file name, size in bytes)`.
pub fn print_asset_summary(entries: &[(String, String, u64)]) {
    let width = (Term::stderr().size().1 as usize).min(80);
    let rule = "─".repeat(width);
    let colors = colors_enabled();

    if colors {
        eprintln!("\n{}", "Emitted Assets".bold().underline());
    } else {
        eprintln!("\nEmitted Assets");
    }
    eprintln!("{}", rule);

    for (logical, file_name, size) in entries {
        let size = format_size(*size);
        if colors {
            eprintln!(
                "  {} {} {} {}",
                "▸".blue(),
                logical.bright_white().bold(),
                format!("→ {}", file_name).dimmed(),
                size.dimmed()
            );
        } else {
            eprintln!("  ▸ {} → {} {}", logical, file_name, size);
        }
    }

    eprintln!("{}", rule);

    let total: u64 = entries.iter().map(|(_, _, size)| size).sum();
    eprintln!(
        "  Total: {} in {} file(s)",
        format_size(total),
        entries.len()
    );
}
