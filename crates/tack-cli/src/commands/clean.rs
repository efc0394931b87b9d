//! Clean command implementation.

use crate::cli::{CleanArgs, InvocationArgs};
use crate::commands::utils;
use crate::config;
use crate::error::Result;
use crate::ui;
use std::path::Path;
use tack_config::{PostStep, clean_output_dir};

/// Execute the clean command.
///
/// Empties the configured output directory (or `--out-dir`), keeping the
/// directory itself. A missing directory is created.
pub fn execute(root: &Path, args: CleanArgs) -> Result<()> {
    let (_, descriptor) = config::load_descriptor(root, &InvocationArgs::default())?;

    if let Some(PostStep::Clean(options)) = descriptor.post_step("clean") {
        tracing::debug!(paths = ?options.paths, "clean step");
    }

    let out_dir = utils::resolve_path(
        args.out_dir.as_deref().unwrap_or(descriptor.output.path.as_path()),
        root,
    );
    clean_output_dir(&out_dir)?;
    ui::success(&format!("Cleaned {}", out_dir.display()));
    Ok(())
}
