//! Check command implementation.
//!
//! Validates the descriptor without building anything.

use crate::cli::CheckArgs;
use crate::config;
use crate::error::Result;
use crate::ui;
use std::path::Path;
use tack_config::{ConfigDiscovery, ConfigValidator, FsValidator, SchemaValidator};

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load the project config (file, environment, flags)
/// 2. Validate the descriptor's structure
/// 3. Check every entry source exists (unless --schema-only)
/// 4. Warn about content roots the pruning scan will not find
pub fn execute(root: &Path, args: CheckArgs) -> Result<()> {
    ui::info("Checking pipeline descriptor...");

    match ConfigDiscovery::new(root).find() {
        Some(path) => ui::info(&format!("Using {}", path.display())),
        None => ui::info("No tack.toml or package.json \"tack\" field found, using defaults"),
    }

    let (config, descriptor) = config::load_descriptor(root, &args.invocation)?;
    ui::info(&format!(
        "Mode: {}, watch: {}",
        descriptor.mode, descriptor.watch
    ));

    if args.schema_only {
        SchemaValidator.validate(&descriptor)?;
        ui::success("Descriptor structure is valid");
        return Ok(());
    }

    if let Err(err) = FsValidator::new(root).validate(&descriptor) {
        ui::error(&err.to_string());
        return Err(err.into());
    }

    for (name, sources) in descriptor.entry.iter() {
        ui::success(&format!("  {} ({} source(s))", name, sources.len()));
    }

    let templates = root.join(&config.layout.templates_dir);
    if descriptor.purge_content().is_some() && !templates.is_dir() {
        ui::warning(&format!(
            "Template directory {} does not exist; style pruning will remove every design-system class",
            templates.display()
        ));
    }

    ui::success("Descriptor is valid");
    Ok(())
}
