//! Scan command implementation.
//!
//! Resolves the pruning step's content source and collects the class-name
//! candidates it would keep.

use crate::cli::ScanArgs;
use crate::config;
use crate::error::{CliError, Result};
use crate::ui;
use std::path::Path;
use tack_config::ContentScan;

/// Execute the scan command.
pub fn execute(root: &Path, args: ScanArgs) -> Result<()> {
    let (_, descriptor) = config::load_descriptor(root, &args.invocation)?;

    let Some(source) = descriptor.purge_content() else {
        ui::warning("Style pruning is disabled in watch mode; nothing to scan");
        return Ok(());
    };

    let scan = ContentScan::run(source, root)?;
    if args.list {
        for candidate in &scan.candidates {
            println!("{}", candidate);
        }
    }

    ui::info(&format!(
        "Scanned {} template file(s), found {} candidate class name(s)",
        scan.files.len(),
        scan.candidates.len()
    ));

    let missing = missing_classes(&scan, &args.require);
    if !missing.is_empty() {
        for class in &missing {
            ui::error(&format!("'{}' is not referenced by any template", class));
        }
        return Err(CliError::Custom(format!(
            "{} required class(es) would be pruned",
            missing.len()
        )));
    }

    Ok(())
}

/// Required classes the scan did not find.
pub fn missing_classes<'a>(scan: &ContentScan, required: &'a [String]) -> Vec<&'a str> {
    required
        .iter()
        .map(String::as_str)
        .filter(|class| !scan.references(class))
        .collect()
}
