//! Describe command implementation.
//!
//! Prints the descriptor for the selected mode and watch flag as JSON on
//! stdout.

use crate::cli::DescribeArgs;
use crate::config;
use crate::error::{CliError, Result};
use serde_json::Value;
use std::path::Path;

/// Execute the describe command.
pub fn execute(root: &Path, args: DescribeArgs) -> Result<()> {
    println!("{}", render(root, &args)?);
    Ok(())
}

/// The JSON text `execute` prints.
pub fn render(root: &Path, args: &DescribeArgs) -> Result<String> {
    let (_, descriptor) = config::load_descriptor(root, &args.invocation)?;
    tracing::debug!(
        mode = %descriptor.mode,
        watch = descriptor.watch,
        rules = descriptor.rules().len(),
        "built descriptor"
    );

    let mut value = descriptor.to_value()?;
    if let Some(section) = args.section {
        value = match value {
            Value::Object(mut map) => map.remove(section.key()).ok_or_else(|| {
                CliError::Custom(format!("descriptor has no '{}' section", section.key()))
            })?,
            other => other,
        };
    }

    let text = if args.compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };
    Ok(text)
}
