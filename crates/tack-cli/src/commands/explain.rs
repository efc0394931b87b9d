//! Explain command implementation.
//!
//! Routes each path through the rule group and prints the winning rule and
//! its transform chain, one line per path on stdout.

use crate::cli::ExplainArgs;
use crate::commands::utils;
use crate::config;
use crate::error::Result;
use std::path::Path;
use tack_config::RuleSet;

/// Execute the explain command.
pub fn execute(root: &Path, args: ExplainArgs) -> Result<()> {
    let (_, descriptor) = config::load_descriptor(root, &args.invocation)?;

    let mut unhandled = 0usize;
    for path in &args.paths {
        let relative = utils::project_relative(path, root);
        let line = explain_path(descriptor.rules(), &relative);
        if line.ends_with("(no rule)") {
            unhandled += 1;
        }
        println!("{}", line);
    }

    if unhandled > 0 {
        tracing::warn!(unhandled, "some paths match no rule");
    }
    Ok(())
}

/// `path  kind  [transform > transform]`, or `path  (no rule)`.
pub fn explain_path(rules: &RuleSet, path: &str) -> String {
    match rules.find(path) {
        Some(rule) => {
            let chain: Vec<&str> = rule.chain.iter().map(|t| t.name()).collect();
            format!("{}  {}  [{}]", path, rule.kind, chain.join(" > "))
        }
        None => format!("{}  (no rule)", path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tack_config::PipelineDescriptor;

    #[test]
    fn test_explain_app_script() {
        let d = PipelineDescriptor::for_mode("production", false);
        assert_eq!(
            explain_path(d.rules(), "assets/main/index.js"),
            "assets/main/index.js  app_script  [script]"
        );
    }

    #[test]
    fn test_explain_design_system_with_and_without_watch() {
        let full = PipelineDescriptor::for_mode("production", false);
        let watching = PipelineDescriptor::for_mode("production", true);
        let path = "assets/tailwind/index.css";
        assert!(explain_path(full.rules(), path).ends_with("> purge]"));
        assert!(!explain_path(watching.rules(), path).contains("purge"));
    }

    #[test]
    fn test_explain_unmatched() {
        let d = PipelineDescriptor::for_mode("development", false);
        assert_eq!(explain_path(d.rules(), "README.md"), "README.md  (no rule)");
    }
}
