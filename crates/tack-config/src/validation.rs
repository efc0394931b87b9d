//! Pluggable descriptor validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for library use).

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::descriptor::{ICONS_BUNDLE, MAIN_BUNDLE, PipelineDescriptor, PostStep};
use crate::error::{ConfigError, Result};

/// Trait for pluggable descriptor validation strategies
pub trait ConfigValidator {
    fn validate(&self, descriptor: &PipelineDescriptor) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use tack_config::{ConfigValidator, PipelineDescriptor, SchemaValidator};
///
/// let descriptor = PipelineDescriptor::for_mode("production", false);
/// SchemaValidator.validate(&descriptor).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, descriptor: &PipelineDescriptor) -> Result<()> {
        let names: Vec<&str> = descriptor.entry.names().collect();
        if names != [MAIN_BUNDLE, ICONS_BUNDLE] {
            return Err(ConfigError::schema(
                format!("entry bundles must be exactly [main, icons], found {names:?}"),
                "Only the script and icon bundles are supported",
            ));
        }

        for (name, sources) in descriptor.entry.iter() {
            if sources.is_empty() {
                return Err(ConfigError::schema(
                    format!("entry bundle '{name}' has no sources"),
                    "List at least one source path per bundle",
                ));
            }
        }

        for (label, template) in [
            ("output.filename", &descriptor.output.filename),
            ("output.chunk_filename", &descriptor.output.chunk_filename),
        ] {
            if !template.is_content_addressed() {
                return Err(ConfigError::schema(
                    format!("{label} '{template}' must contain [name] and [contenthash]"),
                    "Content-addressed names keep caches valid across deploys",
                ));
            }
        }

        if let Some(css) = descriptor.extract_css_options() {
            if !css.filename.is_content_addressed() {
                return Err(ConfigError::schema(
                    format!("extracted style filename '{}' must contain [name] and [contenthash]", css.filename),
                    "Use a template such as [name].[contenthash:8].css",
                ));
            }
        }

        let rules = descriptor.rules();
        if rules.is_empty() {
            return Err(ConfigError::schema(
                "rule group is empty",
                "At least one rule is required",
            ));
        }
        let mut seen = HashSet::new();
        for rule in rules.iter() {
            if !seen.insert(rule.kind) {
                return Err(ConfigError::schema(
                    format!("rule '{}' appears more than once", rule.kind),
                    "Each rule kind may appear once in the group",
                ));
            }
            if rule.chain.is_empty() {
                return Err(ConfigError::schema(
                    format!("rule '{}' has an empty transform chain", rule.kind),
                    "Every rule needs at least one transform",
                ));
            }
        }

        if !matches!(descriptor.plugins.first(), Some(PostStep::Clean(_))) {
            return Err(ConfigError::schema(
                "the clean step must run first",
                "Put the clean step at the head of the post-step list",
            ));
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs schema validation, then checks every entry source exists on disk.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, descriptor: &PipelineDescriptor) -> Result<()> {
        SchemaValidator.validate(descriptor)?;

        for source in descriptor.entry.sources() {
            let path = self.root.join(source);
            if !path.is_file() {
                return Err(ConfigError::EntryNotFound { path });
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(descriptor: &PipelineDescriptor) -> Result<()> {
    SchemaValidator.validate(descriptor)
}

/// Convenience function for filesystem validation
pub fn validate_fs(descriptor: &PipelineDescriptor, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(descriptor)
}
