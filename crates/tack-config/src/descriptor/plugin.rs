use serde::{Deserialize, Serialize};

use super::output::OutputTemplate;
use crate::hash::MODULE_ID_LENGTH;

/// Whole-build step run after every rule has been applied, in list order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "plugin", content = "options", rename_all = "kebab-case")]
pub enum PostStep {
    /// Delete prior output before writing anything
    Clean(CleanOptions),
    /// Derive module identifiers from module paths
    HashedModuleIds(HashedModuleIdsOptions),
    /// Write referenced styles to standalone files
    ExtractCss(ExtractCssOptions),
    /// Write the logical-name to hashed-path manifest
    Manifest(ManifestOptions),
}

impl PostStep {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Clean(_) => "clean",
            Self::HashedModuleIds(_) => "hashed-module-ids",
            Self::ExtractCss(_) => "extract-css",
            Self::Manifest(_) => "manifest",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanOptions {
    /// Globs of paths to delete, relative to the project root
    pub paths: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashedModuleIdsOptions {
    pub digest_length: usize,
}

impl Default for HashedModuleIdsOptions {
    fn default() -> Self {
        Self {
            digest_length: MODULE_ID_LENGTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractCssOptions {
    pub filename: OutputTemplate,
    pub chunk_filename: OutputTemplate,
}

impl Default for ExtractCssOptions {
    fn default() -> Self {
        Self {
            filename: OutputTemplate::new("[name].[contenthash:8].css"),
            chunk_filename: OutputTemplate::new("[name].[contenthash:8].css"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestOptions {
    /// Manifest filename inside the output directory
    pub file_name: String,
}

impl Default for ManifestOptions {
    fn default() -> Self {
        Self {
            file_name: crate::manifest::MANIFEST_FILE.to_string(),
        }
    }
}
