//! Project-relative locations the descriptor refers to.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where sources, templates and build output live, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLayout {
    /// Output directory; cleared at the start of every build
    #[serde(default = "default_target_dir")]
    pub target_dir: PathBuf,

    /// Theme templates scanned by the pruning step
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,

    /// Template file extensions scanned by the pruning step
    #[serde(default = "default_template_extensions")]
    pub template_extensions: Vec<String>,

    /// Styles under this path segment belong to the design system
    #[serde(default = "default_design_system_dir")]
    pub design_system_dir: String,

    /// Dependencies under `node_modules` that ship untranspiled sources
    #[serde(default = "default_source_dependencies")]
    pub source_dependencies: Vec<String>,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            target_dir: default_target_dir(),
            templates_dir: default_templates_dir(),
            template_extensions: default_template_extensions(),
            design_system_dir: default_design_system_dir(),
            source_dependencies: default_source_dependencies(),
        }
    }
}

pub(crate) fn default_target_dir() -> PathBuf {
    PathBuf::from("public/wp-content/themes/wordpress-boilerplate/assets")
}

pub(crate) fn default_templates_dir() -> PathBuf {
    PathBuf::from("public/app/themes")
}

pub(crate) fn default_template_extensions() -> Vec<String> {
    vec!["html".to_string(), "php".to_string()]
}

pub(crate) fn default_design_system_dir() -> String {
    "assets/tailwind".to_string()
}

pub(crate) fn default_source_dependencies() -> Vec<String> {
    vec!["domestique".to_string(), "ctrly".to_string()]
}
