//! Build mode and invocation flags.
//!
//! Every branch in descriptor construction reads from an [`Invocation`], which
//! is selected once from the raw `mode`/`watch` inputs and never changes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Build mode for a single invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Fast, uncompressed builds
    Development,
    /// Optimized builds (default)
    #[default]
    Production,
}

impl BuildMode {
    /// Normalize a raw mode flag.
    ///
    /// Only the exact string `"development"` selects development; anything
    /// else, including a missing flag, falls back to production.
    ///
    /// ```
    /// use tack_config::BuildMode;
    ///
    /// assert_eq!(BuildMode::from_flag(Some("development")), BuildMode::Development);
    /// assert_eq!(BuildMode::from_flag(Some("staging")), BuildMode::Production);
    /// assert_eq!(BuildMode::from_flag(None), BuildMode::Production);
    /// ```
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("development") => Self::Development,
            _ => Self::Production,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

impl From<&str> for BuildMode {
    fn from(value: &str) -> Self {
        Self::from_flag(Some(value))
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The normalized inputs of one build invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Invocation {
    pub mode: BuildMode,

    /// Incremental rebuild mode; disables watch-incompatible steps
    #[serde(default)]
    pub watch: bool,
}

impl Invocation {
    pub fn new(mode: BuildMode, watch: bool) -> Self {
        Self { mode, watch }
    }

    /// Select an invocation from argv-style inputs. Never fails.
    pub fn select(mode: Option<&str>, watch: Option<bool>) -> Self {
        Self {
            mode: BuildMode::from_flag(mode),
            watch: watch.unwrap_or(false),
        }
    }

    /// Whether design-system styles get the unused-rule pruning step.
    ///
    /// Pruning scans every template on disk, so it is skipped while watching.
    pub fn prunes_styles(&self) -> bool {
        !self.watch
    }

    /// Whether images get the compression step.
    pub fn compresses_images(&self) -> bool {
        self.mode.is_production()
    }
}
