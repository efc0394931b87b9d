//! File-based config discovery for CLI use
//!
//! Finds a project's `tack.toml` (or the `tack` field of `package.json`) and
//! layers it over the built-in defaults with figment.

use std::fs;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Format, Json, Serialized, Toml};
use serde_json::Value;

use crate::config::TackConfig;
use crate::error::{ConfigError, Result};

/// Name of the dedicated config file.
pub const CONFIG_FILE: &str = "tack.toml";

/// Field holding the config inside `package.json`.
pub const PACKAGE_FIELD: &str = "tack";

/// File-based configuration discovery
///
/// # Example
///
/// ```no_run
/// use tack_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: tack.toml
    /// 2. package.json (tack field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        let content = fs::read_to_string(&pkg_path).ok()?;
        let parsed: Value = serde_json::from_str(&content).ok()?;
        parsed
            .get(PACKAGE_FIELD)
            .is_some_and(|field| !field.is_null())
            .then_some(pkg_path)
    }

    /// Defaults merged with the discovered file, if any.
    ///
    /// Callers can merge further providers (environment, flags) before
    /// extracting.
    pub fn figment(&self) -> Figment {
        let figment = Figment::from(Serialized::defaults(TackConfig::default()));
        match self.find() {
            Some(path) if is_package_json(&path) => {
                tracing::debug!(path = %path.display(), "using package.json config");
                figment.merge(Figment::from(Json::file(path)).focus(PACKAGE_FIELD))
            }
            Some(path) => {
                tracing::debug!(path = %path.display(), "using toml config");
                figment.merge(Toml::file(path))
            }
            None => figment,
        }
    }

    /// Load the discovered config, or defaults when there is no file.
    pub fn load(&self) -> Result<TackConfig> {
        extract(&self.figment())
    }

    /// Load config, failing when no file exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load_required(&self) -> Result<TackConfig> {
        self.find().ok_or(ConfigError::NotFound)?;
        self.load()
    }
}

/// Extract a [`TackConfig`] from a layered figment.
pub fn extract(figment: &Figment) -> Result<TackConfig> {
    figment.extract().map_err(|e| ConfigError::InvalidValue {
        field: e
            .path
            .last()
            .cloned()
            .unwrap_or_else(|| "config".to_string()),
        hint: Some(e.to_string()),
    })
}

fn is_package_json(path: &Path) -> bool {
    path.file_name() == Some(std::ffi::OsStr::new("package.json"))
}
