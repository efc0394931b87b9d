//! Project configuration: layout overrides and default invocation flags.
//!
//! For file discovery, see the `discovery` module.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::descriptor::PipelineDescriptor;
use crate::error::{ConfigError, Result as ConfigResult};
use crate::layout::ProjectLayout;
use crate::mode::Invocation;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TackConfig {
    /// Default build mode; unknown values mean production
    #[serde(
        default,
        deserialize_with = "lenient::mode",
        skip_serializing_if = "Option::is_none"
    )]
    pub mode: Option<String>,

    /// Default watch flag; anything but a boolean is treated as unset
    #[serde(
        default,
        deserialize_with = "lenient::watch",
        skip_serializing_if = "Option::is_none"
    )]
    pub watch: Option<bool>,

    #[serde(default)]
    pub layout: ProjectLayout,

    #[serde(default)]
    pub settings: GlobalSettings,
}

/// Settings that do not affect the descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Log filter used when neither `--verbose`, `--quiet` nor `RUST_LOG` is set
    #[serde(default)]
    pub log_level: Option<String>,
}

impl TackConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use tack_config::TackConfig;
    /// use serde_json::json;
    /// use std::path::PathBuf;
    ///
    /// let config = TackConfig::from_value(json!({
    ///     "mode": "development",
    ///     "layout": { "target_dir": "dist" }
    /// }))
    /// .unwrap();
    /// assert_eq!(config.layout.target_dir, PathBuf::from("dist"));
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Invocation selected from the configured flags.
    pub fn invocation(&self) -> Invocation {
        Invocation::select(self.mode.as_deref(), self.watch)
    }

    /// Descriptor for the configured invocation and layout.
    pub fn descriptor(&self) -> PipelineDescriptor {
        PipelineDescriptor::build(self.invocation(), &self.layout)
    }
}

/// Deserializers for the invocation flags.
///
/// Config files and `TACK_*` variables are free-form, so a flag of the wrong
/// type is dropped with a warning and the invocation falls back to its default.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn mode<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(mode) => Ok(Some(mode)),
            Value::Null => Ok(None),
            other => {
                tracing::warn!(value = %other, "ignoring non-string mode; using production");
                Ok(None)
            }
        }
    }

    pub fn watch<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Bool(watch) => Ok(Some(watch)),
            Value::Null => Ok(None),
            other => {
                tracing::warn!(value = %other, "ignoring non-boolean watch flag");
                Ok(None)
            }
        }
    }
}
