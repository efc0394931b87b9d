//! Error types for configuration loading, validation and asset I/O.
//!
//! Building a descriptor never fails. These errors come from the surfaces
//! around it: config discovery, manifest files, content scans and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Filesystem validation errors (for CLI use)
    #[error("entry source not found: {}", path.display())]
    EntryNotFound { path: PathBuf },

    #[error("output path exists but is not a directory: {}", path.display())]
    OutputNotDirectory { path: PathBuf },

    #[error("content root not found: {}", path.display())]
    ContentRootNotFound { path: PathBuf },

    // Config parsing/loading errors
    #[error("config not found")]
    NotFound,

    #[error("invalid config value for '{field}'{}", hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    // Schema validation errors (no filesystem checks)
    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    #[error("manifest error: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("failed to walk {}: {message}", path.display())]
    Walk { path: PathBuf, message: String },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn schema(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::SchemaValidation {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Hint attached to the error, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::InvalidValue { hint, .. } | Self::SchemaValidation { hint, .. } => {
                hint.as_deref()
            }
            _ => None,
        }
    }
}

impl From<walkdir::Error> for ConfigError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(PathBuf::from).unwrap_or_default();
        match err.into_io_error() {
            Some(io) if io.kind() == std::io::ErrorKind::NotFound => {
                Self::ContentRootNotFound { path }
            }
            Some(io) => Self::Walk {
                path,
                message: io.to_string(),
            },
            None => Self::Walk {
                path,
                message: "filesystem loop detected".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_includes_hint() {
        let err = ConfigError::InvalidValue {
            field: "layout".to_string(),
            hint: Some("expected a table".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "invalid config value for 'layout': expected a table"
        );
        assert_eq!(err.hint(), Some("expected a table"));
    }

    #[test]
    fn invalid_value_without_hint() {
        let err = ConfigError::InvalidValue {
            field: "layout".to_string(),
            hint: None,
        };
        assert_eq!(err.to_string(), "invalid config value for 'layout'");
        assert!(err.hint().is_none());
    }

    #[test]
    fn entry_not_found_displays_path() {
        let err = ConfigError::EntryNotFound {
            path: PathBuf::from("assets/main/index.js"),
        };
        assert!(err.to_string().contains("assets/main/index.js"));
    }
}
