//! The asset manifest: logical asset name to final hashed filename.
//!
//! Theme templates read this file to find the current bundle names, so its
//! shape is a flat JSON object of strings and must stay that way.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default manifest filename inside the output directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// `{ logicalName: hashedPath }`, sorted by logical name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetManifest(BTreeMap<String, String>);

impl AssetManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an asset; returns the previous hashed path for the name, if any.
    pub fn insert(&mut self, logical: impl Into<String>, hashed: impl Into<String>) -> Option<String> {
        self.0.insert(logical.into(), hashed.into())
    }

    pub fn get(&self, logical: &str) -> Option<&str> {
        self.0.get(logical).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut json = self.to_json_pretty()?;
        json.push('\n');
        fs::write(path, json)?;
        tracing::debug!(path = %path.display(), assets = self.len(), "wrote manifest");
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AssetManifest {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
