use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const MAIN_BUNDLE: &str = "main";
pub const ICONS_BUNDLE: &str = "icons";

/// Bundle name to source paths, in execution/concatenation order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryMap(IndexMap<String, Vec<PathBuf>>);

impl EntryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The theme's two bundles: the script bundle (public-path shim,
    /// polyfills, application) and the icon bundle (stylesheet, sprite).
    pub(crate) fn theme() -> Self {
        let mut entries = Self::new();
        entries.insert(
            MAIN_BUNDLE,
            [
                "assets/webpack-public-path.js",
                "assets/polyfills.js",
                "assets/main/index.js",
            ],
        );
        entries.insert(
            ICONS_BUNDLE,
            ["assets/icons/index.css", "assets/icons/symbol-defs.svg"],
        );
        entries
    }

    pub fn insert<I, P>(&mut self, name: impl Into<String>, sources: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.0
            .insert(name.into(), sources.into_iter().map(Into::into).collect());
    }

    pub fn get(&self, name: &str) -> Option<&[PathBuf]> {
        self.0.get(name).map(Vec::as_slice)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PathBuf])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Every source path of every bundle, in order.
    pub fn sources(&self) -> impl Iterator<Item = &PathBuf> {
        self.0.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_entries_keep_order() {
        let entries = EntryMap::theme();
        assert_eq!(entries.names().collect::<Vec<_>>(), [MAIN_BUNDLE, ICONS_BUNDLE]);
        let main = entries.get(MAIN_BUNDLE).unwrap();
        assert_eq!(main[0], PathBuf::from("assets/webpack-public-path.js"));
        assert_eq!(main[2], PathBuf::from("assets/main/index.js"));
        assert_eq!(entries.sources().count(), 5);
    }

    #[test]
    fn serializes_as_object_in_insertion_order() {
        let json = serde_json::to_string(&EntryMap::theme()).unwrap();
        assert!(json.find("\"main\"").unwrap() < json.find("\"icons\"").unwrap());
    }
}
