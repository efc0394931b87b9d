use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::hash::content_hash;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(name|ext|contenthash|hash)(?::(\d+))?\]").expect("placeholder pattern is valid")
});

/// Filename template resolved when an artifact is written.
///
/// Supported placeholders: `[name]`, `[ext]`, `[contenthash]`, `[hash]`, and
/// the truncated forms `[contenthash:N]` / `[hash:N]`. Both hash placeholders
/// resolve to the digest of the artifact's own bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputTemplate(String);

impl OutputTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the template mentions `placeholder` (with or without a length).
    pub fn has_placeholder(&self, placeholder: &str) -> bool {
        PLACEHOLDER
            .captures_iter(&self.0)
            .any(|caps| &caps[1] == placeholder)
    }

    /// Template embeds both the bundle name and the artifact content hash.
    pub fn is_content_addressed(&self) -> bool {
        self.has_placeholder("name") && self.has_placeholder("contenthash")
    }

    /// Resolve the template for an artifact.
    ///
    /// ```
    /// use tack_config::OutputTemplate;
    ///
    /// let template = OutputTemplate::new("[name].[contenthash:8].css");
    /// let first = template.render("icons", "css", b".icon{}");
    /// assert!(first.starts_with("icons."));
    /// assert_eq!(first.len(), "icons.".len() + 8 + ".css".len());
    /// assert_eq!(first, template.render("icons", "css", b".icon{}"));
    /// ```
    pub fn render(&self, name: &str, ext: &str, content: &[u8]) -> String {
        self.render_digest(name, ext, &content_hash(content))
    }

    /// Resolve the template with an already computed hex digest.
    pub fn render_digest(&self, name: &str, ext: &str, digest: &str) -> String {
        PLACEHOLDER
            .replace_all(&self.0, |caps: &Captures<'_>| match &caps[1] {
                "name" => name.to_string(),
                "ext" => ext.trim_start_matches('.').to_string(),
                _ => {
                    let len = caps
                        .get(2)
                        .and_then(|m| m.as_str().parse::<usize>().ok())
                        .unwrap_or(digest.len())
                        .max(1)
                        .min(digest.len());
                    digest[..len].to_string()
                }
            })
            .into_owned()
    }
}

impl fmt::Display for OutputTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OutputTemplate {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Where and how entry bundles and split chunks are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Output directory, relative to the project root
    pub path: PathBuf,

    /// Filename template for entry bundles
    pub filename: OutputTemplate,

    /// Filename template for split chunks
    pub chunk_filename: OutputTemplate,
}

impl OutputOptions {
    pub(crate) fn scripts(path: PathBuf) -> Self {
        Self {
            path,
            filename: OutputTemplate::new("[name].[contenthash].js"),
            chunk_filename: OutputTemplate::new("[name].[contenthash].js"),
        }
    }
}
