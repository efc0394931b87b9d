//! Template scanning for the style pruning step.
//!
//! The descriptor only records *where* templates live. Resolving that source
//! walks the filesystem, so it happens when the pruning step runs, not when
//! the descriptor is built.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::Result;

static CLASS_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_:/-]+").expect("class token pattern is valid"));

/// Files whose contents decide which style rules are kept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentSource {
    /// Every file below `root` whose extension is one of `extensions`
    Glob {
        root: PathBuf,
        extensions: Vec<String>,
    },
    /// A fixed list of files
    Files { paths: Vec<PathBuf> },
}

impl ContentSource {
    /// List matching files, relative paths resolved against `project_root`.
    ///
    /// A missing glob root yields no files, the same as an empty directory.
    /// Results are sorted so repeated scans see files in the same order.
    pub fn resolve(&self, project_root: &Path) -> Result<Vec<PathBuf>> {
        match self {
            Self::Files { paths } => {
                let mut files: Vec<PathBuf> =
                    paths.iter().map(|p| project_root.join(p)).collect();
                files.sort();
                Ok(files)
            }
            Self::Glob { root, extensions } => {
                let root = project_root.join(root);
                if !root.is_dir() {
                    warn!(root = %root.display(), "template root does not exist; nothing to scan");
                    return Ok(Vec::new());
                }

                // Symlinked directories are not descended into, so a link cycle
                // cannot break the walk. Dot-entries below the root are skipped.
                let walker = WalkDir::new(&root)
                    .follow_links(false)
                    .sort_by_file_name()
                    .into_iter()
                    .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

                let mut files = Vec::new();
                for entry in walker {
                    let entry = entry?;
                    let is_file = entry.file_type().is_file()
                        || (entry.path_is_symlink() && entry.path().is_file());
                    if !is_file {
                        continue;
                    }
                    let matches = entry
                        .path()
                        .extension()
                        .and_then(|ext| ext.to_str())
                        .is_some_and(|ext| extensions.iter().any(|e| e == ext));
                    if matches {
                        files.push(entry.into_path());
                    }
                }
                files.sort();
                debug!(root = %root.display(), files = files.len(), "resolved template glob");
                Ok(files)
            }
        }
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}

/// Split markup into class-name candidates.
///
/// Keeps `:` and `/` inside tokens so utilities such as `md:w-1/2` or
/// `hover:bg-blue-500` survive intact.
///
/// ```
/// use tack_config::extract_candidates;
///
/// let tokens: Vec<_> = extract_candidates(r#"<div class="md:w-1/2 p-4">"#).collect();
/// assert!(tokens.contains(&"md:w-1/2"));
/// assert!(tokens.contains(&"p-4"));
/// ```
pub fn extract_candidates(content: &str) -> impl Iterator<Item = &str> {
    CLASS_TOKEN.find_iter(content).map(|m| m.as_str())
}

/// Result of scanning a content source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentScan {
    pub files: Vec<PathBuf>,
    pub candidates: BTreeSet<String>,
}

impl ContentScan {
    /// Resolve `source` and collect every class candidate it contains.
    ///
    /// Every run re-reads all files; nothing is cached between builds.
    pub fn run(source: &ContentSource, project_root: &Path) -> Result<Self> {
        let files = source.resolve(project_root)?;
        let mut candidates = BTreeSet::new();

        for file in &files {
            let bytes = fs::read(file)?;
            let content = String::from_utf8_lossy(&bytes);
            candidates.extend(extract_candidates(&content).map(str::to_owned));
        }

        debug!(
            files = files.len(),
            candidates = candidates.len(),
            "scanned template content"
        );
        Ok(Self { files, candidates })
    }

    /// Whether a class name appears in any scanned template.
    pub fn references(&self, class: &str) -> bool {
        self.candidates.contains(class)
    }
}
