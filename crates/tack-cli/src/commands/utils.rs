//! Shared utilities for command implementations.

use crate::error::{Result, ResultExt};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve a path relative to the project root.
///
/// Absolute paths are returned unchanged.
pub fn resolve_path(path: &Path, root: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Express `path` relative to `root` with forward slashes, the form rule
/// patterns are written against.
pub fn project_relative(path: &Path, root: &Path) -> String {
    let relative = if path.is_absolute() {
        path.strip_prefix(root).unwrap_or(path)
    } else {
        path
    };
    let text = relative.to_string_lossy().replace('\\', "/");
    text.strip_prefix("./").map(str::to_string).unwrap_or(text)
}

/// Read every file, in order.
pub fn read_all(files: &[PathBuf], root: &Path) -> Result<Vec<Vec<u8>>> {
    files
        .iter()
        .map(|file| {
            let path = resolve_path(file, root);
            fs::read(&path).with_path(&path)
        })
        .collect()
}

/// Extension of `path` without the dot, or an empty string.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default()
}
