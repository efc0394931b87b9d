//! Writing content-addressed artifacts and clearing the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::descriptor::OutputTemplate;
use crate::error::{ConfigError, Result};
use crate::manifest::AssetManifest;

/// An artifact written under its content-addressed name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmittedAsset {
    /// Manifest key, e.g. `main.js`
    pub logical: String,
    /// Rendered filename relative to the output directory
    pub file_name: String,
    /// Absolute or root-relative location on disk
    pub path: PathBuf,
}

/// Manifest key for a bundle or asset: `name.ext`.
pub fn logical_name(name: &str, ext: &str) -> String {
    let ext = ext.trim_start_matches('.');
    if ext.is_empty() {
        name.to_string()
    } else {
        format!("{name}.{ext}")
    }
}

/// Render `template` for `content` and write it below `out_dir`.
///
/// Writing the same bytes twice lands on the same path.
pub fn emit_asset(
    out_dir: &Path,
    template: &OutputTemplate,
    name: &str,
    ext: &str,
    content: &[u8],
) -> Result<EmittedAsset> {
    let file_name = template.render(name, ext, content);
    let path = out_dir.join(&file_name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    debug!(file = %file_name, bytes = content.len(), "emitted asset");

    Ok(EmittedAsset {
        logical: logical_name(name, ext),
        file_name,
        path,
    })
}

impl AssetManifest {
    /// Record an emitted asset under its logical name.
    pub fn record(&mut self, asset: &EmittedAsset) {
        self.insert(asset.logical.clone(), asset.file_name.clone());
    }
}

/// Remove everything inside `out_dir`, keeping the directory itself.
///
/// Creates the directory when it does not exist. Destructive: there is no
/// recovery of partial output.
pub fn clean_output_dir(out_dir: &Path) -> Result<()> {
    if out_dir.exists() {
        if !out_dir.is_dir() {
            return Err(ConfigError::OutputNotDirectory {
                path: out_dir.to_path_buf(),
            });
        }

        let mut removed = 0usize;
        for entry in fs::read_dir(out_dir)? {
            let path = entry?.path();
            if path.is_dir() {
                fs::remove_dir_all(&path)?;
            } else {
                fs::remove_file(&path)?;
            }
            removed += 1;
        }
        info!(dir = %out_dir.display(), removed, "cleaned output directory");
    } else {
        fs::create_dir_all(out_dir)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn logical_names_strip_leading_dot() {
        assert_eq!(logical_name("main", ".js"), "main.js");
        assert_eq!(logical_name("icons", "css"), "icons.css");
        assert_eq!(logical_name("LICENSE", ""), "LICENSE");
    }

    #[test]
    fn same_bytes_same_file() {
        let dir = TempDir::new().unwrap();
        let template = OutputTemplate::new("[name].[contenthash:8].css");
        let a = emit_asset(dir.path(), &template, "icons", "css", b".i{}").unwrap();
        let b = emit_asset(dir.path(), &template, "icons", "css", b".i{}").unwrap();
        assert_eq!(a, b);
        assert_eq!(fs::read(&a.path).unwrap(), b".i{}");
    }

    #[test]
    fn nested_templates_create_directories() {
        let dir = TempDir::new().unwrap();
        let template = OutputTemplate::new("img/[name].[hash:8].[ext]");
        let asset = emit_asset(dir.path(), &template, "logo", "png", b"\x89PNG").unwrap();
        assert!(asset.file_name.starts_with("img/logo."));
        assert!(asset.path.is_file());
    }

    #[test]
    fn record_uses_logical_name() {
        let dir = TempDir::new().unwrap();
        let template = OutputTemplate::new("[name].[contenthash].js");
        let asset = emit_asset(dir.path(), &template, "main", "js", b"1").unwrap();
        let mut manifest = AssetManifest::new();
        manifest.record(&asset);
        assert_eq!(manifest.get("main.js"), Some(asset.file_name.as_str()));
    }

    #[test]
    fn clean_keeps_directory_but_removes_contents() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("assets");
        fs::create_dir_all(out.join("img")).unwrap();
        fs::write(out.join("main.1.js"), "x").unwrap();
        fs::write(out.join("img/logo.png"), "x").unwrap();

        clean_output_dir(&out).unwrap();
        assert!(out.is_dir());
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn clean_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("missing/assets");
        clean_output_dir(&out).unwrap();
        assert!(out.is_dir());
    }

    #[test]
    fn clean_rejects_files() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("assets");
        fs::write(&file, "x").unwrap();
        assert!(matches!(
            clean_output_dir(&file),
            Err(ConfigError::OutputNotDirectory { .. })
        ));
    }
}
