//! Hash command implementation.
//!
//! Prints the content-addressed filename a template renders to for the given
//! bytes. The same bytes always produce the same name.

use crate::cli::HashArgs;
use crate::cli::InvocationArgs;
use crate::commands::utils;
use crate::config;
use crate::error::{CliError, Result};
use std::path::Path;
use tack_config::{OutputTemplate, content_hash_all};

/// Execute the hash command.
pub fn execute(root: &Path, args: HashArgs) -> Result<()> {
    println!("{}", render(root, &args)?);
    Ok(())
}

/// The filename `execute` prints.
pub fn render(root: &Path, args: &HashArgs) -> Result<String> {
    let template = match &args.template {
        Some(template) => OutputTemplate::new(template.as_str()),
        None => {
            let (_, descriptor) = config::load_descriptor(root, &InvocationArgs::default())?;
            descriptor.output.filename
        }
    };

    if !template.has_placeholder("contenthash") && !template.has_placeholder("hash") {
        tracing::warn!(template = %template, "template has no hash placeholder");
    }

    let ext = match &args.ext {
        Some(ext) => ext.trim_start_matches('.').to_string(),
        None => args
            .files
            .first()
            .map(|file| utils::extension_of(file))
            .ok_or_else(|| CliError::InvalidArgument("at least one file is required".into()))?,
    };

    let parts = utils::read_all(&args.files, root)?;
    let digest = content_hash_all(parts.iter().map(Vec::as_slice));
    Ok(template.render_digest(&args.name, &ext, &digest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn hash_args(files: &[&str], template: Option<&str>) -> HashArgs {
        HashArgs {
            files: files.iter().map(PathBuf::from).collect(),
            name: "main".to_string(),
            template: template.map(str::to_string),
            ext: None,
        }
    }

    #[test]
    fn test_default_template_is_bundle_template() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.js"), "let a = 1;").unwrap();
        let name = render(dir.path(), &hash_args(&["a.js"], None)).unwrap();
        assert!(name.starts_with("main."));
        assert!(name.ends_with(".js"));
    }

    #[test]
    fn test_same_bytes_same_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.css"), ".a{}").unwrap();
        fs::write(dir.path().join("b.css"), ".a{}").unwrap();
        let template = Some("[name].[contenthash:8].[ext]");
        assert_eq!(
            render(dir.path(), &hash_args(&["a.css"], template)).unwrap(),
            render(dir.path(), &hash_args(&["b.css"], template)).unwrap()
        );
    }

    #[test]
    fn test_several_files_hash_as_one_artifact() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.js"), "let a;").unwrap();
        fs::write(dir.path().join("b.js"), "let b;").unwrap();
        fs::write(dir.path().join("ab.js"), "let a;let b;").unwrap();
        assert_eq!(
            render(dir.path(), &hash_args(&["a.js", "b.js"], None)).unwrap(),
            render(dir.path(), &hash_args(&["ab.js"], None)).unwrap()
        );
    }

    #[test]
    fn test_order_of_files_matters() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.js"), "a").unwrap();
        fs::write(dir.path().join("b.js"), "b").unwrap();
        assert_ne!(
            render(dir.path(), &hash_args(&["a.js", "b.js"], None)).unwrap(),
            render(dir.path(), &hash_args(&["b.js", "a.js"], None)).unwrap()
        );
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(render(dir.path(), &hash_args(&["nope.js"], None)).is_err());
    }
}
