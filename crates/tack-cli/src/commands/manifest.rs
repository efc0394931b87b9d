//! Manifest command implementation.
//!
//! Copies built assets into the output directory under content-addressed
//! names and writes the logical-name → hashed-name manifest.

use crate::cli::{AssetSpec, ManifestArgs};
use crate::commands::utils;
use crate::config;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;
use std::fs;
use std::path::{Path, PathBuf};
use tack_config::{
    AssetManifest, MANIFEST_FILE, OutputTemplate, PipelineDescriptor, Transform, clean_output_dir,
    emit_asset,
};

/// Where one asset lands: its filename template and the manifest key prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetTarget {
    pub template: OutputTemplate,
    pub prefix: String,
}

/// Execute the manifest command.
pub fn execute(root: &Path, args: ManifestArgs) -> Result<()> {
    let (_, descriptor) = config::load_descriptor(root, &args.invocation)?;
    let out_dir = utils::resolve_path(
        args.out_dir.as_deref().unwrap_or(descriptor.output.path.as_path()),
        root,
    );
    let manifest_path = out_dir.join(manifest_file_name(&descriptor));

    // Sources may live inside the output directory, so read them before cleaning
    let staged = args
        .assets
        .iter()
        .map(|spec| stage(&descriptor, spec, root))
        .collect::<Result<Vec<_>>>()?;

    if args.clean {
        clean_output_dir(&out_dir)?;
    }

    let mut manifest = if args.merge && manifest_path.is_file() {
        AssetManifest::read(&manifest_path)?
    } else {
        AssetManifest::new()
    };

    let mut summary = Vec::with_capacity(staged.len());
    for asset in &staged {
        summary.push(emit(&out_dir, asset, &mut manifest)?);
    }

    manifest.write(&manifest_path).with_path(&manifest_path)?;

    ui::print_asset_summary(&summary);
    ui::success(&format!(
        "Wrote {} ({} entries)",
        manifest_path.display(),
        manifest.len()
    ));
    Ok(())
}

/// An asset read into memory with its output target chosen.
struct StagedAsset<'a> {
    spec: &'a AssetSpec,
    target: AssetTarget,
    content: Vec<u8>,
}

fn stage<'a>(
    descriptor: &PipelineDescriptor,
    spec: &'a AssetSpec,
    root: &Path,
) -> Result<StagedAsset<'a>> {
    let target = asset_target(descriptor, &spec.logical())?;
    let source = utils::resolve_path(&spec.file, root);
    let content = fs::read(&source).with_path(&source)?;
    Ok(StagedAsset {
        spec,
        target,
        content,
    })
}

fn emit(
    out_dir: &Path,
    staged: &StagedAsset<'_>,
    manifest: &mut AssetManifest,
) -> Result<(String, String, u64)> {
    let StagedAsset {
        spec,
        target,
        content,
    } = staged;
    let asset = emit_asset(out_dir, &target.template, &spec.name, &spec.ext, content)?;
    let key = format!("{}{}", target.prefix, asset.logical);
    tracing::debug!(key = %key, file = %asset.file_name, "recorded asset");
    manifest.insert(key.clone(), asset.file_name.clone());

    Ok((key, asset.file_name, content.len() as u64))
}

/// Manifest filename from the manifest post step.
fn manifest_file_name(descriptor: &PipelineDescriptor) -> PathBuf {
    descriptor
        .manifest_options()
        .map(|options| PathBuf::from(&options.file_name))
        .unwrap_or_else(|| PathBuf::from(MANIFEST_FILE))
}

/// Pick the template for an asset the way the build would name it.
///
/// The logical name is routed through the rule group: files handled by a file
/// transform keep its template and subdirectory, styles use the extracted
/// style template, and scripts use the bundle template.
pub fn asset_target(descriptor: &PipelineDescriptor, logical: &str) -> Result<AssetTarget> {
    let Some(rule) = descriptor.rules().find(logical) else {
        return Err::<AssetTarget, _>(CliError::InvalidArgument(format!(
            "no rule handles '{}'; cannot choose an output name",
            logical
        )))
        .with_hint("run `tack explain <path>` to see how paths are routed");
    };

    for transform in &rule.chain {
        match transform {
            Transform::File(options) => {
                return Ok(AssetTarget {
                    template: OutputTemplate::new(format!(
                        "{}{}",
                        options.output_path,
                        options.name.as_str()
                    )),
                    prefix: options.output_path.clone(),
                });
            }
            Transform::CssExtract => {
                let template = descriptor
                    .extract_css_options()
                    .map(|css| css.filename.clone())
                    .unwrap_or_else(|| descriptor.output.filename.clone());
                return Ok(AssetTarget {
                    template,
                    prefix: String::new(),
                });
            }
            _ => {}
        }
    }

    Ok(AssetTarget {
        template: descriptor.output.filename.clone(),
        prefix: String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{InvocationArgs, parse_asset};
    use tempfile::TempDir;

    fn production() -> PipelineDescriptor {
        PipelineDescriptor::for_mode("production", false)
    }

    #[test]
    fn test_scripts_use_bundle_template() {
        let target = asset_target(&production(), "main.js").unwrap();
        assert_eq!(target.template.as_str(), "[name].[contenthash].js");
        assert_eq!(target.prefix, "");
    }

    #[test]
    fn test_styles_use_extracted_template() {
        let target = asset_target(&production(), "icons.css").unwrap();
        assert_eq!(target.template.as_str(), "[name].[contenthash:8].css");
    }

    #[test]
    fn test_images_keep_subdirectory() {
        let target = asset_target(&production(), "logo.png").unwrap();
        assert_eq!(target.template.as_str(), "img/[name].[hash:8].[ext]");
        assert_eq!(target.prefix, "img/");
    }

    #[test]
    fn test_unhandled_asset_is_rejected() {
        let err = asset_target(&production(), "notes.txt").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("no rule handles 'notes.txt'"));
        assert!(msg.contains("Hint: run `tack explain <path>`"));
    }

    #[test]
    fn test_execute_writes_manifest() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("main.js"), "console.log(1)").unwrap();
        fs::write(dir.path().join("logo.png"), [0x89, b'P', b'N', b'G']).unwrap();

        let args = ManifestArgs {
            assets: vec![
                parse_asset("main.js=main.js").unwrap(),
                parse_asset("logo.png=logo.png").unwrap(),
            ],
            invocation: InvocationArgs::default(),
            out_dir: Some(PathBuf::from("out")),
            clean: true,
            merge: false,
        };
        execute(dir.path(), args).unwrap();

        let manifest = AssetManifest::read(&dir.path().join("out/manifest.json")).unwrap();
        let main = manifest.get("main.js").unwrap();
        let logo = manifest.get("img/logo.png").unwrap();
        assert!(main.starts_with("main.") && main.ends_with(".js"));
        assert!(logo.starts_with("img/logo."));
        assert!(dir.path().join("out").join(main).is_file());
        assert!(dir.path().join("out").join(logo).is_file());
    }

    #[test]
    fn test_clean_keeps_sources_inside_output_dir() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("main.js"), "console.log(2)").unwrap();

        let args = ManifestArgs {
            assets: vec![parse_asset("main.js=out/main.js").unwrap()],
            invocation: InvocationArgs::default(),
            out_dir: Some(PathBuf::from("out")),
            clean: true,
            merge: false,
        };
        execute(dir.path(), args).unwrap();

        assert!(!out.join("main.js").exists());
        let manifest = AssetManifest::read(&out.join("manifest.json")).unwrap();
        let main = manifest.get("main.js").unwrap();
        assert_eq!(fs::read_to_string(out.join(main)).unwrap(), "console.log(2)");
    }

    #[test]
    fn test_unhandled_asset_leaves_output_dir_alone() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("keep.js"), "x").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let args = ManifestArgs {
            assets: vec![parse_asset("notes.txt=notes.txt").unwrap()],
            invocation: InvocationArgs::default(),
            out_dir: Some(PathBuf::from("out")),
            clean: true,
            merge: false,
        };
        assert!(execute(dir.path(), args).is_err());
        assert!(out.join("keep.js").is_file());
    }

    #[test]
    fn test_merge_keeps_existing_entries() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.js"), "a").unwrap();
        fs::write(dir.path().join("b.css"), "b").unwrap();

        let run = |pair: &str, merge: bool| {
            execute(
                dir.path(),
                ManifestArgs {
                    assets: vec![parse_asset(pair).unwrap()],
                    invocation: InvocationArgs::default(),
                    out_dir: Some(PathBuf::from("out")),
                    clean: false,
                    merge,
                },
            )
            .unwrap();
        };
        run("main.js=a.js", false);
        run("icons.css=b.css", true);

        let manifest = AssetManifest::read(&dir.path().join("out/manifest.json")).unwrap();
        assert_eq!(manifest.len(), 2);
    }
}
