//! The pipeline descriptor and its builder.
//!
//! [`build`] is a pure function from an [`Invocation`] and a [`ProjectLayout`]
//! to an immutable [`PipelineDescriptor`]. It reads nothing from disk and
//! cannot fail; the engine that consumes the descriptor reports I/O and
//! transform errors.

mod entry;
mod optimization;
mod output;
mod plugin;
mod rule;
mod transform;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

pub use entry::{EntryMap, ICONS_BUNDLE, MAIN_BUNDLE};
pub use optimization::{
    DiscardComments, Minimizer, OptimizationOptions, ResolveOptions, RuntimeChunk,
};
pub use output::{OutputOptions, OutputTemplate};
pub use plugin::{
    CleanOptions, ExtractCssOptions, HashedModuleIdsOptions, ManifestOptions, PostStep,
};
pub use rule::{PathPattern, PathPredicate, Rule, RuleKind, RuleSet};
pub use transform::{
    AutoprefixerOptions, BuiltIns, CssOptions, Extractor, ExtractorSpec, FileOptions,
    ImageCompressOptions, ImageOptimizer, ModuleSyntax, PostCssOptions, PostCssPlugin,
    PresetEnvOptions, PurgeOptions, ScriptOptions, Transform,
};

use crate::error::{ConfigError, Result};
use crate::layout::ProjectLayout;
use crate::mode::{BuildMode, Invocation};
use crate::scan::ContentSource;

const SCRIPT_PATTERN: &str = r"\.(js|mjs)$";
const STYLE_PATTERN: &str = r"\.css$";
const IMAGE_PATTERN: &str = r"(?i)\.(gif|png|jpe?g|svg)$";
const FONT_PATTERN: &str = r"\.(woff|woff2|eot|ttf|otf)$";

/// Complete description of one build, consumed by the bundling engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineDescriptor {
    pub mode: BuildMode,

    #[serde(default)]
    pub watch: bool,

    pub entry: EntryMap,

    pub output: OutputOptions,

    pub optimization: OptimizationOptions,

    pub resolve: ResolveOptions,

    pub module: ModuleOptions,

    /// Post-build steps, in execution order
    pub plugins: Vec<PostStep>,
}

/// Per-file processing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleOptions {
    /// Importing a missing export is an error rather than a warning
    pub strict_export_presence: bool,

    pub rules: RuleSet,
}

impl PipelineDescriptor {
    /// Build a descriptor; see [`build`].
    pub fn build(invocation: Invocation, layout: &ProjectLayout) -> Self {
        build(invocation, layout)
    }

    /// Build from argv-style inputs with the default layout.
    ///
    /// ```
    /// use tack_config::PipelineDescriptor;
    ///
    /// let fallback = PipelineDescriptor::for_mode("bogus-mode", false);
    /// assert_eq!(fallback, PipelineDescriptor::for_mode("production", false));
    /// ```
    pub fn for_mode(mode: &str, watch: bool) -> Self {
        build(
            Invocation::select(Some(mode), Some(watch)),
            &ProjectLayout::default(),
        )
    }

    pub fn invocation(&self) -> Invocation {
        Invocation::new(self.mode, self.watch)
    }

    pub fn rules(&self) -> &RuleSet {
        &self.module.rules
    }

    /// Post step of the given name (see [`PostStep::name`]).
    pub fn post_step(&self, name: &str) -> Option<&PostStep> {
        self.plugins.iter().find(|step| step.name() == name)
    }

    pub fn manifest_options(&self) -> Option<&ManifestOptions> {
        self.plugins.iter().find_map(|step| match step {
            PostStep::Manifest(options) => Some(options),
            _ => None,
        })
    }

    pub fn extract_css_options(&self) -> Option<&ExtractCssOptions> {
        self.plugins.iter().find_map(|step| match step {
            PostStep::ExtractCss(options) => Some(options),
            _ => None,
        })
    }

    /// Content source of the pruning step, when pruning is enabled.
    pub fn purge_content(&self) -> Option<&ContentSource> {
        self.rules()
            .get(RuleKind::DesignSystemStyle)?
            .chain
            .iter()
            .find_map(|t| match t {
                Transform::Purge(options) => Some(&options.content),
                _ => None,
            })
    }

    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "descriptor".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Assemble the descriptor for one invocation.
///
/// Two calls with equal inputs return equal descriptors.
pub fn build(invocation: Invocation, layout: &ProjectLayout) -> PipelineDescriptor {
    debug!(
        mode = %invocation.mode,
        watch = invocation.watch,
        "building pipeline descriptor"
    );

    PipelineDescriptor {
        mode: invocation.mode,
        watch: invocation.watch,
        entry: EntryMap::theme(),
        output: OutputOptions::scripts(layout.target_dir.clone()),
        optimization: OptimizationOptions::default(),
        resolve: ResolveOptions::default(),
        module: ModuleOptions {
            strict_export_presence: true,
            rules: rules(invocation, layout),
        },
        plugins: post_steps(layout),
    }
}

fn rules(invocation: Invocation, layout: &ProjectLayout) -> RuleSet {
    let scripts = PathPattern::builtin(SCRIPT_PATTERN);
    let styles = PathPattern::builtin(STYLE_PATTERN);

    let mut design_system_chain = transform::style_chain();
    if invocation.prunes_styles() {
        design_system_chain.push(Transform::Purge(PurgeOptions {
            content: ContentSource::Glob {
                root: layout.templates_dir.clone(),
                extensions: layout.template_extensions.clone(),
            },
            extractors: vec![ExtractorSpec {
                extractor: Extractor::TailwindClasses,
                extensions: layout.template_extensions.clone(),
            }],
        }));
    }

    let mut image_chain = vec![Transform::File(FileOptions::hashed("img/"))];
    if invocation.compresses_images() {
        image_chain.push(Transform::ImageCompress(ImageCompressOptions::default()));
    }

    RuleSet::new(vec![
        Rule::new(
            RuleKind::AppScript,
            scripts.clone(),
            vec![Transform::Script(ScriptOptions::application())],
        )
        .exclude(PathPredicate::Dependency {
            except: layout.source_dependencies.clone(),
        }),
        Rule::new(
            RuleKind::VendorScript,
            scripts,
            vec![Transform::Script(ScriptOptions::dependency())],
        ),
        Rule::new(RuleKind::DesignSystemStyle, styles.clone(), design_system_chain).include(
            PathPredicate::Pattern {
                pattern: PathPattern::literal(&layout.design_system_dir),
            },
        ),
        Rule::new(RuleKind::Style, styles, transform::style_chain()),
        Rule::new(
            RuleKind::Image,
            PathPattern::builtin(IMAGE_PATTERN),
            image_chain,
        ),
        Rule::new(
            RuleKind::Font,
            PathPattern::builtin(FONT_PATTERN),
            vec![Transform::File(FileOptions::hashed("fonts/"))],
        ),
    ])
}

fn post_steps(layout: &ProjectLayout) -> Vec<PostStep> {
    let target = layout.target_dir.to_string_lossy().replace('\\', "/");
    vec![
        PostStep::Clean(CleanOptions {
            paths: vec![format!("{}/*", target.trim_end_matches('/'))],
        }),
        PostStep::HashedModuleIds(HashedModuleIdsOptions::default()),
        PostStep::ExtractCss(ExtractCssOptions::default()),
        PostStep::Manifest(ManifestOptions::default()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn production() -> PipelineDescriptor {
        PipelineDescriptor::for_mode("production", false)
    }

    #[test]
    fn rule_group_order_is_fixed() {
        let kinds: Vec<_> = production().rules().iter().map(|r| r.kind).collect();
        assert_eq!(kinds, RuleKind::ALL);
    }

    #[test]
    fn post_steps_run_in_order() {
        let names: Vec<_> = production().plugins.iter().map(PostStep::name).collect();
        assert_eq!(names, ["clean", "hashed-module-ids", "extract-css", "manifest"]);
    }

    #[test]
    fn clean_targets_output_contents() {
        let Some(PostStep::Clean(clean)) = production().post_step("clean").cloned() else {
            panic!("clean step missing");
        };
        assert_eq!(
            clean.paths,
            ["public/wp-content/themes/wordpress-boilerplate/assets/*"]
        );
    }

    #[test]
    fn purge_content_only_without_watch() {
        assert!(production().purge_content().is_some());
        assert!(PipelineDescriptor::for_mode("production", true)
            .purge_content()
            .is_none());
    }

    #[test]
    fn custom_layout_flows_into_rules() {
        let layout = ProjectLayout {
            design_system_dir: "styles/ds".to_string(),
            ..ProjectLayout::default()
        };
        let descriptor = build(Invocation::default(), &layout);
        assert_eq!(
            descriptor.rules().find("styles/ds/base.css").unwrap().kind,
            RuleKind::DesignSystemStyle
        );
        assert_eq!(
            descriptor.rules().find("assets/tailwind/base.css").unwrap().kind,
            RuleKind::Style
        );
    }

    #[test]
    fn descriptor_round_trips_through_json() {
        let descriptor = production();
        let json = descriptor.to_json_pretty().unwrap();
        let back: PipelineDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, descriptor);
    }

    #[test]
    fn value_exposes_one_of_group() {
        let value = production().to_value().unwrap();
        assert_eq!(value["module"]["rules"]["oneOf"].as_array().unwrap().len(), 6);
        assert_eq!(value["mode"], "production");
    }
}
