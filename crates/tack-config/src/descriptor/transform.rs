use serde::{Deserialize, Serialize};

use super::output::OutputTemplate;
use crate::scan::ContentSource;

/// One unit of work in a rule's chain, with its typed option payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "loader", content = "options", rename_all = "kebab-case")]
pub enum Transform {
    /// Environment-targeted script downleveling
    Script(ScriptOptions),
    /// Route the module's styles to the CSS extraction step
    CssExtract,
    /// Resolve `@import` and `url()` references
    Css(CssOptions),
    /// PostCSS plugin pass
    PostCss(PostCssOptions),
    /// Remove style rules no template references
    Purge(PurgeOptions),
    /// Emit the file under a content-hashed name
    File(FileOptions),
    /// Lossy/lossless image compression
    ImageCompress(ImageCompressOptions),
}

impl Transform {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Script(_) => "script",
            Self::CssExtract => "css-extract",
            Self::Css(_) => "css",
            Self::PostCss(_) => "post-css",
            Self::Purge(_) => "purge",
            Self::File(_) => "file",
            Self::ImageCompress(_) => "image-compress",
        }
    }
}

/// Script transform options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptOptions {
    /// Browser targets query; `None` defers to the project's browserslist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<String>,

    /// Module syntax handling (always preserved for the bundler)
    #[serde(default)]
    pub modules: ModuleSyntax,

    /// Polyfill injection strategy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_built_ins: Option<BuiltIns>,

    /// Cache transform results between builds
    #[serde(default)]
    pub cache: bool,

    /// Strip whitespace from the generated code
    #[serde(default)]
    pub compact: bool,

    /// Highlight code frames in error messages
    #[serde(default)]
    pub highlight_code: bool,

    /// Ignore project-level transpiler config files
    #[serde(default)]
    pub isolated: bool,

    /// Syntax-only plugins enabled for parsing
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub syntax_plugins: Vec<String>,
}

impl ScriptOptions {
    /// Application code: compact output, no cache, polyfills injected by usage.
    pub(crate) fn application() -> Self {
        Self {
            targets: None,
            modules: ModuleSyntax::Preserve,
            use_built_ins: Some(BuiltIns::Usage),
            cache: false,
            compact: true,
            highlight_code: true,
            isolated: true,
            syntax_plugins: vec!["syntax-dynamic-import".to_string()],
        }
    }

    /// Pre-built dependencies: cached, uncompacted, no polyfill injection.
    pub(crate) fn dependency() -> Self {
        Self {
            targets: None,
            modules: ModuleSyntax::Preserve,
            use_built_ins: None,
            cache: true,
            compact: false,
            highlight_code: true,
            isolated: true,
            syntax_plugins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleSyntax {
    /// Leave `import`/`export` for the bundler
    #[default]
    Preserve,
    CommonJs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuiltIns {
    Usage,
    Entry,
}

/// CSS reference resolution options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssOptions {
    /// Number of transforms after this one applied to `@import`ed files
    pub import_loaders: u32,
}

/// PostCSS pass options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCssOptions {
    pub plugins: Vec<PostCssPlugin>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum PostCssPlugin {
    /// Inline `@import` statements
    Import,
    /// Work around known flexbox bugs
    FlexbugsFixes,
    /// Polyfill future CSS features
    PresetEnv(PresetEnvOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetEnvOptions {
    /// Feature stage (0 = most experimental)
    pub stage: u8,
    pub autoprefixer: AutoprefixerOptions,
    /// Keep `var(--x)` declarations next to their computed fallbacks
    pub preserve_custom_properties: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoprefixerOptions {
    pub flexbox: String,
    pub grid: bool,
}

/// Base style chain shared by every style rule.
pub(crate) fn style_chain() -> Vec<Transform> {
    vec![
        Transform::CssExtract,
        Transform::Css(CssOptions { import_loaders: 1 }),
        Transform::PostCss(PostCssOptions {
            plugins: vec![
                PostCssPlugin::Import,
                PostCssPlugin::FlexbugsFixes,
                PostCssPlugin::PresetEnv(PresetEnvOptions {
                    stage: 0,
                    autoprefixer: AutoprefixerOptions {
                        flexbox: "no-2009".to_string(),
                        grid: true,
                    },
                    preserve_custom_properties: false,
                }),
            ],
        }),
    ]
}

/// Unused-rule pruning options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurgeOptions {
    /// Markup whose class references keep style rules alive
    pub content: ContentSource,
    pub extractors: Vec<ExtractorSpec>,
}

/// Class-name extractor bound to file extensions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorSpec {
    pub extractor: Extractor,
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Extractor {
    /// Tokens of `[A-Za-z0-9-_:/]`, so variant prefixes like `md:` survive
    TailwindClasses,
}

/// Content-hashed file emission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOptions {
    pub name: OutputTemplate,
    /// Subdirectory of the output directory
    pub output_path: String,
}

impl FileOptions {
    pub(crate) fn hashed(output_path: &str) -> Self {
        Self {
            name: OutputTemplate::new("[name].[hash:8].[ext]"),
            output_path: output_path.to_string(),
        }
    }
}

/// Image compression options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageCompressOptions {
    pub optimizers: Vec<ImageOptimizer>,
}

impl Default for ImageCompressOptions {
    fn default() -> Self {
        Self {
            optimizers: vec![
                ImageOptimizer::Gifsicle { interlaced: true },
                ImageOptimizer::Mozjpeg {
                    progressive: true,
                    arithmetic: false,
                },
                ImageOptimizer::Optipng {
                    optimization_level: 5,
                },
                ImageOptimizer::Svgo,
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "optimizer", rename_all = "lowercase")]
pub enum ImageOptimizer {
    Gifsicle { interlaced: bool },
    Mozjpeg { progressive: bool, arithmetic: bool },
    Optipng { optimization_level: u8 },
    Svgo,
}
