use serde::{Deserialize, Serialize};

/// Minimization and chunking requests forwarded to the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationOptions {
    pub minimizer: Vec<Minimizer>,

    #[serde(default)]
    pub runtime_chunk: RuntimeChunk,
}

impl Default for OptimizationOptions {
    fn default() -> Self {
        Self {
            minimizer: vec![
                Minimizer::Scripts {
                    comments: false,
                    parallel: true,
                    cache: true,
                },
                Minimizer::Styles {
                    safe_parser: true,
                    discard_comments: DiscardComments::RemoveAll,
                },
            ],
            runtime_chunk: RuntimeChunk::Single,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Minimizer {
    /// Script minification
    Scripts {
        /// Keep license/legal comments
        comments: bool,
        /// Minify across worker threads; scheduling is the engine's concern
        parallel: bool,
        cache: bool,
    },
    /// Style minification
    Styles {
        /// Recover from malformed input instead of failing
        safe_parser: bool,
        discard_comments: DiscardComments,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiscardComments {
    KeepImportant,
    RemoveAll,
}

/// Where the module runtime lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeChunk {
    /// Inlined into every entry bundle
    #[default]
    Inline,
    /// One runtime chunk shared by all entries
    Single,
}

/// Module resolution settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Extensions tried, in order, for extensionless imports
    pub extensions: Vec<String>,

    /// `package.json` fields consulted for a package's entry point
    pub main_fields: Vec<String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            extensions: [".wasm", ".mjs", ".js", ".json", ".css"]
                .map(String::from)
                .to_vec(),
            main_fields: ["es2015", "module", "main"].map(String::from).to_vec(),
        }
    }
}
