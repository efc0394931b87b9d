use clap::ValueEnum;

/// Top-level part of the descriptor printed by `tack describe --section`
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum Section {
    /// Named bundles and their ordered sources
    #[value(name = "entry")]
    Entry,

    /// Output directory and filename templates
    #[value(name = "output")]
    Output,

    /// Per-file rule group
    #[value(name = "module")]
    Module,

    /// Minimizers and runtime chunk
    #[value(name = "optimization")]
    Optimization,

    /// Resolver extensions and main fields
    #[value(name = "resolve")]
    Resolve,

    /// Post-build steps
    #[value(name = "plugins")]
    Plugins,
}

impl Section {
    /// Key of this section in the serialized descriptor
    pub fn key(self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Output => "output",
            Self::Module => "module",
            Self::Optimization => "optimization",
            Self::Resolve => "resolve",
            Self::Plugins => "plugins",
        }
    }
}
