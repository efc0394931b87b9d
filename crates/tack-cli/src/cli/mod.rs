//! Command-line interface definition for Tack.
//!
//! # Command Structure
//!
//! - `tack describe` - Print the pipeline descriptor as JSON
//! - `tack check` - Validate the descriptor against the project tree
//! - `tack explain` - Show which rule handles a source path
//! - `tack scan` - Run the template scan used by style pruning
//! - `tack hash` - Render a content-addressed filename
//! - `tack clean` - Empty the output directory
//! - `tack manifest` - Emit assets and write the manifest

mod commands;
pub mod enums;
mod tests;
mod validation;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{
    CheckArgs, CleanArgs, Command, DescribeArgs, ExplainArgs, HashArgs, InvocationArgs,
    ManifestArgs, ScanArgs,
};
pub use enums::*;
pub use validation::{AssetSpec, parse_asset};

/// Tack - asset pipeline descriptor for theme builds
#[derive(Parser, Debug)]
#[command(
    name = "tack",
    version,
    about = "Inspect and drive a theme's asset pipeline",
    long_about = "Tack builds the declarative description of a theme's front-end build:\n\
                  entry bundles, content-hashed output names, first-match processing rules\n\
                  and post-build steps. The descriptor depends only on the build mode and\n\
                  the watch flag."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Project root containing tack.toml or package.json
    #[arg(long, global = true, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
