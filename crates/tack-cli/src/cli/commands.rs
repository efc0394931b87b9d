use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;
use crate::cli::validation::{AssetSpec, parse_asset};

/// Available Tack subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the pipeline descriptor as JSON
    ///
    /// The output is what a bundling engine consumes: entry bundles, output
    /// templates, the ordered rule group and the post-build steps.
    Describe(DescribeArgs),

    /// Validate the descriptor against the project tree
    ///
    /// Checks the descriptor's structure and that every entry source exists
    /// under the project root.
    Check(CheckArgs),

    /// Show which rule handles each source path
    ///
    /// Rules are tried in order and the first match wins. Paths that match no
    /// rule are reported as unhandled.
    Explain(ExplainArgs),

    /// Scan theme templates for class-name candidates
    ///
    /// Runs the same scan the style-pruning step uses. Pruning is disabled in
    /// watch mode, so there is nothing to scan there.
    Scan(ScanArgs),

    /// Render the content-addressed filename for one or more files
    ///
    /// The files' bytes are hashed in argument order.
    Hash(HashArgs),

    /// Empty the output directory
    ///
    /// Runs the clean step: everything inside the output directory is removed
    /// and the directory itself is kept.
    Clean(CleanArgs),

    /// Copy assets under hashed names and write the manifest
    ///
    /// Each LOGICAL=FILE pair is hashed, written into the output directory and
    /// recorded in manifest.json.
    Manifest(ManifestArgs),
}

/// Build mode and watch flag shared by descriptor-producing commands
#[derive(Args, Debug, Clone, Default)]
pub struct InvocationArgs {
    /// Build mode
    ///
    /// Only "development" selects development; any other value builds for
    /// production.
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Build as part of a watch session (disables style pruning)
    #[arg(short, long, overrides_with = "no_watch")]
    pub watch: bool,

    /// Build as a one-off run, overriding a configured watch flag
    #[arg(long, overrides_with = "watch")]
    pub no_watch: bool,
}

impl InvocationArgs {
    /// The watch flag, when one was given on the command line
    pub fn watch_flag(&self) -> Option<bool> {
        if self.watch {
            Some(true)
        } else if self.no_watch {
            Some(false)
        } else {
            None
        }
    }
}

/// Arguments for the describe command
#[derive(Args, Debug)]
pub struct DescribeArgs {
    #[command(flatten)]
    pub invocation: InvocationArgs,

    /// Print only one part of the descriptor
    #[arg(short, long, value_enum, value_name = "SECTION")]
    pub section: Option<Section>,

    /// Print compact JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub invocation: InvocationArgs,

    /// Skip filesystem checks and validate only the descriptor's structure
    #[arg(long)]
    pub schema_only: bool,
}

/// Arguments for the explain command
#[derive(Args, Debug)]
pub struct ExplainArgs {
    /// Source paths to route, relative to the project root
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub invocation: InvocationArgs,
}

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    #[command(flatten)]
    pub invocation: InvocationArgs,

    /// Print every candidate class name
    #[arg(short, long)]
    pub list: bool,

    /// Exit with an error unless each of these classes is referenced
    #[arg(long, value_name = "CLASS")]
    pub require: Vec<String>,
}

/// Arguments for the hash command
#[derive(Args, Debug)]
pub struct HashArgs {
    /// Files whose bytes make up the asset
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Logical name substituted for [name]
    #[arg(short, long, value_name = "NAME")]
    pub name: String,

    /// Filename template (defaults to the script output template)
    #[arg(short, long, value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Extension substituted for [ext] (defaults to the first file's)
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,
}

/// Arguments for the clean command
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Clean this directory instead of the configured output directory
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

/// Arguments for the manifest command
#[derive(Args, Debug)]
pub struct ManifestArgs {
    /// Assets as LOGICAL=FILE pairs, e.g. main.js=build/main.js
    #[arg(required = true, value_name = "LOGICAL=FILE", value_parser = parse_asset)]
    pub assets: Vec<AssetSpec>,

    #[command(flatten)]
    pub invocation: InvocationArgs,

    /// Write into this directory instead of the configured output directory
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Empty the output directory first
    #[arg(long)]
    pub clean: bool,

    /// Merge into an existing manifest instead of replacing it
    #[arg(long, conflicts_with = "clean")]
    pub merge: bool,
}
