//! Tack CLI entry point.
//!
//! Parses arguments, initializes logging and dispatches to the subcommand.

use clap::Parser;
use miette::Result;
use tack_cli::{cli, commands, config, error, logger, ui};

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // The config file may carry a default log filter
    let log_level = config::configured_log_level(&args.root);
    logger::init_logger(args.verbose, args.quiet, args.no_color, log_level.as_deref());
    ui::init_colors(args.no_color);

    let root = args.root;
    let result = match args.command {
        cli::Command::Describe(describe_args) => commands::describe_execute(&root, describe_args),
        cli::Command::Check(check_args) => commands::check_execute(&root, check_args),
        cli::Command::Explain(explain_args) => commands::explain_execute(&root, explain_args),
        cli::Command::Scan(scan_args) => commands::scan_execute(&root, scan_args),
        cli::Command::Hash(hash_args) => commands::hash_execute(&root, hash_args),
        cli::Command::Clean(clean_args) => commands::clean_execute(&root, clean_args),
        cli::Command::Manifest(manifest_args) => commands::manifest_execute(&root, manifest_args),
    };

    // Convert CLI errors to miette diagnostics
    result.map_err(error::cli_error_to_miette)
}
