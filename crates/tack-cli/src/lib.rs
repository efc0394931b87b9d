//! Tack CLI - inspect, validate and drive a theme's asset pipeline descriptor.
//!
//! The descriptor itself lives in `tack-config`. This crate wraps it in a
//! command-line tool with layered configuration, structured logging and
//! readable diagnostics.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - One module per subcommand
//! - [`config`] - Figment layering of file, environment and flags
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Colored status lines on stderr
//!
//! # Example
//!
//! ```rust
//! use tack_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false, None);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
