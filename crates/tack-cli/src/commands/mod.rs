//! Command implementations for the Tack CLI.
//!
//! Each command lives in its own module and exposes an `execute` function that
//! takes the project root and the parsed arguments.

pub mod check;
pub mod clean;
pub mod describe;
pub mod explain;
pub mod hash;
pub mod manifest;
pub mod scan;
pub(crate) mod utils;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use clean::execute as clean_execute;
pub use describe::execute as describe_execute;
pub use explain::execute as explain_execute;
pub use hash::execute as hash_execute;
pub use manifest::execute as manifest_execute;
pub use scan::execute as scan_execute;
