//! Declarative asset-pipeline descriptor for a theme's front-end build.
//!
//! [`build`] turns an [`Invocation`] (build mode plus watch flag) into a
//! [`PipelineDescriptor`]: entry bundles, content-hashed output names, an
//! ordered first-match rule group, and the post-build steps. The descriptor is
//! plain data; an external bundling engine executes it.
//!
//! The remaining modules cover what sits around the descriptor: config
//! discovery, content hashing and module ids, the asset manifest, the template
//! scan used by style pruning, and validation.

pub mod config;
pub mod descriptor;
pub mod discovery;
pub mod emit;
pub mod error;
pub mod hash;
pub mod layout;
pub mod manifest;
pub mod mode;
pub mod scan;
pub mod validation;

// Re-export main types
pub use config::*;
pub use descriptor::*;
pub use emit::{EmittedAsset, clean_output_dir, emit_asset, logical_name};
pub use error::*;
pub use hash::{ModuleIdAllocator, content_hash, content_hash_all, short_hash};
pub use layout::ProjectLayout;
pub use manifest::{AssetManifest, MANIFEST_FILE};
pub use mode::{BuildMode, Invocation};
pub use scan::{ContentScan, ContentSource, extract_candidates};

// Re-export discovery and validation
pub use discovery::ConfigDiscovery;
pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};
