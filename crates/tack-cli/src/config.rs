//! Configuration loading for the CLI.
//!
//! Priority: CLI flags > `TACK_*` environment variables > config file > defaults.
//! The file layer comes from [`ConfigDiscovery`], so `tack.toml` and the `tack`
//! field of `package.json` behave the same here as for library users.

use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::Serialize;
use std::path::Path;
use tack_config::{ConfigDiscovery, PipelineDescriptor, TackConfig, discovery};

use crate::cli::InvocationArgs;
use crate::error::Result;

/// Prefix of environment variables read into the config.
pub const ENV_PREFIX: &str = "TACK_";

/// Command-line values that override the config; unset flags are skipped.
#[derive(Debug, Default, Serialize)]
struct FlagOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    watch: Option<bool>,
}

impl From<&InvocationArgs> for FlagOverrides {
    fn from(args: &InvocationArgs) -> Self {
        Self {
            mode: args.mode.clone(),
            watch: args.watch_flag(),
        }
    }
}

/// All layers below the command line.
///
/// Nested keys use a double underscore: `TACK_LAYOUT__TARGET_DIR=dist`.
pub fn figment(root: &Path) -> Figment {
    ConfigDiscovery::new(root)
        .figment()
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Load the project config with command-line overrides applied.
pub fn load(root: &Path, args: &InvocationArgs) -> Result<TackConfig> {
    let figment = figment(root).merge(Serialized::defaults(FlagOverrides::from(args)));
    let config = discovery::extract(&figment)?;
    tracing::debug!(
        mode = ?config.mode,
        watch = ?config.watch,
        target = %config.layout.target_dir.display(),
        "loaded configuration"
    );
    Ok(config)
}

/// Load the config and build the descriptor it selects.
pub fn load_descriptor(root: &Path, args: &InvocationArgs) -> Result<(TackConfig, PipelineDescriptor)> {
    let config = load(root, args)?;
    let descriptor = config.descriptor();
    Ok((config, descriptor))
}

/// Log filter from `settings.log_level`, if the project sets one.
///
/// Runs before logging is installed, so failures are silently ignored; the
/// command itself reports them when it loads the config.
pub fn configured_log_level(root: &Path) -> Option<String> {
    figment(root)
        .extract::<TackConfig>()
        .ok()
        .and_then(|config| config.settings.log_level)
}
