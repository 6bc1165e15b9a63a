pub mod commands;
pub mod progress;
pub mod report;
pub mod validate;

pub use commands::{Cli, Commands};

use std::path::Path;

use crate::config::{self, ConfigOverrides, ScoutConfig};
use crate::errors::ScoutError;

/// Read the optional config file and resolve it against overrides and the environment.
pub async fn load_config(
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<ScoutConfig, ScoutError> {
    let file_config = match config_path {
        Some(path) => Some(config::parse_config(path).await?),
        None => None,
    };
    ScoutConfig::resolve(file_config.as_ref(), overrides, |key| std::env::var(key).ok())
}
