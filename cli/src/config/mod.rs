//! Configuration management for review.
//!
//! Settings are read from an optional `.review.toml` at the repository
//! root. Nothing is read from the environment.

pub mod settings;

pub use settings::ReviewConfig;

use std::path::Path;

use crate::error::{Result, ReviewError};

/// Configuration file name, relative to the repository root.
pub const CONFIG_FILE: &str = ".review.toml";

/// Load configuration for the repository at `root`.
///
/// If the config file doesn't exist, returns default configuration.
pub fn load_config(root: &Path) -> Result<ReviewConfig> {
    load_config_from(&root.join(CONFIG_FILE))
}

/// Load configuration from a specific path.
///
/// If the file doesn't exist, returns default configuration.
pub fn load_config_from(path: &Path) -> Result<ReviewConfig> {
    if !path.exists() {
        return Ok(ReviewConfig::default());
    }

    let contents = std::fs::read_to_string(path)?;
    let config: ReviewConfig = toml::from_str(&contents).map_err(|e| ReviewError::ConfigRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::info!("Loaded configuration from {}", path.display());
    Ok(config)
}
