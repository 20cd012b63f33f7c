//! Core TOML config loading: read from path or platform default.

use crate::schema::SplitscreenConfig;
use splitscreen_common::ConfigError;
use std::path::Path;
use tracing::info;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// No validation happens here: out-of-range values come back as parsed.
/// [`crate::load_config`] and [`crate::load_config_from`] validate.
pub fn load_from_path(path: &Path) -> Result<SplitscreenConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: SplitscreenConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/splitscreen/config.toml`
/// On Linux: `~/.config/splitscreen/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<SplitscreenConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(SplitscreenConfig::default());
    }

    load_from_path(&path)
}
