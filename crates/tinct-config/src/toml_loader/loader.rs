//! Core TOML config loading: read from path or platform default.

use crate::schema::TinctConfig;
use crate::validation;
use std::path::Path;
use tinct_common::ConfigError;
use tracing::{info, warn};

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. If the parsed config fails
/// validation, a warning is logged and the default config is returned.
pub fn load_from_path(path: &Path) -> Result<TinctConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: TinctConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
        warn!("falling back to default config");
        return Ok(TinctConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from [`tinct_platform::config_file`].
///
/// If the file does not exist, returns defaults without writing anything;
/// use [`create_default_config`] to write the commented template.
///
/// [`create_default_config`]: super::create_default_config
pub fn load_default() -> Result<TinctConfig, ConfigError> {
    let path = tinct_platform::config_file()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, using defaults", path.display());
            Ok(TinctConfig::default())
        }
        Err(e) => Err(e),
    }
}
