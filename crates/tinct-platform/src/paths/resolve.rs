use std::path::PathBuf;

use tinct_common::PlatformError;

pub(super) const APP_NAME: &str = "tinct";

/// Returns the platform-specific configuration directory for tinct.
///
/// - macOS: `~/Library/Application Support/tinct`
/// - Linux: `$XDG_CONFIG_HOME/tinct` (defaults to `~/.config/tinct`)
/// - Windows: `%APPDATA%\tinct`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the path to the main configuration file.
///
/// Located at `config_dir()/config.toml`.
pub fn config_file() -> Result<PathBuf, PlatformError> {
    Ok(config_dir()?.join("config.toml"))
}
