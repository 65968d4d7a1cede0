//! Default TOML config template and the `config --init` writer.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use tinct_common::ConfigError;
use tracing::info;

/// Write the commented template to `path`, creating parent directories.
///
/// An existing file is left untouched. Returns `true` when the template was
/// written and `false` when the file was already there.
pub fn create_default_config(path: &Path) -> Result<bool, ConfigError> {
    let write_err = |e: std::io::Error| ConfigError::WriteError(format!("{}: {e}", path.display()));

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            info!("config already exists at {}", path.display());
            return Ok(false);
        }
        Err(e) => return Err(write_err(e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(write_err)?;

    info!("created default config at {}", path.display());
    Ok(true)
}

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# tinct configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[color]
# invalid_hex = "legacy"   # legacy, transparent
# default_alpha = 1.0      # 0.0-1.0, alpha for integer colors

[appearance]
# mode = "system"          # system, light, dark

[localization]
# default_bundle = ""      # empty = process catalog

[logging]
# level = "info"           # trace, debug, info, warn, error
"##
}
