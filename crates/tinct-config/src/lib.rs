//! tinct configuration.
//!
//! TOML-based configuration for the color, appearance, localization and
//! logging defaults used by the `tinct` tool. Every section has defaults,
//! so partial configs (or no config at all) work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tinct_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    AppearanceConfig, AppearanceMode, ColorConfig, LocalizationConfig, LogLevel, LoggingConfig,
    TinctConfig,
};
pub use toml_loader::{create_default_config, load_default, load_from_path};

use tinct_common::ConfigError;

/// Load config from the platform default path, or defaults if there is none.
pub fn load_config() -> Result<TinctConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &TinctConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&TinctConfig::default());
        assert!(json.contains("\"color\""));
        assert!(json.contains("\"appearance\""));
        assert!(json.contains("\"localization\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&TinctConfig::default());
        let parsed: TinctConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.color.default_alpha, 1.0);
        assert_eq!(parsed.appearance.mode, AppearanceMode::System);
        assert_eq!(parsed.logging.level, LogLevel::Info);
    }
}
