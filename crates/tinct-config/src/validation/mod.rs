//! Full configuration validation.
//!
//! Each check pushes a message; all messages are joined into a single
//! `ConfigError::ValidationError`.

mod helpers;


use crate::schema::TinctConfig;
use tinct_common::ConfigError;

use helpers::{validate_name, validate_range_f64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TinctConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range_f64(
        &mut errors,
        "color.default_alpha",
        config.color.default_alpha,
        0.0,
        1.0,
    );

    if !config.localization.default_bundle.is_empty() {
        validate_name(
            &mut errors,
            "localization.default_bundle",
            &config.localization.default_bundle,
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
