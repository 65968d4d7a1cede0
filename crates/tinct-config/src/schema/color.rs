//! Color construction defaults.

use serde::{Deserialize, Serialize};
use tinct_common::InvalidHexPolicy;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Result for hex strings whose digit count is not 3, 6 or 8.
    pub invalid_hex: InvalidHexPolicy,
    /// Alpha for integer colors given without one (valid range: 0.0-1.0).
    pub default_alpha: f64,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            invalid_hex: InvalidHexPolicy::Legacy,
            default_alpha: 1.0,
        }
    }
}
