//! Localization lookup defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizationConfig {
    /// Resource bundle used when none is given. Empty means the process catalog.
    pub default_bundle: String,
}
