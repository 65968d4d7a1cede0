//! Appearance (light/dark) selection.

use serde::{Deserialize, Serialize};

pub use tinct_common::AppearanceMode;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    pub mode: AppearanceMode,
}
