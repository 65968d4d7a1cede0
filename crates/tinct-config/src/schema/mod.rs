//! Configuration schema types for tinct.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod appearance;
mod color;
mod localization;
mod logging;

pub use appearance::*;
pub use color::*;
pub use localization::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Root configuration for tinct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TinctConfig {
    pub color: ColorConfig,
    pub appearance: AppearanceConfig,
    pub localization: LocalizationConfig,
    pub logging: LoggingConfig,
}
