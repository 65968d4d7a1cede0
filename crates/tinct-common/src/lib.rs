//! Core value types shared by the tinct crates.
//!
//! [`Color`] construction from hexadecimal notation lives here, together
//! with the error types every other crate reports through.

pub mod appearance;
pub mod color;
pub mod errors;

pub use appearance::AppearanceMode;
pub use color::{Color, HexFormat, InvalidHexPolicy};
pub use errors::{ColorError, ConfigError, PlatformError, TinctError};

pub type Result<T> = std::result::Result<T, TinctError>;
