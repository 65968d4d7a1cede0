//! Normalized RGBA colors built from hexadecimal notation.
//!
//! Accepted string forms, with or without a leading `#`:
//! - `RGB` shorthand (e.g. `F00`), each digit duplicated into a full byte
//! - `RRGGBB` (e.g. `FF0000`)
//! - `AARRGGBB` (e.g. `80FFFF00`), alpha first
//!
//! Every character that is not a letter or digit is dropped before the
//! digits are counted. [`Color::from_hex`] never fails; [`Color::parse_hex`]
//! is the strict variant.

mod hex;


use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ColorError;

pub use hex::HexFormat;
use hex::{scan_lenient, scan_strict, strip_non_alphanumeric, LEGACY_SENTINEL};

/// What [`Color::from_hex_with`] returns when the digit count is not 3, 6 or 8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidHexPolicy {
    /// Raw `(a, r, g, b) = (1, 1, 1, 0)` divided by 255: a near-black,
    /// near-transparent color kept for compatibility.
    #[default]
    Legacy,
    /// [`Color::TRANSPARENT`].
    Transparent,
}

/// An sRGB color with each channel in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_components(a.into(), r.into(), g.into(), b.into())
    }

    /// Build a color from a hex string, never failing.
    ///
    /// Unrecognized digit counts produce the legacy sentinel, see
    /// [`InvalidHexPolicy::Legacy`]. Non-hex characters end the digit scan
    /// early, so malformed input degrades to a partial or zero value.
    pub fn from_hex(hex: &str) -> Self {
        Self::from_hex_with(hex, InvalidHexPolicy::Legacy)
    }

    /// Like [`Color::from_hex`], choosing the result for unrecognized lengths.
    pub fn from_hex_with(hex: &str, policy: InvalidHexPolicy) -> Self {
        let digits = strip_non_alphanumeric(hex);
        let count = digits.chars().count();

        let (a, r, g, b) = match HexFormat::from_digit_count(count) {
            Some(format) => format.components(scan_lenient(&digits)),
            None => {
                debug!(input = hex, digits = count, ?policy, "unrecognized hex color length");
                match policy {
                    InvalidHexPolicy::Legacy => LEGACY_SENTINEL,
                    InvalidHexPolicy::Transparent => return Self::TRANSPARENT,
                }
            }
        };

        Self::from_components(a, r, g, b)
    }

    /// Strict hex parsing: rejects bad lengths and non-hex digits.
    pub fn parse_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = strip_non_alphanumeric(hex);
        let count = digits.chars().count();
        let format = HexFormat::from_digit_count(count).ok_or(ColorError::InvalidLength(count))?;
        let (a, r, g, b) = format.components(scan_strict(&digits)?);
        Ok(Self::from_components(a, r, g, b))
    }

    /// Opaque color from a `0xRRGGBB` integer.
    pub fn from_rgb(hex: u64) -> Self {
        Self::from_rgb_hex(hex, 1.0)
    }

    /// Color from a `0xRRGGBB` integer and a separate alpha fraction.
    ///
    /// Bits above the low 24 are ignored. `alpha` is passed through as-is.
    pub fn from_rgb_hex(hex: u64, alpha: f64) -> Self {
        Self {
            red: ((hex >> 16) & 0xFF) as f64 / 255.0,
            green: ((hex >> 8) & 0xFF) as f64 / 255.0,
            blue: (hex & 0xFF) as f64 / 255.0,
            alpha,
        }
    }

    fn from_components(a: u64, r: u64, g: u64, b: u64) -> Self {
        Self {
            red: r as f64 / 255.0,
            green: g as f64 / 255.0,
            blue: b as f64 / 255.0,
            alpha: a as f64 / 255.0,
        }
    }

    /// Quantize to `[r, g, b, a]` bytes, clamping out-of-range channels.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.red), q(self.green), q(self.blue), q(self.alpha)]
    }

    /// `#rrggbb` when opaque, otherwise `#aarrggbb` (alpha first, matching input).
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{a:02x}{r:02x}{g:02x}{b:02x}")
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
