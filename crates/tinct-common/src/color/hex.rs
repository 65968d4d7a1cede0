//! Low-level hex digit handling behind [`Color::from_hex`](super::Color::from_hex).
//!
//! Not part of the public API apart from [`HexFormat`].

use crate::errors::ColorError;

/// Raw `(a, r, g, b)` used for unrecognized digit counts, before division by 255.
pub(super) const LEGACY_SENTINEL: (u64, u64, u64, u64) = (1, 1, 1, 0);

/// Hex notation selected by the number of digits left after stripping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexFormat {
    /// `RGB`, 4 bits per channel.
    Rgb12,
    /// `RRGGBB`, 8 bits per channel.
    Rgb24,
    /// `AARRGGBB`, 8 bits per channel with a leading alpha byte.
    Argb32,
}

impl HexFormat {
    pub fn from_digit_count(count: usize) -> Option<Self> {
        match count {
            3 => Some(Self::Rgb12),
            6 => Some(Self::Rgb24),
            8 => Some(Self::Argb32),
            _ => None,
        }
    }

    /// Split a scanned value into integer `(a, r, g, b)` components in 0..=255.
    pub fn components(self, value: u64) -> (u64, u64, u64, u64) {
        match self {
            // Nibble * 17 maps 0x0..=0xF onto 0..=255.
            Self::Rgb12 => (
                255,
                (value >> 8) * 17,
                ((value >> 4) & 0xF) * 17,
                (value & 0xF) * 17,
            ),
            Self::Rgb24 => (255, value >> 16, (value >> 8) & 0xFF, value & 0xFF),
            Self::Argb32 => (
                value >> 24,
                (value >> 16) & 0xFF,
                (value >> 8) & 0xFF,
                value & 0xFF,
            ),
        }
    }
}

/// Drop every character that is not a letter or digit (`#`, spaces, punctuation).
pub(super) fn strip_non_alphanumeric(s: &str) -> String {
    s.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// Scan leading hex digits, tolerating a `0x` prefix.
///
/// Stops at the first non-hex character and keeps whatever was accumulated,
/// so `"F0G000"` scans as `0xF0` and `"GG0000"` as `0`. Callers only pass
/// at most eight digits, so the accumulator cannot overflow.
pub(super) fn scan_lenient(digits: &str) -> u64 {
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);

    digits
        .chars()
        .map_while(|c| c.to_digit(16))
        .fold(0u64, |acc, d| (acc << 4) | u64::from(d))
}

/// Scan every character as a hex digit, rejecting the first one that isn't.
pub(super) fn scan_strict(digits: &str) -> Result<u64, ColorError> {
    digits.chars().try_fold(0u64, |acc, c| {
        let d = c.to_digit(16).ok_or(ColorError::InvalidDigit(c))?;
        Ok((acc << 4) | u64::from(d))
    })
}
