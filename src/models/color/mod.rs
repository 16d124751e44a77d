//! Color value type shared across the engine.
//!
//! Colors are plain RGB triples with a canonical `#RRGGBB` textual form,
//! matching how member rows store them. Parsing here is strict (exactly six
//! hex digits, leading `#` optional); the forgiving fallback behaviour for
//! render paths lives in the appearance service, not in this type.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// An RGB color with a canonical `#RRGGBB` textual form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Errors produced when parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color must have exactly six hex digits, got {0}")]
    WrongLength(usize),
    #[error("color contains a non-hexadecimal digit")]
    InvalidDigit,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` string. The leading `#` is optional; anything other
    /// than six hex digits after it is rejected.
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit);
        }
        if hex.len() != 6 {
            return Err(ColorParseError::WrongLength(hex.len()));
        }
        let channel =
            |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorParseError::InvalidDigit);
        Ok(Self {
            r: channel(&hex[0..2])?,
            g: channel(&hex[2..4])?,
            b: channel(&hex[4..6])?,
        })
    }

    /// Weighted relative luminance over the 0-255 channel values, in `0.0..=1.0`.
    pub fn luminance(&self) -> f32 {
        (0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32) / 255.0
    }

    /// Whether the color sits above the shared light/dark threshold.
    ///
    /// Every component that judges lightness (normalization, contrast) goes
    /// through this so the judgments can never disagree.
    pub fn is_light(&self) -> bool {
        self.luminance() > 0.5
    }

    /// Darken every channel by `percent`% of the full 255 range, saturating
    /// at zero.
    pub fn darken_by(&self, percent: u8) -> Self {
        let step = (255.0 * percent as f32 / 100.0).round() as u8;
        Self {
            r: self.r.saturating_sub(step),
            g: self.g.saturating_sub(step),
            b: self.b.saturating_sub(step),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// Serialize as the canonical hex string so member rows keep the same textual
// form the rest of the stack stores.
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(de::Error::custom)
    }
}
