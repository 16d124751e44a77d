//! Display normalization and contrast rules for colored surfaces.
//!
//! Everything that renders a member or event color funnels through here.
//! Normalization guarantees a minimum visual weight: pastel palette entries
//! and user-picked colors are re-darkened so they hold up as small accents
//! and under light text. Text color is chosen with the same luminance
//! judgment, so a normalized background and its text can never disagree.

pub mod event_color;

use crate::models::color::Color;
use crate::services::palette::FAMILY_COLOR;

/// Default darkening applied to light colors, in percent of the full range.
pub const DEFAULT_DARKEN_PERCENT: u8 = 22;

/// White text, used on dark backgrounds.
pub const TEXT_ON_DARK: Color = Color::new(0xFF, 0xFF, 0xFF);

/// Near-black text, used on light backgrounds.
pub const TEXT_ON_LIGHT: Color = Color::new(0x14, 0x1C, 0x2D);

/// Normalize a stored color string for display with the default darkening.
///
/// The leading `#` is optional. Malformed input never errors: it degrades
/// to the family color, because a miscolored badge is recoverable while a
/// crash during list rendering is not.
pub fn normalize_for_display(input: &str) -> Color {
    normalize_for_display_darkened(input, DEFAULT_DARKEN_PERCENT)
}

/// Normalize a stored color string with an explicit darkening amount.
pub fn normalize_for_display_darkened(input: &str, darken_percent: u8) -> Color {
    match Color::from_hex(input) {
        Ok(color) => normalize_color(color, darken_percent),
        Err(err) => {
            log::warn!(
                "Unparsable color {:?} ({}), falling back to family color",
                input,
                err
            );
            FAMILY_COLOR
        }
    }
}

/// Typed normalization core: light colors are darkened by `darken_percent`%
/// of the channel range, dark colors pass through unchanged.
///
/// A single pass is not guaranteed to land below the threshold for extreme
/// inputs (near-white needs more than one step); callers treat that as a
/// property of the contract, not a bug.
pub fn normalize_color(color: Color, darken_percent: u8) -> Color {
    if color.is_light() {
        color.darken_by(darken_percent)
    } else {
        color
    }
}

/// Light/dark judgment on a raw color string.
///
/// Malformed input is judged dark, consistent with it rendering as the
/// (dark) family color.
pub fn is_light_color(hex: &str) -> bool {
    Color::from_hex(hex).map(|color| color.is_light()).unwrap_or(false)
}

/// Text color that stays legible on the given background.
pub fn contrasting_text_color(background: Color) -> Color {
    if background.is_light() {
        TEXT_ON_LIGHT
    } else {
        TEXT_ON_DARK
    }
}
