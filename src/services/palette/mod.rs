//! Reserved member palette and color allocation.
//!
//! The palette is a fixed, ordered table: its order is allocation priority
//! and never changes at runtime. `FAMILY_COLOR` is deliberately not a
//! palette entry — it marks surfaces shared by two or more members and
//! doubles as the safe fallback when a stored color fails to parse.

use std::collections::HashSet;

use rand::Rng;

use crate::models::color::Color;

/// Reserved member colors, in allocation order.
pub const MEMBER_PALETTE: [Color; 11] = [
    Color::new(0x3B, 0x82, 0xF6), // blue
    Color::new(0x10, 0xB9, 0x81), // emerald
    Color::new(0xF5, 0x9E, 0x0B), // amber
    Color::new(0xEF, 0x44, 0x44), // red
    Color::new(0x8B, 0x5C, 0xF6), // violet
    Color::new(0xEC, 0x48, 0x99), // pink
    Color::new(0x14, 0xB8, 0xA6), // teal
    Color::new(0xF9, 0x73, 0x16), // orange
    Color::new(0x63, 0x66, 0xF1), // indigo
    Color::new(0x84, 0xCC, 0x16), // lime
    Color::new(0x06, 0xB6, 0xD4), // cyan
];

/// Color used for any surface shared by two or more members.
///
/// Dark under the luminance threshold, so it passes through display
/// normalization untouched.
pub const FAMILY_COLOR: Color = Color::new(0x47, 0x55, 0x69);

/// Pick the next free palette color given the colors already in use.
///
/// Once every reserved color is taken, falls back to a uniformly-random
/// palette entry; duplicates are expected in large families.
pub fn next_available_color(used: &[Option<Color>]) -> Color {
    next_available_color_with(used, &mut rand::rng())
}

/// Allocation with a caller-supplied random source, for deterministic tests.
pub fn next_available_color_with<R: Rng>(used: &[Option<Color>], rng: &mut R) -> Color {
    let taken: HashSet<Color> = used.iter().flatten().copied().collect();
    if let Some(color) = MEMBER_PALETTE.iter().find(|color| !taken.contains(color)) {
        return *color;
    }
    log::debug!("member palette exhausted, reusing a random entry");
    MEMBER_PALETTE[rng.random_range(0..MEMBER_PALETTE.len())]
}
