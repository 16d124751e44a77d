// Test fixtures - reusable test data
// Provides consistent colors and instants across all test files

#![allow(dead_code)]

use chrono::{DateTime, Local, NaiveDate};
use famcal_core::models::color::Color;

/// Sample instants for testing
pub mod instants {
    use super::*;

    /// Build a Local datetime from date and time parts.
    pub fn local(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Local> {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
            .and_local_timezone(Local)
            .unwrap()
    }

    /// Returns Jun 14, 2025 at noon - the fixed "now" for countdown tests
    pub fn reference_now() -> DateTime<Local> {
        local(2025, 6, 14, 12, 0, 0)
    }
}

/// Sample colors for testing
pub mod colors {
    use super::*;

    /// Pure white, the lightest possible input
    pub fn white() -> Color {
        Color::new(255, 255, 255)
    }

    /// Pure black, the darkest possible input
    pub fn black() -> Color {
        Color::new(0, 0, 0)
    }

    /// A pastel well above the luminance threshold
    pub fn pastel_mint() -> Color {
        Color::from_hex("#B8F5D0").unwrap()
    }

    /// A deep navy well below the luminance threshold
    pub fn deep_navy() -> Color {
        Color::from_hex("#1E3A8A").unwrap()
    }
}
