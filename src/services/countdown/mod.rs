//! Countdown text and urgency classification for upcoming events.
//!
//! The countdown breakdown is a strict cascading decomposition over
//! fixed-length units (365.25-day years, year/12 months, 7-day weeks), not
//! calendar arithmetic. The drift against true calendar months is part of
//! the observable contract and is carried as-is.
//!
//! Every function takes its reference instant explicitly; the only clock
//! read in the crate is the `*_from_now` convenience wrapper.

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

const MINUTE_SECS: i64 = 60;
const HOUR_SECS: i64 = 60 * MINUTE_SECS;
const DAY_SECS: i64 = 24 * HOUR_SECS;
const WEEK_SECS: i64 = 7 * DAY_SECS;
/// 365.25-day year approximation.
const YEAR_SECS: i64 = 31_557_600;
/// One twelfth of the approximated year.
const MONTH_SECS: i64 = YEAR_SECS / 12;

/// Largest-first unit table for the cascading decomposition.
const UNITS: [(i64, &str); 6] = [
    (YEAR_SECS, "y"),
    (MONTH_SECS, "mo"),
    (WEEK_SECS, "w"),
    (DAY_SECS, "d"),
    (HOUR_SECS, "h"),
    (MINUTE_SECS, "m"),
];

/// Human countdown to an event start, against an explicit reference instant.
///
/// Returns `"Started"` once `start` is no longer in the future. Otherwise
/// emits the non-zero units of the largest-first breakdown, e.g.
/// `"Starts in 2d 3h"`, or `"Starts in < 1m"` when everything rounds down
/// to zero minutes.
pub fn countdown_text(start: DateTime<Local>, now: DateTime<Local>) -> String {
    if start <= now {
        return "Started".to_string();
    }

    let mut remaining = (start - now).num_seconds();
    let mut parts: Vec<String> = Vec::new();
    for (unit_secs, suffix) in UNITS {
        let count = remaining / unit_secs;
        if count > 0 {
            parts.push(format!("{}{}", count, suffix));
            remaining -= count * unit_secs;
        }
    }

    if parts.is_empty() {
        return "Starts in < 1m".to_string();
    }
    format!("Starts in {}", parts.join(" "))
}

/// Countdown against the wall clock.
pub fn countdown_text_from_now(start: DateTime<Local>) -> String {
    countdown_text(start, Local::now())
}

/// Urgency bucket for countdown surfaces based on time remaining.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountdownWarningState {
    /// More than the approaching window remaining
    Normal,
    /// Inside the approaching window, more than an hour out
    Approaching,
    /// An hour or less, but more than the critical window
    Imminent,
    /// Inside the critical window, event not yet started
    Critical,
    /// Event has started
    Started,
}

impl Default for CountdownWarningState {
    fn default() -> Self {
        Self::Normal
    }
}

/// Thresholds for the warning-state buckets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarningThresholds {
    /// Hours before the event to enter "approaching" (default: 24)
    pub approaching_hours: u32,
    /// Hours before the event to enter "imminent" (default: 1)
    pub imminent_hours: u32,
    /// Minutes before the event to enter "critical" (default: 5)
    pub critical_minutes: u32,
}

impl Default for WarningThresholds {
    fn default() -> Self {
        Self {
            approaching_hours: 24,
            imminent_hours: 1,
            critical_minutes: 5,
        }
    }
}

/// Classify the urgency of an upcoming start against an explicit reference
/// instant. Boundaries are inclusive on the more-urgent side.
pub fn warning_state(
    start: DateTime<Local>,
    now: DateTime<Local>,
    thresholds: &WarningThresholds,
) -> CountdownWarningState {
    if start <= now {
        return CountdownWarningState::Started;
    }

    let remaining = start - now;
    if remaining <= Duration::minutes(thresholds.critical_minutes as i64) {
        CountdownWarningState::Critical
    } else if remaining <= Duration::hours(thresholds.imminent_hours as i64) {
        CountdownWarningState::Imminent
    } else if remaining <= Duration::hours(thresholds.approaching_hours as i64) {
        CountdownWarningState::Approaching
    } else {
        CountdownWarningState::Normal
    }
}
