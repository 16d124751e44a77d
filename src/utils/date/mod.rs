// Date utility functions

use chrono::{DateTime, Local, NaiveTime};

pub fn is_same_day(date1: DateTime<Local>, date2: DateTime<Local>) -> bool {
    date1.date_naive() == date2.date_naive()
}

/// Fixed-width `HH:MM - HH:MM` label for an event interval.
///
/// An end at exactly midnight on a later calendar day renders as the
/// literal `00:00`: the interval runs to the end of the start day, which is
/// distinct from an event genuinely spanning into the next day. Inverted
/// intervals are a caller contract violation and are not detected here.
pub fn format_time_range(start: DateTime<Local>, end: DateTime<Local>) -> String {
    let end_label = if ends_at_following_midnight(start, end) {
        "00:00".to_string()
    } else {
        end.format("%H:%M").to_string()
    };
    format!("{} - {}", start.format("%H:%M"), end_label)
}

fn ends_at_following_midnight(start: DateTime<Local>, end: DateTime<Local>) -> bool {
    end.time() == NaiveTime::MIN && !is_same_day(start, end)
}
