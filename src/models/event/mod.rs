// Event module
// Already-expanded event occurrence consumed by the rendering engine

use chrono::{DateTime, Local};

use crate::models::color::Color;

/// A single event occurrence with its participants.
///
/// Recurring events are expanded upstream; the engine only ever sees
/// concrete start/end instants. Start is assumed to precede end — the
/// formatters never re-validate ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: Option<i64>,
    pub title: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub all_day: bool,
    /// Ids of the members attending this occurrence
    pub participant_ids: Vec<i64>,
    /// Explicit color override; participant colors apply when absent
    pub color: Option<Color>,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Arguments
    /// * `title` - Event title (required, non-empty)
    /// * `start` - Event start time
    /// * `end` - Event end time
    pub fn new(
        title: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<Self, String> {
        let title = title.into();

        // Validate title
        if title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        // Validate times
        if end <= start {
            return Err("Event end time must be after start time".to_string());
        }

        Ok(Self {
            id: None,
            title,
            start,
            end,
            all_day: false,
            participant_ids: Vec::new(),
            color: None,
        })
    }

    /// Set the attending members.
    pub fn with_participants(mut self, participant_ids: Vec<i64>) -> Self {
        self.participant_ids = participant_ids;
        self
    }

    /// Set an explicit color override.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Whether more than one member is attending.
    pub fn is_shared(&self) -> bool {
        self.participant_ids.len() > 1
    }
}
