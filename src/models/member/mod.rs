//! Family member model.
//!
//! Members carry the color assigned to them from the reserved palette plus
//! an optional avatar emoji for badges. Colors are handed out at
//! creation/join time and may later be overwritten by an explicit user
//! choice; removing members (and their colors) is the owning store's
//! responsibility, never this crate's.

use serde::{Deserialize, Serialize};

use crate::models::color::Color;

/// A member of the family calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier (owned by the external member store)
    pub id: Option<i64>,
    /// Display name of the member
    pub name: String,
    /// Color assigned from the member palette, if one has been given yet
    pub color: Option<Color>,
    /// Optional emoji shown next to the name
    pub avatar: Option<String>,
}

impl Member {
    /// Create a new member without a color assignment.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            color: None,
            avatar: None,
        }
    }

    /// Create a new member with an already-assigned color.
    pub fn with_color(name: impl Into<String>, color: Color) -> Self {
        Self {
            id: None,
            name: name.into(),
            color: Some(color),
            avatar: None,
        }
    }

    /// Validate the member data.
    pub fn validate(&self) -> Result<(), MemberValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(MemberValidationError::EmptyName);
        }
        if name.len() > 50 {
            return Err(MemberValidationError::NameTooLong);
        }

        if let Some(ref avatar) = self.avatar {
            if avatar.len() > 10 {
                return Err(MemberValidationError::AvatarTooLong);
            }
        }

        Ok(())
    }

    /// Get the display string (avatar + name) for UI.
    pub fn display_name(&self) -> String {
        match &self.avatar {
            Some(avatar) => format!("{} {}", avatar, self.name),
            None => self.name.clone(),
        }
    }
}

/// Validation errors for Member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberValidationError {
    EmptyName,
    NameTooLong,
    AvatarTooLong,
}

impl std::fmt::Display for MemberValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Member name cannot be empty"),
            Self::NameTooLong => write!(f, "Member name must be 50 characters or less"),
            Self::AvatarTooLong => write!(f, "Avatar must be 10 characters or less"),
        }
    }
}

impl std::error::Error for MemberValidationError {}
