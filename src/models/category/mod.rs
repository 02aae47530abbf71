//! Category model for grouping events.
//!
//! Categories give events a display name and a fallback color, and are the
//! unit of filtering in every calendar view.

use serde::{Deserialize, Serialize};

/// Neutral gray used for categories that are referenced but not defined.
pub const FALLBACK_COLOR: &str = "#6b7280";

/// A category for grouping events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier referenced by `Event::category`
    pub id: String,
    /// Display label
    pub name: String,
    /// Hex color code used when an event has no color of its own
    pub color: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }

    /// Stand-in for an unknown category id: the id doubles as the name.
    pub fn fallback(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            color: FALLBACK_COLOR.to_string(),
        }
    }

    pub fn has_valid_color(&self) -> bool {
        is_valid_hex_color(&self.color)
    }
}

/// Check if a string is a valid hex color code.
pub fn is_valid_hex_color(color: &str) -> bool {
    let color = color.trim();
    let Some(hex) = color.strip_prefix('#') else {
        return false;
    };
    // Accept 3, 6, or 8 character hex codes
    matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
}
