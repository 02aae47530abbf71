// Settings module
// Runtime configuration, read from config.toml

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Calendar year shown by the year and month views
    pub year: i32,
    /// Location of the events document
    pub data_file: PathBuf,
    /// Events shown per day cell before collapsing into "+N"
    pub visible_events_per_day: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            year: 2026,
            data_file: PathBuf::from("events.json"),
            visible_events_per_day: 3,
        }
    }
}

/// Upper bound for `visible_events_per_day`; a day cell never grows past it.
pub const MAX_VISIBLE_EVENTS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("year must be between 1 and 9999, got {0}")]
    YearOutOfRange(i32),
    #[error("visible_events_per_day must be at least 1")]
    NoVisibleEvents,
    #[error("visible_events_per_day must be at most 10, got {0}")]
    TooManyVisibleEvents(usize),
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(1..=9999).contains(&self.year) {
            return Err(SettingsError::YearOutOfRange(self.year));
        }
        if self.visible_events_per_day == 0 {
            return Err(SettingsError::NoVisibleEvents);
        }
        if self.visible_events_per_day > MAX_VISIBLE_EVENTS {
            return Err(SettingsError::TooManyVisibleEvents(self.visible_events_per_day));
        }
        Ok(())
    }
}
