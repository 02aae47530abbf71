// Date utility functions
// Calendar arithmetic for the month grid: weekday offsets, month lengths,
// "today" checks and canonical YYYY-MM-DD keys.
//
// Months are zero-based (January = 0) throughout, and out-of-range month
// indices roll over into the adjacent year.

use chrono::{Datelike, Local, NaiveDate};

use crate::models::event::DateKey;

/// Number of cells in a six-week month grid.
pub const GRID_CELLS: usize = 42;

/// A calendar month with its year, normalised so that `month` is in `0..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthRef {
    pub year: i32,
    pub month: u32,
}

impl MonthRef {
    /// Create a month reference, rolling `month = -1` into the previous
    /// December and `month = 12` into the next January (and so on).
    pub fn new(year: i32, month: i32) -> Self {
        let (year, month) = normalize_month(year, month);
        Self { year, month }
    }

    pub fn prev(self) -> Self {
        Self::new(self.year, self.month as i32 - 1)
    }

    pub fn next(self) -> Self {
        Self::new(self.year, self.month as i32 + 1)
    }

    pub fn days(self) -> u32 {
        days_in_month(self.year, self.month as i32)
    }

    pub fn first_weekday_offset(self) -> u32 {
        first_weekday_offset(self.year, self.month as i32)
    }

    /// `YYYY-MM` prefix shared by every date key inside this month.
    pub fn key_prefix(self) -> String {
        format!("{:04}-{:02}", self.year, self.month + 1)
    }

    pub fn date_key(self, day: u32) -> DateKey {
        date_key(self.year, self.month as i32, day)
    }
}

/// Fold an arbitrary month index into `(year, 0..12)`.
pub fn normalize_month(year: i32, month: i32) -> (i32, u32) {
    (
        year + month.div_euclid(12),
        month.rem_euclid(12) as u32,
    )
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Gregorian day count of the month.
pub fn days_in_month(year: i32, month: i32) -> u32 {
    let (year, month) = normalize_month(year, month);
    match month {
        1 if is_leap_year(year) => 29,
        1 => 28,
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Weekday of the 1st of the month with Monday = 0 … Sunday = 6.
pub fn first_weekday_offset(year: i32, month: i32) -> u32 {
    let (year, month) = normalize_month(year, month);
    NaiveDate::from_ymd_opt(year, month + 1, 1)
        .map(|first| (first.weekday().num_days_from_sunday() + 6) % 7)
        .unwrap_or(0)
}

/// Canonical `YYYY-MM-DD` identity of a calendar day.
pub fn date_key(year: i32, month: i32, day: u32) -> DateKey {
    let (year, month) = normalize_month(year, month);
    DateKey::new(format!("{:04}-{:02}-{:02}", year, month + 1, day))
}

/// Compare against the wall clock; reads the current date on every call.
pub fn is_today(year: i32, month: i32, day: u32) -> bool {
    is_same_day(Local::now().date_naive(), year, month, day)
}

/// `month` is zero-based and may roll over into the adjacent year.
pub fn is_same_day(date: NaiveDate, year: i32, month: i32, day: u32) -> bool {
    let (year, month) = normalize_month(year, month);
    date.year() == year && date.month0() == month && date.day() == day
}

/// Split a `YYYY-MM-DD` string into a date. Returns `None` for anything
/// that is not a real calendar date.
pub fn parse_date_key(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
