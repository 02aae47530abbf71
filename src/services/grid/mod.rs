//! Month grid layout.
//!
//! Builds the six-week (42 cell) Monday-first grid for a month, filling in
//! trailing days of the previous month and leading days of the next one.
//! Every cell carries the events that cover it, clipped to a visible cap.

use chrono::{Local, NaiveDate};

use crate::models::event::{DateKey, Event, SpanPosition};
use crate::models::view_state::FilterSet;
use crate::services::event::{EventService, UncertainDates};
use crate::utils::date::{is_same_day, MonthRef, GRID_CELLS};

pub mod year_overview;

pub use year_overview::{build_year_overview, MiniDay, MonthCard, YearOverview};

/// Events shown per cell before the rest collapse into an overflow count.
pub const DEFAULT_VISIBLE_CAP: usize = 3;

/// An event placed on one grid day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedEvent<'a> {
    pub event: &'a Event,
    pub position: SpanPosition,
}

/// One day of the month grid. `month` is zero-based.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell<'a> {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub key: DateKey,
    /// Padding day from the previous or next month
    pub is_adjacent_month: bool,
    pub is_today: bool,
    pub events: Vec<PlacedEvent<'a>>,
    pub overflow_count: usize,
}

impl<'a> DayCell<'a> {
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}

/// Full 6-week grid for one month, row-major, weeks starting on Monday.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSnapshot<'a> {
    pub month: MonthRef,
    pub cells: Vec<DayCell<'a>>,
}

impl<'a> MonthSnapshot<'a> {
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell<'a>]> {
        self.cells.chunks(7)
    }

    /// Cells that belong to the target month itself.
    pub fn month_cells(&self) -> impl Iterator<Item = &DayCell<'a>> {
        self.cells.iter().filter(|cell| !cell.is_adjacent_month)
    }

    pub fn cell(&self, month: MonthRef, day: u32) -> Option<&DayCell<'a>> {
        self.cells
            .iter()
            .find(|cell| cell.year == month.year && cell.month == month.month && cell.day == day)
    }
}

/// Build the month grid. Date-uncertain events are left out; they are
/// listed separately by the caller.
pub fn build_month_snapshot<'a>(
    events: &'a [Event],
    filters: &FilterSet,
    year: i32,
    month: i32,
    visible_cap: usize,
) -> MonthSnapshot<'a> {
    let today = Local::now().date_naive();
    build_month_snapshot_on(events, filters, year, month, visible_cap, today)
}

/// Same as [`build_month_snapshot`] with "today" supplied by the caller.
pub fn build_month_snapshot_on<'a>(
    events: &'a [Event],
    filters: &FilterSet,
    year: i32,
    month: i32,
    visible_cap: usize,
    today: NaiveDate,
) -> MonthSnapshot<'a> {
    let target = MonthRef::new(year, month);
    let prev = target.prev();
    let next = target.next();
    let offset = target.first_weekday_offset();
    let days = target.days();
    let days_in_prev = prev.days();

    let service = EventService::new(events);
    let cell = |month: MonthRef, day: u32, is_adjacent_month: bool| {
        let key = month.date_key(day);
        let matches = service.events_on_key(filters, &key, UncertainDates::Exclude);
        let overflow_count = matches.len().saturating_sub(visible_cap);
        let events = matches
            .into_iter()
            .take(visible_cap)
            .map(|event| PlacedEvent {
                event,
                position: event.span_position(&key).unwrap_or(SpanPosition::Single),
            })
            .collect();

        DayCell {
            year: month.year,
            month: month.month,
            day,
            is_adjacent_month,
            is_today: is_same_day(today, month.year, month.month as i32, day),
            key,
            events,
            overflow_count,
        }
    };

    let mut cells = Vec::with_capacity(GRID_CELLS);
    for day in (days_in_prev - offset + 1)..=days_in_prev {
        cells.push(cell(prev, day, true));
    }
    for day in 1..=days {
        cells.push(cell(target, day, false));
    }
    let leading = GRID_CELLS - cells.len();
    for day in 1..=leading as u32 {
        cells.push(cell(next, day, true));
    }

    log::debug!(
        "Built month snapshot {}: offset {}, {} days, {} leading",
        target.key_prefix(),
        offset,
        days,
        leading
    );

    MonthSnapshot {
        month: target,
        cells,
    }
}
