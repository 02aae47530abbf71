//! Year overview: twelve month cards, each with a mini calendar and the
//! month's event list.

use super::build_month_snapshot;
use crate::models::event::Event;
use crate::models::view_state::FilterSet;
use crate::services::event::{EventService, MonthEventList, UncertainDates};
use crate::utils::date::MonthRef;

/// One day of a mini calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiniDay {
    pub day: u32,
    pub is_adjacent_month: bool,
    pub is_today: bool,
    pub has_event: bool,
    pub has_multi_day: bool,
    /// Own color of the first event of the day, if it has one
    pub accent_color: Option<String>,
}

impl MiniDay {
    fn padding(day: u32) -> Self {
        Self {
            day,
            is_adjacent_month: true,
            is_today: false,
            has_event: false,
            has_multi_day: false,
            accent_color: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthCard<'a> {
    pub month: MonthRef,
    /// Grid-eligible events touching the month
    pub event_count: usize,
    pub mini_calendar: Vec<MiniDay>,
    pub events: MonthEventList<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YearOverview<'a> {
    pub year: i32,
    pub months: Vec<MonthCard<'a>>,
    /// Shown under the grid, hidden when empty
    pub uncertain: Vec<&'a Event>,
}

pub fn build_year_overview<'a>(events: &'a [Event], filters: &FilterSet, year: i32) -> YearOverview<'a> {
    let service = EventService::new(events);
    let months = (0..12)
        .map(|month| build_month_card(&service, filters, MonthRef::new(year, month)))
        .collect();

    YearOverview {
        year,
        months,
        uncertain: service.undated_and_uncertain_events(filters),
    }
}

fn build_month_card<'a>(service: &EventService<'a>, filters: &FilterSet, month: MonthRef) -> MonthCard<'a> {
    let snapshot = build_month_snapshot(service.events, filters, month.year, month.month as i32, usize::MAX);
    let mini_calendar = snapshot
        .cells
        .iter()
        .map(|cell| {
            if cell.is_adjacent_month {
                return MiniDay::padding(cell.day);
            }
            MiniDay {
                day: cell.day,
                is_adjacent_month: false,
                is_today: cell.is_today,
                has_event: cell.has_events(),
                has_multi_day: cell.events.iter().any(|placed| placed.position.is_multi_day()),
                accent_color: cell.events.first().and_then(|placed| placed.event.color.clone()),
            }
        })
        .collect();

    MonthCard {
        month,
        event_count: service
            .events_in_month(filters, month.year, month.month as i32, UncertainDates::Exclude)
            .len(),
        mini_calendar,
        events: service.month_event_list(filters, month.year, month.month as i32),
    }
}
