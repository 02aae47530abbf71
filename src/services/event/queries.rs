use std::cmp::Ordering;

use super::{EventService, UncertainDates};
use crate::models::event::{DateKey, Event};
use crate::models::view_state::FilterSet;
use crate::utils::date::{date_key, MonthRef};

/// Events of one month for the list beside a month grid: confirmed first,
/// then the date-uncertain ones, each group ascending by start date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthEventList<'a> {
    pub confirmed: Vec<&'a Event>,
    pub uncertain: Vec<&'a Event>,
}

/// One line of a rendered month event list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MonthListEntry<'a> {
    Event(&'a Event),
    /// "Dates not yet confirmed" divider
    Separator,
}

impl<'a> MonthEventList<'a> {
    pub fn is_empty(&self) -> bool {
        self.confirmed.is_empty() && self.uncertain.is_empty()
    }

    pub fn len(&self) -> usize {
        self.confirmed.len() + self.uncertain.len()
    }

    /// The divider is only drawn when both groups have something in them.
    pub fn has_separator(&self) -> bool {
        !self.confirmed.is_empty() && !self.uncertain.is_empty()
    }

    pub fn entries(&self) -> Vec<MonthListEntry<'a>> {
        let mut entries: Vec<MonthListEntry<'a>> = self
            .confirmed
            .iter()
            .map(|&event| MonthListEntry::Event(event))
            .collect();
        if self.has_separator() {
            entries.push(MonthListEntry::Separator);
        }
        entries.extend(self.uncertain.iter().map(|&event| MonthListEntry::Event(event)));
        entries
    }
}

/// Flat events table: every filtered event, split by the uncertain flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventsTable<'a> {
    pub confirmed: Vec<&'a Event>,
    pub uncertain: Vec<&'a Event>,
}

impl<'a> EventService<'a> {
    /// Events whose range covers the given day, ascending by start date.
    /// Equal start dates keep their input order.
    pub fn events_on_day(
        &self,
        filters: &FilterSet,
        year: i32,
        month: i32,
        day: u32,
        uncertain: UncertainDates,
    ) -> Vec<&'a Event> {
        self.events_on_key(filters, &date_key(year, month, day), uncertain)
    }

    pub fn events_on_key(
        &self,
        filters: &FilterSet,
        key: &DateKey,
        uncertain: UncertainDates,
    ) -> Vec<&'a Event> {
        let mut matches: Vec<&'a Event> = self
            .events
            .iter()
            .filter(|event| {
                uncertain.admits(event) && filters.allows(&event.category) && event.occurs_on(key)
            })
            .collect();
        matches.sort_by(|a, b| a.start_key().cmp(&b.start_key()));
        matches
    }

    /// Events whose month range intersects the given month, in input order.
    pub fn events_in_month(
        &self,
        filters: &FilterSet,
        year: i32,
        month: i32,
        uncertain: UncertainDates,
    ) -> Vec<&'a Event> {
        let prefix = MonthRef::new(year, month).key_prefix();
        self.events
            .iter()
            .filter(|event| {
                uncertain.admits(event)
                    && filters.allows(&event.category)
                    && event.touches_month(&prefix)
            })
            .collect()
    }

    pub fn month_event_list(&self, filters: &FilterSet, year: i32, month: i32) -> MonthEventList<'a> {
        let (mut uncertain, mut confirmed): (Vec<&'a Event>, Vec<&'a Event>) = self
            .events_in_month(filters, year, month, UncertainDates::Include)
            .into_iter()
            .partition(|event| event.date_uncertain);

        confirmed.sort_by(|a, b| a.start_key().cmp(&b.start_key()));
        uncertain.sort_by(|a, b| a.start_key().cmp(&b.start_key()));

        log::debug!(
            "Month list {}-{}: {} confirmed, {} uncertain",
            year,
            month,
            confirmed.len(),
            uncertain.len()
        );

        MonthEventList {
            confirmed,
            uncertain,
        }
    }

    /// Every date-uncertain event, dated or not. Dated events come first by
    /// start date, then undated events by title.
    pub fn undated_and_uncertain_events(&self, filters: &FilterSet) -> Vec<&'a Event> {
        let mut matches: Vec<&'a Event> = self
            .events
            .iter()
            .filter(|event| event.date_uncertain && filters.allows(&event.category))
            .collect();
        matches.sort_by(|a, b| compare_dated_then_title(a, b));
        matches
    }

    pub fn events_table(&self, filters: &FilterSet) -> EventsTable<'a> {
        let (mut uncertain, mut confirmed): (Vec<&'a Event>, Vec<&'a Event>) = self
            .events
            .iter()
            .filter(|event| filters.allows(&event.category))
            .partition(|event| event.date_uncertain);

        confirmed.sort_by(|a, b| compare_dated_then_title(a, b));
        uncertain.sort_by(|a, b| compare_dated_then_title(a, b));

        EventsTable {
            confirmed,
            uncertain,
        }
    }
}

/// Dated events before undated ones; dated by start date, undated by title.
pub fn compare_dated_then_title(a: &Event, b: &Event) -> Ordering {
    match (a.start_key(), b.start_key()) {
        (Some(a_start), Some(b_start)) => a_start.cmp(b_start),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.title.cmp(&b.title),
    }
}
