//! Event query engine.
//! Answers "which events fall on this day / in this month" over the loaded
//! event collection, with the category filter passed in on every call.

use crate::models::event::Event;

pub mod queries;

pub use queries::{EventsTable, MonthEventList, MonthListEntry};

/// Whether date-uncertain events take part in a grid query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UncertainDates {
    /// Year and month grids route uncertain events to their own listing
    Exclude,
    Include,
}

impl UncertainDates {
    fn admits(self, event: &Event) -> bool {
        self == UncertainDates::Include || !event.date_uncertain
    }
}

/// Stateless query service over an immutable event slice.
#[derive(Debug, Clone, Copy)]
pub struct EventService<'a> {
    pub(crate) events: &'a [Event],
}

impl<'a> EventService<'a> {
    pub fn new(events: &'a [Event]) -> Self {
        Self { events }
    }

    /// Look up an event by id. A miss is not an error.
    pub fn find(&self, id: &str) -> Option<&'a Event> {
        self.events.iter().find(|event| event.id == id)
    }
}
