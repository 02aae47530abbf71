use std::fmt::Write;

use super::pad;
use crate::models::event::Event;
use crate::services::category::CategoryIndex;
use crate::services::display::{format_table_range, NO_EVENTS_LABEL};
use crate::services::event::EventsTable;

const TITLE_WIDTH: usize = 36;
const DATE_WIDTH: usize = 22;
const CATEGORY_WIDTH: usize = 16;
const LOCATION_WIDTH: usize = 20;

pub struct EventsTableView;

impl EventsTableView {
    pub fn render(table: &EventsTable<'_>, categories: &CategoryIndex) -> String {
        let mut out = String::new();
        if table.confirmed.is_empty() {
            let _ = writeln!(out, "{}", NO_EVENTS_LABEL);
        } else {
            for event in &table.confirmed {
                out.push_str(&Self::row(event, false, categories));
            }
        }

        if !table.uncertain.is_empty() {
            out.push_str("\nДаты не подтверждены\n");
            for event in &table.uncertain {
                out.push_str(&Self::row(event, true, categories));
            }
        }
        out
    }

    fn row(event: &Event, uncertain: bool, categories: &CategoryIndex) -> String {
        let title = if uncertain {
            format!("{} [не подтв.]", event.title)
        } else {
            event.title.clone()
        };
        let category = categories.lookup(&event.category);
        format!(
            "{} {} {} {} {}\n",
            pad(&title, TITLE_WIDTH),
            pad(&format_table_range(event.dates.as_ref(), uncertain), DATE_WIDTH),
            pad(&category.name, CATEGORY_WIDTH),
            pad(event.location.as_deref().unwrap_or("—"), LOCATION_WIDTH),
            event.url.as_deref().unwrap_or("—")
        )
    }
}
