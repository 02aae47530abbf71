use std::fmt::Write;

use super::{fit, pad};
use crate::models::event::SpanPosition;
use crate::services::category::CategoryIndex;
use crate::services::display::{
    event_tooltip, format_date_range, MONTHS_NOMINATIVE, UNCERTAIN_SEPARATOR, WEEKDAYS_SHORT,
};
use crate::services::event::{MonthEventList, MonthListEntry};
use crate::services::grid::{DayCell, MonthSnapshot, PlacedEvent};

/// Width of one day column, borders excluded
const CELL_WIDTH: usize = 14;

pub struct MonthView;

impl MonthView {
    /// Month grid followed by the month's event list.
    pub fn render(
        snapshot: &MonthSnapshot<'_>,
        list: &MonthEventList<'_>,
        categories: &CategoryIndex,
        visible_cap: usize,
    ) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {}",
            MONTHS_NOMINATIVE[snapshot.month.month as usize],
            snapshot.month.year
        );

        let header: Vec<String> = WEEKDAYS_SHORT.iter().map(|d| pad(d, CELL_WIDTH)).collect();
        let _ = writeln!(out, "|{}|", header.join("|"));
        let rule = format!("+{}+", vec!["-".repeat(CELL_WIDTH); 7].join("+"));
        let _ = writeln!(out, "{}", rule);

        for week in snapshot.weeks() {
            for line in 0..visible_cap + 2 {
                let row: Vec<String> = week
                    .iter()
                    .map(|cell| pad(&Self::cell_line(cell, line, visible_cap), CELL_WIDTH))
                    .collect();
                let _ = writeln!(out, "|{}|", row.join("|"));
            }
            let _ = writeln!(out, "{}", rule);
        }

        out.push('\n');
        out.push_str(&Self::render_list(list, categories));
        out
    }

    /// Line `line` of a cell: day number, then event chips, then overflow.
    fn cell_line(cell: &DayCell<'_>, line: usize, visible_cap: usize) -> String {
        if line == 0 {
            let marker = if cell.is_today { "*" } else { "" };
            return if cell.is_adjacent_month {
                format!("({}){}", cell.day, marker)
            } else {
                format!("{}{}", cell.day, marker)
            };
        }
        if let Some(placed) = cell.events.get(line - 1) {
            return Self::chip(placed);
        }
        if line == visible_cap + 1 && cell.overflow_count > 0 {
            return format!("+{} ещё", cell.overflow_count);
        }
        String::new()
    }

    fn chip(placed: &PlacedEvent<'_>) -> String {
        let bar = match placed.position {
            SpanPosition::Single => "•",
            SpanPosition::Start => "┣",
            SpanPosition::Middle => "┃",
            SpanPosition::End => "┗",
        };
        fit(&format!("{} {}", bar, placed.event.title), CELL_WIDTH)
    }

    pub fn render_list(list: &MonthEventList<'_>, categories: &CategoryIndex) -> String {
        if list.is_empty() {
            return "Нет событий в этом месяце\n".to_string();
        }

        let mut out = String::new();
        for entry in list.entries() {
            match entry {
                MonthListEntry::Event(event) => {
                    let category = categories.lookup(&event.category);
                    let _ = writeln!(
                        out,
                        "  {}  {}  [{}, {}]",
                        format_date_range(event.dates.as_ref(), event.date_uncertain),
                        event_tooltip(event),
                        category.name,
                        categories.display_color(event)
                    );
                }
                MonthListEntry::Separator => {
                    let _ = writeln!(out, "  — {} —", UNCERTAIN_SEPARATOR);
                }
            }
        }
        out
    }
}
