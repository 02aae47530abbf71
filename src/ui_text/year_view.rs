use std::fmt::Write;

use super::pad;
use crate::models::event::Event;
use crate::services::category::CategoryIndex;
use crate::services::display::{
    event_tooltip, format_list_label, format_uncertain_row_date, CARD_UNCERTAIN_SEPARATOR,
    MONTHS_NOMINATIVE, WEEKDAYS_SHORT,
};
use crate::services::event::MonthListEntry;
use crate::services::grid::{MiniDay, MonthCard, YearOverview};

pub struct YearView;

impl YearView {
    pub fn render(overview: &YearOverview<'_>, categories: &CategoryIndex) -> String {
        let mut out = String::new();
        for card in &overview.months {
            out.push_str(&Self::render_card(card));
            out.push('\n');
        }
        out.push_str(&Self::render_uncertain(&overview.uncertain, categories));
        out
    }

    fn render_card(card: &MonthCard<'_>) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {} · событий: {}",
            MONTHS_NOMINATIVE[card.month.month as usize],
            card.month.year,
            card.event_count
        );
        let header: Vec<String> = WEEKDAYS_SHORT.iter().map(|d| pad(d, 4)).collect();
        let _ = writeln!(out, "{}", header.concat().trim_end());
        for week in card.mini_calendar.chunks(7) {
            let row: Vec<String> = week.iter().map(|day| pad(&Self::mini_day(day), 4)).collect();
            let _ = writeln!(out, "{}", row.concat().trim_end());
        }

        for entry in card.events.entries() {
            match entry {
                MonthListEntry::Event(event) => {
                    let _ = writeln!(out, "  {:>11}  {}", format_list_label(event), event_tooltip(event));
                }
                MonthListEntry::Separator => {
                    let _ = writeln!(out, "  — {} —", CARD_UNCERTAIN_SEPARATOR);
                }
            }
        }
        out
    }

    /// `[5]` today, `5•` with events, `5═` with a multi-day event.
    fn mini_day(day: &MiniDay) -> String {
        if day.is_adjacent_month {
            return String::new();
        }
        let marker = if day.has_multi_day {
            "═"
        } else if day.has_event {
            "•"
        } else {
            ""
        };
        if day.is_today {
            format!("[{}]{}", day.day, marker)
        } else {
            format!("{:>2}{}", day.day, marker)
        }
    }

    /// Undated and date-uncertain events; empty output when there are none.
    pub fn render_uncertain(events: &[&Event], categories: &CategoryIndex) -> String {
        if events.is_empty() {
            return String::new();
        }
        let mut out = String::from("Даты не подтверждены\n");
        for event in events {
            let category = categories.lookup(&event.category);
            let _ = writeln!(
                out,
                "  {} | {} | {} | {} | {}",
                event.title,
                format_uncertain_row_date(event),
                category.name,
                event.location.as_deref().unwrap_or("—"),
                event.url.as_deref().unwrap_or("—")
            );
        }
        out
    }
}
