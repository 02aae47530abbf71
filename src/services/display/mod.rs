//! Russian-locale labels for dates and events.
//!
//! Everything here produces plain strings; markup is left to the caller.
//! Date keys that do not parse are echoed back unchanged.

use chrono::{Datelike, NaiveDate};

use crate::models::event::{DateRange, Event};
use crate::services::category::CategoryIndex;
use crate::utils::date::parse_date_key;

pub const MONTHS_NOMINATIVE: [&str; 12] = [
    "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь",
    "Июль", "Август", "Сентябрь", "Октябрь", "Ноябрь", "Декабрь",
];

pub const MONTHS_GENITIVE: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня",
    "июля", "августа", "сентября", "октября", "ноября", "декабря",
];

pub const MONTHS_SHORT: [&str; 12] = [
    "янв", "фев", "мар", "апр", "май", "июн",
    "июл", "авг", "сен", "окт", "ноя", "дек",
];

pub const WEEKDAYS_SHORT: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"];

pub const UNDATED_LABEL: &str = "Дата не определена";
/// Detail card wording for an event without dates
pub const UNDATED_DETAIL_LABEL: &str = "Дата ещё не определена";
pub const UNCERTAIN_NOTE: &str = "дата не подтверждена";
/// Divider in the month view list
pub const UNCERTAIN_SEPARATOR: &str = "Даты ещё не подтверждены";
/// Divider in a year view month card
pub const CARD_UNCERTAIN_SEPARATOR: &str = "даты уточняются";
pub const NO_EVENTS_LABEL: &str = "Нет событий для отображения";
pub const NO_LOCATION_LABEL: &str = "Не указано";
pub const NO_DESCRIPTION_LABEL: &str = "Описание пока недоступно";

const UNCERTAIN_PREFIX: &str = "≈ ";

fn prefix(uncertain: bool) -> &'static str {
    if uncertain {
        UNCERTAIN_PREFIX
    } else {
        ""
    }
}

fn parsed(range: &DateRange) -> Option<(NaiveDate, NaiveDate)> {
    Some((
        parse_date_key(range.start.as_str())?,
        parse_date_key(range.end.as_str())?,
    ))
}

/// `30 января 2026 г.`
pub fn format_date_long(date: NaiveDate) -> String {
    format!(
        "{} {} {} г.",
        date.day(),
        MONTHS_GENITIVE[date.month0() as usize],
        date.year()
    )
}

/// Range label used by the calendar page and the detail card.
pub fn format_date_range(dates: Option<&DateRange>, uncertain: bool) -> String {
    let Some(range) = dates else {
        return UNDATED_LABEL.to_string();
    };
    let Some((start, end)) = parsed(range) else {
        return format!("{}{} – {}", prefix(uncertain), range.start, range.end);
    };

    if range.is_single_day() {
        format!("{}{}", prefix(uncertain), format_date_long(start))
    } else if start.year() == end.year() && start.month() == end.month() {
        format!(
            "{}{}–{} {} {} г.",
            prefix(uncertain),
            start.day(),
            end.day(),
            MONTHS_NOMINATIVE[start.month0() as usize].to_lowercase(),
            start.year()
        )
    } else {
        format!(
            "{}{} – {}",
            prefix(uncertain),
            format_date_long(start),
            format_date_long(end)
        )
    }
}

/// Shorter range label used by the flat events table.
pub fn format_table_range(dates: Option<&DateRange>, uncertain: bool) -> String {
    let Some(range) = dates else {
        return UNDATED_LABEL.to_string();
    };
    let Some((start, end)) = parsed(range) else {
        return format!("{}{} – {}", prefix(uncertain), range.start, range.end);
    };

    if range.is_single_day() {
        format!(
            "{}{} {}",
            prefix(uncertain),
            start.day(),
            MONTHS_GENITIVE[start.month0() as usize]
        )
    } else if start.year() == end.year() && start.month() == end.month() {
        format!(
            "{}{}–{} {}",
            prefix(uncertain),
            start.day(),
            end.day(),
            MONTHS_GENITIVE[start.month0() as usize]
        )
    } else {
        format!(
            "{}{} {} – {} {}",
            prefix(uncertain),
            start.day(),
            MONTHS_SHORT[start.month0() as usize],
            end.day(),
            MONTHS_SHORT[end.month0() as usize]
        )
    }
}

/// Compact day label for the list beside a month card: `30`, `30–31`,
/// `30.01–2.02`; uncertain events get a bare `≈`.
pub fn format_list_label(event: &Event) -> String {
    let label = match event.dates.as_ref() {
        None => UNDATED_LABEL.to_string(),
        Some(range) => match parsed(range) {
            None => range.start.to_string(),
            Some((start, _)) if range.is_single_day() => start.day().to_string(),
            Some((start, end)) if start.month() == end.month() => {
                format!("{}–{}", start.day(), end.day())
            }
            Some((start, end)) => format!(
                "{}.{:02}–{}.{:02}",
                start.day(),
                start.month(),
                end.day(),
                end.month()
            ),
        },
    };

    if event.date_uncertain {
        format!("≈{}", label)
    } else {
        label
    }
}

/// Date cell of the uncertain-events listing.
pub fn format_uncertain_row_date(event: &Event) -> String {
    match event.dates.as_ref() {
        Some(range) => format!("{}{}", UNCERTAIN_PREFIX, format_date_range(Some(range), false)),
        None => UNDATED_LABEL.to_string(),
    }
}

/// Hover title of an event chip.
pub fn event_tooltip(event: &Event) -> String {
    if event.date_uncertain {
        format!("{} ({})", event.title, UNCERTAIN_NOTE)
    } else {
        event.title.clone()
    }
}

/// Everything the detail card shows for one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetail {
    pub title: String,
    pub category_name: String,
    pub color: String,
    pub date_text: String,
    pub is_undated: bool,
    pub is_uncertain: bool,
    pub location: String,
    pub description: String,
    pub url: Option<String>,
}

impl EventDetail {
    pub fn build(event: &Event, categories: &CategoryIndex) -> Self {
        let category = categories.lookup(&event.category);
        let is_undated = !event.has_valid_date();
        let is_uncertain = event.date_uncertain && !is_undated;

        Self {
            title: event.title.clone(),
            category_name: category.name.clone(),
            color: categories.display_color(event).into_owned(),
            date_text: if is_undated {
                UNDATED_DETAIL_LABEL.to_string()
            } else {
                format_date_range(event.dates.as_ref(), is_uncertain)
            },
            is_undated,
            is_uncertain,
            location: event
                .location
                .clone()
                .unwrap_or_else(|| NO_LOCATION_LABEL.to_string()),
            description: event
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION_LABEL.to_string()),
            url: event.url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::Category;
    use test_case::test_case;

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::new(start, end)
    }

    #[test_case("2026-01-30", "2026-01-30", false => "30 января 2026 г."; "single day")]
    #[test_case("2026-01-30", "2026-01-31", false => "30–31 январь 2026 г."; "same month")]
    #[test_case("2026-01-30", "2026-02-02", false => "30 января 2026 г. – 2 февраля 2026 г."; "across months")]
    #[test_case("2026-03-08", "2026-03-08", true => "≈ 8 марта 2026 г."; "uncertain")]
    fn test_format_date_range(start: &str, end: &str, uncertain: bool) -> String {
        format_date_range(Some(&range(start, end)), uncertain)
    }

    #[test_case("2026-05-09", "2026-05-09" => "9 мая"; "single day")]
    #[test_case("2026-05-09", "2026-05-11" => "9–11 мая"; "same month")]
    #[test_case("2026-05-30", "2026-06-02" => "30 май – 2 июн"; "across months")]
    fn test_format_table_range(start: &str, end: &str) -> String {
        format_table_range(Some(&range(start, end)), false)
    }

    #[test]
    fn test_missing_dates_label() {
        assert_eq!(format_date_range(None, true), UNDATED_LABEL);
        assert_eq!(format_table_range(None, false), UNDATED_LABEL);
    }

    #[test]
    fn test_unparseable_dates_echo_raw() {
        assert_eq!(
            format_date_range(Some(&range("2026-13-01", "2026-13-02")), false),
            "2026-13-01 – 2026-13-02"
        );
    }

    #[test]
    fn test_list_labels() {
        let single = Event::builder().id("a").title("A").on("2026-01-05").build().unwrap();
        let same = Event::builder()
            .id("b")
            .title("B")
            .dates("2026-01-05", "2026-01-07")
            .build()
            .unwrap();
        let across = Event::builder()
            .id("c")
            .title("C")
            .dates("2026-01-30", "2026-02-02")
            .date_uncertain(true)
            .build()
            .unwrap();

        assert_eq!(format_list_label(&single), "5");
        assert_eq!(format_list_label(&same), "5–7");
        assert_eq!(format_list_label(&across), "≈30.01–2.02");
    }

    #[test]
    fn test_list_label_end_day_unpadded() {
        let event = Event::builder()
            .id("a")
            .title("A")
            .dates("2026-03-28", "2026-04-09")
            .build()
            .unwrap();
        assert_eq!(format_list_label(&event), "28.03–9.04");
    }

    #[test]
    fn test_uncertain_row_date() {
        let dated = Event::builder()
            .id("a")
            .title("A")
            .on("2026-04-01")
            .date_uncertain(true)
            .build()
            .unwrap();
        let undated = Event::builder().id("b").title("B").date_uncertain(true).build().unwrap();
        assert_eq!(format_uncertain_row_date(&dated), "≈ 1 апреля 2026 г.");
        assert_eq!(format_uncertain_row_date(&undated), UNDATED_LABEL);
    }

    #[test]
    fn test_event_detail_defaults() {
        let categories = CategoryIndex::new(vec![Category::new("party", "Вечеринки", "#f59e0b")]);
        let event = Event::builder()
            .id("a")
            .title("Пати")
            .category("party")
            .on("2026-04-01")
            .date_uncertain(true)
            .build()
            .unwrap();

        let detail = EventDetail::build(&event, &categories);
        assert_eq!(
            detail,
            EventDetail {
                title: "Пати".to_string(),
                category_name: "Вечеринки".to_string(),
                color: "#f59e0b".to_string(),
                date_text: "≈ 1 апреля 2026 г.".to_string(),
                is_undated: false,
                is_uncertain: true,
                location: NO_LOCATION_LABEL.to_string(),
                description: NO_DESCRIPTION_LABEL.to_string(),
                url: None,
            }
        );
    }

    #[test]
    fn test_event_detail_unknown_category() {
        let categories = CategoryIndex::default();
        let event = Event::builder()
            .id("a")
            .title("Встреча")
            .category("meetup")
            .url("https://example.org")
            .build()
            .unwrap();

        let detail = EventDetail::build(&event, &categories);
        assert_eq!(detail.category_name, "meetup");
        assert!(detail.is_undated);
        assert_eq!(detail.date_text, "Дата ещё не определена");
        assert_eq!(detail.url.as_deref(), Some("https://example.org"));
    }
}
