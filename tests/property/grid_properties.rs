// Property-based tests for the month grid and event queries
// Random event sets and months, checked against the grid invariants

use events_calendar::models::event::{DateKey, Event, SpanPosition};
use events_calendar::models::view_state::FilterSet;
use events_calendar::services::event::{EventService, UncertainDates};
use events_calendar::services::grid::build_month_snapshot;
use events_calendar::utils::date::{date_key, days_in_month, MonthRef};
use proptest::prelude::*;

const CATEGORIES: [&str; 3] = ["convention", "party", "meetup"];

/// Events inside 2025-11 .. 2027-02, a quarter of them undated.
fn arb_event(index: usize) -> impl Strategy<Value = Event> {
    (
        0i32..16,
        1u32..=28,
        0u32..40,
        0usize..3,
        any::<bool>(),
        0u8..4,
    )
        .prop_map(move |(month_offset, day, length, category, uncertain, undated)| {
            let builder = Event::builder()
                .id(format!("e{index}"))
                .title(format!("Event {index}"))
                .category(CATEGORIES[category])
                .date_uncertain(uncertain);
            if undated == 0 {
                return builder.dates("", "").build().unwrap();
            }
            let start = chrono::NaiveDate::from_ymd_opt(2025, 11, day).unwrap()
                + chrono::Months::new(month_offset as u32);
            let end = start + chrono::Duration::days(length as i64);
            builder
                .dates(
                    start.format("%Y-%m-%d").to_string(),
                    end.format("%Y-%m-%d").to_string(),
                )
                .build()
                .unwrap()
        })
}

fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    (0usize..24).prop_flat_map(|count| {
        (0..count).map(arb_event).collect::<Vec<_>>()
    })
}

fn arb_filters() -> impl Strategy<Value = FilterSet> {
    proptest::sample::subsequence(CATEGORIES.to_vec(), 0..=2)
        .prop_map(|ids| ids.into_iter().collect())
}

proptest! {
    /// Property: every month grid has 42 cells and exactly the month's days
    /// outside the padding
    #[test]
    fn prop_snapshot_always_42_cells(
        year in 1900i32..2200,
        month in 0i32..12,
        cap in 1usize..6,
    ) {
        let snapshot = build_month_snapshot(&[], &FilterSet::new(), year, month, cap);
        prop_assert_eq!(snapshot.cells.len(), 42);
        prop_assert_eq!(
            snapshot.cells.iter().filter(|c| !c.is_adjacent_month).count() as u32,
            days_in_month(year, month)
        );
        // consecutive, gap-free keys
        for pair in snapshot.cells.windows(2) {
            prop_assert!(pair[0].key < pair[1].key);
        }
    }

    /// Property: a multi-day range has one start, one end, middles elsewhere
    #[test]
    fn prop_span_positions(length in 0i64..60, day in 1u32..=28, month in 1u32..=12) {
        let start = chrono::NaiveDate::from_ymd_opt(2026, month, day).unwrap();
        let end = start + chrono::Duration::days(length);
        let event = Event::builder()
            .id("x")
            .title("x")
            .dates(start.format("%Y-%m-%d").to_string(), end.format("%Y-%m-%d").to_string())
            .build()
            .unwrap();

        let positions: Vec<SpanPosition> = start
            .iter_days()
            .take(length as usize + 1)
            .map(|d| event.span_position(&DateKey::new(d.format("%Y-%m-%d").to_string())).unwrap())
            .collect();

        if length == 0 {
            prop_assert_eq!(positions, vec![SpanPosition::Single]);
        } else {
            prop_assert_eq!(positions.iter().filter(|p| **p == SpanPosition::Start).count(), 1);
            prop_assert_eq!(positions.iter().filter(|p| **p == SpanPosition::End).count(), 1);
            prop_assert_eq!(positions[0], SpanPosition::Start);
            prop_assert_eq!(positions[length as usize], SpanPosition::End);
            prop_assert!(positions[1..length as usize].iter().all(|p| *p == SpanPosition::Middle));
        }
    }

    /// Property: blank dates are invalid no matter the whitespace
    #[test]
    fn prop_blank_dates_invalid(start in "[ \t]{0,3}", end_blank in any::<bool>()) {
        let end = if end_blank { String::new() } else { "2026-01-01".to_string() };
        let event = Event::builder().id("x").title("x").dates(start, end).build().unwrap();
        prop_assert!(!event.has_valid_date());
    }

    /// Property: day queries honour the filter, validity and sort order
    #[test]
    fn prop_events_on_day_guarantees(
        events in arb_events(),
        filters in arb_filters(),
        month_offset in 0i32..16,
        day in 1u32..=28,
    ) {
        let service = EventService::new(&events);
        let found = service.events_on_day(&filters, 2025, 10 + month_offset, day, UncertainDates::Exclude);
        let key = date_key(2025, 10 + month_offset, day);

        for event in &found {
            prop_assert!(event.has_valid_date());
            prop_assert!(!event.date_uncertain);
            prop_assert!(filters.allows(&event.category));
            prop_assert!(event.occurs_on(&key));
        }
        // ascending by start, input order for ties
        for pair in found.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(a.start_key() <= b.start_key());
            if a.start_key() == b.start_key() {
                let pos_a = events.iter().position(|e| e.id == a.id).unwrap();
                let pos_b = events.iter().position(|e| e.id == b.id).unwrap();
                prop_assert!(pos_a < pos_b);
            }
        }
    }

    /// Property: month membership is exactly month-range intersection
    #[test]
    fn prop_events_in_month_intersection(events in arb_events(), month_offset in 0i32..16) {
        let month = MonthRef::new(2025, 10 + month_offset);
        let service = EventService::new(&events);
        let found = service.events_in_month(&FilterSet::new(), month.year, month.month as i32, UncertainDates::Include);

        let expected: Vec<&Event> = events
            .iter()
            .filter(|e| match &e.dates {
                Some(range) => {
                    let prefix = month.key_prefix();
                    range.start.month_prefix() <= prefix.as_str() && prefix.as_str() <= range.end.month_prefix()
                }
                None => false,
            })
            .collect();
        prop_assert_eq!(found, expected);
    }

    /// Property: grid cells agree with the day query and the visible cap
    #[test]
    fn prop_cells_match_day_query(events in arb_events(), month_offset in 0i32..14, cap in 1usize..5) {
        let month = MonthRef::new(2025, 10 + month_offset);
        let filters = FilterSet::new();
        let snapshot = build_month_snapshot(&events, &filters, month.year, month.month as i32, cap);
        let service = EventService::new(&events);

        for cell in &snapshot.cells {
            let all = service.events_on_key(&filters, &cell.key, UncertainDates::Exclude);
            prop_assert_eq!(cell.events.len(), all.len().min(cap));
            prop_assert_eq!(cell.overflow_count, all.len().saturating_sub(cap));
            for (placed, expected) in cell.events.iter().zip(&all) {
                prop_assert_eq!(&placed.event.id, &expected.id);
            }
        }
    }
}
