// Unit tests for the calendar arithmetic helpers
// Months are zero-based and may overflow into neighbouring years

use events_calendar::utils::date::{date_key, days_in_month, first_weekday_offset, MonthRef};
use test_case::test_case;

#[test_case(2026, 0 => 31 ; "january")]
#[test_case(2026, 1 => 28 ; "february common year")]
#[test_case(2024, 1 => 29 ; "february leap year")]
#[test_case(1900, 1 => 28 ; "february century not leap")]
#[test_case(2000, 1 => 29 ; "february four hundred leap")]
#[test_case(2026, 3 => 30 ; "april")]
#[test_case(2026, 10 => 30 ; "november")]
#[test_case(2026, 11 => 31 ; "december")]
#[test_case(2025, 12 => 31 ; "month twelve is next january")]
#[test_case(2025, 13 => 28 ; "month thirteen is next february")]
#[test_case(2025, -11 => 29 ; "negative month wraps back into leap february")]
#[test_case(2024, -11 => 28 ; "negative month wraps back into common february")]
fn test_days_in_month(year: i32, month: i32) -> u32 {
    days_in_month(year, month)
}

#[test_case(2026, 0 => 3 ; "january 2026 starts thursday")]
#[test_case(2026, 1 => 6 ; "february 2026 starts sunday")]
#[test_case(2026, 5 => 0 ; "june 2026 starts monday")]
#[test_case(2025, 11 => 0 ; "december 2025 starts monday")]
#[test_case(2024, 1 => 3 ; "february 2024 starts thursday")]
#[test_case(2026, 12 => 4 ; "overflow into january 2027")]
#[test_case(2026, -1 => 0 ; "underflow into december 2025")]
fn test_first_weekday_offset(year: i32, month: i32) -> u32 {
    first_weekday_offset(year, month)
}

#[test_case(2026, 0, 5 => "2026-01-05" ; "zero padded")]
#[test_case(2026, 11, 31 => "2026-12-31" ; "december")]
#[test_case(2026, 12, 1 => "2027-01-01" ; "month twelve rolls the year")]
#[test_case(2026, -1, 31 => "2025-12-31" ; "month minus one rolls back")]
#[test_case(987, 2, 9 => "0987-03-09" ; "four digit year")]
fn test_date_key(year: i32, month: i32, day: u32) -> String {
    date_key(year, month, day).as_str().to_string()
}

#[test]
fn test_keys_sort_chronologically() {
    let mut keys = vec![
        date_key(2026, 11, 31),
        date_key(2026, 0, 9),
        date_key(2027, 0, 1),
        date_key(2026, 0, 10),
    ];
    keys.sort();
    let keys: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["2026-01-09", "2026-01-10", "2026-12-31", "2027-01-01"]);
}

#[test]
fn test_month_ref_navigation_crosses_years() {
    let january = MonthRef::new(2026, 0);
    assert_eq!(january.prev(), MonthRef::new(2025, 11));
    assert_eq!(MonthRef::new(2026, 11).next(), MonthRef::new(2027, 0));
    assert_eq!(january.key_prefix(), "2026-01");
}

#[test]
fn test_grid_fits_every_month() {
    // offset + days never exceeds six weeks
    for year in 1990..2040 {
        for month in 0..12 {
            assert!(first_weekday_offset(year, month) + days_in_month(year, month) <= 42);
        }
    }
}
