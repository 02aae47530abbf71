// Test fixtures - reusable test data
// Provides a consistent events document across the integration tests

#![allow(dead_code)]

use std::io::Write;

use events_calendar::models::event::Event;
use tempfile::NamedTempFile;

/// Events document covering the interesting shapes: a range across a month
/// boundary, a range across the year boundary, stacked days, and uncertain
/// events with and without dates.
pub const EVENTS_JSON: &str = r##"{
  "categories": [
    { "id": "convention", "name": "Конвенты", "color": "#8b5cf6" },
    { "id": "party", "name": "Вечеринки", "color": "#f59e0b" },
    { "id": "meetup", "name": "Встречи", "color": "#10b981" }
  ],
  "events": [
    { "id": "winter-con", "title": "Зимний конвент", "category": "convention",
      "startDate": "2026-01-30", "endDate": "2026-02-02", "location": "Москва",
      "url": "https://example.org/winter" },
    { "id": "nye", "title": "Новогодняя пати", "category": "party",
      "startDate": "2026-12-31", "endDate": "2027-01-01", "color": "#ef4444" },
    { "id": "picnic-1", "title": "Пикник", "category": "meetup",
      "startDate": "2026-06-06", "endDate": "2026-06-06" },
    { "id": "picnic-2", "title": "Прогулка", "category": "meetup",
      "startDate": "2026-06-06", "endDate": "2026-06-06" },
    { "id": "rave", "title": "Рейв", "category": "party",
      "startDate": "2026-06-06", "endDate": "2026-06-07" },
    { "id": "quiz", "title": "Квиз", "category": "meetup",
      "startDate": "2026-06-06", "endDate": "2026-06-06" },
    { "id": "art", "title": "Арт-маркет", "category": "convention",
      "startDate": "2026-06-05", "endDate": "2026-06-06" },
    { "id": "summer-maybe", "title": "Летний фест", "category": "convention",
      "startDate": "2026-07-15", "endDate": "2026-07-17", "dateUncertain": true },
    { "id": "someday-b", "title": "Б-встреча", "category": "meetup",
      "startDate": "", "endDate": "", "dateUncertain": true },
    { "id": "someday-a", "title": "А-встреча", "category": "meetup",
      "startDate": "", "endDate": "", "dateUncertain": true },
    { "id": "ghost", "title": "Без категории", "category": "unknown",
      "startDate": "2026-03-08", "endDate": "2026-03-08" }
  ]
}"##;

pub fn events_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(EVENTS_JSON.as_bytes()).expect("write events");
    file
}

pub fn ids(events: &[&Event]) -> Vec<String> {
    events.iter().map(|e| e.id.clone()).collect()
}
