// Event module
// Calendar event model as loaded from the events document

use std::fmt;

use serde::Deserialize;

/// Canonical `YYYY-MM-DD` date identity.
///
/// Keys compare lexicographically, which for well-formed ISO dates is the
/// same as chronological order. The key is not validated; callers supply
/// pre-validated strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(String);

impl DateKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `YYYY-MM` portion of the key.
    pub fn month_prefix(&self) -> &str {
        self.0.get(..7).unwrap_or(&self.0)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Role of an event on one day of its range, used to draw continuous bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanPosition {
    Single,
    Start,
    Middle,
    End,
}

impl SpanPosition {
    pub fn is_multi_day(self) -> bool {
        self != SpanPosition::Single
    }
}

/// Inclusive `[start, end]` range of date keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateKey,
    pub end: DateKey,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: DateKey::new(start),
            end: DateKey::new(end),
        }
    }

    /// Build a range from two optional raw strings. Absent or blank on
    /// either side means there is no usable range at all.
    pub fn from_parts(start: Option<&str>, end: Option<&str>) -> Option<Self> {
        let start = start.map(str::trim).filter(|s| !s.is_empty())?;
        let end = end.map(str::trim).filter(|s| !s.is_empty())?;
        Some(Self::new(start, end))
    }

    pub fn contains(&self, key: &DateKey) -> bool {
        self.start <= *key && *key <= self.end
    }

    /// True when the months touched by the range include `month_prefix`
    /// (a `YYYY-MM` string).
    pub fn touches_month(&self, month_prefix: &str) -> bool {
        self.start.month_prefix() <= month_prefix && month_prefix <= self.end.month_prefix()
    }

    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    /// Only meaningful for keys inside the range.
    pub fn span_position(&self, key: &DateKey) -> SpanPosition {
        if self.start == self.end {
            SpanPosition::Single
        } else if *key == self.start {
            SpanPosition::Start
        } else if *key == self.end {
            SpanPosition::End
        } else {
            SpanPosition::Middle
        }
    }
}

/// A calendar event from the events document. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawEvent")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub category: String,
    /// `None` when either date is absent or blank.
    pub dates: Option<DateRange>,
    pub date_uncertain: bool,
    pub color: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

impl Event {
    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Whether the event can be placed on the calendar grid at all.
    pub fn has_valid_date(&self) -> bool {
        self.dates.is_some()
    }

    /// Span position of the event on `key`, or `None` for undated events.
    pub fn span_position(&self, key: &DateKey) -> Option<SpanPosition> {
        self.dates.as_ref().map(|range| range.span_position(key))
    }

    pub fn occurs_on(&self, key: &DateKey) -> bool {
        self.dates.as_ref().is_some_and(|range| range.contains(key))
    }

    pub fn touches_month(&self, month_prefix: &str) -> bool {
        self.dates
            .as_ref()
            .is_some_and(|range| range.touches_month(month_prefix))
    }

    pub fn start_key(&self) -> Option<&DateKey> {
        self.dates.as_ref().map(|range| &range.start)
    }
}

/// Wire shape of an event in the JSON document.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawEvent {
    id: String,
    title: String,
    category: String,
    start_date: Option<String>,
    end_date: Option<String>,
    date_uncertain: bool,
    color: Option<String>,
    location: Option<String>,
    description: Option<String>,
    url: Option<String>,
}

impl From<RawEvent> for Event {
    fn from(raw: RawEvent) -> Self {
        let dates = DateRange::from_parts(raw.start_date.as_deref(), raw.end_date.as_deref());

        let half_present = [&raw.start_date, &raw.end_date]
            .iter()
            .any(|value| value.as_deref().is_some_and(|v| !v.trim().is_empty()));
        if dates.is_none() && half_present {
            log::warn!(
                "Event '{}' has only one of startDate/endDate; treating it as undated",
                raw.id
            );
        }
        if let Some(range) = &dates {
            if range.start > range.end {
                log::warn!(
                    "Event '{}' starts ({}) after it ends ({})",
                    raw.id,
                    range.start,
                    range.end
                );
            }
        }

        Event {
            id: raw.id,
            title: raw.title,
            category: raw.category,
            dates,
            date_uncertain: raw.date_uncertain,
            color: non_blank(raw.color),
            location: non_blank(raw.location),
            description: non_blank(raw.description),
            url: non_blank(raw.url),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    id: Option<String>,
    title: Option<String>,
    category: String,
    start_date: Option<String>,
    end_date: Option<String>,
    date_uncertain: bool,
    color: Option<String>,
    location: Option<String>,
    description: Option<String>,
    url: Option<String>,
}

impl EventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            category: String::new(),
            start_date: None,
            end_date: None,
            date_uncertain: false,
            color: None,
            location: None,
            description: None,
            url: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set both dates as raw `YYYY-MM-DD` strings (blank means absent).
    pub fn dates(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self.end_date = Some(end.into());
        self
    }

    /// Convenience for a single-day event.
    pub fn on(self, date: impl Into<String>) -> Self {
        let date = date.into();
        self.dates(date.clone(), date)
    }

    pub fn date_uncertain(mut self, uncertain: bool) -> Self {
        self.date_uncertain = uncertain;
        self
    }

    /// Set the event color (hex format)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, String> {
        let id = self.id.ok_or("Event id is required")?;
        if id.trim().is_empty() {
            return Err("Event id cannot be empty".to_string());
        }
        let title = self.title.ok_or("Event title is required")?;

        Ok(Event::from(RawEvent {
            id,
            title,
            category: self.category,
            start_date: self.start_date,
            end_date: self.end_date,
            date_uncertain: self.date_uncertain,
            color: self.color,
            location: self.location,
            description: self.description,
            url: self.url,
        }))
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
