//! View state owned by the presentation layer.
//!
//! The active category filter and the selected month are passed explicitly
//! into every query; nothing in the core reads them from ambient state.
//! The state round-trips through a URL query string such as
//! `categories=convention%2Cparty&month=3`.

use std::collections::BTreeSet;

use crate::models::category::Category;

/// Active category ids. Empty means "show everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    ids: BTreeSet<String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn contains(&self, category_id: &str) -> bool {
        self.ids.contains(category_id)
    }

    /// The single category predicate shared by every query.
    pub fn allows(&self, category_id: &str) -> bool {
        self.ids.is_empty() || self.ids.contains(category_id)
    }

    pub fn insert(&mut self, category_id: impl Into<String>) -> bool {
        self.ids.insert(category_id.into())
    }

    /// Flip membership of `category_id`; returns whether it is now active.
    pub fn toggle(&mut self, category_id: &str) -> bool {
        if self.ids.remove(category_id) {
            false
        } else {
            self.ids.insert(category_id.to_string());
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for FilterSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Current filter plus the selected month (`None` is the year view).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub filters: FilterSet,
    pub month: Option<u32>,
}

impl ViewState {
    pub fn toggle_filter(&mut self, category_id: &str) -> bool {
        self.filters.toggle(category_id)
    }

    pub fn show_month(&mut self, month: u32) {
        if month < 12 {
            self.month = Some(month);
        }
    }

    pub fn show_year(&mut self) {
        self.month = None;
    }

    /// Step the month view forward or back, wrapping within the year.
    /// Does nothing while the year view is shown.
    pub fn navigate_month(&mut self, delta: i32) {
        if let Some(month) = self.month {
            self.month = Some((month as i32 + delta).rem_euclid(12) as u32);
        }
    }

    /// Encode as a URL query string without the leading `?`.
    pub fn to_query(&self) -> String {
        let mut params = Vec::new();
        if !self.filters.is_empty() {
            let joined = self.filters.iter().collect::<Vec<_>>().join(",");
            params.push(format!("categories={}", urlencoding::encode(&joined)));
        }
        if let Some(month) = self.month {
            params.push(format!("month={}", month));
        }
        params.join("&")
    }

    /// Decode a URL query. Unknown category ids and out-of-range months
    /// are dropped silently.
    pub fn from_query(query: &str, categories: &[Category]) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut state = ViewState::default();

        if let Some(value) = query_param(query, "categories") {
            for id in value.split(',') {
                if categories.iter().any(|c| c.id == id) {
                    state.filters.insert(id);
                }
            }
        }

        if let Some(month) = query_param(query, "month").and_then(|v| leading_int(&v)) {
            if (0..12).contains(&month) {
                state.month = Some(month as u32);
            }
        }

        state
    }
}

/// First value of `key` in a form-encoded query string.
fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(name)? == key).then(|| decode_component(value))?
        })
}

fn decode_component(raw: &str) -> Option<String> {
    urlencoding::decode(&raw.replace('+', " "))
        .ok()
        .map(|value| value.into_owned())
}

/// Lenient integer parse: optional sign followed by leading digits.
fn leading_int(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (sign, digits) = match value.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, value.strip_prefix('+').unwrap_or(value)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}
