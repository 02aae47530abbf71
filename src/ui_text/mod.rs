//! Plain-text presentation of the calendar views for the terminal binary.
//!
//! Each view takes already-computed query results and returns a `String`;
//! only the filter panel looks at the filter, and none of them touch the
//! event collection directly.

pub mod detail_view;
pub mod events_table;
pub mod filter_panel;
pub mod month_view;
pub mod year_view;

pub use detail_view::DetailView;
pub use events_table::EventsTableView;
pub use filter_panel::FilterPanel;
pub use month_view::MonthView;
pub use year_view::YearView;

/// Truncate `text` to `width` characters, ending in "…" when cut.
pub(crate) fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut truncated: String = text.chars().take(width - 1).collect();
    truncated.push('…');
    truncated
}

/// Truncate and right-pad to exactly `width` characters.
pub(crate) fn pad(text: &str, width: usize) -> String {
    let fitted = fit(text, width);
    let fill = width.saturating_sub(fitted.chars().count());
    format!("{}{}", fitted, " ".repeat(fill))
}
