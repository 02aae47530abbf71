use std::fmt::Write;

use super::pad;
use crate::models::view_state::FilterSet;
use crate::services::category::CategoryIndex;

const ID_WIDTH: usize = 16;
const NAME_WIDTH: usize = 20;

/// Category filter buttons: one line per category in document order,
/// `[x]` for active ones.
pub struct FilterPanel;

impl FilterPanel {
    pub fn render(categories: &CategoryIndex, filters: &FilterSet) -> String {
        let mut out = String::new();
        if filters.is_empty() {
            let _ = writeln!(out, "Категории");
        } else {
            let _ = writeln!(out, "Категории (выбрано: {})", filters.len());
        }
        if categories.is_empty() {
            let _ = writeln!(out, "  нет категорий");
            return out;
        }

        for category in categories.iter() {
            let marker = if filters.contains(&category.id) { "[x]" } else { "[ ]" };
            let _ = writeln!(
                out,
                "  {} {} {} {}",
                marker,
                pad(&category.id, ID_WIDTH),
                pad(&category.name, NAME_WIDTH),
                category.color
            );
        }
        out
    }
}
