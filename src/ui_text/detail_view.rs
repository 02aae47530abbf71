use std::fmt::Write;

use crate::services::display::{EventDetail, UNCERTAIN_NOTE};

pub struct DetailView;

impl DetailView {
    pub fn render(detail: &EventDetail) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", detail.title);
        let _ = writeln!(out, "Категория: {} ({})", detail.category_name, detail.color);
        if detail.is_uncertain {
            let _ = writeln!(out, "Дата: {} ({})", detail.date_text, UNCERTAIN_NOTE);
        } else {
            let _ = writeln!(out, "Дата: {}", detail.date_text);
        }
        let _ = writeln!(out, "Место: {}", detail.location);
        let _ = writeln!(out, "\n{}", detail.description);
        if let Some(url) = &detail.url {
            let _ = writeln!(out, "\nСсылка: {}", url);
        }
        out
    }
}
