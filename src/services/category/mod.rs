//! Category lookup for event display.
//!
//! Wraps the document's category list in an id-keyed map. Lookups never
//! fail: an unknown id resolves to a gray fallback category named after
//! the id itself.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::models::category::Category;
use crate::models::event::Event;

/// Read-only index over the categories of one events document.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    /// Document order, used for the filter panel
    categories: Vec<Category>,
    by_id: HashMap<String, usize>,
}

impl CategoryIndex {
    pub fn new(categories: Vec<Category>) -> Self {
        let mut by_id = HashMap::with_capacity(categories.len());
        for (position, category) in categories.iter().enumerate() {
            if !category.has_valid_color() {
                log::warn!(
                    "Category '{}' has an invalid color '{}'",
                    category.id,
                    category.color
                );
            }
            // First definition wins, like a linear scan would
            by_id.entry(category.id.clone()).or_insert(position);
        }
        Self { categories, by_id }
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.by_id.get(id).map(|&position| &self.categories[position])
    }

    /// Category for `id`, or a synthetic fallback when it is not defined.
    pub fn lookup(&self, id: &str) -> Cow<'_, Category> {
        match self.get(id) {
            Some(category) => Cow::Borrowed(category),
            None => Cow::Owned(Category::fallback(id)),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Event's own color if set, otherwise its category's color.
    pub fn display_color<'a>(&'a self, event: &'a Event) -> Cow<'a, str> {
        match &event.color {
            Some(color) => Cow::Borrowed(color.as_str()),
            None => match self.lookup(&event.category) {
                Cow::Borrowed(category) => Cow::Borrowed(category.color.as_str()),
                Cow::Owned(category) => Cow::Owned(category.color),
            },
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn as_slice(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
