//! Loading of the events document (`{ "events": [...], "categories": [...] }`).
//!
//! The document is read once at startup and never mutated afterwards.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::category::Category;
use crate::models::event::Event;
use crate::services::category::CategoryIndex;
use crate::services::event::EventService;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EventsDocument {
    pub events: Vec<Event>,
    pub categories: Vec<Category>,
}

/// A loaded document with its category index built.
#[derive(Debug, Clone, Default)]
pub struct Calendar {
    pub events: Vec<Event>,
    pub categories: CategoryIndex,
}

impl Calendar {
    pub fn new(document: EventsDocument) -> Self {
        Self {
            events: document.events,
            categories: CategoryIndex::new(document.categories),
        }
    }

    pub fn event_service(&self) -> EventService<'_> {
        EventService::new(&self.events)
    }
}

impl EventsDocument {
    pub fn from_json(data: &str) -> Result<Self> {
        let document: EventsDocument =
            serde_json::from_str(data).context("failed to parse events document")?;
        Ok(document)
    }

    pub fn undated_count(&self) -> usize {
        self.events.iter().filter(|e| !e.has_valid_date()).count()
    }
}

pub fn load_document(path: &Path) -> Result<EventsDocument> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read events from {}", path.display()))?;
    let document = EventsDocument::from_json(&data)
        .with_context(|| format!("failed to deserialize events from {}", path.display()))?;

    log::info!(
        "Loaded {} events ({} undated) and {} categories from {}",
        document.events.len(),
        document.undated_count(),
        document.categories.len(),
        path.display()
    );

    Ok(document)
}

pub fn load_calendar(path: &Path) -> Result<Calendar> {
    load_document(path).map(Calendar::new)
}
