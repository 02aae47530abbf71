// Events Calendar Library
// Date-range resolution and calendar grid layout for a static events calendar.
// Exports all modules for testing and reuse

pub mod models;
pub mod services;
pub mod ui_text;
pub mod utils;
