// Service module exports

pub mod category;
pub mod display;
pub mod document;
pub mod event;
pub mod grid;
pub mod settings;
