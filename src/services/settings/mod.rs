//! Settings service entry point.
//! Resolves and loads `config.toml`, falling back to defaults.

mod service;

pub use service::SettingsService;
