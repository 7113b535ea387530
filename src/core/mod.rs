// src/core/mod.rs
pub mod config;
pub mod preferences;

pub use config::Config;
pub use preferences::{Preferences, PreferencesError, Theme};
