// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::generators::{default_password_options, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::models::PasswordOptions;

// Configuration for the password factory shell
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_password_exclude_ambiguous: bool,

    // Display preferences
    pub preferences_file: PathBuf,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    /// Values that were ignored while loading; logged once a logger exists.
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: default_password_options().length,
            default_password_exclude_ambiguous: false,

            // Display preferences
            preferences_file: default_preferences_file(),

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,

            warnings: Vec::new(),
        }
    }
}

fn default_preferences_file() -> PathBuf {
    crate::utils::get_app_config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("preferences.json")
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse::<usize>() {
                Ok(length) if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) => {
                    config.default_password_length = length;
                }
                _ => config.warnings.push(format!("Ignoring DEFAULT_PASSWORD_LENGTH '{}'", val)),
            }
        }

        if let Some(val) = lookup("DEFAULT_PASSWORD_EXCLUDE_AMBIGUOUS") {
            match val.parse() {
                Ok(exclude) => config.default_password_exclude_ambiguous = exclude,
                Err(_) => config
                    .warnings
                    .push(format!("Ignoring DEFAULT_PASSWORD_EXCLUDE_AMBIGUOUS '{}'", val)),
            }
        }

        // Display preferences
        if let Some(file) = lookup("PREFERENCES_FILE") {
            config.preferences_file = PathBuf::from(file);
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => config
                    .warnings
                    .push(format!("Unknown log level '{}', using {}", level, config.log_level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    /// Emit the warnings collected by `from_lookup`. Call after `logging::init`.
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            log::warn!("{}", warning);
        }
    }

    /// Options the interactive shell starts from.
    pub fn initial_options(&self) -> PasswordOptions {
        PasswordOptions {
            length: self.default_password_length,
            exclude_ambiguous: self.default_password_exclude_ambiguous,
            ..default_password_options()
        }
    }
}
