// src/core/preferences.rs
use std::fs;
use std::io;
use std::path::Path;
use serde::{Serialize, Deserialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PreferencesError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Display settings persisted across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    pub theme: Theme,
    pub reveal_password: bool,
}

// The password is shown until the user hides it
impl Default for Preferences {
    fn default() -> Self {
        Self { theme: Theme::default(), reveal_password: true }
    }
}

impl Preferences {
    /// Read preferences, falling back to defaults when the file is missing or unreadable.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(Some(prefs)) => prefs,
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("Failed to read preferences from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn try_load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        log::debug!("Saved preferences to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let prefs = Preferences::load(&dir.path().join("none.json"));
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.theme, Theme::Light);
        assert!(prefs.reveal_password);
    }

    #[test]
    fn save_then_load_keeps_theme() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let prefs = Preferences { theme: Theme::Dark, reveal_password: false };
        prefs.save(&path).unwrap();

        assert_eq!(Preferences::load(&path), prefs);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(Preferences::try_load(&path), Err(PreferencesError::JsonError(_))));
        assert_eq!(Preferences::load(&path), Preferences::default());
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, r#"{"theme":"dark"}"#).unwrap();

        let prefs = Preferences::load(&path);
        assert_eq!(prefs.theme, Theme::Dark);
        assert!(prefs.reveal_password);
    }

    #[test]
    fn theme_toggles() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
