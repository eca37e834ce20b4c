//! User settings persistence
//!
//! Saves and loads the preferences the engine consumes. The file lives under
//! the platform config directory as JSON; a missing or unreadable file falls
//! back to defaults. The engine itself never reads ambient configuration:
//! the loaded values are injected at construction or on change notification.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::AnimationPresetId;

/// Persisted user settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Selected animation preset; applies to future-dispatched intents only
    #[serde(default)]
    pub animation_preset: AnimationPresetId,
}

impl Settings {
    /// Default settings file path
    pub fn file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lyricsync").join("settings.json"))
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| match Self::load_from_file(&path) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    tracing::warn!("Failed to load settings, using defaults: {e}");
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(msg) => write!(f, "settings I/O error: {msg}"),
            SettingsError::Parse(msg) => write!(f, "settings parse error: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {}
