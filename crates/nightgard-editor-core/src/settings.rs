//! Editor settings.
//!
//! Settings seed the formatting intent of new sessions. They are stored as JSON with camelCase
//! keys; missing keys fall back to defaults:
//!
//! ```json
//! { "defaultFontSize": 16.0, "bold": false, "italic": true, "underline": false }
//! ```
//!
//! Unlike [`DocumentStateManager::change_font_size`](crate::DocumentStateManager::change_font_size),
//! which accepts any value, settings are validated against the stepper range.

use crate::document::{DEFAULT_FONT_SIZE, MAX_FONT_SIZE, MIN_FONT_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while loading, saving or validating settings.
pub enum SettingsError {
    #[error("I/O error: {0}")]
    /// Filesystem I/O failed.
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    /// JSON (de)serialization failed.
    Json(#[from] serde_json::Error),

    #[error("font size {0} is outside {min}..={max}", min = MIN_FONT_SIZE, max = MAX_FONT_SIZE)]
    /// The default font size is not a finite value within the stepper range.
    FontSizeOutOfRange(f32),
}

/// Persistent editor preferences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorSettings {
    /// Font size for new sessions.
    pub default_font_size: f32,
    /// Initial bold toggle.
    pub bold: bool,
    /// Initial italic toggle.
    pub italic: bool,
    /// Initial underline toggle.
    pub underline: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            default_font_size: DEFAULT_FONT_SIZE,
            bold: false,
            italic: false,
            underline: false,
        }
    }
}

impl EditorSettings {
    /// Parse and validate settings from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from `path`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "settings file missing, using defaults");
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Validate and write settings to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_json_string()?)?;
        tracing::info!(path = %path.display(), "saved settings");
        Ok(())
    }

    /// Check that `default_font_size` is finite and within the stepper range.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let size = self.default_font_size;
        if !size.is_finite() || !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size) {
            return Err(SettingsError::FontSizeOutOfRange(size));
        }
        Ok(())
    }
}
