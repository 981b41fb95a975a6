//! The single in-memory document.
//!
//! A [`Document`] holds the title, the styled content, the formatting *intent* toggles and the
//! last-saved timestamp. The toggles and `font_size` describe how newly typed text should look;
//! they are never applied to content that already exists.

use crate::rich_text::{RichText, TextStyle};
use std::time::SystemTime;

/// Title used for fresh documents and for blank title input.
pub const DEFAULT_TITLE: &str = "Untitled";
/// Default point size.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;
/// Smallest point size offered by the settings stepper.
pub const MIN_FONT_SIZE: f32 = 8.0;
/// Largest point size offered by the settings stepper.
pub const MAX_FONT_SIZE: f32 = 72.0;
/// Stepper increment.
pub const FONT_SIZE_STEP: f32 = 1.0;

/// Clamp `size` into `MIN_FONT_SIZE..=MAX_FONT_SIZE`.
///
/// NaN maps to [`DEFAULT_FONT_SIZE`].
pub fn clamp_font_size(size: f32) -> f32 {
    if size.is_nan() {
        DEFAULT_FONT_SIZE
    } else {
        size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
    }
}

/// Document state
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Display title; never empty.
    pub title: String,
    /// Styled content.
    pub content: RichText,
    /// Time of the last save; `None` if never saved.
    pub last_saved: Option<SystemTime>,
    /// Bold intent for the next typed text.
    pub is_bold: bool,
    /// Italic intent for the next typed text.
    pub is_italic: bool,
    /// Underline intent for the next typed text.
    pub is_underlined: bool,
    /// Point size intent for the next typed text.
    pub font_size: f32,
    /// Content or title changed since the last save or new document.
    pub is_dirty: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            content: RichText::new(),
            last_saved: None,
            is_bold: false,
            is_italic: false,
            is_underlined: false,
            font_size: DEFAULT_FONT_SIZE,
            is_dirty: false,
        }
    }
}

impl Document {
    /// Create a fresh, untitled document.
    pub fn new() -> Self {
        Self::default()
    }

    /// The style newly typed text would receive, built from the current toggles.
    pub fn formatting(&self) -> TextStyle {
        TextStyle {
            bold: self.is_bold,
            italic: self.is_italic,
            underline: self.is_underlined,
            font_size: Some(self.font_size),
        }
    }

    /// Replace title, content and save stamp with those of a fresh document.
    ///
    /// Formatting intent survives the reset.
    pub(crate) fn reset(&mut self) {
        self.title = DEFAULT_TITLE.to_string();
        self.content.clear();
        self.last_saved = None;
        self.is_dirty = false;
    }
}

/// Normalize user title input. Blank input maps to [`DEFAULT_TITLE`].
pub(crate) fn normalize_title(title: &str) -> String {
    if title.trim().is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        title.to_string()
    }
}
