//! Document statistics.
//!
//! All counts are pure functions of the plain-text projection and are recomputed on every call.
//!
//! - **Words** are maximal runs of non-whitespace characters. Whitespace is the Unicode
//!   `White_Space` property (`char::is_whitespace`), so spaces, tabs, newlines and no-break
//!   spaces all separate words and consecutive separators never produce empty words.
//! - **Characters** are user-perceived characters (extended grapheme clusters). `"e\u{301}"`
//!   counts once, as does `"\r\n"`; every other newline counts as one character.

use crate::rich_text::RichText;
use unicode_segmentation::UnicodeSegmentation;

/// Number of maximal non-whitespace runs in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of user-perceived characters (extended grapheme clusters) in `text`.
pub fn character_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Number of Unicode scalar values in `text`.
pub fn scalar_count(text: &str) -> usize {
    text.chars().count()
}

/// Number of `'\n'`-separated lines. Empty text has no lines.
pub fn line_count(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        text.bytes().filter(|b| *b == b'\n').count() + 1
    }
}

/// A bundle of statistics computed from one plain-text projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentStats {
    /// Word count
    pub words: usize,
    /// Grapheme cluster count
    pub characters: usize,
    /// Unicode scalar value count
    pub scalars: usize,
    /// Line count
    pub lines: usize,
    /// UTF-8 byte count
    pub bytes: usize,
}

impl DocumentStats {
    /// Compute statistics for plain text.
    pub fn from_text(text: &str) -> Self {
        Self {
            words: word_count(text),
            characters: character_count(text),
            scalars: scalar_count(text),
            lines: line_count(text),
            bytes: text.len(),
        }
    }

    /// Compute statistics for the plain-text projection of `content`.
    pub fn from_rich_text(content: &RichText) -> Self {
        Self::from_text(&content.plain_text())
    }
}
