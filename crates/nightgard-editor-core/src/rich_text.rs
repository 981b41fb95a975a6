//! Rich text content model.
//!
//! Content is an ordered sequence of [`StyledSpan`]s, each pairing a run of text with the
//! [`TextStyle`] it is rendered with. There is no platform attributed-string type behind it; the
//! host maps spans to whatever its text system understands.
//!
//! `RichText` keeps itself normalized:
//!
//! - no span has empty text
//! - no two adjacent spans share the same style (they are merged on insertion)
//!
//! The *plain-text projection* ([`RichText::plain_text`]) strips all styling and is what the
//! statistics engine ([`crate::stats`]) operates on.
//!
//! # Example
//!
//! ```rust
//! use nightgard_editor_core::{RichText, TextStyle};
//!
//! let mut text = RichText::new();
//! text.push("Hello ", TextStyle::default());
//! text.push("world", TextStyle { bold: true, ..TextStyle::default() });
//!
//! assert_eq!(text.plain_text(), "Hello world");
//! assert_eq!(text.span_count(), 2);
//! ```

use std::fmt;

/// Formatting attributes attached to a span of text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextStyle {
    /// Bold weight.
    pub bold: bool,
    /// Italic slant.
    pub italic: bool,
    /// Underline decoration.
    pub underline: bool,
    /// Explicit point size; `None` means "inherit the host default".
    pub font_size: Option<f32>,
}

impl TextStyle {
    /// A style with no attributes set.
    pub const PLAIN: Self = Self {
        bold: false,
        italic: false,
        underline: false,
        font_size: None,
    };

    /// Returns `true` if no attribute is set.
    pub fn is_plain(&self) -> bool {
        *self == Self::PLAIN
    }
}

/// A run of text rendered with a single style.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledSpan {
    /// Span text.
    pub text: String,
    /// Span style.
    pub style: TextStyle,
}

impl StyledSpan {
    /// Create a new span.
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Create an unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextStyle::PLAIN)
    }
}

/// Styled document content.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RichText {
    spans: Vec<StyledSpan>,
}

impl RichText {
    /// Create empty content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create content holding a single unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        let mut rich = Self::new();
        rich.push(text, TextStyle::PLAIN);
        rich
    }

    /// Append `text` with `style`.
    ///
    /// Empty text is ignored. If the last span already has `style`, the text is merged into it.
    pub fn push(&mut self, text: impl Into<String>, style: TextStyle) {
        let text = text.into();
        if text.is_empty() {
            return;
        }

        match self.spans.last_mut() {
            Some(last) if last.style == style => last.text.push_str(&text),
            _ => self.spans.push(StyledSpan { text, style }),
        }
    }

    /// Append a prepared span (same normalization as [`push`](Self::push)).
    pub fn push_span(&mut self, span: StyledSpan) {
        self.push(span.text, span.style);
    }

    /// All spans, in document order.
    pub fn spans(&self) -> &[StyledSpan] {
        &self.spans
    }

    /// Number of spans.
    pub fn span_count(&self) -> usize {
        self.spans.len()
    }

    /// Returns `true` if the content holds no text.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Remove all content.
    pub fn clear(&mut self) {
        self.spans.clear();
    }

    /// The plain-text projection: all span texts concatenated, styling stripped.
    pub fn plain_text(&self) -> String {
        let len = self.spans.iter().map(|s| s.text.len()).sum();
        let mut out = String::with_capacity(len);
        for span in &self.spans {
            out.push_str(&span.text);
        }
        out
    }

    /// Length of the plain-text projection in bytes.
    pub fn byte_len(&self) -> usize {
        self.spans.iter().map(|s| s.text.len()).sum()
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for RichText {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

impl FromIterator<StyledSpan> for RichText {
    fn from_iter<I: IntoIterator<Item = StyledSpan>>(iter: I) -> Self {
        let mut rich = Self::new();
        for span in iter {
            rich.push_span(span);
        }
        rich
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            f.write_str(&span.text)?;
        }
        Ok(())
    }
}
