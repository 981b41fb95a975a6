#![warn(missing_docs)]
//! NightGard Editor Core - Headless Rich-Text Document Kernel
//!
//! # Overview
//!
//! `nightgard-editor-core` holds the state of a single rich-text document and derives live
//! statistics from it. It does not render anything: a presentation layer (window, status bar,
//! settings sheet) observes the kernel and invokes its operations.
//!
//! # Core Features
//!
//! - **Styled Content**: content is an explicit sequence of (text, style) spans
//! - **Formatting Intent**: bold / italic / underline toggles and a font size for new text
//! - **Save Stamps**: saving records a timestamp; nothing is persisted
//! - **Live Statistics**: word and character counts recomputed from the plain-text projection
//! - **State Tracking**: version numbers and change notifications
//! - **Settings**: JSON-backed defaults for formatting intent
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  State Manager (versions, subscriptions)    │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Command Interface                          │  ← Unidirectional writes
//! ├─────────────────────────────────────────────┤
//! │  Document (title, content, intent, stamp)   │  ← Data
//! ├──────────────────────┬──────────────────────┤
//! │  Rich Text (spans)   │  Statistics Engine   │  ← Content & derived values
//! └──────────────────────┴──────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use nightgard_editor_core::{DocumentStateManager, RichText, TextStyle};
//!
//! let mut manager = DocumentStateManager::new();
//!
//! let mut content = RichText::plain("Hello ");
//! content.push("world", TextStyle { bold: true, ..TextStyle::default() });
//! manager.update_text(content);
//!
//! assert_eq!(manager.word_count(), 2);
//! assert_eq!(manager.character_count(), 11);
//!
//! manager.save_document();
//! manager.new_document();
//! assert_eq!(manager.title(), "Untitled");
//! assert!(manager.last_saved().is_none());
//! ```
//!
//! # Module Description
//!
//! - [`rich_text`] - styled span sequence and its plain-text projection
//! - [`stats`] - word / character / line counting
//! - [`document`] - the document data and font size constants
//! - [`commands`] - unified command interface
//! - [`state`] - state management, snapshots and change notifications
//! - [`settings`] - editor settings and their JSON form
//!
//! # Unicode Support
//!
//! - Words are split on the Unicode `White_Space` property
//! - Characters are extended grapheme clusters (emoji sequences and combining marks count once)
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (saves at `info`, resets and settings at `debug`, version
//! bumps at `trace`) and never installs a subscriber.

pub mod commands;
pub mod document;
pub mod rich_text;
pub mod settings;
pub mod state;
pub mod stats;

pub use commands::{
    Command, CommandExecutor, CommandRecord, CommandResult, DocumentCommand, FormatCommand,
    MAX_COMMAND_HISTORY,
};
pub use document::{
    DEFAULT_FONT_SIZE, DEFAULT_TITLE, Document, FONT_SIZE_STEP, MAX_FONT_SIZE, MIN_FONT_SIZE,
    clamp_font_size,
};
pub use rich_text::{RichText, StyledSpan, TextStyle};
pub use settings::{EditorSettings, SettingsError};
pub use state::{
    DocumentState, DocumentStateManager, EditorState, FormattingState, StateChange,
    StateChangeCallback, StateChangeType,
};
pub use stats::{DocumentStats, character_count, line_count, scalar_count, word_count};
