//! Document State Interface
//!
//! Exposes the document to the presentation layer and keeps it informed of changes.
//!
//! # Overview
//!
//! - **Operations**: new document, save, retitle, replace content, formatting toggles, font size
//! - **State Queries**: document / formatting / statistics snapshots
//! - **Version Tracking**: a version number bumped on every effective change
//! - **Change Notifications**: subscribe to state change events
//!
//! # Example
//!
//! ```rust
//! use nightgard_editor_core::{DocumentStateManager, StateChangeType};
//!
//! let mut manager = DocumentStateManager::new();
//!
//! manager.subscribe(|change| {
//!     println!("State changed: {:?}", change.change_type);
//! });
//!
//! manager.update_text("Hello   world\nfoo".into());
//! assert_eq!(manager.word_count(), 3);
//! assert_eq!(manager.character_count(), 17);
//!
//! manager.save_document();
//! assert!(manager.last_saved().is_some());
//! ```

use crate::commands::{
    Command, CommandExecutor, CommandRecord, CommandResult, DocumentCommand, FormatCommand,
};
use crate::document::Document;
use crate::rich_text::RichText;
use crate::settings::EditorSettings;
use crate::stats::{self, DocumentStats};
use std::collections::VecDeque;
use std::time::SystemTime;

/// Document state (status display read model)
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentState {
    /// Document title
    pub title: String,
    /// Word count
    pub word_count: usize,
    /// Character count
    pub character_count: usize,
    /// Time of the last save
    pub last_saved: Option<SystemTime>,
    /// Whether the document changed since the last save
    pub is_dirty: bool,
    /// State version number
    pub version: u64,
}

/// Formatting intent state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormattingState {
    /// Bold toggle
    pub bold: bool,
    /// Italic toggle
    pub italic: bool,
    /// Underline toggle
    pub underline: bool,
    /// Font size in points
    pub font_size: f32,
}

/// Complete state snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    /// Document state
    pub document: DocumentState,
    /// Formatting state
    pub formatting: FormattingState,
    /// Full statistics
    pub statistics: DocumentStats,
}

/// State change type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChangeType {
    /// Content replaced
    ContentChanged,
    /// Title changed
    TitleChanged,
    /// Save time stamped
    Saved,
    /// Document reset to a fresh one
    NewDocument,
    /// Bold / italic / underline toggle changed
    FormattingChanged,
    /// Font size changed
    FontSizeChanged,
}

/// State change record
#[derive(Debug, Clone, PartialEq)]
pub struct StateChange {
    /// Change type
    pub change_type: StateChangeType,
    /// Old version number
    pub old_version: u64,
    /// New version number
    pub new_version: u64,
    /// Statistics after the change, for content changes.
    pub stats: Option<DocumentStats>,
}

impl StateChange {
    /// Create a new state change record.
    pub fn new(change_type: StateChangeType, old_version: u64, new_version: u64) -> Self {
        Self {
            change_type,
            old_version,
            new_version,
            stats: None,
        }
    }

    /// Attach post-change statistics to this record.
    pub fn with_stats(mut self, stats: DocumentStats) -> Self {
        self.stats = Some(stats);
        self
    }
}

/// State change callback function type
pub type StateChangeCallback = Box<dyn FnMut(&StateChange) + Send>;

/// Document state manager
///
/// `DocumentStateManager` wraps a [`CommandExecutor`] and adds:
///
/// - **Version Tracking**: the version increments after each effective change
/// - **Change Notifications**: subscribers are called with a [`StateChange`]
/// - **Derived Statistics**: word and character counts, recomputed on every read
///
/// Writes flow one way: call an operation (or [`execute`](Self::execute) a [`Command`]), the
/// manager applies it, bumps the version and notifies subscribers, and the host re-reads state.
///
/// Mutations that leave the document unchanged (retitling to the same title, setting a toggle
/// to its current value, ...) neither bump the version nor notify. `New` and `Save` always do.
pub struct DocumentStateManager {
    /// Command executor (owns the document)
    executor: CommandExecutor,
    /// State version number
    state_version: u64,
    /// State change callback list
    callbacks: Vec<StateChangeCallback>,
}

impl Default for DocumentStateManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DocumentStateManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentStateManager")
            .field("document", self.document())
            .field("state_version", &self.state_version)
            .field("subscribers", &self.callbacks.len())
            .finish()
    }
}

impl DocumentStateManager {
    /// Create a manager holding a fresh, untitled document.
    pub fn new() -> Self {
        tracing::debug!("NightGard editor ready to write");
        Self {
            executor: CommandExecutor::new(),
            state_version: 0,
            callbacks: Vec::new(),
        }
    }

    /// Create a manager whose formatting intent is seeded from `settings`.
    ///
    /// Seeding happens before any subscriber exists and leaves the version at 0.
    pub fn with_settings(settings: &EditorSettings) -> Self {
        let document = Document {
            is_bold: settings.bold,
            is_italic: settings.italic,
            is_underlined: settings.underline,
            font_size: settings.default_font_size,
            ..Document::default()
        };
        tracing::debug!(?settings, "NightGard editor ready to write");
        Self {
            executor: CommandExecutor::with_document(document),
            state_version: 0,
            callbacks: Vec::new(),
        }
    }

    /// Apply `settings` to the live document's formatting intent.
    pub fn apply_settings(&mut self, settings: &EditorSettings) {
        tracing::debug!(?settings, "applying settings");
        self.execute_batch([
            Command::Format(FormatCommand::SetBold(settings.bold)),
            Command::Format(FormatCommand::SetItalic(settings.italic)),
            Command::Format(FormatCommand::SetUnderline(settings.underline)),
            Command::Format(FormatCommand::ChangeFontSize(settings.default_font_size)),
        ]);
    }

    /// Execute a command and trigger state change notifications if it changed anything.
    pub fn execute(&mut self, command: impl Into<Command>) -> CommandResult {
        let command = command.into();
        let change_type = Self::change_type_for_command(&command);
        let result = self.executor.execute(command);

        if self.executor.last_command_changed() {
            self.mark_changed(change_type);
        }

        result
    }

    /// Execute commands in order, collecting their results.
    pub fn execute_batch<I>(&mut self, commands: I) -> Vec<CommandResult>
    where
        I: IntoIterator<Item = Command>,
    {
        commands
            .into_iter()
            .map(|command| self.execute(command))
            .collect()
    }

    fn change_type_for_command(command: &Command) -> StateChangeType {
        match command {
            Command::Document(DocumentCommand::New) => StateChangeType::NewDocument,
            Command::Document(DocumentCommand::Save) => StateChangeType::Saved,
            Command::Document(DocumentCommand::SetTitle(_)) => StateChangeType::TitleChanged,
            Command::Document(DocumentCommand::UpdateText(_)) => StateChangeType::ContentChanged,
            Command::Format(
                FormatCommand::ToggleBold
                | FormatCommand::ToggleItalic
                | FormatCommand::ToggleUnderline
                | FormatCommand::SetBold(_)
                | FormatCommand::SetItalic(_)
                | FormatCommand::SetUnderline(_),
            ) => StateChangeType::FormattingChanged,
            Command::Format(
                FormatCommand::ChangeFontSize(_)
                | FormatCommand::IncreaseFontSize
                | FormatCommand::DecreaseFontSize,
            ) => StateChangeType::FontSizeChanged,
        }
    }

    /// Reset to a fresh document: empty content, title "Untitled", never saved.
    ///
    /// Formatting intent is kept.
    pub fn new_document(&mut self) {
        self.execute(DocumentCommand::New);
    }

    /// Stamp the current time as the last save and return it. Nothing is written to disk.
    pub fn save_document(&mut self) -> SystemTime {
        match self.execute(DocumentCommand::Save) {
            CommandResult::Saved(at) => at,
            other => unreachable!("save produced {other:?}"),
        }
    }

    /// Replace the content wholesale.
    pub fn update_text(&mut self, content: RichText) {
        self.execute(DocumentCommand::UpdateText(content));
    }

    /// Retitle the document. Blank input becomes "Untitled".
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.execute(DocumentCommand::SetTitle(title.into()));
    }

    /// Flip bold intent; returns the new value.
    pub fn toggle_bold(&mut self) -> bool {
        self.execute(FormatCommand::ToggleBold);
        self.is_bold()
    }

    /// Flip italic intent; returns the new value.
    pub fn toggle_italic(&mut self) -> bool {
        self.execute(FormatCommand::ToggleItalic);
        self.is_italic()
    }

    /// Flip underline intent; returns the new value.
    pub fn toggle_underline(&mut self) -> bool {
        self.execute(FormatCommand::ToggleUnderline);
        self.is_underlined()
    }

    /// Set bold intent.
    pub fn set_bold(&mut self, value: bool) {
        self.execute(FormatCommand::SetBold(value));
    }

    /// Set italic intent.
    pub fn set_italic(&mut self, value: bool) {
        self.execute(FormatCommand::SetItalic(value));
    }

    /// Set underline intent.
    pub fn set_underline(&mut self, value: bool) {
        self.execute(FormatCommand::SetUnderline(value));
    }

    /// Set the font size. Any value is accepted.
    pub fn change_font_size(&mut self, size: f32) {
        self.execute(FormatCommand::ChangeFontSize(size));
    }

    /// Step the font size up one point within 8–72; returns the new size.
    pub fn increase_font_size(&mut self) -> f32 {
        self.execute(FormatCommand::IncreaseFontSize);
        self.font_size()
    }

    /// Step the font size down one point within 8–72; returns the new size.
    pub fn decrease_font_size(&mut self) -> f32 {
        self.execute(FormatCommand::DecreaseFontSize);
        self.font_size()
    }

    /// The current document.
    pub fn document(&self) -> &Document {
        self.executor.document()
    }

    /// Commands executed so far.
    pub fn command_history(&self) -> &VecDeque<CommandRecord> {
        self.executor.command_history()
    }

    /// Document title.
    pub fn title(&self) -> &str {
        &self.document().title
    }

    /// Document content.
    pub fn content(&self) -> &RichText {
        &self.document().content
    }

    /// Time of the last save.
    pub fn last_saved(&self) -> Option<SystemTime> {
        self.document().last_saved
    }

    /// Bold intent.
    pub fn is_bold(&self) -> bool {
        self.document().is_bold
    }

    /// Italic intent.
    pub fn is_italic(&self) -> bool {
        self.document().is_italic
    }

    /// Underline intent.
    pub fn is_underlined(&self) -> bool {
        self.document().is_underlined
    }

    /// Font size in points.
    pub fn font_size(&self) -> f32 {
        self.document().font_size
    }

    /// Whether content or title changed since the last save or new document.
    pub fn is_dirty(&self) -> bool {
        self.document().is_dirty
    }

    /// Word count of the plain-text projection.
    pub fn word_count(&self) -> usize {
        stats::word_count(&self.content().plain_text())
    }

    /// Character count (grapheme clusters) of the plain-text projection.
    pub fn character_count(&self) -> usize {
        stats::character_count(&self.content().plain_text())
    }

    /// Get full statistics for the current content.
    pub fn get_statistics(&self) -> DocumentStats {
        DocumentStats::from_rich_text(self.content())
    }

    /// Get document state
    pub fn get_document_state(&self) -> DocumentState {
        let doc = self.document();
        let text = doc.content.plain_text();
        DocumentState {
            title: doc.title.clone(),
            word_count: stats::word_count(&text),
            character_count: stats::character_count(&text),
            last_saved: doc.last_saved,
            is_dirty: doc.is_dirty,
            version: self.state_version,
        }
    }

    /// Get formatting state
    pub fn get_formatting_state(&self) -> FormattingState {
        let doc = self.document();
        FormattingState {
            bold: doc.is_bold,
            italic: doc.is_italic,
            underline: doc.is_underlined,
            font_size: doc.font_size,
        }
    }

    /// Get complete state snapshot
    pub fn get_full_state(&self) -> EditorState {
        EditorState {
            document: self.get_document_state(),
            formatting: self.get_formatting_state(),
            statistics: self.get_statistics(),
        }
    }

    /// Get current version number
    pub fn version(&self) -> u64 {
        self.state_version
    }

    /// Check if state has changed since a version
    pub fn has_changed_since(&self, version: u64) -> bool {
        self.state_version > version
    }

    /// Subscribe to state change notifications
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&StateChange) + Send + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    fn mark_changed(&mut self, change_type: StateChangeType) {
        let old_version = self.state_version;
        self.state_version += 1;
        tracing::trace!(?change_type, version = self.state_version, "state changed");

        let mut change = StateChange::new(change_type, old_version, self.state_version);
        if matches!(
            change_type,
            StateChangeType::ContentChanged | StateChangeType::NewDocument
        ) {
            change = change.with_stats(self.get_statistics());
        }
        self.notify_callbacks(&change);
    }

    /// Notify all callbacks
    fn notify_callbacks(&mut self, change: &StateChange) {
        for callback in &mut self.callbacks {
            callback(change);
        }
    }
}
