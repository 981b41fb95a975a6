//! Command Interface Layer
//!
//! Every write the presentation layer can perform is expressed as a [`Command`], giving hosts a
//! single, serializable-in-spirit entry point for a unidirectional update loop:
//! dispatch a command, then re-read state.
//!
//! - **Document commands**: new document, save, retitle, replace content
//! - **Format commands**: bold / italic / underline intent and font size
//!
//! All commands are total: they succeed for every input.
//!
//! # Example
//!
//! ```rust
//! use nightgard_editor_core::{Command, CommandExecutor, CommandResult, DocumentCommand, FormatCommand};
//!
//! let mut executor = CommandExecutor::new();
//!
//! executor.execute(Command::Document(DocumentCommand::UpdateText("Hello world".into())));
//! let result = executor.execute(Command::Format(FormatCommand::ToggleBold));
//!
//! assert!(matches!(result, CommandResult::Toggled(true)));
//! assert_eq!(executor.document().content.plain_text(), "Hello world");
//! ```

use crate::document::{Document, FONT_SIZE_STEP, clamp_font_size, normalize_title};
use crate::rich_text::RichText;
use std::collections::VecDeque;
use std::time::SystemTime;

/// Document-level commands
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentCommand {
    /// Replace the current document with a fresh, untitled one.
    New,
    /// Stamp the save time. No content is written anywhere.
    Save,
    /// Retitle the document (blank input becomes "Untitled").
    SetTitle(String),
    /// Replace the content wholesale.
    UpdateText(RichText),
}

/// Formatting intent commands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatCommand {
    /// Flip the bold toggle.
    ToggleBold,
    /// Flip the italic toggle.
    ToggleItalic,
    /// Flip the underline toggle.
    ToggleUnderline,
    /// Set the bold toggle.
    SetBold(bool),
    /// Set the italic toggle.
    SetItalic(bool),
    /// Set the underline toggle.
    SetUnderline(bool),
    /// Set the font size verbatim (no validation).
    ChangeFontSize(f32),
    /// Step the font size up by one point, clamped to the stepper range.
    IncreaseFontSize,
    /// Step the font size down by one point, clamped to the stepper range.
    DecreaseFontSize,
}

/// Unified command enum
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Document commands
    Document(DocumentCommand),
    /// Format commands
    Format(FormatCommand),
}

impl From<DocumentCommand> for Command {
    fn from(command: DocumentCommand) -> Self {
        Self::Document(command)
    }
}

impl From<FormatCommand> for Command {
    fn from(command: FormatCommand) -> Self {
        Self::Format(command)
    }
}

/// Command execution result
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommandResult {
    /// Success, no return value
    Success,
    /// The document was stamped as saved at this time.
    Saved(SystemTime),
    /// A toggle now holds this value.
    Toggled(bool),
    /// The font size is now this value.
    FontSize(f32),
}

/// Maximum number of entries kept in the command history.
pub const MAX_COMMAND_HISTORY: usize = 256;

/// A payload-free record of an executed command.
///
/// Content and titles are not retained; the history only says what happened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommandRecord {
    /// [`DocumentCommand::New`]
    NewDocument,
    /// [`DocumentCommand::Save`]
    Save,
    /// [`DocumentCommand::SetTitle`]
    SetTitle,
    /// [`DocumentCommand::UpdateText`], with the byte length of the new content.
    UpdateText {
        /// Plain-text byte length of the content that was set.
        byte_len: usize,
    },
    /// A format command (these carry no heap data).
    Format(FormatCommand),
}

impl CommandRecord {
    fn of(command: &Command) -> Self {
        match command {
            Command::Document(DocumentCommand::New) => Self::NewDocument,
            Command::Document(DocumentCommand::Save) => Self::Save,
            Command::Document(DocumentCommand::SetTitle(_)) => Self::SetTitle,
            Command::Document(DocumentCommand::UpdateText(content)) => Self::UpdateText {
                byte_len: content.byte_len(),
            },
            Command::Format(format_cmd) => Self::Format(*format_cmd),
        }
    }
}

/// Applies commands to a [`Document`] and records them.
///
/// `CommandExecutor` does no versioning of its own; wrap it in a
/// [`DocumentStateManager`](crate::DocumentStateManager) for versions and notifications.
#[derive(Debug, Default)]
pub struct CommandExecutor {
    /// The document being edited
    document: Document,
    /// Recent command records, oldest first, at most [`MAX_COMMAND_HISTORY`]
    command_history: VecDeque<CommandRecord>,
    /// Whether the last executed command changed the document
    last_changed: bool,
}

impl CommandExecutor {
    /// Create an executor holding a fresh document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an executor around an existing document.
    ///
    /// A blank title is replaced with "Untitled".
    pub fn with_document(mut document: Document) -> Self {
        document.title = normalize_title(&document.title);
        Self {
            document,
            command_history: VecDeque::new(),
            last_changed: false,
        }
    }

    /// Execute command
    pub fn execute(&mut self, command: impl Into<Command>) -> CommandResult {
        let command = command.into();
        let record = CommandRecord::of(&command);

        let result = match command {
            Command::Document(doc_cmd) => self.execute_document(doc_cmd),
            Command::Format(format_cmd) => self.execute_format(format_cmd),
        };

        // A new document starts a new history.
        if record == CommandRecord::NewDocument {
            self.command_history.clear();
        }
        if self.command_history.len() == MAX_COMMAND_HISTORY {
            self.command_history.pop_front();
        }
        self.command_history.push_back(record);

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

    /// Get command history (oldest first)
    pub fn command_history(&self) -> &VecDeque<CommandRecord> {
        &self.command_history
    }

    /// Whether the last executed command changed the document.
    ///
    /// `New` and `Save` always count as changes.
    pub fn last_command_changed(&self) -> bool {
        self.last_changed
    }

    /// The current document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    fn execute_document(&mut self, command: DocumentCommand) -> CommandResult {
        let doc = &mut self.document;
        match command {
            DocumentCommand::New => {
                doc.reset();
                self.last_changed = true;
                tracing::debug!("new document");
                CommandResult::Success
            }
            DocumentCommand::Save => {
                let now = SystemTime::now();
                doc.last_saved = Some(now);
                doc.is_dirty = false;
                self.last_changed = true;
                tracing::info!(title = %doc.title, "document saved");
                CommandResult::Saved(now)
            }
            DocumentCommand::SetTitle(title) => {
                let title = normalize_title(&title);
                self.last_changed = doc.title != title;
                if self.last_changed {
                    doc.title = title;
                    doc.is_dirty = true;
                }
                CommandResult::Success
            }
            DocumentCommand::UpdateText(content) => {
                self.last_changed = doc.content != content;
                if self.last_changed {
                    doc.content = content;
                    doc.is_dirty = true;
                }
                CommandResult::Success
            }
        }
    }

    fn execute_format(&mut self, command: FormatCommand) -> CommandResult {
        let doc = &mut self.document;
        // `None` means "flip".
        let (flag, value) = match command {
            FormatCommand::ToggleBold => (&mut doc.is_bold, None),
            FormatCommand::ToggleItalic => (&mut doc.is_italic, None),
            FormatCommand::ToggleUnderline => (&mut doc.is_underlined, None),
            FormatCommand::SetBold(value) => (&mut doc.is_bold, Some(value)),
            FormatCommand::SetItalic(value) => (&mut doc.is_italic, Some(value)),
            FormatCommand::SetUnderline(value) => (&mut doc.is_underlined, Some(value)),
            FormatCommand::ChangeFontSize(size) => return self.set_font_size(size),
            FormatCommand::IncreaseFontSize => {
                let size = clamp_font_size(clamp_font_size(doc.font_size) + FONT_SIZE_STEP);
                return self.set_font_size(size);
            }
            FormatCommand::DecreaseFontSize => {
                let size = clamp_font_size(clamp_font_size(doc.font_size) - FONT_SIZE_STEP);
                return self.set_font_size(size);
            }
        };

        let value = value.unwrap_or(!*flag);
        let changed = *flag != value;
        *flag = value;
        self.last_changed = changed;
        CommandResult::Toggled(value)
    }

    fn set_font_size(&mut self, size: f32) -> CommandResult {
        // Bitwise, so repeated NaN assignments count as unchanged.
        self.last_changed = self.document.font_size.to_bits() != size.to_bits();
        self.document.font_size = size;
        CommandResult::FontSize(size)
    }
}
