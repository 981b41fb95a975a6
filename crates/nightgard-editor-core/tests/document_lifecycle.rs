use nightgard_editor_core::{
    CommandRecord, DEFAULT_TITLE, DocumentStateManager, MAX_COMMAND_HISTORY, RichText,
    StateChangeType, TextStyle,
};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

fn populated_manager() -> DocumentStateManager {
    let mut manager = DocumentStateManager::new();
    manager.set_title("Chapter One");
    manager.update_text(RichText::plain("It was a dark and stormy night."));
    manager.save_document();
    manager
}

#[test]
fn test_new_document_resets_regardless_of_prior_state() {
    let mut manager = populated_manager();
    assert!(manager.last_saved().is_some());

    manager.new_document();

    assert_eq!(manager.title(), DEFAULT_TITLE);
    assert!(manager.content().is_empty());
    assert!(manager.last_saved().is_none());
    assert!(!manager.is_dirty());
    assert_eq!(manager.word_count(), 0);
    assert_eq!(manager.character_count(), 0);
}

#[test]
fn test_new_document_is_idempotent() {
    let mut manager = populated_manager();
    manager.new_document();
    let first = manager.document().clone();

    manager.new_document();

    assert_eq!(manager.document(), &first);
}

#[test]
fn test_new_document_keeps_formatting_intent() {
    let mut manager = DocumentStateManager::new();
    manager.toggle_bold();
    manager.change_font_size(24.0);

    manager.new_document();

    assert!(manager.is_bold());
    assert_eq!(manager.font_size(), 24.0);
}

#[test]
fn test_save_stamps_time_within_call_window() {
    let mut manager = DocumentStateManager::new();

    let before = SystemTime::now();
    let stamped = manager.save_document();
    let after = SystemTime::now();

    let last_saved = manager.last_saved().unwrap();
    assert_eq!(last_saved, stamped);
    assert!(before <= last_saved);
    assert!(last_saved <= after);
}

#[test]
fn test_save_does_not_touch_content() {
    let mut manager = DocumentStateManager::new();
    manager.update_text(RichText::plain("draft"));
    let content = manager.content().clone();

    manager.save_document();

    assert_eq!(manager.content(), &content);
    assert_eq!(manager.title(), DEFAULT_TITLE);
}

#[test]
fn test_dirty_tracking() {
    let mut manager = DocumentStateManager::new();
    assert!(!manager.is_dirty());

    manager.update_text(RichText::plain("a"));
    assert!(manager.is_dirty());

    manager.save_document();
    assert!(!manager.is_dirty());

    manager.set_title("Renamed");
    assert!(manager.is_dirty());

    // Formatting intent is not document content.
    manager.save_document();
    manager.toggle_italic();
    manager.change_font_size(30.0);
    assert!(!manager.is_dirty());
}

#[test]
fn test_update_text_replaces_wholesale() {
    let mut manager = DocumentStateManager::new();
    manager.update_text(RichText::plain("first version"));

    let mut replacement = RichText::new();
    replacement.push("second ", TextStyle::default());
    replacement.push(
        "version",
        TextStyle {
            underline: true,
            ..TextStyle::default()
        },
    );
    manager.update_text(replacement.clone());

    assert_eq!(manager.content(), &replacement);
    assert_eq!(manager.content().plain_text(), "second version");
}

#[test]
fn test_blank_title_never_stored() {
    let mut manager = DocumentStateManager::new();
    manager.set_title("Notes");
    manager.set_title("");

    assert_eq!(manager.title(), DEFAULT_TITLE);
}

#[test]
fn test_lifecycle_notifications() {
    let mut manager = DocumentStateManager::new();
    let seen = Arc::new(Mutex::new(Vec::<StateChangeType>::new()));
    let seen_clone = Arc::clone(&seen);
    manager.subscribe(move |change| {
        seen_clone.lock().unwrap().push(change.change_type);
    });

    manager.set_title("Draft");
    manager.update_text(RichText::plain("words here"));
    manager.save_document();
    manager.new_document();

    let seen = seen.lock().unwrap().clone();
    assert_eq!(
        seen,
        vec![
            StateChangeType::TitleChanged,
            StateChangeType::ContentChanged,
            StateChangeType::Saved,
            StateChangeType::NewDocument,
        ]
    );
    assert_eq!(manager.version(), 4);
}

#[test]
fn test_typing_session_keeps_history_bounded() {
    let mut manager = DocumentStateManager::new();
    let mut typed = String::new();
    for _ in 0..2_000 {
        typed.push('x');
        manager.update_text(RichText::plain(typed.as_str()));
    }

    let history = manager.command_history();
    assert_eq!(history.len(), MAX_COMMAND_HISTORY);
    assert_eq!(
        history.back(),
        Some(&CommandRecord::UpdateText { byte_len: 2_000 })
    );
    assert_eq!(manager.version(), 2_000);

    manager.new_document();
    assert_eq!(
        manager.command_history().iter().copied().collect::<Vec<_>>(),
        vec![CommandRecord::NewDocument]
    );
}
