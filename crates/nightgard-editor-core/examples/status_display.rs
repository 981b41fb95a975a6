//! Status display example
//!
//! Drives a short editing session the way a presentation layer would and prints the status rows
//! (title, words, characters, last saved) after every change.

use nightgard_editor_core::{DocumentStateManager, RichText, TextStyle};
use std::time::UNIX_EPOCH;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_status(manager: &DocumentStateManager) {
    let state = manager.get_document_state();
    let last_saved = match state.last_saved {
        Some(at) => at
            .duration_since(UNIX_EPOCH)
            .map(|d| format!("{}s since epoch", d.as_secs()))
            .unwrap_or_else(|_| "before epoch".to_string()),
        None => "Never".to_string(),
    };

    println!("  Document:   {}", state.title);
    println!("  Words:      {}", state.word_count);
    println!("  Characters: {}", state.character_count);
    println!("  Last Saved: {}", last_saved);
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    let mut manager = DocumentStateManager::new();
    manager.subscribe(|change| {
        println!(
            "-- {:?} (version {} -> {})",
            change.change_type, change.old_version, change.new_version
        );
    });

    println!("1. Fresh document:");
    print_status(&manager);

    println!("\n2. Typing:");
    manager.set_title("Night Notes");
    let mut content = RichText::plain("The night garden ");
    let intent = TextStyle {
        italic: true,
        ..manager.document().formatting()
    };
    content.push("glows   softly\nunder the moon.", intent);
    manager.update_text(content);
    print_status(&manager);

    println!("\n3. Settings sheet:");
    manager.toggle_bold();
    manager.increase_font_size();
    manager.increase_font_size();
    let formatting = manager.get_formatting_state();
    println!(
        "  Bold: {}, Italic: {}, Underline: {}, Font Size: {}pt",
        formatting.bold, formatting.italic, formatting.underline, formatting.font_size
    );

    println!("\n4. Save:");
    manager.save_document();
    print_status(&manager);

    println!("\n5. New document:");
    manager.new_document();
    print_status(&manager);
}
