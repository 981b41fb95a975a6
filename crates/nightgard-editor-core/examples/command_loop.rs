//! Command interface example
//!
//! Feeds a scripted list of commands through the state manager, as a host event loop would.

use nightgard_editor_core::{
    Command, CommandResult, DocumentCommand, DocumentStateManager, EditorSettings, FormatCommand,
};

fn main() {
    let settings = EditorSettings::from_json_str(r#"{ "defaultFontSize": 16, "italic": true }"#)
        .unwrap_or_else(|err| {
            eprintln!("invalid settings, using defaults: {err}");
            EditorSettings::default()
        });
    let mut manager = DocumentStateManager::with_settings(&settings);

    let script = vec![
        Command::Document(DocumentCommand::SetTitle("Ledger".to_string())),
        Command::Document(DocumentCommand::UpdateText("one two  three".into())),
        Command::Format(FormatCommand::ToggleUnderline),
        Command::Format(FormatCommand::DecreaseFontSize),
        Command::Document(DocumentCommand::Save),
    ];

    for command in script {
        let label = format!("{command:?}");
        match manager.execute(command) {
            CommandResult::Success => println!("{label}: ok"),
            CommandResult::Saved(_) => println!("{label}: saved"),
            CommandResult::Toggled(value) => println!("{label}: now {value}"),
            CommandResult::FontSize(size) => println!("{label}: {size}pt"),
        }
    }

    let state = manager.get_full_state();
    println!(
        "\n{} - {} words, {} characters, version {}",
        state.document.title, state.document.word_count, state.document.character_count,
        state.document.version
    );
}
