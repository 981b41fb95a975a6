use nightgard_editor_core::{
    DocumentStateManager, DocumentStats, RichText, StyledSpan, TextStyle, character_count,
    word_count,
};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Counts maximal non-whitespace runs by scanning characters one at a time.
fn count_runs(text: &str) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            in_run = false;
        } else if !in_run {
            in_run = true;
            runs += 1;
        }
    }
    runs
}

fn random_text(rng: &mut StdRng, len: usize) -> String {
    const ALPHABET: &[char] = &[
        'a', 'b', 'z', 'É', '字', '👍', '.', '-', ' ', ' ', '\t', '\n', '\r', '\u{00A0}',
        '\u{3000}',
    ];
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

#[test]
fn test_word_count_matches_run_count() {
    let mut rng = StdRng::seed_from_u64(0x6e67);
    for _ in 0..500 {
        let len = rng.gen_range(0..64);
        let text = random_text(&mut rng, len);
        assert_eq!(word_count(&text), count_runs(&text), "text: {text:?}");
    }
}

#[test]
fn test_statistics_ignore_styling() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let text = random_text(&mut rng, 40);

        // Split the same text into randomly styled spans.
        let mut spans = Vec::new();
        let chars: Vec<char> = text.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            let end = (i + rng.gen_range(1..8)).min(chars.len());
            let style = TextStyle {
                bold: rng.gen_bool(0.5),
                italic: rng.gen_bool(0.5),
                ..TextStyle::default()
            };
            spans.push(StyledSpan::new(chars[i..end].iter().collect::<String>(), style));
            i = end;
        }
        let rich: RichText = spans.into_iter().collect();

        assert_eq!(rich.plain_text(), text);
        assert_eq!(
            DocumentStats::from_rich_text(&rich),
            DocumentStats::from_text(&text)
        );
    }
}

#[test]
fn test_example_document() {
    let mut manager = DocumentStateManager::new();
    manager.update_text(RichText::plain("Hello   world\nfoo"));

    assert_eq!(manager.word_count(), 3);
    assert_eq!(manager.character_count(), 17);
}

#[test]
fn test_empty_document_statistics() {
    let manager = DocumentStateManager::new();
    assert_eq!(manager.word_count(), 0);
    assert_eq!(manager.character_count(), 0);
    assert_eq!(manager.get_statistics(), DocumentStats::default());
}

#[test]
fn test_statistics_recomputed_on_each_read() {
    let mut manager = DocumentStateManager::new();
    manager.update_text(RichText::plain("one"));
    assert_eq!(manager.word_count(), 1);

    manager.update_text(RichText::plain("one two three"));
    assert_eq!(manager.word_count(), 3);
    assert_eq!(manager.character_count(), 13);
}

#[test]
fn test_character_count_is_grapheme_based() {
    // Family emoji: four people joined by ZWJ is one user-perceived character.
    let family = "👨\u{200D}👩\u{200D}👧\u{200D}👦";
    assert_eq!(character_count(family), 1);
    assert_eq!(character_count("日本語 テキスト"), 8);
    assert_eq!(word_count("日本語 テキスト"), 2);
}

#[test]
fn test_full_stats() {
    let stats = DocumentStats::from_text("a\u{301}b\nc d\n");
    assert_eq!(
        stats,
        DocumentStats {
            words: 3,
            characters: 7,
            scalars: 8,
            lines: 3,
            bytes: 9,
        }
    );
}
