use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use nightgard_editor_core::{
    DocumentStateManager, DocumentStats, RichText, TextStyle, character_count, word_count,
};

fn large_text(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 64);
    for i in 0..line_count {
        out.push_str(&format!(
            "{i:06} the quick brown fox jumps over the lazy dog (nightgard benchmark line)\n"
        ));
    }
    out.pop();
    out
}

/// Alternate plain and bold spans, one per line.
fn large_rich_text(line_count: usize) -> RichText {
    let bold = TextStyle {
        bold: true,
        ..TextStyle::default()
    };
    let mut rich = RichText::new();
    for (i, line) in large_text(line_count).split_inclusive('\n').enumerate() {
        let style = if i % 2 == 0 { TextStyle::PLAIN } else { bold };
        rich.push(line, style);
    }
    rich
}

fn bench_word_count(c: &mut Criterion) {
    // ~100k words.
    let text = large_text(10_000);
    c.bench_function("word_count/10k_lines", |b| {
        b.iter(|| black_box(word_count(black_box(&text))))
    });
}

fn bench_character_count(c: &mut Criterion) {
    let text = large_text(10_000);
    c.bench_function("character_count/10k_lines", |b| {
        b.iter(|| black_box(character_count(black_box(&text))))
    });
}

fn bench_full_stats_rich_text(c: &mut Criterion) {
    let rich = large_rich_text(10_000);
    c.bench_function("document_stats/10k_spans", |b| {
        b.iter(|| black_box(DocumentStats::from_rich_text(black_box(&rich))))
    });
}

fn bench_update_then_read(c: &mut Criterion) {
    let rich = large_rich_text(10_000);
    c.bench_function("update_text_then_status/10k_spans", |b| {
        b.iter_batched(
            || (DocumentStateManager::new(), rich.clone()),
            |(mut manager, content)| {
                manager.update_text(content);
                black_box(manager.get_document_state());
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_word_count,
    bench_character_count,
    bench_full_stats_rich_text,
    bench_update_then_read
);
criterion_main!(benches);
