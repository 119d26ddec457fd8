//! Benchmarks for monkeylink command rendering

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use monkeylink::protocol::{quote_text, Command};
use monkeylink::IdKind;

fn command_benchmarks(c: &mut Criterion) {
    c.bench_function("render_tap", |b| {
        let cmd = Command::Tap { x: 640, y: 480 };
        b.iter(|| black_box(&cmd).to_line());
    });

    c.bench_function("render_queryview", |b| {
        let cmd = Command::QueryView {
            kind: IdKind::AccessibilityIds,
            ids: vec!["1234".to_string(), "5678".to_string()],
            query: "getlocation".to_string(),
        };
        b.iter(|| black_box(&cmd).to_line());
    });

    c.bench_function("quote_text_multi_word", |b| {
        b.iter(|| quote_text(black_box("the quick brown fox")));
    });
}

criterion_group!(benches, command_benchmarks);
criterion_main!(benches);
