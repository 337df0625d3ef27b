//! Benchmark for the search projection.
//!
//! The projection re-runs over the full note list on every keystroke, so
//! it has to stay linear for lists in the low thousands.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use scriba_core::{NoteId, NoteQuery, NoteRecord};

fn sample_notes(count: u64) -> Vec<NoteRecord> {
    (1..=count)
        .map(|i| NoteRecord {
            id: NoteId::new(i),
            title: format!("note {i}"),
            content: if i % 10 == 0 {
                format!("remember the milk, entry {i}")
            } else {
                format!("body text for entry {i}")
            },
            pinned: i % 7 == 0,
        })
        .collect()
}

fn bench_apply(c: &mut Criterion) {
    let notes = sample_notes(2_000);

    let query = NoteQuery::new("milk");
    c.bench_function("query_apply_2k_substring", |b| {
        b.iter(|| query.apply(black_box(&notes)))
    });

    let empty = NoteQuery::default();
    c.bench_function("query_apply_2k_empty", |b| {
        b.iter(|| empty.apply(black_box(&notes)))
    });
}

criterion_group!(benches, bench_apply);
criterion_main!(benches);
