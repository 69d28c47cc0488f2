use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};

use tagsense_catalog::{LabelEntry, LabelSchema};
use tagsense_core::config::MatcherConfig;
use tagsense_core::models::DocumentEvidence;
use tagsense_embeddings::{SentenceSimilarity, VectorSimilarity, WordVectorTable};
use tagsense_matcher::{LabelMatcher, SimilarityEngines};
use tagsense_tokens::StopWords;

const DIMS: usize = 64;

fn word(i: usize) -> String {
    format!("词{i}")
}

/// 2K words with deterministic pseudo-random vectors.
fn build_table() -> WordVectorTable {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let entries = (0..2_000).map(|i| {
        let vector = (0..DIMS)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                (state % 2_000) as f32 / 1_000.0 - 1.0
            })
            .collect::<Vec<f32>>();
        (word(i), vector)
    });
    WordVectorTable::from_entries(entries).unwrap()
}

fn build_matcher() -> LabelMatcher {
    let table = Arc::new(build_table());
    let sentence = SentenceSimilarity::new(Arc::clone(&table), StopWords::empty(), 10_000);
    let engines = SimilarityEngines::from_parts(
        Some(VectorSimilarity::new(table)),
        Some(sentence),
        None,
        None,
    );
    LabelMatcher::new(Arc::new(engines), MatcherConfig::default())
}

fn build_schema(described: bool) -> LabelSchema {
    let labels = (0..40)
        .map(|i| {
            let label = LabelEntry::new(format!("label_{i}"), word(i * 7));
            if described {
                label.with_description(format!("{}{}", word(i * 7 + 1), word(i * 7 + 2)))
            } else {
                label
            }
        })
        .collect();
    LabelSchema::new("bench", labels)
}

fn build_evidence() -> DocumentEvidence {
    let words = (0..200).map(|i| word(i * 3 + 1)).collect();
    let sentences = (0..20)
        .map(|i| (0..10).map(|j| word(i * 10 + j)).collect::<String>())
        .collect();
    DocumentEvidence::new(words, sentences)
}

fn bench_word_matching(c: &mut Criterion) {
    let matcher = build_matcher();
    let schema = build_schema(false);
    let evidence = build_evidence();

    c.bench_function("match_40_labels_200_words", |b| {
        b.iter(|| {
            matcher.match_labels(&schema, &evidence, 3).unwrap();
        });
    });
}

fn bench_described_matching(c: &mut Criterion) {
    let matcher = build_matcher();
    let schema = build_schema(true);
    let evidence = build_evidence();

    c.bench_function("match_40_described_labels_20_sentences", |b| {
        b.iter(|| {
            matcher.match_labels(&schema, &evidence, 1).unwrap();
        });
    });
}

criterion_group!(benches, bench_word_matching, bench_described_matching);
criterion_main!(benches);
