use std::sync::Arc;

use proptest::prelude::*;
use tagsense_core::traits::IWordSimilarity;
use tagsense_embeddings::{VectorSimilarity, WordVectorTable};

const VOCAB: [&str; 4] = ["甲", "乙", "丙", "丁"];

fn model(vectors: Vec<Vec<f32>>) -> VectorSimilarity {
    let table = WordVectorTable::from_entries(VOCAB.iter().copied().zip(vectors)).unwrap();
    VectorSimilarity::new(Arc::new(table))
}

fn vectors() -> impl Strategy<Value = Vec<Vec<f32>>> {
    prop::collection::vec(prop::collection::vec(-10.0f32..10.0, 4), VOCAB.len())
}

fn word_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec!["甲", "乙", "丙", "丁", "戊", "己"]),
        0..6,
    )
    .prop_map(|ws| ws.into_iter().map(String::from).collect())
}

proptest! {
    #[test]
    fn word_scores_are_in_unit_range(vs in vectors(), i in 0usize..4, j in 0usize..4) {
        let m = model(vs);
        let s = m.word_similarity(VOCAB[i], VOCAB[j]);
        prop_assert!((0.0..=1.0).contains(&s), "score {} out of range", s);
    }

    #[test]
    fn self_similarity_is_one(vs in vectors(), i in 0usize..4) {
        prop_assert_eq!(model(vs).word_similarity(VOCAB[i], VOCAB[i]), 1.0);
    }

    #[test]
    fn masked_entries_are_zero(vs in vectors(), l1 in word_list(), l2 in word_list()) {
        let sim = model(vs).word_list_similarity(&l1, &l2);
        for i in 0..sim.rows() {
            for j in 0..sim.cols() {
                if !sim.is_defined(i, j) {
                    prop_assert_eq!(sim.get(i, j), 0.0);
                } else {
                    prop_assert!((0.0..=1.0).contains(&sim.get(i, j)));
                }
            }
        }
    }
}
