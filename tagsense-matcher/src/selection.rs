//! Score reduction and label selection.

use tagsense_core::models::{LabelMatch, MatchOutcome, SimilarityMatrix};
use tagsense_catalog::LabelSchema;

/// `(mean + max) / 2` over the defined entries of row `i`.
pub fn fuse_row(matrix: &SimilarityMatrix, i: usize) -> f64 {
    (matrix.row_mean(i) + matrix.row_max(i)) / 2.0
}

/// Pick labels by score. `return_count` must be at least 1.
///
/// One label: the first maximum. More: the best `return_count` labels,
/// descending, ties kept in catalog order.
pub fn select(schema: &LabelSchema, scores: &[f64], return_count: usize) -> MatchOutcome {
    let label_match = |index: usize| {
        schema.get(index).map(|label| LabelMatch {
            index,
            internal_name: label.internal_name.clone(),
            display_name: label.display_name.clone(),
            score: scores[index],
        })
    };

    if return_count == 1 {
        let mut best: Option<usize> = None;
        for (i, score) in scores.iter().enumerate() {
            if best.map_or(true, |b| *score > scores[b]) {
                best = Some(i);
            }
        }
        return best
            .and_then(label_match)
            .map_or(MatchOutcome::NoResult, MatchOutcome::Single);
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    let ranked: Vec<LabelMatch> = order
        .into_iter()
        .take(return_count)
        .filter_map(label_match)
        .collect();
    if ranked.is_empty() {
        MatchOutcome::NoResult
    } else {
        MatchOutcome::Ranked(ranked)
    }
}
