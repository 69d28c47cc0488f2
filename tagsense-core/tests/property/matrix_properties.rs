use proptest::prelude::*;
use tagsense_core::models::SimilarityMatrix;

fn score_or_sentinel() -> impl Strategy<Value = f64> {
    prop_oneof![Just(-1.0), 0.0f64..=1.0]
}

proptest! {
    #[test]
    fn masked_entries_are_zero(
        scores in prop::collection::vec(score_or_sentinel(), 1..40),
        cols in 1usize..8,
    ) {
        let rows = scores.len() / cols;
        prop_assume!(rows > 0);
        let m = SimilarityMatrix::from_scores(rows, cols, |i, j| scores[i * cols + j]);
        for i in 0..rows {
            for j in 0..cols {
                if !m.is_defined(i, j) {
                    prop_assert_eq!(m.get(i, j), 0.0);
                }
                prop_assert!((0.0..=1.0).contains(&m.get(i, j)));
            }
        }
    }

    #[test]
    fn row_reductions_stay_in_unit_range(
        scores in prop::collection::vec(score_or_sentinel(), 1..20),
    ) {
        let cols = scores.len();
        let m = SimilarityMatrix::from_scores(1, cols, |_, j| scores[j]);
        let mean = m.row_mean(0);
        let max = m.row_max(0);
        prop_assert!((0.0..=1.0).contains(&mean));
        prop_assert!((0.0..=1.0).contains(&max));
        prop_assert!(mean <= max + 1e-12);
    }

    #[test]
    fn outer_mask_is_conjunction(
        row_valid in prop::collection::vec(any::<bool>(), 1..6),
        col_valid in prop::collection::vec(any::<bool>(), 1..6),
    ) {
        let rows = row_valid.len();
        let cols = col_valid.len();
        let m = SimilarityMatrix::from_outer_mask(
            rows, cols, vec![0.75; rows * cols], &row_valid, &col_valid,
        );
        for i in 0..rows {
            for j in 0..cols {
                prop_assert_eq!(m.is_defined(i, j), row_valid[i] && col_valid[j]);
            }
        }
    }
}
