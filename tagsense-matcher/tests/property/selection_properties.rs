use proptest::prelude::*;
use tagsense_catalog::{LabelEntry, LabelSchema};
use tagsense_core::models::{MatchOutcome, SimilarityMatrix};
use tagsense_matcher::{fuse_row, select};

fn schema(n: usize) -> LabelSchema {
    LabelSchema::new(
        "p",
        (0..n)
            .map(|i| LabelEntry::new(format!("l{i}"), format!("标签{i}")))
            .collect(),
    )
}

fn scores() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(prop::sample::select(vec![0.0, 0.25, 0.5, 0.75, 1.0]), 1..12)
}

proptest! {
    #[test]
    fn top1_is_a_maximum_and_first_of_its_ties(s in scores()) {
        let outcome = select(&schema(s.len()), &s, 1);
        let best = outcome.best().unwrap();
        let max = s.iter().copied().fold(f64::MIN, f64::max);
        prop_assert_eq!(best.score, max);
        prop_assert_eq!(s.iter().position(|&x| x == max), Some(best.index));
        prop_assert!(matches!(outcome, MatchOutcome::Single(_)));
    }

    #[test]
    fn topk_is_descending_and_stable(s in scores(), k in 2usize..15) {
        let outcome = select(&schema(s.len()), &s, k);
        let ms = outcome.matches();
        prop_assert_eq!(ms.len(), k.min(s.len()));
        for w in ms.windows(2) {
            prop_assert!(w[0].score >= w[1].score);
            if w[0].score == w[1].score {
                prop_assert!(w[0].index < w[1].index);
            }
        }
    }

    #[test]
    fn topk_starts_with_top1(s in scores(), k in 2usize..15) {
        let sch = schema(s.len());
        let top1 = select(&sch, &s, 1);
        let topk = select(&sch, &s, k);
        prop_assert_eq!(top1.best(), topk.best());
    }

    #[test]
    fn fused_row_stays_in_unit_range(
        row in prop::collection::vec(prop::sample::select(vec![-1.0, 0.0, 0.3, 0.6, 1.0]), 0..10)
    ) {
        let m = SimilarityMatrix::from_scores(1, row.len(), |_, j| row[j]);
        let fused = fuse_row(&m, 0);
        prop_assert!((0.0..=1.0).contains(&fused));
        prop_assert!(fused <= m.row_max(0));
    }
}
