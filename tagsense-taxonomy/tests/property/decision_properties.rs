use proptest::prelude::*;
use tagsense_taxonomy::decide;

fn scores() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..=1.0, 1..10)
}

proptest! {
    #[test]
    fn decision_stays_within_score_bounds(s in scores()) {
        let d = decide(&s);
        let min = s.iter().copied().fold(f64::INFINITY, f64::min);
        let max = s.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(d >= min - 1e-12 && d <= max + 1e-12, "{} not in [{}, {}]", d, min, max);
    }

    #[test]
    fn dominant_maximum_wins(s in scores(), top in 0.71f64..=1.0) {
        let mut s = s;
        s.push(top);
        let max = s.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(decide(&s), max);
    }

    #[test]
    fn order_does_not_matter(s in scores()) {
        let mut reversed = s.clone();
        reversed.reverse();
        prop_assert!((decide(&s) - decide(&reversed)).abs() < 1e-9);
    }
}
