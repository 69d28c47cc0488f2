/// tagsense version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Score returned when one or both terms are unknown to a model.
///
/// Distinct from `0.0`, which is a defined (maximally dissimilar) score.
pub const UNDEFINED_SIMILARITY: f64 = -1.0;

/// Similarity of a term with itself.
pub const IDENTICAL_SIMILARITY: f64 = 1.0;

/// Trailing category marker stripped from label names before segmentation.
pub const LABEL_CATEGORY_SUFFIX: char = '类';

/// Component names used in logs, health reports and degradation events.
pub const COMPONENT_EMBEDDING: &str = "embedding";
pub const COMPONENT_SENTENCE: &str = "sentence";
pub const COMPONENT_TAXONOMY: &str = "taxonomy";
pub const COMPONENT_SEMEME: &str = "sememe";

/// Returns true if `score` is the undefined sentinel.
pub fn is_undefined(score: f64) -> bool {
    score == UNDEFINED_SIMILARITY
}

/// Map a cosine similarity from `[-1, 1]` onto `[0, 1]`.
///
/// Every similarity family goes through this so their outputs stay comparable.
pub fn rescale_cosine(cosine: f64) -> f64 {
    (cosine + 1.0) / 2.0
}
