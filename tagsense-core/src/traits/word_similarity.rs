use crate::models::SimilarityMatrix;

/// A word-level similarity model.
///
/// Scores are in `[0, 1]`, or the `-1.0` sentinel when a term is unknown
/// to the model. Implementations hold no per-call mutable state.
pub trait IWordSimilarity: Send + Sync {
    /// Similarity of two words.
    fn word_similarity(&self, w1: &str, w2: &str) -> f64;

    /// Pairwise similarity of two word lists, `list1.len() × list2.len()`.
    fn word_list_similarity(&self, list1: &[String], list2: &[String]) -> SimilarityMatrix;

    /// Human-readable model name.
    fn name(&self) -> &str;
}
