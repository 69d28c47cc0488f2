/// Label matching errors.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("return count must be at least 1, got {requested}")]
    InvalidReturnCount { requested: usize },

    #[error("no similarity model is available")]
    NoSimilarityModel,
}
