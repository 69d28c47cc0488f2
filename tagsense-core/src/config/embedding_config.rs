use serde::{Deserialize, Serialize};

use super::defaults;

/// Word/sentence embedding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Path to the word vector text file (optional `<vocab> <dim>` header).
    pub vectors_path: Option<String>,
    /// Path to the stop-word list used for sentence embedding.
    pub stopwords_path: Option<String>,
    /// Max number of cached sentence vectors.
    pub sentence_cache_size: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            vectors_path: None,
            stopwords_path: None,
            sentence_cache_size: defaults::DEFAULT_SENTENCE_CACHE_SIZE,
        }
    }
}
