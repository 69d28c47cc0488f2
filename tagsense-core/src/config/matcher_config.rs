use serde::{Deserialize, Serialize};

use super::defaults;

/// Label matcher configuration: which signals feed the fused score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Use embedding word similarity as a word-level signal.
    pub use_embedding: bool,
    /// Use taxonomy word similarity as a word-level signal.
    pub use_taxonomy: bool,
    /// Use sememe word similarity as a word-level signal.
    pub use_sememe: bool,
    /// Compare label descriptions with document sentences when every label has one.
    pub use_descriptions: bool,
    /// Return count used when callers do not pass one.
    pub default_return_count: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            use_embedding: defaults::DEFAULT_USE_EMBEDDING,
            use_taxonomy: defaults::DEFAULT_USE_TAXONOMY,
            use_sememe: defaults::DEFAULT_USE_SEMEME,
            use_descriptions: defaults::DEFAULT_USE_DESCRIPTIONS,
            default_return_count: defaults::DEFAULT_RETURN_COUNT,
        }
    }
}
