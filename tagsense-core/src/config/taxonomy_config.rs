use serde::{Deserialize, Serialize};

use super::defaults;

/// Synonym taxonomy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// Path to the taxonomy file (`<code> <word> <word> ...` per line).
    pub path: Option<String>,
    /// Code prefix lengths that mark taxonomy levels, strictly increasing.
    pub level_boundaries: Vec<usize>,
    /// Codes shorter than this do not contribute ancestor prefixes.
    pub min_code_len: usize,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            path: None,
            level_boundaries: defaults::DEFAULT_LEVEL_BOUNDARIES.to_vec(),
            min_code_len: defaults::DEFAULT_MIN_CODE_LEN,
        }
    }
}
