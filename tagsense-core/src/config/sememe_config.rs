use serde::{Deserialize, Serialize};

use super::defaults;

/// Sememe model configuration: resource paths and scoring parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SememeConfig {
    /// Glossary file (`word/pos/DEF` per line).
    pub glossary_path: Option<String>,
    /// Sememe graph file (`id name parent_id` per line).
    pub graph_path: Option<String>,
    /// Distance smoothing constant in `alfa / (alfa + distance)`.
    pub alfa: f64,
    /// Weights of the four sub-scores, primary first.
    pub beta: Vec<f64>,
    /// Score for a cross-type (sememe vs. concrete word) comparison.
    pub gama: f64,
    /// Score for an empty-vs-present or unmatched comparison.
    pub delta: f64,
    /// Distance reported when two sememes share no ancestor.
    pub unreachable_distance: f64,
}

impl Default for SememeConfig {
    fn default() -> Self {
        Self {
            glossary_path: None,
            graph_path: None,
            alfa: defaults::DEFAULT_ALFA,
            beta: defaults::DEFAULT_BETA.to_vec(),
            gama: defaults::DEFAULT_GAMA,
            delta: defaults::DEFAULT_DELTA,
            unreachable_distance: defaults::DEFAULT_UNREACHABLE_DISTANCE,
        }
    }
}
