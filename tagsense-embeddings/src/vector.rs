//! Word similarity over a word vector table.

use std::path::Path;
use std::sync::Arc;

use tagsense_core::config::EmbeddingConfig;
use tagsense_core::constants::{
    rescale_cosine, COMPONENT_EMBEDDING, IDENTICAL_SIMILARITY, UNDEFINED_SIMILARITY,
};
use tagsense_core::errors::{ConfigError, TagsenseResult};
use tagsense_core::models::{LoadStats, SimilarityMatrix};
use tagsense_core::traits::IWordSimilarity;

use crate::cosine::cosine_similarity;
use crate::table::WordVectorTable;

/// Cosine word similarity rescaled onto `[0, 1]`.
#[derive(Debug, Clone)]
pub struct VectorSimilarity {
    table: Arc<WordVectorTable>,
}

impl VectorSimilarity {
    pub fn new(table: Arc<WordVectorTable>) -> Self {
        Self { table }
    }

    /// Load the table named by `config.vectors_path`.
    ///
    /// Fails with [`ConfigError::MissingResource`] when no path is configured;
    /// use [`VectorSimilarity::new`] to supply an in-memory table instead.
    pub fn from_config(config: &EmbeddingConfig) -> TagsenseResult<(Self, LoadStats)> {
        let path = config
            .vectors_path
            .as_deref()
            .ok_or_else(|| ConfigError::MissingResource {
                resource: "embedding.vectors_path".to_string(),
            })?;
        let (table, stats) = WordVectorTable::load(Path::new(path))?;
        Ok((Self::new(Arc::new(table)), stats))
    }

    pub fn table(&self) -> &Arc<WordVectorTable> {
        &self.table
    }
}

impl IWordSimilarity for VectorSimilarity {
    fn word_similarity(&self, w1: &str, w2: &str) -> f64 {
        if w1 == w2 {
            return IDENTICAL_SIMILARITY;
        }
        match (self.table.get(w1), self.table.get(w2)) {
            (Some(v1), Some(v2)) => rescale_cosine(cosine_similarity(v1, v2)),
            _ => UNDEFINED_SIMILARITY,
        }
    }

    fn word_list_similarity(&self, list1: &[String], list2: &[String]) -> SimilarityMatrix {
        if list1 == list2 {
            return SimilarityMatrix::ones(list1.len(), list2.len());
        }
        let rows: Vec<Option<&[f32]>> = list1.iter().map(|w| self.table.get(w)).collect();
        let cols: Vec<Option<&[f32]>> = list2.iter().map(|w| self.table.get(w)).collect();

        let mut values = Vec::with_capacity(rows.len() * cols.len());
        for r in &rows {
            for c in &cols {
                let v = match (r, c) {
                    (Some(a), Some(b)) => rescale_cosine(cosine_similarity(a, b)),
                    _ => 0.0,
                };
                values.push(v);
            }
        }
        let row_valid: Vec<bool> = rows.iter().map(Option::is_some).collect();
        let col_valid: Vec<bool> = cols.iter().map(Option::is_some).collect();
        SimilarityMatrix::from_outer_mask(rows.len(), cols.len(), values, &row_valid, &col_valid)
    }

    fn name(&self) -> &str {
        COMPONENT_EMBEDDING
    }
}
