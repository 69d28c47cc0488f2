//! Information-content similarity.

use std::path::Path;

use dashmap::DashMap;
use tagsense_core::config::TaxonomyConfig;
use tagsense_core::constants::{COMPONENT_TAXONOMY, UNDEFINED_SIMILARITY};
use tagsense_core::errors::{ConfigError, TagsenseResult};
use tagsense_core::models::{LoadStats, SimilarityMatrix};
use tagsense_core::traits::IWordSimilarity;
use tagsense_tokens::{label_terms, Tokenizer};
use tracing::debug;

use crate::index::TaxonomyIndex;
use crate::levels::LevelScheme;

/// Above this the best sense pair wins outright.
const MAX_DOMINATES: f64 = 0.7;
/// Above this (and below [`MAX_DOMINATES`]) the top score is dropped as an outlier.
const MEAN_TRIMS: f64 = 0.2;

/// Taxonomy word similarity with a per-code information-content memo.
pub struct TaxonomySimilarity {
    index: TaxonomyIndex,
    log_total: f64,
    ic_memo: DashMap<String, f64>,
    tokenizer: &'static Tokenizer,
}

impl TaxonomySimilarity {
    pub fn new(index: TaxonomyIndex) -> Self {
        let log_total = (index.total_leaves() as f64).log2();
        Self {
            index,
            log_total,
            ic_memo: DashMap::new(),
            tokenizer: Tokenizer::shared(),
        }
    }

    /// Load the taxonomy named by `config.path`.
    pub fn load(config: &TaxonomyConfig) -> TagsenseResult<(Self, LoadStats)> {
        let path = config
            .path
            .as_deref()
            .ok_or_else(|| ConfigError::MissingResource {
                resource: "taxonomy.path".to_string(),
            })?;
        let (index, stats) = TaxonomyIndex::load(Path::new(path), LevelScheme::from_config(config))?;
        Ok((Self::new(index), stats))
    }

    pub fn index(&self) -> &TaxonomyIndex {
        &self.index
    }

    /// `1 − log2(1 + descendants) / log2(total)`, floored at `0`; `0` for the
    /// empty code.
    ///
    /// A top-level code holding every leaf has `1 + descendants > total`.
    pub fn information_content(&self, code: &str) -> f64 {
        if code.is_empty() {
            return 0.0;
        }
        if let Some(ic) = self.ic_memo.get(code) {
            return *ic;
        }
        let hypo = 1.0 + self.index.descendant_count(code) as f64;
        let ic = (1.0 - hypo.log2() / self.log_total).max(0.0);
        self.ic_memo.insert(code.to_string(), ic);
        ic
    }

    /// Similarity of two codes through their common ancestor.
    pub fn code_similarity(&self, c1: &str, c2: &str) -> f64 {
        let lcp = self.index.longest_common_prefix(c1, c2);
        self.information_content(lcp)
            - (self.information_content(c1) + self.information_content(c2)) / 2.0
            + 1.0
    }

    /// Number of memoized codes.
    pub fn memoized(&self) -> usize {
        self.ic_memo.len()
    }

    /// Best score of any sub-term of `label` against `word`.
    fn label_word_similarity(&self, terms: &[String], word: &str) -> f64 {
        terms
            .iter()
            .map(|t| self.word_similarity(t, word))
            .fold(UNDEFINED_SIMILARITY, f64::max)
    }
}

/// Collapse the scores of every sense pair into one word score.
///
/// One score is returned as is. Otherwise the maximum wins when it exceeds
/// 0.7; else, when the mean exceeds 0.2, the mean of the rest after dropping
/// one maximum; else the minimum.
pub fn decide(scores: &[f64]) -> f64 {
    match scores {
        [] => UNDEFINED_SIMILARITY,
        [only] => *only,
        _ => {
            let sum: f64 = scores.iter().sum();
            let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
            let mean = sum / scores.len() as f64;
            if max > MAX_DOMINATES {
                max
            } else if mean > MEAN_TRIMS {
                (sum - max) / (scores.len() - 1) as f64
            } else {
                min
            }
        }
    }
}

impl IWordSimilarity for TaxonomySimilarity {
    fn word_similarity(&self, w1: &str, w2: &str) -> f64 {
        let (Some(codes1), Some(codes2)) = (self.index.codes(w1), self.index.codes(w2)) else {
            debug!(w1, w2, "word outside taxonomy vocabulary");
            return UNDEFINED_SIMILARITY;
        };
        let scores: Vec<f64> = codes1
            .iter()
            .flat_map(|c1| codes2.iter().map(move |c2| (c1, c2)))
            .map(|(c1, c2)| self.code_similarity(c1, c2))
            .collect();
        decide(&scores)
    }

    /// `list1` holds label names: each is split into sub-terms and scored by
    /// its best sub-term. Undefined entries are masked.
    fn word_list_similarity(&self, list1: &[String], list2: &[String]) -> SimilarityMatrix {
        let terms: Vec<Vec<String>> = list1
            .iter()
            .map(|label| label_terms(self.tokenizer, label))
            .collect();
        SimilarityMatrix::from_scores(list1.len(), list2.len(), |i, j| {
            self.label_word_similarity(&terms[i], &list2[j])
        })
    }

    fn name(&self) -> &str {
        COMPONENT_TAXONOMY
    }
}
