//! Label matching over a document's evidence.

use std::sync::Arc;

use rayon::prelude::*;
use tagsense_catalog::{LabelSchema, LabelSheet};
use tagsense_core::config::MatcherConfig;
use tagsense_core::errors::MatchError;
use tagsense_core::models::{DocumentEvidence, LabelMatch, MatchOutcome, Sentence};
use tagsense_core::traits::IWordSimilarity;
use tracing::debug;

use crate::engines::SimilarityEngines;
use crate::selection::{fuse_row, select};

/// Picks labels from a catalog for a document.
///
/// Cheap to clone; the engines are shared.
#[derive(Clone)]
pub struct LabelMatcher {
    engines: Arc<SimilarityEngines>,
    config: MatcherConfig,
}

impl LabelMatcher {
    pub fn new(engines: Arc<SimilarityEngines>, config: MatcherConfig) -> Self {
        Self { engines, config }
    }

    pub fn engines(&self) -> &SimilarityEngines {
        &self.engines
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Enabled and loaded word-level models.
    fn word_models(&self) -> Vec<&dyn IWordSimilarity> {
        let mut models: Vec<&dyn IWordSimilarity> = Vec::new();
        if self.config.use_embedding {
            if let Some(m) = self.engines.embedding() {
                models.push(m);
            }
        }
        if self.config.use_taxonomy {
            if let Some(m) = self.engines.taxonomy() {
                models.push(m);
            }
        }
        if self.config.use_sememe {
            if let Some(m) = self.engines.sememe() {
                models.push(m);
            }
        }
        models
    }

    /// Fused per-label scores, in catalog order.
    ///
    /// `Ok(None)` when no signal had a single defined entry. A signal with no
    /// defined entry abstains instead of pulling the average to zero.
    pub fn scores(
        &self,
        schema: &LabelSchema,
        evidence: &DocumentEvidence,
    ) -> Result<Option<Vec<f64>>, MatchError> {
        let models = self.word_models();
        let sentence_model = self
            .engines
            .sentence()
            .filter(|_| self.config.use_descriptions);
        if models.is_empty() && sentence_model.is_none() {
            return Err(MatchError::NoSimilarityModel);
        }

        let labels = schema.display_names();
        let word_signals: Vec<Vec<f64>> = models
            .par_iter()
            .filter_map(|model| {
                let matrix = model.word_list_similarity(&labels, &evidence.words);
                if matrix.defined_count() == 0 {
                    debug!(model = model.name(), schema = %schema.name, "word signal abstains");
                    return None;
                }
                Some((0..matrix.rows()).map(|i| fuse_row(&matrix, i)).collect())
            })
            .collect();
        let word_scores = average(&word_signals);

        let sentence_scores: Option<Vec<f64>> = match (sentence_model, schema.descriptions()) {
            (Some(model), Some(descriptions)) if !evidence.sentences.is_empty() => {
                let descriptions: Vec<Sentence> =
                    descriptions.into_iter().map(Sentence::from).collect();
                let sentences: Vec<Sentence> = evidence
                    .sentences
                    .iter()
                    .map(|s| Sentence::from(s.as_str()))
                    .collect();
                let matrix = model.sentence_list_similarity(&descriptions, &sentences);
                (matrix.defined_count() > 0)
                    .then(|| (0..matrix.rows()).map(|i| fuse_row(&matrix, i)).collect())
            }
            _ => None,
        };

        Ok(match (word_scores, sentence_scores) {
            (Some(w), Some(s)) => Some(w.iter().zip(&s).map(|(a, b)| (a + b) / 2.0).collect()),
            (Some(w), None) => Some(w),
            (None, Some(s)) => Some(s),
            (None, None) => None,
        })
    }

    /// Match `evidence` against `schema`, returning the best `return_count` labels.
    pub fn match_labels(
        &self,
        schema: &LabelSchema,
        evidence: &DocumentEvidence,
        return_count: usize,
    ) -> Result<MatchOutcome, MatchError> {
        if return_count < 1 {
            return Err(MatchError::InvalidReturnCount {
                requested: return_count,
            });
        }
        if schema.is_empty() {
            return Ok(MatchOutcome::NoResult);
        }
        let outcome = match self.scores(schema, evidence)? {
            Some(scores) => select(schema, &scores, return_count),
            None => MatchOutcome::NoResult,
        };
        debug!(
            schema = %schema.name,
            words = evidence.words.len(),
            sentences = evidence.sentences.len(),
            selected = ?outcome.internal_names(),
            "labels matched"
        );
        Ok(outcome)
    }

    /// [`match_labels`](Self::match_labels) with the configured default count.
    pub fn best_labels(
        &self,
        schema: &LabelSchema,
        evidence: &DocumentEvidence,
    ) -> Result<MatchOutcome, MatchError> {
        self.match_labels(schema, evidence, self.config.default_return_count)
    }

    /// Top-1 match at each level, descending into the winner's children until
    /// a label without children is reached.
    pub fn resolve_path(
        &self,
        schema: &LabelSchema,
        evidence: &DocumentEvidence,
    ) -> Result<Vec<LabelMatch>, MatchError> {
        let mut path = Vec::new();
        let mut current = schema;
        loop {
            let outcome = self.match_labels(current, evidence, 1)?;
            let Some(best) = outcome.best() else {
                break;
            };
            let children = current
                .get(best.index)
                .and_then(|label| label.children.as_deref());
            path.push(best.clone());
            match children {
                Some(next) => current = next,
                None => break,
            }
        }
        Ok(path)
    }

    /// Match and record the result in `sheet` under the schema's name.
    pub fn assign(
        &self,
        sheet: &mut LabelSheet,
        schema: &LabelSchema,
        evidence: &DocumentEvidence,
        return_count: usize,
    ) -> Result<MatchOutcome, MatchError> {
        let outcome = self.match_labels(schema, evidence, return_count)?;
        sheet.assign(&schema.name, outcome.matches());
        Ok(outcome)
    }
}

/// Element-wise mean of equally long score vectors; `None` when there are none.
fn average(signals: &[Vec<f64>]) -> Option<Vec<f64>> {
    let first = signals.first()?;
    let n = signals.len() as f64;
    Some(
        (0..first.len())
            .map(|i| signals.iter().map(|s| s[i]).sum::<f64>() / n)
            .collect(),
    )
}
