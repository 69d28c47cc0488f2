//! Similarity model set with per-model degradation.

use std::sync::Arc;

use tagsense_core::config::TagsenseConfig;
use tagsense_core::constants::{
    COMPONENT_EMBEDDING, COMPONENT_SEMEME, COMPONENT_SENTENCE, COMPONENT_TAXONOMY,
};
use tagsense_core::errors::TagsenseResult;
use tagsense_core::models::{
    ComponentHealth, DegradationEvent, HealthReport, HealthStatus, LoadStats,
};
use tagsense_embeddings::{SentenceSimilarity, VectorSimilarity};
use tagsense_sememe::SememeSimilarity;
use tagsense_taxonomy::TaxonomySimilarity;
use tracing::{info, warn};

/// Fallback recorded when a model fails: matching goes on without its signal.
const FALLBACK: &str = "remaining similarity models";

/// The similarity models available to the matcher.
///
/// Each model is optional; a model that failed to load is absent and its
/// failure is kept as a [`DegradationEvent`]. Read-only after construction.
#[derive(Default)]
pub struct SimilarityEngines {
    embedding: Option<VectorSimilarity>,
    sentence: Option<SentenceSimilarity>,
    taxonomy: Option<TaxonomySimilarity>,
    sememe: Option<SememeSimilarity>,
    /// Components that were attempted, with the failure if any.
    attempted: Vec<(&'static str, Option<String>)>,
    events: Vec<DegradationEvent>,
}

impl SimilarityEngines {
    /// Load the models the matcher config enables, in parallel.
    ///
    /// The vector table is loaded once and shared by the word and sentence
    /// models. A model that fails is logged and left out; the rest remain usable.
    pub fn load(config: &TagsenseConfig) -> Self {
        let want_vectors = config.matcher.use_embedding || config.matcher.use_descriptions;
        let ((vectors, taxonomy), sememe) = rayon::join(
            || {
                rayon::join(
                    || want_vectors.then(|| VectorSimilarity::from_config(&config.embedding)),
                    || {
                        config
                            .matcher
                            .use_taxonomy
                            .then(|| TaxonomySimilarity::load(&config.taxonomy))
                    },
                )
            },
            || {
                config
                    .matcher
                    .use_sememe
                    .then(|| SememeSimilarity::load(&config.sememe))
            },
        );

        let mut engines = Self::default();
        if config.matcher.use_embedding {
            let words = engines.accept(COMPONENT_EMBEDDING, vectors);
            if config.matcher.use_descriptions {
                if let Some(words) = &words {
                    let sentence = sentence_model(config, words, LoadStats::default());
                    engines.sentence = engines.accept(COMPONENT_SENTENCE, Some(sentence));
                }
            }
            engines.embedding = words;
        } else {
            // the table only feeds the sentence model; a failed load is reported as its failure
            let sentence = vectors.map(|outcome| {
                outcome.and_then(|(words, stats)| sentence_model(config, &words, stats))
            });
            engines.sentence = engines.accept(COMPONENT_SENTENCE, sentence);
        }
        engines.taxonomy = engines.accept(COMPONENT_TAXONOMY, taxonomy);
        engines.sememe = engines.accept(COMPONENT_SEMEME, sememe);

        info!(
            embedding = engines.embedding.is_some(),
            sentence = engines.sentence.is_some(),
            taxonomy = engines.taxonomy.is_some(),
            sememe = engines.sememe.is_some(),
            degraded = engines.events.len(),
            "similarity engines ready"
        );
        engines
    }

    /// Assemble from already-built models.
    pub fn from_parts(
        embedding: Option<VectorSimilarity>,
        sentence: Option<SentenceSimilarity>,
        taxonomy: Option<TaxonomySimilarity>,
        sememe: Option<SememeSimilarity>,
    ) -> Self {
        let mut attempted = Vec::new();
        for (name, present) in [
            (COMPONENT_EMBEDDING, embedding.is_some()),
            (COMPONENT_SENTENCE, sentence.is_some()),
            (COMPONENT_TAXONOMY, taxonomy.is_some()),
            (COMPONENT_SEMEME, sememe.is_some()),
        ] {
            if present {
                attempted.push((name, None));
            }
        }
        Self {
            embedding,
            sentence,
            taxonomy,
            sememe,
            attempted,
            events: Vec::new(),
        }
    }

    /// Record the outcome of one component load and keep the model if it loaded.
    fn accept<T>(
        &mut self,
        component: &'static str,
        outcome: Option<TagsenseResult<(T, LoadStats)>>,
    ) -> Option<T> {
        match outcome? {
            Ok((model, stats)) => {
                if stats.skipped > 0 {
                    warn!(component, skipped = stats.skipped, "malformed resource lines skipped");
                }
                self.attempted.push((component, None));
                Some(model)
            }
            Err(e) => {
                warn!(component, error = %e, "similarity model unavailable, continuing without it");
                self.attempted.push((component, Some(e.to_string())));
                self.events
                    .push(DegradationEvent::new(component, e.to_string(), FALLBACK));
                None
            }
        }
    }

    pub fn embedding(&self) -> Option<&VectorSimilarity> {
        self.embedding.as_ref()
    }

    pub fn sentence(&self) -> Option<&SentenceSimilarity> {
        self.sentence.as_ref()
    }

    pub fn taxonomy(&self) -> Option<&TaxonomySimilarity> {
        self.taxonomy.as_ref()
    }

    pub fn sememe(&self) -> Option<&SememeSimilarity> {
        self.sememe.as_ref()
    }

    /// Load failures, in component order.
    pub fn degradation_events(&self) -> &[DegradationEvent] {
        &self.events
    }

    /// Status of every attempted component.
    pub fn health(&self) -> HealthReport {
        let components = self
            .attempted
            .iter()
            .map(|(name, failure)| ComponentHealth {
                name: name.to_string(),
                status: if failure.is_none() {
                    HealthStatus::Healthy
                } else {
                    HealthStatus::Unhealthy
                },
                message: failure.clone(),
            })
            .collect();
        HealthReport::from_components(components)
    }
}

/// Sentence model over an already loaded vector table.
fn sentence_model(
    config: &TagsenseConfig,
    words: &VectorSimilarity,
    stats: LoadStats,
) -> TagsenseResult<(SentenceSimilarity, LoadStats)> {
    let table = Arc::clone(words.table());
    let sentence = SentenceSimilarity::from_config(&config.embedding, table)?;
    Ok((sentence, stats))
}
