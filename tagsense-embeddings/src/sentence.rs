//! Mean-pooled sentence vectors and sentence similarity.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use tagsense_core::config::EmbeddingConfig;
use tagsense_core::constants::{rescale_cosine, IDENTICAL_SIMILARITY, UNDEFINED_SIMILARITY};
use tagsense_core::errors::LoadError;
use tagsense_core::models::{Sentence, SimilarityMatrix};
use tagsense_tokens::{StopWords, Tokenizer};
use tracing::debug;

use crate::cosine::cosine_similarity;
use crate::table::WordVectorTable;
use crate::vector::VectorSimilarity;

/// A sentence vector and the number of tokens that contributed to it.
///
/// `valid_tokens == 0` means the sentence had no known, non-stop-word token;
/// the vector is then all zeros and must not be compared.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceEmbedding {
    pub vector: Vec<f32>,
    pub valid_tokens: usize,
}

impl SentenceEmbedding {
    pub fn is_valid(&self) -> bool {
        self.valid_tokens > 0
    }
}

/// Sentence similarity built on the word vector table.
///
/// Embeddings are cached by blake3 hash of the sentence, so repeated label
/// descriptions are pooled once per process.
pub struct SentenceSimilarity {
    words: VectorSimilarity,
    stopwords: StopWords,
    tokenizer: &'static Tokenizer,
    cache: Cache<String, Arc<SentenceEmbedding>>,
}

impl SentenceSimilarity {
    pub fn new(table: Arc<WordVectorTable>, stopwords: StopWords, cache_size: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(cache_size)
            .time_to_idle(Duration::from_secs(3600))
            .build();
        Self {
            words: VectorSimilarity::new(table),
            stopwords,
            tokenizer: Tokenizer::shared(),
            cache,
        }
    }

    /// Build over a loaded table, reading stop words from `config.stopwords_path` if set.
    pub fn from_config(
        config: &EmbeddingConfig,
        table: Arc<WordVectorTable>,
    ) -> Result<Self, LoadError> {
        let stopwords = match config.stopwords_path.as_deref() {
            Some(path) => StopWords::load(Path::new(path))?,
            None => StopWords::empty(),
        };
        Ok(Self::new(table, stopwords, config.sentence_cache_size))
    }

    /// The underlying word model.
    pub fn words(&self) -> &VectorSimilarity {
        &self.words
    }

    pub fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }

    /// Mean of the vectors of the sentence's known, non-stop-word tokens.
    pub fn embed(&self, sentence: &Sentence) -> Arc<SentenceEmbedding> {
        let key = blake3::hash(sentence.cache_key().as_bytes())
            .to_hex()
            .to_string();
        if let Some(hit) = self.cache.get(&key) {
            return hit;
        }
        let embedding = Arc::new(self.pool(sentence));
        self.cache.insert(key, Arc::clone(&embedding));
        embedding
    }

    fn pool(&self, sentence: &Sentence) -> SentenceEmbedding {
        let segmented;
        let tokens: &[String] = match sentence {
            Sentence::Text(text) => {
                segmented = self.tokenizer.cut(text);
                &segmented
            }
            Sentence::Tokens(tokens) => tokens,
        };

        let table = self.words.table();
        let mut sum = vec![0.0f64; table.dims()];
        let mut valid_tokens = 0usize;
        for token in tokens {
            if self.stopwords.contains(token) {
                continue;
            }
            if let Some(v) = table.get(token) {
                for (acc, x) in sum.iter_mut().zip(v) {
                    *acc += *x as f64;
                }
                valid_tokens += 1;
            }
        }

        let vector = if valid_tokens == 0 {
            vec![0.0; table.dims()]
        } else {
            sum.iter().map(|x| (x / valid_tokens as f64) as f32).collect()
        };
        debug!(tokens = tokens.len(), valid_tokens, "sentence pooled");
        SentenceEmbedding {
            vector,
            valid_tokens,
        }
    }

    /// Similarity of two sentences; `-1.0` when either has no valid token.
    pub fn sentence_similarity(&self, s1: &Sentence, s2: &Sentence) -> f64 {
        if s1 == s2 {
            return IDENTICAL_SIMILARITY;
        }
        let (e1, e2) = (self.embed(s1), self.embed(s2));
        if !e1.is_valid() || !e2.is_valid() {
            return UNDEFINED_SIMILARITY;
        }
        rescale_cosine(cosine_similarity(&e1.vector, &e2.vector))
    }

    /// Pairwise similarity of two sentence lists with an outer validity mask.
    pub fn sentence_list_similarity(
        &self,
        list1: &[Sentence],
        list2: &[Sentence],
    ) -> SimilarityMatrix {
        let rows: Vec<Arc<SentenceEmbedding>> = list1.iter().map(|s| self.embed(s)).collect();
        let cols: Vec<Arc<SentenceEmbedding>> = list2.iter().map(|s| self.embed(s)).collect();

        let mut values = Vec::with_capacity(rows.len() * cols.len());
        for r in &rows {
            for c in &cols {
                values.push(rescale_cosine(cosine_similarity(&r.vector, &c.vector)));
            }
        }
        let row_valid: Vec<bool> = rows.iter().map(|e| e.is_valid()).collect();
        let col_valid: Vec<bool> = cols.iter().map(|e| e.is_valid()).collect();
        SimilarityMatrix::from_outer_mask(rows.len(), cols.len(), values, &row_valid, &col_valid)
    }

    /// Number of cached sentence vectors.
    pub fn cached(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}
