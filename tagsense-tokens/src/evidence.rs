//! Word/sentence evidence extraction from document text.

use std::collections::HashSet;

use tagsense_core::models::DocumentEvidence;
use tracing::debug;

use crate::stopwords::StopWords;
use crate::text::has_chinese;
use crate::tokenizer::Tokenizer;

/// Turns document sentences into the word list the matcher compares labels with.
pub struct EvidenceExtractor<'a> {
    tokenizer: &'a Tokenizer,
    stopwords: &'a StopWords,
}

impl<'a> EvidenceExtractor<'a> {
    pub fn new(tokenizer: &'a Tokenizer, stopwords: &'a StopWords) -> Self {
        Self {
            tokenizer,
            stopwords,
        }
    }

    /// Whether a segmented token is worth comparing against labels.
    ///
    /// Keeps multi-character tokens that contain Chinese and are not stop words.
    pub fn is_content_word(&self, word: &str) -> bool {
        word.chars().count() > 1 && has_chinese(word) && !self.stopwords.contains(word)
    }

    /// Distinct content words of `sentences` in first-seen order.
    pub fn words(&self, sentences: &[String]) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut words = Vec::new();
        for sentence in sentences {
            for word in self.tokenizer.cut(sentence) {
                if self.is_content_word(&word) && seen.insert(word.clone()) {
                    words.push(word);
                }
            }
        }
        words
    }

    /// Build evidence from a document's sentences.
    pub fn extract(&self, sentences: Vec<String>) -> DocumentEvidence {
        let words = self.words(&sentences);
        debug!(
            sentences = sentences.len(),
            words = words.len(),
            "document evidence extracted"
        );
        DocumentEvidence::new(words, sentences)
    }
}
