use serde::{Deserialize, Serialize};

/// Words and sentences extracted from one document section.
///
/// Produced by an upstream extractor; consumed read-only by the matcher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEvidence {
    pub words: Vec<String>,
    pub sentences: Vec<String>,
}

impl DocumentEvidence {
    pub fn new(words: Vec<String>, sentences: Vec<String>) -> Self {
        Self { words, sentences }
    }

    /// Evidence with words only (no sentence-level signal).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            sentences: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.sentences.is_empty()
    }
}
