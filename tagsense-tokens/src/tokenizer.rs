//! Chinese word segmentation backed by jieba-rs.

use std::sync::OnceLock;

use jieba_rs::Jieba;

static SHARED: OnceLock<Tokenizer> = OnceLock::new();

/// Word segmenter. Read-only after construction.
pub struct Tokenizer {
    jieba: Jieba,
}

impl Tokenizer {
    /// Build a tokenizer with the bundled dictionary.
    ///
    /// Dictionary loading is slow; prefer [`Tokenizer::shared`].
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
        }
    }

    /// Process-wide tokenizer, built on first use.
    pub fn shared() -> &'static Tokenizer {
        SHARED.get_or_init(Tokenizer::new)
    }

    /// Segment `text` into words, dropping whitespace-only pieces.
    pub fn cut(&self, text: &str) -> Vec<String> {
        self.jieba
            .cut(text, true)
            .into_iter()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
