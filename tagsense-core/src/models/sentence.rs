use serde::{Deserialize, Serialize};

/// A sentence given either as raw text or as pre-segmented tokens.
///
/// Raw text is segmented once at the API boundary; everything past that
/// point works on the token form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentence {
    Text(String),
    Tokens(Vec<String>),
}

impl Sentence {
    /// Stable string key for caching.
    pub fn cache_key(&self) -> String {
        match self {
            Sentence::Text(text) => format!("t:{text}"),
            Sentence::Tokens(tokens) => format!("k:{}", tokens.join("\u{1f}")),
        }
    }
}

impl From<&str> for Sentence {
    fn from(text: &str) -> Self {
        Sentence::Text(text.to_string())
    }
}

impl From<String> for Sentence {
    fn from(text: String) -> Self {
        Sentence::Text(text)
    }
}

impl From<Vec<String>> for Sentence {
    fn from(tokens: Vec<String>) -> Self {
        Sentence::Tokens(tokens)
    }
}

impl From<&[&str]> for Sentence {
    fn from(tokens: &[&str]) -> Self {
        Sentence::Tokens(tokens.iter().map(|t| t.to_string()).collect())
    }
}
