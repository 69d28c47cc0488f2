//! Stop-word sets.

use std::collections::HashSet;
use std::path::Path;

use tagsense_core::errors::LoadError;
use tracing::info;

use crate::resource::read_resource;

/// Words excluded from sentence embeddings and evidence extraction.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Load one stop word per line; blank lines are ignored.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = read_resource(path)?;
        let words: HashSet<String> = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();
        info!(path = %path.display(), count = words.len(), "stop words loaded");
        Ok(Self { words })
    }

    /// Add extra words on top of the loaded set.
    pub fn extend<I, S>(&mut self, extra: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(extra.into_iter().map(Into::into));
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
