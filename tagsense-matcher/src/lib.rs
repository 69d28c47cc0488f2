//! # tagsense-matcher
//!
//! Label selection over heterogeneous similarity signals.
//!
//! ```text
//! SimilarityEngines (loaded once, shared)
//! ├── VectorSimilarity   ─┐
//! ├── TaxonomySimilarity ─┼─ word signals: (mean + max) / 2 per label, averaged
//! ├── SememeSimilarity   ─┘
//! └── SentenceSimilarity ─── description signal, averaged with the word score
//! LabelMatcher → MatchOutcome (top-1 / top-k / none)
//! ```

pub mod engines;
pub mod matcher;
pub mod selection;

pub use engines::SimilarityEngines;
pub use matcher::LabelMatcher;
pub use selection::{fuse_row, select};
