//! # tagsense-core
//!
//! Foundation crate for the tagsense label matcher.
//! Defines shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TagsenseConfig;
pub use errors::{TagsenseError, TagsenseResult};
pub use models::{DocumentEvidence, LabelMatch, MatchOutcome, Sentence, SimilarityMatrix};
pub use traits::IWordSimilarity;
