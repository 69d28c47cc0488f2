//! # tagsense-taxonomy
//!
//! Word similarity over a synonym taxonomy whose codes encode ancestry by
//! prefix. Similarity is driven by the information content of the longest
//! common level-aligned prefix of two codes.

pub mod index;
pub mod levels;
pub mod similarity;

pub use index::TaxonomyIndex;
pub use levels::LevelScheme;
pub use similarity::{decide, TaxonomySimilarity};
