//! # tagsense-embeddings
//!
//! Dense-vector similarity models.
//!
//! ```text
//! WordVectorTable (shared, read-only)
//! ├── VectorSimilarity   word ↔ word, word list ↔ word list
//! └── SentenceSimilarity mean-pooled sentence vectors, moka cache
//! ```

pub mod cosine;
pub mod sentence;
pub mod table;
pub mod vector;

pub use sentence::{SentenceEmbedding, SentenceSimilarity};
pub use table::WordVectorTable;
pub use vector::VectorSimilarity;
