//! # tagsense-sememe
//!
//! Word similarity from sememe decompositions: each word sense is a primary
//! sememe plus other, relation and symbol sememes, and sememes are compared
//! by their distance in a parent-pointer concept forest.

pub mod glossary;
pub mod graph;
pub mod name;
pub mod params;
pub mod similarity;

pub use glossary::{Glossary, GlossaryEntry};
pub use graph::{path_weight, SememeGraph, SememeNode};
pub use name::parse_sememe_name;
pub use params::SememeParams;
pub use similarity::SememeSimilarity;
