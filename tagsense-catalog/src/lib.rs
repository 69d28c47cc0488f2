//! # tagsense-catalog
//!
//! Label catalogs consumed by the matcher. Schemas are loaded once into an
//! explicit [`CatalogRegistry`]; each classification run records its chosen
//! labels in a [`LabelSheet`].

pub mod registry;
pub mod schema;
pub mod sheet;

pub use registry::CatalogRegistry;
pub use schema::{LabelEntry, LabelSchema};
pub use sheet::{LabelAssignment, LabelSheet};
