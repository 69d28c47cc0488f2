pub mod catalog_config;
pub mod defaults;
pub mod embedding_config;
pub mod matcher_config;
pub mod observability_config;
pub mod sememe_config;
pub mod tagsense_config;
pub mod taxonomy_config;

pub use catalog_config::CatalogConfig;
pub use embedding_config::EmbeddingConfig;
pub use matcher_config::MatcherConfig;
pub use observability_config::ObservabilityConfig;
pub use sememe_config::SememeConfig;
pub use tagsense_config::TagsenseConfig;
pub use taxonomy_config::TaxonomyConfig;
