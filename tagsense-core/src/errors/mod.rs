//! Error handling for tagsense.
//! One error enum per subsystem, `thiserror` only.

pub mod catalog_error;
pub mod config_error;
pub mod load_error;
pub mod match_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use load_error::LoadError;
pub use match_error::MatchError;

/// Top-level error aggregating every subsystem error via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum TagsenseError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Resource load error: {0}")]
    Load(#[from] LoadError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Match error: {0}")]
    Match(#[from] MatchError),
}

pub type TagsenseResult<T> = Result<T, TagsenseError>;
