//! Top-level tagsense configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    CatalogConfig, EmbeddingConfig, MatcherConfig, ObservabilityConfig, SememeConfig,
    TaxonomyConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`TAGSENSE_*`)
/// 2. Config file passed to [`TagsenseConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TagsenseConfig {
    pub embedding: EmbeddingConfig,
    pub taxonomy: TaxonomyConfig,
    pub sememe: SememeConfig,
    pub matcher: MatcherConfig,
    pub catalog: CatalogConfig,
    pub observability: ObservabilityConfig,
}

impl TagsenseConfig {
    /// Load configuration: defaults, then `path` (if any), then environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file without env overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `TAGSENSE_*` environment variables.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Split out from [`apply_env_overrides`](Self::apply_env_overrides) so
    /// tests don't have to mutate the process environment.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("TAGSENSE_VECTORS") {
            self.embedding.vectors_path = Some(v);
        }
        if let Some(v) = lookup("TAGSENSE_STOPWORDS") {
            self.embedding.stopwords_path = Some(v);
        }
        if let Some(v) = lookup("TAGSENSE_TAXONOMY") {
            self.taxonomy.path = Some(v);
        }
        if let Some(v) = lookup("TAGSENSE_GLOSSARY") {
            self.sememe.glossary_path = Some(v);
        }
        if let Some(v) = lookup("TAGSENSE_SEMEME_GRAPH") {
            self.sememe.graph_path = Some(v);
        }
        if let Some(v) = lookup("TAGSENSE_CATALOG_DIR") {
            self.catalog.dir = Some(v);
        }
        if let Some(v) = lookup("TAGSENSE_LOG_LEVEL") {
            self.observability.log_level = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let boundaries = &self.taxonomy.level_boundaries;
        if boundaries.is_empty() || boundaries[0] == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "taxonomy.level_boundaries".to_string(),
                message: "must be non-empty and start above 0".to_string(),
            });
        }
        if boundaries.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ConfigError::ValidationFailed {
                field: "taxonomy.level_boundaries".to_string(),
                message: "must be strictly increasing".to_string(),
            });
        }
        if self.sememe.beta.len() != 4 {
            return Err(ConfigError::ValidationFailed {
                field: "sememe.beta".to_string(),
                message: format!("expected 4 weights, got {}", self.sememe.beta.len()),
            });
        }
        if self.sememe.alfa <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "sememe.alfa".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.matcher.default_return_count == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "matcher.default_return_count".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
