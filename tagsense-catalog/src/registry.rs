//! Registry of label schemas keyed by name.

use std::collections::BTreeMap;
use std::path::Path;

use tagsense_core::errors::CatalogError;
use tracing::info;

use crate::schema::LabelSchema;

/// Every label schema available to a process, built once at startup and
/// passed to the matcher explicitly.
#[derive(Debug, Clone, Default)]
pub struct CatalogRegistry {
    schemas: BTreeMap<String, LabelSchema>,
}

impl CatalogRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.json` file in `dir`, in file-name order.
    pub fn load(dir: &Path) -> Result<Self, CatalogError> {
        let unreadable = |path: &Path, e: std::io::Error| CatalogError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        };
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(|e| unreadable(dir, e))? {
            let path = entry.map_err(|e| unreadable(dir, e))?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                files.push(path);
            }
        }
        files.sort();

        let mut registry = Self::new();
        for path in &files {
            let json = std::fs::read_to_string(path).map_err(|e| unreadable(path, e))?;
            registry.insert(LabelSchema::from_json(&json, &path.display().to_string())?)?;
        }
        info!(dir = %dir.display(), schemas = registry.len(), "label catalogs loaded");
        Ok(registry)
    }

    /// Add a schema; names must be unique.
    pub fn insert(&mut self, schema: LabelSchema) -> Result<(), CatalogError> {
        schema.validate()?;
        if self.schemas.contains_key(&schema.name) {
            return Err(CatalogError::DuplicateSchema { name: schema.name });
        }
        self.schemas.insert(schema.name.clone(), schema);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&LabelSchema> {
        self.schemas.get(name)
    }

    pub fn require(&self, name: &str) -> Result<&LabelSchema, CatalogError> {
        self.get(name)
            .ok_or_else(|| CatalogError::SchemaNotFound(name.to_string()))
    }

    /// Schema names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.schemas.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
