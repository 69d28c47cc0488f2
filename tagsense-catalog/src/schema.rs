use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tagsense_core::errors::CatalogError;

/// One selectable label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelEntry {
    pub internal_name: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Second-level labels refining this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Box<LabelSchema>>,
}

impl LabelEntry {
    pub fn new(internal_name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            internal_name: internal_name.into(),
            display_name: display_name.into(),
            description: None,
            children: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_children(mut self, children: LabelSchema) -> Self {
        self.children = Some(Box::new(children));
        self
    }
}

/// An ordered label set for one tagging dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSchema {
    pub name: String,
    pub labels: Vec<LabelEntry>,
}

impl LabelSchema {
    pub fn new(name: impl Into<String>, labels: Vec<LabelEntry>) -> Self {
        Self {
            name: name.into(),
            labels,
        }
    }

    /// Parse a schema from JSON and validate it. `path` is used in errors only.
    pub fn from_json(json: &str, path: &str) -> Result<Self, CatalogError> {
        let schema: LabelSchema =
            serde_json::from_str(json).map_err(|e| CatalogError::Malformed {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        schema.validate()?;
        Ok(schema)
    }

    /// Internal names unique per schema, display names non-empty, recursively.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for label in &self.labels {
            if !seen.insert(label.internal_name.as_str()) {
                return Err(CatalogError::DuplicateLabel {
                    schema: self.name.clone(),
                    internal_name: label.internal_name.clone(),
                });
            }
            if label.display_name.trim().is_empty() {
                return Err(CatalogError::EmptyDisplayName {
                    schema: self.name.clone(),
                    internal_name: label.internal_name.clone(),
                });
            }
            if let Some(children) = &label.children {
                children.validate()?;
            }
        }
        Ok(())
    }

    pub fn display_names(&self) -> Vec<String> {
        self.labels.iter().map(|l| l.display_name.clone()).collect()
    }

    pub fn internal_names(&self) -> Vec<String> {
        self.labels.iter().map(|l| l.internal_name.clone()).collect()
    }

    /// Descriptions of every label, or `None` unless all are present and non-empty.
    pub fn descriptions(&self) -> Option<Vec<String>> {
        if self.labels.is_empty() {
            return None;
        }
        self.labels
            .iter()
            .map(|l| {
                l.description
                    .as_deref()
                    .map(str::trim)
                    .filter(|d| !d.is_empty())
                    .map(str::to_string)
            })
            .collect()
    }

    pub fn find(&self, internal_name: &str) -> Option<&LabelEntry> {
        self.labels.iter().find(|l| l.internal_name == internal_name)
    }

    pub fn get(&self, index: usize) -> Option<&LabelEntry> {
        self.labels.get(index)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
