use serde::{Deserialize, Serialize};

/// Label catalog configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directory holding one JSON label schema per file.
    pub dir: Option<String>,
}
