/// Label catalog errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog file unreadable: {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("malformed catalog {path}: {reason}")]
    Malformed { path: String, reason: String },

    #[error("duplicate label schema: {name}")]
    DuplicateSchema { name: String },

    #[error("duplicate label {internal_name} in schema {schema}")]
    DuplicateLabel { schema: String, internal_name: String },

    #[error("label {internal_name} in schema {schema} has an empty display name")]
    EmptyDisplayName { schema: String, internal_name: String },

    #[error("label schema not found: {0}")]
    SchemaNotFound(String),
}
