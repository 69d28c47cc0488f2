/// Resource loading errors.
///
/// Malformed lines never produce these; they are skipped with a warning.
/// These abort construction of a single similarity component only.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("resource unreadable: {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("resource contains no usable entries: {path}")]
    EmptyResource { path: String },

    #[error("taxonomy too small to normalize information content: {total} leaves")]
    DegenerateTaxonomy { total: u64 },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
