//! Reading line-oriented resource files.

use std::path::Path;

use tagsense_core::errors::LoadError;
use tracing::warn;

/// Read a resource file as text.
///
/// Invalid UTF-8 sequences (legacy encodings) are replaced rather than
/// rejected, so a partly mis-encoded file still loads its valid lines.
pub fn read_resource(path: &Path) -> Result<String, LoadError> {
    let bytes = std::fs::read(path).map_err(|e| LoadError::Unreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!(path = %path.display(), "resource is not valid UTF-8, invalid bytes replaced");
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}
