//! Test fixture loader for tagsense resource files and label catalogs.
//!
//! Provides path helpers and typed JSON loading for tests across crates.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Word vectors, 3 dims, with a header and one malformed line.
pub const VECTORS: &str = "resources/vectors.txt";
/// Stop-word list.
pub const STOPWORDS: &str = "resources/stopwords.txt";
/// Synonym taxonomy, one malformed line.
pub const TAXONOMY: &str = "resources/cilin.txt";
/// Sense glossary, one malformed line.
pub const GLOSSARY: &str = "resources/glossary.txt";
/// Sememe graph, one malformed line.
pub const SEMEME_GRAPH: &str = "resources/sememe_graph.txt";
/// Directory of label schema JSON files.
pub const CATALOGS: &str = "catalogs";

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Absolute path as a `String`, the form config sections take.
pub fn fixture_path_string(relative_path: &str) -> String {
    fixture_path(relative_path).display().to_string()
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn all_resource_files_exist() {
        for f in [VECTORS, STOPWORDS, TAXONOMY, GLOSSARY, SEMEME_GRAPH] {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn catalogs_parse_as_json() {
        for f in ["catalogs/emotion.json", "catalogs/genre.json", "catalogs/setting.json"] {
            let value: serde_json::Value = load_fixture(f);
            assert!(value["name"].is_string(), "{} has no name", f);
            assert!(value["labels"].is_array(), "{} has no labels", f);
        }
    }
}
