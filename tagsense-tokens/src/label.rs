//! Label-name splitting for dictionary-based similarity models.

use tagsense_core::constants::LABEL_CATEGORY_SUFFIX;

use crate::tokenizer::Tokenizer;

/// Split a label display name into the terms a dictionary model can look up.
///
/// Long label names rarely appear in a taxonomy or glossary verbatim, so the
/// trailing category marker is stripped and the rest is segmented. Falls back
/// to the stripped name when segmentation yields nothing.
pub fn label_terms(tokenizer: &Tokenizer, display_name: &str) -> Vec<String> {
    let name = display_name
        .strip_suffix(LABEL_CATEGORY_SUFFIX)
        .filter(|s| !s.is_empty())
        .unwrap_or(display_name);
    let terms = tokenizer.cut(name);
    if terms.is_empty() {
        vec![name.to_string()]
    } else {
        terms
    }
}
