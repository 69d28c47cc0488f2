//! Taxonomy level boundaries.

use tagsense_core::config::{defaults, TaxonomyConfig};

/// Code-prefix lengths (in characters) at which taxonomy levels end.
///
/// With the default `[1, 2, 4, 5, 7]` a code such as `Ed01A01=` has ancestors
/// `E`, `Ed`, `Ed01`, `Ed01A`, `Ed01A01`. Levels spanning two characters mean
/// a prefix of length 3 or 6 splits a level marker and is not a real node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelScheme {
    boundaries: Vec<usize>,
    min_code_len: usize,
}

impl LevelScheme {
    /// `boundaries` must be non-empty, positive and strictly increasing
    /// (checked by config validation).
    pub fn new(boundaries: Vec<usize>, min_code_len: usize) -> Self {
        Self {
            boundaries,
            min_code_len,
        }
    }

    pub fn from_config(config: &TaxonomyConfig) -> Self {
        Self::new(config.level_boundaries.clone(), config.min_code_len)
    }

    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    /// Codes shorter than this contribute no ancestors.
    pub fn min_code_len(&self) -> usize {
        self.min_code_len
    }

    /// Length of the top-level prefix.
    pub fn coarsest(&self) -> usize {
        self.boundaries.first().copied().unwrap_or(1)
    }

    /// Trim a matched prefix length back to the level boundary it lies in.
    ///
    /// Lengths strictly between two boundaries fall back to the lower one;
    /// lengths on a boundary or past the last one are kept.
    pub fn align(&self, matched: usize) -> usize {
        for pair in self.boundaries.windows(2) {
            if pair[0] < matched && matched < pair[1] {
                return pair[0];
            }
        }
        matched
    }
}

impl Default for LevelScheme {
    fn default() -> Self {
        Self::new(
            defaults::DEFAULT_LEVEL_BOUNDARIES.to_vec(),
            defaults::DEFAULT_MIN_CODE_LEN,
        )
    }
}

/// First `n` characters of `code` (the whole code if shorter).
pub fn char_prefix(code: &str, n: usize) -> &str {
    match code.char_indices().nth(n) {
        Some((idx, _)) => &code[..idx],
        None => code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scheme_trims_split_markers() {
        let scheme = LevelScheme::default();
        assert_eq!(scheme.align(3), 2);
        assert_eq!(scheme.align(6), 5);
        for kept in [0, 1, 2, 4, 5, 7, 8] {
            assert_eq!(scheme.align(kept), kept);
        }
    }

    #[test]
    fn custom_scheme_generalizes() {
        let scheme = LevelScheme::new(vec![2, 5], 5);
        assert_eq!(scheme.align(3), 2);
        assert_eq!(scheme.align(4), 2);
        assert_eq!(scheme.align(1), 1);
        assert_eq!(scheme.coarsest(), 2);
    }

    #[test]
    fn char_prefix_is_char_based() {
        assert_eq!(char_prefix("Ed01A01=", 4), "Ed01");
        assert_eq!(char_prefix("甲乙丙", 2), "甲乙");
        assert_eq!(char_prefix("Ed", 5), "Ed");
    }
}
