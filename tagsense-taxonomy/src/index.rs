//! Two-pass taxonomy index.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tagsense_core::errors::LoadError;
use tagsense_core::models::LoadStats;
use tagsense_tokens::read_resource;
use tracing::{info, warn};

use crate::levels::{char_prefix, LevelScheme};

/// Code ↔ word mappings plus descendant leaf counts per ancestor prefix.
///
/// Built once; all counts are final before the first query.
#[derive(Debug, Clone)]
pub struct TaxonomyIndex {
    code_words: HashMap<String, Vec<String>>,
    word_codes: HashMap<String, Vec<String>>,
    descendants: HashMap<String, u64>,
    total_leaves: u64,
    scheme: LevelScheme,
}

impl TaxonomyIndex {
    pub fn load(path: &Path, scheme: LevelScheme) -> Result<(Self, LoadStats), LoadError> {
        let text = read_resource(path)?;
        Self::parse(&text, scheme, &path.display().to_string())
    }

    /// Build the index from `<code> <word> <word> ...` lines.
    ///
    /// Pass 1 maps codes and words and collects the ancestor prefixes of every
    /// code at least `min_code_len` long. Pass 2 re-scans the lines and adds
    /// each code's word count to every collected ancestor strictly shorter
    /// than the code. `source` names the input in logs and errors.
    pub fn parse(
        text: &str,
        scheme: LevelScheme,
        source: &str,
    ) -> Result<(Self, LoadStats), LoadError> {
        let mut code_words: HashMap<String, Vec<String>> = HashMap::new();
        let mut word_codes: HashMap<String, Vec<String>> = HashMap::new();
        let mut ancestors: HashSet<String> = HashSet::new();
        let mut stats = LoadStats::default();

        for (line_no, line) in text.lines().enumerate() {
            let Some((code, words)) = parse_line(line) else {
                if !line.trim().is_empty() {
                    warn!(source, line = line_no + 1, "skipping malformed taxonomy line");
                    stats.skip();
                }
                continue;
            };
            for word in &words {
                word_codes
                    .entry(word.to_string())
                    .or_default()
                    .push(code.to_string());
            }
            code_words.insert(
                code.to_string(),
                words.iter().map(|w| w.to_string()).collect(),
            );
            stats.accept();

            if code.chars().count() >= scheme.min_code_len() {
                for &b in scheme.boundaries() {
                    ancestors.insert(char_prefix(code, b).to_string());
                }
            }
        }

        if code_words.is_empty() {
            return Err(LoadError::EmptyResource {
                path: source.to_string(),
            });
        }

        let mut descendants: HashMap<String, u64> =
            ancestors.into_iter().map(|a| (a, 0)).collect();
        for line in text.lines() {
            let Some((code, words)) = parse_line(line) else {
                continue;
            };
            let code_len = code.chars().count();
            for &b in scheme.boundaries() {
                if code_len <= b {
                    continue;
                }
                if let Some(count) = descendants.get_mut(char_prefix(code, b)) {
                    *count += words.len() as u64;
                }
            }
        }

        let coarsest = scheme.coarsest();
        let total_leaves: u64 = descendants
            .iter()
            .filter(|(prefix, _)| prefix.chars().count() == coarsest)
            .map(|(_, count)| *count)
            .sum();
        if total_leaves < 2 {
            return Err(LoadError::DegenerateTaxonomy {
                total: total_leaves,
            });
        }

        info!(
            source,
            codes = code_words.len(),
            words = word_codes.len(),
            ancestors = descendants.len(),
            total_leaves,
            skipped = stats.skipped,
            "taxonomy loaded"
        );
        Ok((
            Self {
                code_words,
                word_codes,
                descendants,
                total_leaves,
                scheme,
            },
            stats,
        ))
    }

    /// All codes (senses) of `word`, in file order.
    pub fn codes(&self, word: &str) -> Option<&[String]> {
        self.word_codes.get(word).map(Vec::as_slice)
    }

    pub fn words(&self, code: &str) -> Option<&[String]> {
        self.code_words.get(code).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.word_codes.contains_key(word)
    }

    /// Leaf words under `code`; `0` for codes that are not ancestors.
    pub fn descendant_count(&self, code: &str) -> u64 {
        self.descendants.get(code).copied().unwrap_or(0)
    }

    pub fn total_leaves(&self) -> u64 {
        self.total_leaves
    }

    pub fn vocab_size(&self) -> usize {
        self.word_codes.len()
    }

    pub fn scheme(&self) -> &LevelScheme {
        &self.scheme
    }

    /// Longest common prefix of two codes, aligned to a level boundary.
    pub fn longest_common_prefix<'a>(&self, c1: &'a str, c2: &str) -> &'a str {
        let matched = c1
            .chars()
            .zip(c2.chars())
            .take_while(|(a, b)| a == b)
            .count();
        char_prefix(c1, self.scheme.align(matched))
    }
}

fn parse_line(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut fields = line.split_whitespace();
    let code = fields.next()?;
    let words: Vec<&str> = fields.collect();
    if words.is_empty() {
        return None;
    }
    Some((code, words))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Aa01A01= 甲 乙\nAa01A02= 丙\nBa01A01= 丁\nCa01A01= 戊 己 庚 辛\n";

    fn index() -> TaxonomyIndex {
        TaxonomyIndex::parse(SAMPLE, LevelScheme::default(), "sample")
            .unwrap()
            .0
    }

    #[test]
    fn counts_leaves_per_ancestor() {
        let idx = index();
        assert_eq!(idx.total_leaves(), 8);
        assert_eq!(idx.descendant_count("A"), 3);
        assert_eq!(idx.descendant_count("Aa01A"), 3);
        assert_eq!(idx.descendant_count("Aa01A01"), 2);
        assert_eq!(idx.descendant_count("Aa01A01="), 0);
        assert_eq!(idx.descendant_count("C"), 4);
    }

    #[test]
    fn words_and_codes_are_cross_indexed() {
        let idx = index();
        assert_eq!(idx.codes("乙"), Some(&["Aa01A01=".to_string()][..]));
        assert_eq!(idx.words("Aa01A01=").map(<[String]>::len), Some(2));
        assert_eq!(idx.vocab_size(), 8);
        assert!(!idx.contains("未知"));
    }

    #[test]
    fn common_prefix_is_level_aligned() {
        let idx = index();
        assert_eq!(idx.longest_common_prefix("Aa01A01=", "Aa01A02="), "Aa01A");
        assert_eq!(idx.longest_common_prefix("Aa01A01=", "Aa02A01="), "Aa");
        assert_eq!(idx.longest_common_prefix("Aa01A01=", "Aa01B01="), "Aa01");
        assert_eq!(idx.longest_common_prefix("Aa01A01=", "Ba01A01="), "");
        assert_eq!(idx.longest_common_prefix("Aa01A01=", "Aa01A01="), "Aa01A01=");
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let text = format!("{SAMPLE}孤立\n\n");
        let (_, stats) = TaxonomyIndex::parse(&text, LevelScheme::default(), "t").unwrap();
        assert_eq!(stats.accepted, 4);
        assert_eq!(stats.skipped, 1);
    }

    #[test]
    fn single_leaf_is_degenerate() {
        let err = TaxonomyIndex::parse("Aa01A01= 甲\n", LevelScheme::default(), "t").unwrap_err();
        assert!(matches!(err, LoadError::DegenerateTaxonomy { total: 1 }));
    }

    #[test]
    fn short_codes_add_no_ancestors() {
        let (idx, _) =
            TaxonomyIndex::parse("Aa01 甲 乙\nBa01A01= 丙 丁\n", LevelScheme::default(), "t")
                .unwrap();
        assert_eq!(idx.descendant_count("A"), 0);
        assert_eq!(idx.total_leaves(), 2);
    }

    #[test]
    fn empty_input() {
        let err = TaxonomyIndex::parse("\n", LevelScheme::default(), "t").unwrap_err();
        assert!(matches!(err, LoadError::EmptyResource { .. }));
    }
}
