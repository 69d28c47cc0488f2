//! Sense glossary: `word/pos/DEF` records.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use tagsense_core::errors::LoadError;
use tagsense_core::models::LoadStats;
use tagsense_tokens::read_resource;
use tracing::{info, warn};

use crate::name::parse_sememe_name;

/// One sense of a word, decomposed into sememes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlossaryEntry {
    pub word: String,
    pub pos: String,
    /// `false` for function words (DEF wrapped in `{...}`).
    pub is_content_word: bool,
    /// Chinese name of the primary sememe; empty when the DEF has none.
    pub primary: String,
    /// Other independent sememes. `(...)` items are concrete words, kept raw.
    pub others: Vec<String>,
    /// Relation sememes, `role=value`.
    pub relations: BTreeMap<String, String>,
    /// Symbol sememes keyed by their leading symbol.
    pub symbols: BTreeMap<char, String>,
}

impl GlossaryEntry {
    /// Parse one `word/pos/DEF` line; `None` for blank or malformed lines.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let fields: Vec<&str> = line.split('/').collect();
        let [word, pos, def] = fields[..] else {
            return None;
        };
        if word.is_empty() {
            return None;
        }

        let mut entry = GlossaryEntry {
            word: word.to_string(),
            pos: pos.to_string(),
            is_content_word: !def.starts_with('{'),
            ..Default::default()
        };

        let mut tokens: Vec<&str> = def.split(',').collect();
        tokens[0] = tokens[0].trim_start_matches('{').trim_end_matches('}');

        let mut rest = &tokens[..];
        if tokens[0].chars().next().is_some_and(char::is_alphabetic) {
            entry.primary = parse_sememe_name(tokens[0]).0.to_string();
            rest = &tokens[1..];
        }

        for token in rest {
            let Some(first) = token.chars().next() else {
                continue;
            };
            if first == '(' {
                entry.others.push(token.to_string());
            } else if let Some((key, value)) = token.split_once('=') {
                entry
                    .relations
                    .insert(key.to_string(), sememe_value(value).to_string());
            } else if first.is_alphabetic() {
                entry.others.push(parse_sememe_name(token).0.to_string());
            } else {
                let value = &token[first.len_utf8()..];
                entry.symbols.insert(first, sememe_value(value).to_string());
            }
        }
        Some(entry)
    }
}

/// Strip enclosing parentheses and keep the Chinese half of a sememe value.
fn sememe_value(raw: &str) -> &str {
    let value = raw.trim_start_matches('(').trim_end_matches(')');
    if value.is_empty() {
        value
    } else {
        parse_sememe_name(value).0
    }
}

/// All glossary senses, grouped by word in file order.
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    senses: HashMap<String, Vec<GlossaryEntry>>,
    entries: usize,
}

impl Glossary {
    pub fn load(path: &Path) -> Result<(Self, LoadStats), LoadError> {
        let text = read_resource(path)?;
        Self::parse(&text, &path.display().to_string())
    }

    pub fn parse(text: &str, source: &str) -> Result<(Self, LoadStats), LoadError> {
        let mut glossary = Glossary::default();
        let mut stats = LoadStats::default();
        for (line_no, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match GlossaryEntry::parse(line) {
                Some(entry) => {
                    glossary.insert(entry);
                    stats.accept();
                }
                None => {
                    warn!(source, line = line_no + 1, "skipping malformed glossary line");
                    stats.skip();
                }
            }
        }
        if glossary.is_empty() {
            return Err(LoadError::EmptyResource {
                path: source.to_string(),
            });
        }
        info!(
            source,
            words = glossary.senses.len(),
            senses = glossary.entries,
            skipped = stats.skipped,
            "glossary loaded"
        );
        Ok((glossary, stats))
    }

    pub fn insert(&mut self, entry: GlossaryEntry) {
        self.senses.entry(entry.word.clone()).or_default().push(entry);
        self.entries += 1;
    }

    /// Every sense of `word`; empty when the word is unknown.
    pub fn senses(&self, word: &str) -> &[GlossaryEntry] {
        self.senses.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, word: &str) -> bool {
        self.senses.contains_key(word)
    }

    /// Number of senses.
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }
}
