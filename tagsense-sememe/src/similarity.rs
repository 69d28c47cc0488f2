//! Sememe word similarity.

use std::collections::BTreeMap;
use std::path::Path;

use tagsense_core::config::SememeConfig;
use tagsense_core::constants::{COMPONENT_SEMEME, IDENTICAL_SIMILARITY, UNDEFINED_SIMILARITY};
use tagsense_core::errors::{ConfigError, TagsenseResult};
use tagsense_core::models::{LoadStats, SimilarityMatrix};
use tagsense_core::traits::IWordSimilarity;
use tagsense_tokens::{label_terms, Tokenizer};

use crate::glossary::{Glossary, GlossaryEntry};
use crate::graph::SememeGraph;
use crate::params::SememeParams;

/// `(...)` items name concrete words rather than sememes.
fn is_concrete(item: &str) -> bool {
    item.starts_with('(')
}

pub struct SememeSimilarity {
    glossary: Glossary,
    graph: SememeGraph,
    params: SememeParams,
    tokenizer: &'static Tokenizer,
}

impl SememeSimilarity {
    pub fn new(glossary: Glossary, graph: SememeGraph, params: SememeParams) -> Self {
        Self {
            glossary,
            graph,
            params,
            tokenizer: Tokenizer::shared(),
        }
    }

    /// Load the glossary and sememe graph named by `config`.
    pub fn load(config: &SememeConfig) -> TagsenseResult<(Self, LoadStats)> {
        let glossary_path = config.glossary_path.as_deref().ok_or_else(|| {
            ConfigError::MissingResource {
                resource: "sememe.glossary_path".to_string(),
            }
        })?;
        let graph_path = config
            .graph_path
            .as_deref()
            .ok_or_else(|| ConfigError::MissingResource {
                resource: "sememe.graph_path".to_string(),
            })?;
        let (graph, graph_stats) = SememeGraph::load(Path::new(graph_path))?;
        let (glossary, glossary_stats) = Glossary::load(Path::new(glossary_path))?;
        Ok((
            Self::new(glossary, graph, SememeParams::from(config)),
            graph_stats.merge(glossary_stats),
        ))
    }

    pub fn glossary(&self) -> &Glossary {
        &self.glossary
    }

    pub fn graph(&self) -> &SememeGraph {
        &self.graph
    }

    pub fn params(&self) -> &SememeParams {
        &self.params
    }

    /// Similarity of two sememe names.
    ///
    /// Both empty → 1; one empty → `delta`; equal → 1; otherwise
    /// `alfa / (alfa + distance)`, or `-1` when either is not in the graph.
    pub fn sememe_similarity(&self, s1: &str, s2: &str) -> f64 {
        if s1.is_empty() && s2.is_empty() {
            return IDENTICAL_SIMILARITY;
        }
        if s1.is_empty() || s2.is_empty() {
            return self.params.delta;
        }
        if s1 == s2 {
            return IDENTICAL_SIMILARITY;
        }
        match self
            .graph
            .distance(s1, s2, self.params.unreachable_distance)
        {
            Some(d) => self.params.alfa / (self.params.alfa + d),
            None => UNDEFINED_SIMILARITY,
        }
    }

    pub fn primary_similarity(&self, g1: &GlossaryEntry, g2: &GlossaryEntry) -> f64 {
        self.sememe_similarity(&g1.primary, &g2.primary)
    }

    /// Best match of each of `g1`'s other sememes among `g2`'s.
    ///
    /// Note: two differing `(...)` items reset the running best to `0.0`,
    /// discarding any better match seen earlier for the same item. Scores
    /// depend on that behavior and on the order of `g2.others`.
    pub fn other_similarity(&self, g1: &GlossaryEntry, g2: &GlossaryEntry) -> f64 {
        let (o1, o2) = (&g1.others, &g2.others);
        if o1.is_empty() && o2.is_empty() {
            return IDENTICAL_SIMILARITY;
        }
        let mut sum = 0.0;
        for a in o1 {
            let mut best = UNDEFINED_SIMILARITY;
            for b in o2 {
                let score = match (is_concrete(a), is_concrete(b)) {
                    (false, false) => self.sememe_similarity(a, b),
                    (true, true) if a == b => IDENTICAL_SIMILARITY,
                    (true, true) => {
                        best = 0.0;
                        0.0
                    }
                    _ => self.params.gama,
                };
                if score > best {
                    best = score;
                }
            }
            if best == UNDEFINED_SIMILARITY {
                best = self.params.delta;
            }
            sum += best;
        }
        self.length_penalized(sum, o1.len(), o2.len())
    }

    pub fn relation_similarity(&self, g1: &GlossaryEntry, g2: &GlossaryEntry) -> f64 {
        self.keyed_similarity(&g1.relations, &g2.relations)
    }

    pub fn symbol_similarity(&self, g1: &GlossaryEntry, g2: &GlossaryEntry) -> f64 {
        self.keyed_similarity(&g1.symbols, &g2.symbols)
    }

    /// Score `m1`'s values against `m2`'s value under the same key.
    fn keyed_similarity<K: Ord>(&self, m1: &BTreeMap<K, String>, m2: &BTreeMap<K, String>) -> f64 {
        if m1.is_empty() && m2.is_empty() {
            return IDENTICAL_SIMILARITY;
        }
        let mut sum = 0.0;
        for (key, v1) in m1 {
            sum += match m2.get(key) {
                None => self.params.delta,
                Some(v2) => match (is_concrete(v1), is_concrete(v2)) {
                    (false, false) => self.sememe_similarity(v1, v2).max(0.0),
                    (true, true) if v1 == v2 => IDENTICAL_SIMILARITY,
                    (true, true) => 0.0,
                    _ => self.params.gama,
                },
            };
        }
        self.length_penalized(sum, m1.len(), m2.len())
    }

    fn length_penalized(&self, sum: f64, n1: usize, n2: usize) -> f64 {
        let penalty = n1.abs_diff(n2) as f64 * self.params.delta;
        (sum + penalty) / n1.max(n2) as f64
    }

    /// Similarity of two senses: a weighted product chain gated by the primary sememe.
    ///
    /// A content word and a function word always score `0.0`.
    pub fn sense_similarity(&self, g1: &GlossaryEntry, g2: &GlossaryEntry) -> f64 {
        if g1.is_content_word != g2.is_content_word {
            return 0.0;
        }
        let s1 = self.primary_similarity(g1, g2);
        let s2 = self.other_similarity(g1, g2);
        let s3 = self.relation_similarity(g1, g2);
        let s4 = self.symbol_similarity(g1, g2);
        let [b1, b2, b3, b4] = self.params.beta;
        b1 * s1 + b2 * s1 * s2 + b3 * s1 * s2 * s3 + b4 * s1 * s2 * s3 * s4
    }

    fn label_word_similarity(&self, terms: &[String], word: &str) -> f64 {
        terms
            .iter()
            .map(|t| self.word_similarity(t, word))
            .fold(UNDEFINED_SIMILARITY, f64::max)
    }
}

impl IWordSimilarity for SememeSimilarity {
    /// Best sense-pair score, floored at `0.0`; `-1` if either word has no sense.
    fn word_similarity(&self, w1: &str, w2: &str) -> f64 {
        if w1 == w2 {
            return IDENTICAL_SIMILARITY;
        }
        let (senses1, senses2) = (self.glossary.senses(w1), self.glossary.senses(w2));
        if senses1.is_empty() || senses2.is_empty() {
            return UNDEFINED_SIMILARITY;
        }
        let mut best = 0.0f64;
        for g1 in senses1 {
            for g2 in senses2 {
                best = best.max(self.sense_similarity(g1, g2));
            }
        }
        best
    }

    /// `list1` holds label names, scored by their best sub-term.
    fn word_list_similarity(&self, list1: &[String], list2: &[String]) -> SimilarityMatrix {
        let terms: Vec<Vec<String>> = list1
            .iter()
            .map(|label| label_terms(self.tokenizer, label))
            .collect();
        SimilarityMatrix::from_scores(list1.len(), list2.len(), |i, j| {
            self.label_word_similarity(&terms[i], &list2[j])
        })
    }

    fn name(&self) -> &str {
        COMPONENT_SEMEME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::path_weight;

    const GRAPH: &str = "\
0 entity|实体 0
1 thing|万物 0
2 animate|生物 1
3 human|人 2
6 event|事件 6
7 act|行动 6
8 AlterRelation|改变关系 7
9 love|爱恋 8
10 like|喜欢 8
12 attribute|属性 12
13 sex|性别 12
14 male|男 13
15 female|女 13
";

    const GLOSSARY: &str = "\
男人/N/human|人,male|男
女人/N/human|人,female|女
恋爱/V/love|爱恋,experiencer=human|人
喜欢/V/like|喜欢,experiencer=human|人
喜欢/V/love|爱恋
的/STRU/{DeChinese|的}
人/N/human|人
";

    fn model() -> SememeSimilarity {
        let (graph, _) = SememeGraph::parse(GRAPH, "graph").unwrap();
        let (glossary, _) = Glossary::parse(GLOSSARY, "glossary").unwrap();
        SememeSimilarity::new(glossary, graph, SememeParams::default())
    }

    fn entry(line: &str) -> GlossaryEntry {
        GlossaryEntry::parse(line).unwrap()
    }

    fn sibling_similarity() -> f64 {
        1.6 / (1.6 + 2.0 * path_weight(1))
    }

    #[test]
    fn sememe_similarity_edge_cases() {
        let m = model();
        assert_eq!(m.sememe_similarity("", ""), 1.0);
        assert_eq!(m.sememe_similarity("", "人"), 0.2);
        assert_eq!(m.sememe_similarity("未知", "未知"), 1.0);
        assert_eq!(m.sememe_similarity("人", "未知"), -1.0);
        assert!((m.sememe_similarity("男", "女") - sibling_similarity()).abs() < 1e-12);
    }

    #[test]
    fn other_sememes_shape_the_score() {
        // primary equal, others are sibling sememes; the last three terms share s2
        let expected = 0.5 + 0.5 * sibling_similarity();
        assert!((model().word_similarity("男人", "女人") - expected).abs() < 1e-12);
    }

    #[test]
    fn best_sense_pair_wins() {
        // 喜欢's second sense shares the primary; the missing relation costs 2 × delta
        let expected = 0.5 + 0.2 + 0.17 * 0.4 + 0.13 * 0.4;
        assert!((model().word_similarity("恋爱", "喜欢") - expected).abs() < 1e-12);
    }

    #[test]
    fn function_and_content_words_score_zero() {
        assert_eq!(model().word_similarity("的", "人"), 0.0);
    }

    #[test]
    fn unknown_word_is_sentinel() {
        assert_eq!(model().word_similarity("人", "未知"), -1.0);
        assert_eq!(model().word_similarity("未知", "未知"), 1.0);
    }

    #[test]
    fn differing_concrete_items_reset_running_best() {
        // The matching "(北京)" scores 1.0 first, then the differing "(东京)"
        // resets the best to 0.0; with the length penalty the result is
        // (0 + 0.2) / 2 rather than (1 + 0.2) / 2.
        let m = model();
        let g1 = entry("甲/N/human|人,(北京)");
        let g2 = entry("乙/N/human|人,(北京),(东京)");
        assert!((m.other_similarity(&g1, &g2) - 0.1).abs() < 1e-12);

        let g3 = entry("丙/N/human|人,(东京),(北京)");
        assert!((m.other_similarity(&g1, &g3) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn relation_keys_missing_on_the_other_side() {
        let m = model();
        let g1 = entry("甲/V/love|爱恋,experiencer=human|人");
        let g2 = entry("乙/V/love|爱恋");
        assert!((m.relation_similarity(&g1, &g2) - 0.4).abs() < 1e-12);
        // only g1's keys are visited
        assert!((m.relation_similarity(&g2, &g1) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn mixed_concrete_and_sememe_uses_gama() {
        let m = model();
        let g1 = entry("甲/N/human|人,male|男");
        let g2 = entry("乙/N/human|人,(北京)");
        assert!((m.other_similarity(&g1, &g2) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn label_terms_take_the_best_score() {
        let m = model();
        let labels = vec!["男人".to_string(), "未知类".to_string()];
        let words = vec!["女人".to_string()];
        let sim = m.word_list_similarity(&labels, &words);
        assert!(sim.is_defined(0, 0));
        assert!(!sim.is_defined(1, 0));
    }
}
