use std::sync::Arc;

use tagsense_catalog::{CatalogRegistry, LabelEntry, LabelSchema, LabelSheet};
use tagsense_core::config::TagsenseConfig;
use tagsense_core::constants::{COMPONENT_EMBEDDING, COMPONENT_SENTENCE, COMPONENT_TAXONOMY};
use tagsense_core::models::{DocumentEvidence, HealthStatus, MatchOutcome};
use tagsense_matcher::{LabelMatcher, SimilarityEngines};
use test_fixtures::{
    fixture_path, fixture_path_string, CATALOGS, GLOSSARY, SEMEME_GRAPH, STOPWORDS, TAXONOMY,
    VECTORS,
};

fn config() -> TagsenseConfig {
    let mut config = TagsenseConfig::default();
    config.embedding.vectors_path = Some(fixture_path_string(VECTORS));
    config.embedding.stopwords_path = Some(fixture_path_string(STOPWORDS));
    config
}

fn matcher(config: &TagsenseConfig) -> LabelMatcher {
    let engines = Arc::new(SimilarityEngines::load(config));
    LabelMatcher::new(engines, config.matcher.clone())
}

fn registry() -> CatalogRegistry {
    CatalogRegistry::load(&fixture_path(CATALOGS)).unwrap()
}

fn romance_evidence() -> DocumentEvidence {
    DocumentEvidence::from_words(["心动", "暗恋", "喜欢"])
}

#[test]
fn closest_label_wins_top1() {
    let registry = registry();
    let emotion = registry.require("emotion").unwrap();
    let outcome = matcher(&config())
        .match_labels(emotion, &romance_evidence(), 1)
        .unwrap();
    let best = outcome.best().unwrap();
    assert_eq!(best.display_name, "恋爱");
    assert_eq!(best.internal_name, "love");
    assert!((best.score - 0.982_919_765_850_832_4).abs() < 1e-6);
    assert!(matches!(outcome, MatchOutcome::Single(_)));
}

#[test]
fn top2_is_ranked_descending() {
    let registry = registry();
    let emotion = registry.require("emotion").unwrap();
    let outcome = matcher(&config())
        .match_labels(emotion, &romance_evidence(), 2)
        .unwrap();
    assert_eq!(outcome.display_names(), vec!["恋爱", "纯爱"]);
    let scores: Vec<f64> = outcome.matches().iter().map(|m| m.score).collect();
    assert!(scores[0] > scores[1]);
    assert!((scores[1] - 0.926_385_440_778_566_1).abs() < 1e-6);
}

#[test]
fn return_count_larger_than_catalog_returns_all() {
    let registry = registry();
    let emotion = registry.require("emotion").unwrap();
    let outcome = matcher(&config())
        .match_labels(emotion, &romance_evidence(), 10)
        .unwrap();
    assert_eq!(outcome.internal_names(), vec!["love", "pure_love", "harem"]);
}

#[test]
fn nested_catalog_resolves_to_leaf() {
    let registry = registry();
    let genre = registry.require("genre").unwrap();
    let path = matcher(&config())
        .resolve_path(genre, &romance_evidence())
        .unwrap();
    let names: Vec<&str> = path.iter().map(|m| m.internal_name.as_str()).collect();
    assert_eq!(names, vec!["romance", "pure_love"]);
}

#[test]
fn unknown_words_give_no_result() {
    let registry = registry();
    let emotion = registry.require("emotion").unwrap();
    let evidence = DocumentEvidence::from_words(["完全陌生", "未登录词"]);
    let m = matcher(&config());
    assert_eq!(m.match_labels(emotion, &evidence, 1).unwrap(), MatchOutcome::NoResult);
    assert!(m.resolve_path(emotion, &evidence).unwrap().is_empty());
}

#[test]
fn descriptions_add_a_sentence_signal() {
    let registry = registry();
    let setting = registry.require("setting").unwrap();
    let m = matcher(&config());

    let words_only = DocumentEvidence::from_words(["校园"]);
    let with_sentences = DocumentEvidence::new(vec!["校园".into()], vec!["学校".into()]);
    let word_scores = m.scores(setting, &words_only).unwrap().unwrap();
    let fused = m.scores(setting, &with_sentences).unwrap().unwrap();

    assert_ne!(word_scores, fused);
    assert!(fused[0] > fused[1]);
    let best = m.match_labels(setting, &with_sentences, 1).unwrap();
    assert_eq!(best.internal_names(), vec!["campus"]);
}

#[test]
fn unknown_sentences_abstain() {
    let registry = registry();
    let setting = registry.require("setting").unwrap();
    let m = matcher(&config());
    let words_only = DocumentEvidence::from_words(["校园"]);
    let noisy = DocumentEvidence::new(vec!["校园".into()], vec!["完全陌生".into()]);
    assert_eq!(
        m.scores(setting, &words_only).unwrap(),
        m.scores(setting, &noisy).unwrap()
    );
}

#[test]
fn partial_descriptions_disable_sentence_signal() {
    let schema = LabelSchema::new(
        "partial",
        vec![
            LabelEntry::new("campus", "学校").with_description("学校 校园"),
            LabelEntry::new("palace", "后宫"),
        ],
    );
    let m = matcher(&config());
    let words_only = DocumentEvidence::from_words(["校园"]);
    let with_sentences = DocumentEvidence::new(vec!["校园".into()], vec!["学校".into()]);
    assert_eq!(
        m.scores(&schema, &words_only).unwrap(),
        m.scores(&schema, &with_sentences).unwrap()
    );
}

#[test]
fn assignment_is_recorded_under_schema_name() {
    let registry = registry();
    let emotion = registry.require("emotion").unwrap();
    let mut sheet = LabelSheet::new();
    matcher(&config())
        .assign(&mut sheet, emotion, &romance_evidence(), 2)
        .unwrap();
    assert_eq!(sheet.display_names("emotion"), vec!["恋爱", "纯爱"]);
}

#[test]
fn missing_taxonomy_degrades_without_failing() {
    let mut config = config();
    config.matcher.use_taxonomy = true;
    config.taxonomy.path = Some(fixture_path_string("resources/does_not_exist.txt"));
    let engines = SimilarityEngines::load(&config);

    assert!(engines.taxonomy().is_none());
    assert!(engines.embedding().is_some());
    let events = engines.degradation_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].component, COMPONENT_TAXONOMY);

    let health = engines.health();
    assert_eq!(health.overall_status, HealthStatus::Degraded);
    assert_eq!(
        health.component(COMPONENT_EMBEDDING).unwrap().status,
        HealthStatus::Healthy
    );

    let registry = registry();
    let emotion = registry.require("emotion").unwrap();
    let m = LabelMatcher::new(Arc::new(engines), config.matcher.clone());
    let outcome = m.match_labels(emotion, &romance_evidence(), 1).unwrap();
    assert_eq!(outcome.internal_names(), vec!["love"]);
}

#[test]
fn all_models_load_from_fixtures() {
    let mut config = config();
    config.matcher.use_taxonomy = true;
    config.matcher.use_sememe = true;
    config.taxonomy.path = Some(fixture_path_string(TAXONOMY));
    config.sememe.glossary_path = Some(fixture_path_string(GLOSSARY));
    config.sememe.graph_path = Some(fixture_path_string(SEMEME_GRAPH));
    let engines = SimilarityEngines::load(&config);

    assert!(engines.degradation_events().is_empty());
    assert_eq!(engines.health().overall_status, HealthStatus::Healthy);
    assert_eq!(engines.health().components.len(), 4);

    let registry = registry();
    let emotion = registry.require("emotion").unwrap();
    let m = LabelMatcher::new(Arc::new(engines), config.matcher.clone());
    let scores = m.scores(emotion, &romance_evidence()).unwrap().unwrap();
    assert_eq!(scores.len(), 3);
    assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
}

#[test]
fn disabled_models_are_not_consulted() {
    let mut config = config();
    config.matcher.use_embedding = false;
    config.matcher.use_descriptions = false;
    let engines = SimilarityEngines::load(&config);
    assert!(engines.embedding().is_none());
    assert!(engines.health().components.is_empty());

    let registry = registry();
    let emotion = registry.require("emotion").unwrap();
    let m = LabelMatcher::new(Arc::new(engines), config.matcher.clone());
    assert!(m.match_labels(emotion, &romance_evidence(), 1).is_err());
}

#[test]
fn description_only_config_reports_sentence_component() {
    let mut config = config();
    config.matcher.use_embedding = false;
    let engines = SimilarityEngines::load(&config);

    assert!(engines.embedding().is_none());
    assert!(engines.sentence().is_some());
    let health = engines.health();
    assert_eq!(health.overall_status, HealthStatus::Healthy);
    let names: Vec<&str> = health.components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec![COMPONENT_SENTENCE]);
}
