use std::sync::Arc;

use serde_json::json;

use scripture_engine::providers::{BibleGatewayProvider, SefariaProvider};
use scripture_engine::{
    Canon, CanonRegistry, FuzzyRanker, KeywordScanner, ReferenceExtractor, ScriptureEngine,
};

fn offline_engine(titles: &[&str], versions: Vec<serde_json::Value>) -> ScriptureEngine {
    let registry = Arc::new(CanonRegistry::new());
    let sefaria = Arc::new(SefariaProvider::new());
    let gateway = Arc::new(BibleGatewayProvider::new(Arc::clone(&registry)));
    let titles: Vec<String> = titles.iter().map(|t| t.to_string()).collect();
    ScriptureEngine::with_snapshot(registry, sefaria, gateway, &titles, versions)
}

#[test]
fn test_scan_then_extract_pipeline() {
    let registry = Arc::new(CanonRegistry::new());
    let extractor = ReferenceExtractor::new(Arc::clone(&registry));
    let scanner = KeywordScanner::new(registry.titles(), &["Berakhot", "Mishnah Peah"]);

    let message = "Shoutout to Berakhot 2:1, then John 3:16, and Genesis in general.";
    let matches = scanner.scan(message);

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].canon, Canon::Jewish);
    assert_eq!(matches[1].canon, Canon::Christian);

    let first = extractor.extract(&matches[0].text).unwrap();
    assert_eq!(first.reference, "Berakhot 2:1");

    let second = extractor.extract(&matches[1].text).unwrap();
    assert_eq!(second.reference, "John 3:16");
    assert!(second.valid);
    assert!(!second.large_reference);
}

#[test]
fn test_scan_abbreviation_normalization() {
    let registry = Arc::new(CanonRegistry::new());
    let extractor = ReferenceExtractor::new(Arc::clone(&registry));

    // The scanner only matches full titles; slash-command arguments go
    // straight to the extractor and may abbreviate.
    let parsed = extractor.extract("Ps 23:1-3").unwrap();
    assert_eq!(parsed.book, "Psalms");
    assert_eq!(parsed.reference, "Psalms 23:1-3");
}

#[test]
fn test_version_selection_over_snapshot() {
    let versions = vec![
        json!({
            "title": "Berakhot",
            "versionTitle": "William Davidson Edition - English",
            "languageFamilyName": "english",
            "language": "en"
        }),
        json!({
            "title": "Berakhot",
            "versionTitle": "Wikisource Talmud Bavli",
            "languageFamilyName": "hebrew",
            "language": "he"
        }),
    ];
    let engine = offline_engine(&["Berakhot"], versions);

    let english = engine.select_version("Berakhot", None, Some("en"));
    assert_eq!(
        english.as_deref(),
        Some("english|William Davidson Edition - English")
    );

    let by_title = engine.select_version("Berakhot", Some("Wikisource Talmud Bavli"), None);
    assert_eq!(by_title.as_deref(), Some("hebrew|Wikisource Talmud Bavli"));
}

#[test]
fn test_ranker_threshold_contract() {
    let ranker = FuzzyRanker::new();
    let candidates = vec![
        json!({"title": "Genesis", "language": "en"}),
        json!({"title": "completely unrelated", "language": "xx"}),
    ];

    let best = ranker.best_matches(
        &candidates,
        &["title", "language"],
        &[Some("Genesis"), Some("en")],
    );

    assert_eq!(best.len(), 1);
    assert_eq!(best[0]["title"], "Genesis");
}

#[tokio::test]
async fn test_scan_message_ignores_plain_prose() {
    let engine = offline_engine(&["Berakhot"], Vec::new());
    let responses = engine
        .scan_message("The weather in Jerusalem is lovely today.")
        .await;
    assert!(responses.is_empty());
}

#[tokio::test]
#[ignore] // Requires network access
async fn test_engine_end_to_end() {
    let engine = ScriptureEngine::new().await.unwrap();

    let passage = engine.lookup_bible("John 3:16", Some("KJV")).await.unwrap();
    assert!(!passage.text.is_empty());
    assert_eq!(passage.reference.reference, "John 3:16");

    let hebrew = engine
        .lookup_hebrew("Genesis 1:1", None, Some("English"), true)
        .await
        .unwrap();
    assert!(!hebrew.text.is_empty());
}
