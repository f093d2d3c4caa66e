use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;

use crate::canon::CanonRegistry;
use crate::core::PassageResponse;
use crate::error::{EngineError, Result};
use crate::parser::{Canon, KeywordScanner, ReferenceExtractor};
use crate::providers::{
    BibleGatewayProvider, LexiconEntry, PassageRequest, SefariaProvider, TextProvider,
    DEFAULT_VERSION_CONCURRENCY,
};
use crate::ranking::FuzzyRanker;

/// Language hint applied to Jewish-canon lookups triggered by a message scan.
const SCAN_LANGUAGE: &str = "English";

/// Main reference-resolution orchestrator.
///
/// Owns the canon registry, the extractor, the scanner snapshot, the fuzzy
/// ranker, and the two text providers; resolves free-form references and
/// dispatches them to the owning source.
pub struct ScriptureEngine {
    registry: Arc<CanonRegistry>,
    extractor: ReferenceExtractor,
    ranker: FuzzyRanker,
    scanner: KeywordScanner,
    versions: Vec<Value>,
    sefaria: Arc<SefariaProvider>,
    gateway: Arc<BibleGatewayProvider>,
}

impl ScriptureEngine {
    /// Create an engine with default providers, loading the Jewish-canon
    /// title index and version metadata from upstream.
    pub async fn new() -> Result<Self> {
        let registry = Arc::new(CanonRegistry::new());
        let sefaria = Arc::new(SefariaProvider::new());
        let gateway = Arc::new(BibleGatewayProvider::new(Arc::clone(&registry)));
        Self::with_providers(registry, sefaria, gateway).await
    }

    /// Create an engine around existing providers, loading the title index
    /// and version metadata through the Sefaria provider.
    pub async fn with_providers(
        registry: Arc<CanonRegistry>,
        sefaria: Arc<SefariaProvider>,
        gateway: Arc<BibleGatewayProvider>,
    ) -> Result<Self> {
        let start = Instant::now();
        let index = sefaria.fetch_index().await?;
        let titles = SefariaProvider::index_titles(&index);
        let versions = sefaria
            .fetch_versions(&titles, DEFAULT_VERSION_CONCURRENCY)
            .await?;
        tracing::info!(
            titles = titles.len(),
            versions = versions.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Loaded title index"
        );
        Ok(Self::with_snapshot(registry, sefaria, gateway, &titles, versions))
    }

    /// Create an engine from an already-fetched title/version snapshot.
    /// No I/O; this is the constructor tests use.
    pub fn with_snapshot(
        registry: Arc<CanonRegistry>,
        sefaria: Arc<SefariaProvider>,
        gateway: Arc<BibleGatewayProvider>,
        index_titles: &[String],
        versions: Vec<Value>,
    ) -> Self {
        let extractor = ReferenceExtractor::new(Arc::clone(&registry));
        let scanner = KeywordScanner::new(registry.titles(), index_titles);
        Self {
            registry,
            extractor,
            ranker: FuzzyRanker::new(),
            scanner,
            versions,
            sefaria,
            gateway,
        }
    }

    pub fn registry(&self) -> &CanonRegistry {
        &self.registry
    }

    /// Install a fresh Jewish-canon title snapshot (the fetch itself is the
    /// caller's concern). Rebuilds the scanner; in-flight scans keep the old
    /// snapshot.
    pub fn refresh_titles(&mut self, index_titles: &[String]) {
        self.scanner = KeywordScanner::new(self.registry.titles(), index_titles);
    }

    /// Replace the version-metadata records used for edition selection.
    pub fn refresh_versions(&mut self, versions: Vec<Value>) {
        self.versions = versions;
    }

    /// Look up a Christian-canon reference.
    pub async fn lookup_bible(
        &self,
        reference: &str,
        version: Option<&str>,
    ) -> Result<PassageResponse> {
        let parsed = self
            .extractor
            .extract(reference)
            .ok_or_else(|| EngineError::InvalidReference(reference.to_string()))?;

        let request = PassageRequest {
            version: version.map(str::to_string),
            ..Default::default()
        };
        self.gateway.fetch(&parsed, &request).await
    }

    /// Look up a Jewish-canon reference, fuzzy-selecting the best edition for
    /// the optional version/language hints.
    pub async fn lookup_hebrew(
        &self,
        reference: &str,
        version: Option<&str>,
        language: Option<&str>,
        fill_in_missing_segments: bool,
    ) -> Result<PassageResponse> {
        let parsed = self
            .extractor
            .extract(reference)
            .ok_or_else(|| EngineError::InvalidReference(reference.to_string()))?;

        let request = PassageRequest {
            version: self.select_version(&parsed.book, version, language),
            language: language.map(str::to_string),
            fill_in_missing_segments,
        };
        self.sefaria.fetch(&parsed, &request).await
    }

    /// Pick the best version record for a book/version/language triple and
    /// compose the upstream version string `<languageFamilyName>|<versionTitle>`.
    ///
    /// `None` when no record clears the ranker threshold; lookups then fall
    /// back to the upstream's primary edition.
    pub fn select_version(
        &self,
        book: &str,
        version: Option<&str>,
        language: Option<&str>,
    ) -> Option<String> {
        let best = self.ranker.best_matches(
            &self.versions,
            &["title", "versionTitle", "language"],
            &[Some(book), version, language],
        );
        best.first().map(|record| {
            format!(
                "{}|{}",
                record["languageFamilyName"].as_str().unwrap_or_default(),
                record["versionTitle"].as_str().unwrap_or_default(),
            )
        })
    }

    /// Find every scripture reference embedded in a message and fetch each
    /// from its owning source. One reference's failure logs a warning and
    /// never aborts the rest.
    pub async fn scan_message(&self, message: &str) -> Vec<PassageResponse> {
        let start = Instant::now();
        let matches = self.scanner.scan(message);

        let mut responses = Vec::new();
        for keyword_match in &matches {
            let Some(parsed) = self.extractor.extract(&keyword_match.text) else {
                continue;
            };

            let result = match keyword_match.canon {
                Canon::Christian => {
                    self.gateway.fetch(&parsed, &PassageRequest::default()).await
                }
                Canon::Jewish => {
                    let request = PassageRequest {
                        version: self.select_version(&parsed.book, None, Some(SCAN_LANGUAGE)),
                        language: Some(SCAN_LANGUAGE.to_string()),
                        fill_in_missing_segments: true,
                    };
                    self.sefaria.fetch(&parsed, &request).await
                }
            };

            match result {
                Ok(response) => responses.push(response),
                Err(e) => {
                    tracing::warn!("Lookup for '{}' failed: {}", keyword_match.text, e);
                }
            }
        }

        tracing::debug!(
            matches = matches.len(),
            fetched = responses.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Scanned message"
        );
        responses
    }

    /// Lexicon lookup, delegated to the Sefaria provider.
    pub async fn lexicon(
        &self,
        word: &str,
        lookup_ref: Option<&str>,
    ) -> Result<Vec<LexiconEntry>> {
        self.sefaria.get_lexicon(word, lookup_ref).await
    }

    /// Manuscript records for a reference, delegated to the Sefaria provider.
    pub async fn manuscripts(&self, reference: &str) -> Result<Vec<Value>> {
        self.sefaria.get_manuscripts(reference).await
    }

    /// Cross-reference links for a reference, delegated to the Sefaria provider.
    pub async fn links(&self, reference: &str) -> Result<Vec<Value>> {
        self.sefaria.get_links(reference).await
    }
}
