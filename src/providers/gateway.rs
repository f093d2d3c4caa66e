use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;

use crate::canon::CanonRegistry;
use crate::core::{ParsedReference, PassageResponse, PassageText};
use crate::error::{EngineError, Result};
use crate::providers::{strip_html, PassageRequest, TextProvider};

/// Version used when the caller gives none.
pub const DEFAULT_VERSION: &str = "NRSVUE";

/// Christian-canon text provider backed by the public BibleGateway passage
/// pages (print interface). No API exists, so the passage is cut out of the
/// page markup and reduced to plain text.
pub struct BibleGatewayProvider {
    client: Client,
    base_url: String,
    registry: Arc<CanonRegistry>,
    paragraph: Regex,
    footnote: Regex,
}

impl BibleGatewayProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://www.biblegateway.com";

    pub fn new(registry: Arc<CanonRegistry>) -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL, registry)
    }

    pub fn with_base_url(base_url: impl Into<String>, registry: Arc<CanonRegistry>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
            registry,
            paragraph: Regex::new(r"(?s)<p[^>]*>(.*?)</p>").expect("paragraph pattern is valid"),
            footnote: Regex::new(r"(?s)<sup[^>]*>.*?</sup>").expect("footnote pattern is valid"),
        }
    }

    fn error(&self, message: impl Into<String>) -> EngineError {
        EngineError::Provider {
            provider: "biblegateway".to_string(),
            message: message.into(),
        }
    }

    /// Normalize a version hint to a short code.
    ///
    /// Known short codes pass through; long names convert through the
    /// registry table; anything else falls back to [`DEFAULT_VERSION`].
    pub fn normalize_version(&self, version: Option<&str>) -> String {
        let Some(version) = version else {
            return DEFAULT_VERSION.to_string();
        };
        if self.registry.is_version_code(version) {
            return version.to_string();
        }
        self.registry
            .convert_version(version)
            .unwrap_or(DEFAULT_VERSION)
            .to_string()
    }

    /// Fetch a passage by normalized reference and version short code.
    pub async fn fetch_passage(&self, reference: &str, version: &str) -> Result<PassageText> {
        let url = format!("{}/passage/", self.base_url);
        let query = [
            ("search", reference),
            ("version", version),
            ("interface", "print"),
        ];

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| self.error(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(self.error(format!("HTTP {}", response.status())));
        }

        let page = response
            .text()
            .await
            .map_err(|e| self.error(format!("Unreadable response body: {}", e)))?;

        let segments = self.extract_segments(&page);
        if segments.is_empty() {
            return Err(EngineError::NotFound(reference.to_string()));
        }
        Ok(PassageText::Segments(segments))
    }

    /// Pull the passage paragraphs out of a print-interface page.
    fn extract_segments(&self, page: &str) -> Vec<String> {
        self.paragraph
            .captures_iter(page)
            .map(|caps| {
                let body = self.footnote.replace_all(&caps[1], "");
                strip_html(&body)
            })
            .filter(|segment| !segment.is_empty())
            .collect()
    }
}

#[async_trait]
impl TextProvider for BibleGatewayProvider {
    async fn fetch(
        &self,
        reference: &ParsedReference,
        request: &PassageRequest,
    ) -> Result<PassageResponse> {
        let version = self.normalize_version(request.version.as_deref());
        let text = self.fetch_passage(&reference.reference, &version).await?;

        Ok(PassageResponse::new(reference.clone(), self.name(), text).with_version(version))
    }

    fn name(&self) -> &str {
        "biblegateway"
    }
}
