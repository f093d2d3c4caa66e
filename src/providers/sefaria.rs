use std::time::Duration;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use regex::Regex;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::core::{ParsedReference, PassageResponse, PassageText};
use crate::error::{EngineError, Result};
use crate::providers::{strip_html, PassageRequest, TextProvider};

/// Version string the upstream falls back to when no edition was selected.
pub const PRIMARY_VERSION: &str = "primary";

/// How many version-metadata requests run at once during the startup batch.
pub const DEFAULT_VERSION_CONCURRENCY: usize = 50;

/// Sefaria API provider: Jewish-canon texts, the title index, per-title
/// version metadata, lexicon entries, manuscripts, and cross-reference links.
pub struct SefariaProvider {
    client: Client,
    base_url: String,
    anchor_filter: Regex,
}

/// One lexicon entry, senses flattened to a definition list.
#[derive(Debug, Clone, Serialize)]
pub struct LexiconEntry {
    pub headword: String,
    pub lexicon: String,
    pub definitions: Vec<String>,
}

impl SefariaProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://www.sefaria.org/api";

    pub fn new() -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
            anchor_filter: Regex::new(r"<a[^>]*>|</a>").expect("anchor pattern is valid"),
        }
    }

    fn error(&self, message: impl Into<String>) -> EngineError {
        EngineError::Provider {
            provider: "sefaria".to_string(),
            message: message.into(),
        }
    }

    async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value> {
        let response = self
            .client
            .get(url)
            .header("accept", "application/json")
            .query(query)
            .send()
            .await
            .map_err(|e| self.error(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(self.error(format!("HTTP {}", response.status())));
        }

        response
            .json()
            .await
            .map_err(|e| self.error(format!("Invalid JSON: {}", e)))
    }

    /// Fetch the full title index, flattened to leaf entries carrying `title`.
    pub async fn fetch_index(&self) -> Result<Vec<Value>> {
        let url = format!("{}/index/", self.base_url);
        let tree = self.get_json(&url, &[]).await?;

        let mut flattened = Vec::new();
        flatten_index(&tree, &mut flattened);
        flattened.retain(|entry| entry.get("title").is_some());
        Ok(flattened)
    }

    /// Distinct `title` values of index entries, in index order.
    /// Entries without a title are silently excluded.
    pub fn index_titles(index: &[Value]) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        index
            .iter()
            .filter_map(|entry| entry.get("title").and_then(Value::as_str))
            .filter(|title| seen.insert(title.to_string()))
            .map(str::to_string)
            .collect()
    }

    /// Fetch version metadata for every title, `max_concurrent` requests at a
    /// time. One title's failure logs a warning and never aborts the batch.
    /// Keeps only records carrying `title`, `versionTitle`, and
    /// `languageFamilyName`.
    pub async fn fetch_versions(
        &self,
        titles: &[String],
        max_concurrent: usize,
    ) -> Result<Vec<Value>> {
        let per_title: Vec<Option<Value>> = stream::iter(titles)
            .map(|title| async move {
                let url = format!(
                    "{}/texts/versions/{}",
                    self.base_url,
                    urlencoding::encode(title)
                );
                match self.get_json(&url, &[]).await {
                    Ok(value) => Some(value),
                    Err(e) => {
                        tracing::warn!("Version fetch for '{}' failed: {}", title, e);
                        None
                    }
                }
            })
            .buffer_unordered(max_concurrent.max(1))
            .collect()
            .await;

        let mut versions = Vec::new();
        for value in per_title.into_iter().flatten() {
            if let Value::Array(records) = value {
                versions.extend(records);
            }
        }
        versions.retain(|record| {
            record.get("title").is_some()
                && record.get("versionTitle").is_some()
                && record.get("languageFamilyName").is_some()
        });
        Ok(versions)
    }

    /// Fetch the text for a normalized reference.
    ///
    /// `version` is `"<languageFamilyName>|<versionTitle>"` or the upstream
    /// sentinel [`PRIMARY_VERSION`]. Missing or empty text maps to
    /// [`EngineError::NotFound`].
    pub async fn get_text(
        &self,
        reference: &str,
        version: Option<&str>,
        fill_in_missing_segments: bool,
    ) -> Result<PassageText> {
        let url = format!(
            "{}/v3/texts/{}",
            self.base_url,
            urlencoding::encode(reference)
        );
        let fill = if fill_in_missing_segments { "1" } else { "0" };
        let query = [
            ("return_format", "default"),
            ("version", version.unwrap_or(PRIMARY_VERSION)),
            ("fill_in_missing_segments", fill),
        ];
        let response = self.get_json(&url, &query).await?;

        let text = response
            .get("versions")
            .and_then(Value::as_array)
            .and_then(|versions| versions.first())
            .and_then(|version| version.get("text"))
            .and_then(PassageText::from_value)
            .ok_or_else(|| EngineError::NotFound(reference.to_string()))?;

        let cleaned = match text {
            PassageText::Single(line) => PassageText::Single(strip_html(&line)),
            PassageText::Segments(lines) => {
                PassageText::Segments(lines.iter().map(|line| strip_html(line)).collect())
            }
        };
        if cleaned.is_empty() {
            return Err(EngineError::NotFound(reference.to_string()));
        }
        Ok(cleaned)
    }

    /// Look a word up in the lexicons, optionally narrowed by a reference.
    /// An empty response is an empty list, not an error.
    pub async fn get_lexicon(
        &self,
        word: &str,
        lookup_ref: Option<&str>,
    ) -> Result<Vec<LexiconEntry>> {
        let url = format!("{}/words/{}", self.base_url, urlencoding::encode(word));
        let mut query = Vec::new();
        if let Some(lookup_ref) = lookup_ref {
            query.push(("lookup_ref", lookup_ref));
        }
        let response = self.get_json(&url, &query).await?;

        let Value::Array(entries) = response else {
            return Ok(Vec::new());
        };

        let mut results = Vec::new();
        for entry in &entries {
            let mut definitions = Vec::new();
            if let Some(senses) = entry.pointer("/content/senses") {
                flatten_senses(senses, &mut definitions);
            }
            let definitions = definitions
                .into_iter()
                .map(|definition| strip_html(&self.anchor_filter.replace_all(&definition, "")))
                .collect();

            results.push(LexiconEntry {
                headword: string_field(entry, "headword").unwrap_or_else(|| "Unknown".to_string()),
                lexicon: string_field(entry, "parent_lexicon")
                    .unwrap_or_else(|| "Unknown".to_string()),
                definitions,
            });
        }
        Ok(results)
    }

    /// Fetch manuscript/image records for a reference.
    pub async fn get_manuscripts(&self, reference: &str) -> Result<Vec<Value>> {
        let url = format!(
            "{}/manuscripts/{}",
            self.base_url,
            urlencoding::encode(reference)
        );
        match self.get_json(&url, &[]).await? {
            Value::Array(records) => Ok(records),
            _ => Ok(Vec::new()),
        }
    }

    /// Fetch cross-reference and commentary links for a reference.
    pub async fn get_links(&self, reference: &str) -> Result<Vec<Value>> {
        let url = format!(
            "{}/links/{}",
            self.base_url,
            urlencoding::encode(reference)
        );
        match self.get_json(&url, &[]).await? {
            Value::Array(records) => Ok(records),
            _ => Ok(Vec::new()),
        }
    }
}

impl Default for SefariaProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextProvider for SefariaProvider {
    async fn fetch(
        &self,
        reference: &ParsedReference,
        request: &PassageRequest,
    ) -> Result<PassageResponse> {
        let text = self
            .get_text(
                &reference.reference,
                request.version.as_deref(),
                request.fill_in_missing_segments,
            )
            .await?;

        let mut response = PassageResponse::new(reference.clone(), self.name(), text);
        response.version = request.version.clone();
        Ok(response)
    }

    fn name(&self) -> &str {
        "sefaria"
    }
}

/// Depth-first flatten of the index tree: a node either nests `contents`
/// or is a leaf entry.
fn flatten_index(node: &Value, out: &mut Vec<Value>) {
    match node {
        Value::Array(entries) => {
            for entry in entries {
                flatten_index(entry, out);
            }
        }
        Value::Object(map) => {
            if let Some(contents) = map.get("contents") {
                flatten_index(contents, out);
            } else {
                out.push(node.clone());
            }
        }
        _ => {}
    }
}

/// Collect `definition` strings out of a recursively nested `senses` tree.
fn flatten_senses(senses: &Value, out: &mut Vec<String>) {
    if let Value::Array(items) = senses {
        for item in items {
            if let Some(definition) = item.get("definition").and_then(Value::as_str) {
                out.push(definition.to_string());
            }
            if let Some(nested) = item.get("senses") {
                flatten_senses(nested, out);
            }
        }
    }
}

fn string_field(value: &Value, field: &str) -> Option<String> {
    value.get(field).and_then(Value::as_str).map(str::to_string)
}
