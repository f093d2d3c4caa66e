pub mod gateway;
pub mod sefaria;

use async_trait::async_trait;

use crate::core::{ParsedReference, PassageResponse};
use crate::error::Result;

pub use gateway::{BibleGatewayProvider, DEFAULT_VERSION};
pub use sefaria::{LexiconEntry, SefariaProvider, DEFAULT_VERSION_CONCURRENCY, PRIMARY_VERSION};

/// Options accompanying a passage lookup.
#[derive(Debug, Clone, Default)]
pub struct PassageRequest {
    /// Version/edition hint; provider-specific format
    pub version: Option<String>,

    /// Language hint, where the provider distinguishes languages
    pub language: Option<String>,

    /// Ask the upstream to fill gaps in sparse editions from the default text
    pub fill_in_missing_segments: bool,
}

/// Trait for upstream text sources (Sefaria, BibleGateway, ...)
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Fetch the text for a normalized reference
    async fn fetch(&self, reference: &ParsedReference, request: &PassageRequest)
        -> Result<PassageResponse>;

    /// Get provider name
    fn name(&self) -> &str;
}

/// Reduce an HTML fragment to plain text: tags removed, common entities
/// decoded, whitespace runs collapsed.
pub(crate) fn strip_html(fragment: &str) -> String {
    let mut text = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for ch in fragment.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }

    let text = text
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
