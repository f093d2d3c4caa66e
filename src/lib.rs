//! # Scripture Engine
//!
//! Reference-resolution engine for religious-text lookups:
//! - Regex-driven extraction of book/chapter/verse references with a large
//!   abbreviation table
//! - Keyword scanning that finds every reference embedded in a message and
//!   tags it with its owning canon
//! - Fuzzy ranking to pick the best text edition out of heterogeneous
//!   upstream version metadata
//! - Thin async providers for the Sefaria and BibleGateway upstreams
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use scripture_engine::ScriptureEngine;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = ScriptureEngine::new().await?;
//!
//!     let passage = engine.lookup_bible("Jn 3:16", Some("NRSVUE")).await?;
//!     println!("{}", passage.reference);
//!     for line in passage.text.segments() {
//!         println!("{line}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod canon;
pub mod core;
pub mod engine;
pub mod error;
pub mod parser;
pub mod providers;
pub mod ranking;

// Re-export primary types
pub use canon::CanonRegistry;
pub use core::{ParsedReference, PassageResponse, PassageText};
pub use engine::ScriptureEngine;
pub use error::{EngineError, Result};
pub use parser::{Canon, KeywordMatch, KeywordScanner, ReferenceExtractor};
pub use ranking::FuzzyRanker;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
