use std::sync::Arc;

use regex::Regex;

use crate::canon::CanonRegistry;
use crate::core::ParsedReference;

/// Extracts a structured book/chapter/verse reference from free-form text.
///
/// The grammar accepted at the start of the input:
/// - book: optional ordinal prefix, then one or more alphabetic words
///   ("Gen", "1 Samuel", "Song of Songs")
/// - chapter: digits after whitespace
/// - side: a single trailing `a`/`b` on the chapter
/// - verse: `:` or `.` then digits, optionally `-digits` for a range
pub struct ReferenceExtractor {
    registry: Arc<CanonRegistry>,
    pattern: Regex,
}

impl ReferenceExtractor {
    pub fn new(registry: Arc<CanonRegistry>) -> Self {
        let pattern =
            Regex::new(r"^(\d*\s*[A-Za-z]+(?:\s[A-Za-z]+)*)(?:\s+(\d+)([ab])?(?:[:.](\d+(?:-\d+)?))?)?")
                .expect("reference pattern is valid");
        Self { registry, pattern }
    }

    /// Parse `input` into a [`ParsedReference`].
    ///
    /// Returns `None` when the input does not even start with a book-like
    /// token. Otherwise the reference is always populated: an unresolvable
    /// book token is carried verbatim with `valid` false.
    pub fn extract(&self, input: &str) -> Option<ParsedReference> {
        let caps = self.pattern.captures(input)?;

        let raw_book = caps.get(1).map(|m| m.as_str().trim())?;
        let resolved = self.registry.resolve_book(raw_book);
        let book = resolved.unwrap_or(raw_book).to_string();

        let chapter = caps.get(2).map(|m| m.as_str().to_string());
        let side = caps.get(3).map(|m| m.as_str().to_string());
        let verse = caps.get(4).map(|m| m.as_str().to_string());

        let valid = resolved.is_some() && chapter.is_some();
        let large_reference = match verse.as_deref() {
            None => true,
            Some(verse) => range_width(verse).map_or(true, |w| w > ParsedReference::LARGE_RANGE),
        };

        let reference = ParsedReference::assemble(
            &book,
            chapter.as_deref(),
            side.as_deref(),
            verse.as_deref(),
        );

        Some(ParsedReference {
            book,
            chapter,
            verse,
            side,
            reference,
            valid,
            large_reference,
        })
    }
}

/// Width of a verse span: 0 for a single verse, `end - start` for a range.
///
/// `None` when a numeral does not fit in `u64`; callers treat that as broad.
fn range_width(verse: &str) -> Option<u64> {
    match verse.split_once('-') {
        None => Some(0),
        Some((start, end)) => {
            let start: u64 = start.parse().ok()?;
            let end: u64 = end.parse().ok()?;
            // A reversed range has no width rather than a negative one.
            Some(end.checked_sub(start).unwrap_or(0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> ReferenceExtractor {
        ReferenceExtractor::new(Arc::new(CanonRegistry::new()))
    }

    #[test]
    fn test_full_reference() {
        let parsed = extractor().extract("John 3:16").unwrap();
        assert_eq!(parsed.book, "John");
        assert_eq!(parsed.chapter.as_deref(), Some("3"));
        assert_eq!(parsed.verse.as_deref(), Some("16"));
        assert_eq!(parsed.side, None);
        assert_eq!(parsed.reference, "John 3:16");
        assert!(parsed.valid);
        assert!(!parsed.large_reference);
    }

    #[test]
    fn test_alias_resolution_ignores_casing() {
        let ex = extractor();
        assert_eq!(ex.extract("GEN 1:1").unwrap().book, "Genesis");
        assert_eq!(ex.extract("gen 1:1").unwrap().book, "Genesis");
    }

    #[test]
    fn test_book_without_chapter_is_not_valid() {
        let parsed = extractor().extract("John").unwrap();
        assert_eq!(parsed.book, "John");
        assert_eq!(parsed.chapter, None);
        assert!(!parsed.valid);
        assert!(parsed.large_reference);
        assert_eq!(parsed.reference, "John");
    }

    #[test]
    fn test_unresolved_book_kept_verbatim() {
        let parsed = extractor().extract("Bereshit 1:1").unwrap();
        assert_eq!(parsed.book, "Bereshit");
        assert!(!parsed.valid);
    }

    #[test]
    fn test_ordinal_book_prefix() {
        let parsed = extractor().extract("1 Sam 17:4").unwrap();
        assert_eq!(parsed.book, "1 Samuel");
        assert_eq!(parsed.reference, "1 Samuel 17:4");
        assert!(parsed.valid);
    }

    #[test]
    fn test_multiword_title_greedy() {
        let parsed = extractor().extract("Song of Songs 2:4").unwrap();
        assert_eq!(parsed.book, "Song of Songs");
        assert_eq!(parsed.chapter.as_deref(), Some("2"));
        assert_eq!(parsed.verse.as_deref(), Some("4"));
    }

    #[test]
    fn test_side_letter() {
        let parsed = extractor().extract("Eruvin 13b:4").unwrap();
        assert_eq!(parsed.side.as_deref(), Some("b"));
        assert_eq!(parsed.reference, "Eruvin 13b:4");
    }

    #[test]
    fn test_dot_verse_separator() {
        let parsed = extractor().extract("John 3.16").unwrap();
        assert_eq!(parsed.verse.as_deref(), Some("16"));
        assert_eq!(parsed.reference, "John 3:16");
    }

    #[test]
    fn test_large_reference_rules() {
        let ex = extractor();
        assert!(ex.extract("Psalm 23").unwrap().large_reference);
        assert!(!ex.extract("Psalm 23:1-5").unwrap().large_reference);
        assert!(ex.extract("Psalm 23:1-15").unwrap().large_reference);
        assert!(!ex.extract("Psalm 23:1").unwrap().large_reference);
    }

    #[test]
    fn test_reassembly_round_trip() {
        let ex = extractor();
        let first = ex.extract("Jn 3:16-17").unwrap();
        assert_eq!(first.reference, "John 3:16-17");
        let second = ex.extract(&first.reference).unwrap();
        assert_eq!(second.reference, first.reference);
    }

    #[test]
    fn test_no_structural_match() {
        assert!(extractor().extract("???").is_none());
        assert!(extractor().extract("").is_none());
        assert!(extractor().extract("3:16").is_none());
    }

    #[test]
    fn test_trailing_prose_ignored() {
        let parsed = extractor().extract("John 3:16 for God so loved").unwrap();
        assert_eq!(parsed.reference, "John 3:16");
    }
}
