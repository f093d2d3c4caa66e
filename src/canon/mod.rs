//! Canon registry: book titles, alias resolution, and version codes.

mod books;
mod versions;

use std::collections::HashMap;

use books::{BOOK_ALIASES, SCAN_TITLES};
use versions::VERSIONS;

/// Static registry of Christian-canon titles, their abbreviations, and the
/// version short-code table. Built once at startup, read-only afterwards.
#[derive(Debug, Clone)]
pub struct CanonRegistry {
    aliases: HashMap<String, &'static str>,
}

impl CanonRegistry {
    pub fn new() -> Self {
        let mut aliases: HashMap<String, &'static str> = HashMap::new();
        for (title, abbreviations) in BOOK_ALIASES {
            for abbreviation in abbreviations.iter() {
                // First definition wins; duplicate rows cannot change resolution.
                aliases.entry(abbreviation.to_lowercase()).or_insert(title);
            }
        }
        Self { aliases }
    }

    /// Ordered Christian-canon titles, as the keyword scanner recognizes them.
    pub fn titles(&self) -> &'static [&'static str] {
        SCAN_TITLES
    }

    /// Whether a title belongs to the Christian canon (exact match).
    pub fn contains_title(&self, title: &str) -> bool {
        SCAN_TITLES.contains(&title)
    }

    /// Resolve an abbreviation to its canonical title, case-insensitively.
    ///
    /// Full canonical titles are not aliases of themselves; an unknown token
    /// resolves to nothing and callers fall back to the raw input.
    pub fn resolve_alias(&self, token: &str) -> Option<&'static str> {
        self.aliases.get(&token.trim().to_lowercase()).copied()
    }

    /// Resolve a book token to its canonical title.
    ///
    /// Abbreviations resolve through the alias table; failing that, a token
    /// that is itself a canonical title (any casing) resolves to that title.
    pub fn resolve_book(&self, token: &str) -> Option<&'static str> {
        let trimmed = token.trim();
        if let Some(title) = self.aliases.get(&trimmed.to_lowercase()) {
            return Some(title);
        }
        SCAN_TITLES
            .iter()
            .find(|title| title.eq_ignore_ascii_case(trimmed))
            .copied()
    }

    /// Convert between short and long forms of a version name.
    ///
    /// A known short code yields the long name; a long name (matched
    /// case-insensitively) yields its short code.
    pub fn convert_version(&self, version: &str) -> Option<&'static str> {
        if let Some((_, long)) = VERSIONS.iter().find(|(short, _)| *short == version) {
            return Some(*long);
        }
        VERSIONS
            .iter()
            .find(|(_, long)| long.eq_ignore_ascii_case(version))
            .map(|(short, _)| *short)
    }

    /// Whether the token is a known version short code.
    pub fn is_version_code(&self, version: &str) -> bool {
        VERSIONS.iter().any(|(short, _)| *short == version)
    }
}

impl Default for CanonRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_resolution_case_insensitive() {
        let registry = CanonRegistry::new();
        assert_eq!(registry.resolve_alias("Gen"), Some("Genesis"));
        assert_eq!(registry.resolve_alias("GEN"), Some("Genesis"));
        assert_eq!(registry.resolve_alias("gen"), Some("Genesis"));
    }

    #[test]
    fn test_unknown_token_unresolved() {
        let registry = CanonRegistry::new();
        assert_eq!(registry.resolve_alias("Genesis"), None);
        assert_eq!(registry.resolve_alias("Bereshit"), None);
    }

    #[test]
    fn test_multiword_alias() {
        let registry = CanonRegistry::new();
        assert_eq!(registry.resolve_alias("Song of Solomon"), Some("Song of Songs"));
        assert_eq!(registry.resolve_alias("1 Sam"), Some("1 Samuel"));
    }

    #[test]
    fn test_overlapping_alias_first_definition_wins() {
        let registry = CanonRegistry::new();
        // "Ecclesiasticus" is both a Sirach alias and a canonical title with
        // its own row; the Sirach row comes first in the table.
        assert_eq!(registry.resolve_alias("Ecclesiasticus"), Some("Sirach"));
    }

    #[test]
    fn test_resolve_book_accepts_canonical_titles() {
        let registry = CanonRegistry::new();
        assert_eq!(registry.resolve_book("John"), Some("John"));
        assert_eq!(registry.resolve_book("john"), Some("John"));
        assert_eq!(registry.resolve_book("Psalm"), Some("Psalms"));
        assert_eq!(registry.resolve_book("Bereshit"), None);
    }

    #[test]
    fn test_titles_ordered() {
        let registry = CanonRegistry::new();
        assert_eq!(registry.titles().first(), Some(&"Genesis"));
        assert!(registry.contains_title("Psalm"));
        assert!(!registry.contains_title("Psalms"));
    }

    #[test]
    fn test_version_conversion_both_ways() {
        let registry = CanonRegistry::new();
        assert_eq!(
            registry.convert_version("KJV"),
            Some("King James Version (KJV)")
        );
        assert_eq!(registry.convert_version("king james version (kjv)"), Some("KJV"));
        assert_eq!(registry.convert_version("Klingon"), None);
    }
}
