use serde::{Deserialize, Serialize};

/// A structured book/chapter/verse reference extracted from user text.
///
/// Produced by [`crate::parser::ReferenceExtractor`]; immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedReference {
    /// Resolved canonical book title, or the raw token when no alias matched
    pub book: String,

    /// Chapter numeral, if present
    #[serde(default)]
    pub chapter: Option<String>,

    /// Verse numeral or range (`"5"` or `"5-10"`), if present
    #[serde(default)]
    pub verse: Option<String>,

    /// Side qualifier (`a`/`b`) splitting a verse, e.g. a manuscript column
    #[serde(default)]
    pub side: Option<String>,

    /// Normalized query string: `book[ chapter[side][:verse]]`
    pub reference: String,

    /// True only when both book and chapter resolved
    pub valid: bool,

    /// True when no verse was given, or a verse range spans more than 10 verses
    pub large_reference: bool,
}

impl ParsedReference {
    /// Reassemble the normalized reference string from its components.
    ///
    /// Only components actually present appear, in fixed order:
    /// book, space, chapter, side, `:verse`.
    pub fn assemble(
        book: &str,
        chapter: Option<&str>,
        side: Option<&str>,
        verse: Option<&str>,
    ) -> String {
        let mut reference = book.to_string();
        if let Some(chapter) = chapter {
            reference.push(' ');
            reference.push_str(chapter);
        }
        if let Some(side) = side {
            reference.push_str(side);
        }
        if let Some(verse) = verse {
            reference.push(':');
            reference.push_str(verse);
        }
        reference
    }

    /// Verse range width threshold beyond which a reference counts as large.
    pub const LARGE_RANGE: u64 = 10;
}

impl std::fmt::Display for ParsedReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.reference)
    }
}
