use std::collections::HashSet;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Which canon a scanned reference belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Canon {
    Christian,
    Jewish,
}

/// A scripture reference found inside a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatch {
    /// Byte offset of the match start in the scanned message
    pub position: usize,

    /// Canon whose title list produced the match
    pub canon: Canon,

    /// The matched title plus chapter/verse text, ready for extraction
    pub text: String,
}

/// Finds all embedded scripture references in free-form text.
///
/// Holds one escaped-alternation pattern per canon, compiled from the title
/// snapshots handed to the constructor. Jewish titles shared with the
/// Christian canon are removed up front so a substring is never tagged twice.
pub struct KeywordScanner {
    christian: Option<Regex>,
    jewish: Option<Regex>,
    verse_filter: Regex,
}

impl KeywordScanner {
    pub fn new<T: AsRef<str>>(christian_titles: &[&str], jewish_titles: &[T]) -> Self {
        let christian_set: HashSet<&str> = christian_titles.iter().copied().collect();
        let jewish: Vec<&str> = jewish_titles
            .iter()
            .map(AsRef::as_ref)
            .filter(|title| !christian_set.contains(title))
            .collect();

        Self {
            christian: title_pattern(christian_titles),
            jewish: title_pattern(&jewish),
            verse_filter: Regex::new(r"\d+[:.\s]\d+").expect("verse filter pattern is valid"),
        }
    }

    /// Scan `message` for title + chapter/verse occurrences.
    ///
    /// Matches come back in message order, tagged by canon. Occurrences that
    /// carry no verse-level component (a bare chapter, "Genesis 3") are too
    /// broad for an automatic lookup and are dropped.
    pub fn scan(&self, message: &str) -> Vec<KeywordMatch> {
        let mut matches = Vec::new();
        self.collect(&self.christian, Canon::Christian, message, &mut matches);
        self.collect(&self.jewish, Canon::Jewish, message, &mut matches);

        matches.sort_by_key(|m| m.position);
        matches.retain(|m| self.verse_filter.is_match(&m.text));
        matches
    }

    fn collect(
        &self,
        pattern: &Option<Regex>,
        canon: Canon,
        message: &str,
        out: &mut Vec<KeywordMatch>,
    ) {
        let Some(pattern) = pattern else { return };
        for caps in pattern.captures_iter(message) {
            let whole = caps.get(0).expect("match has a root group");
            let title = &caps[1];
            let locator = &caps[2];
            out.push(KeywordMatch {
                position: whole.start(),
                canon,
                text: format!("{title} {locator}"),
            });
        }
    }
}

/// Alternation of escaped titles followed by a chapter/verse tail.
///
/// An empty title list yields no pattern at all; an empty alternation would
/// match bare numbers.
fn title_pattern(titles: &[&str]) -> Option<Regex> {
    if titles.is_empty() {
        return None;
    }
    let alternation = titles
        .iter()
        .map(|title| regex::escape(title))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(r"\b({alternation})\s+(\d+(?:\.\d+|:\d+)*)");
    Some(Regex::new(&pattern).expect("escaped title alternation is valid"))
}
