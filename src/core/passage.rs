use serde::{Deserialize, Serialize};

use crate::core::ParsedReference;

/// Passage text as returned by upstream sources.
///
/// Upstreams return either one string for the whole passage or a sequence of
/// per-verse segments; both shapes are valid and handled uniformly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PassageText {
    Single(String),
    Segments(Vec<String>),
}

impl PassageText {
    /// Flatten to a list of non-empty segments.
    pub fn segments(&self) -> Vec<&str> {
        match self {
            PassageText::Single(text) => {
                if text.is_empty() {
                    Vec::new()
                } else {
                    vec![text.as_str()]
                }
            }
            PassageText::Segments(lines) => {
                lines.iter().map(String::as_str).filter(|s| !s.is_empty()).collect()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments().is_empty()
    }

    /// Build from a loosely-shaped upstream value: a string, or an
    /// arbitrarily nested array of strings (whole-chapter responses nest
    /// segments per verse). Anything else is no text.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(text) => Some(PassageText::Single(text.clone())),
            serde_json::Value::Array(_) => {
                let mut segments = Vec::new();
                collect_strings(value, &mut segments);
                Some(PassageText::Segments(segments))
            }
            _ => None,
        }
    }
}

fn collect_strings(value: &serde_json::Value, out: &mut Vec<String>) {
    match value {
        serde_json::Value::String(text) => out.push(text.clone()),
        serde_json::Value::Array(items) => {
            for item in items {
                collect_strings(item, out);
            }
        }
        _ => {}
    }
}

/// Result of a text lookup: the resolved reference plus the retrieved text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassageResponse {
    /// The reference the lookup resolved to
    pub reference: ParsedReference,

    /// Provider that returned the text
    pub provider: String,

    /// Version/edition string the provider used, if one was selected
    #[serde(default)]
    pub version: Option<String>,

    /// The passage text
    pub text: PassageText,
}

impl PassageResponse {
    pub fn new(reference: ParsedReference, provider: impl Into<String>, text: PassageText) -> Self {
        Self {
            reference,
            provider: provider.into(),
            version: None,
            text,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_segments() {
        let text = PassageText::Single("In the beginning".to_string());
        assert_eq!(text.segments(), vec!["In the beginning"]);
        assert!(!text.is_empty());
    }

    #[test]
    fn test_segment_list_skips_empties() {
        let text = PassageText::Segments(vec![
            "verse one".to_string(),
            String::new(),
            "verse three".to_string(),
        ]);
        assert_eq!(text.segments(), vec!["verse one", "verse three"]);
    }

    #[test]
    fn test_from_value_flattens_nested_arrays() {
        let value = serde_json::json!([["v1", "v2"], "v3", 7]);
        let text = PassageText::from_value(&value).unwrap();
        assert_eq!(text.segments(), vec!["v1", "v2", "v3"]);

        assert!(PassageText::from_value(&serde_json::json!({"x": 1})).is_none());
    }

    #[test]
    fn test_untagged_deserialization() {
        let single: PassageText = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(single, PassageText::Single("text".to_string()));

        let list: PassageText = serde_json::from_str("[\"a\", \"b\"]").unwrap();
        assert_eq!(
            list,
            PassageText::Segments(vec!["a".to_string(), "b".to_string()])
        );
    }
}
