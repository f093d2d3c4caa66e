use rapidfuzz::fuzz;
use serde_json::Value;

/// Fuzzy best-match selection over heterogeneous records.
///
/// Candidates are opaque JSON objects; the caller names the fields to compare
/// and the target values to compare them against. Tolerates upstream naming
/// inconsistencies (diacritics, abbreviation variants) without requiring
/// exact string equality.
pub struct FuzzyRanker {
    threshold: f64,
}

impl FuzzyRanker {
    /// Minimum single-field score for a candidate to qualify.
    pub const DEFAULT_THRESHOLD: f64 = 80.0;

    pub fn new() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Rank `candidates` against target `values` at the named `fields`.
    ///
    /// Per field: normalized indel ratio (0-100, case-sensitive) between the
    /// candidate's value and the target; a `None` target skips the field; a
    /// missing candidate field scores against the empty string. A candidate
    /// qualifies when its summed score is positive and at least one field
    /// score reaches the threshold. Qualifiers come back best-first; equal
    /// totals retain input order.
    pub fn best_matches(
        &self,
        candidates: &[Value],
        fields: &[&str],
        values: &[Option<&str>],
    ) -> Vec<Value> {
        let mut matches: Vec<(&Value, f64)> = Vec::new();

        for candidate in candidates {
            let mut total_score = 0.0;
            let mut best_field = 0.0_f64;

            for (field, value) in fields.iter().zip(values.iter()) {
                let Some(value) = value else { continue };
                let field_value = candidate
                    .get(*field)
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                // rapidfuzz's Rust `fuzz::ratio` returns a 0.0-1.0 similarity;
                // scale to the 0-100 percentage this engine scores on.
                let score = fuzz::ratio(field_value.chars(), value.chars()) * 100.0;
                total_score += score;
                best_field = best_field.max(score);
            }

            if total_score > 0.0 && best_field >= self.threshold {
                matches.push((candidate, total_score));
            }
        }

        // Stable sort keeps input order among equal totals.
        matches.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        matches.into_iter().map(|(candidate, _)| candidate.clone()).collect()
    }
}

impl Default for FuzzyRanker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn versions() -> Vec<Value> {
        vec![
            json!({"title": "Genesis", "versionTitle": "Tanakh: The Holy Scriptures", "language": "en"}),
            json!({"title": "Genesis", "versionTitle": "The Koren Jerusalem Bible", "language": "en"}),
            json!({"title": "Obadiah", "versionTitle": "Tanakh: The Holy Scriptures", "language": "en"}),
        ]
    }

    #[test]
    fn test_exact_title_ranks_first() {
        let ranker = FuzzyRanker::new();
        let best = ranker.best_matches(
            &versions(),
            &["title", "versionTitle", "language"],
            &[Some("Genesis"), Some("Koren Jerusalem Bible"), Some("en")],
        );

        assert_eq!(best[0]["versionTitle"], "The Koren Jerusalem Bible");
    }

    #[test]
    fn test_null_targets_skipped() {
        let ranker = FuzzyRanker::new();
        let best = ranker.best_matches(
            &versions(),
            &["title", "versionTitle", "language"],
            &[Some("Obadiah"), None, None],
        );

        assert_eq!(best.len(), 1);
        assert_eq!(best[0]["title"], "Obadiah");
    }

    #[test]
    fn test_threshold_gates_on_single_field() {
        let ranker = FuzzyRanker::new();
        // Many weak fields may sum high, but no single field reaches 80.
        let candidates = vec![json!({"a": "xxxxxx", "b": "yyyyyy", "c": "zzzzzz"})];
        let best = ranker.best_matches(
            &candidates,
            &["a", "b", "c"],
            &[Some("xxxoxo"), Some("yyoyoy"), Some("zzozoz")],
        );
        assert!(best.is_empty());
    }

    #[test]
    fn test_missing_field_scores_as_empty() {
        let ranker = FuzzyRanker::new();
        let candidates = vec![json!({"other": "value"})];
        let best = ranker.best_matches(&candidates, &["title"], &[Some("Genesis")]);
        assert!(best.is_empty());
    }

    #[test]
    fn test_all_null_targets_yield_nothing() {
        let ranker = FuzzyRanker::new();
        let best = ranker.best_matches(&versions(), &["title"], &[None]);
        assert!(best.is_empty());
    }

    #[test]
    fn test_stable_order_for_ties() {
        let ranker = FuzzyRanker::new();
        let candidates = vec![
            json!({"title": "Genesis", "marker": 1}),
            json!({"title": "Genesis", "marker": 2}),
        ];
        let best = ranker.best_matches(&candidates, &["title"], &[Some("Genesis")]);

        assert_eq!(best.len(), 2);
        assert_eq!(best[0]["marker"], 1);
        assert_eq!(best[1]["marker"], 2);
    }

    #[test]
    fn test_scores_non_increasing() {
        let ranker = FuzzyRanker::with_threshold(50.0);
        let candidates = vec![
            json!({"title": "Genesis Rabbah"}),
            json!({"title": "Genesis"}),
            json!({"title": "Genesia"}),
        ];
        let best = ranker.best_matches(&candidates, &["title"], &[Some("Genesis")]);

        let score = |v: &Value| fuzz::ratio(v["title"].as_str().unwrap().chars(), "Genesis".chars());
        for pair in best.windows(2) {
            assert!(score(&pair[0]) >= score(&pair[1]));
        }
        assert_eq!(best[0]["title"], "Genesis");
    }
}
