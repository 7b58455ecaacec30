//! Cross-enrichment correlation matching

use cookiemonster_domain::Enrichment;
use std::collections::{BTreeMap, BTreeSet};

/// A `(key, expected value)` pair that must hold for a match
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Condition {
    /// Metadata key
    pub key: String,

    /// Value that must be among the key's resolved values
    pub expected: String,
}

impl Condition {
    /// Create a condition
    pub fn new(key: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            expected: expected.into(),
        }
    }
}

/// Conjunction of conditions evaluated over a whole enrichment history
///
/// Each key is resolved independently: walking the history in arrival
/// order, every enrichment that defines the key replaces its value set
/// outright. Value sets are never merged across enrichments. The match holds
/// when every expected value is present in its key's resolved set, so the
/// study identifier may come from one enrichment and the target flag from
/// another.
///
/// Timestamps and wall-clock time play no part; only arrival order does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationMatcher {
    conditions: Vec<Condition>,
}

impl CorrelationMatcher {
    /// Create a matcher over the given conditions
    pub fn new(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }

    /// The conditions, in the order they were given
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Resolve the live value set of every condition key
    ///
    /// Keys no enrichment defines are absent from the result.
    pub fn resolve<'a>(&self, history: &'a [Enrichment]) -> BTreeMap<String, &'a BTreeSet<String>> {
        let mut resolved = BTreeMap::new();
        for enrichment in history {
            for condition in &self.conditions {
                if let Some(values) = enrichment.metadata.get(&condition.key) {
                    resolved.insert(condition.key.clone(), values);
                }
            }
        }
        resolved
    }

    /// Whether every condition holds over the history
    ///
    /// An empty history, or an empty condition set, never matches.
    pub fn matches(&self, history: &[Enrichment]) -> bool {
        if self.conditions.is_empty() {
            return false;
        }
        let resolved = self.resolve(history);
        self.conditions.iter().all(|condition| {
            resolved
                .get(condition.key.as_str())
                .is_some_and(|values| values.contains(&condition.expected))
        })
    }
}

impl FromIterator<Condition> for CorrelationMatcher {
    fn from_iter<T: IntoIterator<Item = Condition>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cookiemonster_domain::MetadataSnapshot;

    fn enrichment(pairs: &[(&str, &str)]) -> Enrichment {
        let mut builder = MetadataSnapshot::builder();
        for (key, value) in pairs {
            builder = builder.value(*key, *value);
        }
        Enrichment::new("test", 0, builder.build())
    }

    fn matcher() -> CorrelationMatcher {
        CorrelationMatcher::new(vec![
            Condition::new("study_id", "S1"),
            Condition::new("target", "library"),
        ])
    }

    #[test]
    fn test_empty_history_does_not_match() {
        assert!(!matcher().matches(&[]));
    }

    #[test]
    fn test_empty_condition_set_does_not_match() {
        let history = vec![enrichment(&[("target", "library")])];
        assert!(!CorrelationMatcher::new(vec![]).matches(&history));
    }

    #[test]
    fn test_resolve_takes_latest_definition_per_key() {
        let history = vec![
            enrichment(&[("study_id", "S1"), ("target", "library")]),
            enrichment(&[("target", "other")]),
            enrichment(&[("unrelated", "x")]),
        ];

        let resolved = matcher().resolve(&history);
        assert!(resolved["study_id"].contains("S1"));
        assert!(resolved["target"].contains("other"));
        assert!(!resolved["target"].contains("library"));
        assert!(!resolved.contains_key("unrelated"));
    }

    #[test]
    fn test_resolution_outlives_matcher() {
        let history = vec![enrichment(&[("study_id", "S1")])];

        let resolved = CorrelationMatcher::new(vec![Condition::new("study_id", "S1")])
            .resolve(&history);
        assert_eq!(resolved.len(), 1);
        assert!(resolved["study_id"].contains("S1"));
    }

    #[test]
    fn test_value_sets_are_replaced_not_merged() {
        let history = vec![
            enrichment(&[("study_id", "S1"), ("study_id", "S2")]),
            enrichment(&[("study_id", "S2")]),
            enrichment(&[("target", "library")]),
        ];

        assert!(!matcher().matches(&history));
    }

    #[test]
    fn test_multi_valued_key_matches_any_member() {
        let history = vec![enrichment(&[
            ("study_id", "S0"),
            ("study_id", "S1"),
            ("target", "library"),
        ])];

        assert!(matcher().matches(&history));
    }

    #[test]
    fn test_missing_key_fails_regardless_of_others() {
        let history = vec![enrichment(&[("target", "library")])];
        assert!(!matcher().matches(&history));
    }
}
