//! Metadata snapshots - the payload of a single enrichment

use std::collections::{BTreeMap, BTreeSet};

/// Immutable mapping from metadata key to a non-empty set of values
///
/// iRODS attaches attribute/value/unit triples to data objects, and an
/// attribute may carry several values. A snapshot captures that state at one
/// point in time. Keys with no values are never stored, so every key that
/// [`MetadataSnapshot::get`] finds has at least one value.
///
/// # Examples
///
/// ```
/// use cookiemonster_domain::MetadataSnapshot;
///
/// let snapshot = MetadataSnapshot::builder()
///     .value("study_id", "3765")
///     .value("target", "library")
///     .build();
///
/// assert!(snapshot.contains("target", "library"));
/// assert!(!snapshot.contains("target", "other"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataSnapshot {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl MetadataSnapshot {
    /// Create an empty snapshot
    pub fn empty() -> Self {
        Self::default()
    }

    /// Start building a snapshot
    pub fn builder() -> MetadataSnapshotBuilder {
        MetadataSnapshotBuilder::default()
    }

    /// Value set recorded for `key`, if the key is present
    pub fn get(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(key)
    }

    /// Whether `key` is present and one of its values equals `value`
    pub fn contains(&self, key: &str, value: &str) -> bool {
        self.entries
            .get(key)
            .is_some_and(|values| values.contains(value))
    }

    /// Whether `key` is defined by this snapshot
    pub fn defines(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over (key, values) pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot has no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, I, V> FromIterator<(K, I)> for MetadataSnapshot
where
    K: Into<String>,
    I: IntoIterator<Item = V>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut builder = MetadataSnapshotBuilder::default();
        for (key, values) in iter {
            builder = builder.values(key, values);
        }
        builder.build()
    }
}

/// Builder for [`MetadataSnapshot`]
///
/// Values for the same key accumulate. Keys that end up with no values are
/// dropped by [`MetadataSnapshotBuilder::build`].
#[derive(Debug, Default)]
pub struct MetadataSnapshotBuilder {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl MetadataSnapshotBuilder {
    /// Add a single value for `key`
    pub fn value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries
            .entry(key.into())
            .or_default()
            .insert(value.into());
        self
    }

    /// Add several values for `key`
    pub fn values<I, V>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.entries
            .entry(key.into())
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Finish the snapshot
    pub fn build(mut self) -> MetadataSnapshot {
        self.entries.retain(|_, values| !values.is_empty());
        MetadataSnapshot {
            entries: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_accumulates_values() {
        let snapshot = MetadataSnapshot::builder()
            .value("study_id", "1")
            .value("study_id", "2")
            .build();

        let values = snapshot.get("study_id").unwrap();
        assert_eq!(values.len(), 2);
        assert!(values.contains("1"));
        assert!(values.contains("2"));
    }

    #[test]
    fn test_empty_value_sets_are_dropped() {
        let snapshot = MetadataSnapshot::builder()
            .values("target", Vec::<String>::new())
            .value("study_id", "1")
            .build();

        assert!(!snapshot.defines("target"));
        assert!(snapshot.defines("study_id"));
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_from_iter() {
        let snapshot: MetadataSnapshot =
            [("target", vec!["library", "other"])].into_iter().collect();

        assert!(snapshot.contains("target", "library"));
        assert!(snapshot.contains("target", "other"));
        assert!(!snapshot.contains("study_id", "library"));
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = MetadataSnapshot::empty();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.keys().count(), 0);
        assert!(snapshot.get("anything").is_none());
    }
}
