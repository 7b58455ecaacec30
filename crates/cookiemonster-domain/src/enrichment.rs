//! Enrichments and the per-cookie enrichment log

use crate::MetadataSnapshot;

/// A single enrichment event recorded against a cookie
///
/// Enrichments are immutable once created; new information about a cookie is
/// recorded by appending another enrichment, never by editing an old one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrichment {
    /// Identifier of the loader or rule that produced this enrichment
    /// (e.g., "irods_data_object", "irods_update")
    pub source: String,

    /// When the enrichment was produced (seconds since Unix epoch)
    pub timestamp: u64,

    /// The metadata captured by this enrichment
    pub metadata: MetadataSnapshot,
}

impl Enrichment {
    /// Create a new enrichment
    pub fn new(source: impl Into<String>, timestamp: u64, metadata: MetadataSnapshot) -> Self {
        Self {
            source: source.into(),
            timestamp,
            metadata,
        }
    }
}

/// Append-only, arrival-ordered history of a cookie's enrichments
///
/// Arrival order is authoritative: the "last" enrichment is the one appended
/// most recently, whatever its timestamp says. Entries are never removed or
/// reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichmentLog {
    entries: Vec<Enrichment>,
}

impl EnrichmentLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one enrichment
    pub fn push(&mut self, enrichment: Enrichment) {
        self.entries.push(enrichment);
    }

    /// Append several enrichments, preserving their order
    pub fn extend<I: IntoIterator<Item = Enrichment>>(&mut self, enrichments: I) {
        self.entries.extend(enrichments);
    }

    /// Length-bounded view of the log as it stands now
    ///
    /// Scans over the returned slice see a consistent snapshot of the
    /// history even if the owner appends afterwards.
    pub fn view(&self) -> &[Enrichment] {
        &self.entries
    }

    /// Most recently appended enrichment
    pub fn last(&self) -> Option<&Enrichment> {
        self.entries.last()
    }

    /// Iterate in arrival order
    pub fn iter(&self) -> std::slice::Iter<'_, Enrichment> {
        self.entries.iter()
    }

    /// Number of enrichments
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no enrichment has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a EnrichmentLog {
    type Item = &'a Enrichment;
    type IntoIter = std::slice::Iter<'a, Enrichment>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<Enrichment> for EnrichmentLog {
    fn from_iter<T: IntoIterator<Item = Enrichment>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
