//! Cookie module - the unit of work handed to rules and loaders

use crate::{Enrichment, EnrichmentLog};

/// A tracked item together with everything learned about it so far
///
/// The identifier is normally an iRODS data object path. The cookie
/// exclusively owns its enrichment log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    /// Identifier of the tracked item (e.g., "/seq/1234/1234_5#6.bam")
    pub identifier: String,

    /// Enrichments in arrival order
    pub enrichments: EnrichmentLog,
}

impl Cookie {
    /// Create a cookie with no enrichments
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            enrichments: EnrichmentLog::new(),
        }
    }

    /// Builder-style helper that appends an enrichment
    pub fn with_enrichment(mut self, enrichment: Enrichment) -> Self {
        self.enrichments.push(enrichment);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MetadataSnapshot;

    #[test]
    fn test_new_cookie_has_no_enrichments() {
        let cookie = Cookie::new("sample1.bam");
        assert_eq!(cookie.identifier, "sample1.bam");
        assert!(cookie.enrichments.is_empty());
    }

    #[test]
    fn test_with_enrichment_appends() {
        let cookie = Cookie::new("sample1.bam")
            .with_enrichment(Enrichment::new("irods", 0, MetadataSnapshot::empty()))
            .with_enrichment(Enrichment::new("other", 0, MetadataSnapshot::empty()));

        assert_eq!(cookie.enrichments.len(), 2);
        assert_eq!(cookie.enrichments.last().unwrap().source, "other");
    }
}
