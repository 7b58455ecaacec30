//! Loader that enriches sequence data objects with their iRODS metadata

use cookiemonster_domain::{
    current_timestamp, Cookie, Enrichment, EnrichmentLoader, MetadataRetriever, RetrievalError,
};
use tracing::debug;

/// Source tag of enrichments produced by [`IrodsLoader`]
pub const IRODS_ENRICHMENT: &str = "irods_data_object";

/// Identifier suffixes the loader handles by default
pub const RECOGNISED_SUFFIXES: [&str; 2] = [".bam", ".cram"];

/// Enriches BAM/CRAM cookies with the data object's current iRODS metadata
///
/// A cookie is skipped when the most recent enrichment already came from this
/// loader. Only the last enrichment is consulted: an older enrichment from
/// this loader followed by one from another source does not block a reload.
#[derive(Debug, Clone)]
pub struct IrodsLoader<R> {
    name: String,
    priority: i32,
    suffixes: Vec<String>,
    retriever: R,
}

impl<R: MetadataRetriever> IrodsLoader<R> {
    /// Create the default loader (`irods_data_object`, priority 0, `.bam`/`.cram`)
    pub fn new(retriever: R) -> Self {
        Self::with_settings(
            IRODS_ENRICHMENT,
            0,
            RECOGNISED_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            retriever,
        )
    }

    /// Create a loader with an explicit name, priority and suffix list
    ///
    /// The name doubles as the source tag of produced enrichments.
    pub fn with_settings(
        name: impl Into<String>,
        priority: i32,
        suffixes: Vec<String>,
        retriever: R,
    ) -> Self {
        Self {
            name: name.into(),
            priority,
            suffixes,
            retriever,
        }
    }

    /// Suffixes this loader recognises
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    fn enriched_last(&self, cookie: &Cookie) -> bool {
        cookie
            .enrichments
            .last()
            .is_some_and(|last| last.source == self.name)
    }

    fn recognises(&self, identifier: &str) -> bool {
        self.suffixes
            .iter()
            .any(|suffix| identifier.ends_with(suffix.as_str()))
    }
}

impl<R: MetadataRetriever> EnrichmentLoader for IrodsLoader<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn can_enrich(&self, cookie: &Cookie) -> bool {
        !self.enriched_last(cookie) && self.recognises(&cookie.identifier)
    }

    fn load(&self, cookie: &Cookie) -> Result<Enrichment, RetrievalError> {
        let metadata = self.retriever.retrieve(&cookie.identifier)?;
        debug!(
            loader = %self.name,
            cookie = %cookie.identifier,
            keys = metadata.len(),
            "loaded iRODS metadata"
        );
        Ok(Enrichment::new(self.name.as_str(), current_timestamp(), metadata))
    }
}
