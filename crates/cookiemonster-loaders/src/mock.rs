//! In-memory metadata retriever for deterministic testing

use cookiemonster_domain::{MetadataRetriever, MetadataSnapshot, RetrievalError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Retriever that serves pre-configured snapshots without touching iRODS
///
/// Unknown identifiers produce a lookup error. Clones share state, so a test
/// can keep a handle after moving the retriever into a loader.
///
/// # Examples
///
/// ```
/// use cookiemonster_domain::{MetadataRetriever, MetadataSnapshot, RetrievalError};
/// use cookiemonster_loaders::MockRetriever;
///
/// let mut retriever = MockRetriever::default();
/// retriever.add_snapshot("a.bam", MetadataSnapshot::empty());
/// retriever.add_error("b.bam", RetrievalError::Transport("down".to_string()));
///
/// assert!(retriever.retrieve("a.bam").is_ok());
/// assert!(retriever.retrieve("b.bam").is_err());
/// assert_eq!(retriever.call_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockRetriever {
    responses: Arc<Mutex<HashMap<String, Result<MetadataSnapshot, RetrievalError>>>>,
    call_count: Arc<AtomicUsize>,
}

impl MockRetriever {
    /// Serve `snapshot` for `identifier`
    pub fn add_snapshot(&mut self, identifier: impl Into<String>, snapshot: MetadataSnapshot) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(identifier.into(), Ok(snapshot));
    }

    /// Fail with `error` for `identifier`
    pub fn add_error(&mut self, identifier: impl Into<String>, error: RetrievalError) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(identifier.into(), Err(error));
    }

    /// Number of retrieve calls so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl MetadataRetriever for MockRetriever {
    fn retrieve(&self, identifier: &str) -> Result<MetadataSnapshot, RetrievalError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        let responses = self.responses.lock().unwrap_or_else(PoisonError::into_inner);
        match responses.get(identifier) {
            Some(response) => response.clone(),
            None => Err(RetrievalError::Lookup {
                identifier: identifier.to_string(),
                reason: "no metadata configured".to_string(),
            }),
        }
    }
}
