//! Trait definitions for the host framework's plugin capabilities
//!
//! These traits define the boundary between the host (scheduler, cookie jar,
//! notification dispatch) and the plugins in this workspace.

use crate::{Cookie, Enrichment, MetadataSnapshot, RetrievalError, RuleAction};

/// A named policy evaluated against every cookie
///
/// Implementations must be pure functions of the cookie: no interior state,
/// no mutation of the cookie.
pub trait Rule: Send + Sync {
    /// Unique name of the rule
    fn name(&self) -> &str;

    /// Ordering among rules; lower runs first
    fn priority(&self) -> i32;

    /// Whether the rule applies to the cookie in its current state
    fn matches(&self, cookie: &Cookie) -> bool;

    /// Produce the rule's outcome
    ///
    /// The host only calls this after [`Rule::matches`] returned `true`.
    fn run(&self, cookie: &Cookie) -> RuleAction;
}

/// A component that may add a new enrichment to a cookie
pub trait EnrichmentLoader: Send + Sync {
    /// Unique name of the loader
    fn name(&self) -> &str;

    /// Ordering among loaders; lower is tried first
    fn priority(&self) -> i32;

    /// Whether this loader should contribute an enrichment now
    fn can_enrich(&self, cookie: &Cookie) -> bool;

    /// Produce the enrichment
    ///
    /// Retrieval failures are returned as-is for the host to handle.
    fn load(&self, cookie: &Cookie) -> Result<Enrichment, RetrievalError>;
}

/// External service that fetches the current metadata of an item
///
/// Implemented by the infrastructure layer (cookiemonster-loaders)
pub trait MetadataRetriever: Send + Sync {
    /// Fetch metadata for the given identifier
    fn retrieve(&self, identifier: &str) -> Result<MetadataSnapshot, RetrievalError>;
}
