//! Cookie Monster Domain Layer
//!
//! This crate contains the core model shared by every HGI Cookie Monster
//! plugin. It defines the data the host framework hands to rules and
//! enrichment loaders, and the trait interfaces those plugins implement.
//!
//! ## Key Concepts
//!
//! - **Cookie**: A tracked item (usually an iRODS data object path) with an
//!   accumulating history of enrichments
//! - **Metadata Snapshot**: Immutable key → set-of-values mapping
//! - **Enrichment**: One timestamped snapshot contributed by a named source
//! - **Enrichment Log**: Append-only, arrival-ordered enrichments of one cookie
//! - **Rule / Enrichment Loader**: Host capabilities implemented by plugins
//!
//! ## Architecture
//!
//! - Pure data and trait definitions only
//! - Implementations of rules and loaders live in other crates
//! - No global registration: plugins are collected into a [`Registry`] value
//!   at startup and passed by reference to whatever evaluates cookies

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod action;
pub mod cookie;
pub mod enrichment;
pub mod error;
pub mod registry;
pub mod snapshot;
pub mod traits;

// Re-exports for convenience
pub use action::{Notification, RuleAction};
pub use cookie::Cookie;
pub use enrichment::{Enrichment, EnrichmentLog};
pub use error::{RegistryError, RetrievalError};
pub use registry::Registry;
pub use snapshot::MetadataSnapshot;
pub use traits::{EnrichmentLoader, MetadataRetriever, Rule};

use std::time::{SystemTime, UNIX_EPOCH};

/// Current timestamp in seconds since Unix epoch
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
