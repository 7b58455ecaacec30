//! Cookie Monster Enrichment Loaders
//!
//! Loaders decide whether a cookie should be enriched and, if so, fetch the
//! metadata that becomes its next enrichment.
//!
//! - [`IrodsLoader`]: enriches BAM/CRAM data objects with their iRODS metadata
//! - [`BatonRetriever`]: fetches iRODS metadata through the baton tools
//! - [`MockRetriever`]: in-memory retriever for tests and dry runs
//!
//! # Examples
//!
//! ```
//! use cookiemonster_domain::{Cookie, EnrichmentLoader, MetadataSnapshot};
//! use cookiemonster_loaders::{IrodsLoader, MockRetriever};
//!
//! let mut retriever = MockRetriever::default();
//! retriever.add_snapshot(
//!     "sample1.bam",
//!     MetadataSnapshot::builder().value("study_id", "3765").build(),
//! );
//! let loader = IrodsLoader::new(retriever);
//!
//! let mut cookie = Cookie::new("sample1.bam");
//! assert!(loader.can_enrich(&cookie));
//!
//! let enrichment = loader.load(&cookie).unwrap();
//! cookie.enrichments.push(enrichment);
//! assert!(!loader.can_enrich(&cookie));
//! ```

#![warn(missing_docs)]

mod baton;
mod definitions;
mod error;
mod irods;
mod mock;

pub use baton::{BatonConfig, BatonRetriever};
pub use definitions::{IrodsLoaderDefinition, LoaderDefinitions};
pub use error::{BatonError, LoaderDefinitionError};
pub use irods::{IrodsLoader, IRODS_ENRICHMENT, RECOGNISED_SUFFIXES};
pub use mock::MockRetriever;
