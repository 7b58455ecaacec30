//! Cookie Monster Rules
//!
//! Rules decide what should happen to a cookie once enough is known about it.
//!
//! The rules here are all built on the [`CorrelationMatcher`]: a conjunction
//! of `(key, expected value)` conditions checked against the cookie's whole
//! enrichment history rather than a single enrichment. For each key the most
//! recently arrived enrichment that defines it supplies the live value set,
//! so two conditions can be satisfied by two different enrichments.
//!
//! # Examples
//!
//! ```
//! use cookiemonster_domain::{Cookie, Enrichment, MetadataSnapshot, Rule};
//! use cookiemonster_rules::LibraryUpdateRule;
//!
//! let rule = LibraryUpdateRule::study_interval();
//! let cookie = Cookie::new("/seq/1/1.bam")
//!     .with_enrichment(Enrichment::new(
//!         "irods_update",
//!         1,
//!         MetadataSnapshot::builder().value("target", "library").build(),
//!     ))
//!     .with_enrichment(Enrichment::new(
//!         "irods_data_object",
//!         2,
//!         MetadataSnapshot::builder().value("study_id", "3765").build(),
//!     ));
//!
//! assert!(rule.matches(&cookie));
//! ```

#![warn(missing_docs)]

pub mod constants;
mod definitions;
mod error;
mod library;
mod matcher;

pub use definitions::{LibraryUpdateDefinition, RuleDefinitions};
pub use error::RuleDefinitionError;
pub use library::LibraryUpdateRule;
pub use matcher::{Condition, CorrelationMatcher};

use cookiemonster_domain::Rule;

/// The rules shipped with HGI Cookie Monster
pub fn builtin_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(LibraryUpdateRule::study_interval()),
        Box::new(LibraryUpdateRule::study_page()),
    ]
}
