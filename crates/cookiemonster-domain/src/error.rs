//! Domain error types

use thiserror::Error;

/// Errors raised by a metadata retrieval collaborator
///
/// Loaders hand these back to the host unchanged; retry policy is decided
/// there.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RetrievalError {
    /// The remote service could not be reached or the call itself failed
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered but the item could not be looked up
    #[error("Lookup error for {identifier}: {reason}")]
    Lookup {
        /// Identifier that was looked up
        identifier: String,
        /// Description of the failure
        reason: String,
    },
}

/// Errors raised while building a [`crate::Registry`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A rule with the same name was already registered
    #[error("Duplicate rule name: {0}")]
    DuplicateRule(String),

    /// A loader with the same name was already registered
    #[error("Duplicate enrichment loader name: {0}")]
    DuplicateLoader(String),
}
