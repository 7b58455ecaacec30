//! Loader error types

use cookiemonster_domain::RetrievalError;
use thiserror::Error;

/// Errors from running a baton command
#[derive(Error, Debug)]
pub enum BatonError {
    /// The baton binary could not be started or talked to
    #[error("Failed to run {command}: {source}")]
    Spawn {
        /// Command that failed
        command: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// baton exited unsuccessfully
    #[error("{command} exited with {status}: {stderr}")]
    Exit {
        /// Command that failed
        command: String,
        /// Exit status description
        status: String,
        /// Captured standard error
        stderr: String,
    },

    /// baton replied with something that is not the expected JSON
    #[error("Unexpected baton output: {0}")]
    Output(#[from] serde_json::Error),

    /// baton reported an iRODS error for the item
    #[error("iRODS error {code}: {message}")]
    Irods {
        /// iRODS error code
        code: i64,
        /// iRODS error message
        message: String,
    },

    /// The identifier is not an absolute data object path
    #[error("Not a data object path: {0}")]
    InvalidPath(String),
}

impl BatonError {
    /// Map onto the retrieval error handed back to the host
    pub fn into_retrieval_error(self, identifier: &str) -> RetrievalError {
        match self {
            BatonError::Spawn { .. } | BatonError::Exit { .. } => {
                RetrievalError::Transport(self.to_string())
            }
            BatonError::Output(_) | BatonError::Irods { .. } | BatonError::InvalidPath(_) => {
                RetrievalError::Lookup {
                    identifier: identifier.to_string(),
                    reason: self.to_string(),
                }
            }
        }
    }
}

/// Errors that can occur while loading loader definitions
#[derive(Error, Debug)]
pub enum LoaderDefinitionError {
    /// Failed to read the definitions file
    #[error("Failed to read enrichment loader definitions: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the definitions TOML
    #[error("Failed to parse enrichment loader definitions TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A definition is structurally valid but unusable
    #[error("Invalid enrichment loader definition '{name}': {reason}")]
    Invalid {
        /// Name of the offending loader
        name: String,
        /// What is wrong with it
        reason: String,
    },
}
