//! Rule definition error types

use thiserror::Error;

/// Errors that can occur while loading rule definitions
#[derive(Error, Debug)]
pub enum RuleDefinitionError {
    /// Failed to read the definitions file
    #[error("Failed to read rule definitions: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the definitions TOML
    #[error("Failed to parse rule definitions TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A definition is structurally valid but unusable
    #[error("Invalid rule definition '{name}': {reason}")]
    Invalid {
        /// Name of the offending rule
        name: String,
        /// What is wrong with it
        reason: String,
    },
}
