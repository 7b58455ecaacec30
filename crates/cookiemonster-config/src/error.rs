//! Configuration error types

use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML, including missing or mistyped keys
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A key is present but its value is unusable
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Dotted key path (e.g., "retrieval.period")
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}
