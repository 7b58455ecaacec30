//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings file error
    #[error("Configuration error: {0}")]
    Config(#[from] cookiemonster_config::ConfigError),

    /// Rule definitions error
    #[error("{0}")]
    Rules(#[from] cookiemonster_rules::RuleDefinitionError),

    /// Loader definitions error
    #[error("{0}")]
    Loaders(#[from] cookiemonster_loaders::LoaderDefinitionError),

    /// Registry construction error
    #[error("Registry error: {0}")]
    Registry(#[from] cookiemonster_domain::RegistryError),

    /// Metadata retrieval error
    #[error("Retrieval error: {0}")]
    Retrieval(#[from] cookiemonster_domain::RetrievalError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No settings file given
    #[error("No settings file given. Use --config or COOKIEMONSTER_CONFIG.")]
    MissingConfig,

    /// No loader is willing to enrich the cookie
    #[error("No enrichment loader can enrich {0}")]
    NoEligibleLoader(String),
}
