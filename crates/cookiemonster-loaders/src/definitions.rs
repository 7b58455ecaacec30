//! Enrichment loader definitions file (`processing.enrichment_loaders`)
//!
//! ```toml
//! [[irods]]
//! name = "irods_data_object"
//! priority = 0
//! suffixes = [".bam", ".cram"]
//! ```

use crate::{IrodsLoader, LoaderDefinitionError, RECOGNISED_SUFFIXES};
use cookiemonster_domain::{EnrichmentLoader, MetadataRetriever};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Parsed loader definitions
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoaderDefinitions {
    /// iRODS metadata loaders
    #[serde(default)]
    pub irods: Vec<IrodsLoaderDefinition>,
}

/// A single iRODS loader definition
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IrodsLoaderDefinition {
    /// Loader name, also used as the enrichment source tag
    pub name: String,

    /// Priority (lower is tried first)
    #[serde(default)]
    pub priority: i32,

    /// Recognised identifier suffixes (defaults to `.bam` and `.cram`)
    #[serde(default)]
    pub suffixes: Option<Vec<String>>,
}

impl LoaderDefinitions {
    /// Load definitions from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoaderDefinitionError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse definitions from TOML text
    pub fn parse(contents: &str) -> Result<Self, LoaderDefinitionError> {
        let definitions: LoaderDefinitions = toml::from_str(contents)?;
        definitions.validate()?;
        Ok(definitions)
    }

    fn validate(&self) -> Result<(), LoaderDefinitionError> {
        let mut seen = HashSet::new();
        for definition in &self.irods {
            let invalid = |reason: &str| LoaderDefinitionError::Invalid {
                name: definition.name.clone(),
                reason: reason.to_string(),
            };
            if definition.name.trim().is_empty() {
                return Err(invalid("name cannot be empty"));
            }
            if !seen.insert(definition.name.as_str()) {
                return Err(invalid("name is defined more than once"));
            }
            if let Some(suffixes) = &definition.suffixes {
                if suffixes.is_empty() || suffixes.iter().any(|s| s.is_empty()) {
                    return Err(invalid("suffixes must be non-empty"));
                }
            }
        }
        Ok(())
    }

    /// Instantiate the defined loaders around a shared retriever, falling
    /// back to the default iRODS loader when nothing is defined
    pub fn into_loaders<R>(self, retriever: R) -> Vec<Box<dyn EnrichmentLoader>>
    where
        R: MetadataRetriever + Clone + 'static,
    {
        if self.irods.is_empty() {
            info!("no enrichment loaders defined, using the default iRODS loader");
            return vec![Box::new(IrodsLoader::new(retriever))];
        }
        self.irods
            .into_iter()
            .map(|d| {
                let suffixes = d.suffixes.unwrap_or_else(|| {
                    RECOGNISED_SUFFIXES.iter().map(|s| s.to_string()).collect()
                });
                Box::new(IrodsLoader::with_settings(
                    d.name,
                    d.priority,
                    suffixes,
                    retriever.clone(),
                )) as Box<dyn EnrichmentLoader>
            })
            .collect()
    }
}
