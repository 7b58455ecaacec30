//! Rule definitions file (`processing.rules`)
//!
//! Lists the library-update rules to register, one table per watched study:
//!
//! ```toml
//! [[library_update]]
//! name = "study_interval"
//! study_id = "3765"
//! priority = 0
//! ```

use crate::{builtin_rules, LibraryUpdateRule, RuleDefinitionError};
use cookiemonster_domain::Rule;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Parsed rule definitions
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDefinitions {
    /// Library-update rules, one per watched study
    #[serde(default)]
    pub library_update: Vec<LibraryUpdateDefinition>,
}

/// A single library-update rule definition
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibraryUpdateDefinition {
    /// Rule name (must be unique)
    pub name: String,

    /// Study identifier to watch
    pub study_id: String,

    /// Priority (lower runs first)
    #[serde(default)]
    pub priority: i32,
}

impl RuleDefinitions {
    /// Load definitions from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RuleDefinitionError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse definitions from TOML text
    pub fn parse(contents: &str) -> Result<Self, RuleDefinitionError> {
        let definitions: RuleDefinitions = toml::from_str(contents)?;
        definitions.validate()?;
        Ok(definitions)
    }

    fn validate(&self) -> Result<(), RuleDefinitionError> {
        let mut seen = HashSet::new();
        for definition in &self.library_update {
            if definition.name.trim().is_empty() {
                return Err(RuleDefinitionError::Invalid {
                    name: definition.name.clone(),
                    reason: "name cannot be empty".to_string(),
                });
            }
            if definition.study_id.trim().is_empty() {
                return Err(RuleDefinitionError::Invalid {
                    name: definition.name.clone(),
                    reason: "study_id cannot be empty".to_string(),
                });
            }
            if !seen.insert(definition.name.as_str()) {
                return Err(RuleDefinitionError::Invalid {
                    name: definition.name.clone(),
                    reason: "name is defined more than once".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Instantiate the defined rules, falling back to the built-in ones
    /// when nothing is defined
    pub fn into_rules(self) -> Vec<Box<dyn Rule>> {
        if self.library_update.is_empty() {
            info!("no rules defined, using built-in rules");
            return builtin_rules();
        }
        self.library_update
            .into_iter()
            .map(|d| Box::new(LibraryUpdateRule::new(d.name, d.study_id, d.priority)) as Box<dyn Rule>)
            .collect()
    }
}
