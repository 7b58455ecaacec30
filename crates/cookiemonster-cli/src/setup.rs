//! Startup: settings, definitions and registry construction

use crate::Result;
use cookiemonster_config::CookieMonsterConfig;
use cookiemonster_domain::{MetadataRetriever, Registry};
use cookiemonster_loaders::{BatonConfig, BatonRetriever, LoaderDefinitions};
use cookiemonster_rules::RuleDefinitions;
use std::path::Path;
use tracing::info;

/// Initialize tracing to stderr
///
/// `RUST_LOG` takes precedence; otherwise info, or debug when verbose.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "debug"
    } else {
        "info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

/// Load the settings file
pub fn load_config(path: &Path) -> Result<CookieMonsterConfig> {
    let config = CookieMonsterConfig::from_file(path)?;
    info!(path = %path.display(), "loaded settings");
    Ok(config)
}

/// Retriever for the baton installation named in the settings
pub fn baton_retriever(config: &CookieMonsterConfig) -> BatonRetriever {
    BatonRetriever::new(BatonConfig {
        bin: config.baton.binaries_location.clone(),
        zone: config.baton.zone.clone(),
    })
}

/// Build the registry of rules and loaders named in the settings
pub fn build_registry<R>(config: &CookieMonsterConfig, retriever: R) -> Result<Registry>
where
    R: MetadataRetriever + Clone + 'static,
{
    let rules = RuleDefinitions::from_file(&config.processing.rules_location)?.into_rules();
    let loaders = LoaderDefinitions::from_file(&config.processing.enrichment_loaders_location)?
        .into_loaders(retriever);

    let mut registry = Registry::new();
    for rule in rules {
        registry.register_rule(rule)?;
    }
    for loader in loaders {
        registry.register_loader(loader)?;
    }
    info!(
        rules = registry.rule_count(),
        loaders = registry.loader_count(),
        "registry ready"
    );
    Ok(registry)
}
