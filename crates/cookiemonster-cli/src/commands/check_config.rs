//! Check-config command implementation.

use crate::setup::{baton_retriever, build_registry};
use crate::Result;
use cookiemonster_config::CookieMonsterConfig;
use std::io::Write;

/// Validate the settings and definitions, writing a summary to `out`
pub fn execute_check_config(config: &CookieMonsterConfig, out: &mut impl Write) -> Result<()> {
    let registry = build_registry(config, baton_retriever(config))?;

    writeln!(out, "Settings OK")?;
    writeln!(out, "  cookie jar: {} ({})", config.cookie_jar.url, config.cookie_jar.database)?;
    writeln!(out, "  worker threads: {}", config.processing.max_threads)?;
    writeln!(out, "  baton: {} (zone {})", config.baton.binaries_location.display(), config.baton.zone)?;
    writeln!(out, "Rules:")?;
    for rule in registry.rules_by_priority() {
        writeln!(out, "  {} (priority {})", rule.name(), rule.priority())?;
    }
    writeln!(out, "Enrichment loaders:")?;
    for loader in registry.loaders_by_priority() {
        writeln!(out, "  {} (priority {})", loader.name(), loader.priority())?;
    }
    Ok(())
}
