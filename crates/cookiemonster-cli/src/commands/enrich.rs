//! Enrich command implementation.

use crate::cli::EnrichArgs;
use crate::commands::read_cookie;
use crate::document::CookieDocument;
use crate::{CliError, Result};
use cookiemonster_domain::{Cookie, Registry};
use std::io::Write;
use tracing::info;

/// Run the first eligible loader and print the enriched cookie as JSON
pub fn execute_enrich(args: EnrichArgs, registry: &Registry, out: &mut impl Write) -> Result<()> {
    let mut cookie = match &args.cookie {
        Some(path) => read_cookie(path)?,
        None => Cookie::new(args.identifier.as_str()),
    };
    // The command line identifier wins over whatever the file says
    cookie.identifier = args.identifier;

    let loader = registry
        .eligible_loaders(&cookie)
        .into_iter()
        .next()
        .ok_or_else(|| CliError::NoEligibleLoader(cookie.identifier.clone()))?;

    let enrichment = loader.load(&cookie)?;
    info!(loader = loader.name(), cookie = %cookie.identifier, "enriched");
    cookie.enrichments.push(enrichment);

    serde_json::to_writer_pretty(&mut *out, &CookieDocument::from(&cookie))?;
    writeln!(out)?;
    Ok(())
}
