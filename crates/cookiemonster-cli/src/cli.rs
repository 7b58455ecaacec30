//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// HGI Cookie Monster - rules and enrichment loaders for iRODS data objects.
#[derive(Debug, Parser)]
#[command(name = "hgi-cookiemonster")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Settings file
    #[arg(short, long, global = true, env = "COOKIEMONSTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate the settings file and the rule/loader definitions it points to
    CheckConfig,

    /// Show which loaders and rules apply to a cookie described in JSON
    Evaluate(EvaluateArgs),

    /// Enrich a data object through baton and print the enrichment
    Enrich(EnrichArgs),
}

/// Arguments for the evaluate command.
#[derive(Debug, Parser)]
pub struct EvaluateArgs {
    /// Cookie JSON file
    #[arg(long)]
    pub cookie: PathBuf,
}

/// Arguments for the enrich command.
#[derive(Debug, Parser)]
pub struct EnrichArgs {
    /// iRODS data object path
    #[arg(long)]
    pub identifier: String,

    /// Existing cookie JSON file, if the cookie already has enrichments
    #[arg(long)]
    pub cookie: Option<PathBuf>,
}
