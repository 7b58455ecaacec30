//! HGI Cookie Monster CLI - Main entry point

use clap::Parser;
use cookiemonster_cli::commands;
use cookiemonster_cli::setup::{baton_retriever, build_registry, init_logging, load_config};
use cookiemonster_cli::{Cli, CliError, Command};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> cookiemonster_cli::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.ok_or(CliError::MissingConfig)?;
    let config = load_config(&config_path)?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::CheckConfig => commands::execute_check_config(&config, &mut stdout)?,
        Command::Evaluate(args) => {
            let registry = build_registry(&config, baton_retriever(&config))?;
            commands::execute_evaluate(args, &registry, &mut stdout)?;
        }
        Command::Enrich(args) => {
            let registry = build_registry(&config, baton_retriever(&config))?;
            commands::execute_enrich(args, &registry, &mut stdout)?;
        }
    }

    Ok(())
}
