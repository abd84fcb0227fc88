//! kasten CLI entry point.

use clap::Parser;
use kasten::cli::args::{Cli, Commands};
use kasten::cli::output::Output;
use kasten::cli::{link, notes, tags};
use kasten::config::Config;
use kasten::error::{ExitCode as KastenExitCode, KastenError};
use kasten::query::Kasten;
use kasten::vault::Vault;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    kasten::logging::init(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(code) => ExitCode::from(code.code() as u8),
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<KastenExitCode, KastenError> {
    // Load config
    let mut config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(backend) = cli.backend {
        config.search.backend = backend;
    }

    // Resolve vault path
    let vault_path = config.resolve_vault_path(cli.vault.as_deref())?;
    let vault = Vault::new(std::path::absolute(&vault_path)?)?;
    tracing::debug!(vault = %vault.root.display(), backend = ?config.search.backend, "opened vault");

    let kasten = Kasten::from_config(vault, &config);
    let output = Output::new(cli.output_format(), cli.quiet);

    match &cli.command {
        Commands::Notes(args) => notes::run(&kasten, args, &output)?,
        Commands::Tags(args) => tags::run(&kasten, args, &output)?,
        Commands::Link(args) => link::run(&kasten, args, &output)?,
    }

    let stats = kasten.stats();
    tracing::info!(
        searches = stats.searches,
        failures = stats.failures,
        malformed = stats.malformed_records,
        "done"
    );

    Ok(KastenExitCode::Success)
}
