//! tb - bulk issue mutation and verification
//!
//! # Examples
//!
//! ```bash
//! # Raise priority on three issues and confirm it stuck
//! tb bulk-update --issue PROJ-1 --issue PROJ-2 --issue 3-42 --update '{"priority": "Critical"}'
//!
//! # Link issues, resolving internal ids first
//! tb bulk-link --link PROJ-1:3-42 --link "PROJ-2:PROJ-3:depends on" --pretty
//!
//! # Most critical unresolved issues
//! tb rank --query "project: PROJ #Unresolved" --top 10
//! ```

use tb_cli::{Cli, Outcome, logger, run, run_offline};
use tb_client::Client;
use tb_config::Config;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Dry runs need neither config nor tracker
    if let Some(result) = run_offline(&cli.command) {
        return report(result, cli.pretty);
    }

    let _ = dotenvy::dotenv();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(
        config.logging.level,
        config.logging.file.as_deref().map(Path::new),
        config.logging.colored,
    ) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Starting tb v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let client = match Client::from_config(&config.tracker, &config.retry) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = run(cli.command, &config, Arc::new(client)).await;
    report(result, cli.pretty)
}

/// Load config, apply command-line overrides, then validate
fn load_config(cli: &Cli) -> tb_cli::Result<Config> {
    let mut config = Config::load()?;

    if let Some(ref server) = cli.server {
        config.tracker.base_url = server.clone();
    }
    if let Some(ref token) = cli.token {
        config.tracker.token = Some(token.clone());
    }

    config.validate()?;
    Ok(config)
}

/// Print the outcome as JSON on stdout; failures of any kind exit non-zero
fn report(result: tb_cli::Result<Outcome>, pretty: bool) -> ExitCode {
    match result {
        Ok(outcome) => {
            let output = if pretty {
                serde_json::to_string_pretty(&outcome.value)
            } else {
                serde_json::to_string(&outcome.value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    if outcome.has_failures {
                        ExitCode::FAILURE
                    } else {
                        ExitCode::SUCCESS
                    }
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
