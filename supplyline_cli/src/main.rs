#![warn(clippy::pedantic)]

mod args;
mod commands;
mod error;
mod output;
mod state;

use crate::args::{Cli, Commands};
use crate::error::MainError;
use crate::state::AppState;
use clap::Parser;
use shared::{init_tracing, load_config_from, shutdown_listener};
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = ?e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), MainError> {
    let config = load_config_from(&cli.config)?;
    init_tracing(&config.logging)?;
    debug!(config = %cli.config.display(), base_url = %config.api.base_url, "loaded configuration");

    // Ctrl+C / SIGTERM cancel whatever request is in flight.
    let shutdown = CancellationToken::new();
    let signal_handle = tokio::spawn(shutdown_listener(Some(shutdown.clone())));

    let state = AppState::new(config, cli.output, shutdown)?;
    let result = dispatch(cli.command, &state).await;
    signal_handle.abort();
    result
}

async fn dispatch(command: Commands, state: &AppState) -> Result<(), MainError> {
    match command {
        Commands::Auth(cmd) => commands::auth::run(cmd, state).await,
        Commands::Chemicals(cmd) => commands::chemicals::run(cmd, state).await,
        Commands::Tools(cmd) => commands::tools::run(cmd, state).await,
        Commands::Warehouses(cmd) => commands::warehouses::run(cmd, state).await,
        Commands::Kits(cmd) => commands::kits::run(cmd, state).await,
        Commands::Calibrations(cmd) => commands::calibrations::run(cmd, state).await,
        Commands::CycleCounts(cmd) => commands::cycle_counts::run(cmd, state).await,
        Commands::Dashboard => commands::dashboard::run(state).await,
        Commands::Export(args) => commands::export::run(args, state).await,
    }
}
