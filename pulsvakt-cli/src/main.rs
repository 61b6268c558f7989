//! ## pulsvakt-cli
//! **Unified operational interface**
//! Pulsvakt main entrypoint with live monitoring mode and a deterministic
//! seeded simulation mode.

use clap::Parser;
use pulsvakt_telemetry::logging::EventLogger;

mod commands;
mod render;

use commands::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    EventLogger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(run_args) => commands::run_monitor(run_args).await,
        Commands::Simulate(sim_args) => commands::run_simulation(sim_args).await,
    }
}
