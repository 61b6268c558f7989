use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use pulsvakt_config::PulsvaktConfig;
use pulsvakt_engine::{validate_digest, Monitor, MonitorState, Simulation};
use pulsvakt_telemetry::MetricsRecorder;

use crate::render::ConsoleRenderer;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run live monitoring with an interactive control surface
    Run(RunArgs),
    /// Run a deterministic seeded simulation
    Simulate(SimulateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Optional configuration file; defaults and PULSVAKT_* env apply otherwise
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Optional configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Number of ticks to simulate
    #[arg(long, default_value_t = 10)]
    pub ticks: usize,
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Expected final state digest (hex); a mismatch fails the run
    #[arg(long)]
    pub validate_hash: Option<String>,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<PulsvaktConfig> {
    let config = match path {
        Some(path) => PulsvaktConfig::load_from_path(path)?,
        None => PulsvaktConfig::load()?,
    };
    Ok(config)
}

/// Live mode: periodic ticks drive the console renderer while stdin accepts
/// the dashboard's control shortcuts (`s` start/stop toggle, `r` reset,
/// `q` quit).
pub async fn run_monitor(args: RunArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_ref())?;
    let metrics = Arc::new(MetricsRecorder::new());
    let monitor = Monitor::new(&config, Arc::new(ConsoleRenderer), metrics.clone());

    monitor.start().await;
    info!("Commands: s = start/stop toggle, r = reset, q = quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "s" => match monitor.state() {
                MonitorState::Running => monitor.stop().await,
                MonitorState::Stopped => monitor.start().await,
            },
            "r" => monitor.reset().await,
            "q" => break,
            "" => {}
            other => warn!("Unknown command: {other}"),
        }
    }

    monitor.stop().await;
    println!("{}", metrics.gather_metrics()?);
    Ok(())
}

/// Simulation mode: seeded deterministic run, printing the final view and
/// state digest, optionally validating the digest.
pub async fn run_simulation(args: SimulateArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_ref())?;
    let mut simulation = Simulation::new(args.seed, &config);
    let digest = simulation.run(args.ticks);

    let view = simulation.view();
    info!(
        users = %view.users,
        revenue = %view.revenue,
        orders = %view.orders,
        performance = %view.performance,
        "Simulation complete after {} ticks",
        args.ticks
    );
    println!("{digest}");

    if let Some(expected) = args.validate_hash.as_deref() {
        validate_digest(expected, &digest)?;
        info!("Digest validation successful");
    }
    Ok(())
}
