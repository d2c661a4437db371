//! Noughts - unified CLI.

use anyhow::Result;
use clap::Parser;
use noughts::{Cli, CliCommand, GameConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        CliCommand::Play {
            mode,
            delay_ms,
            seed,
            config,
        } => {
            let config = GameConfig::load(config.as_deref())?.with_overrides(mode, delay_ms, seed);
            noughts::run_tui(config).await
        }
        CliCommand::Simulate { games, seed, json } => run_simulation(games, seed, json),
    }
}

/// Run computer-vs-computer games and print the tally
fn run_simulation(games: u32, seed: u64, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(games, seed, "Starting simulation");
    let report = noughts::simulate(games, seed);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
