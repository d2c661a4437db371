//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_engine::GameMode;
use std::path::PathBuf;

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Starting mode: pvp or pvc (overrides the config file)
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Computer thinking delay in milliseconds (overrides the config file)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Pit the computer against itself and print the tally
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for both computer players
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_parses_mode() {
        let cli = Cli::try_parse_from(["noughts", "play", "--mode", "pvc", "--seed", "3"]).unwrap();
        match cli.command {
            Command::Play { mode, seed, .. } => {
                assert_eq!(mode, Some(GameMode::PlayerVsComputer));
                assert_eq!(seed, Some(3));
            }
            Command::Simulate { .. } => panic!("expected play"),
        }
    }

    #[test]
    fn test_bad_mode_rejected() {
        assert!(Cli::try_parse_from(["noughts", "play", "--mode", "pve"]).is_err());
    }
}
