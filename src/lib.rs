//! Noughts - tic-tac-toe in the terminal.
//!
//! The rules live in [`noughts_engine`]; this crate wires them to a driver.
//!
//! # Architecture
//!
//! - **Config**: TOML file plus command-line overrides
//! - **Orchestrator**: single task that owns the engine and schedules the computer's move
//! - **TUI**: renders snapshots published by the orchestrator and forwards key presses
//! - **Simulate**: headless computer-vs-computer games
//!
//! # Example
//!
//! ```no_run
//! use noughts::{GameConfig, Orchestrator};
//! use tokio::sync::mpsc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let (command_tx, command_rx) = mpsc::unbounded_channel();
//! let (event_tx, mut event_rx) = mpsc::unbounded_channel();
//! let orchestrator = Orchestrator::new(&GameConfig::default(), command_rx, event_tx);
//! tokio::spawn(orchestrator.run());
//! command_tx.send(noughts::Command::Place(4))?;
//! while let Some(event) = event_rx.recv().await {
//!     println!("{:?}", event);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod orchestrator;
mod simulate;
mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command as CliCommand};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Orchestration
pub use orchestrator::{Command, GameEvent, Orchestrator};

// Crate-level exports - Front ends
pub use simulate::{SimulationReport, run as simulate};
pub use tui::run_tui;

// Crate-level exports - Game types
pub use noughts_engine::{Board, GameMode, GameState, Outcome, Player, Position};
