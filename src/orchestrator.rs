//! Match orchestration: one task owns the engine and serializes every move.
//!
//! The presentation layer sends [`Command`]s and renders the [`GameEvent`]s
//! it gets back; it never touches the engine directly.

use crate::config::GameConfig;
use anyhow::Result;
use noughts_engine::{Choice, ComputerPlayer, Engine, GameMode, GameState, InvalidMove, Player};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, instrument, warn};

/// Requests from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current player's mark at a board index.
    Place(usize),
    /// Start over in the current mode.
    Reset,
    /// Start over in another mode.
    SwitchMode(GameMode),
    /// Stop the orchestrator.
    Quit,
}

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Game state updated.
    StateChanged(GameState),
    /// The computer's move is scheduled.
    ComputerThinking,
    /// The computer committed a move.
    ComputerMoved(Choice),
    /// A human move was refused; nothing changed.
    MoveRejected(InvalidMove),
}

/// Owns the [`Engine`] and drives it from commands and the computer timer.
pub struct Orchestrator {
    engine: Engine,
    computer: ComputerPlayer,
    delay: Duration,
    commands: mpsc::UnboundedReceiver<Command>,
    events: mpsc::UnboundedSender<GameEvent>,
    /// When the scheduled computer move fires, if one is scheduled.
    computer_due: Option<Instant>,
}

impl Orchestrator {
    /// Creates an orchestrator for a fresh game.
    pub fn new(
        config: &GameConfig,
        commands: mpsc::UnboundedReceiver<Command>,
        events: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        let computer = match config.seed() {
            Some(seed) => ComputerPlayer::seeded(Player::O, *seed),
            None => ComputerPlayer::new(Player::O),
        };
        Self {
            engine: Engine::new(*config.mode()),
            computer,
            delay: config.computer_delay(),
            commands,
            events,
            computer_due: None,
        }
    }

    /// Runs until [`Command::Quit`] arrives or the command channel closes.
    ///
    /// # Errors
    ///
    /// Fails if the event receiver has been dropped.
    #[instrument(skip(self), fields(mode = %self.engine.mode()))]
    pub async fn run(mut self) -> Result<()> {
        info!("Starting game orchestration");
        self.publish()?;

        loop {
            let due = self.computer_due;
            tokio::select! {
                command = self.commands.recv() => match command {
                    None | Some(Command::Quit) => {
                        info!("Orchestrator stopping");
                        return Ok(());
                    }
                    Some(command) => self.handle(command)?,
                },
                () = sleep_until(due.unwrap_or_else(Instant::now)), if due.is_some() => {
                    self.computer_due = None;
                    self.computer_turn()?;
                }
            }
        }
    }

    #[instrument(skip(self))]
    fn handle(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Place(index) => self.human_turn(index),
            Command::Reset => self.reset(self.engine.mode()),
            Command::SwitchMode(mode) => self.reset(mode),
            Command::Quit => Ok(()),
        }
    }

    fn human_turn(&mut self, index: usize) -> Result<()> {
        if self.engine.state().is_computer_turn() {
            debug!(index, "Ignoring input while the computer is to move");
            return Ok(());
        }

        match self.engine.play(index) {
            Ok(outcome) => {
                debug!(index, ?outcome, "Human move applied");
                self.publish()?;
                if self.engine.state().is_computer_turn() {
                    self.computer_due = Some(Instant::now() + self.delay);
                    self.events.send(GameEvent::ComputerThinking)?;
                }
            }
            Err(e) => {
                warn!(index, error = %e, "Move rejected");
                self.events.send(GameEvent::MoveRejected(e))?;
            }
        }
        Ok(())
    }

    fn computer_turn(&mut self) -> Result<()> {
        if !self.engine.state().is_computer_turn() {
            return Ok(());
        }
        let Some(choice) = self.computer.select_move(self.engine.board()) else {
            return Ok(());
        };

        match self.engine.play(choice.index) {
            Ok(outcome) => {
                info!(index = choice.index, reason = %choice.reason, ?outcome, "Computer moved");
                self.events.send(GameEvent::ComputerMoved(choice))?;
                self.publish()
            }
            Err(e) => {
                warn!(index = choice.index, error = %e, "Computer move rejected");
                Ok(())
            }
        }
    }

    fn reset(&mut self, mode: GameMode) -> Result<()> {
        self.computer_due = None;
        self.engine.reset(mode);
        self.publish()
    }

    fn publish(&self) -> Result<()> {
        self.events
            .send(GameEvent::StateChanged(self.engine.snapshot()))?;
        Ok(())
    }
}
