//! Game engine: the sole owner and mutator of a [`GameState`].

use crate::action::{InvalidMove, Move};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameMode, GameState, Outcome, Player};
use tracing::{debug, info, instrument};

/// Tic-tac-toe rules engine.
///
/// Moves are committed in two steps, [`apply_move`](Self::apply_move) then
/// [`evaluate`](Self::evaluate); [`play`](Self::play) does both for the
/// player whose turn it is.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    state: GameState,
}

impl Engine {
    /// Creates a new game in the given mode.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self {
            state: GameState::new(mode),
        }
    }

    /// Places `player`'s mark at `index`.
    ///
    /// Does not evaluate the board or pass the turn.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the game is over, the index is outside 0-8,
    /// or the square is occupied. The state is left unchanged.
    #[instrument(skip(self), fields(active = self.state.active))]
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<(), InvalidMove> {
        if !self.state.active {
            return Err(InvalidMove::GameOver);
        }
        let position = Position::from_index(index).ok_or(InvalidMove::OutOfRange { index })?;
        if !self.state.board.is_empty(index) {
            return Err(InvalidMove::SquareOccupied { index });
        }

        self.state.board.place(index, player);
        self.state.history.push(Move::new(player, position));
        debug!(%position, %player, "Mark placed");
        Ok(())
    }

    /// Scans the winning lines and updates the game status.
    ///
    /// A win or draw deactivates the game; otherwise the turn passes to the
    /// other mark.
    #[instrument(skip(self))]
    pub fn evaluate(&mut self) -> Outcome {
        if let Some(winner) = rules::check_winner(&self.state.board) {
            self.state.active = false;
            info!(%winner, "Game won");
            return Outcome::Won(winner);
        }
        if rules::is_full(&self.state.board) {
            self.state.active = false;
            info!("Game drawn");
            return Outcome::Draw;
        }
        self.state.current_player = self.state.current_player.opponent();
        Outcome::Continue
    }

    /// Applies the current player's mark at `index` and evaluates the result.
    ///
    /// # Errors
    ///
    /// Same as [`apply_move`](Self::apply_move); on error nothing changes,
    /// including the turn.
    #[instrument(skip(self), fields(player = %self.state.current_player))]
    pub fn play(&mut self, index: usize) -> Result<Outcome, InvalidMove> {
        self.apply_move(index, self.state.current_player)?;
        Ok(self.evaluate())
    }

    /// Clears the board and starts a new game in `mode`. X moves first.
    #[instrument(skip(self))]
    pub fn reset(&mut self, mode: GameMode) {
        self.state = GameState::new(mode);
        info!(%mode, "Game reset");
    }

    /// True iff some winning line is entirely `player`'s. Never mutates.
    pub fn check_win(&self, player: Player) -> bool {
        rules::has_won(&self.state.board, player)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    /// Returns whether moves are still accepted.
    pub fn is_active(&self) -> bool {
        self.state.active
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.state.mode
    }

    /// Returns the moves committed since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.state.history
    }

    /// Borrows the full state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Clones the full state for a presentation layer.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }
}
