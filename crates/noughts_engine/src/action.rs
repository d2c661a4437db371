//! Moves and the error raised when one is rejected.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A committed move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player placed their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// A move the engine refused to apply.
///
/// Always recoverable: the engine state is untouched and the caller simply
/// discards the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The index is outside 0-8.
    #[display("Position {} is out of range (must be 0-8)", index)]
    OutOfRange {
        /// Index that was requested.
        index: usize,
    },

    /// The square already holds a mark.
    #[display("Square {} is already occupied", index)]
    SquareOccupied {
        /// Index that was requested.
        index: usize,
    },

    /// A win or draw has already been detected.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for InvalidMove {}
