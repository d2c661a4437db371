//! Pure tic-tac-toe game logic.
//!
//! - [`Engine`] owns a [`GameState`] and is the only thing that mutates it:
//!   [`Engine::apply_move`], [`Engine::evaluate`], [`Engine::reset`], plus the
//!   pure [`Engine::check_win`] query.
//! - [`rules`] holds board-level functions (winning lines, draws, and the
//!   non-mutating [`rules::would_win`] simulation).
//! - [`heuristic`] is the computer opponent: win, block, center, corner, random.
//!
//! ```
//! use noughts_engine::{Engine, GameMode, Outcome, Player};
//!
//! let mut engine = Engine::new(GameMode::PlayerVsPlayer);
//! engine.apply_move(4, Player::X).unwrap();
//! assert_eq!(engine.evaluate(), Outcome::Continue);
//! assert_eq!(engine.current_player(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod heuristic;
mod position;
pub mod rules;
mod types;

pub use action::{InvalidMove, Move};
pub use engine::Engine;
pub use heuristic::{Choice, ComputerPlayer, Reason, select_move};
pub use position::Position;
pub use types::{Board, GameMode, GameState, Outcome, ParseBoardError, Player, Square};
