//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The engine and the
//! computer player both evaluate positions through these, so neither ever
//! needs to mutate shared state to ask "what if".

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, check_winner, has_won, winning_line, would_win};
