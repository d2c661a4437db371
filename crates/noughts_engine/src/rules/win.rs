//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning lines, checked in this order: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first completed line and the player owning it.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, [usize; 3])> {
    WINNING_LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        match board.get(a) {
            Some(Square::Occupied(player))
                if board.get(b) == Some(Square::Occupied(player))
                    && board.get(c) == Some(Square::Occupied(player)) =>
            {
                Some((player, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

/// True iff some line is entirely `player`'s mark.
pub fn has_won(board: &Board, player: Player) -> bool {
    let mark = Some(Square::Occupied(player));
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.get(i) == mark))
}

/// True iff placing `player` at the empty square `index` completes a line.
///
/// Works on a copy; `board` is never modified. Occupied or out-of-range
/// squares never win.
pub fn would_win(board: &Board, index: usize, player: Player) -> bool {
    board.is_empty(index) && has_won(&board.with_mark(index, player), player)
}
