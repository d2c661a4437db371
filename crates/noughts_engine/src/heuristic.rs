//! Heuristic computer opponent.
//!
//! No look-ahead: the computer takes an immediate win, otherwise blocks an
//! immediate loss, otherwise prefers the center, then a random corner, then
//! any random square. It can be beaten with a fork.

use crate::position::Position;
use crate::rules::would_win;
use crate::types::{Board, Player};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which rule picked the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Reason {
    /// Completes a line for the computer.
    Win,
    /// Occupies the square the opponent needs to complete a line.
    Block,
    /// Takes the center.
    Center,
    /// Takes a random free corner.
    Corner,
    /// Takes any random free square.
    Random,
}

/// A selected square and the rule that selected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Choice {
    /// Board index (0-8).
    pub index: usize,
    /// Rule that produced the index.
    pub reason: Reason,
}

/// Selects a move for `player` against `player.opponent()`.
///
/// Returns `None` only when the board has no empty square. The returned
/// index is always empty on `board`, which is never modified.
#[instrument(skip(board, rng), fields(board = %board.display()))]
pub fn select_move<R: RngCore + ?Sized>(
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Option<Choice> {
    let available: Vec<usize> = board.empty_squares().collect();
    if available.is_empty() {
        return None;
    }
    let opponent = player.opponent();

    let choice = if let Some(index) = first_winning(board, &available, player) {
        Choice { index, reason: Reason::Win }
    } else if let Some(index) = first_winning(board, &available, opponent) {
        Choice { index, reason: Reason::Block }
    } else if board.is_empty(Position::Center.to_index()) {
        Choice {
            index: Position::Center.to_index(),
            reason: Reason::Center,
        }
    } else {
        let corners: Vec<usize> = Position::CORNERS
            .iter()
            .map(|p| p.to_index())
            .filter(|&i| board.is_empty(i))
            .collect();
        if corners.is_empty() {
            Choice {
                index: available[rng.random_range(0..available.len())],
                reason: Reason::Random,
            }
        } else {
            Choice {
                index: corners[rng.random_range(0..corners.len())],
                reason: Reason::Corner,
            }
        }
    };

    debug!(index = choice.index, reason = %choice.reason, "Computer chose square");
    Some(choice)
}

/// First square (ascending) where `player` would complete a line.
fn first_winning(board: &Board, available: &[usize], player: Player) -> Option<usize> {
    available
        .iter()
        .copied()
        .find(|&index| would_win(board, index, player))
}

/// A computer seat: the mark it plays and its own random source.
#[derive(Debug, Clone)]
pub struct ComputerPlayer<R = StdRng> {
    mark: Player,
    rng: R,
}

impl ComputerPlayer<StdRng> {
    /// Computer with an entropy-seeded RNG.
    pub fn new(mark: Player) -> Self {
        Self::with_rng(mark, StdRng::from_os_rng())
    }

    /// Computer with a reproducible RNG.
    pub fn seeded(mark: Player, seed: u64) -> Self {
        Self::with_rng(mark, StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> ComputerPlayer<R> {
    /// Computer drawing randomness from `rng`.
    pub fn with_rng(mark: Player, rng: R) -> Self {
        Self { mark, rng }
    }

    /// The mark this computer plays.
    pub fn mark(&self) -> Player {
        self.mark
    }

    /// Picks a square on `board`. See [`select_move`].
    pub fn select_move(&mut self, board: &Board) -> Option<Choice> {
        select_move(board, self.mark, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_full_board_has_no_move() {
        assert_eq!(select_move(&board("XOX OXX OXO"), Player::O, &mut rng()), None);
    }

    #[test]
    fn test_scans_win_then_block() {
        let choice = select_move(&board("XX_ OO_ ___"), Player::O, &mut rng());
        // O also threatens 3,4,5 so the win comes first.
        assert_eq!(choice, Some(Choice { index: 5, reason: Reason::Win }));

        let choice = select_move(&board("XX_ O__ ___"), Player::O, &mut rng());
        assert_eq!(choice, Some(Choice { index: 2, reason: Reason::Block }));
    }

    #[test]
    fn test_win_beats_block() {
        // X threatens 2 (top row); O completes the middle row at 5.
        let b = board("XX_ OO_ __X");
        let choice = select_move(&b, Player::O, &mut rng()).unwrap();
        assert_eq!(choice, Choice { index: 5, reason: Reason::Win });
    }

    #[test]
    fn test_lowest_winning_index_first() {
        // O can win at 2 (top row) or 6 (left column).
        let b = board("OO_ OXX _X_");
        let choice = select_move(&b, Player::O, &mut rng()).unwrap();
        assert_eq!(choice, Choice { index: 2, reason: Reason::Win });
    }

    #[test]
    fn test_takes_center_when_quiet() {
        let choice = select_move(&board("X__ ___ ___"), Player::O, &mut rng()).unwrap();
        assert_eq!(choice, Choice { index: 4, reason: Reason::Center });
    }

    #[test]
    fn test_takes_corner_when_center_taken() {
        for seed in 0..32 {
            let mut r = StdRng::seed_from_u64(seed);
            let choice = select_move(&board("___ _X_ ___"), Player::O, &mut r).unwrap();
            assert_eq!(choice.reason, Reason::Corner);
            assert!([0, 2, 6, 8].contains(&choice.index));
        }
    }

    #[test]
    fn test_random_fallback_only_edges_left() {
        // Center and corners taken, neither side threatens 3 or 5.
        let b = board("XOX _X_ OXO");
        for seed in 0..32 {
            let mut r = StdRng::seed_from_u64(seed);
            let choice = select_move(&b, Player::O, &mut r).unwrap();
            assert_eq!(choice.reason, Reason::Random);
            assert!([3, 5].contains(&choice.index));
        }
    }

    #[test]
    fn test_every_corner_is_reachable() {
        let b = board("___ _X_ ___");
        let picked: BTreeSet<usize> = (0..64)
            .map(|seed| {
                let mut r = StdRng::seed_from_u64(seed);
                select_move(&b, Player::O, &mut r).unwrap().index
            })
            .collect();
        assert_eq!(picked, BTreeSet::from([0, 2, 6, 8]));
    }

    #[test]
    fn test_every_fallback_square_is_reachable() {
        let b = board("XOX _X_ OXO");
        let picked: BTreeSet<usize> = (0..64)
            .map(|seed| {
                let mut r = StdRng::seed_from_u64(seed);
                select_move(&b, Player::O, &mut r).unwrap().index
            })
            .collect();
        assert_eq!(picked, BTreeSet::from([3, 5]));
    }

    #[test]
    fn test_seeded_players_agree() {
        let b = board("___ _X_ ___");
        let mut a = ComputerPlayer::seeded(Player::O, 42);
        let mut c = ComputerPlayer::seeded(Player::O, 42);
        assert_eq!(a.select_move(&b), c.select_move(&b));
        assert_eq!(a.mark(), Player::O);
    }
}
