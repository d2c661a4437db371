//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::action::Move;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second; the computer in player-vs-computer mode).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Number of squares on the board.
    pub const SIZE: usize = 9;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; Self::SIZE],
        }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Indices of empty squares in ascending order.
    pub fn empty_squares(&self) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, sq)| **sq == Square::Empty)
            .map(|(i, _)| i)
    }

    /// Returns a copy of this board with `player`'s mark at `index`.
    ///
    /// The receiver is left untouched. Callers are expected to pass an
    /// in-range index; out-of-range indices yield an unchanged copy.
    pub fn with_mark(&self, index: usize, player: Player) -> Self {
        let mut next = *self;
        if let Some(sq) = next.squares.get_mut(index) {
            *sq = Square::Occupied(player);
        }
        next
    }

    /// Writes a mark. Bounds and emptiness are checked by the engine.
    pub(crate) fn place(&mut self, index: usize, player: Player) {
        self.squares[index] = Square::Occupied(player);
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key so the grid doubles as a keypad legend.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Error returned when a board literal cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// A character other than `X`, `O`, `.`, `_` or `-` was found.
    #[display("Unexpected character {:?} in board", _0)]
    UnexpectedChar(char),
    /// The literal did not describe exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses a row-major literal such as `"XX_ OO_ ___"`.
    ///
    /// Whitespace and `|` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(Self::SIZE);
        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let sq = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '_' | '-' => Square::Empty,
                other => return Err(ParseBoardError::UnexpectedChar(other)),
            };
            squares.push(sq);
        }
        let len = squares.len();
        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|_| ParseBoardError::WrongLength(len))?;
        Ok(Self { squares })
    }
}

/// Who controls the second seat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans take turns on the same board.
    #[default]
    #[serde(rename = "pvp")]
    #[strum(to_string = "Player vs Player", serialize = "pvp")]
    PlayerVsPlayer,
    /// A human plays X against the computer playing O.
    #[serde(rename = "pvc")]
    #[strum(to_string = "Player vs Computer", serialize = "pvc")]
    PlayerVsComputer,
}

impl GameMode {
    /// Mark played by the computer in this mode, if any.
    pub fn computer_mark(self) -> Option<Player> {
        match self {
            GameMode::PlayerVsPlayer => None,
            GameMode::PlayerVsComputer => Some(Player::O),
        }
    }
}

/// Result of evaluating the board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No win and empty squares remain; the turn passed to the other mark.
    Continue,
    /// A player completed a line.
    Won(Player),
    /// The board filled up without a winning line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::Continue | Outcome::Draw => None,
        }
    }

    /// Returns true if the game ended (win or draw).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continue)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Continue => write!(f, "In progress"),
            Outcome::Won(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    pub(crate) board: Board,
    /// Current player to move.
    pub(crate) current_player: Player,
    /// False once a win or draw has been detected.
    pub(crate) active: bool,
    /// Who controls the second seat.
    pub(crate) mode: GameMode,
    /// Moves committed since the last reset.
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a fresh game in the given mode.
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            active: true,
            mode,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns whether moves are still accepted.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Outcome shown by this snapshot.
    pub fn outcome(&self) -> Outcome {
        if self.active {
            return Outcome::Continue;
        }
        match crate::rules::check_winner(&self.board) {
            Some(winner) => Outcome::Won(winner),
            None => Outcome::Draw,
        }
    }

    /// True when the computer seat holds the turn in an active game.
    pub fn is_computer_turn(&self) -> bool {
        self.active && self.mode.computer_mark() == Some(self.current_player)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
