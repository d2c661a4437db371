//! Application state and logic.

use crate::orchestrator::GameEvent;
use noughts_engine::{GameMode, GameState, Position, rules};
use tracing::debug;

/// What the UI knows: the latest snapshot plus local view state.
pub struct App {
    state: GameState,
    cursor: Position,
    thinking: bool,
    notice: Option<String>,
}

impl App {
    /// Creates a new application showing an empty board.
    pub fn new(mode: GameMode) -> Self {
        Self {
            state: GameState::new(mode),
            cursor: Position::Center,
            thinking: false,
            notice: None,
        }
    }

    /// Latest game snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Highlighted square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the highlight.
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    /// Squares of the completed line, if the game was won.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        rules::winning_line(self.state.board()).map(|(_, line)| line)
    }

    /// Handles a game event from the orchestrator.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::StateChanged(state) => {
                if state.history().is_empty() {
                    self.notice = None;
                    self.thinking = false;
                }
                self.state = state;
            }
            GameEvent::ComputerThinking => {
                self.thinking = true;
            }
            GameEvent::ComputerMoved(choice) => {
                self.thinking = false;
                if let Some(pos) = Position::from_index(choice.index) {
                    self.notice =
                        Some(format!("Computer played {} ({})", pos.label(), choice.reason));
                }
            }
            GameEvent::MoveRejected(e) => {
                self.notice = Some(e.to_string());
            }
        }
    }

    /// Status line derived from the snapshot.
    pub fn status_message(&self) -> String {
        let outcome = self.state.outcome();
        if !outcome.is_terminal() {
            return if self.thinking {
                "Computer is thinking...".to_string()
            } else {
                format!("Player {}'s turn", self.state.current_player())
            };
        }
        match outcome.winner() {
            Some(winner) => format!("Player {} wins! Press 'r' to play again.", winner),
            None => "Draw! Press 'r' to play again.".to_string(),
        }
    }

    /// Last transient message (rejected move, computer's choice).
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_engine::{Choice, Engine, InvalidMove, Reason};

    #[test]
    fn test_status_follows_snapshots() {
        let mut app = App::new(GameMode::PlayerVsPlayer);
        assert_eq!(app.status_message(), "Player X's turn");

        let mut engine = Engine::new(GameMode::PlayerVsPlayer);
        for index in [0, 3, 1, 4, 2] {
            engine.play(index).unwrap();
        }
        app.handle_event(GameEvent::StateChanged(engine.snapshot()));
        assert_eq!(app.status_message(), "Player X wins! Press 'r' to play again.");
        assert_eq!(app.winning_line(), Some([0, 1, 2]));
    }

    #[test]
    fn test_thinking_then_moved() {
        let mut app = App::new(GameMode::PlayerVsComputer);
        app.handle_event(GameEvent::ComputerThinking);
        assert_eq!(app.status_message(), "Computer is thinking...");
        app.handle_event(GameEvent::ComputerMoved(Choice { index: 4, reason: Reason::Center }));
        assert_eq!(app.notice(), Some("Computer played Center (Center)"));
        assert_eq!(app.status_message(), "Player X's turn");
    }

    #[test]
    fn test_rejection_sets_notice() {
        let mut app = App::new(GameMode::PlayerVsPlayer);
        app.handle_event(GameEvent::MoveRejected(InvalidMove::SquareOccupied { index: 4 }));
        assert_eq!(app.notice(), Some("Square 4 is already occupied"));
    }
}
