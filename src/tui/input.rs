//! Keyboard handling: cursor movement and key-to-command mapping.

use crate::orchestrator::Command;
use crossterm::event::KeyCode;
use noughts_engine::{GameMode, Position};

/// What a key press asks the UI to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward a command to the orchestrator.
    Send(Command),
    /// Move the highlight.
    Cursor(Position),
    /// Leave the UI.
    Quit,
}

/// Maps a key to an action given the current cursor.
pub fn key_action(key: KeyCode, cursor: Position) -> Option<KeyAction> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Char('r') => Some(KeyAction::Send(Command::Reset)),
        KeyCode::Char('p') => Some(KeyAction::Send(Command::SwitchMode(
            GameMode::PlayerVsPlayer,
        ))),
        KeyCode::Char('c') => Some(KeyAction::Send(Command::SwitchMode(
            GameMode::PlayerVsComputer,
        ))),
        KeyCode::Enter | KeyCode::Char(' ') => {
            Some(KeyAction::Send(Command::Place(cursor.to_index())))
        }
        KeyCode::Char(c) => {
            Position::from_key(c).map(|pos| KeyAction::Send(Command::Place(pos.to_index())))
        }
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(KeyAction::Cursor(move_cursor(cursor, key)))
        }
        _ => None,
    }
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
    }

    #[test]
    fn test_keys_map_to_commands() {
        assert_eq!(
            key_action(KeyCode::Char('7'), Position::Center),
            Some(KeyAction::Send(Command::Place(6)))
        );
        assert_eq!(
            key_action(KeyCode::Enter, Position::TopRight),
            Some(KeyAction::Send(Command::Place(2)))
        );
        assert_eq!(
            key_action(KeyCode::Char('c'), Position::Center),
            Some(KeyAction::Send(Command::SwitchMode(GameMode::PlayerVsComputer)))
        );
        assert_eq!(key_action(KeyCode::Char('q'), Position::Center), Some(KeyAction::Quit));
        assert_eq!(key_action(KeyCode::Char('z'), Position::Center), None);
    }
}
