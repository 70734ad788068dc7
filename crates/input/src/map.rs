//! Key mapping from terminal events to game actions.

use crate::types::{GameAction, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to in-game actions.
///
/// Cursor movement follows grid axes (the view rotates the board, so the
/// on-screen direction is diagonal). vim and WASD bindings are aliases
/// for the arrows.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Cursor
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::CursorUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::CursorDown)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::CursorLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::CursorRight)
        }

        // Pick up / drop
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameAction::Select),

        // Release the held tile without moving it
        KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('X') => Some(GameAction::Cancel),

        // Back to the menu (retire / play again)
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Menu),

        _ => None,
    }
}

/// Map a menu key to a board size, `2` through `9`.
pub fn menu_size_key(key: KeyEvent) -> Option<u8> {
    match key.code {
        KeyCode::Char(c) => {
            let n = c.to_digit(10)? as u8;
            (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&n).then_some(n)
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
