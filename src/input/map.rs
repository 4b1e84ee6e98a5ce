//! Key mapping from terminal events to game input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The three logical keys the game reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Left,
    Right,
    /// Space: launch, and catch-and-aim while held.
    Action,
}

/// Map a key code to a logical game key.
pub fn map_key(code: KeyCode) -> Option<InputKey> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h')
        | KeyCode::Char('H') => Some(InputKey::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l')
        | KeyCode::Char('L') => Some(InputKey::Right),
        KeyCode::Char(' ') => Some(InputKey::Action),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
