//! Key mapping from terminal events to game keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Keys the game reacts to (quit is handled by [`should_quit`])
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Pause,
    Restart,
}

impl Key {
    pub fn is_steering(self) -> bool {
        matches!(self, Key::Left | Key::Right)
    }
}

/// Map a keyboard event to a game key.
pub fn map_key(key: KeyEvent) -> Option<Key> {
    match key.code {
        KeyCode::Left
        | KeyCode::Char('a')
        | KeyCode::Char('A')
        | KeyCode::Char('h')
        | KeyCode::Char('H') => Some(Key::Left),
        KeyCode::Right
        | KeyCode::Char('d')
        | KeyCode::Char('D')
        | KeyCode::Char('l')
        | KeyCode::Char('L') => Some(Key::Right),

        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => Some(Key::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Key::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
