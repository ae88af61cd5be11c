//! Key mapping from terminal events to game keys.

use crate::types::{HeldKey, PressKey};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a physical key does in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBinding {
    /// Acts every tick while down.
    Held(HeldKey),
    /// Acts once per press.
    Press(PressKey),
}

/// Map keyboard input to a game binding.
pub fn map_key(key: KeyEvent) -> Option<KeyBinding> {
    if should_quit(key) {
        return Some(KeyBinding::Press(PressKey::Quit));
    }

    match key.code {
        // Movement
        KeyCode::Char('w') | KeyCode::Char('W') => Some(KeyBinding::Held(HeldKey::Forward)),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(KeyBinding::Held(HeldKey::Back)),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(KeyBinding::Held(HeldKey::StrafeLeft)),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(KeyBinding::Held(HeldKey::StrafeRight)),

        // Turning
        KeyCode::Left | KeyCode::Char('q') | KeyCode::Char('Q') => {
            Some(KeyBinding::Held(HeldKey::TurnLeft))
        }
        KeyCode::Right | KeyCode::Char('e') | KeyCode::Char('E') => {
            Some(KeyBinding::Held(HeldKey::TurnRight))
        }

        // Actions
        KeyCode::Char(' ') => Some(KeyBinding::Press(PressKey::Fire)),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(KeyBinding::Press(PressKey::ToggleMinimap)),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}
