//! Key mapping from terminal events to front-end actions.

use crate::cursor::Direction;
use crate::types::Level;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the front-end to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Move the card cursor
    Move(Direction),
    /// Click the card under the cursor
    Flip,
    SelectLevel(Level),
    Restart,
    /// Show or hide the "How to Play" overlay
    ToggleHelp,
    /// Hide the overlay if shown
    CloseHelp,
}

/// Map keyboard input to front-end actions.
pub fn handle_key_event(key: KeyEvent) -> Option<UiAction> {
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(UiAction::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(UiAction::Move(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(UiAction::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(UiAction::Move(Direction::Down))
        }

        // Cards
        KeyCode::Enter | KeyCode::Char(' ') => Some(UiAction::Flip),

        // Level buttons
        KeyCode::Char('1') => Some(UiAction::SelectLevel(Level::Easy)),
        KeyCode::Char('2') => Some(UiAction::SelectLevel(Level::Normal)),
        KeyCode::Char('3') => Some(UiAction::SelectLevel(Level::Hard)),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(UiAction::Restart),

        // Help
        KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::F(1) => {
            Some(UiAction::ToggleHelp)
        }
        KeyCode::Esc => Some(UiAction::CloseHelp),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
