//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use game_core::Direction;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Slide the board.
    Move(Direction),
    /// Discard the board and start over.
    NewGame,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into game commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Left => KeyAction::Move(Direction::Left),
            KeyCode::Right => KeyAction::Move(Direction::Right),
            KeyCode::Up => KeyAction::Move(Direction::Up),
            KeyCode::Down => KeyAction::Move(Direction::Down),
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        let ch = raw.to_ascii_lowercase();
        match ch {
            'q' => KeyAction::Quit,
            'n' => KeyAction::NewGame,
            'h' | 'a' => KeyAction::Move(Direction::Left),
            'j' | 's' => KeyAction::Move(Direction::Down),
            'k' | 'w' => KeyAction::Move(Direction::Up),
            'l' | 'd' => KeyAction::Move(Direction::Right),
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_movement_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('h'))),
            KeyAction::Move(Direction::Left)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('W'))),
            KeyAction::Move(Direction::Up)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('s'))),
            KeyAction::Move(Direction::Down)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('l'))),
            KeyAction::Move(Direction::Right)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Left)),
            KeyAction::Move(Direction::Left)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Down)),
            KeyAction::Move(Direction::Down)
        );
    }

    #[test]
    fn maps_new_game_and_quit() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('n'))),
            KeyAction::NewGame
        );
        assert_eq!(handler.handle_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.handle_key(key(KeyCode::Esc)), KeyAction::Quit);

        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        assert_eq!(handler.handle_key(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn ignores_unknown_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('x'))), KeyAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::Enter)), KeyAction::None);
    }
}
