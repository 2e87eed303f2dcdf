use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::control::ControlEvent;
use crate::game::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Control(ControlEvent),
    Restart,
    Quit,
    None,
}

/// Translates raw key events into control events. Anything unrecognized
/// maps to `None` and is dropped.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Control(ControlEvent::Turn(Direction::Up)),
            KeyCode::Down => KeyAction::Control(ControlEvent::Turn(Direction::Down)),
            KeyCode::Left => KeyAction::Control(ControlEvent::Turn(Direction::Left)),
            KeyCode::Right => KeyAction::Control(ControlEvent::Turn(Direction::Right)),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => {
                KeyAction::Control(ControlEvent::Turn(Direction::Up))
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                KeyAction::Control(ControlEvent::Turn(Direction::Down))
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                KeyAction::Control(ControlEvent::Turn(Direction::Left))
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                KeyAction::Control(ControlEvent::Turn(Direction::Right))
            }

            // Controls
            KeyCode::Char('p') | KeyCode::Char('P') => {
                KeyAction::Control(ControlEvent::TogglePause)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
