//! Keyboard input for the terminal UI.

use crate::ports::InputSource;
use anyhow::Result;
use crossterm::event::KeyCode;
use noughts_core::{Direction, InputEvent, Position};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// What a key press means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward this event to the controller.
    Event(InputEvent),
    /// Leave the game.
    Quit,
    /// Key has no binding.
    Unmapped,
}

/// Maps a key to its action.
pub fn map_key(key: KeyCode) -> KeyAction {
    let event = match key {
        KeyCode::Up | KeyCode::Char('w' | 'W') => InputEvent::MoveSelection(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => InputEvent::MoveSelection(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => InputEvent::MoveSelection(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => InputEvent::MoveSelection(Direction::Right),
        KeyCode::Enter => InputEvent::Confirm,
        KeyCode::Char(' ') => InputEvent::Restart,
        KeyCode::Char('h' | 'H') => InputEvent::ShowHelp,
        KeyCode::Esc => InputEvent::ResumeGame,
        KeyCode::Char('c' | 'C') => InputEvent::RequestAutoMove,
        KeyCode::Char('q' | 'Q') => return KeyAction::Quit,
        KeyCode::Char(c) => {
            let cell = c
                .to_digit(10)
                .and_then(|digit| Position::from_number(digit as usize));
            match cell {
                Some(pos) => InputEvent::SelectCell(pos),
                None => return KeyAction::Unmapped,
            }
        }
        _ => return KeyAction::Unmapped,
    };
    KeyAction::Event(event)
}

/// Key presses forwarded from the terminal reader thread.
pub struct KeyboardInput {
    input_rx: mpsc::UnboundedReceiver<KeyCode>,
}

impl KeyboardInput {
    /// Creates a keyboard input.
    pub fn new(input_rx: mpsc::UnboundedReceiver<KeyCode>) -> Self {
        Self { input_rx }
    }
}

#[async_trait::async_trait]
impl InputSource for KeyboardInput {
    async fn next_event(&mut self) -> Result<Option<InputEvent>> {
        // Wait for keyboard input
        while let Some(key) = self.input_rx.recv().await {
            match map_key(key) {
                KeyAction::Event(event) => return Ok(Some(event)),
                KeyAction::Quit => {
                    info!("User quit");
                    return Ok(None);
                }
                KeyAction::Unmapped => debug!(?key, "Ignoring unmapped key"),
            }
        }

        info!("Keyboard channel closed");
        Ok(None)
    }

    fn name(&self) -> &str {
        "keyboard"
    }
}
