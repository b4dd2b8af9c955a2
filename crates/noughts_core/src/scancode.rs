//! PS/2 keyboard decoding (scan code set 2).
//!
//! A keyboard sends a make code when a key goes down and `0xF0` followed by
//! the same code when it comes back up. Arrow keys are extended keys and
//! arrive behind an `0xE0` prefix. Only make codes produce events.

use super::{Direction, InputEvent, Position};
use tracing::{debug, instrument, trace};

/// Prefix announcing a key release.
pub const BREAK_PREFIX: u8 = 0xF0;
/// Prefix announcing an extended key.
pub const EXTENDED_PREFIX: u8 = 0xE0;

/// Make codes for the digit row, `1` through `9`.
const DIGITS: [u8; 9] = [0x16, 0x1E, 0x26, 0x25, 0x2E, 0x36, 0x3D, 0x3E, 0x46];

/// Stateful decoder for a stream of scan code bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanCodeDecoder {
    releasing: bool,
    extended: bool,
}

impl ScanCodeDecoder {
    /// Creates a decoder expecting the start of a key sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one byte and returns the event it completes, if any.
    #[instrument(skip(self))]
    pub fn feed(&mut self, byte: u8) -> Option<InputEvent> {
        match byte {
            BREAK_PREFIX => {
                self.releasing = true;
                None
            }
            EXTENDED_PREFIX => {
                self.extended = true;
                None
            }
            code => {
                let released = std::mem::take(&mut self.releasing);
                let extended = std::mem::take(&mut self.extended);
                if released {
                    trace!("Key released");
                    return None;
                }
                let event = if extended {
                    decode_extended(code)
                } else {
                    decode_make(code)
                };
                if event.is_none() {
                    debug!("Unmapped scan code");
                }
                event
            }
        }
    }

    /// Decodes a whole byte sequence into the events it contains.
    pub fn decode_all(&mut self, bytes: impl IntoIterator<Item = u8>) -> Vec<InputEvent> {
        bytes.into_iter().filter_map(|b| self.feed(b)).collect()
    }
}

fn decode_make(code: u8) -> Option<InputEvent> {
    let event = match code {
        0x1D => InputEvent::MoveSelection(Direction::Up),    // W
        0x1B => InputEvent::MoveSelection(Direction::Down),  // S
        0x1C => InputEvent::MoveSelection(Direction::Left),  // A
        0x23 => InputEvent::MoveSelection(Direction::Right), // D
        0x5A => InputEvent::Confirm,                         // Enter
        0x29 => InputEvent::Restart,                         // Space
        0x33 => InputEvent::ShowHelp,                        // H
        0x76 => InputEvent::ResumeGame,                      // Esc
        0x21 => InputEvent::RequestAutoMove,                 // C
        other => {
            let index = DIGITS.iter().position(|&d| d == other)?;
            InputEvent::SelectCell(Position::from_index(index)?)
        }
    };
    Some(event)
}

fn decode_extended(code: u8) -> Option<InputEvent> {
    let direction = match code {
        0x75 => Direction::Up,
        0x72 => Direction::Down,
        0x6B => Direction::Left,
        0x74 => Direction::Right,
        _ => return None,
    };
    Some(InputEvent::MoveSelection(direction))
}
