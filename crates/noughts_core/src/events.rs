//! Abstract input events delivered to the controller.
//!
//! Front-ends decode whatever they read (key codes, console lines, scan
//! codes) into these before anything reaches the game.

use super::{Direction, Position};
use serde::{Deserialize, Serialize};

/// A discrete input the controller understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    /// Move the selection cursor one cell, wrapping at the edges.
    MoveSelection(Direction),
    /// Jump the selection cursor to a named cell.
    SelectCell(Position),
    /// Place the current player's mark at the selection.
    Confirm,
    /// Throw the session away and start over.
    Restart,
    /// Let the current player's move be picked at random.
    RequestAutoMove,
    /// Show the help screen.
    ShowHelp,
    /// Leave the help screen.
    ResumeGame,
}

impl InputEvent {
    /// Events that still act while the help screen covers the board.
    pub fn acts_during_help(&self) -> bool {
        matches!(
            self,
            InputEvent::ShowHelp | InputEvent::ResumeGame | InputEvent::Restart
        )
    }
}
