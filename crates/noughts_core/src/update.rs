//! Output intents emitted after every handled event.
//!
//! An [`Update`] says what a renderer has to redraw. It carries no
//! coordinates, colours or fonts.

use super::rules::WinningLine;
use super::session::{GameSession, GameStatus, View};
use super::{Cell, InputEvent, Move, Player, Position};
use serde::{Deserialize, Serialize};

/// What an event did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// The cursor moved (or was re-selected); the board is untouched.
    SelectionMoved,
    /// A mark was placed at the player's request.
    Placed(Move),
    /// A mark was placed by the random auto mover.
    AutoPlaced(Move),
    /// The selected cell was already taken; nothing changed.
    Rejected(Position),
    /// The event does not apply in the current state; nothing changed.
    Ignored,
    /// The session was reset.
    Restarted,
    /// The help screen was opened.
    HelpShown,
    /// The help screen was closed.
    HelpHidden,
}

impl Effect {
    /// Returns the move if this effect placed a mark.
    pub fn placed(&self) -> Option<Move> {
        match self {
            Effect::Placed(mov) | Effect::AutoPlaced(mov) => Some(*mov),
            _ => None,
        }
    }
}

/// A cell whose contents changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellChange {
    /// Where the change happened.
    pub position: Position,
    /// What the cell holds now.
    pub cell: Cell,
}

/// Everything a renderer needs after one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    /// The event that was handled.
    pub event: InputEvent,
    /// What the event did.
    pub effect: Effect,
    /// Cells that changed, in board order.
    pub changes: Vec<CellChange>,
    /// Selected cell after the event.
    pub selection: Position,
    /// Screen to show after the event.
    pub view: View,
    /// Lifecycle status after the event.
    pub status: GameStatus,
    /// Player to move (the last mover once the game is over).
    pub turn: Player,
    /// Completed line to highlight when the game was won.
    pub winning_line: Option<WinningLine>,
}

impl Update {
    pub(crate) fn new(
        event: InputEvent,
        effect: Effect,
        changes: Vec<CellChange>,
        session: &GameSession,
    ) -> Self {
        Self {
            event,
            effect,
            changes,
            selection: session.selection(),
            view: session.view(),
            status: session.status(),
            turn: session.turn(),
            winning_line: session.winning_line(),
        }
    }

    /// Returns true when the event changed nothing at all.
    pub fn is_noop(&self) -> bool {
        matches!(self.effect, Effect::Ignored | Effect::Rejected(_))
    }

    /// Status line for the renderer.
    pub fn status_text(&self) -> String {
        status_text(self.status, self.turn)
    }
}

/// Status line for a game in `status` with `turn` to move.
pub fn status_text(status: GameStatus, turn: Player) -> String {
    match status {
        GameStatus::Ongoing => format!("Player {}'s Turn!", turn),
        GameStatus::Won(player) => format!("Player {} Wins!", player),
        GameStatus::Draw => "It's a tie!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(GameStatus::Ongoing, Player::O), "Player O's Turn!");
        assert_eq!(status_text(GameStatus::Won(Player::X), Player::X), "Player X Wins!");
        assert_eq!(status_text(GameStatus::Draw, Player::X), "It's a tie!");
    }
}
