//! Moves and the ways a placement can be refused.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A committed move: a player placing their mark at a position.
///
/// The session keeps every move it accepted so the board can be replayed
/// when checking invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player placed their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// A placement the board refused.
///
/// The controller treats this as a UI-level rejection: the event is dropped
/// and the session stays as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum IllegalMove {
    /// The index does not name a cell.
    #[display("Position {} is off the board (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),
}

impl IllegalMove {
    /// The raw index the caller tried to claim.
    pub fn index(&self) -> usize {
        match self {
            IllegalMove::OutOfRange(index) => *index,
            IllegalMove::Occupied(pos) => pos.to_index(),
        }
    }
}
