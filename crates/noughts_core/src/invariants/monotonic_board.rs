//! Monotonic board invariant: cells never change once set.

use super::super::{Board, GameSession};
use super::Invariant;

/// Invariant: board cells are written at most once.
///
/// Replays the move history onto an empty board; every move must land on an
/// empty cell and the result must match the live board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        let replayed = session
            .history()
            .iter()
            .try_fold(Board::new(), |board, mov| {
                board.place(mov.position.to_index(), mov.player)
            });

        matches!(replayed, Ok(board) if board == *session.board())
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Capabilities, Controller, InputEvent, Player, Position};

    #[test]
    fn test_empty_session_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_moves_hold() {
        let mut controller = Controller::with_seed(Capabilities::default(), 7);
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            controller.handle(InputEvent::SelectCell(pos));
            controller.handle(InputEvent::Confirm);
        }
        assert!(MonotonicBoardInvariant::holds(controller.session()));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut controller = Controller::with_seed(Capabilities::default(), 7);
        controller.handle(InputEvent::SelectCell(Position::Center));
        controller.handle(InputEvent::Confirm);

        let mut session = controller.session().clone();
        *session.board_mut() = Board::new().place(4, Player::O).unwrap();
        assert!(!MonotonicBoardInvariant::holds(&session));
    }
}
