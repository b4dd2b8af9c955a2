//! Alternating turn invariant: X and O take turns, X first.

use super::super::{GameSession, Player};
use super::Invariant;

/// Invariant: the history alternates starting with X, and the turn agrees.
///
/// While the game is on, the player to move is the opponent of the last
/// mover. Once it ends the turn is frozen on the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        let alternates = history.iter().enumerate().all(|(i, mov)| {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            mov.player == expected
        });

        let turn_agrees = match history.last() {
            None => session.turn() == Player::X,
            Some(last) if session.outcome().is_terminal() => session.turn() == last.player,
            Some(last) => session.turn() == last.player.opponent(),
        };

        alternates && turn_agrees
    }

    fn description() -> &'static str {
        "Players alternate turns, starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Capabilities, Controller, InputEvent, Position};

    #[test]
    fn test_new_session_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_holds_through_a_won_game() {
        let mut controller = Controller::with_seed(Capabilities::default(), 1);
        for index in [0, 4, 1, 7, 2] {
            controller.handle(InputEvent::SelectCell(Position::from_index(index).unwrap()));
            controller.handle(InputEvent::Confirm);
            assert!(AlternatingTurnInvariant::holds(controller.session()));
        }
        assert_eq!(controller.session().turn(), Player::X);
    }
}
