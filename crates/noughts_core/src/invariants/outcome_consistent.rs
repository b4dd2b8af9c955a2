//! Cached outcome invariant.

use super::super::GameSession;
use super::super::rules::evaluate;
use super::Invariant;

/// Invariant: the cached outcome is what the board evaluates to.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameSession> for OutcomeConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        session.outcome() == evaluate(session.board())
    }

    fn description() -> &'static str {
        "Cached outcome matches the board"
    }
}
