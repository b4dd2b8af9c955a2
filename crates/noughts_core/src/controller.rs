//! Input-driven game controller.
//!
//! The controller owns one [`GameSession`] and turns [`InputEvent`]s into
//! session transitions. Every event is handled to completion and answered
//! with an [`Update`] describing what a renderer should redraw.

use super::invariants::{InvariantSet, SessionInvariants};
use super::update::{CellChange, Effect, Update};
use super::{Capabilities, Cell, GameSession, InputEvent, Move, Position, View};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, info, instrument};

/// Owns a game session and applies input events to it.
#[derive(Debug, Clone)]
pub struct Controller {
    session: GameSession,
    capabilities: Capabilities,
    rng: StdRng,
}

impl Controller {
    /// Creates a controller whose auto mover is seeded from the OS.
    #[instrument]
    pub fn new(capabilities: Capabilities) -> Self {
        Self::with_rng(capabilities, StdRng::from_os_rng())
    }

    /// Creates a controller with a reproducible auto mover.
    #[instrument]
    pub fn with_seed(capabilities: Capabilities, seed: u64) -> Self {
        Self::with_rng(capabilities, StdRng::seed_from_u64(seed))
    }

    fn with_rng(capabilities: Capabilities, rng: StdRng) -> Self {
        Self {
            session: GameSession::new(),
            capabilities,
            rng,
        }
    }

    /// Returns the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the enabled features.
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Applies one event and reports what changed.
    ///
    /// Rejected and inapplicable events leave the session exactly as it was.
    #[instrument(
        skip(self),
        fields(turn = %self.session.turn(), selection = %self.session.selection())
    )]
    pub fn handle(&mut self, event: InputEvent) -> Update {
        let (effect, changes) = if self.session.view() == View::Help && !event.acts_during_help() {
            debug!("Help screen is showing, event ignored");
            (Effect::Ignored, Vec::new())
        } else {
            self.dispatch(event)
        };

        self.debug_check_invariants();

        let update = Update::new(event, effect, changes, &self.session);
        debug!(effect = ?update.effect, status = ?update.status, "Event handled");
        update
    }

    fn dispatch(&mut self, event: InputEvent) -> (Effect, Vec<CellChange>) {
        match event {
            InputEvent::MoveSelection(direction) => {
                let next = self.session.selection().step(direction);
                self.session.set_selection(next);
                (Effect::SelectionMoved, Vec::new())
            }
            InputEvent::SelectCell(pos) => {
                self.session.set_selection(pos);
                (Effect::SelectionMoved, Vec::new())
            }
            InputEvent::Confirm => self.confirm(),
            InputEvent::Restart => self.restart(),
            InputEvent::RequestAutoMove => self.auto_move(),
            InputEvent::ShowHelp => {
                if self.capabilities.enable_help_screen {
                    self.session.set_view(View::Help);
                    (Effect::HelpShown, Vec::new())
                } else {
                    debug!("Help screen disabled");
                    (Effect::Ignored, Vec::new())
                }
            }
            InputEvent::ResumeGame => {
                if self.session.view() == View::Help {
                    self.session.set_view(View::Board);
                    (Effect::HelpHidden, Vec::new())
                } else {
                    (Effect::Ignored, Vec::new())
                }
            }
        }
    }

    /// Places the current player's mark at the selection.
    fn confirm(&mut self) -> (Effect, Vec<CellChange>) {
        if self.session.status().is_terminal() {
            debug!(status = ?self.session.status(), "Game is over, confirm ignored");
            return (Effect::Ignored, Vec::new());
        }

        let pos = self.session.selection();
        match self.place(pos) {
            Some((mov, change)) => (Effect::Placed(mov), vec![change]),
            None => (Effect::Rejected(pos), Vec::new()),
        }
    }

    /// Places the current player's mark on a random empty cell.
    fn auto_move(&mut self) -> (Effect, Vec<CellChange>) {
        if !self.capabilities.enable_auto_move {
            debug!("Auto move disabled");
            return (Effect::Ignored, Vec::new());
        }
        if self.session.status().is_terminal() {
            debug!("Game is over, auto move ignored");
            return (Effect::Ignored, Vec::new());
        }

        // Candidates are the empty cells only.
        let candidates = self.session.board().empty_positions();
        let Some(&pos) = candidates.choose(&mut self.rng) else {
            debug!("Board is full, auto move ignored");
            return (Effect::Ignored, Vec::new());
        };

        debug!(position = %pos, candidates = candidates.len(), "Auto move chose cell");
        match self.place(pos) {
            Some((mov, change)) => {
                self.session.set_selection(pos);
                (Effect::AutoPlaced(mov), vec![change])
            }
            None => (Effect::Rejected(pos), Vec::new()),
        }
    }

    /// Commits a mark for the player to move, or returns `None` if the board refuses it.
    fn place(&mut self, pos: Position) -> Option<(Move, CellChange)> {
        let player = self.session.turn();
        let board = match self.session.board().place(pos.to_index(), player) {
            Ok(board) => board,
            Err(e) => {
                debug!(error = %e, "Move rejected");
                return None;
            }
        };

        let mov = Move::new(player, pos);
        self.session.commit(board, mov);

        info!(%mov, status = ?self.session.status(), "Move played");
        Some((
            mov,
            CellChange {
                position: pos,
                cell: player.mark(),
            },
        ))
    }

    /// Replaces the session with a fresh one.
    fn restart(&mut self) -> (Effect, Vec<CellChange>) {
        let cleared = self
            .session
            .history()
            .iter()
            .map(|mov| mov.position)
            .collect::<Vec<_>>();

        self.session = GameSession::new();

        let mut changes: Vec<CellChange> = cleared
            .into_iter()
            .map(|position| CellChange {
                position,
                cell: Cell::Empty,
            })
            .collect();
        changes.sort_by_key(|change| change.position.to_index());

        info!(cleared = changes.len(), "Game restarted");
        (Effect::Restarted, changes)
    }

    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = SessionInvariants::check_all(&self.session)
        {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("Session invariants violated: {}", descriptions);
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(Capabilities::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, GameStatus, Player};

    fn controller() -> Controller {
        Controller::with_seed(Capabilities::default(), 42)
    }

    fn play_at(controller: &mut Controller, index: usize) -> Update {
        controller.handle(InputEvent::SelectCell(Position::from_index(index).unwrap()));
        controller.handle(InputEvent::Confirm)
    }

    #[test]
    fn test_confirm_places_and_flips_turn() {
        let mut c = controller();
        let update = play_at(&mut c, 4);
        assert_eq!(update.effect, Effect::Placed(Move::new(Player::X, Position::Center)));
        assert_eq!(
            update.changes,
            vec![CellChange {
                position: Position::Center,
                cell: Cell::Occupied(Player::X)
            }]
        );
        assert_eq!(update.turn, Player::O);
        assert_eq!(update.status, GameStatus::Ongoing);
    }

    #[test]
    fn test_confirm_on_occupied_cell_changes_nothing() {
        let mut c = controller();
        play_at(&mut c, 0);
        let before = c.session().clone();

        let update = c.handle(InputEvent::Confirm);
        assert_eq!(update.effect, Effect::Rejected(Position::TopLeft));
        assert!(update.changes.is_empty());
        assert_eq!(c.session(), &before);
    }

    #[test]
    fn test_confirm_after_win_is_ignored() {
        let mut c = controller();
        for index in [0, 4, 1, 7, 2] {
            play_at(&mut c, index);
        }
        assert_eq!(c.session().status(), GameStatus::Won(Player::X));

        let before = c.session().clone();
        let update = play_at(&mut c, 8);
        assert_eq!(update.effect, Effect::Ignored);
        assert_eq!(c.session().board(), before.board());
        assert_eq!(c.session().turn(), Player::X);
    }

    #[test]
    fn test_selection_moves_after_game_end() {
        let mut c = controller();
        for index in [0, 4, 1, 7, 2] {
            play_at(&mut c, index);
        }
        let update = c.handle(InputEvent::MoveSelection(Direction::Down));
        assert_eq!(update.effect, Effect::SelectionMoved);
        assert_eq!(update.selection, Position::MiddleRight);
    }

    #[test]
    fn test_restart_reports_cleared_cells() {
        let mut c = controller();
        play_at(&mut c, 8);
        play_at(&mut c, 3);
        let update = c.handle(InputEvent::Restart);
        assert_eq!(update.effect, Effect::Restarted);
        let cleared: Vec<_> = update.changes.iter().map(|ch| ch.position).collect();
        assert_eq!(cleared, vec![Position::MiddleLeft, Position::BottomRight]);
        assert!(update.changes.iter().all(|ch| ch.cell == Cell::Empty));
        assert_eq!(update.selection, Position::TopLeft);
    }

    #[test]
    fn test_auto_move_disabled_is_ignored() {
        let mut c = Controller::with_seed(Capabilities::minimal(), 3);
        let update = c.handle(InputEvent::RequestAutoMove);
        assert_eq!(update.effect, Effect::Ignored);
        assert!(c.session().history().is_empty());
    }

    #[test]
    fn test_auto_move_moves_selection_onto_its_cell() {
        let mut c = controller();
        let update = c.handle(InputEvent::RequestAutoMove);
        let mov = update.effect.placed().expect("auto move should place");
        assert!(matches!(update.effect, Effect::AutoPlaced(_)));
        assert_eq!(update.selection, mov.position);
        assert_eq!(mov.player, Player::X);
        assert_eq!(c.session().turn(), Player::O);
    }

    #[test]
    fn test_refused_auto_move_keeps_selection() {
        let mut c = Controller::with_seed(Capabilities::minimal(), 3);
        c.handle(InputEvent::SelectCell(Position::BottomLeft));
        let before = c.session().clone();

        let update = c.handle(InputEvent::RequestAutoMove);
        assert_eq!(update.effect, Effect::Ignored);
        assert_eq!(update.selection, Position::BottomLeft);
        assert_eq!(c.session(), &before);
    }

    #[test]
    fn test_update_names_its_event() {
        let mut c = controller();
        let update = c.handle(InputEvent::ResumeGame);
        assert_eq!(update.event, InputEvent::ResumeGame);
        assert_eq!(update.effect, Effect::Ignored);
    }

    #[test]
    fn test_same_seed_same_auto_moves() {
        let mut a = controller();
        let mut b = controller();
        for _ in 0..5 {
            assert_eq!(
                a.handle(InputEvent::RequestAutoMove),
                b.handle(InputEvent::RequestAutoMove)
            );
        }
    }

    #[test]
    fn test_help_swallows_board_events() {
        let mut c = controller();
        assert_eq!(c.handle(InputEvent::ShowHelp).effect, Effect::HelpShown);

        assert_eq!(c.handle(InputEvent::Confirm).effect, Effect::Ignored);
        assert_eq!(
            c.handle(InputEvent::MoveSelection(Direction::Right)).effect,
            Effect::Ignored
        );
        assert!(c.session().history().is_empty());
        assert_eq!(c.session().selection(), Position::TopLeft);

        assert_eq!(c.handle(InputEvent::ResumeGame).effect, Effect::HelpHidden);
        let placed = c.handle(InputEvent::Confirm).effect.placed();
        assert_eq!(placed.map(|m| m.position), Some(Position::TopLeft));
    }

    #[test]
    fn test_restart_closes_help() {
        let mut c = controller();
        c.handle(InputEvent::ShowHelp);
        let update = c.handle(InputEvent::Restart);
        assert_eq!(update.view, View::Board);
    }

    #[test]
    fn test_help_disabled() {
        let mut c = Controller::with_seed(Capabilities::default().with_help_screen(false), 0);
        assert_eq!(c.handle(InputEvent::ShowHelp).effect, Effect::Ignored);
        assert_eq!(c.session().view(), View::Board);
    }

    #[test]
    fn test_resume_without_help_is_ignored() {
        let mut c = controller();
        assert_eq!(c.handle(InputEvent::ResumeGame).effect, Effect::Ignored);
    }
}
