//! Ratatui display sink.

use super::ui;
use crate::ports::DisplaySink;
use anyhow::Result;
use noughts_core::{Effect, GameSession, Update};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::Stdout;

/// Terminal used by the TUI.
pub type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Shown alongside the win or tie status.
pub const NEW_GAME_HINT: &str = "Press Space to start a new game.";

/// Notice to show after an update, if any.
pub fn notice_for(update: &Update) -> Option<&'static str> {
    match update.effect {
        Effect::Rejected(_) => Some("That position has already been played, please try again."),
        _ if update.status.is_terminal() => Some(NEW_GAME_HINT),
        Effect::Ignored => Some("Not available right now."),
        Effect::Restarted => Some("New game."),
        _ => None,
    }
}

/// Redraws the whole screen after every update.
pub struct TerminalDisplay {
    terminal: CrosstermTerminal,
    notice: Option<&'static str>,
}

impl TerminalDisplay {
    /// Creates a display drawing on `terminal`.
    pub fn new(terminal: CrosstermTerminal) -> Self {
        Self {
            terminal,
            notice: None,
        }
    }

    /// Gives the terminal back for cleanup.
    pub fn into_terminal(self) -> CrosstermTerminal {
        self.terminal
    }

    fn redraw(&mut self, session: &GameSession) -> Result<()> {
        let notice = self.notice;
        self.terminal.draw(|f| ui::draw(f, session, notice))?;
        Ok(())
    }
}

impl DisplaySink for TerminalDisplay {
    fn start(&mut self, session: &GameSession) -> Result<()> {
        self.notice = None;
        self.redraw(session)
    }

    fn render(&mut self, session: &GameSession, update: &Update) -> Result<()> {
        self.notice = notice_for(update);
        self.redraw(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::{Capabilities, Controller, InputEvent, Position};

    #[test]
    fn test_finishing_move_offers_new_game() {
        let mut controller = Controller::with_seed(Capabilities::default(), 0);
        let mut last = None;
        for index in [0, 4, 1, 7, 2] {
            let update = controller.handle(InputEvent::SelectCell(Position::from_index(index).unwrap()));
            assert_eq!(notice_for(&update), None);
            last = Some(controller.handle(InputEvent::Confirm));
        }
        assert_eq!(notice_for(&last.unwrap()), Some(NEW_GAME_HINT));

        let after = controller.handle(InputEvent::Confirm);
        assert_eq!(notice_for(&after), Some(NEW_GAME_HINT));
        let moved = controller.handle(InputEvent::MoveSelection(noughts_core::Direction::Up));
        assert_eq!(notice_for(&moved), Some(NEW_GAME_HINT));
    }

    #[test]
    fn test_finishing_auto_move_offers_new_game() {
        let mut controller = Controller::with_seed(Capabilities::default(), 5);
        let mut last = controller.handle(InputEvent::RequestAutoMove);
        while !last.status.is_terminal() {
            assert_eq!(notice_for(&last), None);
            last = controller.handle(InputEvent::RequestAutoMove);
        }
        assert!(matches!(last.effect, Effect::AutoPlaced(_)));
        assert_eq!(notice_for(&last), Some(NEW_GAME_HINT));
    }

    #[test]
    fn test_notices() {
        let mut controller = Controller::with_seed(Capabilities::minimal(), 0);

        let moved = controller.handle(InputEvent::SelectCell(Position::Center));
        assert_eq!(notice_for(&moved), None);

        controller.handle(InputEvent::Confirm);
        let rejected = controller.handle(InputEvent::Confirm);
        assert_eq!(
            notice_for(&rejected),
            Some("That position has already been played, please try again.")
        );

        let refused = controller.handle(InputEvent::RequestAutoMove);
        assert_eq!(notice_for(&refused), Some("Not available right now."));

        let restarted = controller.handle(InputEvent::Restart);
        assert_eq!(notice_for(&restarted), Some("New game."));
    }
}
