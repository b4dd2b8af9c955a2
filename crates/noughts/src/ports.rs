//! Seams between the controller and the outside world.
//!
//! Front-ends implement [`InputSource`] to deliver decoded events and
//! [`DisplaySink`] to show what each event did. The orchestrator only talks
//! to these traits.

use anyhow::Result;
use noughts_core::{GameSession, InputEvent, Update};

/// Something that produces input events.
#[async_trait::async_trait]
pub trait InputSource: Send {
    /// Waits for the next event.
    ///
    /// Returns `Ok(None)` when the player quits or the input runs out.
    async fn next_event(&mut self) -> Result<Option<InputEvent>>;

    /// Returns the source's display name.
    fn name(&self) -> &str;
}

/// Something that shows the game.
pub trait DisplaySink {
    /// Shows the session before any event has been handled.
    fn start(&mut self, session: &GameSession) -> Result<()>;

    /// Shows the result of one handled event.
    fn render(&mut self, session: &GameSession, update: &Update) -> Result<()>;

    /// Called once after the last event.
    fn finish(&mut self, _session: &GameSession) -> Result<()> {
        Ok(())
    }
}
