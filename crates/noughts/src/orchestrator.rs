//! Drives one input source through the controller into one display.

use crate::ports::{DisplaySink, InputSource};
use anyhow::Result;
use noughts_core::Controller;
use tracing::{debug, info, instrument};

/// Runs a game: one event at a time, each handled to completion before the next is read.
pub struct Orchestrator<I, D> {
    controller: Controller,
    input: I,
    display: D,
}

impl<I: InputSource, D: DisplaySink> Orchestrator<I, D> {
    /// Creates a new orchestrator.
    pub fn new(controller: Controller, input: I, display: D) -> Self {
        Self {
            controller,
            input,
            display,
        }
    }

    /// Returns the controller.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Returns the display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Splits the orchestrator back into its parts.
    pub fn into_parts(self) -> (Controller, I, D) {
        (self.controller, self.input, self.display)
    }

    /// Runs until the input source ends; returns the number of events handled.
    #[instrument(skip_all, fields(input = %self.input.name()))]
    pub async fn run(&mut self) -> Result<usize> {
        info!("Starting game loop");
        self.display.start(self.controller.session())?;

        let mut handled = 0;
        while let Some(event) = self.input.next_event().await? {
            debug!(?event, "Received event");
            let update = self.controller.handle(event);
            self.display.render(self.controller.session(), &update)?;
            handled += 1;
        }

        self.display.finish(self.controller.session())?;
        info!(handled, status = ?self.controller.session().status(), "Game loop finished");
        Ok(handled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::{Capabilities, Effect, GameSession, GameStatus, InputEvent, Player, Position, Update};
    use std::collections::VecDeque;

    struct ScriptedInput(VecDeque<InputEvent>);

    #[async_trait::async_trait]
    impl InputSource for ScriptedInput {
        async fn next_event(&mut self) -> Result<Option<InputEvent>> {
            Ok(self.0.pop_front())
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    #[derive(Default)]
    struct RecordingDisplay {
        started: bool,
        finished: bool,
        effects: Vec<Effect>,
    }

    impl DisplaySink for RecordingDisplay {
        fn start(&mut self, _session: &GameSession) -> Result<()> {
            self.started = true;
            Ok(())
        }

        fn render(&mut self, _session: &GameSession, update: &Update) -> Result<()> {
            self.effects.push(update.effect);
            Ok(())
        }

        fn finish(&mut self, _session: &GameSession) -> Result<()> {
            self.finished = true;
            Ok(())
        }
    }

    fn orchestrator(events: Vec<InputEvent>) -> Orchestrator<ScriptedInput, RecordingDisplay> {
        Orchestrator::new(
            Controller::with_seed(Capabilities::default(), 11),
            ScriptedInput(events.into()),
            RecordingDisplay::default(),
        )
    }

    #[tokio::test]
    async fn test_renders_once_per_event() {
        let mut events = Vec::new();
        for index in [0, 4, 1, 7, 2] {
            events.push(InputEvent::SelectCell(Position::from_index(index).unwrap()));
            events.push(InputEvent::Confirm);
        }
        events.push(InputEvent::Confirm);

        let mut orch = orchestrator(events);
        assert_eq!(orch.run().await.unwrap(), 11);

        let display = orch.display();
        assert!(display.started && display.finished);
        assert_eq!(display.effects.len(), 11);
        assert_eq!(display.effects[0], Effect::SelectionMoved);
        assert!(matches!(display.effects[9], Effect::Placed(m) if m.player == Player::X));
        assert_eq!(display.effects[10], Effect::Ignored);
        assert_eq!(orch.controller().session().status(), GameStatus::Won(Player::X));
    }

    #[tokio::test]
    async fn test_empty_input_still_starts_and_finishes() {
        let mut orch = orchestrator(Vec::new());
        assert_eq!(orch.run().await.unwrap(), 0);

        let (controller, _, display) = orch.into_parts();
        assert!(display.started && display.finished);
        assert!(display.effects.is_empty());
        assert!(controller.session().history().is_empty());
    }
}
