//! Terminal UI front-end.

mod display;
mod input;
mod ui;

pub use display::{CrosstermTerminal, NEW_GAME_HINT, TerminalDisplay, notice_for};
pub use input::{KeyAction, KeyboardInput, map_key};
pub use ui::draw;

use crate::config::GameConfig;
use crate::logging;
use crate::orchestrator::Orchestrator;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, instrument, warn};

/// Runs the terminal UI until the player quits.
#[instrument(skip_all)]
pub async fn run_tui(config: &GameConfig) -> Result<()> {
    // Log to a file to avoid interfering with the TUI
    logging::init_file(config.log_file(), config.log_filter())?;

    info!("Starting noughts TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    let (key_tx, key_rx) = mpsc::unbounded_channel();
    spawn_key_reader(key_tx);

    let mut orchestrator = Orchestrator::new(
        config.controller(),
        KeyboardInput::new(key_rx),
        TerminalDisplay::new(terminal),
    );
    let res = orchestrator.run().await;

    // Dropping the receiver stops the reader thread.
    let (_, input, display) = orchestrator.into_parts();
    drop(input);
    let mut terminal = display.into_terminal();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match res {
        Ok(handled) => {
            info!(handled, "TUI closed");
            Ok(())
        }
        Err(err) => {
            error!(error = ?err, "Game loop error");
            Err(err)
        }
    }
}

/// Reads key presses on a blocking thread and forwards them to `key_tx`.
fn spawn_key_reader(key_tx: mpsc::UnboundedSender<KeyCode>) {
    std::thread::spawn(move || {
        loop {
            match event::poll(Duration::from_millis(100)) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        if key_tx.send(key.code).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        warn!(error = %e, "Failed to read terminal event");
                        break;
                    }
                },
                Ok(false) => {
                    if key_tx.is_closed() {
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Failed to poll terminal events");
                    break;
                }
            }
        }
    });
}
