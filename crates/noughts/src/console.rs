//! Line-oriented console front-end.
//!
//! Players type a cell number (1-9) or a one-letter command. Lines that are
//! neither are answered with a re-prompt and never reach the controller.

use crate::config::GameConfig;
use crate::orchestrator::Orchestrator;
use crate::ports::{DisplaySink, InputSource};
use anyhow::Result;
use derive_more::{Display, Error};
use noughts_core::{Effect, GameSession, InputEvent, Position, Update};
use std::collections::VecDeque;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, instrument};

/// Shown after a confirm on an occupied cell.
pub const REJECTED_MESSAGE: &str = "That position has already been played, please try again.";

const HELP_TEXT: &str = "\
How to play:
  1-9  claim that cell (numbered left to right, top to bottom)
  r    restart the game
  a    let the computer move for you
  h    show this help
  q    quit";

/// A parsed console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Claim a cell.
    Play(Position),
    /// Start a new game.
    Restart,
    /// Random move for the current player.
    AutoMove,
    /// Print the help text.
    Help,
    /// Leave the game.
    Quit,
}

impl ConsoleCommand {
    /// Expands the command into controller events.
    ///
    /// Returns `None` for [`ConsoleCommand::Quit`].
    pub fn events(self) -> Option<Vec<InputEvent>> {
        let events = match self {
            ConsoleCommand::Play(pos) => vec![InputEvent::SelectCell(pos), InputEvent::Confirm],
            ConsoleCommand::Restart => vec![InputEvent::Restart],
            ConsoleCommand::AutoMove => vec![InputEvent::RequestAutoMove],
            ConsoleCommand::Help => vec![InputEvent::ShowHelp, InputEvent::ResumeGame],
            ConsoleCommand::Quit => return None,
        };
        Some(events)
    }
}

/// A console line that is neither a cell number nor a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid input, please try again.")]
pub struct ParseInputError {
    /// The offending line, trimmed.
    pub input: String,
}

/// Parses one console line.
pub fn parse_line(line: &str) -> Result<ConsoleCommand, ParseInputError> {
    let trimmed = line.trim();
    let command = match trimmed.to_ascii_lowercase().as_str() {
        "r" => ConsoleCommand::Restart,
        "a" => ConsoleCommand::AutoMove,
        "h" => ConsoleCommand::Help,
        "q" => ConsoleCommand::Quit,
        other => other
            .parse::<usize>()
            .ok()
            .and_then(Position::from_number)
            .map(ConsoleCommand::Play)
            .ok_or_else(|| ParseInputError {
                input: trimmed.to_string(),
            })?,
    };
    Ok(command)
}

/// Reads commands line by line.
///
/// Invalid lines are answered on `prompt_out` and reading continues.
pub struct ConsoleInput<R, W> {
    reader: R,
    prompt_out: W,
    pending: VecDeque<InputEvent>,
}

impl<R, W> ConsoleInput<R, W> {
    /// Creates a console input over a buffered reader.
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self {
            reader,
            prompt_out,
            pending: VecDeque::new(),
        }
    }
}

#[async_trait::async_trait]
impl<R, W> InputSource for ConsoleInput<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    async fn next_event(&mut self) -> Result<Option<InputEvent>> {
        if let Some(event) = self.pending.pop_front() {
            return Ok(Some(event));
        }

        loop {
            let mut line = String::new();
            if self.reader.read_line(&mut line).await? == 0 {
                info!("Console input closed");
                return Ok(None);
            }

            match parse_line(&line) {
                Ok(command) => {
                    debug!(?command, "Parsed console command");
                    let Some(events) = command.events() else {
                        info!("User quit");
                        return Ok(None);
                    };
                    self.pending.extend(events);
                    if let Some(event) = self.pending.pop_front() {
                        return Ok(Some(event));
                    }
                }
                Err(e) => {
                    debug!(input = %e.input, "Rejected console line");
                    writeln!(self.prompt_out, "{}", e)?;
                    self.prompt_out.flush()?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        "console"
    }
}

/// Prints the board and messages as plain text.
pub struct ConsoleDisplay<W> {
    out: W,
}

impl<W: Write> ConsoleDisplay<W> {
    /// Creates a display writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_board(&mut self, session: &GameSession) -> Result<()> {
        writeln!(self.out, "{}", session.board().display())?;
        writeln!(self.out, "{}", noughts_core::status_text(session.status(), session.turn()))?;
        Ok(())
    }

    fn prompt(&mut self, session: &GameSession) -> Result<()> {
        if session.status().is_terminal() {
            writeln!(self.out, "Press r to play again or q to quit.")?;
        } else {
            write!(self.out, "Player {}, choose a cell (1-9): ", session.turn())?;
        }
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> DisplaySink for ConsoleDisplay<W> {
    fn start(&mut self, session: &GameSession) -> Result<()> {
        writeln!(self.out, "Starting Game...")?;
        self.print_board(session)?;
        self.prompt(session)
    }

    #[instrument(skip_all, fields(effect = ?update.effect))]
    fn render(&mut self, session: &GameSession, update: &Update) -> Result<()> {
        match update.effect {
            // Console selection always precedes a confirm.
            Effect::SelectionMoved => return Ok(()),
            Effect::HelpShown => {
                writeln!(self.out, "{}", HELP_TEXT)?;
                return Ok(());
            }
            Effect::Rejected(_) => writeln!(self.out, "{}", REJECTED_MESSAGE)?,
            Effect::AutoPlaced(mov) => {
                writeln!(self.out, "Player {} plays {} (auto)", mov.player, mov.position.to_index() + 1)?;
                self.print_board(session)?;
            }
            Effect::Placed(_) | Effect::HelpHidden => self.print_board(session)?,
            // `h` always queues a resume; with help disabled it has nothing to close.
            Effect::Ignored if update.event == InputEvent::ResumeGame => return Ok(()),
            Effect::Restarted => {
                writeln!(self.out, "New game.")?;
                self.print_board(session)?;
            }
            Effect::Ignored => {
                if !session.status().is_terminal() {
                    writeln!(self.out, "That command is not available.")?;
                }
            }
        }
        self.prompt(session)
    }

    fn finish(&mut self, _session: &GameSession) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Goodbye!")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Plays a console game on stdin/stdout.
#[instrument(skip_all)]
pub async fn run_console(config: &GameConfig) -> Result<()> {
    info!("Starting console game");
    let input = ConsoleInput::new(BufReader::new(tokio::io::stdin()), std::io::stdout());
    let display = ConsoleDisplay::new(std::io::stdout());
    let mut orchestrator = Orchestrator::new(config.controller(), input, display);
    orchestrator.run().await?;
    Ok(())
}
