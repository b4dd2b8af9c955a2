//! Replays recorded PS/2 scan codes through the controller.
//!
//! Input is text holding hex bytes separated by whitespace, e.g.
//! `16 F0 16 5A F0 5A`. A `0x` prefix is accepted and `#` starts a comment
//! that runs to the end of the line.

use crate::config::GameConfig;
use crate::orchestrator::Orchestrator;
use crate::ports::{DisplaySink, InputSource};
use anyhow::{Context, Result};
use derive_more::{Display, Error};
use noughts_core::{GameSession, InputEvent, ScanCodeDecoder, Update};
use std::collections::VecDeque;
use std::io::Write;
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::{debug, info, instrument};

/// A token that is not a hex byte.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid hex byte '{}' on line {}", token, line)]
pub struct ParseHexError {
    /// The offending token.
    pub token: String,
    /// 1-based line number.
    pub line: usize,
}

/// Parses whitespace-separated hex bytes.
pub fn parse_hex_bytes(text: &str) -> Result<Vec<u8>, ParseHexError> {
    let mut bytes = Vec::new();
    for (number, line) in text.lines().enumerate() {
        let code = line.split('#').next().unwrap_or_default();
        for token in code.split_whitespace() {
            let digits = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token);
            let byte = u8::from_str_radix(digits, 16).map_err(|_| ParseHexError {
                token: token.to_string(),
                line: number + 1,
            })?;
            bytes.push(byte);
        }
    }
    Ok(bytes)
}

/// Feeds recorded bytes through a [`ScanCodeDecoder`].
pub struct ScanCodeInput {
    bytes: VecDeque<u8>,
    decoder: ScanCodeDecoder,
}

impl ScanCodeInput {
    /// Creates an input over the given bytes.
    pub fn new(bytes: impl IntoIterator<Item = u8>) -> Self {
        Self {
            bytes: bytes.into_iter().collect(),
            decoder: ScanCodeDecoder::new(),
        }
    }
}

#[async_trait::async_trait]
impl InputSource for ScanCodeInput {
    async fn next_event(&mut self) -> Result<Option<InputEvent>> {
        while let Some(byte) = self.bytes.pop_front() {
            if let Some(event) = self.decoder.feed(byte) {
                return Ok(Some(event));
            }
        }
        debug!("Scan codes exhausted");
        Ok(None)
    }

    fn name(&self) -> &str {
        "scancodes"
    }
}

/// How [`FrameDisplay`] writes updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameFormat {
    /// Board, selection and status per update.
    #[default]
    Text,
    /// One JSON object per update.
    Json,
}

/// Writes one frame per update.
pub struct FrameDisplay<W> {
    out: W,
    format: FrameFormat,
    frames: usize,
}

impl<W: Write> FrameDisplay<W> {
    /// Creates a display writing to `out`.
    pub fn new(out: W, format: FrameFormat) -> Self {
        Self {
            out,
            format,
            frames: 0,
        }
    }

    /// Number of updates written so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_text(&mut self, heading: &str, session: &GameSession) -> Result<()> {
        writeln!(self.out, "== {} ==", heading)?;
        writeln!(self.out, "{}", session.board().display())?;
        writeln!(self.out, "selection: {} ({})", session.selection().to_index() + 1, session.selection().label())?;
        writeln!(self.out, "view: {:?}", session.view())?;
        writeln!(self.out, "{}", noughts_core::status_text(session.status(), session.turn()))?;
        Ok(())
    }
}

impl<W: Write> DisplaySink for FrameDisplay<W> {
    fn start(&mut self, session: &GameSession) -> Result<()> {
        if self.format == FrameFormat::Text {
            self.write_text("start", session)?;
        }
        Ok(())
    }

    fn render(&mut self, session: &GameSession, update: &Update) -> Result<()> {
        self.frames += 1;
        match self.format {
            FrameFormat::Text => {
                let heading = format!("frame {}: {:?}", self.frames, update.effect);
                self.write_text(&heading, session)?;
            }
            FrameFormat::Json => {
                serde_json::to_writer(&mut self.out, update)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    fn finish(&mut self, _session: &GameSession) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Replays scan codes from `input` (or stdin) and prints every update.
#[instrument(skip(config))]
pub async fn run_replay(config: &GameConfig, input: Option<&Path>, json: bool) -> Result<()> {
    let text = match input {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read scan codes from {}", path.display()))?,
        None => {
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            text
        }
    };
    let bytes = parse_hex_bytes(&text)?;
    info!(bytes = bytes.len(), "Replaying scan codes");

    let format = if json { FrameFormat::Json } else { FrameFormat::Text };
    let display = FrameDisplay::new(std::io::stdout(), format);
    let mut orchestrator = Orchestrator::new(config.controller(), ScanCodeInput::new(bytes), display);
    let handled = orchestrator.run().await?;
    info!(handled, "Replay finished");
    Ok(())
}
