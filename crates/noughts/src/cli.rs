//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe with keyboard, console and scan-code front-ends
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for the random auto mover (reproducible games)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Refuse random auto moves
    #[arg(long, global = true)]
    pub no_auto_move: bool,

    /// Disable the help screen
    #[arg(long, global = true)]
    pub no_help: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the console, typing cell numbers 1-9
    Console,

    /// Play in the terminal UI with a keyboard-driven cursor
    Tui,

    /// Replay PS/2 scan codes (hex bytes) through the game
    Scancodes {
        /// File of whitespace-separated hex bytes; reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print one JSON object per update instead of text frames
        #[arg(long)]
        json: bool,
    },
}
