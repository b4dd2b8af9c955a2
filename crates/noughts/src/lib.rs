//! Noughts front-ends.
//!
//! Each front-end pairs an [`InputSource`] with a [`DisplaySink`] and hands
//! both to an [`Orchestrator`], which feeds events to the
//! [`noughts_core::Controller`] one at a time.
//!
//! - [`console`]: type cell numbers on stdin.
//! - [`tui`]: ratatui board with a keyboard cursor.
//! - [`replay`]: PS/2 scan codes from a file, printed as frames or JSON.

#![warn(missing_docs)]

// Private module declarations
mod cli;
mod config;
mod logging;
mod orchestrator;
mod ports;

// Front-ends
pub mod console;
pub mod replay;
pub mod tui;

// Crate-level exports - Command line and configuration
pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Logging
pub use logging::{init_file, init_stderr};

// Crate-level exports - Game loop
pub use orchestrator::Orchestrator;
pub use ports::{DisplaySink, InputSource};
