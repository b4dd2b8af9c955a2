//! Pure tic-tac-toe rules engine and input-driven controller.
//!
//! # Architecture
//!
//! - **Board engine**: [`Board`], [`Cell`], [`Position`] and the [`rules`]
//!   module (legality, win lines, outcome evaluation). No I/O.
//! - **Controller**: [`Controller`] owns a [`GameSession`], consumes
//!   [`InputEvent`]s and answers each one with an [`Update`].
//! - **Invariants**: checkable session properties, asserted by the
//!   controller in debug builds.
//! - **Scan codes**: [`ScanCodeDecoder`] turns PS/2 keyboard bytes into
//!   input events.
//!
//! # Example
//!
//! ```
//! use noughts_core::{Capabilities, Controller, GameStatus, InputEvent, Player, Position};
//!
//! let mut controller = Controller::with_seed(Capabilities::default(), 7);
//! for index in [0, 4, 1, 7, 2] {
//!     controller.handle(InputEvent::SelectCell(Position::from_index(index).unwrap()));
//!     controller.handle(InputEvent::Confirm);
//! }
//! assert_eq!(controller.session().status(), GameStatus::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod capabilities;
mod controller;
mod events;
pub mod invariants;
mod position;
pub mod rules;
mod scancode;
mod session;
mod types;
mod update;

pub use action::{IllegalMove, Move};
pub use capabilities::Capabilities;
pub use controller::Controller;
pub use events::InputEvent;
pub use position::{Direction, Position};
pub use rules::{Outcome, WinningLine, evaluate};
pub use scancode::{BREAK_PREFIX, EXTENDED_PREFIX, ScanCodeDecoder};
pub use session::{GameSession, GameStatus, View};
pub use types::{Board, Cell, Player};
pub use update::{CellChange, Effect, Update, status_text};
