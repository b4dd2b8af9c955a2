//! Game session state owned by the controller.

use super::rules::{Outcome, WinningLine, evaluate, winning_line};
use super::{Board, Move, Player, Position};
use serde::{Deserialize, Serialize};

/// Lifecycle of a game as the controller sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    Ongoing,
    /// A player completed a line.
    Won(Player),
    /// The board filled up without a line.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl From<Outcome> for GameStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::InProgress => GameStatus::Ongoing,
            Outcome::Win(player) => GameStatus::Won(player),
            Outcome::Draw => GameStatus::Draw,
        }
    }
}

/// Which screen a keyboard front-end should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum View {
    /// The board with the selection cursor.
    #[default]
    Board,
    /// The controls reference.
    Help,
}

/// Complete state of one game.
///
/// The outcome is cached and recomputed whenever the board changes; nothing
/// else writes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    turn: Player,
    outcome: Outcome,
    selection: Position,
    view: View,
    history: Vec<Move>,
}

impl GameSession {
    /// Creates a fresh session: empty board, X to move, cursor top-left.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            outcome: Outcome::InProgress,
            selection: Position::TopLeft,
            view: View::Board,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose move is next (frozen once the game ends).
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the cached outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the lifecycle status.
    pub fn status(&self) -> GameStatus {
        self.outcome.into()
    }

    /// Returns the selected cell.
    pub fn selection(&self) -> Position {
        self.selection
    }

    /// Returns the current view.
    pub fn view(&self) -> View {
        self.view
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the completed line, if the game was won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        winning_line(&self.board).map(|(_, line)| line)
    }

    pub(crate) fn set_selection(&mut self, selection: Position) {
        self.selection = selection;
    }

    pub(crate) fn set_view(&mut self, view: View) {
        self.view = view;
    }

    /// Installs a board produced by [`Board::place`] for `mov`.
    ///
    /// Recomputes the outcome and hands the turn over only while the game
    /// is still going.
    pub(crate) fn commit(&mut self, board: Board, mov: Move) {
        self.board = board;
        self.history.push(mov);
        self.outcome = evaluate(&self.board);
        if !self.outcome.is_terminal() {
            self.turn = mov.player.opponent();
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
