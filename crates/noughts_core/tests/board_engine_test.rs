//! Board engine properties, checked over every reachable game.

use noughts_core::rules::{LINES, winning_line};
use noughts_core::{Board, Cell, IllegalMove, Outcome, Player, Position};

/// Walks every legal game from `board`, calling `visit` on each reachable board.
fn walk(board: Board, to_move: Player, visit: &mut impl FnMut(&Board)) {
    visit(&board);
    if board.evaluate().is_terminal() {
        return;
    }
    for pos in board.empty_positions() {
        let next = board.place(pos.to_index(), to_move).expect("empty cell is legal");
        walk(next, to_move.opponent(), visit);
    }
}

fn completed_lines(board: &Board, player: Player) -> usize {
    LINES
        .iter()
        .filter(|line| line.positions().iter().all(|p| board.get(*p) == Cell::Occupied(player)))
        .count()
}

#[test]
fn test_evaluate_agrees_with_line_count_on_every_reachable_board() {
    let mut boards = 0usize;
    walk(Board::new(), Player::X, &mut |board| {
        boards += 1;
        let x_lines = completed_lines(board, Player::X);
        let o_lines = completed_lines(board, Player::O);
        assert!(x_lines == 0 || o_lines == 0, "both players won:\n{}", board.display());

        let expected = if x_lines > 0 {
            Outcome::Win(Player::X)
        } else if o_lines > 0 {
            Outcome::Win(Player::O)
        } else if board.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        };
        assert_eq!(board.evaluate(), expected, "board:\n{}", board.display());
        assert_eq!(board.evaluate(), board.evaluate());
    });
    assert_eq!(boards, 549_946);
}

#[test]
fn test_cells_are_write_once_along_every_game() {
    fn check(board: Board, to_move: Player) {
        if board.evaluate().is_terminal() {
            return;
        }
        for pos in board.empty_positions() {
            let next = board.place(pos.to_index(), to_move).unwrap();
            for other in Position::ALL {
                if other != pos {
                    assert_eq!(next.get(other), board.get(other));
                }
            }
            check(next, to_move.opponent());
        }
    }
    check(Board::new(), Player::X);
}

#[test]
fn test_place_on_occupied_cell_is_illegal_and_pure() {
    let board = Board::new().place(0, Player::X).unwrap();
    for player in [Player::X, Player::O] {
        let result = board.place(0, player);
        assert_eq!(result, Err(IllegalMove::Occupied(Position::TopLeft)));
        assert_eq!(board.get(Position::TopLeft), Cell::Occupied(Player::X));
    }
    assert!(!board.is_legal(0));
}

#[test]
fn test_illegal_move_messages() {
    assert_eq!(
        IllegalMove::Occupied(Position::Center).to_string(),
        "Square Center is already occupied"
    );
    assert_eq!(
        IllegalMove::OutOfRange(12).to_string(),
        "Position 12 is off the board (must be 0-8)"
    );
    assert_eq!(IllegalMove::OutOfRange(12).index(), 12);
}

#[test]
fn test_winning_line_reports_indices_for_highlight() {
    let board = [(2, Player::O), (5, Player::O), (8, Player::O), (0, Player::X), (4, Player::X)]
        .iter()
        .try_fold(Board::new(), |b, &(i, p)| b.place(i, p))
        .unwrap();
    let (player, line) = winning_line(&board).unwrap();
    assert_eq!(player, Player::O);
    assert_eq!(line.indices(), [2, 5, 8]);
}
