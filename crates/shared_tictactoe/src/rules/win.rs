//! Win detection logic for tic-tac-toe.

use crate::types::{BOARD_SIZE, Board, Cell, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks whether `player` has three marks in a line.
///
/// Row `i` and column `i` are checked in the same pass, then both diagonals.
/// The first completed line short-circuits.
#[instrument(skip(board))]
pub fn has_won(board: &Board, player: Player) -> bool {
    let cells = board.rows();
    let owned = |row: usize, col: usize| cells[row][col].is_marked_by(player);

    for i in 0..BOARD_SIZE {
        if (0..BOARD_SIZE).all(|j| owned(i, j)) || (0..BOARD_SIZE).all(|j| owned(j, i)) {
            return true;
        }
    }

    (0..BOARD_SIZE).all(|i| owned(i, i)) || (0..BOARD_SIZE).all(|i| owned(i, BOARD_SIZE - 1 - i))
}

/// Returns the player holding a completed line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    Player::iter().find(|player| has_won(board, *player))
}

/// Returns true if the cell at the given position is part of a line completed by
/// its owner.
pub fn in_winning_line(board: &Board, row: usize, col: usize) -> bool {
    let cells = board.rows();
    let Cell::Occupied(player) = cells[row][col] else {
        return false;
    };
    let owned = |r: usize, c: usize| cells[r][c].is_marked_by(player);

    (0..BOARD_SIZE).all(|c| owned(row, c))
        || (0..BOARD_SIZE).all(|r| owned(r, col))
        || (row == col && (0..BOARD_SIZE).all(|i| owned(i, i)))
        || (row + col == BOARD_SIZE - 1 && (0..BOARD_SIZE).all(|i| owned(i, BOARD_SIZE - 1 - i)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: &[(usize, usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(row, col, player) in marks {
            board.place(row, col, player);
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_from(&[(0, 0, Player::X), (0, 1, Player::X), (0, 2, Player::X)]);
        assert!(has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let board = board_from(&[(0, 2, Player::O), (1, 2, Player::O), (2, 2, Player::O)]);
        assert!(has_won(&board, Player::O));
    }

    #[test]
    fn test_winner_both_diagonals() {
        let main = board_from(&[(0, 0, Player::O), (1, 1, Player::O), (2, 2, Player::O)]);
        assert!(has_won(&main, Player::O));

        let anti = board_from(&[(0, 2, Player::X), (1, 1, Player::X), (2, 0, Player::X)]);
        assert!(has_won(&anti, Player::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_from(&[(1, 0, Player::X), (1, 1, Player::O), (1, 2, Player::X)]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winning_line_cells() {
        let board = board_from(&[
            (0, 0, Player::X),
            (0, 1, Player::X),
            (0, 2, Player::X),
            (1, 1, Player::O),
        ]);
        assert!(in_winning_line(&board, 0, 1));
        assert!(!in_winning_line(&board, 1, 1));
        assert!(!in_winning_line(&board, 2, 2));
    }
}
