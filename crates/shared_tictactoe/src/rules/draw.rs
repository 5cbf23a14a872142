//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::types::Board;
use tracing::instrument;

/// A full board with no completed line is a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    fn fill(board: &mut Board, layout: [[Player; 3]; 3]) {
        for (row, marks) in layout.iter().enumerate() {
            for (col, player) in marks.iter().enumerate() {
                board.place(row, col, *player);
            }
        }
    }

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_draw_detection() {
        use Player::{O, X};
        let mut board = Board::new();
        // X X O / O O X / X O X
        fill(&mut board, [[X, X, O], [O, O, X], [X, O, X]]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Player::{O, X};
        let mut board = Board::new();
        fill(&mut board, [[X, X, X], [O, O, X], [X, O, O]]);
        assert!(board.is_full());
        assert!(!is_draw(&board));
    }
}
