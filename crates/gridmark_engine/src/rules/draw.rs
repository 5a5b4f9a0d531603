//! Draw detection.

use super::win::scan_winner;
use crate::types::Board;

/// Checks whether the board is a draw: full, with no completed line.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && scan_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Player};

    #[test]
    fn empty_board_is_not_a_draw() {
        assert!(!is_draw(&Board::new(3)));
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        // O X X
        // X X O
        // O O X
        let layout = [
            [Player::O, Player::X, Player::X],
            [Player::X, Player::X, Player::O],
            [Player::O, Player::O, Player::X],
        ];
        let mut board = Board::new(3);
        for (row, marks) in layout.iter().enumerate() {
            for (col, &player) in marks.iter().enumerate() {
                board.set(row, col, Cell::Occupied(player));
            }
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn full_board_with_line_is_not_a_draw() {
        // X X X
        // O O X
        // X O O
        let layout = [
            [Player::X, Player::X, Player::X],
            [Player::O, Player::O, Player::X],
            [Player::X, Player::O, Player::O],
        ];
        let mut board = Board::new(3);
        for (row, marks) in layout.iter().enumerate() {
            for (col, &player) in marks.iter().enumerate() {
                board.set(row, col, Cell::Occupied(player));
            }
        }
        assert!(!is_draw(&board));
    }
}
