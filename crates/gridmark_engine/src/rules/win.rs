//! Win detection.

use crate::types::{Board, Cell, Player};
use tracing::instrument;

/// Checks whether the mark at the just-played cell completes a line.
///
/// Returns the owner of the completed line, or `None`. A move can only
/// complete a line that passes through the cell it filled, so only the
/// played row, the played column, and any diagonal containing the cell
/// are examined.
#[instrument(skip(board))]
pub fn line_winner(board: &Board, row: usize, col: usize) -> Option<Player> {
    let size = board.size();
    let player = board.get(row, col)?.player()?;
    let owns = |r: usize, c: usize| board.get(r, c) == Some(Cell::Occupied(player));

    if (0..size).all(|c| owns(row, c)) {
        return Some(player);
    }
    if (0..size).all(|r| owns(r, col)) {
        return Some(player);
    }
    if row == col && (0..size).all(|i| owns(i, i)) {
        return Some(player);
    }
    if row + col == size - 1 && (0..size).all(|i| owns(i, size - 1 - i)) {
        return Some(player);
    }

    None
}

/// Scans the whole board for a completed line.
///
/// The engine never needs this: the local check above covers every move.
/// It backs the winner invariant and cross-checks in tests.
pub fn scan_winner(board: &Board) -> Option<Player> {
    let size = board.size();
    if size == 0 {
        return None;
    }

    for row in 0..size {
        if let Some(player) = line_owner(board, (0..size).map(|col| (row, col))) {
            return Some(player);
        }
    }
    for col in 0..size {
        if let Some(player) = line_owner(board, (0..size).map(|row| (row, col))) {
            return Some(player);
        }
    }
    if let Some(player) = line_owner(board, (0..size).map(|i| (i, i))) {
        return Some(player);
    }
    line_owner(board, (0..size).map(|i| (i, size - 1 - i)))
}

fn line_owner(board: &Board, mut coords: impl Iterator<Item = (usize, usize)>) -> Option<Player> {
    let (row, col) = coords.next()?;
    let owner = board.get(row, col)?.player()?;
    for (row, col) in coords {
        if board.get(row, col) != Some(Cell::Occupied(owner)) {
            return None;
        }
    }
    Some(owner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, marks: &[(usize, usize, Player)]) -> Board {
        let mut board = Board::new(size);
        for &(row, col, player) in marks {
            board.set(row, col, Cell::Occupied(player));
        }
        board
    }

    #[test]
    fn empty_board_has_no_winner() {
        let board = Board::new(3);
        assert_eq!(scan_winner(&board), None);
        assert_eq!(line_winner(&board, 0, 0), None);
    }

    #[test]
    fn top_row_wins() {
        let board = board_with(
            3,
            &[(0, 0, Player::X), (0, 1, Player::X), (0, 2, Player::X)],
        );
        assert_eq!(line_winner(&board, 0, 2), Some(Player::X));
        assert_eq!(scan_winner(&board), Some(Player::X));
    }

    #[test]
    fn column_wins() {
        let board = board_with(
            3,
            &[(0, 1, Player::O), (1, 1, Player::O), (2, 1, Player::O)],
        );
        assert_eq!(line_winner(&board, 1, 1), Some(Player::O));
        assert_eq!(scan_winner(&board), Some(Player::O));
    }

    #[test]
    fn main_diagonal_wins() {
        let board = board_with(
            3,
            &[(0, 0, Player::O), (1, 1, Player::O), (2, 2, Player::O)],
        );
        assert_eq!(line_winner(&board, 1, 1), Some(Player::O));
        assert_eq!(scan_winner(&board), Some(Player::O));
    }

    #[test]
    fn anti_diagonal_wins() {
        let board = board_with(
            3,
            &[(0, 2, Player::X), (1, 1, Player::X), (2, 0, Player::X)],
        );
        assert_eq!(line_winner(&board, 2, 0), Some(Player::X));
        assert_eq!(scan_winner(&board), Some(Player::X));
    }

    #[test]
    fn incomplete_line_is_not_a_win() {
        let board = board_with(3, &[(0, 0, Player::X), (0, 1, Player::X)]);
        assert_eq!(line_winner(&board, 0, 1), None);
        assert_eq!(scan_winner(&board), None);
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        let board = board_with(
            3,
            &[(0, 0, Player::X), (0, 1, Player::O), (0, 2, Player::X)],
        );
        assert_eq!(line_winner(&board, 0, 2), None);
    }

    #[test]
    fn off_diagonal_cell_skips_diagonal_checks() {
        // (0, 1) lies on neither diagonal; a filled main diagonal elsewhere
        // must not be attributed to it.
        let board = board_with(
            3,
            &[(0, 0, Player::X), (1, 1, Player::X), (2, 2, Player::X), (0, 1, Player::O)],
        );
        assert_eq!(line_winner(&board, 0, 1), None);
        assert_eq!(scan_winner(&board), Some(Player::X));
    }

    #[test]
    fn three_in_a_row_is_not_enough_on_four_by_four() {
        let board = board_with(
            4,
            &[(0, 0, Player::X), (0, 1, Player::X), (0, 2, Player::X)],
        );
        assert_eq!(line_winner(&board, 0, 2), None);
        assert_eq!(scan_winner(&board), None);
    }

    #[test]
    fn full_row_wins_on_four_by_four() {
        let board = board_with(
            4,
            &[
                (2, 0, Player::O),
                (2, 1, Player::O),
                (2, 2, Player::O),
                (2, 3, Player::O),
            ],
        );
        assert_eq!(line_winner(&board, 2, 3), Some(Player::O));
        assert_eq!(scan_winner(&board), Some(Player::O));
    }
}
