//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves the cursor one cell, clamped to a `size × size` board.
pub fn move_cursor(cursor: (usize, usize), key: KeyCode, size: usize) -> (usize, usize) {
    let (row, col) = cursor;
    let max = size.saturating_sub(1);

    match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(max), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(max)),
        _ => cursor,
    }
}
