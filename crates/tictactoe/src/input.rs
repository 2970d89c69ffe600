//! Keyboard cursor movement.

use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// Moves the cursor one cell with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        _ => (row, col),
    };

    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps the `1`-`9` keys to cell indices 0-8.
pub fn digit_to_index(c: char) -> Option<usize> {
    match c {
        '1'..='9' => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}
