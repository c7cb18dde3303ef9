//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tiktaktoe_core::Position;

/// Moves the cursor one square for an arrow (or h/j/k/l) key.
///
/// The cursor stops at the board edge; other keys leave it where it is.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = cursor.row_col();
    let (row, col) = match key {
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => (row + 1, col),
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, col + 1),
        _ => return cursor,
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
