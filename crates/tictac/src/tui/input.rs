//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves a row-major cursor on a `side`×`side` board.
///
/// Arrow keys and `hjkl` move one square; the cursor stops at the edges.
pub fn move_cursor(cursor: usize, side: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / side, cursor % side);

    let (row, col) = match key {
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, (col + 1).min(side - 1)),
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => ((row + 1).min(side - 1), col),
        _ => (row, col),
    };

    row * side + col
}

/// Square in the middle of the board (upper-left of the middle on even sides).
pub fn center(side: usize) -> usize {
    let mid = (side - 1) / 2;
    mid * side + mid
}
