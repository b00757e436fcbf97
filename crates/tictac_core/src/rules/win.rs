//! Win detection logic for N×N tic-tac-toe.

use crate::types::{Board, BoardSize, Player, Square};
use tracing::instrument;

/// Generates every winning line for a board size.
///
/// Lines come out in a fixed order: rows top to bottom, columns left to
/// right, the main diagonal, then the anti-diagonal. There are always
/// `2 * side + 2` of them and each holds `side` indices.
#[instrument]
pub fn winning_lines(size: BoardSize) -> Vec<Vec<usize>> {
    let n = size.side();
    let rows = (0..n).map(|row| (0..n).map(|col| row * n + col).collect::<Vec<_>>());
    let cols = (0..n).map(|col| (0..n).map(|row| col + row * n).collect::<Vec<_>>());
    let main: Vec<usize> = (0..n).map(|i| i * (n + 1)).collect();
    let anti: Vec<usize> = (0..n).map(|i| (i + 1) * (n - 1)).collect();

    rows.chain(cols).chain([main, anti]).collect()
}

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first full line in [`winning_lines`] order,
/// `None` otherwise.
#[instrument(skip(board), fields(size = %board.size()))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_lines(board.size())
        .iter()
        .find_map(|line| line_owner(board, line))
}

fn line_owner(board: &Board, line: &[usize]) -> Option<Player> {
    let (&first, rest) = line.split_first()?;
    match board.get(first)? {
        Square::Occupied(player)
            if rest
                .iter()
                .all(|&i| board.get(i) == Some(Square::Occupied(player))) =>
        {
            Some(player)
        }
        _ => None,
    }
}
