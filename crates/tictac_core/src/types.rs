//! Core domain types for N×N tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Side length of a square board.
///
/// Only 3, 4 and 5 are playable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "usize", into = "usize")]
#[display("{_0}x{_0}")]
pub struct BoardSize(usize);

impl BoardSize {
    /// Smallest playable side length.
    pub const MIN: usize = 3;
    /// Largest playable side length.
    pub const MAX: usize = 5;

    /// Every playable size, smallest first.
    pub const ALL: [BoardSize; 3] = [BoardSize(3), BoardSize(4), BoardSize(5)];

    /// Validates a side length.
    #[track_caller]
    #[instrument]
    pub fn new(side: usize) -> Result<Self, SizeError> {
        if (Self::MIN..=Self::MAX).contains(&side) {
            Ok(Self(side))
        } else {
            Err(SizeError::unplayable(side))
        }
    }

    /// Side length of the board.
    pub fn side(self) -> usize {
        self.0
    }

    /// Number of squares on the board.
    pub fn cells(self) -> usize {
        self.0 * self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = SizeError;

    #[track_caller]
    fn try_from(side: usize) -> Result<Self, Self::Error> {
        Self::new(side)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

impl std::str::FromStr for BoardSize {
    type Err = SizeError;

    /// Accepts `N` or `NxN`.
    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| SizeError::unparsable(s))
        };

        let side = match trimmed.split_once(['x', 'X']) {
            Some((rows, cols)) => {
                let (rows, cols) = (parse(rows)?, parse(cols)?);
                if rows != cols {
                    return Err(SizeError::new(format!(
                        "Board size {rows}x{cols} is not square"
                    )));
                }
                rows
            }
            None => parse(trimmed)?,
        };
        Self::new(side)
    }
}

/// Unsupported or malformed board size.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Size error: {} at {}:{}", message, file, line)]
pub struct SizeError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SizeError {
    /// Creates a new size error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// A side length outside the playable range.
    #[track_caller]
    pub fn unplayable(side: usize) -> Self {
        Self::new(format!(
            "Board size {} is not playable (expected {}-{})",
            side,
            BoardSize::MIN,
            BoardSize::MAX
        ))
    }

    /// Text that is not a board size at all.
    #[track_caller]
    pub fn unparsable(input: &str) -> Self {
        Self::new(format!("'{}' is not a board size (expected N or NxN)", input))
    }
}

/// Square board stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board of the given size.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size.cells()],
        }
    }

    /// Builds a board from row-major squares.
    ///
    /// Returns `None` when the number of squares is not `size²`.
    pub fn from_squares(size: BoardSize, squares: Vec<Square>) -> Option<Self> {
        (squares.len() == size.cells()).then_some(Self { size, squares })
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Side length of the board.
    pub fn side(&self) -> usize {
        self.size.side()
    }

    /// Gets the square at the given index, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Sets the square at the given index.
    ///
    /// Out-of-range indices leave the board untouched and return `false`.
    pub fn set(&mut self, index: usize, square: Square) -> bool {
        match self.squares.get_mut(index) {
            Some(slot) => {
                *slot = square;
                true
            }
            None => false,
        }
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Converts a row and column to a row-major board index.
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        let side = self.side();
        (row < side && col < side).then_some(row * side + col)
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Iterates over board rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.side())
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Board is full with no winning line.
    Tie,
}

impl GameStatus {
    /// Whether the game has been decided.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size_accepts_playable_sides() {
        for side in 3..=5 {
            assert_eq!(BoardSize::new(side).unwrap().side(), side);
        }
    }

    #[test]
    fn test_board_size_rejects_other_sides() {
        for side in [0, 1, 2, 6, 10] {
            let err = BoardSize::new(side).unwrap_err();
            assert!(err.message.contains(&format!("Board size {side} is not playable")));
        }
    }

    #[test]
    fn test_board_size_parses_labels() {
        assert_eq!("4".parse::<BoardSize>().unwrap().side(), 4);
        assert_eq!("5x5".parse::<BoardSize>().unwrap().side(), 5);
        assert_eq!(" 3X3 ".parse::<BoardSize>().unwrap().side(), 3);
        assert!("7".parse::<BoardSize>().is_err());
    }

    #[test]
    fn test_board_size_rejects_mismatched_sides() {
        let err = "3x7".parse::<BoardSize>().unwrap_err();
        assert!(err.message.contains("3x7 is not square"));
        assert!("4x".parse::<BoardSize>().is_err());
    }

    #[test]
    fn test_board_size_non_numeric_has_own_message() {
        let err = "big".parse::<BoardSize>().unwrap_err();
        assert!(err.message.contains("'big' is not a board size"));
        assert!(!err.message.contains("not playable"));
    }

    #[test]
    fn test_board_size_display() {
        assert_eq!(BoardSize::ALL[1].to_string(), "4x4");
    }

    #[test]
    fn test_new_board_has_size_squared_cells() {
        for size in BoardSize::ALL {
            let board = Board::new(size);
            assert_eq!(board.squares().len(), size.cells());
            assert!(board.squares().iter().all(|s| *s == Square::Empty));
        }
    }

    #[test]
    fn test_set_out_of_range_is_ignored() {
        let mut board = Board::default();
        assert!(!board.set(9, Square::Occupied(Player::X)));
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_from_squares_checks_length() {
        let size = BoardSize::default();
        assert!(Board::from_squares(size, vec![Square::Empty; 8]).is_none());
        assert!(Board::from_squares(size, vec![Square::Empty; 9]).is_some());
    }

    #[test]
    fn test_index_row_major() {
        let board = Board::new(BoardSize::new(4).unwrap());
        assert_eq!(board.index(2, 3), Some(11));
        assert_eq!(board.index(4, 0), None);
    }

    #[test]
    fn test_board_size_serde_rejects_invalid() {
        assert!(serde_json::from_str::<BoardSize>("4").is_ok());
        assert!(serde_json::from_str::<BoardSize>("9").is_err());
    }
}
