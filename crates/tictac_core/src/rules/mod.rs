//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are separated from board
//! storage so the game state can recompute its status after every
//! transition without holding any derived data.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, winning_lines};

use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Evaluates a board: a winning line beats a full board.
#[instrument(skip(board), fields(size = %board.size()))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Tie
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoardSize, Player, Square};

    fn board_from(size: BoardSize, marks: &str) -> Board {
        let squares = marks
            .chars()
            .map(|c| match c {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            })
            .collect();
        Board::from_squares(size, squares).expect("board length")
    }

    #[test]
    fn test_empty_board_in_progress_for_every_size() {
        for size in BoardSize::ALL {
            assert_eq!(evaluate(&Board::new(size)), GameStatus::InProgress);
        }
    }

    #[test]
    fn test_single_symbol_board_is_won() {
        for size in BoardSize::ALL {
            for player in [Player::X, Player::O] {
                let board =
                    Board::from_squares(size, vec![Square::Occupied(player); size.cells()])
                        .expect("board length");
                assert_eq!(evaluate(&board), GameStatus::Won(player));
            }
        }
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        let board = board_from(BoardSize::default(), "XOXXOOOXO");
        assert_eq!(evaluate(&board), GameStatus::Tie);
    }

    #[test]
    fn test_win_on_last_square_beats_tie() {
        let board = board_from(BoardSize::default(), "XOXOXOOXX");
        assert_eq!(evaluate(&board), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_partial_board_in_progress() {
        let board = board_from(BoardSize::default(), "XO..X....");
        assert_eq!(evaluate(&board), GameStatus::InProgress);
    }
}
