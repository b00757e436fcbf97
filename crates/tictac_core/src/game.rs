//! Game state and transitions for N×N tic-tac-toe.

use crate::rules;
use crate::types::{Board, BoardSize, GameStatus, Player, Square};
use tracing::{debug, info, instrument};

/// Complete game state.
///
/// The status is derived from the board and recomputed inside every
/// transition. Once the game is decided the board is frozen until
/// [`GameState::reset`] or [`GameState::change_size`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameState {
    /// Creates a new game on a 3x3 board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::with_size(BoardSize::default())
    }

    /// Creates a new game on an empty board of the given size.
    #[instrument]
    pub fn with_size(size: BoardSize) -> Self {
        Self {
            board: Board::new(size),
            current_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.board.size()
    }

    /// Returns the player whose mark the next accepted move places.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Places the current player's mark at `index`.
    ///
    /// Moves on a decided game, on an occupied square, or outside the
    /// board are rejected without touching the state. Returns whether the
    /// move was accepted; a rejection is not an error.
    #[instrument(skip(self), fields(player = %self.current_player, status = ?self.status))]
    pub fn apply_move(&mut self, index: usize) -> bool {
        if self.status.is_over() {
            debug!("Move rejected: game is already over");
            return false;
        }

        if !self.board.is_empty(index) {
            debug!("Move rejected: square occupied or out of range");
            return false;
        }

        let player = self.current_player;
        self.board.set(index, Square::Occupied(player));
        self.current_player = player.opponent();
        self.status = rules::evaluate(&self.board);

        match self.status {
            GameStatus::Won(winner) => info!(%winner, "Game won"),
            GameStatus::Tie => info!("Game tied"),
            GameStatus::InProgress => debug!(next = %self.current_player, "Move applied"),
        }

        true
    }

    /// Clears the board, keeping its size. X moves first.
    #[instrument(skip(self), fields(size = %self.size()))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        *self = Self::with_size(self.size());
    }

    /// Starts over on an empty board of a new size. X moves first.
    #[instrument(skip(self), fields(from = %self.size()))]
    pub fn change_size(&mut self, size: BoardSize) {
        info!(to = %size, "Changing board size");
        *self = Self::with_size(size);
    }

    /// Headline describing the game: whose turn it is or how it ended.
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Next player: {}", self.current_player),
            GameStatus::Won(winner) => format!("{winner} Wins!"),
            GameStatus::Tie => "It's a Tie!".to_string(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
