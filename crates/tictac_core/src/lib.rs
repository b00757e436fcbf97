//! Pure N×N tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Types**: players, squares, validated board sizes and the board itself
//! - **Rules**: winning-line generation, win and tie detection
//! - **Game**: the game state and its three transitions (move, reset, resize)
//! - **Theme**: light/dark preference behind an injected key-value store
//!
//! # Example
//!
//! ```
//! use tictac_core::{GameState, GameStatus, Player};
//!
//! let mut game = GameState::new();
//! for index in [0, 1, 4, 2, 8] {
//!     game.apply_move(index);
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
pub mod rules;
mod theme;
mod types;

pub use game::GameState;
pub use rules::{check_winner, evaluate, is_full, winning_lines};
pub use theme::{MemoryPreferenceStore, PreferenceStore, PrefsError, THEME_KEY, Theme};
pub use types::{Board, BoardSize, GameStatus, Player, SizeError, Square};
