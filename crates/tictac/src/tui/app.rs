//! Application state and key handling.

use crossterm::event::KeyCode;
use tictac_core::{BoardSize, GameState, PreferenceStore, Theme};
use tracing::{debug, info, instrument, warn};

use super::input;

/// Main application state.
///
/// Owns the game, the cursor used to pick squares, and the preference
/// store the theme is written through.
pub struct App<S> {
    game: GameState,
    cursor: usize,
    theme: Theme,
    store: S,
    should_quit: bool,
}

impl<S: PreferenceStore> App<S> {
    /// Creates an application with a fresh game of `size` and the stored theme.
    #[instrument(skip(store))]
    pub fn new(size: BoardSize, store: S) -> Self {
        let theme = Theme::load(&store);
        info!(%theme, "Loaded theme preference");
        Self {
            game: GameState::with_size(size),
            cursor: input::center(size.side()),
            theme,
            store,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Index of the square under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Gets the preference store.
    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Applies one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if !self.game.apply_move(self.cursor) {
                    debug!(cursor = self.cursor, "Move ignored");
                }
            }
            KeyCode::Char('r') => self.game.reset(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char(c @ '3'..='5') => {
                if let Some(side) = c.to_digit(10) {
                    self.change_size(side as usize);
                }
            }
            code => self.cursor = input::move_cursor(self.cursor, self.game.size().side(), code),
        }
    }

    fn change_size(&mut self, side: usize) {
        match BoardSize::new(side) {
            Ok(size) => {
                self.game.change_size(size);
                self.cursor = input::center(side);
            }
            Err(e) => warn!(error = %e, "Ignoring size change"),
        }
    }

    /// Switches theme and persists the choice. A failed save keeps the
    /// new theme for this session.
    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        info!(theme = %self.theme, "Theme toggled");
        if let Err(e) = self.theme.save(&mut self.store) {
            warn!(error = %e, "Failed to persist theme");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_core::{GameStatus, MemoryPreferenceStore, Player, Square, THEME_KEY};

    fn app() -> App<MemoryPreferenceStore> {
        App::new(BoardSize::default(), MemoryPreferenceStore::new())
    }

    #[test]
    fn test_starts_centered() {
        let app = app();
        assert_eq!(app.cursor(), 4);
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn test_enter_places_mark_under_cursor() {
        let mut app = app();
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.game().board().get(3), Some(Square::Occupied(Player::X)));
        assert_eq!(app.game().current_player(), Player::O);
    }

    #[test]
    fn test_space_on_occupied_square_is_ignored() {
        let mut app = app();
        app.handle_key(KeyCode::Char(' '));
        app.handle_key(KeyCode::Char(' '));
        assert_eq!(app.game().board().occupied(), 1);
        assert_eq!(app.game().current_player(), Player::O);
    }

    #[test]
    fn test_play_to_win_then_reset() {
        let mut app = app();
        // X: 4, 0, 8 on the main diagonal. O: 1, 2.
        let keys = [
            KeyCode::Enter,
            KeyCode::Up,
            KeyCode::Enter,
            KeyCode::Left,
            KeyCode::Enter,
            KeyCode::Right,
            KeyCode::Right,
            KeyCode::Enter,
            KeyCode::Down,
            KeyCode::Down,
            KeyCode::Enter,
        ];
        for key in keys {
            app.handle_key(key);
        }
        assert_eq!(app.game().status(), GameStatus::Won(Player::X));

        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.game().status(), GameStatus::InProgress);
        assert_eq!(app.game().board().occupied(), 0);
    }

    #[test]
    fn test_size_keys_change_board() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.game().size().side(), 5);
        assert_eq!(app.game().board().occupied(), 0);
        assert_eq!(app.cursor(), 12);

        app.handle_key(KeyCode::Char('4'));
        assert_eq!(app.game().board().squares().len(), 16);
    }

    #[test]
    fn test_theme_toggle_is_persisted() {
        let mut app = app();
        app.handle_key(KeyCode::Char('t'));
        assert_eq!(app.theme(), Theme::Dark);
        assert_eq!(app.store().get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_theme_loaded_from_store() {
        let mut store = MemoryPreferenceStore::new();
        Theme::Dark.save(&mut store).unwrap();
        let app = App::new(BoardSize::default(), store);
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());
    }
}
