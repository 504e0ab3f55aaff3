use bingo_core::Number;
use bingo_game::Game;
use bingo_generator::NumberCaller;

use crate::{game_factory, state::Settings};

// AppState holds persisted state (game + caller + settings). It is serialized for resume.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) game: Game,
    pub(crate) settings: Settings,
    caller: NumberCaller,
    next_number: Number,
    dirty: bool,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(game: Game) -> Self {
        let mut caller = game_factory::caller_for(game.seed());
        let next_number = caller.next_number();
        Self {
            game,
            settings: Settings::default(),
            caller,
            next_number,
            dirty: false,
        }
    }

    /// Restores the state of a saved session.
    ///
    /// `suggestions_drawn` counts every suggestion drawn so far, including the
    /// one currently on display, so it is at least one.
    #[must_use]
    pub(crate) fn from_parts(game: Game, suggestions_drawn: usize, settings: Settings) -> Self {
        let mut caller =
            game_factory::resume_caller_for(game.seed(), suggestions_drawn.saturating_sub(1));
        let next_number = caller.next_number();
        Self {
            game,
            settings,
            caller,
            next_number,
            dirty: false,
        }
    }

    pub(crate) fn access(&mut self) -> AppStateAccess<'_> {
        AppStateAccess { app_state: self }
    }

    #[must_use]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Returns the number the caller currently suggests.
    #[must_use]
    pub(crate) fn next_number(&self) -> Number {
        self.next_number
    }

    #[must_use]
    pub(crate) fn suggestions_drawn(&self) -> usize {
        self.caller.drawn()
    }

    pub(crate) fn advance_suggestion(&mut self) {
        self.next_number = self.caller.next_number();
    }

    /// Replaces the game, keeping the settings, and pairs a fresh caller with it.
    pub(crate) fn replace_game(&mut self, game: Game) {
        let settings = self.settings.clone();
        *self = Self {
            settings,
            dirty: self.dirty,
            ..Self::new(game)
        };
    }
}

#[derive(Debug)]
pub(crate) struct AppStateAccess<'a> {
    app_state: &'a mut AppState,
}

impl AppStateAccess<'_> {
    #[must_use]
    pub(crate) fn as_ref(&self) -> &AppState {
        self.app_state
    }

    pub(crate) fn as_mut(&mut self) -> &mut AppState {
        self.app_state.dirty = true;
        self.app_state
    }
}

#[cfg(test)]
mod tests {
    use bingo_core::Board;
    use bingo_generator::BoardSeed;

    use super::*;

    fn fixed_game() -> Game {
        Game::with_board(Board::identity(), BoardSeed::from_bytes([5; 32]))
    }

    #[test]
    fn suggestions_resume_where_they_left_off() {
        let mut played = AppState::new(fixed_game());
        for _ in 0..4 {
            played.advance_suggestion();
        }

        let restored = AppState::from_parts(
            fixed_game(),
            played.suggestions_drawn(),
            Settings::default(),
        );
        assert_eq!(restored.next_number(), played.next_number());
        assert_eq!(restored.suggestions_drawn(), played.suggestions_drawn());
    }

    #[test]
    fn replace_game_keeps_settings() {
        let mut app_state = AppState::new(fixed_game());
        app_state.settings.confirm_new_game = false;
        app_state.advance_suggestion();

        let other = Game::with_board(Board::identity(), BoardSeed::from_bytes([6; 32]));
        app_state.replace_game(other.clone());

        assert_eq!(app_state.game, other);
        assert!(!app_state.settings.confirm_new_game);
        assert_eq!(app_state.suggestions_drawn(), 1);
    }

    #[test]
    fn mutable_access_marks_dirty() {
        let mut app_state = AppState::new(fixed_game());
        assert!(!app_state.is_dirty());

        let _ = app_state.access().as_ref();
        assert!(!app_state.is_dirty());

        let _ = app_state.access().as_mut();
        assert!(app_state.is_dirty());

        app_state.clear_dirty();
        assert!(!app_state.is_dirty());
    }
}
