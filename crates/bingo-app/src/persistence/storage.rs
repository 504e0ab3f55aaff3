use bingo_core::{Board, BoardError, CELL_COUNT, Number, NumberError};
use bingo_game::{Game, GameError};
use bingo_generator::{BoardSeed, SeedParseError};
use eframe::Storage;
use serde::{Deserialize, Serialize};

use crate::state::{AppState, Settings};

const APP_STATE_KEY: &str = "bingo/app_state";
const FORMAT_VERSION: u32 = 1;

/// Serialized form of [`AppState`].
///
/// The game is stored as its board and call history and rebuilt by replaying
/// the calls, so a saved session can never hold marks its history does not
/// explain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct AppStateDto {
    version: u32,
    board: Vec<u8>,
    seed: String,
    called: Vec<u8>,
    suggestions_drawn: usize,
    #[serde(default)]
    settings: Settings,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum RestoreError {
    #[display("unsupported format version {version}")]
    #[from(skip)]
    UnsupportedVersion { version: u32 },
    #[display("board has {len} cells")]
    #[from(skip)]
    BoardLength { len: usize },
    #[display("invalid board")]
    Board { source: BoardError },
    #[display("invalid seed")]
    Seed { source: SeedParseError },
    #[display("invalid called number")]
    Number { source: NumberError },
    #[display("invalid call history")]
    Game { source: GameError },
    #[display("{drawn} suggestions drawn for {calls} calls")]
    #[from(skip)]
    SuggestionCount { drawn: usize, calls: usize },
}

impl From<&AppState> for AppStateDto {
    fn from(app_state: &AppState) -> Self {
        let game = &app_state.game;
        Self {
            version: FORMAT_VERSION,
            board: game.board().to_values().to_vec(),
            seed: game.seed().to_string(),
            called: game.called_numbers().iter().copied().map(u8::from).collect(),
            suggestions_drawn: app_state.suggestions_drawn(),
            settings: app_state.settings.clone(),
        }
    }
}

impl TryFrom<AppStateDto> for AppState {
    type Error = RestoreError;

    fn try_from(dto: AppStateDto) -> Result<Self, Self::Error> {
        let AppStateDto {
            version,
            board,
            seed,
            called,
            suggestions_drawn,
            settings,
        } = dto;

        if version != FORMAT_VERSION {
            return Err(RestoreError::UnsupportedVersion { version });
        }
        let values: [u8; CELL_COUNT] = board
            .try_into()
            .map_err(|board: Vec<u8>| RestoreError::BoardLength { len: board.len() })?;
        let board = Board::try_from(values)?;
        let seed = seed.parse::<BoardSeed>()?;
        let called = called
            .into_iter()
            .map(Number::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let game = Game::from_parts(board, seed, &called)?;
        // One suggestion is drawn per game and one more after every call.
        if suggestions_drawn != called.len() + 1 {
            return Err(RestoreError::SuggestionCount {
                drawn: suggestions_drawn,
                calls: called.len(),
            });
        }

        Ok(AppState::from_parts(game, suggestions_drawn, settings))
    }
}

/// Loads the saved session, if there is a usable one.
///
/// Missing, unreadable, or inconsistent data is logged and ignored.
pub(crate) fn load_state(storage: &dyn Storage) -> Option<AppState> {
    let dto = eframe::get_value::<AppStateDto>(storage, APP_STATE_KEY)?;
    match AppState::try_from(dto) {
        Ok(app_state) => {
            log::info!("restored saved game, seed={}", app_state.game.seed());
            Some(app_state)
        }
        Err(err) => {
            log::warn!("discarding saved game: {err}");
            None
        }
    }
}

pub(crate) fn save_state(storage: &mut dyn Storage, app_state: &AppState) {
    let dto = AppStateDto::from(app_state);
    eframe::set_value(storage, APP_STATE_KEY, &dto);
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::{
        action::{AlertKind, ModalRequest},
        state::UiState,
    };

    #[derive(Default)]
    struct MemoryStorage {
        values: HashMap<String, String>,
    }

    impl Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.values.insert(key.to_owned(), value);
        }

        fn flush(&mut self) {}
    }

    fn played_state() -> AppState {
        let mut game = Game::with_board(Board::identity(), BoardSeed::from_bytes([8; 32]));
        for value in [3, 17, 3, 22] {
            game = game.call_number(Number::new(value)).unwrap().0;
        }
        let mut app_state = AppState::new(game);
        for _ in 0..4 {
            app_state.advance_suggestion();
        }
        app_state.settings.highlight_winning_lines = false;
        app_state
    }

    #[test]
    fn saved_state_is_restored() {
        let app_state = played_state();
        let mut storage = MemoryStorage::default();

        save_state(&mut storage, &app_state);
        let restored = load_state(&storage).unwrap();

        assert_eq!(restored.game, app_state.game);
        assert_eq!(restored.settings, app_state.settings);
        assert_eq!(restored.next_number(), app_state.next_number());
        assert_eq!(restored.suggestions_drawn(), app_state.suggestions_drawn());
        assert!(!restored.is_dirty());
    }

    #[test]
    fn missing_state_loads_nothing() {
        assert!(load_state(&MemoryStorage::default()).is_none());
    }

    #[test]
    fn unparsable_state_is_ignored() {
        let mut storage = MemoryStorage::default();
        storage.set_string(APP_STATE_KEY, "not ron".to_owned());
        assert!(load_state(&storage).is_none());
    }

    #[test]
    fn duplicate_board_is_rejected() {
        let mut dto = AppStateDto::from(&played_state());
        dto.board[1] = dto.board[0];
        assert!(matches!(
            AppState::try_from(dto),
            Err(RestoreError::Board { .. })
        ));
    }

    #[test]
    fn short_board_is_rejected() {
        let mut dto = AppStateDto::from(&played_state());
        dto.board.pop();
        assert!(matches!(
            AppState::try_from(dto),
            Err(RestoreError::BoardLength { len: 24 })
        ));
    }

    #[test]
    fn calls_after_a_win_are_rejected() {
        let mut dto = AppStateDto::from(&played_state());
        dto.called = vec![1, 2, 3, 4, 5, 6];
        assert!(matches!(
            AppState::try_from(dto),
            Err(RestoreError::Game {
                source: GameError::AlreadyWon
            })
        ));
    }

    #[test]
    fn unknown_version_is_rejected() {
        let mut dto = AppStateDto::from(&played_state());
        dto.version = FORMAT_VERSION + 1;
        assert!(matches!(
            AppState::try_from(dto),
            Err(RestoreError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn mismatched_suggestion_count_is_rejected() {
        for drawn in [0, 1, 6, usize::MAX] {
            let mut dto = AppStateDto::from(&played_state());
            dto.suggestions_drawn = drawn;
            assert!(matches!(
                AppState::try_from(dto),
                Err(RestoreError::SuggestionCount { calls: 4, .. })
            ));
        }
    }

    #[test]
    fn restored_won_game_reopens_the_win_dialog() {
        let mut game = Game::with_board(Board::identity(), BoardSeed::from_bytes([9; 32]));
        for value in [5, 9, 13, 17, 21] {
            game = game.call_number(Number::new(value)).unwrap().0;
        }
        let mut app_state = AppState::new(game);
        for _ in 0..5 {
            app_state.advance_suggestion();
        }
        let mut storage = MemoryStorage::default();

        save_state(&mut storage, &app_state);
        let restored = load_state(&storage).unwrap();
        let ui_state = UiState::new(&restored);

        assert!(restored.game.is_won());
        assert_eq!(
            ui_state.active_modal,
            Some(ModalRequest::Alert(AlertKind::Won))
        );
    }
}
