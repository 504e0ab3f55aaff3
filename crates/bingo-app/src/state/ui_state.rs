use bingo_core::{Number, NumberError};
use bingo_game::CallOutcome;

use crate::{
    action::{AlertKind, ModalRequest},
    state::AppState,
};

// UiState holds ephemeral UI-only state (modal, input buffer, last call). It is not persisted.
#[derive(Debug)]
pub(crate) struct UiState {
    pub(crate) active_modal: Option<ModalRequest>,
    /// Text typed into the call field.
    pub(crate) call_input: String,
    /// Why the last submitted text was rejected.
    pub(crate) input_error: Option<NumberError>,
    pub(crate) last_call: Option<LastCall>,
}

impl UiState {
    /// Creates the UI state for `app_state`.
    ///
    /// A session saved after a win but before the dialog was dismissed
    /// reopens the dialog.
    #[must_use]
    pub(crate) fn new(app_state: &AppState) -> Self {
        let active_modal = app_state
            .game
            .is_won()
            .then_some(ModalRequest::Alert(AlertKind::Won));
        Self {
            active_modal,
            call_input: String::new(),
            input_error: None,
            last_call: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LastCall {
    pub(crate) number: Number,
    pub(crate) outcome: CallOutcome,
}
