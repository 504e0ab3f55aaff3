use bingo_core::Number;

use crate::{
    action::{Action, ActionRequestQueue, AlertKind, ConfirmKind, ModalRequest},
    game_factory,
    state::{AppState, AppStateAccess, LastCall, UiState},
};

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: AppStateAccess<'a>,
    ui_state: &'a mut UiState,
}

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    let mut ctx = ActionContext {
        app_state: app_state.access(),
        ui_state,
    };
    ctx.handle_action(action);
}

impl ActionContext<'_> {
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::SubmitCallInput => self.submit_call_input(),
            Action::CallNumber(number) => self.call_number(number),
            Action::CallSuggestedNumber => {
                let number = self.app_state.as_ref().next_number();
                self.handle_action(Action::CallNumber(number));
            }
            Action::RequestNewGame => {
                if self.app_state.as_ref().settings.confirm_new_game {
                    self.ui_state.active_modal = Some(ModalRequest::Confirm(ConfirmKind::NewGame));
                } else {
                    self.start_new_game();
                }
            }
            Action::StartNewGame => self.start_new_game(),
            Action::AcknowledgeWin => {
                self.ui_state.active_modal = None;
                self.start_new_game();
            }
            Action::OpenModal(modal_request) => {
                self.ui_state.active_modal = Some(modal_request);
            }
            Action::CloseModal => {
                self.ui_state.active_modal = None;
            }
            Action::UpdateSettings(settings) => {
                self.app_state.as_mut().settings = settings;
            }
        }
    }

    fn submit_call_input(&mut self) {
        match self.ui_state.call_input.parse::<Number>() {
            Ok(number) => {
                self.ui_state.call_input.clear();
                self.handle_action(Action::CallNumber(number));
            }
            Err(err) => {
                log::warn!("rejected call input: {err}");
                self.ui_state.input_error = Some(err);
            }
        }
    }

    fn call_number(&mut self, number: Number) {
        self.ui_state.input_error = None;

        let app_state = self.app_state.as_ref();
        let (game, outcome) = match app_state.game.call_number(number) {
            Ok(result) => result,
            Err(err) => {
                log::warn!("ignored call of {number}: {err}");
                return;
            }
        };

        let app_state = self.app_state.as_mut();
        app_state.game = game;
        app_state.advance_suggestion();
        self.ui_state.last_call = Some(LastCall { number, outcome });

        if outcome.completes_win() {
            log::info!(
                "game won after {} calls",
                app_state.game.called_numbers().len()
            );
            self.ui_state.active_modal = Some(ModalRequest::Alert(AlertKind::Won));
        }
    }

    fn start_new_game(&mut self) {
        self.app_state
            .as_mut()
            .replace_game(game_factory::generate_random_game());
        self.ui_state.call_input.clear();
        self.ui_state.input_error = None;
        self.ui_state.last_call = None;
    }
}

#[cfg(test)]
mod tests {
    use bingo_core::{Board, Number, NumberError, Position};
    use bingo_game::{CallOutcome, Game};
    use bingo_generator::BoardSeed;

    use super::handle;
    use crate::{
        action::{Action, AlertKind, ConfirmKind, ModalRequest},
        state::{AppState, LastCall, UiState},
    };

    fn fixed_game() -> Game {
        Game::with_board(Board::identity(), BoardSeed::from_bytes([1; 32]))
    }

    fn fixed_states() -> (AppState, UiState) {
        let app_state = AppState::new(fixed_game());
        let ui_state = UiState::new(&app_state);
        (app_state, ui_state)
    }

    fn call_all(app_state: &mut AppState, ui_state: &mut UiState, values: &[u8]) {
        for &value in values {
            handle(app_state, ui_state, Action::CallNumber(Number::new(value)));
        }
    }

    #[test]
    fn submitted_input_marks_the_cell_and_clears_the_field() {
        let (mut app_state, mut ui_state) = fixed_states();
        ui_state.call_input = " 7 ".to_owned();

        handle(&mut app_state, &mut ui_state, Action::SubmitCallInput);

        assert!(app_state.game.marks().is_marked(Position::new(1, 1)));
        assert!(ui_state.call_input.is_empty());
        assert_eq!(ui_state.input_error, None);
        assert_eq!(
            ui_state.last_call,
            Some(LastCall {
                number: Number::new(7),
                outcome: CallOutcome::Marked {
                    position: Position::new(1, 1),
                    completes_win: false,
                },
            })
        );
        assert!(app_state.is_dirty());
    }

    #[test]
    fn invalid_input_reports_an_error_and_leaves_the_game_alone() {
        let (mut app_state, mut ui_state) = fixed_states();
        let before = app_state.game.clone();
        ui_state.call_input = "abc".to_owned();

        handle(&mut app_state, &mut ui_state, Action::SubmitCallInput);

        assert_eq!(app_state.game, before);
        assert_eq!(
            ui_state.input_error,
            Some(NumberError::Parse {
                input: "abc".to_owned()
            })
        );
        assert_eq!(ui_state.call_input, "abc");
        assert!(!app_state.is_dirty());
    }

    #[test]
    fn submitted_and_suggested_calls_match_a_direct_call() {
        let (mut direct_app, mut direct_ui) = fixed_states();
        let suggested = direct_app.next_number();
        handle(&mut direct_app, &mut direct_ui, Action::CallNumber(suggested));

        let (mut submitted_app, mut submitted_ui) = fixed_states();
        submitted_ui.call_input = suggested.to_string();
        handle(&mut submitted_app, &mut submitted_ui, Action::SubmitCallInput);

        let (mut suggested_app, mut suggested_ui) = fixed_states();
        handle(&mut suggested_app, &mut suggested_ui, Action::CallSuggestedNumber);

        for (app_state, ui_state) in [
            (&submitted_app, &submitted_ui),
            (&suggested_app, &suggested_ui),
        ] {
            assert_eq!(app_state.game, direct_app.game);
            assert_eq!(app_state.next_number(), direct_app.next_number());
            assert_eq!(ui_state.last_call, direct_ui.last_call);
        }
    }

    #[test]
    fn out_of_range_input_is_rejected() {
        let (mut app_state, mut ui_state) = fixed_states();
        ui_state.call_input = "26".to_owned();

        handle(&mut app_state, &mut ui_state, Action::SubmitCallInput);

        assert_eq!(
            ui_state.input_error,
            Some(NumberError::OutOfRange { value: 26 })
        );
        assert!(app_state.game.called_numbers().is_empty());
    }

    #[test]
    fn every_call_draws_a_new_suggestion() {
        let (mut app_state, mut ui_state) = fixed_states();
        assert_eq!(app_state.suggestions_drawn(), 1);

        let suggested = app_state.next_number();
        handle(&mut app_state, &mut ui_state, Action::CallSuggestedNumber);

        assert_eq!(app_state.game.last_called(), Some(suggested));
        assert_eq!(app_state.suggestions_drawn(), 2);
    }

    #[test]
    fn completing_a_line_opens_the_win_dialog() {
        let (mut app_state, mut ui_state) = fixed_states();

        call_all(&mut app_state, &mut ui_state, &[1, 2, 3, 4]);
        assert_eq!(ui_state.active_modal, None);

        call_all(&mut app_state, &mut ui_state, &[5]);
        assert!(app_state.game.is_won());
        assert_eq!(
            ui_state.active_modal,
            Some(ModalRequest::Alert(AlertKind::Won))
        );
    }

    #[test]
    fn acknowledging_the_win_starts_a_new_game() {
        let (mut app_state, mut ui_state) = fixed_states();
        app_state.settings.show_next_number = false;
        call_all(&mut app_state, &mut ui_state, &[1, 7, 13, 19, 25]);
        assert!(app_state.game.is_won());

        handle(&mut app_state, &mut ui_state, Action::AcknowledgeWin);

        assert_eq!(ui_state.active_modal, None);
        assert!(!app_state.game.is_won());
        assert!(app_state.game.marks().is_empty());
        assert!(app_state.game.called_numbers().is_empty());
        assert_eq!(ui_state.last_call, None);
        assert!(!app_state.settings.show_next_number);
    }

    #[test]
    fn calls_after_a_win_are_ignored() {
        let (mut app_state, mut ui_state) = fixed_states();
        call_all(&mut app_state, &mut ui_state, &[21, 22, 23, 24, 25]);
        let won = app_state.game.clone();

        call_all(&mut app_state, &mut ui_state, &[1]);

        assert_eq!(app_state.game, won);
    }

    #[test]
    fn new_game_request_asks_for_confirmation_by_default() {
        let (mut app_state, mut ui_state) = fixed_states();
        call_all(&mut app_state, &mut ui_state, &[9]);
        let before = app_state.game.clone();

        handle(&mut app_state, &mut ui_state, Action::RequestNewGame);

        assert_eq!(
            ui_state.active_modal,
            Some(ModalRequest::Confirm(ConfirmKind::NewGame))
        );
        assert_eq!(app_state.game, before);
    }

    #[test]
    fn new_game_request_without_confirmation_replaces_the_game() {
        let (mut app_state, mut ui_state) = fixed_states();
        app_state.settings.confirm_new_game = false;
        call_all(&mut app_state, &mut ui_state, &[9]);

        handle(&mut app_state, &mut ui_state, Action::RequestNewGame);

        assert_eq!(ui_state.active_modal, None);
        assert!(app_state.game.called_numbers().is_empty());
    }

    #[test]
    fn close_modal_clears_active_modal() {
        let (mut app_state, mut ui_state) = fixed_states();
        ui_state.active_modal = Some(ModalRequest::Settings);

        handle(&mut app_state, &mut ui_state, Action::CloseModal);

        assert!(ui_state.active_modal.is_none());
    }
}
