use bingo_core::{CELL_COUNT, Position};
use bingo_game::CallOutcome;

use crate::{
    state::{AppState, UiState},
    ui::{
        call_panel::CallPanelViewModel,
        game_screen::GameScreenViewModel,
        grid::{GridCell, GridViewModel, GridVisualState},
        modal::SettingsViewModel,
        status_line::{GameStatus, StatusLineViewModel},
    },
};

fn build_grid(app_state: &AppState, ui_state: &UiState) -> [GridCell; CELL_COUNT] {
    let game = &app_state.game;
    let marks = game.marks();
    let last_marked = ui_state.last_call.and_then(|call| match call.outcome {
        CallOutcome::Marked { position, .. } | CallOutcome::AlreadyMarked { position } => {
            Some(position)
        }
        CallOutcome::NotOnBoard => None,
    });

    Position::ALL.map(|pos| {
        let mut visual_state = GridVisualState::empty();
        if marks.is_marked(pos) {
            visual_state |= GridVisualState::MARKED;
        }
        if marks.is_on_winning_line(pos) {
            visual_state |= GridVisualState::WINNING_LINE;
        }
        if last_marked == Some(pos) {
            visual_state |= GridVisualState::LAST_CALLED;
        }
        GridCell {
            number: game.board()[pos],
            visual_state,
        }
    })
}

#[must_use]
pub(crate) fn build_game_screen_view_model(
    app_state: &AppState,
    ui_state: &UiState,
) -> GameScreenViewModel {
    let game = &app_state.game;
    let settings = &app_state.settings;

    let grid_vm = GridViewModel::new(build_grid(app_state, ui_state), settings);

    let is_won = game.is_won();
    let call_panel_vm = CallPanelViewModel::new(
        settings.show_next_number.then(|| app_state.next_number()),
        ui_state.input_error.as_ref().map(ToString::to_string),
        !is_won,
    );

    let status = if is_won {
        GameStatus::Won
    } else {
        GameStatus::InProgress {
            marked: game.marks().len(),
        }
    };
    let status_line_vm = StatusLineViewModel::new(status, ui_state.last_call);

    GameScreenViewModel::new(grid_vm, call_panel_vm, status_line_vm)
}

#[must_use]
pub(crate) fn build_settings_view_model(app_state: &AppState) -> SettingsViewModel {
    SettingsViewModel::new(&app_state.settings)
}

#[cfg(test)]
mod tests {
    use bingo_core::{Board, Line, Number, NumberError};
    use bingo_game::Game;
    use bingo_generator::BoardSeed;

    use super::*;
    use crate::action::{Action, handler::handle};

    fn fixed_states() -> (AppState, UiState) {
        let game = Game::with_board(Board::identity(), BoardSeed::from_bytes([2; 32]));
        let app_state = AppState::new(game);
        let ui_state = UiState::new(&app_state);
        (app_state, ui_state)
    }

    fn call(app_state: &mut AppState, ui_state: &mut UiState, value: u8) {
        handle(app_state, ui_state, Action::CallNumber(Number::new(value)));
    }

    #[test]
    fn marked_cells_are_flagged() {
        let (mut app_state, mut ui_state) = fixed_states();
        call(&mut app_state, &mut ui_state, 8);
        call(&mut app_state, &mut ui_state, 14);

        let grid = build_grid(&app_state, &ui_state);

        let marked: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|pos| grid[pos.index()].visual_state.contains(GridVisualState::MARKED))
            .collect();
        assert_eq!(marked, [Position::new(2, 1), Position::new(3, 2)]);
        assert_eq!(
            grid[Position::new(3, 2).index()].visual_state,
            GridVisualState::MARKED | GridVisualState::LAST_CALLED
        );
        assert_eq!(grid[0].number, Number::new(1));
    }

    #[test]
    fn winning_line_cells_are_flagged() {
        let (mut app_state, mut ui_state) = fixed_states();
        for value in [3, 8, 13, 18, 23] {
            call(&mut app_state, &mut ui_state, value);
        }

        let grid = build_grid(&app_state, &ui_state);

        for pos in Position::ALL {
            let on_line = Line::Column { x: 2 }.contains(pos);
            assert_eq!(
                grid[pos.index()]
                    .visual_state
                    .contains(GridVisualState::WINNING_LINE),
                on_line,
                "{pos}"
            );
        }
    }

    #[test]
    fn call_panel_reflects_settings_and_errors() {
        let (mut app_state, mut ui_state) = fixed_states();
        app_state.settings.show_next_number = false;
        ui_state.input_error = Some(NumberError::OutOfRange { value: 0 });

        let vm = build_game_screen_view_model(&app_state, &ui_state);

        assert_eq!(
            vm.call_panel_vm,
            CallPanelViewModel::new(
                None,
                Some("0 is out of range (expected 1-25)".to_owned()),
                true
            )
        );
    }

    #[test]
    fn status_counts_marks_until_won() {
        let (mut app_state, mut ui_state) = fixed_states();
        call(&mut app_state, &mut ui_state, 4);
        let vm = build_game_screen_view_model(&app_state, &ui_state);
        assert_eq!(
            vm.status_line_vm,
            StatusLineViewModel::new(GameStatus::InProgress { marked: 1 }, ui_state.last_call)
        );

        for value in [9, 14, 19, 24] {
            call(&mut app_state, &mut ui_state, value);
        }
        let vm = build_game_screen_view_model(&app_state, &ui_state);
        assert_eq!(
            vm.status_line_vm,
            StatusLineViewModel::new(GameStatus::Won, ui_state.last_call)
        );
        assert_eq!(
            vm.call_panel_vm,
            CallPanelViewModel::new(Some(app_state.next_number()), None, false)
        );
    }
}
