//! Bingo desktop and web application UI.
//!
//! # Design Notes
//! - One 5x5 board per game. Numbers are called by typing them or by taking
//!   the caller's suggestion.
//! - Actions requested by the UI are queued and applied once per frame.
//! - A completed line opens a dialog; dismissing it starts a new game.
//! - The game, the caller position, and the settings survive restarts.

use std::time::Duration;

use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{CentralPanel, Context},
};

use crate::{
    action::{self, ActionRequestQueue},
    game_factory,
    persistence::storage,
    state::{AppState, UiState},
    ui, version, view_model_builder,
};

#[derive(Debug)]
pub struct BingoApp {
    app_state: AppState,
    ui_state: UiState,
}

impl BingoApp {
    pub fn new(cc: &CreationContext<'_>) -> Self {
        log::info!("starting bingo, version={}", version::build_version());
        let app_state = cc
            .storage
            .and_then(storage::load_state)
            .unwrap_or_else(|| AppState::new(game_factory::generate_random_game()));
        let ui_state = UiState::new(&app_state);
        Self {
            app_state,
            ui_state,
        }
    }

    fn apply_persistence(&mut self, frame: &mut Frame) {
        if self.app_state.is_dirty()
            && let Some(storage) = frame.storage_mut()
        {
            self.save(storage);
            self.app_state.clear_dirty();
        }
    }
}

impl App for BingoApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        storage::save_state(storage, &self.app_state);
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        if self.ui_state.active_modal.is_none() {
            ctx.input(|i| ui::input::handle_input(i, &mut action_queue));
            action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);
        }

        let game_screen_vm =
            view_model_builder::build_game_screen_view_model(&self.app_state, &self.ui_state);

        CentralPanel::default().show(ctx, |ui| {
            ui::game_screen::show(
                ui,
                &game_screen_vm,
                &mut self.ui_state.call_input,
                &mut action_queue,
            );
        });

        if let Some(modal_request) = self.ui_state.active_modal {
            let settings_vm = view_model_builder::build_settings_view_model(&self.app_state);
            ui::modal::show(ctx, &mut action_queue, modal_request, &settings_vm);
        }

        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        self.apply_persistence(frame);
    }
}
