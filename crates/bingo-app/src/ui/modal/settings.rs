use eframe::egui::{CollapsingHeader, Context, Id, Modal, Sides, widgets};

use crate::{
    action::{Action, ActionRequestQueue},
    state::Settings,
    ui::icon,
    version,
};

#[derive(Debug, Clone)]
pub(crate) struct SettingsViewModel {
    settings: Settings,
}

impl SettingsViewModel {
    #[must_use]
    pub(crate) fn new(settings: &Settings) -> Self {
        Self {
            settings: settings.clone(),
        }
    }
}

pub(crate) fn show(ctx: &Context, vm: &SettingsViewModel, action_queue: &mut ActionRequestQueue) {
    let mut settings = vm.settings.clone();
    let mut changed = false;

    let modal = Modal::new(Id::new("settings")).show(ctx, |ui| {
        ui.heading(format!("{} Settings", icon::GEAR));
        ui.add_space(4.0);

        let Settings {
            highlight_winning_lines,
            show_next_number,
            confirm_new_game,
            highlight_last_called,
        } = &mut settings;

        CollapsingHeader::new("Board")
            .default_open(true)
            .show(ui, |ui| {
                changed |= ui
                    .checkbox(highlight_winning_lines, "Highlight completed lines")
                    .changed();
                changed |= ui
                    .checkbox(highlight_last_called, "Outline the last marked cell")
                    .changed();
            });

        CollapsingHeader::new("Game")
            .default_open(true)
            .show(ui, |ui| {
                changed |= ui
                    .checkbox(show_next_number, "Suggest the next number")
                    .changed();
                changed |= ui
                    .checkbox(confirm_new_game, "Confirm before starting a new game")
                    .changed();
            });

        CollapsingHeader::new("Appearance")
            .default_open(true)
            .show(ui, |ui| {
                widgets::global_theme_preference_buttons(ui);
            });

        ui.add_space(8.0);
        Sides::new().show(
            ui,
            |ui| {
                ui.weak(format!("version {}", version::build_version()));
            },
            |ui| {
                if ui.button(format!("{} Close", icon::CHECK)).clicked() {
                    ui.close();
                }
            },
        );
    });

    if changed {
        action_queue.request(Action::UpdateSettings(settings));
    }
    if modal.should_close() {
        action_queue.request(Action::CloseModal);
    }
}
