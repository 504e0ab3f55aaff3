use eframe::egui::{Button, RichText, Ui};

use crate::{
    action::{Action, ActionRequestQueue, ModalRequest},
    ui::{
        icon,
        layout::{ComponentUnits, LayoutScale},
    },
};

#[must_use]
pub(crate) fn required_units() -> ComponentUnits {
    ComponentUnits::new(5.0, 0.7)
}

pub(crate) fn show(ui: &mut Ui, scale: &LayoutScale, action_queue: &mut ActionRequestQueue) {
    let text_size = scale.cell_size * 0.3;
    ui.spacing_mut().item_spacing = scale.spacing;
    ui.horizontal(|ui| {
        let new_game =
            Button::new(RichText::new(format!("{} New Game", icon::NEW)).size(text_size));
        if ui
            .add(new_game)
            .on_hover_text("Start a new game (Ctrl/Cmd+N)")
            .clicked()
        {
            action_queue.request(Action::RequestNewGame);
        }

        let settings =
            Button::new(RichText::new(format!("{} Settings", icon::GEAR)).size(text_size));
        if ui
            .add(settings)
            .on_hover_text("Settings (Ctrl/Cmd+,)")
            .clicked()
        {
            action_queue.request(Action::OpenModal(ModalRequest::Settings));
        }
    });
}
