use bingo_core::Number;
use eframe::egui::{Button, FontId, Key, RichText, TextEdit, Ui};

use crate::{
    action::{Action, ActionRequestQueue},
    ui::{
        icon,
        layout::{ComponentUnits, LayoutScale},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CallPanelViewModel {
    /// The caller's suggestion, if it should be shown.
    next_number: Option<Number>,
    error: Option<String>,
    enabled: bool,
}

impl CallPanelViewModel {
    #[must_use]
    pub(crate) fn new(next_number: Option<Number>, error: Option<String>, enabled: bool) -> Self {
        Self {
            next_number,
            error,
            enabled,
        }
    }
}

const TEXT_SIZE_RATIO: f32 = 0.35;
const ERROR_TEXT_SIZE_RATIO: f32 = 0.28;
const INPUT_WIDTH_RATIO: f32 = 1.6;

#[must_use]
pub(crate) const fn required_units() -> ComponentUnits {
    ComponentUnits::new(5.0, 1.8)
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &CallPanelViewModel,
    call_input: &mut String,
    scale: &LayoutScale,
    action_queue: &mut ActionRequestQueue,
) {
    let text_size = scale.cell_size * TEXT_SIZE_RATIO;
    let button_padding = scale.padding;

    ui.add_enabled_ui(vm.enabled, |ui| {
        ui.spacing_mut().item_spacing = scale.spacing;
        ui.spacing_mut().button_padding = button_padding;

        ui.horizontal(|ui| {
            if let Some(number) = vm.next_number {
                ui.label(RichText::new(format!("Next number: {number}")).size(text_size));
                let call = Button::new(
                    RichText::new(format!("{} Call", icon::MEGAPHONE)).size(text_size),
                );
                if ui.add(call).clicked() {
                    action_queue.request(Action::CallSuggestedNumber);
                }
            } else {
                ui.label(RichText::new("Call the numbers as they are drawn.").size(text_size));
            }
        });

        ui.horizontal(|ui| {
            let input = TextEdit::singleline(call_input)
                .hint_text("1-25")
                .font(FontId::proportional(text_size))
                .desired_width(scale.cell_size * INPUT_WIDTH_RATIO);
            let response = ui.add(input);
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

            let button = Button::new(RichText::new("Call Number").size(text_size));
            if ui.add(button).clicked() || submitted {
                action_queue.request(Action::SubmitCallInput);
                response.request_focus();
            }
        });

        if let Some(error) = &vm.error {
            ui.label(
                RichText::new(format!("{} {error}", icon::WARNING))
                    .color(ui.visuals().error_fg_color)
                    .size(scale.cell_size * ERROR_TEXT_SIZE_RATIO),
            );
        }
    });
}
