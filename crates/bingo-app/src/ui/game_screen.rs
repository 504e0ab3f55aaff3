use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};

use super::{call_panel, grid, status_line, toolbar};
use crate::{
    action::ActionRequestQueue,
    ui::{
        call_panel::CallPanelViewModel,
        grid::GridViewModel,
        layout::{ComponentUnits, LayoutScale},
        status_line::StatusLineViewModel,
    },
};

#[derive(Debug, Clone)]
pub(crate) struct GameScreenViewModel {
    pub(crate) grid_vm: GridViewModel,
    pub(crate) call_panel_vm: CallPanelViewModel,
    pub(crate) status_line_vm: StatusLineViewModel,
}

impl GameScreenViewModel {
    #[must_use]
    pub(crate) fn new(
        grid_vm: GridViewModel,
        call_panel_vm: CallPanelViewModel,
        status_line_vm: StatusLineViewModel,
    ) -> Self {
        Self {
            grid_vm,
            call_panel_vm,
            status_line_vm,
        }
    }
}

fn required_units() -> ComponentUnits {
    ComponentUnits::stack_vertical(&[
        toolbar::required_units(),
        grid::required_units(),
        call_panel::required_units(),
        status_line::required_units(),
    ])
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &GameScreenViewModel,
    call_input: &mut String,
    action_queue: &mut ActionRequestQueue,
) {
    let scale = LayoutScale::fit(ui.available_size(), required_units());
    let content = scale.size_of(required_units());
    let spacing = scale.spacing.y;

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(content.x))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .size(Size::remainder())
                    .size(Size::exact(scale.size_of(toolbar::required_units()).y))
                    .size(Size::exact(spacing))
                    .size(Size::exact(scale.size_of(grid::required_units()).y))
                    .size(Size::exact(spacing))
                    .size(Size::exact(scale.size_of(call_panel::required_units()).y))
                    .size(Size::exact(spacing))
                    .size(Size::exact(scale.size_of(status_line::required_units()).y))
                    .size(Size::remainder())
                    .vertical(|mut strip| {
                        strip.empty();
                        strip.cell(|ui| toolbar::show(ui, &scale, action_queue));
                        strip.empty();
                        strip.cell(|ui| grid::show(ui, &vm.grid_vm, &scale));
                        strip.empty();
                        strip.cell(|ui| {
                            call_panel::show(
                                ui,
                                &vm.call_panel_vm,
                                call_input,
                                &scale,
                                action_queue,
                            );
                        });
                        strip.empty();
                        strip.cell(|ui| status_line::show(ui, &vm.status_line_vm, &scale));
                        strip.empty();
                    });
            });
            strip.empty();
        });
}
