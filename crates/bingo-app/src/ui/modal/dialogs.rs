use eframe::egui::{Context, Id, Modal, Response, RichText, Sides, Ui};

use crate::{
    action::{Action, ActionRequestQueue, AlertKind, ConfirmKind},
    ui::icon,
};

struct DialogResult {
    should_close: bool,
}

fn show_dialog<Heading, Body, Buttons>(
    ctx: &Context,
    id: Id,
    heading: Heading,
    body: Body,
    buttons: Buttons,
) -> DialogResult
where
    Heading: Into<RichText>,
    Body: FnOnce(&mut Ui),
    Buttons: FnOnce(&mut Ui),
{
    let modal = Modal::new(id).show(ctx, |ui| {
        ui.heading(heading);
        ui.add_space(4.0);

        body(ui);
        ui.add_space(8.0);

        Sides::new().show(ui, |_ui| {}, buttons);
    });

    DialogResult {
        should_close: modal.should_close(),
    }
}

fn primary_button(ui: &mut Ui, label: String) -> Response {
    let response = ui.button(label);
    if ui.memory(|memory| memory.focused().is_none()) {
        response.request_focus();
    }
    response
}

struct ConfirmDialogSpec {
    id: Id,
    heading: &'static str,
    label: &'static str,
    confirm_label: &'static str,
    confirm_action: Action,
}

impl ConfirmKind {
    fn spec(self) -> ConfirmDialogSpec {
        match self {
            ConfirmKind::NewGame => ConfirmDialogSpec {
                id: Id::new("new_game_confirm"),
                heading: "New Game?",
                label: "Start a new game? The current board and its marks will be lost.",
                confirm_label: "New Game",
                confirm_action: Action::StartNewGame,
            },
        }
    }
}

struct AlertDialogSpec {
    id: Id,
    heading: String,
    body: &'static str,
    ok_label: &'static str,
    /// Requested however the dialog is dismissed.
    dismiss_action: Action,
}

impl AlertKind {
    fn spec(self) -> AlertDialogSpec {
        match self {
            AlertKind::Won => AlertDialogSpec {
                id: Id::new("win_alert"),
                heading: format!("{} Bingo!", icon::TROPHY),
                body: "You won the game!",
                ok_label: "Play Again",
                dismiss_action: Action::AcknowledgeWin,
            },
        }
    }
}

pub(crate) fn show_confirm(
    ctx: &Context,
    action_queue: &mut ActionRequestQueue,
    kind: ConfirmKind,
) {
    let spec = kind.spec();
    let mut confirmed = false;
    let DialogResult { should_close } = show_dialog(
        ctx,
        spec.id,
        spec.heading,
        |ui: &mut Ui| {
            ui.label(spec.label);
        },
        |ui: &mut Ui| {
            let confirm = primary_button(ui, format!("{} {}", icon::CHECK, spec.confirm_label));
            if confirm.clicked() {
                confirmed = true;
                ui.close();
            }

            if ui.button(format!("{} Cancel", icon::CANCEL)).clicked() {
                ui.close();
            }
        },
    );

    if confirmed {
        action_queue.request(spec.confirm_action);
    }
    if should_close {
        action_queue.request(Action::CloseModal);
    }
}

pub(crate) fn show_alert(ctx: &Context, action_queue: &mut ActionRequestQueue, kind: AlertKind) {
    let spec = kind.spec();
    let DialogResult { should_close } = show_dialog(
        ctx,
        spec.id,
        spec.heading,
        |ui: &mut Ui| {
            ui.label(spec.body);
        },
        |ui: &mut Ui| {
            let ok = primary_button(ui, format!("{} {}", icon::CHECK, spec.ok_label));
            if ok.clicked() {
                ui.close();
            }
        },
    );

    if should_close {
        action_queue.request(spec.dismiss_action);
    }
}
