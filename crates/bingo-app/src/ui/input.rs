use eframe::egui::{InputState, Key};

use crate::action::{Action, ActionRequestQueue, ModalRequest};

struct Shortcut {
    key: Key,
    action: Action,
}

impl Shortcut {
    /// A shortcut that needs Ctrl (Windows/Linux) or Cmd (Mac).
    const fn command(key: Key, action: Action) -> Self {
        Self { key, action }
    }
}

const SHORTCUTS: [Shortcut; 2] = [
    Shortcut::command(Key::N, Action::RequestNewGame),
    Shortcut::command(Key::Comma, Action::OpenModal(ModalRequest::Settings)),
];

pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    if !i.modifiers.command || i.modifiers.shift {
        return;
    }
    for shortcut in SHORTCUTS {
        if i.key_pressed(shortcut.key) {
            action_queue.request(shortcut.action);
            return;
        }
    }
}
