use std::mem;

use bingo_core::Number;

use crate::state::Settings;

pub(crate) mod handler;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    /// Parse the call input field and call the number it holds.
    SubmitCallInput,
    CallNumber(Number),
    /// Call the number currently suggested by the caller.
    CallSuggestedNumber,
    /// Start a new game, asking first if the settings say so.
    RequestNewGame,
    StartNewGame,
    /// Close the win dialog and replace the finished game.
    AcknowledgeWin,
    OpenModal(ModalRequest),
    CloseModal,
    UpdateSettings(Settings),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfirmKind {
    NewGame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AlertKind {
    Won,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ModalRequest {
    Confirm(ConfirmKind),
    Alert(AlertKind),
    Settings,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use bingo_core::Number;

    use super::{Action, ActionRequestQueue, ModalRequest};

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::CallNumber(Number::new(7)));
        queue.request(Action::OpenModal(ModalRequest::Settings));

        let drained = queue.take_all();
        assert_eq!(
            drained,
            [
                Action::CallNumber(Number::new(7)),
                Action::OpenModal(ModalRequest::Settings),
            ]
        );

        let drained_again = queue.take_all();
        assert!(drained_again.is_empty());
    }
}
