use bingo_game::CallOutcome;
use eframe::egui::{Align, Label, Layout, RichText, Ui, Vec2, Widget as _};

use crate::{
    state::LastCall,
    ui::{
        icon,
        layout::{ComponentUnits, LayoutScale},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GameStatus {
    InProgress { marked: usize },
    Won,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusLineViewModel {
    status: GameStatus,
    last_call: Option<LastCall>,
}

impl StatusLineViewModel {
    #[must_use]
    pub(crate) fn new(status: GameStatus, last_call: Option<LastCall>) -> Self {
        Self { status, last_call }
    }

    fn last_call_text(&self) -> Option<String> {
        let LastCall { number, outcome } = self.last_call?;
        let text = match outcome {
            CallOutcome::Marked { position, .. } => format!("Called {number}, marked {position}"),
            CallOutcome::AlreadyMarked { .. } => format!("{number} was already called"),
            CallOutcome::NotOnBoard => format!("{number} is not on this board"),
        };
        Some(text)
    }
}

#[must_use]
pub(crate) fn required_units() -> ComponentUnits {
    ComponentUnits::new(0.0, 0.5)
}

pub(crate) fn show(ui: &mut Ui, vm: &StatusLineViewModel, scale: &LayoutScale) {
    let cell_size = scale.cell_size;
    ui.spacing_mut().item_spacing = Vec2::new(scale.spacing.x, 0.0);
    ui.horizontal(|ui| {
        if let Some(text) = vm.last_call_text() {
            Label::new(RichText::new(format!("{} {text}", icon::INFO)).size(cell_size * 0.3))
                .ui(ui);
        }

        let (status_text, status_color) = match vm.status {
            GameStatus::InProgress { marked } => (
                format!("{} {marked} marked", icon::HOURGLASS),
                ui.visuals().text_color(),
            ),
            GameStatus::Won => (
                format!("{} Bingo!", icon::TROPHY),
                ui.visuals().warn_fg_color,
            ),
        };
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            Label::new(
                RichText::new(status_text)
                    .color(status_color)
                    .size(cell_size * 0.35),
            )
            .ui(ui);
        });
    });
}

#[cfg(test)]
mod tests {
    use bingo_core::{Number, Position};

    use super::*;

    fn text_for(outcome: CallOutcome) -> Option<String> {
        let last_call = LastCall {
            number: Number::new(12),
            outcome,
        };
        StatusLineViewModel::new(GameStatus::InProgress { marked: 1 }, Some(last_call))
            .last_call_text()
    }

    #[test]
    fn describes_each_call_outcome() {
        assert_eq!(
            text_for(CallOutcome::Marked {
                position: Position::new(1, 2),
                completes_win: false,
            })
            .as_deref(),
            Some("Called 12, marked r3c2")
        );
        assert_eq!(
            text_for(CallOutcome::AlreadyMarked {
                position: Position::new(1, 2),
            })
            .as_deref(),
            Some("12 was already called")
        );
        assert_eq!(
            text_for(CallOutcome::NotOnBoard).as_deref(),
            Some("12 is not on this board")
        );
    }

    #[test]
    fn no_call_no_text() {
        let vm = StatusLineViewModel::new(GameStatus::Won, None);
        assert_eq!(vm.last_call_text(), None);
    }
}
