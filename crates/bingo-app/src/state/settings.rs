use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[expect(clippy::struct_excessive_bools)]
pub(crate) struct Settings {
    /// Paint the cells of completed lines with the winning color.
    pub(crate) highlight_winning_lines: bool,
    /// Show the caller's suggestion next to the call input.
    pub(crate) show_next_number: bool,
    /// Ask before throwing away a game in progress.
    pub(crate) confirm_new_game: bool,
    /// Outline the cell marked by the last call.
    pub(crate) highlight_last_called: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            highlight_winning_lines: true,
            show_next_number: true,
            confirm_new_game: true,
            highlight_last_called: true,
        }
    }
}
