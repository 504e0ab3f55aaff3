pub(crate) mod call_panel;
pub(crate) mod game_screen;
pub(crate) mod grid;
pub(crate) mod grid_theme;
pub(crate) mod icon;
pub(crate) mod input;
pub(crate) mod layout;
pub(crate) mod modal;
pub(crate) mod status_line;
pub(crate) mod toolbar;
