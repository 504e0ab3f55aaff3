use eframe::egui::{Color32, Visuals};

/// Color palette for bingo board rendering.
///
/// Kept separate from `egui::Visuals` so mark and win colors can be tuned
/// per theme without touching the global widget style.
#[derive(Debug, Clone)]
pub struct GridPalette {
    pub cell_bg_default: Color32,
    pub cell_bg_marked: Color32,
    pub cell_bg_winning: Color32,

    pub border_inactive: Color32,
    pub border_last_called: Color32,

    pub text_normal: Color32,
    pub text_marked: Color32,
}

impl GridPalette {
    /// Palette for light backgrounds.
    pub fn light(visuals: &Visuals) -> Self {
        Self {
            cell_bg_marked: Color32::from_rgb(144, 216, 144),
            cell_bg_winning: Color32::from_rgb(246, 196, 68),
            text_marked: Color32::from_rgb(20, 60, 20),
            ..Self::from_visuals(visuals)
        }
    }

    /// Palette for dark backgrounds.
    pub fn dark(visuals: &Visuals) -> Self {
        Self {
            cell_bg_marked: Color32::from_rgb(46, 110, 52),
            cell_bg_winning: Color32::from_rgb(168, 120, 16),
            text_marked: Color32::from_rgb(230, 245, 230),
            ..Self::from_visuals(visuals)
        }
    }

    fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            cell_bg_default: visuals.text_edit_bg_color(),
            cell_bg_marked: visuals.selection.bg_fill,
            cell_bg_winning: visuals.warn_fg_color,

            border_inactive: visuals.widgets.inactive.fg_stroke.color,
            border_last_called: visuals.selection.stroke.color,

            text_normal: visuals.text_color(),
            text_marked: visuals.strong_text_color(),
        }
    }
}

/// Holds light/dark palettes and selects one based on current visuals.
#[derive(Debug, Clone)]
pub struct GridTheme {
    pub light: GridPalette,
    pub dark: GridPalette,
}

impl GridTheme {
    pub fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            light: GridPalette::light(visuals),
            dark: GridPalette::dark(visuals),
        }
    }

    pub fn palette_for(&self, visuals: &Visuals) -> &GridPalette {
        if visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }
}
