use std::sync::Arc;

use bingo_core::{CELL_COUNT, Number, Position, SIDE};
use eframe::egui::{
    Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2,
};

use crate::{
    state::Settings,
    ui::{
        grid_theme::{GridPalette, GridTheme},
        layout::{ComponentUnits, LayoutScale},
    },
};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct GridVisualState: u8 {
        const MARKED = 0b0000_0001;
        const WINNING_LINE = 0b0000_0010;
        const LAST_CALLED = 0b0000_0100;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GridCell {
    pub(crate) number: Number,
    pub(crate) visual_state: GridVisualState,
}

#[derive(Debug, Clone)]
pub(crate) struct GridViewModel {
    cells: [GridCell; CELL_COUNT],
    enabled_highlights: GridVisualState,
}

impl GridViewModel {
    #[must_use]
    pub(crate) fn new(cells: [GridCell; CELL_COUNT], settings: &Settings) -> Self {
        let mut enabled_highlights = GridVisualState::MARKED;
        if settings.highlight_winning_lines {
            enabled_highlights |= GridVisualState::WINNING_LINE;
        }
        if settings.highlight_last_called {
            enabled_highlights |= GridVisualState::LAST_CALLED;
        }
        Self {
            cells,
            enabled_highlights,
        }
    }

    #[must_use]
    pub(crate) fn cell(&self, pos: Position) -> &GridCell {
        &self.cells[pos.index()]
    }

    fn effective_visual_state(&self, state: GridVisualState) -> EffectiveGridVisualState {
        EffectiveGridVisualState(self.enabled_highlights & state)
    }
}

#[allow(clippy::cast_lossless)]
const GRID_CELLS: f32 = SIDE as f32;
const CELL_BORDER_WIDTH_BASE_RATIO: f32 = 0.03;
const OUTER_BORDER_WIDTH_RATIO: f32 = 3.0;
const THIN_BORDER_WIDTH_RATIO: f32 = 1.0;
const LAST_CALLED_BORDER_WIDTH_RATIO: f32 = 3.0;
const TEXT_SIZE_RATIO: f32 = 0.5;

#[must_use]
pub(crate) const fn required_units() -> ComponentUnits {
    let len = GRID_CELLS + CELL_BORDER_WIDTH_BASE_RATIO * OUTER_BORDER_WIDTH_RATIO * 2.0;
    ComponentUnits::new(len, len)
}

fn base_border_width(cell_size: f32) -> f32 {
    f32::max(cell_size * CELL_BORDER_WIDTH_BASE_RATIO, 1.0)
}

fn outer_border(palette: &GridPalette, cell_size: f32) -> Stroke {
    Stroke::new(
        base_border_width(cell_size) * OUTER_BORDER_WIDTH_RATIO,
        palette.border_inactive,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EffectiveGridVisualState(GridVisualState);

impl EffectiveGridVisualState {
    fn text_color(self, palette: &GridPalette) -> Color32 {
        if self.0.intersects(GridVisualState::MARKED) {
            palette.text_marked
        } else {
            palette.text_normal
        }
    }

    fn cell_fill_color(self, palette: &GridPalette) -> Color32 {
        if self.0.intersects(GridVisualState::WINNING_LINE) {
            return palette.cell_bg_winning;
        }
        if self.0.intersects(GridVisualState::MARKED) {
            return palette.cell_bg_marked;
        }
        palette.cell_bg_default
    }

    fn cell_border(self, palette: &GridPalette, cell_size: f32) -> Stroke {
        let (color, ratio) = if self.0.intersects(GridVisualState::LAST_CALLED) {
            (palette.border_last_called, LAST_CALLED_BORDER_WIDTH_RATIO)
        } else {
            (palette.border_inactive, THIN_BORDER_WIDTH_RATIO)
        };
        Stroke::new(base_border_width(cell_size) * ratio, color)
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &GridViewModel, scale: &LayoutScale) {
    let cell_size = scale.cell_size;
    let style = Arc::clone(ui.style());
    let visuals = &style.visuals;
    let grid_theme = GridTheme::from_visuals(visuals);
    let palette = grid_theme.palette_for(visuals);

    let (rect, _response) =
        ui.allocate_exact_size(scale.size_of(required_units()), Sense::hover());

    let border = outer_border(palette, cell_size);
    let inner_rect = rect.shrink(border.width);

    let painter = ui.painter();
    draw_outer_border(painter, rect, border);

    for pos in Position::ALL {
        let cell = vm.cell(pos);
        let vs = vm.effective_visual_state(cell.visual_state);

        let offset = Vec2::new(f32::from(pos.x()), f32::from(pos.y())) * cell_size;
        let cell_rect = Rect::from_min_size(inner_rect.min + offset, Vec2::splat(cell_size));

        painter.rect_filled(cell_rect, 0.0, vs.cell_fill_color(palette));
        painter.text(
            cell_rect.center(),
            Align2::CENTER_CENTER,
            cell.number.to_string(),
            FontId::proportional(cell_size * TEXT_SIZE_RATIO),
            vs.text_color(palette),
        );
        painter.rect_stroke(
            cell_rect,
            0.0,
            vs.cell_border(palette, cell_size),
            StrokeKind::Inside,
        );
    }
}

fn draw_outer_border(painter: &Painter, rect: Rect, stroke: Stroke) {
    let thickness = stroke.width.max(1.0);

    let edges = [
        Rect::from_min_max(rect.min, Pos2::new(rect.left() + thickness, rect.bottom())),
        Rect::from_min_max(Pos2::new(rect.right() - thickness, rect.top()), rect.max),
        Rect::from_min_max(rect.min, Pos2::new(rect.right(), rect.top() + thickness)),
        Rect::from_min_max(Pos2::new(rect.left(), rect.bottom() - thickness), rect.max),
    ];
    for edge in edges {
        painter.rect_filled(edge, 0.0, stroke.color);
    }
}

#[cfg(test)]
mod tests {
    use bingo_core::Board;

    use super::*;

    fn plain_cells() -> [GridCell; CELL_COUNT] {
        Board::identity().numbers().map(|number| GridCell {
            number,
            visual_state: GridVisualState::empty(),
        })
    }

    #[test]
    fn disabled_highlights_are_masked_out() {
        let settings = Settings {
            highlight_winning_lines: false,
            ..Settings::default()
        };
        let vm = GridViewModel::new(plain_cells(), &settings);
        let vs = vm.effective_visual_state(GridVisualState::MARKED | GridVisualState::WINNING_LINE);
        assert_eq!(vs.0, GridVisualState::MARKED);
    }

    #[test]
    fn marks_are_always_shown() {
        let settings = Settings {
            highlight_winning_lines: false,
            highlight_last_called: false,
            ..Settings::default()
        };
        let vm = GridViewModel::new(plain_cells(), &settings);
        assert_eq!(vm.enabled_highlights, GridVisualState::MARKED);
    }
}
