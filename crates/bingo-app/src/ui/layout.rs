use eframe::egui::Vec2;

/// Sizes derived from the cell size that fits the window.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LayoutScale {
    pub(crate) cell_size: f32,
    pub(crate) spacing: Vec2,
    pub(crate) padding: Vec2,
}

impl LayoutScale {
    pub(crate) const SPACING_FACTOR: Vec2 = Vec2::new(0.15, 0.20);
    pub(crate) const PADDING_FACTOR: Vec2 = Vec2::new(0.20, 0.15);

    const MIN_CELL_SIZE: f32 = 16.0;

    #[must_use]
    pub(crate) fn new(cell_size: f32) -> Self {
        let spacing = Vec2::splat(cell_size) * Self::SPACING_FACTOR;
        let padding = Vec2::splat(cell_size) * Self::PADDING_FACTOR;
        Self {
            cell_size,
            spacing,
            padding,
        }
    }

    /// Picks the largest scale at which `units` fit into `available`.
    #[must_use]
    pub(crate) fn fit(available: Vec2, units: ComponentUnits) -> Self {
        let cell_size = f32::min(available.x / units.width, available.y / units.height);
        Self::new(cell_size.max(Self::MIN_CELL_SIZE))
    }

    /// Converts component units to points.
    #[must_use]
    pub(crate) fn size_of(&self, units: ComponentUnits) -> Vec2 {
        Vec2::new(units.width, units.height) * self.cell_size
    }
}

/// Component size measured in cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ComponentUnits {
    pub(crate) width: f32,
    pub(crate) height: f32,
}

impl ComponentUnits {
    #[must_use]
    pub(crate) const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Units of `components` placed in a column with vertical spacing between them.
    #[must_use]
    pub(crate) fn stack_vertical(components: &[Self]) -> Self {
        let gaps = components.len().saturating_sub(1);
        #[expect(clippy::cast_precision_loss)]
        let spacing = LayoutScale::SPACING_FACTOR.y * gaps as f32;
        let (width, height) = components
            .iter()
            .fold((0.0_f32, spacing), |(width, height), units| {
                (width.max(units.width), height + units.height)
            });
        Self { width, height }
    }
}
