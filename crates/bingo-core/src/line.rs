//! Winning line representation.

use crate::{Position, SIDE};

/// A winning line: a row, a column, or one of the two diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// A row identified by its y coordinate (0-4).
    Row {
        /// Row index (0-4).
        y: u8,
    },
    /// A column identified by its x coordinate (0-4).
    Column {
        /// Column index (0-4).
        x: u8,
    },
    /// The diagonal from the top-left to the bottom-right corner.
    MainDiagonal,
    /// The diagonal from the top-right to the bottom-left corner.
    AntiDiagonal,
}

impl Line {
    /// Array containing all rows (0-4).
    pub const ROWS: [Self; 5] = [
        Self::Row { y: 0 },
        Self::Row { y: 1 },
        Self::Row { y: 2 },
        Self::Row { y: 3 },
        Self::Row { y: 4 },
    ];

    /// Array containing all columns (0-4).
    pub const COLUMNS: [Self; 5] = [
        Self::Column { x: 0 },
        Self::Column { x: 1 },
        Self::Column { x: 2 },
        Self::Column { x: 3 },
        Self::Column { x: 4 },
    ];

    /// Array containing all lines in row, column, diagonal order.
    pub const ALL: [Self; 12] = {
        let mut all = [Self::MainDiagonal; 12];
        let mut i = 0;
        while i < 5 {
            all[i] = Self::ROWS[i];
            all[i + 5] = Self::COLUMNS[i];
            i += 1;
        }
        all[10] = Self::MainDiagonal;
        all[11] = Self::AntiDiagonal;
        all
    };

    /// Converts a cell index along the line (0-4) into an absolute [`Position`].
    ///
    /// Diagonals are walked from top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-4.
    #[must_use]
    #[inline]
    pub const fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < SIDE);
        match self {
            Line::Row { y } => Position::new(i, y),
            Line::Column { x } => Position::new(x, i),
            Line::MainDiagonal => Position::new(i, i),
            Line::AntiDiagonal => Position::new(SIDE - 1 - i, i),
        }
    }

    /// Returns the five positions on this line.
    #[must_use]
    pub const fn positions(self) -> [Position; 5] {
        let mut positions = [Position::new(0, 0); 5];
        let mut i = 0;
        while i < 5 {
            positions[i as usize] = self.position_from_cell_index(i);
            i += 1;
        }
        positions
    }

    /// Returns `true` if `pos` lies on this line.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        match self {
            Line::Row { y } => pos.y() == y,
            Line::Column { x } => pos.x() == x,
            Line::MainDiagonal => pos.is_on_main_diagonal(),
            Line::AntiDiagonal => pos.is_on_anti_diagonal(),
        }
    }
}
