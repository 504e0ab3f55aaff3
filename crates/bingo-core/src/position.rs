//! Board position representation.

use std::fmt::{self, Display};

use crate::{CELL_COUNT, SIDE};

/// A position on the 5×5 board.
///
/// `x` is the column (0-4, left to right) and `y` is the row (0-4, top to
/// bottom). Positions are ordered row-major, which is also the scan order used
/// when marking a called number.
///
/// # Examples
///
/// ```
/// use bingo_core::Position;
///
/// let pos = Position::new(3, 1);
/// assert_eq!(pos.index(), 8);
/// assert_eq!(Position::from_index(8), pos);
/// assert_eq!(Position::ALL[8], pos);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    y: u8,
    x: u8,
}

impl Position {
    /// All 25 positions in row-major order.
    pub const ALL: [Self; CELL_COUNT] = {
        let mut all = [Self { x: 0, y: 0 }; CELL_COUNT];
        let mut i = 0;
        while i < CELL_COUNT {
            all[i] = Self::from_index(i);
            i += 1;
        }
        all
    };

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-4.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < SIDE && y < SIDE);
        Self { y, x }
    }

    /// Creates a position from its row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-24.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < CELL_COUNT);
        let side = SIDE as usize;
        Self::new((index % side) as u8, (index / side) as u8)
    }

    /// Returns the column (0-4).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-4).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major index (0-24).
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * SIDE as usize + self.x as usize
    }

    /// Returns `true` if the position lies on the top-left to bottom-right diagonal.
    #[must_use]
    pub const fn is_on_main_diagonal(self) -> bool {
        self.x == self.y
    }

    /// Returns `true` if the position lies on the top-right to bottom-left diagonal.
    #[must_use]
    pub const fn is_on_anti_diagonal(self) -> bool {
        self.x + self.y == SIDE - 1
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.y + 1, self.x + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_row_major() {
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[4], Position::new(4, 0));
        assert_eq!(Position::ALL[5], Position::new(0, 1));
        assert_eq!(Position::ALL[24], Position::new(4, 4));
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
        assert!(Position::ALL.is_sorted());
    }

    #[test]
    fn diagonals() {
        assert!(Position::new(2, 2).is_on_main_diagonal());
        assert!(Position::new(2, 2).is_on_anti_diagonal());
        assert!(Position::new(4, 0).is_on_anti_diagonal());
        assert!(!Position::new(4, 0).is_on_main_diagonal());
        assert!(!Position::new(1, 2).is_on_anti_diagonal());
    }

    #[test]
    fn display_is_one_based() {
        assert_eq!(Position::new(0, 0).to_string(), "r1c1");
        assert_eq!(Position::new(3, 4).to_string(), "r5c4");
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn new_rejects_out_of_bounds() {
        let _ = Position::new(5, 0);
    }
}
