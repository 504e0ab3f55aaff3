//! The 5×5 bingo board.

use std::{
    fmt::{self, Display},
    ops::Index,
};

use crate::{CELL_COUNT, Number, NumberError, Position, SIDE};

/// A 5×5 grid of bingo numbers in row-major order.
///
/// Every number 1-25 appears exactly once, so a board is a permutation of the
/// numbers and each number maps to a single position.
///
/// # Examples
///
/// ```
/// use bingo_core::{Board, Number, Position};
///
/// let mut values = [0u8; 25];
/// for (i, v) in values.iter_mut().enumerate() {
///     *v = 25 - i as u8;
/// }
/// let board = Board::try_from(values).unwrap();
/// assert_eq!(board[Position::new(0, 0)], Number::new(25));
/// assert_eq!(board.position_of(Number::new(1)), Some(Position::new(4, 4)));
///
/// values[1] = 25;
/// assert!(Board::try_from(values).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Number; CELL_COUNT],
}

/// Error returned when raw values do not form a valid board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// A cell holds a value outside 1-25.
    #[display("invalid number at {position}: {source}")]
    InvalidNumber {
        /// The offending cell.
        position: Position,
        /// Why the value was rejected.
        source: NumberError,
    },
    /// A number appears in more than one cell.
    #[display("{number} appears at both {first} and {second}")]
    Duplicate {
        /// The repeated number.
        number: Number,
        /// The first cell holding the number, in row-major order.
        first: Position,
        /// The later cell holding the number.
        second: Position,
    },
}

impl Board {
    /// Creates a board from numbers in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Duplicate`] if any number appears twice.
    pub fn try_from_numbers(cells: [Number; CELL_COUNT]) -> Result<Self, BoardError> {
        let mut seen: [Option<Position>; CELL_COUNT] = [None; CELL_COUNT];
        for (pos, number) in Position::ALL.into_iter().zip(cells) {
            if let Some(first) = seen[number.index()] {
                return Err(BoardError::Duplicate {
                    number,
                    first,
                    second: pos,
                });
            }
            seen[number.index()] = Some(pos);
        }
        Ok(Self { cells })
    }

    /// Returns the board holding 1-25 in row-major order.
    #[must_use]
    pub fn identity() -> Self {
        let mut cells = [Number::MIN; CELL_COUNT];
        for (cell, number) in cells.iter_mut().zip(Number::all()) {
            *cell = number;
        }
        Self { cells }
    }

    /// Returns the number at `pos`.
    #[must_use]
    pub fn number(&self, pos: Position) -> Number {
        self.cells[pos.index()]
    }

    /// Returns the first position (row-major) holding `number`, if any.
    #[must_use]
    pub fn position_of(&self, number: Number) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|&pos| self.number(pos) == number)
    }

    /// Returns the numbers in row-major order.
    #[must_use]
    pub fn numbers(&self) -> &[Number; CELL_COUNT] {
        &self.cells
    }

    /// Returns the raw values in row-major order.
    #[must_use]
    pub fn to_values(&self) -> [u8; CELL_COUNT] {
        self.cells.map(Number::value)
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Number]> {
        self.cells.chunks_exact(usize::from(SIDE))
    }
}

impl TryFrom<[u8; CELL_COUNT]> for Board {
    type Error = BoardError;

    fn try_from(values: [u8; CELL_COUNT]) -> Result<Self, Self::Error> {
        let mut cells = [Number::MIN; CELL_COUNT];
        for ((cell, value), position) in cells.iter_mut().zip(values).zip(Position::ALL) {
            *cell = Number::try_from(value)
                .map_err(|source| BoardError::InvalidNumber { position, source })?;
        }
        Self::try_from_numbers(cells)
    }
}

impl Index<Position> for Board {
    type Output = Number;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, number) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{number:>2}")?;
            }
        }
        Ok(())
    }
}
