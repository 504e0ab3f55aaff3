//! Marked cells and win detection.

use crate::{Board, CELL_COUNT, Line, Number, Position};

/// The set of marked cells on a board.
///
/// Stored as a 25-bit set indexed by [`Position::index`]. A mark state only
/// grows: there is no way to unmark a single cell, a finished game is replaced
/// with a fresh state instead.
///
/// # Examples
///
/// ```
/// use bingo_core::{Board, Line, MarkState, Number, Position};
///
/// let board = Board::identity();
/// let marks = [1, 7, 13, 19, 25]
///     .into_iter()
///     .fold(MarkState::new(), |marks, v| marks.marked(&board, Number::new(v)));
///
/// assert!(marks.is_marked(Position::new(2, 2)));
/// assert!(marks.has_win());
/// assert_eq!(marks.winning_lines().collect::<Vec<_>>(), [Line::MainDiagonal]);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkState {
    bits: u32,
}

impl MarkState {
    const FULL_BITS: u32 = (1 << CELL_COUNT) - 1;

    /// Creates a mark state with no marked cells.
    #[must_use]
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Creates a mark state with every cell marked.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            bits: Self::FULL_BITS,
        }
    }

    /// Returns `true` if the cell at `pos` is marked.
    #[must_use]
    pub const fn is_marked(self, pos: Position) -> bool {
        self.bits & Self::bit(pos) != 0
    }

    /// Marks the cell at `pos`.
    ///
    /// Returns `true` if the cell was not marked before.
    pub const fn insert(&mut self, pos: Position) -> bool {
        let was_marked = self.is_marked(pos);
        self.bits |= Self::bit(pos);
        !was_marked
    }

    /// Returns this state with the cell holding `number` marked.
    ///
    /// The board is scanned in row-major order and the first matching cell is
    /// marked. If no cell holds `number`, the state is returned unchanged.
    #[must_use]
    pub fn marked(mut self, board: &Board, number: Number) -> Self {
        if let Some(pos) = board.position_of(number) {
            self.insert(pos);
        }
        self
    }

    /// Returns the number of marked cells.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if no cell is marked.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the marked positions in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Position> {
        Position::ALL
            .into_iter()
            .filter(move |&pos| self.is_marked(pos))
    }

    /// Returns `true` if every cell on `line` is marked.
    #[must_use]
    pub fn is_line_complete(self, line: Line) -> bool {
        line.positions().into_iter().all(|pos| self.is_marked(pos))
    }

    /// Returns the number of marked cells on `line`.
    #[must_use]
    pub fn marked_on_line(self, line: Line) -> usize {
        line.positions()
            .into_iter()
            .filter(|&pos| self.is_marked(pos))
            .count()
    }

    /// Returns an iterator over the fully marked lines, in [`Line::ALL`] order.
    pub fn winning_lines(self) -> impl Iterator<Item = Line> {
        Line::ALL
            .into_iter()
            .filter(move |&line| self.is_line_complete(line))
    }

    /// Returns `true` if any row, column, or diagonal is fully marked.
    #[must_use]
    pub fn has_win(self) -> bool {
        self.winning_lines().next().is_some()
    }

    /// Returns `true` if `pos` lies on a fully marked line.
    #[must_use]
    pub fn is_on_winning_line(self, pos: Position) -> bool {
        self.winning_lines().any(|line| line.contains(pos))
    }

    const fn bit(pos: Position) -> u32 {
        1 << pos.index()
    }
}

impl FromIterator<Position> for MarkState {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        let mut marks = Self::new();
        for pos in iter {
            marks.insert(pos);
        }
        marks
    }
}

/// Marks the first cell (row-major) of `board` holding `number`.
///
/// Free-function form of [`MarkState::marked`].
#[must_use]
pub fn mark(board: &Board, marks: MarkState, number: Number) -> MarkState {
    marks.marked(board, number)
}

/// Returns `true` if any row, column, or diagonal of `marks` is fully marked.
///
/// Free-function form of [`MarkState::has_win`].
#[must_use]
pub fn has_win(marks: MarkState) -> bool {
    marks.has_win()
}
