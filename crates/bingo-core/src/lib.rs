//! Core data structures for the bingo board simulator.
//!
//! This crate provides the value types shared by board generation, game
//! management, and the application layer.
//!
//! # Overview
//!
//! 1. **Core types**
//!    - [`number`]: Type-safe representation of bingo numbers 1-25
//!    - [`position`]: Board position (x, y) coordinate type
//!    - [`line`]: The 12 winning lines (5 rows, 5 columns, 2 diagonals)
//!
//! 2. **Board state**
//!    - [`board`]: A 5×5 grid holding each number exactly once
//!    - [`mark_state`]: The set of marked cells, with win detection
//!
//! # Examples
//!
//! ```
//! use bingo_core::{Board, MarkState, Number};
//!
//! let board = Board::identity();
//! let mut marks = MarkState::new();
//! for value in 1..=5 {
//!     marks = marks.marked(&board, Number::new(value));
//! }
//! assert!(marks.has_win()); // the first row is complete
//! ```

pub mod board;
pub mod line;
pub mod mark_state;
pub mod number;
pub mod position;

pub use self::{
    board::{Board, BoardError},
    line::Line,
    mark_state::{MarkState, has_win, mark},
    number::{Number, NumberError},
    position::Position,
};

/// Number of rows and columns on a board.
pub const SIDE: u8 = 5;

/// Number of cells on a board, which is also the count of distinct numbers.
pub const CELL_COUNT: usize = 25;
