//! Bingo game session management.
//!
//! A [`Game`] is an immutable value: calling a number produces the next game
//! value instead of mutating the current one, so the caller decides when to
//! replace its state.
//!
//! # Examples
//!
//! ```
//! use bingo_core::{Board, Number};
//! use bingo_game::{CallOutcome, Game};
//! use bingo_generator::BoardSeed;
//!
//! let mut game = Game::with_board(Board::identity(), BoardSeed::from_bytes([0; 32]));
//! for value in 1..=5 {
//!     let (next, outcome) = game.call_number(Number::new(value)).unwrap();
//!     assert!(outcome.is_marked());
//!     game = next;
//! }
//! assert!(game.is_won());
//! ```

pub use self::game::Game;

mod game;

use bingo_core::Position;

/// Whether a game is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameStatus {
    /// No line is complete yet.
    InProgress,
    /// At least one row, column, or diagonal is fully marked.
    Won,
}

/// What happened when a number was called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CallOutcome {
    /// The cell holding the number was marked by this call.
    Marked {
        /// The newly marked cell.
        position: Position,
        /// `true` if this mark completed a line.
        completes_win: bool,
    },
    /// The number had been called before; nothing changed.
    AlreadyMarked {
        /// The cell holding the number.
        position: Position,
    },
    /// No cell holds the number; nothing changed.
    NotOnBoard,
}

impl CallOutcome {
    /// Returns `true` if the call completed a line.
    #[must_use]
    pub fn completes_win(self) -> bool {
        matches!(
            self,
            Self::Marked {
                completes_win: true,
                ..
            }
        )
    }
}

/// Errors that can occur when advancing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The game already has a completed line and accepts no more calls.
    #[display("the game is already won")]
    AlreadyWon,
}
