//! Bingo board generation.
//!
//! This crate produces random boards and the "next number" suggestions shown
//! while a game is played.
//!
//! # Overview
//!
//! - [`BoardGenerator`] fills a 5×5 board with distinct numbers 1-25.
//! - [`BoardSeed`] makes generation reproducible: the same seed always yields
//!   the same board.
//! - [`NumberCaller`] draws suggested numbers to call, with replacement.
//!
//! # Examples
//!
//! ```
//! use bingo_generator::{BoardGenerator, BoardSeed};
//!
//! let generator = BoardGenerator::new();
//! let generated = generator.generate();
//!
//! // The seed reproduces the board.
//! let again = generator.generate_with_seed(generated.seed);
//! assert_eq!(generated.board, again.board);
//! ```

pub use self::{
    caller::NumberCaller,
    seed::{BoardSeed, SeedParseError},
};

mod caller;
mod seed;

use bingo_core::{Board, CELL_COUNT, Number};
use rand::{
    SeedableRng as _,
    distr::{Distribution as _, Uniform},
};
use rand_pcg::Pcg64;

/// Board generator using per-cell rejection sampling.
///
/// Each cell, in row-major order, draws numbers uniformly from 1-25 until it
/// finds one not yet placed on the board. Since there are exactly as many
/// numbers as cells, this always terminates and yields a uniformly random
/// permutation; later cells just need more draws on average.
#[derive(Debug, Default, Clone, Copy)]
pub struct BoardGenerator {}

/// A board together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    /// The generated board.
    pub board: Board,
    /// Seed that reproduces `board` via [`BoardGenerator::generate_with_seed`].
    pub seed: BoardSeed,
    /// Total number of random draws, including rejected duplicates.
    pub draws: usize,
}

impl BoardGenerator {
    /// Creates a new generator.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Generates a board from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedBoard {
        self.generate_with_seed(BoardSeed::random())
    }

    /// Generates the board determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: BoardSeed) -> GeneratedBoard {
        let mut rng = Pcg64::from_seed(seed.into_bytes());
        let distribution = number_distribution();

        let mut placed = [false; CELL_COUNT];
        let mut cells = [Number::MIN; CELL_COUNT];
        let mut draws = 0;
        for cell in &mut cells {
            let number = loop {
                draws += 1;
                let candidate = Number::new(distribution.sample(&mut rng));
                if !placed[candidate.index()] {
                    break candidate;
                }
            };
            placed[number.index()] = true;
            *cell = number;
        }

        let board = Board::try_from_numbers(cells)
            .expect("rejection sampling places every number exactly once");
        GeneratedBoard { board, seed, draws }
    }
}

pub(crate) fn number_distribution() -> Uniform<u8> {
    Uniform::new_inclusive(Number::MIN.value(), Number::MAX.value())
        .expect("1..=25 is a non-empty range")
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use bingo_core::Position;
    use proptest::prelude::*;

    use super::*;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    fn assert_is_permutation(board: &Board) {
        let mut seen = [false; CELL_COUNT];
        for pos in Position::ALL {
            let number = board[pos];
            assert!((1..=25).contains(&number.value()));
            assert!(!seen[number.index()], "{number} placed twice");
            seen[number.index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn generated_board_is_a_permutation() {
        let generated = BoardGenerator::new().generate();
        assert_is_permutation(&generated.board);
        assert!(generated.draws >= CELL_COUNT);
    }

    #[test]
    fn same_seed_same_board() {
        let seed = BoardSeed::from_str(SEED).unwrap();
        let generator = BoardGenerator::new();
        let a = generator.generate_with_seed(seed);
        let b = generator.generate_with_seed(seed);
        assert_eq!(a, b);
        assert_eq!(a.seed, seed);
    }

    #[test]
    fn different_seeds_differ() {
        let generator = BoardGenerator::new();
        let a = generator.generate_with_seed(BoardSeed::from_bytes([0; 32]));
        let b = generator.generate_with_seed(BoardSeed::from_bytes([1; 32]));
        assert_ne!(a.board, b.board);
    }

    proptest! {
        #[test]
        fn any_seed_yields_a_permutation(bytes in any::<[u8; 32]>()) {
            let generated = BoardGenerator::new().generate_with_seed(BoardSeed::from_bytes(bytes));
            assert_is_permutation(&generated.board);
            prop_assert!(generated.draws >= CELL_COUNT);
        }
    }
}
