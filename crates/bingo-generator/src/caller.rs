use bingo_core::Number;
use rand::{SeedableRng as _, distr::Distribution as _};
use rand_pcg::Pcg64;

use crate::{BoardSeed, number_distribution};

/// Suggests numbers to call during a game.
///
/// Numbers are drawn uniformly from 1-25 with replacement, so the same number
/// may be suggested more than once. The caller is reproducible: it can be
/// resumed from its seed and the count of numbers drawn so far.
///
/// # Examples
///
/// ```
/// use bingo_generator::{BoardSeed, NumberCaller};
///
/// let seed = BoardSeed::from_bytes([7; 32]);
/// let mut caller = NumberCaller::new(seed);
/// let first = caller.next_number();
/// let second = caller.next_number();
///
/// let mut resumed = NumberCaller::resume(seed, 1);
/// assert_eq!(resumed.next_number(), second);
/// # let _ = first;
/// ```
#[derive(Debug, Clone)]
pub struct NumberCaller {
    seed: BoardSeed,
    rng: Pcg64,
    drawn: usize,
}

impl NumberCaller {
    /// Creates a caller whose sequence is determined by `seed`.
    #[must_use]
    pub fn new(seed: BoardSeed) -> Self {
        Self {
            seed,
            rng: Pcg64::from_seed(seed.into_bytes()),
            drawn: 0,
        }
    }

    /// Recreates a caller that has already drawn `drawn` numbers.
    #[must_use]
    pub fn resume(seed: BoardSeed, drawn: usize) -> Self {
        let mut caller = Self::new(seed);
        for _ in 0..drawn {
            let _ = caller.next_number();
        }
        caller
    }

    /// Returns the seed this caller was created from.
    #[must_use]
    pub fn seed(&self) -> BoardSeed {
        self.seed
    }

    /// Returns how many numbers have been drawn.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    /// Draws the next suggested number.
    pub fn next_number(&mut self) -> Number {
        self.drawn += 1;
        Number::new(number_distribution().sample(&mut self.rng))
    }
}
