//! Bingo number representation.

use std::{
    fmt::{self, Display},
    num::ParseIntError,
    str::FromStr,
};

/// A bingo number in the range 1-25.
///
/// A `Number` can only be constructed through validated conversions, so any
/// value of this type is guaranteed to be on some board.
///
/// # Examples
///
/// ```
/// use bingo_core::Number;
///
/// let number: Number = "17".parse().unwrap();
/// assert_eq!(number.value(), 17);
///
/// assert!(Number::try_from(0).is_err());
/// assert!(Number::try_from(26).is_err());
/// assert!("seven".parse::<Number>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Number(u8);

/// Error returned when a value cannot be turned into a [`Number`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum NumberError {
    /// The input is not a decimal integer.
    #[display("`{input}` is not a whole number")]
    Parse {
        /// The rejected input, trimmed.
        input: String,
    },
    /// The integer is outside 1-25.
    #[display("{value} is out of range (expected 1-25)")]
    OutOfRange {
        /// The rejected value.
        value: i64,
    },
}

impl Number {
    /// The smallest bingo number.
    pub const MIN: Self = Self(1);
    /// The largest bingo number.
    pub const MAX: Self = Self(25);

    /// Creates a number from a value known to be in range.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-25.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        assert!(value >= Self::MIN.0 && value <= Self::MAX.0);
        Self(value)
    }

    /// Returns the numeric value (1-25).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns a zero-based index (0-24), suitable for array lookups.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Returns an iterator over every bingo number in ascending order.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (Self::MIN.0..=Self::MAX.0).map(Self)
    }
}

impl TryFrom<u8> for Number {
    type Error = NumberError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(NumberError::OutOfRange {
                value: i64::from(value),
            })
        }
    }
}

impl FromStr for Number {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let value: i64 = input.parse().map_err(|_: ParseIntError| NumberError::Parse {
            input: input.to_owned(),
        })?;
        u8::try_from(value)
            .ok()
            .and_then(|v| Self::try_from(v).ok())
            .ok_or(NumberError::OutOfRange { value })
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Number> for u8 {
    fn from(number: Number) -> Self {
        number.0
    }
}
