use std::{
    fmt::{self, Display},
    str::FromStr,
};

use sha2::{Digest as _, Sha256};

/// A 256-bit seed for reproducible board generation.
///
/// Displayed and parsed as 64 hexadecimal digits.
///
/// # Examples
///
/// ```
/// use bingo_generator::BoardSeed;
///
/// let seed = BoardSeed::from_bytes([0xab; 32]);
/// let text = seed.to_string();
/// assert_eq!(text, "ab".repeat(32));
/// assert_eq!(text.parse::<BoardSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSeed([u8; 32]);

/// Error returned when parsing a [`BoardSeed`] from a hex string.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The string is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Length of the rejected string.
        len: usize,
    },
    /// The string contains a non-hexadecimal character.
    #[display("invalid hex digit {ch:?} at offset {offset}")]
    InvalidDigit {
        /// The rejected character.
        ch: char,
        /// Byte offset of the character.
        offset: usize,
    },
}

impl BoardSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Consumes the seed and returns the raw bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Derives an independent seed for another purpose.
    ///
    /// The result is `SHA-256(seed || domain)`, so different domains give
    /// unrelated random streams from the same board seed.
    #[must_use]
    pub fn derive(&self, domain: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update(domain.as_bytes());
        Self(hasher.finalize().into())
    }
}

impl Display for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for BoardSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(SeedParseError::InvalidLength { len: s.len() });
        }

        let mut bytes = [0; 32];
        for (offset, ch) in s.char_indices() {
            let nibble = ch
                .to_digit(16)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(SeedParseError::InvalidDigit { ch, offset })?;
            let byte = &mut bytes[offset / 2];
            *byte = (*byte << 4) | nibble;
        }
        Ok(Self(bytes))
    }
}
