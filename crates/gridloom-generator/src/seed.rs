//! Puzzle seeds and their textual form.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::Rng as _;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed identifying a generated puzzle.
///
/// Seeds are written as 64 lowercase hex characters, which makes them easy
/// to log, share, and feed back in to reproduce a puzzle exactly.
///
/// # Examples
///
/// ```
/// use gridloom_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed =
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1".parse()?;
/// assert_eq!(seed.to_string().len(), 64);
/// # Ok::<(), gridloom_generator::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from a text phrase by hashing it with SHA-256.
    ///
    /// The same phrase always maps to the same seed.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; 32] {
        self.0
    }
}

/// Error returned when parsing a [`PuzzleSeed`] from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The input was not exactly 64 characters long.
    #[display("expected 64 hex characters, found {len}")]
    WrongLength {
        /// Length of the rejected input, in bytes.
        len: usize,
    },
    /// The input contained a character that is not a hex digit.
    #[display("seed contains a non-hex character")]
    InvalidHexDigit,
}

impl FromStr for PuzzleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.as_bytes();
        if raw.len() != 64 {
            return Err(SeedParseError::WrongLength { len: raw.len() });
        }
        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(raw.chunks_exact(2)) {
            let high = hex_value(pair[0]).ok_or(SeedParseError::InvalidHexDigit)?;
            let low = hex_value(pair[1]).ok_or(SeedParseError::InvalidHexDigit)?;
            *byte = high << 4 | low;
        }
        Ok(Self(bytes))
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_hex_round_trip() {
        let seed: PuzzleSeed = HEX.parse().unwrap();
        assert_eq!(seed.to_string(), HEX);
    }

    #[test]
    fn test_uppercase_is_accepted() {
        let upper: PuzzleSeed = HEX.to_uppercase().parse().unwrap();
        let lower: PuzzleSeed = HEX.parse().unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(SeedParseError::WrongLength { len: 3 })
        );
    }

    #[test]
    fn test_rejects_non_hex() {
        let bad = format!("g{}", &HEX[1..]);
        assert_eq!(bad.parse::<PuzzleSeed>(), Err(SeedParseError::InvalidHexDigit));
    }

    #[test]
    fn test_phrase_is_deterministic() {
        assert_eq!(
            PuzzleSeed::from_phrase("gridloom"),
            PuzzleSeed::from_phrase("gridloom")
        );
        assert_ne!(
            PuzzleSeed::from_phrase("gridloom"),
            PuzzleSeed::from_phrase("numbers")
        );
    }

    #[test]
    fn test_entropy_seeds_differ() {
        assert_ne!(PuzzleSeed::from_entropy(), PuzzleSeed::from_entropy());
    }
}
