use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};

/// Error returned when parsing a [`PuzzleSeed`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string is not exactly 64 characters long.
    #[display("expected 64 hex digits, found {len} characters")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// A character is not a hexadecimal digit.
    #[display("invalid hex digit {ch:?} at offset {offset}")]
    InvalidDigit {
        /// Character offset of the offending digit.
        offset: usize,
        /// The offending character.
        ch: char,
    },
}

/// A 256-bit seed that fully determines a generated puzzle.
///
/// Seeds print as 64 lowercase hex digits and parse from the same form
/// (case-insensitively), so a puzzle can be reproduced from its seed alone.
///
/// # Examples
///
/// ```
/// use isowords_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_label("isowords/daily/2026-10-17/timed/en");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes of the seed.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Creates a seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from a text label with SHA-256.
    ///
    /// Equal labels always produce equal seeds, which lets independent clients
    /// agree on a puzzle without exchanging it.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self(Sha256::digest(label.as_bytes()).into())
    }

    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl From<[u8; 32]> for PuzzleSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
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

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::InvalidLength { len });
        }
        let mut nibbles = s.chars().enumerate().map(|(offset, ch)| {
            ch.to_digit(16)
                .map(|digit| digit as u8)
                .ok_or(ParseSeedError::InvalidDigit { offset, ch })
        });
        let mut bytes = [0; 32];
        for byte in &mut bytes {
            let (Some(hi), Some(lo)) = (nibbles.next(), nibbles.next()) else {
                unreachable!("length checked above");
            };
            *byte = hi? << 4 | lo?;
        }
        Ok(Self(bytes))
    }
}

impl From<PuzzleSeed> for String {
    fn from(seed: PuzzleSeed) -> Self {
        seed.to_string()
    }
}

impl TryFrom<String> for PuzzleSeed {
    type Error = ParseSeedError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parse_round_trip() {
        let bytes: [u8; 32] = std::array::from_fn(|i| (i * 37) as u8);
        let seed = PuzzleSeed::from_bytes(bytes);
        let text = seed.to_string();
        assert!(text.starts_with("00254a6f"));
        assert_eq!(text.parse::<PuzzleSeed>(), Ok(seed));
        assert_eq!(text.to_uppercase().parse::<PuzzleSeed>(), Ok(seed));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidLength { len: 3 })
        );
        let bad = format!("{}g{}", "0".repeat(5), "0".repeat(58));
        assert_eq!(
            bad.parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidDigit { offset: 5, ch: 'g' })
        );
    }

    #[test]
    fn test_from_label_is_sha256() {
        // SHA-256 of the empty string.
        assert_eq!(
            PuzzleSeed::from_label("").to_string(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_ne!(PuzzleSeed::from_label("a"), PuzzleSeed::from_label("b"));
    }

    #[test]
    fn test_serde_as_hex_string() {
        let seed = PuzzleSeed::from_label("serde");
        let json = serde_json::to_string(&seed).unwrap();
        assert_eq!(json, format!("\"{seed}\""));
        assert_eq!(serde_json::from_str::<PuzzleSeed>(&json).unwrap(), seed);
    }
}
