//! Letter tiles printed on cube faces.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Error returned when a string or character is not a valid tile.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid letter tile: {_0:?}")]
pub struct ParseLetterError(#[error(not(source))] pub String);

/// A letter tile on a cube face.
///
/// Every tile is a single uppercase letter except [`Letter::Qu`], the
/// two-character "QU" tile that replaces a bare "Q".
///
/// # Examples
///
/// ```
/// use isowords_core::Letter;
///
/// assert_eq!(Letter::Qu.as_str(), "QU");
/// assert_eq!(Letter::Qu.len(), 2);
/// assert_eq!(Letter::from_char('q'), Some(Letter::Qu));
/// assert_eq!("e".parse::<Letter>().unwrap(), Letter::E);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
#[allow(missing_docs)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Qu,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl Letter {
    /// All tiles in alphabetical order.
    pub const ALL: [Self; 26] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
        Self::J,
        Self::K,
        Self::L,
        Self::M,
        Self::N,
        Self::O,
        Self::P,
        Self::Qu,
        Self::R,
        Self::S,
        Self::T,
        Self::U,
        Self::V,
        Self::W,
        Self::X,
        Self::Y,
        Self::Z,
    ];

    const STRS: [&'static str; 26] = [
        "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "QU", "R",
        "S", "T", "U", "V", "W", "X", "Y", "Z",
    ];

    /// Returns the tile for an ASCII letter, case-insensitively.
    ///
    /// `'Q'` maps to [`Letter::Qu`]. Returns `None` for anything else.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let offset = ch.to_ascii_uppercase() as u8 - b'A';
        Some(Self::ALL[usize::from(offset)])
    }

    /// Returns the uppercase text of this tile.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        Self::STRS[self as usize]
    }

    /// Returns the compact single-character form used in puzzle archives.
    ///
    /// This is the first character of the tile, so "QU" becomes `'Q'`.
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'A' + self as u8) as char
    }

    /// Returns the number of characters on this tile (1, or 2 for "QU").
    #[must_use]
    #[expect(clippy::len_without_is_empty)]
    pub const fn len(self) -> usize {
        self.as_str().len()
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Letter {
    type Err = ParseLetterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("QU") {
            return Ok(Self::Qu);
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if !ch.eq_ignore_ascii_case(&'q') => Self::from_char(ch),
            _ => None,
        }
        .ok_or_else(|| ParseLetterError(s.to_owned()))
    }
}

impl From<Letter> for String {
    fn from(letter: Letter) -> Self {
        letter.as_str().to_owned()
    }
}

impl TryFrom<String> for Letter {
    type Error = ParseLetterError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_round_trip() {
        for letter in Letter::ALL {
            assert_eq!(Letter::from_char(letter.to_char()), Some(letter));
        }
        assert_eq!(Letter::from_char('1'), None);
        assert_eq!(Letter::from_char('é'), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("QU".parse::<Letter>(), Ok(Letter::Qu));
        assert_eq!("qu".parse::<Letter>(), Ok(Letter::Qu));
        assert_eq!("z".parse::<Letter>(), Ok(Letter::Z));
        // A bare "Q" tile does not exist.
        assert!("Q".parse::<Letter>().is_err());
        assert!("AB".parse::<Letter>().is_err());
        assert!("".parse::<Letter>().is_err());
    }

    #[test]
    fn test_serde_uses_tile_text() {
        assert_eq!(serde_json::to_string(&Letter::Qu).unwrap(), r#""QU""#);
        assert_eq!(serde_json::from_str::<Letter>(r#""K""#).unwrap(), Letter::K);
        assert!(serde_json::from_str::<Letter>(r#""Q""#).is_err());
    }
}
