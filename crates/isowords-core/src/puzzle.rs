//! The 3×3×3 puzzle of lettered cubes.
//!
//! # Archive format
//!
//! A puzzle serializes to an 81-character string listing the tile of every
//! face in flat position order (see [`IndexedCubeFace::position`]). The
//! two-character "QU" tile is written as a single `Q`. Use counts and removal
//! flags are not part of the archive: a parsed puzzle is always fresh, which is
//! exactly the state daily challenges and shared games are distributed in.
//! Whitespace between characters is ignored when parsing.
//!
//! ```
//! use isowords_core::{IndexedCubeFace, Letter, Puzzle};
//!
//! let text = "QUIZ".repeat(20) + "E";
//! let puzzle: Puzzle = text.parse()?;
//! assert_eq!(puzzle.letter(IndexedCubeFace::from_position(0)), Letter::Qu);
//! assert_eq!(puzzle.to_string(), text);
//! # Ok::<(), isowords_core::ParsePuzzleError>(())
//! ```

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{Cube, CubeFace, IndexedCubeFace, LatticePoint, Letter, Side};

/// Error returned when parsing a puzzle archive string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParsePuzzleError {
    /// The string does not contain exactly 81 tiles.
    #[display("expected 81 tiles, found {len}")]
    InvalidLength {
        /// Number of non-whitespace characters found.
        len: usize,
    },
    /// A character is not a letter.
    #[display("invalid tile {ch:?} at face position {position}")]
    InvalidLetter {
        /// Flat face position of the offending character.
        position: usize,
        /// The offending character.
        ch: char,
    },
}

/// A 3×3×3 arrangement of lettered cubes.
///
/// Letters never change after generation. Use counts and removal flags are
/// derived by replaying a game's moves, so they are never serialized: a
/// puzzle serializes as its archive string and always deserializes fresh.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Puzzle {
    cubes: [Cube; LatticePoint::COUNT],
}

impl Puzzle {
    /// Creates a fresh puzzle by asking `f` for the tile of every face.
    ///
    /// Faces are visited in flat position order.
    ///
    /// # Examples
    ///
    /// ```
    /// use isowords_core::{IndexedCubeFace, Letter, Puzzle, Side};
    ///
    /// let puzzle = Puzzle::from_fn(|face| match face.side {
    ///     Side::Left => Letter::L,
    ///     Side::Right => Letter::R,
    ///     Side::Top => Letter::T,
    /// });
    /// assert_eq!(puzzle.to_string(), "LRT".repeat(27));
    /// ```
    #[must_use]
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(IndexedCubeFace) -> Letter,
    {
        let cubes = std::array::from_fn(|i| {
            let point = LatticePoint::from_index(i);
            let left = f(IndexedCubeFace::new(point, Side::Left));
            let right = f(IndexedCubeFace::new(point, Side::Right));
            let top = f(IndexedCubeFace::new(point, Side::Top));
            Cube::new(left, right, top)
        });
        Self { cubes }
    }

    /// Creates a fresh puzzle from the tiles of all faces in flat position order.
    #[must_use]
    pub fn from_letters(letters: [Letter; IndexedCubeFace::COUNT]) -> Self {
        Self::from_fn(|face| letters[face.position()])
    }

    /// Returns the tiles of all faces in flat position order.
    #[must_use]
    pub fn letters(&self) -> [Letter; IndexedCubeFace::COUNT] {
        IndexedCubeFace::ALL.map(|face| self[face].letter)
    }

    /// Returns the tile on the given face.
    ///
    /// The tile is returned even if the cube is no longer in play.
    #[must_use]
    pub fn letter(&self, face: IndexedCubeFace) -> Letter {
        self[face].letter
    }

    /// Returns all cubes in flat index order.
    #[must_use]
    pub fn cubes(&self) -> &[Cube; LatticePoint::COUNT] {
        &self.cubes
    }

    /// Returns `true` if no face has been used and no cube removed.
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.cubes
            .iter()
            .all(|cube| !cube.was_removed && cube.use_count() == 0)
    }

    /// Returns a copy of this puzzle with all use counts and removals cleared.
    #[must_use]
    pub fn to_fresh(&self) -> Self {
        Self::from_letters(self.letters())
    }
}

impl Index<LatticePoint> for Puzzle {
    type Output = Cube;

    fn index(&self, point: LatticePoint) -> &Cube {
        &self.cubes[point.index()]
    }
}

impl IndexMut<LatticePoint> for Puzzle {
    fn index_mut(&mut self, point: LatticePoint) -> &mut Cube {
        &mut self.cubes[point.index()]
    }
}

impl Index<IndexedCubeFace> for Puzzle {
    type Output = CubeFace;

    fn index(&self, face: IndexedCubeFace) -> &CubeFace {
        self[face.index].face(face.side)
    }
}

impl IndexMut<IndexedCubeFace> for Puzzle {
    fn index_mut(&mut self, face: IndexedCubeFace) -> &mut CubeFace {
        self[face.index].face_mut(face.side)
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in IndexedCubeFace::ALL {
            write!(f, "{}", self[face].letter.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Puzzle {
    type Err = ParsePuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().filter(|ch| !ch.is_ascii_whitespace()).collect();
        if chars.len() != IndexedCubeFace::COUNT {
            return Err(ParsePuzzleError::InvalidLength { len: chars.len() });
        }
        let mut letters = [Letter::A; IndexedCubeFace::COUNT];
        for (position, (&ch, letter)) in chars.iter().zip(&mut letters).enumerate() {
            *letter = Letter::from_char(ch).ok_or(ParsePuzzleError::InvalidLetter { position, ch })?;
        }
        Ok(Self::from_letters(letters))
    }
}

impl From<Puzzle> for String {
    fn from(puzzle: Puzzle) -> Self {
        puzzle.to_string()
    }
}

impl TryFrom<String> for Puzzle {
    type Error = ParsePuzzleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARCHIVE: &str = "\
        AEL RIT NOS \
        CUB ESM OVD \
        QWA GHK LIN \
        TEA RSO PEY \
        XZJ FUM BIR \
        DAE NTO CAS \
        LEI GOH WEN \
        TRU SAP MIK \
        VEY ODA NEZ";

    #[test]
    fn test_parse_and_display() {
        let puzzle: Puzzle = ARCHIVE.parse().unwrap();
        assert!(puzzle.is_fresh());

        let origin = LatticePoint::new(0, 0, 0).unwrap();
        assert_eq!(puzzle[origin].left.letter, Letter::A);
        assert_eq!(puzzle[origin].right.letter, Letter::E);
        assert_eq!(puzzle[origin].top.letter, Letter::L);

        // Cube index 6 is (0, 2, 0).
        let qu_cube = LatticePoint::new(0, 2, 0).unwrap();
        assert_eq!(puzzle[qu_cube].left.letter, Letter::Qu);

        let compact: String = ARCHIVE.split_whitespace().collect();
        assert_eq!(puzzle.to_string(), compact);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "ABC".parse::<Puzzle>(),
            Err(ParsePuzzleError::InvalidLength { len: 3 })
        );
        let bad = format!("{}7{}", "A".repeat(10), "A".repeat(70));
        assert_eq!(
            bad.parse::<Puzzle>(),
            Err(ParsePuzzleError::InvalidLetter {
                position: 10,
                ch: '7'
            })
        );
    }

    #[test]
    fn test_to_fresh_clears_state() {
        let mut puzzle: Puzzle = ARCHIVE.parse().unwrap();
        let face = IndexedCubeFace::from_position(12);
        puzzle[face].use_count = 2;
        puzzle[LatticePoint::from_index(20)].was_removed = true;
        assert!(!puzzle.is_fresh());

        let fresh = puzzle.to_fresh();
        assert!(fresh.is_fresh());
        assert_eq!(fresh.letters(), puzzle.letters());
    }

    #[test]
    fn test_serde_uses_archive_and_drops_state() {
        let mut puzzle: Puzzle = ARCHIVE.parse().unwrap();
        puzzle[IndexedCubeFace::from_position(5)].use_count = 1;
        puzzle[LatticePoint::from_index(3)].was_removed = true;

        let json = serde_json::to_string(&puzzle).unwrap();
        let compact: String = ARCHIVE.split_whitespace().collect();
        assert_eq!(json, format!("\"{compact}\""));

        let restored: Puzzle = serde_json::from_str(&json).unwrap();
        assert!(restored.is_fresh());
        assert_eq!(restored, puzzle.to_fresh());

        assert!(serde_json::from_str::<Puzzle>(r#""ABC""#).is_err());
        assert!(serde_json::from_str::<Puzzle>(r#"{"cubes":[]}"#).is_err());
    }
}
