//! Word scoring.
//!
//! A word's score is the sum of its faces' letter values multiplied by a
//! length bonus. Faces that earlier words already used are worth less: a face
//! used `k` times before contributes `ceil(value / (k + 1))`.
//!
//! # Examples
//!
//! ```
//! use isowords_core::Letter;
//! use isowords_game::scoring::{self, ScoredFace};
//!
//! let game = [Letter::G, Letter::A, Letter::M, Letter::E].map(ScoredFace::fresh);
//! assert_eq!(scoring::score(game), 36);
//! ```

use isowords_core::Letter;

/// A face of a word path, as seen by the scoring function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoredFace {
    /// The tile on the face.
    pub letter: Letter,
    /// How many earlier words used the face.
    pub prior_use_count: u32,
}

impl ScoredFace {
    /// Creates a scored face.
    #[must_use]
    pub const fn new(letter: Letter, prior_use_count: u32) -> Self {
        Self {
            letter,
            prior_use_count,
        }
    }

    /// Creates a face that no earlier word used.
    #[must_use]
    pub const fn fresh(letter: Letter) -> Self {
        Self::new(letter, 0)
    }

    /// Returns the face's contribution to the word's base score.
    #[must_use]
    pub const fn value(self) -> u32 {
        letter_value(self.letter).div_ceil(self.prior_use_count.saturating_add(1))
    }
}

/// Returns the base value of a tile.
#[must_use]
pub const fn letter_value(letter: Letter) -> u32 {
    match letter {
        Letter::A
        | Letter::E
        | Letter::I
        | Letter::N
        | Letter::O
        | Letter::R
        | Letter::S
        | Letter::T
        | Letter::U => 1,
        Letter::L => 2,
        Letter::D | Letter::G => 3,
        Letter::B | Letter::C | Letter::H | Letter::M | Letter::P => 4,
        Letter::F | Letter::Y => 5,
        Letter::K | Letter::V | Letter::W => 6,
        Letter::X => 9,
        Letter::J | Letter::Qu | Letter::Z => 10,
    }
}

/// Returns the multiplier for a word of `len` characters.
///
/// Words of up to four characters score their length; longer words grow
/// quadratically.
#[must_use]
pub fn length_multiplier(len: usize) -> u32 {
    let len = u32::try_from(len).unwrap_or(u32::MAX);
    let bonus = len.saturating_mul(len.saturating_sub(3));
    if bonus > len { bonus } else { len }
}

/// Scores a word spelled by `faces`.
///
/// The word length is the number of characters, so the "QU" tile counts
/// twice.
#[must_use]
pub fn score<I>(faces: I) -> u32
where
    I: IntoIterator<Item = ScoredFace>,
{
    let (sum, len) = faces.into_iter().fold((0_u32, 0_usize), |(sum, len), face| {
        (sum.saturating_add(face.value()), len + face.letter.len())
    });
    sum.saturating_mul(length_multiplier(len))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_word(word: &str) -> Vec<ScoredFace> {
        word.chars()
            .map(|ch| ScoredFace::fresh(Letter::from_char(ch).unwrap()))
            .collect()
    }

    #[test]
    fn test_reference_scores() {
        assert_eq!(score(fresh_word("GAME")), 36);
        assert_eq!(score(fresh_word("CUBES")), 110);
        assert_eq!(score(fresh_word("REMOVE")), 252);
        assert_eq!(score(fresh_word("WORD")), 44);
    }

    #[test]
    fn test_length_multiplier() {
        assert_eq!(length_multiplier(3), 3);
        assert_eq!(length_multiplier(4), 4);
        assert_eq!(length_multiplier(5), 10);
        assert_eq!(length_multiplier(6), 18);
        assert_eq!(length_multiplier(8), 40);
    }

    #[test]
    fn test_qu_counts_as_two_characters() {
        // QU + I + T: four characters, 10 + 1 + 1 = 12.
        let quit = [Letter::Qu, Letter::I, Letter::T].map(ScoredFace::fresh);
        assert_eq!(score(quit), 48);
    }

    #[test]
    fn test_reused_faces_are_worth_less() {
        let mut faces = fresh_word("WORD");
        faces[0].prior_use_count = 1;
        // W: ceil(6 / 2) = 3.
        assert_eq!(score(faces.clone()), 8 * 4);
        faces[0].prior_use_count = 2;
        assert_eq!(score(faces.clone()), 7 * 4);
        faces[3].prior_use_count = 2;
        // D: ceil(3 / 3) = 1.
        assert_eq!(score(faces), 5 * 4);
    }

    #[test]
    fn test_every_letter_has_a_value() {
        for letter in Letter::ALL {
            assert!((1..=10).contains(&letter_value(letter)), "{letter}");
            assert!(ScoredFace::new(letter, 5).value() >= 1);
        }
    }
}
