use isowords_core::{Language, Letter};
use rand::distr::weighted::WeightedIndex;

/// Error returned when a letter frequency table cannot be sampled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum FrequencyTableError {
    /// The table has no entries.
    #[display("letter frequency table is empty")]
    Empty,
    /// All weights are zero, or their sum overflows.
    #[display("letter frequency weights must have a positive total that fits in u32")]
    InvalidTotal,
    /// A letter appears more than once.
    #[display("letter {letter} appears more than once in the frequency table")]
    DuplicateLetter {
        /// The repeated letter.
        letter: Letter,
    },
}

/// English weights, roughly proportional to letter frequency in running text.
///
/// Rare consonants are lifted slightly and `E`/`T` trimmed so that boards
/// keep a usable mix of vowels and consonants.
const ENGLISH: [(Letter, u32); 26] = [
    (Letter::A, 80),
    (Letter::B, 18),
    (Letter::C, 30),
    (Letter::D, 38),
    (Letter::E, 115),
    (Letter::F, 18),
    (Letter::G, 24),
    (Letter::H, 40),
    (Letter::I, 72),
    (Letter::J, 3),
    (Letter::K, 10),
    (Letter::L, 46),
    (Letter::M, 27),
    (Letter::N, 62),
    (Letter::O, 70),
    (Letter::P, 24),
    (Letter::Qu, 3),
    (Letter::R, 62),
    (Letter::S, 66),
    (Letter::T, 68),
    (Letter::U, 34),
    (Letter::V, 11),
    (Letter::W, 16),
    (Letter::X, 3),
    (Letter::Y, 18),
    (Letter::Z, 3),
];

/// A weighted distribution of tiles used to fill a fresh puzzle.
///
/// Construction validates the table, so sampling never fails.
///
/// # Examples
///
/// ```
/// use isowords_core::Letter;
/// use isowords_generator::{FrequencyTableError, LetterFrequencies};
///
/// let vowels = LetterFrequencies::new([(Letter::A, 2), (Letter::E, 1)])?;
/// assert_eq!(vowels.total_weight(), 3);
///
/// assert_eq!(
///     LetterFrequencies::new(Vec::<(Letter, u32)>::new()),
///     Err(FrequencyTableError::Empty)
/// );
/// # Ok::<(), FrequencyTableError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LetterFrequencies {
    weights: Vec<(Letter, u32)>,
    distribution: WeightedIndex<u32>,
}

impl PartialEq for LetterFrequencies {
    fn eq(&self, other: &Self) -> bool {
        self.weights == other.weights
    }
}

impl Eq for LetterFrequencies {}

impl LetterFrequencies {
    /// Creates a table from `(letter, weight)` pairs.
    ///
    /// Letters with weight zero are allowed and never drawn.
    ///
    /// # Errors
    ///
    /// Returns [`FrequencyTableError`] if the table is empty, repeats a letter,
    /// or its weights do not sum to a positive `u32`.
    pub fn new<I>(weights: I) -> Result<Self, FrequencyTableError>
    where
        I: IntoIterator<Item = (Letter, u32)>,
    {
        let weights: Vec<_> = weights.into_iter().collect();
        if weights.is_empty() {
            return Err(FrequencyTableError::Empty);
        }
        for (i, (letter, _)) in weights.iter().enumerate() {
            if weights[..i].iter().any(|(seen, _)| seen == letter) {
                return Err(FrequencyTableError::DuplicateLetter { letter: *letter });
            }
        }
        let total = weights
            .iter()
            .try_fold(0_u32, |total, (_, weight)| total.checked_add(*weight));
        if !matches!(total, Some(total) if total > 0) {
            return Err(FrequencyTableError::InvalidTotal);
        }
        let distribution = WeightedIndex::new(weights.iter().map(|(_, weight)| *weight))
            .map_err(|_| FrequencyTableError::InvalidTotal)?;
        Ok(Self {
            weights,
            distribution,
        })
    }

    /// Returns the built-in table for `language`.
    ///
    /// # Panics
    ///
    /// Panics if the built-in table for `language` is malformed.
    #[must_use]
    pub fn for_language(language: Language) -> Self {
        let table = match language {
            Language::English => ENGLISH,
        };
        Self::new(table).expect("built-in letter frequency table is valid")
    }

    /// Returns the `(letter, weight)` pairs of the table.
    #[must_use]
    pub fn weights(&self) -> &[(Letter, u32)] {
        &self.weights
    }

    /// Returns the weight of `letter`, or 0 if it is not in the table.
    #[must_use]
    pub fn weight(&self, letter: Letter) -> u32 {
        self.weights
            .iter()
            .find_map(|&(l, weight)| (l == letter).then_some(weight))
            .unwrap_or(0)
    }

    /// Returns the sum of all weights.
    #[must_use]
    pub fn total_weight(&self) -> u32 {
        self.weights.iter().map(|(_, weight)| weight).sum()
    }

    pub(crate) fn distribution(&self) -> &WeightedIndex<u32> {
        &self.distribution
    }

    pub(crate) fn letter_at(&self, index: usize) -> Letter {
        self.weights[index].0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_valid() {
        for language in Language::ALL {
            let table = LetterFrequencies::for_language(language);
            assert!(table.total_weight() > 0);
        }
    }

    #[test]
    fn test_english_covers_every_tile_and_balances_vowels() {
        let table = LetterFrequencies::for_language(Language::English);
        for letter in Letter::ALL {
            assert!(table.weight(letter) > 0, "{letter} is never drawn");
        }
        let vowels: u32 = [Letter::A, Letter::E, Letter::I, Letter::O, Letter::U]
            .into_iter()
            .map(|letter| table.weight(letter))
            .sum();
        let share = f64::from(vowels) / f64::from(table.total_weight());
        assert!((0.33..0.45).contains(&share), "vowel share {share}");
    }

    #[test]
    fn test_rejects_malformed_tables() {
        assert_eq!(
            LetterFrequencies::new([(Letter::A, 0), (Letter::B, 0)]),
            Err(FrequencyTableError::InvalidTotal)
        );
        assert_eq!(
            LetterFrequencies::new([(Letter::A, u32::MAX), (Letter::B, 1)]),
            Err(FrequencyTableError::InvalidTotal)
        );
        assert_eq!(
            LetterFrequencies::new([(Letter::A, 1), (Letter::B, 1), (Letter::A, 1)]),
            Err(FrequencyTableError::DuplicateLetter { letter: Letter::A })
        );
    }
}
