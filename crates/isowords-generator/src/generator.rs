use isowords_core::{Language, Puzzle};
use rand::distr::Distribution as _;
use serde::{Deserialize, Serialize};

use crate::{LetterFrequencies, PuzzleSeed};

/// A puzzle produced by [`PuzzleGenerator`], together with what produced it.
///
/// Regenerating with the same `seed` and `language` yields the same `puzzle`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPuzzle {
    /// The seed the letters were drawn with.
    pub seed: PuzzleSeed,
    /// The language whose frequency table was sampled.
    pub language: Language,
    /// The fresh puzzle.
    pub puzzle: Puzzle,
}

/// Generates fresh puzzles by sampling every face's tile independently.
///
/// Each of the 81 faces, in flat position order, draws one tile from the
/// language's [`LetterFrequencies`]. The generator is a pure sampler: it does
/// not check that the board contains any words.
///
/// # Examples
///
/// ```
/// use isowords_core::Language;
/// use isowords_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new(Language::English);
/// let seed = PuzzleSeed::from_label("example");
///
/// let first = generator.generate_with_seed(seed);
/// let second = generator.generate_with_seed(seed);
/// assert_eq!(first.puzzle, second.puzzle);
/// assert!(first.puzzle.is_fresh());
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    language: Language,
    frequencies: LetterFrequencies,
}

impl PuzzleGenerator {
    /// Creates a generator using the built-in frequency table of `language`.
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            language,
            frequencies: LetterFrequencies::for_language(language),
        }
    }

    /// Creates a generator with a custom frequency table.
    #[must_use]
    pub fn with_frequencies(language: Language, frequencies: LetterFrequencies) -> Self {
        Self {
            language,
            frequencies,
        }
    }

    /// Returns the language of generated puzzles.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Returns the frequency table the generator samples from.
    #[must_use]
    pub fn frequencies(&self) -> &LetterFrequencies {
        &self.frequencies
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        let distribution = self.frequencies.distribution();
        let puzzle =
            Puzzle::from_fn(|_| self.frequencies.letter_at(distribution.sample(&mut rng)));
        GeneratedPuzzle {
            seed,
            language: self.language,
            puzzle,
        }
    }
}
