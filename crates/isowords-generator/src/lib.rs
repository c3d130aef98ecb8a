//! Puzzle generation for isowords.
//!
//! A puzzle is generated by drawing the tile of each of its 81 faces from a
//! weighted, per-language [`LetterFrequencies`] table. Generation is driven by
//! a [`PuzzleSeed`], so the same seed always reproduces the same puzzle. Daily
//! challenges derive their seed from the day, mode and language (see
//! [`DailyChallenge`]).
//!
//! # Examples
//!
//! ```
//! use isowords_core::Language;
//! use isowords_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new(Language::English);
//! let generated = generator.generate();
//!
//! // Anyone holding the seed can rebuild the same board.
//! let seed: PuzzleSeed = generated.seed.to_string().parse()?;
//! assert_eq!(generator.generate_with_seed(seed).puzzle, generated.puzzle);
//! # Ok::<(), isowords_generator::ParseSeedError>(())
//! ```

pub use self::{
    daily::{ChallengeDate, DailyChallenge, GameMode, ParseDateError, ParseGameModeError},
    frequency::{FrequencyTableError, LetterFrequencies},
    generator::{GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};

pub mod daily;
mod frequency;
mod generator;
mod seed;
