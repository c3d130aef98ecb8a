//! Move replay and scoring for isowords games.
//!
//! A game is an ordered log of [`Move`]s played against a fresh [`Puzzle`].
//! [`MoveVerifier`] replays the log against an owned [`PuzzleState`], checking
//! every word path against the lattice geometry and a caller-supplied
//! [`Dictionary`], and recomputes each move's score. The server uses the same
//! replay to authenticate submitted games before ranking them.
//!
//! # Examples
//!
//! ```
//! use isowords_core::{IndexedCubeFace, Language, LatticePoint, Puzzle, Side};
//! use isowords_game::{Move, Moves, verify};
//!
//! let puzzle: Puzzle = "CAT".repeat(27).parse()?;
//! let cube = |x| LatticePoint::new(x, 0, 0).unwrap();
//! let cat = |x| [Side::Left, Side::Right, Side::Top].map(|side| IndexedCubeFace::new(cube(x), side));
//!
//! let mut moves = Moves::new();
//! moves.push(Move::played_word(cat(0), 18));
//! moves.push(Move::removed_cube(cube(2)));
//! moves.push(Move::played_word(cat(1), 18));
//!
//! let words = ["CAT"];
//! let result = verify(&moves, &puzzle, Language::English, &|word: &str, _: Language| {
//!     words.contains(&word)
//! })?;
//! assert_eq!(result.total_score, 36);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`Puzzle`]: isowords_core::Puzzle

mod dictionary;
mod error;
mod moves;
pub mod scoring;
mod state;
mod verifier;

pub use self::{
    dictionary::Dictionary,
    error::{ErrorCategory, MoveRejection, VerifyError},
    moves::{Move, MoveType, Moves, PlayerIndex, Reaction, Timestamp},
    state::PuzzleState,
    verifier::{
        CheckedWord, MIN_WORD_FACES, MoveVerifier, RepeatedWordPolicy, Submission, VerifiedMove,
        VerifiedResult, VerifyOptions, verify, verify_submission, verify_with_options,
    },
};
