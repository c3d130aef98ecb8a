use std::collections::HashSet;

use isowords_core::{FaceSet, IndexedCubeFace, Language, LatticeGeometry, LatticePoint, Puzzle};
use serde::{Deserialize, Serialize};

use crate::{Dictionary, MoveRejection, MoveType, Moves, PuzzleState, VerifyError};

/// Minimum number of faces in a word path.
pub const MIN_WORD_FACES: usize = 3;

/// Whether a word may be played more than once in a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum RepeatedWordPolicy {
    /// The same word may be spelled again along any legal path.
    #[default]
    Allow,
    /// A word already played in this game is rejected.
    Reject,
}

/// Options controlling which moves the verifier accepts.
///
/// The default accepts every move the core game rules allow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VerifyOptions {
    /// How repeated words are treated.
    pub repeated_word_policy: RepeatedWordPolicy,
}

impl VerifyOptions {
    /// Sets the repeated word policy.
    #[must_use]
    pub fn repeated_word_policy(mut self, policy: RepeatedWordPolicy) -> Self {
        self.repeated_word_policy = policy;
        self
    }
}

/// A word path that passed every check, with the score it would earn.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CheckedWord {
    /// The word spelled by the path.
    pub word: String,
    /// The score of the word with the current use counts.
    pub score: u32,
}

/// The replayed outcome of one move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerifiedMove {
    /// The recomputed score (0 for cube removals).
    pub score: u32,
    /// The word spelled, for word moves.
    pub word: Option<String>,
}

/// The outcome of replaying a whole move log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedResult {
    /// One entry per move, in log order.
    pub moves: Vec<VerifiedMove>,
    /// Sum of all move scores.
    pub total_score: u32,
    /// The puzzle state after the last move.
    pub state: PuzzleState,
}

impl VerifiedResult {
    /// Returns the accepted words with their move index and score.
    pub fn words(&self) -> impl Iterator<Item = (usize, &str, u32)> + '_ {
        self.moves
            .iter()
            .enumerate()
            .filter_map(|(index, mv)| mv.word.as_deref().map(|word| (index, word, mv.score)))
    }
}

/// A finished game as submitted for ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// The complete move log.
    pub moves: Moves,
    /// The claimed total score.
    pub score: u32,
}

/// Replays moves one at a time against an owned [`PuzzleState`].
///
/// Clients use it to validate each move as it is made; [`verify`] runs it over
/// a whole log. A rejected move leaves the state untouched.
///
/// # Examples
///
/// ```
/// use isowords_core::{IndexedCubeFace, Language, LatticePoint, Puzzle, Side};
/// use isowords_game::{MoveRejection, MoveType, MoveVerifier, VerifyError};
///
/// let puzzle: Puzzle = "CAT".repeat(27).parse()?;
/// let dictionary = |word: &str, _: Language| word == "CAT";
/// let mut verifier = MoveVerifier::new(&puzzle, Language::English, &dictionary);
///
/// let origin = LatticePoint::new(0, 0, 0).unwrap();
/// let cat = [Side::Left, Side::Right, Side::Top].map(|side| IndexedCubeFace::new(origin, side));
/// assert_eq!(verifier.check_word(&cat)?.score, 18);
///
/// verifier.apply(&MoveType::PlayedWord(cat.to_vec()))?;
/// assert_eq!(verifier.total_score(), 18);
///
/// // Each face of the origin cube has now been used once, exhausting the cube.
/// assert!(matches!(
///     verifier.apply(&MoveType::PlayedWord(cat.to_vec())),
///     Err(VerifyError::InvalidMove { index: 1, reason: MoveRejection::FaceNotInPlay { .. } })
/// ));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct MoveVerifier<'d, D: ?Sized> {
    state: PuzzleState,
    dictionary: &'d D,
    options: VerifyOptions,
    played_words: HashSet<String>,
    moves: Vec<VerifiedMove>,
    total_score: u32,
}

impl<'d, D> MoveVerifier<'d, D>
where
    D: Dictionary + ?Sized,
{
    /// Creates a verifier starting from the letters of `initial`.
    ///
    /// Use counts and removals carried by `initial` are discarded: replay
    /// always starts from the fresh puzzle.
    #[must_use]
    pub fn new(initial: &Puzzle, language: Language, dictionary: &'d D) -> Self {
        Self {
            state: PuzzleState::new(initial.to_fresh(), language),
            dictionary,
            options: VerifyOptions::default(),
            played_words: HashSet::new(),
            moves: Vec::new(),
            total_score: 0,
        }
    }

    /// Replaces the verifier's options.
    #[must_use]
    pub fn with_options(mut self, options: VerifyOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the current puzzle state.
    #[must_use]
    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// Returns the outcomes of the moves applied so far.
    #[must_use]
    pub fn verified_moves(&self) -> &[VerifiedMove] {
        &self.moves
    }

    /// Returns the sum of the scores of the moves applied so far.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Checks whether `path` could be played now, without playing it.
    ///
    /// Rules are checked in a fixed order, and the first violation is
    /// reported: path length, repeated faces, faces in play, adjacency of
    /// consecutive faces, the dictionary, then the repeated word policy.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveRejection`] of the first rule `path` violates.
    pub fn check_word(&self, path: &[IndexedCubeFace]) -> Result<CheckedWord, MoveRejection> {
        if path.len() < MIN_WORD_FACES {
            return Err(MoveRejection::TooShort { len: path.len() });
        }

        let mut seen = FaceSet::EMPTY;
        if let Some(&face) = path.iter().find(|&&face| !seen.insert(face)) {
            return Err(MoveRejection::DuplicateFace { face });
        }

        if let Some(&face) = path.iter().find(|&&face| !self.state.is_in_play(face)) {
            return Err(MoveRejection::FaceNotInPlay { face });
        }

        if let Some(pair) = path
            .windows(2)
            .find(|pair| !LatticeGeometry::are_adjacent(pair[0], pair[1]))
        {
            return Err(MoveRejection::NotAdjacent {
                from: pair[0],
                to: pair[1],
            });
        }

        let word = self.state.string(path);
        if !self.dictionary.contains(&word, self.state.language()) {
            return Err(MoveRejection::UnknownWord { word });
        }
        if self.options.repeated_word_policy.is_reject() && self.played_words.contains(&word) {
            return Err(MoveRejection::RepeatedWord { word });
        }

        let score = self.state.score(path);
        Ok(CheckedWord { word, score })
    }

    /// Checks whether the cube at `index` could be removed now.
    ///
    /// # Errors
    ///
    /// Returns [`MoveRejection::CubeAlreadyRemoved`] if the cube is gone.
    pub fn check_removal(&self, index: LatticePoint) -> Result<(), MoveRejection> {
        if self.state.is_removed(index) {
            return Err(MoveRejection::CubeAlreadyRemoved { index });
        }
        Ok(())
    }

    /// Validates and applies the next move.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::InvalidMove`] if the move breaks a rule. The
    /// state is left unchanged, so further moves may still be tried.
    pub fn apply(&mut self, kind: &MoveType) -> Result<&VerifiedMove, VerifyError> {
        let index = self.moves.len();
        let verified = match kind {
            MoveType::PlayedWord(path) => self.check_word(path).map(|checked| {
                self.state.record_word(path);
                if self.options.repeated_word_policy.is_reject() {
                    self.played_words.insert(checked.word.clone());
                }
                VerifiedMove {
                    score: checked.score,
                    word: Some(checked.word),
                }
            }),
            MoveType::RemovedCube(cube) => self.check_removal(*cube).map(|()| {
                self.state.remove_cube(*cube);
                VerifiedMove {
                    score: 0,
                    word: None,
                }
            }),
        };
        let verified = verified.map_err(|reason| {
            log::debug!("rejected move {index}: {reason}");
            VerifyError::InvalidMove { index, reason }
        })?;

        match &verified.word {
            Some(word) => log::trace!("move {index}: {word} for {} points", verified.score),
            None => log::trace!("move {index}: removed a cube"),
        }
        self.total_score = self.total_score.saturating_add(verified.score);
        self.moves.push(verified);
        Ok(&self.moves[index])
    }

    /// Finishes replay and returns the result.
    #[must_use]
    pub fn finish(self) -> VerifiedResult {
        VerifiedResult {
            moves: self.moves,
            total_score: self.total_score,
            state: self.state,
        }
    }
}

/// Replays `moves` from `initial` with the default [`VerifyOptions`].
///
/// Claimed move scores are ignored; see [`verify_submission`] to check them.
///
/// # Errors
///
/// Returns [`VerifyError::InvalidMove`] for the first move that breaks a rule.
pub fn verify<D>(
    moves: &Moves,
    initial: &Puzzle,
    language: Language,
    dictionary: &D,
) -> Result<VerifiedResult, VerifyError>
where
    D: Dictionary + ?Sized,
{
    verify_with_options(moves, initial, language, dictionary, VerifyOptions::default())
}

/// Replays `moves` from `initial` with the given options.
///
/// # Errors
///
/// Returns [`VerifyError::InvalidMove`] for the first move that breaks a rule.
pub fn verify_with_options<D>(
    moves: &Moves,
    initial: &Puzzle,
    language: Language,
    dictionary: &D,
    options: VerifyOptions,
) -> Result<VerifiedResult, VerifyError>
where
    D: Dictionary + ?Sized,
{
    let mut verifier = MoveVerifier::new(initial, language, dictionary).with_options(options);
    for mv in moves {
        verifier.apply(&mv.kind)?;
    }
    Ok(verifier.finish())
}

/// Replays a submitted game and checks its claimed scores.
///
/// # Errors
///
/// Returns [`VerifyError::InvalidMove`] for the first move that breaks a rule,
/// [`VerifyError::MoveScoreMismatch`] for the first move whose claimed score is
/// wrong, and [`VerifyError::TotalScoreMismatch`] if the claimed total is wrong.
pub fn verify_submission<D>(
    submission: &Submission,
    initial: &Puzzle,
    language: Language,
    dictionary: &D,
    options: VerifyOptions,
) -> Result<VerifiedResult, VerifyError>
where
    D: Dictionary + ?Sized,
{
    let mut verifier = MoveVerifier::new(initial, language, dictionary).with_options(options);
    for (index, mv) in submission.moves.iter().enumerate() {
        let computed = verifier.apply(&mv.kind)?.score;
        if computed != mv.score {
            log::debug!(
                "move {index} claims {} points, replay gives {computed}",
                mv.score
            );
            return Err(VerifyError::MoveScoreMismatch {
                index,
                claimed: mv.score,
                computed,
            });
        }
    }
    let result = verifier.finish();
    if result.total_score != submission.score {
        return Err(VerifyError::TotalScoreMismatch {
            claimed: submission.score,
            computed: result.total_score,
        });
    }
    Ok(result)
}
