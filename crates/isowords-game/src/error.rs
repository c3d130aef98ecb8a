use isowords_core::{IndexedCubeFace, LatticePoint};

/// The kind of rule a rejected move violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum ErrorCategory {
    /// The move is malformed on its own, regardless of the puzzle state.
    #[display("structural")]
    Structural,
    /// The path does not fit the puzzle: a face is out of play or faces do not
    /// touch.
    #[display("connectivity")]
    Connectivity,
    /// The word is not accepted by the dictionary.
    #[display("dictionary")]
    Dictionary,
    /// A claimed score differs from the recomputed one.
    #[display("score mismatch")]
    ScoreMismatch,
}

/// Why a single move cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveRejection {
    /// The word path is shorter than three faces.
    #[display("word uses {len} faces, at least 3 are required")]
    TooShort {
        /// Number of faces in the path.
        len: usize,
    },
    /// The same face appears twice in the path.
    #[display("face {face} is selected more than once")]
    DuplicateFace {
        /// The repeated face.
        face: IndexedCubeFace,
    },
    /// A face belongs to a removed or exhausted cube.
    #[display("face {face} is not in play")]
    FaceNotInPlay {
        /// The face that is out of play.
        face: IndexedCubeFace,
    },
    /// Two consecutive faces of the path do not touch.
    #[display("faces {from} and {to} are not adjacent")]
    NotAdjacent {
        /// The earlier face of the pair.
        from: IndexedCubeFace,
        /// The later face of the pair.
        to: IndexedCubeFace,
    },
    /// The dictionary does not know the word.
    #[display("{word:?} is not in the dictionary")]
    UnknownWord {
        /// The rejected word.
        word: String,
    },
    /// The word was already played in this game.
    #[display("{word:?} has already been played")]
    RepeatedWord {
        /// The repeated word.
        word: String,
    },
    /// The cube was removed by an earlier move.
    #[display("cube {index} has already been removed")]
    CubeAlreadyRemoved {
        /// Position of the cube.
        index: LatticePoint,
    },
}

impl MoveRejection {
    /// Returns the kind of rule the move violated.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TooShort { .. } | Self::DuplicateFace { .. } => ErrorCategory::Structural,
            Self::FaceNotInPlay { .. }
            | Self::NotAdjacent { .. }
            | Self::CubeAlreadyRemoved { .. } => ErrorCategory::Connectivity,
            Self::UnknownWord { .. } | Self::RepeatedWord { .. } => ErrorCategory::Dictionary,
        }
    }
}

/// Error returned when a move log fails verification.
///
/// Verification stops at the first violation, so a log is either accepted as
/// a whole or rejected with the index of the first bad move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum VerifyError {
    /// A move breaks a game rule.
    #[display("move {index} is invalid: {reason}")]
    InvalidMove {
        /// Position of the move in the log.
        index: usize,
        /// The violated rule.
        #[error(source)]
        reason: MoveRejection,
    },
    /// A move claims a different score than replay computes.
    #[display("move {index} claims {claimed} points, but scores {computed}")]
    MoveScoreMismatch {
        /// Position of the move in the log.
        index: usize,
        /// The score in the log.
        claimed: u32,
        /// The score computed by replay.
        computed: u32,
    },
    /// The game claims a different total than replay computes.
    #[display("game claims {claimed} points, but scores {computed}")]
    TotalScoreMismatch {
        /// The submitted total.
        claimed: u32,
        /// The total computed by replay.
        computed: u32,
    },
}

impl VerifyError {
    /// Returns the kind of rule that was violated.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidMove { reason, .. } => reason.category(),
            Self::MoveScoreMismatch { .. } | Self::TotalScoreMismatch { .. } => {
                ErrorCategory::ScoreMismatch
            }
        }
    }

    /// Returns the index of the offending move, if the error concerns one.
    #[must_use]
    pub fn move_index(&self) -> Option<usize> {
        match self {
            Self::InvalidMove { index, .. } | Self::MoveScoreMismatch { index, .. } => {
                Some(*index)
            }
            Self::TotalScoreMismatch { .. } => None,
        }
    }
}
