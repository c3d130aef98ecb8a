use isowords_core::{
    FaceSet, IndexedCubeFace, Language, LatticeGeometry, LatticePoint, Letter, Puzzle,
};

use crate::scoring::{self, ScoredFace};

/// The state of a puzzle after replaying a prefix of a move log.
///
/// Holds letters, per-face use counts and removed flags. Read access is public
/// so clients can render the board and compute their candidate paths; only
/// [`MoveVerifier`](crate::MoveVerifier) mutates it.
///
/// # Examples
///
/// ```
/// use isowords_core::{IndexedCubeFace, Language, LatticePoint, Puzzle, Side};
/// use isowords_game::PuzzleState;
///
/// let puzzle: Puzzle = "CAT".repeat(27).parse()?;
/// let state = PuzzleState::new(puzzle, Language::English);
///
/// let origin = LatticePoint::new(0, 0, 0).unwrap();
/// let path = [Side::Left, Side::Right, Side::Top].map(|side| IndexedCubeFace::new(origin, side));
/// assert_eq!(state.string(&path), "CAT");
/// assert_eq!(state.score(&path), 18);
/// # Ok::<(), isowords_core::ParsePuzzleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    puzzle: Puzzle,
    language: Language,
}

impl PuzzleState {
    /// Creates a state starting from `puzzle`.
    #[must_use]
    pub fn new(puzzle: Puzzle, language: Language) -> Self {
        Self { puzzle, language }
    }

    /// Returns the underlying puzzle, including use counts and removals.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the language words are checked in.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Returns the tile on `face`, or `None` if its cube has been removed.
    #[must_use]
    pub fn letter(&self, face: IndexedCubeFace) -> Option<Letter> {
        (!self.puzzle[face.index].was_removed).then(|| self.puzzle.letter(face))
    }

    /// Returns `true` if the cube at `index` has been removed.
    #[must_use]
    pub fn is_removed(&self, index: LatticePoint) -> bool {
        self.puzzle[index].was_removed
    }

    /// Returns `true` if `face` may be used in a word.
    ///
    /// A face leaves play when its cube is removed or exhausted.
    #[must_use]
    pub fn is_in_play(&self, face: IndexedCubeFace) -> bool {
        self.puzzle[face.index].is_in_play()
    }

    /// Returns how many accepted words have used `face`.
    #[must_use]
    pub fn use_count(&self, face: IndexedCubeFace) -> u32 {
        self.puzzle[face].use_count
    }

    /// Returns the set of faces that are in play.
    #[must_use]
    pub fn faces_in_play(&self) -> FaceSet {
        IndexedCubeFace::ALL
            .into_iter()
            .filter(|&face| self.is_in_play(face))
            .collect()
    }

    /// Returns the neighbors of `face` that are in play.
    ///
    /// These are the faces a word path may continue to after `face`.
    #[must_use]
    pub fn playable_neighbors(&self, face: IndexedCubeFace) -> FaceSet {
        LatticeGeometry::neighbors(face) & self.faces_in_play()
    }

    /// Returns the word spelled by `path`, in uppercase.
    ///
    /// Faces of removed cubes still contribute their tile.
    #[must_use]
    pub fn string(&self, path: &[IndexedCubeFace]) -> String {
        path.iter()
            .map(|&face| self.puzzle.letter(face).as_str())
            .collect()
    }

    /// Returns the score `path` would earn with the current use counts.
    #[must_use]
    pub fn score(&self, path: &[IndexedCubeFace]) -> u32 {
        scoring::score(
            path.iter()
                .map(|&face| ScoredFace::new(self.puzzle.letter(face), self.use_count(face))),
        )
    }

    pub(crate) fn record_word(&mut self, path: &[IndexedCubeFace]) {
        for &face in path {
            self.puzzle[face].use_count += 1;
        }
    }

    pub(crate) fn remove_cube(&mut self, index: LatticePoint) {
        self.puzzle[index].was_removed = true;
    }
}

#[cfg(test)]
mod tests {
    use isowords_core::Side;

    use super::*;

    fn face(x: u8, y: u8, z: u8, side: Side) -> IndexedCubeFace {
        IndexedCubeFace::new(LatticePoint::new(x, y, z).unwrap(), side)
    }

    fn state() -> PuzzleState {
        PuzzleState::new("CAT".repeat(27).parse().unwrap(), Language::English)
    }

    #[test]
    fn test_fresh_state() {
        let state = state();
        assert_eq!(state.faces_in_play(), FaceSet::FULL);
        let top = face(1, 1, 1, Side::Top);
        assert_eq!(state.letter(top), Some(Letter::T));
        assert_eq!(state.playable_neighbors(top), LatticeGeometry::neighbors(top));
    }

    #[test]
    fn test_removed_cube_hides_letters() {
        let mut state = state();
        let index = LatticePoint::new(1, 1, 2).unwrap();
        state.remove_cube(index);
        assert!(state.is_removed(index));
        for side in Side::ALL {
            let removed = IndexedCubeFace::new(index, side);
            assert_eq!(state.letter(removed), None);
            assert!(!state.is_in_play(removed));
        }

        let top = face(1, 1, 1, Side::Top);
        let top_behind = face(1, 1, 2, Side::Top);
        assert!(LatticeGeometry::neighbors(top).contains(top_behind));
        assert!(!state.playable_neighbors(top).contains(top_behind));
        assert_eq!(state.faces_in_play().len(), IndexedCubeFace::COUNT - 3);
    }

    #[test]
    fn test_exhausted_cube_leaves_play() {
        let mut state = state();
        let path = [Side::Left, Side::Right, Side::Top].map(|side| face(0, 0, 0, side));
        assert!(state.is_in_play(path[0]));
        state.record_word(&path[..2]);
        assert!(state.is_in_play(path[2]));
        state.record_word(&path[2..]);
        assert!(!state.is_in_play(path[0]));
        // An exhausted cube still shows its letters.
        assert_eq!(state.letter(path[0]), Some(Letter::C));
        assert_eq!(state.use_count(path[0]), 1);
    }

    #[test]
    fn test_score_uses_current_counts() {
        let mut state = state();
        let path = [
            face(0, 0, 0, Side::Left),
            face(0, 0, 0, Side::Right),
            face(1, 0, 0, Side::Top),
        ];
        // C4 + A1 + T1 = 6, three characters.
        assert_eq!(state.score(&path), 18);
        state.record_word(&path);
        // ceil(4/2) + ceil(1/2) + ceil(1/2) = 4.
        assert_eq!(state.score(&path), 12);
    }
}
