//! Cubes and their faces.

use serde::{Deserialize, Serialize};

use crate::{Letter, Side};

/// Number of uses after which a cube drops out of play.
///
/// The count is summed over all three faces of the cube.
pub const MAX_CUBE_USE_COUNT: u32 = 3;

/// One selectable face of a cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CubeFace {
    /// The tile printed on the face.
    pub letter: Letter,
    /// How many accepted words have used this face so far.
    pub use_count: u32,
}

impl CubeFace {
    /// Creates an unused face.
    #[must_use]
    pub const fn new(letter: Letter) -> Self {
        Self {
            letter,
            use_count: 0,
        }
    }
}

/// A cube with its three selectable faces.
///
/// # Examples
///
/// ```
/// use isowords_core::{Cube, Letter, Side};
///
/// let mut cube = Cube::new(Letter::A, Letter::B, Letter::Qu);
/// assert_eq!(cube.face(Side::Top).letter, Letter::Qu);
/// assert!(cube.is_in_play());
///
/// cube.face_mut(Side::Left).use_count += 3;
/// assert!(!cube.is_in_play());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cube {
    /// The face pointing towards the viewer's left.
    pub left: CubeFace,
    /// The face pointing towards the viewer's right.
    pub right: CubeFace,
    /// The face pointing up.
    pub top: CubeFace,
    /// Whether the cube has been taken out of the puzzle.
    pub was_removed: bool,
}

impl Cube {
    /// Creates an unused cube with the given letters.
    #[must_use]
    pub const fn new(left: Letter, right: Letter, top: Letter) -> Self {
        Self {
            left: CubeFace::new(left),
            right: CubeFace::new(right),
            top: CubeFace::new(top),
            was_removed: false,
        }
    }

    /// Returns the face on the given side.
    #[must_use]
    pub const fn face(&self, side: Side) -> &CubeFace {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
            Side::Top => &self.top,
        }
    }

    /// Returns a mutable reference to the face on the given side.
    pub fn face_mut(&mut self, side: Side) -> &mut CubeFace {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
            Side::Top => &mut self.top,
        }
    }

    /// Returns the total use count of all three faces.
    #[must_use]
    pub const fn use_count(&self) -> u32 {
        self.left.use_count + self.right.use_count + self.top.use_count
    }

    /// Returns `true` if faces of this cube may still be used in a word.
    ///
    /// A cube leaves play when it is removed or once its faces have been used
    /// [`MAX_CUBE_USE_COUNT`] times in total.
    #[must_use]
    pub const fn is_in_play(&self) -> bool {
        !self.was_removed && self.use_count() < MAX_CUBE_USE_COUNT
    }
}
