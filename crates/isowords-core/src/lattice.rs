//! Lattice coordinates for the 3×3×3 cube puzzle.
//!
//! This module provides the addressing types used throughout the engine:
//!
//! - [`LatticePoint`] - One of the 27 cube positions `(x, y, z)`
//! - [`Side`] - One of the three selectable faces of a cube
//! - [`IndexedCubeFace`] - A single selectable face, the atomic unit of a word path
//!
//! Every type has a flat index form ([`LatticePoint::index`],
//! [`IndexedCubeFace::position`]) so that fixed-size arrays and bitsets can be
//! used instead of maps.
//!
//! # Examples
//!
//! ```
//! use isowords_core::{IndexedCubeFace, LatticePoint, Side};
//!
//! let point = LatticePoint::new(1, 2, 0)?;
//! assert_eq!(point.index(), 15); // 1*9 + 2*3 + 0
//!
//! let face = IndexedCubeFace::new(point, Side::Top);
//! assert_eq!(face.position(), 47); // 15*3 + 2
//! assert_eq!(IndexedCubeFace::from_position(47), face);
//! # Ok::<(), isowords_core::LatticeError>(())
//! ```

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Error returned when a lattice coordinate falls outside the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LatticeError {
    /// At least one coordinate is not in the range 0-2.
    #[display("lattice point ({x}, {y}, {z}) is outside the 3x3x3 puzzle")]
    OutOfRange {
        /// The requested x coordinate.
        x: u8,
        /// The requested y coordinate.
        y: u8,
        /// The requested z coordinate.
        z: u8,
    },
}

/// The position of one cube in the 3×3×3 lattice.
///
/// Each coordinate is in the range 0-2. `x` grows towards the viewer's right,
/// `y` grows upwards, and `z` grows towards the viewer's left.
///
/// # Examples
///
/// ```
/// use isowords_core::LatticePoint;
///
/// let point = LatticePoint::new(2, 0, 1).unwrap();
/// assert_eq!((point.x(), point.y(), point.z()), (2, 0, 1));
///
/// assert!(LatticePoint::new(3, 0, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLatticePoint")]
pub struct LatticePoint {
    x: u8,
    y: u8,
    z: u8,
}

#[derive(Deserialize)]
struct RawLatticePoint {
    x: u8,
    y: u8,
    z: u8,
}

impl TryFrom<RawLatticePoint> for LatticePoint {
    type Error = LatticeError;

    fn try_from(raw: RawLatticePoint) -> Result<Self, Self::Error> {
        Self::new(raw.x, raw.y, raw.z)
    }
}

impl LatticePoint {
    /// Number of cubes along each axis.
    pub const SIZE: u8 = 3;

    /// Total number of cubes in the puzzle.
    pub const COUNT: usize = 27;

    /// All lattice points in flat index order.
    pub const ALL: [Self; Self::COUNT] = {
        let mut all = [Self { x: 0, y: 0, z: 0 }; Self::COUNT];
        let mut i = 0;
        while i < Self::COUNT {
            all[i] = Self::from_index(i);
            i += 1;
        }
        all
    };

    /// Creates a lattice point, validating that every coordinate is in range.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::OutOfRange`] if any coordinate is 3 or larger.
    pub const fn new(x: u8, y: u8, z: u8) -> Result<Self, LatticeError> {
        if x < Self::SIZE && y < Self::SIZE && z < Self::SIZE {
            Ok(Self { x, y, z })
        } else {
            Err(LatticeError::OutOfRange { x, y, z })
        }
    }

    /// Returns the lattice point with the given flat index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 27 or larger.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < Self::COUNT, "lattice index out of range");
        Self {
            x: (index / 9) as u8,
            y: (index / 3 % 3) as u8,
            z: (index % 3) as u8,
        }
    }

    /// Returns the flat index of this point (`x*9 + y*3 + z`, range 0-26).
    #[must_use]
    pub const fn index(self) -> usize {
        self.x as usize * 9 + self.y as usize * 3 + self.z as usize
    }

    /// Returns the x coordinate.
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the z coordinate.
    #[must_use]
    pub const fn z(self) -> u8 {
        self.z
    }

    /// Returns the point displaced by `delta`, or `None` if it leaves the lattice.
    ///
    /// # Examples
    ///
    /// ```
    /// use isowords_core::LatticePoint;
    ///
    /// let origin = LatticePoint::new(0, 0, 0).unwrap();
    /// assert_eq!(origin.offset([1, 0, 0]), LatticePoint::new(1, 0, 0).ok());
    /// assert_eq!(origin.offset([-1, 0, 0]), None);
    /// ```
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn offset(self, delta: [i8; 3]) -> Option<Self> {
        let x = self.x as i16 + delta[0] as i16;
        let y = self.y as i16 + delta[1] as i16;
        let z = self.z as i16 + delta[2] as i16;
        let size = Self::SIZE as i16;
        if x < 0 || y < 0 || z < 0 || x >= size || y >= size || z >= size {
            return None;
        }
        Some(Self {
            x: x as u8,
            y: y as u8,
            z: z as u8,
        })
    }
}

impl Display for LatticePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// One of the three selectable faces of a cube.
///
/// The other three faces of every cube point away from the viewer and are
/// never part of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum Side {
    /// The face pointing towards the viewer's left (`+z`).
    Left = 0,
    /// The face pointing towards the viewer's right (`+x`).
    Right = 1,
    /// The face pointing up (`+y`).
    Top = 2,
}

impl Side {
    /// All sides in index order.
    pub const ALL: [Self; 3] = [Self::Left, Self::Right, Self::Top];

    /// Returns the index of this side (0-2).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the side with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 3 or larger.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Left,
            1 => Self::Right,
            2 => Self::Top,
            _ => panic!("side index out of range"),
        }
    }

    /// Returns the outward unit normal of this face as `[dx, dy, dz]`.
    #[must_use]
    pub const fn normal(self) -> [i8; 3] {
        match self {
            Self::Left => [0, 0, 1],
            Self::Right => [1, 0, 0],
            Self::Top => [0, 1, 0],
        }
    }

    /// Returns the lowercase name of this side.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single selectable face: a cube position together with one of its sides.
///
/// This is the unit a word path is made of and the key of all per-face
/// bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IndexedCubeFace {
    /// The cube the face belongs to.
    pub index: LatticePoint,
    /// Which face of the cube.
    pub side: Side,
}

impl IndexedCubeFace {
    /// Total number of selectable faces in the puzzle.
    pub const COUNT: usize = LatticePoint::COUNT * 3;

    /// All faces in flat position order.
    pub const ALL: [Self; Self::COUNT] = {
        let mut all = [Self::from_position(0); Self::COUNT];
        let mut i = 0;
        while i < Self::COUNT {
            all[i] = Self::from_position(i);
            i += 1;
        }
        all
    };

    /// Creates a face from its cube position and side.
    #[must_use]
    pub const fn new(index: LatticePoint, side: Side) -> Self {
        Self { index, side }
    }

    /// Returns the flat position of this face (`cube_index*3 + side`, range 0-80).
    #[must_use]
    pub const fn position(self) -> usize {
        self.index.index() * 3 + self.side.index()
    }

    /// Returns the face at the given flat position.
    ///
    /// # Panics
    ///
    /// Panics if `position` is 81 or larger.
    #[must_use]
    pub const fn from_position(position: usize) -> Self {
        assert!(position < Self::COUNT, "face position out of range");
        Self {
            index: LatticePoint::from_index(position / 3),
            side: Side::from_index(position % 3),
        }
    }
}

impl Display for IndexedCubeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.index, self.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_point_bounds() {
        assert!(LatticePoint::new(0, 0, 0).is_ok());
        assert!(LatticePoint::new(2, 2, 2).is_ok());
        assert_eq!(
            LatticePoint::new(0, 3, 1),
            Err(LatticeError::OutOfRange { x: 0, y: 3, z: 1 })
        );
        assert!(LatticePoint::new(u8::MAX, 0, 0).is_err());
    }

    #[test]
    fn test_flat_indices_are_dense_and_ordered() {
        for (i, point) in LatticePoint::ALL.into_iter().enumerate() {
            assert_eq!(point.index(), i);
        }
        for (i, face) in IndexedCubeFace::ALL.into_iter().enumerate() {
            assert_eq!(face.position(), i);
            assert_eq!(IndexedCubeFace::from_position(i), face);
        }
        let mut sorted = IndexedCubeFace::ALL;
        sorted.sort();
        assert_eq!(sorted, IndexedCubeFace::ALL);
    }

    #[test]
    fn test_offset_stays_inside_lattice() {
        let center = LatticePoint::new(1, 1, 1).unwrap();
        assert_eq!(center.offset([1, -1, 1]), LatticePoint::new(2, 0, 2).ok());
        let corner = LatticePoint::new(2, 2, 2).unwrap();
        assert_eq!(corner.offset([0, 1, 0]), None);
        assert_eq!(corner.offset([0, 0, 0]), Some(corner));
    }

    #[test]
    fn test_display() {
        let face = IndexedCubeFace::new(LatticePoint::new(0, 1, 2).unwrap(), Side::Right);
        assert_eq!(face.to_string(), "(0, 1, 2) right");
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_point() {
        let point: LatticePoint = serde_json::from_str(r#"{"x":1,"y":2,"z":0}"#).unwrap();
        assert_eq!(point, LatticePoint::new(1, 2, 0).unwrap());
        assert!(serde_json::from_str::<LatticePoint>(r#"{"x":1,"y":3,"z":0}"#).is_err());

        let face: IndexedCubeFace =
            serde_json::from_str(r#"{"index":{"x":0,"y":0,"z":2},"side":"top"}"#).unwrap();
        assert_eq!(
            face,
            IndexedCubeFace::new(LatticePoint::new(0, 0, 2).unwrap(), Side::Top)
        );
    }
}
