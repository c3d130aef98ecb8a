//! Face adjacency on the 3×3×3 lattice.
//!
//! Two faces are adjacent when they are physically contiguous, sharing an edge
//! on the surface formed by the cubes:
//!
//! - The three faces of one cube meet at its corner and are pairwise adjacent.
//! - Faces with the same side on cubes one step apart along an axis of that
//!   face's plane lie side by side (`top` faces across `x`/`z`, `left` faces
//!   across `x`/`y`, `right` faces across `y`/`z`).
//! - Faces with different sides meet in a concave fold when the second cube is
//!   offset from the first by `normal(a) - normal(b)`, e.g. the `top` face of
//!   `(1, 0, 0)` and the `right` face of `(0, 1, 0)`, where a wall rises from
//!   the floor.
//!
//! The graph does not depend on any puzzle's letters, so it is computed once
//! at compile time.

use crate::{FaceSet, IndexedCubeFace, LatticePoint};

const ADJACENCY: [FaceSet; IndexedCubeFace::COUNT] = {
    let mut table = [FaceSet::EMPTY; IndexedCubeFace::COUNT];
    let mut a = 0;
    while a < IndexedCubeFace::COUNT {
        let mut b = 0;
        while b < IndexedCubeFace::COUNT {
            let fa = IndexedCubeFace::from_position(a);
            let fb = IndexedCubeFace::from_position(b);
            if touches(fa, fb) {
                table[a] = table[a].with(fb);
            }
            b += 1;
        }
        a += 1;
    }
    table
};

#[expect(clippy::cast_possible_wrap)]
const fn delta(from: LatticePoint, to: LatticePoint) -> [i8; 3] {
    [
        to.x() as i8 - from.x() as i8,
        to.y() as i8 - from.y() as i8,
        to.z() as i8 - from.z() as i8,
    ]
}

const fn touches(a: IndexedCubeFace, b: IndexedCubeFace) -> bool {
    let d = delta(a.index, b.index);
    let same_side = a.side.index() == b.side.index();

    if d[0] == 0 && d[1] == 0 && d[2] == 0 {
        return !same_side;
    }

    if same_side {
        let n = a.side.normal();
        let steps = d[0].abs() + d[1].abs() + d[2].abs();
        let along_normal = d[0] * n[0] + d[1] * n[1] + d[2] * n[2];
        return steps == 1 && along_normal == 0;
    }

    let na = a.side.normal();
    let nb = b.side.normal();
    d[0] == na[0] - nb[0] && d[1] == na[1] - nb[1] && d[2] == na[2] - nb[2]
}

/// The fixed adjacency graph over all 81 selectable faces.
///
/// The graph is symmetric, irreflexive, and connected. Faces in the middle of
/// the lattice have 8 neighbors; faces on its boundary have as few as 4.
///
/// # Examples
///
/// ```
/// use isowords_core::{IndexedCubeFace, LatticeGeometry, LatticePoint, Side};
///
/// let origin = LatticePoint::new(0, 0, 0).unwrap();
/// let left = IndexedCubeFace::new(origin, Side::Left);
/// let top = IndexedCubeFace::new(origin, Side::Top);
///
/// assert!(LatticeGeometry::are_adjacent(left, top));
/// assert!(!LatticeGeometry::are_adjacent(left, left));
/// assert_eq!(LatticeGeometry::neighbors(left).len(), 4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LatticeGeometry;

impl LatticeGeometry {
    /// Returns `true` if `a` and `b` share an edge.
    #[must_use]
    #[inline]
    pub const fn are_adjacent(a: IndexedCubeFace, b: IndexedCubeFace) -> bool {
        ADJACENCY[a.position()].contains(b)
    }

    /// Returns every face adjacent to `face`.
    #[must_use]
    #[inline]
    pub const fn neighbors(face: IndexedCubeFace) -> FaceSet {
        ADJACENCY[face.position()]
    }

    /// Returns `true` if every consecutive pair of `path` is adjacent.
    ///
    /// Empty and single-face paths are trivially connected.
    #[must_use]
    pub fn is_connected_path(path: &[IndexedCubeFace]) -> bool {
        path.windows(2)
            .all(|pair| Self::are_adjacent(pair[0], pair[1]))
    }
}

impl IndexedCubeFace {
    /// Returns `true` if `other` shares an edge with this face.
    ///
    /// Shorthand for [`LatticeGeometry::are_adjacent`].
    #[must_use]
    #[inline]
    pub const fn is_adjacent_to(self, other: IndexedCubeFace) -> bool {
        LatticeGeometry::are_adjacent(self, other)
    }
}
