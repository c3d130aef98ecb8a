//! A compact set of puzzle faces.
//!
//! [`FaceSet`] stores membership of the 81 selectable faces in a single
//! `u128`, so neighbor sets and path bookkeeping never allocate.

use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitOr, Not},
};

use crate::IndexedCubeFace;

const MASK: u128 = (1 << IndexedCubeFace::COUNT) - 1;

/// A set of [`IndexedCubeFace`]s, represented as an 81-bit bitset.
///
/// Iteration yields faces in flat position order.
///
/// # Examples
///
/// ```
/// use isowords_core::{FaceSet, IndexedCubeFace};
///
/// let a = IndexedCubeFace::from_position(3);
/// let b = IndexedCubeFace::from_position(40);
///
/// let mut set = FaceSet::EMPTY;
/// assert!(set.insert(a));
/// assert!(set.insert(b));
/// assert!(!set.insert(a));
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.iter().collect::<Vec<_>>(), vec![a, b]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FaceSet(u128);

impl FaceSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing every face of the puzzle.
    pub const FULL: Self = Self(MASK);

    /// Returns a copy of this set with `face` added.
    #[must_use]
    pub const fn with(self, face: IndexedCubeFace) -> Self {
        Self(self.0 | 1 << face.position())
    }

    /// Returns `true` if the set contains `face`.
    #[must_use]
    pub const fn contains(self, face: IndexedCubeFace) -> bool {
        self.0 & (1 << face.position()) != 0
    }

    /// Adds `face` to the set, returning `true` if it was not already present.
    pub fn insert(&mut self, face: IndexedCubeFace) -> bool {
        let present = self.contains(face);
        *self = self.with(face);
        !present
    }

    /// Removes `face` from the set, returning `true` if it was present.
    pub fn remove(&mut self, face: IndexedCubeFace) -> bool {
        let present = self.contains(face);
        self.0 &= !(1 << face.position());
        present
    }

    /// Returns the number of faces in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no faces.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns an iterator over the faces in position order.
    #[must_use]
    pub fn iter(self) -> FaceSetIter {
        FaceSetIter { bits: self.0 }
    }
}

impl fmt::Debug for FaceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for FaceSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for FaceSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for FaceSet {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0 & MASK)
    }
}

impl FromIterator<IndexedCubeFace> for FaceSet {
    fn from_iter<I: IntoIterator<Item = IndexedCubeFace>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl Extend<IndexedCubeFace> for FaceSet {
    fn extend<I: IntoIterator<Item = IndexedCubeFace>>(&mut self, iter: I) {
        for face in iter {
            self.insert(face);
        }
    }
}

impl IntoIterator for FaceSet {
    type Item = IndexedCubeFace;
    type IntoIter = FaceSetIter;

    fn into_iter(self) -> FaceSetIter {
        self.iter()
    }
}

/// Iterator over the faces of a [`FaceSet`].
#[derive(Debug, Clone)]
pub struct FaceSetIter {
    bits: u128,
}

impl Iterator for FaceSetIter {
    type Item = IndexedCubeFace;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let position = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some(IndexedCubeFace::from_position(position))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for FaceSetIter {}
impl ExactSizeIterator for FaceSetIter {}
