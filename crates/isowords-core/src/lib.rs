//! Core data structures for the isowords puzzle.
//!
//! An isowords puzzle is a 3×3×3 lattice of cubes. Each cube shows three
//! lettered faces (left, right and top), giving 81 selectable faces. Words are
//! spelled by selecting a path of adjacent faces.
//!
//! # Overview
//!
//! - [`lattice`]: addressing types ([`LatticePoint`], [`Side`], [`IndexedCubeFace`])
//! - [`face_set`]: [`FaceSet`], an allocation-free set of faces
//! - [`geometry`]: [`LatticeGeometry`], the fixed face adjacency graph
//! - [`letter`]: [`Letter`] tiles, including the two-character "QU" tile
//! - [`language`]: supported puzzle [`Language`]s
//! - [`cube`]: [`Cube`] and [`CubeFace`] with per-face use counts
//! - [`puzzle`]: [`Puzzle`], the 27-cube grid and its compact archive format
//!
//! # Examples
//!
//! ```
//! use isowords_core::{IndexedCubeFace, LatticeGeometry, LatticePoint, Puzzle, Side};
//!
//! let puzzle: Puzzle = "GAMEWORD".repeat(10).chars().chain(['S']).collect::<String>().parse()?;
//!
//! let origin = LatticePoint::new(0, 0, 0).unwrap();
//! let path = [
//!     IndexedCubeFace::new(origin, Side::Left),
//!     IndexedCubeFace::new(origin, Side::Right),
//!     IndexedCubeFace::new(origin, Side::Top),
//! ];
//! assert!(LatticeGeometry::is_connected_path(&path));
//!
//! let word: String = path.iter().map(|&face| puzzle.letter(face).as_str()).collect();
//! assert_eq!(word, "GAM");
//! # Ok::<(), isowords_core::ParsePuzzleError>(())
//! ```

pub mod cube;
pub mod face_set;
pub mod geometry;
pub mod language;
pub mod lattice;
pub mod letter;
pub mod puzzle;

pub use self::{
    cube::{Cube, CubeFace, MAX_CUBE_USE_COUNT},
    face_set::{FaceSet, FaceSetIter},
    geometry::LatticeGeometry,
    language::{Language, ParseLanguageError},
    lattice::{IndexedCubeFace, LatticeError, LatticePoint, Side},
    letter::{Letter, ParseLetterError},
    puzzle::{ParsePuzzleError, Puzzle},
};
