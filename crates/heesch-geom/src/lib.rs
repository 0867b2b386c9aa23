//! Heesch Grid Geometry
//!
//! Integer lattice primitives shared by the kite and iamond table generators.
//!
//! # Coordinates
//!
//! Every grid handled here is an oblique integer lattice: two axes at 60
//! degrees, positions stored as a pair `(q, p)`. Cells of a particular grid
//! (kites, triangles, hexagons) are identified with a subset of lattice points.
//!
//! # Symmetry
//!
//! The rotational symmetry group of these grids has order 6. A single
//! [`AffineTransform`] generates it, and [`Direction`] names its elements in
//! rotational order starting from east.

mod direction;
mod point;
mod transform;

pub use direction::Direction;
pub use point::Point;
pub use transform::AffineTransform;

/// Order of the rotational symmetry group shared by the hex-derived grids.
pub const NUM_DIRECTIONS: usize = 6;

/// Rotation by 60 degrees counterclockwise in axial lattice coordinates.
///
/// `(x, y) ↦ (-y, x + y)`
pub const ROTATE_60: AffineTransform = AffineTransform::new(0, -1, 0, 1, 1, 0);

const _: () = assert!(Direction::ALL.len() == NUM_DIRECTIONS);
