//! Triangles of the iamond lattice and their edge neighbours.

use heesch_geom::Point;

use crate::TRIANGLE_NEIGHBOURS;

/// A triangle in iamond lattice coordinates.
pub type TriCell = Point;

/// Neighbour offsets of a black triangle.
pub const BLACK_NEIGHBOURS: [Point; TRIANGLE_NEIGHBOURS] =
    [Point::new(1, 1), Point::new(-2, 1), Point::new(1, -2)];

/// Neighbour offsets of a grey triangle.
pub const GREY_NEIGHBOURS: [Point; TRIANGLE_NEIGHBOURS] =
    [Point::new(-1, 2), Point::new(-1, -1), Point::new(2, -1)];

/// Whether `pt` is a triangle at all.
///
/// Points with `x ≡ 2 (mod 3)` are lattice vertices shared by six triangles.
#[inline]
pub fn is_triangle(pt: Point) -> bool {
    pt.q.rem_euclid(3) != 2
}

/// Orientation class of a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    /// `x ≡ 0 (mod 3)`
    Black,
    /// `x ≡ 1 (mod 3)`; vertices (`x ≡ 2`) also land here
    Grey,
}

impl Parity {
    /// Parity of the triangle at `cell`.
    #[inline]
    pub fn of(cell: TriCell) -> Self {
        if cell.q.rem_euclid(3) == 0 {
            Self::Black
        } else {
            Self::Grey
        }
    }

    /// Neighbour offsets used by triangles of this parity.
    pub const fn offsets(self) -> &'static [Point; TRIANGLE_NEIGHBOURS] {
        match self {
            Self::Black => &BLACK_NEIGHBOURS,
            Self::Grey => &GREY_NEIGHBOURS,
        }
    }
}

/// The three triangles sharing an edge with `cell`, in fixed order.
pub fn neighbours(cell: TriCell) -> [TriCell; TRIANGLE_NEIGHBOURS] {
    Parity::of(cell).offsets().map(|offset| cell + offset)
}
