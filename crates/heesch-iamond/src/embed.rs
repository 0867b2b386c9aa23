//! Embedding of hex cells into the iamond lattice.

use heesch_geom::Point;

use crate::{TriCell, TRIANGLES_PER_HEX};

/// A hexagon in hex lattice coordinates.
pub type HexCell = Point;

/// Iamond vertex at the centre of hex `(0, 0)`.
pub const HEX_ORIGIN: Point = Point::new(-1, -1);

/// Iamond displacement of one step along the hex lattice's first axis.
pub const HEX_BASIS_V: Point = Point::new(3, 3);

/// Iamond displacement of one step along the hex lattice's second axis.
pub const HEX_BASIS_W: Point = Point::new(-3, 6);

/// Offsets from a hex centre to its six triangles, counterclockwise.
pub const HEX_TRIANGLES: [Point; TRIANGLES_PER_HEX] = [
    Point::new(1, 1),
    Point::new(-1, 2),
    Point::new(-2, 1),
    Point::new(-1, -1),
    Point::new(1, -2),
    Point::new(2, -1),
];

/// Iamond vertex at the centre of `hex`.
pub const fn hex_anchor(hex: HexCell) -> Point {
    HEX_ORIGIN
        .offset(HEX_BASIS_V.scale(hex.q))
        .offset(HEX_BASIS_W.scale(hex.p))
}

/// Triangles covering `hexes`, six per hex in input order.
///
/// Coordinates are expected within [`MAX_HEX_COORDINATE`](crate::MAX_HEX_COORDINATE),
/// as guaranteed by [`parse_record`](crate::parse_record).
///
/// Triangles are not deduplicated: a hex listed twice contributes its six
/// triangles twice.
pub fn embed(hexes: &[HexCell]) -> Vec<TriCell> {
    hexes
        .iter()
        .flat_map(|&hex| {
            let centre = hex_anchor(hex);
            HEX_TRIANGLES.map(|offset| centre + offset)
        })
        .collect()
}
