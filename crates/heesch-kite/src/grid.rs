//! Canonical kite data and lookups over the kite grid.
//!
//! Kite cells live on the same axial lattice as the hexagons they subdivide.
//! The lattice is periodic with period 6 in both coordinates; within one
//! 6×6 patch, 18 points are kites and the rest are hex centres.

use std::sync::OnceLock;

use heesch_geom::{Direction, Point, ROTATE_60};

use crate::{AllTable, EdgeTable, ALL_ARITY, EDGE_ARITY, VERTEX_ARITY};

/// The east-pointing kite of the hexagon centred at the origin.
pub const EAST_ANCHOR: Point = Point::new(1, 0);

/// Edge neighbours of the east kite, relative to [`EAST_ANCHOR`].
pub const EAST_EDGE_NEIGHBOURS: [Point; EDGE_ARITY] = [
    Point::new(1, 1),
    Point::new(2, -1),
    Point::new(-1, 1),
    Point::new(0, -1),
];

/// Vertex-only neighbours of the east kite, relative to [`EAST_ANCHOR`].
pub const EAST_VERTEX_NEIGHBOURS: [Point; VERTEX_ARITY] = [
    Point::new(0, 2),
    Point::new(2, -2),
    Point::new(-2, 0),
    Point::new(-2, 1),
    Point::new(-1, -1),
];

const EAST_ALL_NEIGHBOURS: [Point; ALL_ARITY] = {
    let mut out = [Point::ORIGIN; ALL_ARITY];
    let mut i = 0;
    while i < EDGE_ARITY {
        out[i] = EAST_EDGE_NEIGHBOURS[i];
        i += 1;
    }
    while i < ALL_ARITY {
        out[i] = EAST_VERTEX_NEIGHBOURS[i - EDGE_ARITY];
        i += 1;
    }
    out
};

const PERIOD: i64 = 6;

// Orientation of each point in the 6×6 patch at the origin, indexed [p][q].
const TILE_ORIENTATIONS: [[Option<Direction>; PERIOD as usize]; PERIOD as usize] = {
    use Direction::*;
    const H: Option<Direction> = None;
    [
        [H, Some(East), H, H, H, Some(West)],
        [Some(Northeast), H, Some(Southwest), Some(Southeast), H, Some(Northwest)],
        [H, Some(West), H, Some(East), H, H],
        [H, Some(Northwest), Some(Northeast), H, Some(Southwest), Some(Southeast)],
        [H, H, H, Some(West), H, Some(East)],
        [Some(Southwest), Some(Southeast), H, Some(Northwest), Some(Northeast), H],
    ]
};

/// Edge neighbour offsets for all six kite orientations.
pub fn edge_neighbours() -> EdgeTable {
    EdgeTable::generate(EAST_ANCHOR, EAST_EDGE_NEIGHBOURS, ROTATE_60)
}

/// Edge then vertex neighbour offsets for all six kite orientations.
///
/// The vertex offsets are appended to the edge offsets before rotating, so
/// the first [`EDGE_ARITY`] entries of each row match [`edge_neighbours`].
pub fn all_neighbours() -> AllTable {
    AllTable::generate(EAST_ANCHOR, EAST_ALL_NEIGHBOURS, ROTATE_60)
}

fn edge_table() -> &'static EdgeTable {
    static TABLE: OnceLock<EdgeTable> = OnceLock::new();
    TABLE.get_or_init(edge_neighbours)
}

fn all_table() -> &'static AllTable {
    static TABLE: OnceLock<AllTable> = OnceLock::new();
    TABLE.get_or_init(all_neighbours)
}

/// Which way the kite at `pt` points, or `None` if `pt` is a hex centre.
pub fn tile_orientation(pt: Point) -> Option<Direction> {
    let q = pt.q.rem_euclid(PERIOD) as usize;
    let p = pt.p.rem_euclid(PERIOD) as usize;
    TILE_ORIENTATIONS[p][q]
}

/// Absolute positions of the kites sharing an edge with the kite at `pt`.
pub fn edge_neighbours_of(pt: Point) -> Option<[Point; EDGE_ARITY]> {
    let dir = tile_orientation(pt)?;
    Some(edge_table().row(dir).map(|offset| pt + offset))
}

/// Absolute positions of every kite touching the kite at `pt`.
pub fn all_neighbours_of(pt: Point) -> Option<[Point; ALL_ARITY]> {
    let dir = tile_orientation(pt)?;
    Some(all_table().row(dir).map(|offset| pt + offset))
}
