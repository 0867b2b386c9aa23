//! Kite Grid Neighbour Tables
//!
//! The kite grid subdivides each hexagon of a hex lattice into six kites,
//! one per [`Direction`]. A kite's neighbours depend on which way it points,
//! so the downstream grid code looks them up in per-direction offset tables.
//!
//! # Derivation
//!
//! Only the east-pointing kite's neighbours are written down by hand. The
//! other five rows come from rotating that canonical row about the hex
//! centre with [`ROTATE_60`](heesch_geom::ROTATE_60). See
//! [`NeighborOffsetTable::generate`] for why the offsets must be re-anchored
//! while rotating.
//!
//! Two tables are produced:
//! - [`edge_neighbours`]: 4 kites sharing an edge
//! - [`all_neighbours`]: those 4 followed by the 5 kites sharing only a vertex

mod grid;
pub mod render;
mod table;

pub use grid::{
    all_neighbours, all_neighbours_of, edge_neighbours, edge_neighbours_of, tile_orientation,
    EAST_ANCHOR, EAST_EDGE_NEIGHBOURS, EAST_VERTEX_NEIGHBOURS,
};
pub use table::NeighborOffsetTable;

/// Kites sharing an edge with a given kite.
pub const EDGE_ARITY: usize = 4;

/// Kites sharing only a vertex with a given kite.
pub const VERTEX_ARITY: usize = 5;

/// Edge plus vertex neighbours.
pub const ALL_ARITY: usize = 9;

const _: () = assert!(EDGE_ARITY + VERTEX_ARITY == ALL_ARITY);

/// Table of edge neighbour offsets, one row of 4 per direction.
pub type EdgeTable = NeighborOffsetTable<EDGE_ARITY>;

/// Table of edge then vertex neighbour offsets, one row of 9 per direction.
pub type AllTable = NeighborOffsetTable<ALL_ARITY>;
