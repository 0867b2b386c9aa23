//! Hexagon to Iamond Expansion
//!
//! A polyhex drawn on the triangular ("iamond") lattice covers six triangles
//! per hexagon. This crate converts hex cells into those triangles and then
//! enumerates every way to add one more triangle along the boundary.
//!
//! # Iamond Coordinates
//!
//! Triangles are lattice points `(x, y)`. Two orientations alternate across
//! the lattice; a triangle is *black* when `x ≡ 0 (mod 3)` and *grey*
//! otherwise, and the two colours have mirrored neighbour offsets.
//!
//! # Pipeline
//!
//! 1. [`parse_record`] reads one line of hex coordinates.
//! 2. [`embed`] turns each hex into its six triangles.
//! 3. [`expand`] yields the grown triangle sets lazily.
//! 4. [`format_record`] writes each set back out as one line.

mod cell;
mod embed;
mod error;
mod expand;
mod record;

pub use cell::{is_triangle, neighbours, Parity, TriCell, BLACK_NEIGHBOURS, GREY_NEIGHBOURS};
pub use embed::{embed, hex_anchor, HexCell, HEX_BASIS_V, HEX_BASIS_W, HEX_ORIGIN, HEX_TRIANGLES};
pub use error::{Error, Result};
pub use expand::{expand, Expansion};
pub use record::{format_record, parse_record};

/// Triangles covered by one hexagon.
pub const TRIANGLES_PER_HEX: usize = 6;

/// Largest hex coordinate magnitude accepted from input.
///
/// Embedding multiplies coordinates by at most 6 and growth adds at most 2,
/// so every derived iamond coordinate stays well inside `i64`.
pub const MAX_HEX_COORDINATE: i64 = i32::MAX as i64;

/// Edge neighbours of one triangle.
pub const TRIANGLE_NEIGHBOURS: usize = 3;

/// Expand one input line all the way to output lines.
pub fn expand_line(line: &str) -> Result<Vec<String>> {
    let hexes = parse_record(line)?;
    let base = embed(&hexes);
    Ok(expand(&base).map(|tris| format_record(&tris)).collect())
}
