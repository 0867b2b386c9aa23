//! Per-direction neighbour offset tables and their rotational derivation.

use heesch_geom::{AffineTransform, Direction, Point, NUM_DIRECTIONS};

/// Neighbour offsets for each of the six directions, `N` per direction.
///
/// Order within a row is significant: consumers index rows by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborOffsetTable<const N: usize> {
    rows: [[Point; N]; NUM_DIRECTIONS],
}

impl<const N: usize> NeighborOffsetTable<N> {
    /// Derive all six rows from the row of the reference direction.
    ///
    /// `anchor` is one step from the origin in the reference direction, i.e.
    /// the cell whose neighbours `canonical` lists. The offsets are relative
    /// to that cell, not to the origin, so they cannot be rotated directly:
    /// each one is made absolute by adding the anchor, the absolute points
    /// and the anchor are rotated together, and the row for the new direction
    /// is read back by subtracting the rotated anchor.
    ///
    /// # Panics
    ///
    /// Panics if six applications of `rotation` do not bring the anchor and
    /// every neighbour back to where they started, i.e. if a seventh row would
    /// differ from the first.
    pub fn generate(anchor: Point, canonical: [Point; N], rotation: AffineTransform) -> Self {
        let mut rows = [[Point::ORIGIN; N]; NUM_DIRECTIONS];

        let mut centre = anchor;
        let mut absolute = canonical.map(|offset| offset + anchor);

        for (dir, row) in Direction::ALL.iter().zip(rows.iter_mut()) {
            *row = absolute.map(|pt| pt - centre);
            tracing::trace!(%dir, %centre, "derived neighbour row");

            centre = rotation.apply(centre);
            absolute = absolute.map(|pt| rotation.apply(pt));
        }

        assert_eq!(
            centre, anchor,
            "rotation {:?} does not close after {} steps: anchor {} became {}",
            rotation, NUM_DIRECTIONS, anchor, centre
        );
        let wrapped = absolute.map(|pt| pt - centre);
        assert_eq!(
            wrapped, rows[0],
            "rotation {:?} does not close after {} steps: first row {:?} became {:?}",
            rotation, NUM_DIRECTIONS, rows[0], wrapped
        );

        Self { rows }
    }

    /// Build a table from explicit rows, in [`Direction::ALL`] order.
    pub const fn from_rows(rows: [[Point; N]; NUM_DIRECTIONS]) -> Self {
        Self { rows }
    }

    /// Offsets for one direction.
    #[inline]
    pub fn row(&self, dir: Direction) -> &[Point; N] {
        &self.rows[dir.index()]
    }

    /// Rows paired with their direction, in rotational order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &[Point; N])> + '_ {
        Direction::ALL.into_iter().zip(self.rows.iter())
    }

    /// Number of offsets per row.
    pub const fn arity(&self) -> usize {
        N
    }
}
