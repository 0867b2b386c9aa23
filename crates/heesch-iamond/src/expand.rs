//! One-step frontier growth of a triangle set.

use std::collections::HashSet;

use crate::cell::neighbours;
use crate::{TriCell, TRIANGLE_NEIGHBOURS};

/// Every way to grow `base` by one adjacent triangle, as a lazy iterator.
///
/// Base cells are visited in order and, for each, its three neighbours in
/// their fixed order. A neighbour not in `base` yields `base` with that
/// neighbour appended. Once proposed, a neighbour counts as seen for the rest
/// of the pass, so a triangle bordering several base cells is proposed once,
/// by the first of them.
pub fn expand(base: &[TriCell]) -> Expansion<'_> {
    tracing::trace!(triangles = base.len(), "expanding frontier");
    Expansion {
        base,
        seen: base.iter().copied().collect(),
        cell: 0,
        neighbour: 0,
    }
}

/// Iterator returned by [`expand`].
#[derive(Debug, Clone)]
pub struct Expansion<'a> {
    base: &'a [TriCell],
    seen: HashSet<TriCell>,
    cell: usize,
    neighbour: usize,
}

impl Iterator for Expansion<'_> {
    type Item = Vec<TriCell>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&cell) = self.base.get(self.cell) {
            let candidates = neighbours(cell);
            while self.neighbour < TRIANGLE_NEIGHBOURS {
                let candidate = candidates[self.neighbour];
                self.neighbour += 1;

                if self.seen.insert(candidate) {
                    let mut grown = Vec::with_capacity(self.base.len() + 1);
                    grown.extend_from_slice(self.base);
                    grown.push(candidate);
                    return Some(grown);
                }
            }
            self.cell += 1;
            self.neighbour = 0;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .base
            .len()
            .saturating_sub(self.cell)
            .saturating_mul(TRIANGLE_NEIGHBOURS)
            .saturating_sub(self.neighbour);
        (0, Some(remaining))
    }
}

impl std::iter::FusedIterator for Expansion<'_> {}
