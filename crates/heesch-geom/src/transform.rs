//! Affine maps over lattice points.

use crate::Point;

/// An affine map `(x, y) ↦ (a·x + b·y + c, d·x + e·y + f)`.
///
/// Stored row-major as the six integers `a, b, c, d, e, f`, the same layout
/// the downstream grid code uses for its orientation tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AffineTransform {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub d: i64,
    pub e: i64,
    pub f: i64,
}

impl AffineTransform {
    /// The identity map.
    pub const IDENTITY: Self = Self::new(1, 0, 0, 0, 1, 0);

    /// Create a transform from its six coefficients.
    pub const fn new(a: i64, b: i64, c: i64, d: i64, e: i64, f: i64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Apply the map to a point.
    #[inline]
    pub const fn apply(&self, pt: Point) -> Point {
        Point {
            q: self.a * pt.q + self.b * pt.p + self.c,
            p: self.d * pt.q + self.e * pt.p + self.f,
        }
    }

    /// Apply the map `n` times in succession.
    pub fn apply_n(&self, pt: Point, n: usize) -> Point {
        (0..n).fold(pt, |acc, _| self.apply(acc))
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
