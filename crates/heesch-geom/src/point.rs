//! Points of an oblique integer lattice.
//!
//! The same type serves as an absolute position and as an offset vector; the
//! grids never need to tell them apart at the type level.

use std::ops::{Add, Mul, Neg, Sub};

/// A position (or offset) in an oblique integer lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// First lattice coordinate
    pub q: i64,
    /// Second lattice coordinate
    pub p: i64,
}

impl Point {
    /// Origin of the lattice.
    pub const ORIGIN: Self = Self { q: 0, p: 0 };

    /// Create a new point.
    pub const fn new(q: i64, p: i64) -> Self {
        Self { q, p }
    }

    /// Componentwise sum, usable in `const` tables.
    pub const fn offset(self, by: Self) -> Self {
        Self {
            q: self.q + by.q,
            p: self.p + by.p,
        }
    }

    /// Multiply both components by `k`.
    pub const fn scale(self, k: i64) -> Self {
        Self {
            q: self.q * k,
            p: self.p * k,
        }
    }
}

impl From<(i64, i64)> for Point {
    fn from((q, p): (i64, i64)) -> Self {
        Self { q, p }
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        self.offset(other)
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            q: self.q - other.q,
            p: self.p - other.p,
        }
    }
}

impl Neg for Point {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            q: -self.q,
            p: -self.p,
        }
    }
}

impl Mul<i64> for Point {
    type Output = Self;

    #[inline]
    fn mul(self, k: i64) -> Self {
        self.scale(k)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.p)
    }
}
