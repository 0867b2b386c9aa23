//! The six rotational directions of a hex-derived grid.

use crate::NUM_DIRECTIONS;

/// One element of the order-6 rotation group, named by the direction it
/// points a reference tile.
///
/// Variants are in rotational (counterclockwise) order, so one application
/// of the grid's canonical rotation takes direction `i` to direction `i + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    East = 0,
    Northeast = 1,
    Northwest = 2,
    West = 3,
    Southwest = 4,
    Southeast = 5,
}

impl Direction {
    /// All directions in rotational order.
    pub const ALL: [Self; NUM_DIRECTIONS] = [
        Self::East,
        Self::Northeast,
        Self::Northwest,
        Self::West,
        Self::Southwest,
        Self::Southeast,
    ];

    /// Position in rotational order (0-5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        if index < NUM_DIRECTIONS {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Lowercase name, as used in generated table comments.
    pub const fn name(self) -> &'static str {
        match self {
            Self::East => "east",
            Self::Northeast => "northeast",
            Self::Northwest => "northwest",
            Self::West => "west",
            Self::Southwest => "southwest",
            Self::Southeast => "southeast",
        }
    }

    /// The next direction counterclockwise, wrapping after southeast.
    pub const fn rotated(self) -> Self {
        Self::ALL[(self.index() + 1) % NUM_DIRECTIONS]
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
