//! Text output for the derived tables.
//!
//! [`render_cpp`] emits the array-initializer blocks that are spliced into
//! the kite grid's C++ header; its exact bytes are part of that contract.

use std::io::{self, Write};

use crate::NeighborOffsetTable;

/// Write `table` as a `KiteGrid<coord>::<name>[6][N]` initializer.
///
/// The block opens with a blank line so consecutive tables are separated.
pub fn render_cpp<W: Write, const N: usize>(
    out: &mut W,
    name: &str,
    table: &NeighborOffsetTable<N>,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "template<typename coord>")?;
    writeln!(out, "const point<int8_t> KiteGrid<coord>::{}[6][{}] = {{", name, N)?;
    for (dir, row) in table.iter() {
        writeln!(out, "    {{ // {}", dir)?;
        for pt in row {
            writeln!(out, "        {{ {}, {} }},", pt.q, pt.p)?;
        }
        writeln!(out, "    }},")?;
    }
    writeln!(out, "}};")
}

#[cfg(feature = "serde")]
mod json {
    use super::*;
    use crate::{AllTable, EdgeTable};
    use serde::ser::{Serialize, Serializer};

    impl<const N: usize> Serialize for NeighborOffsetTable<N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_map(self.iter().map(|(dir, row)| (dir, &row[..])))
        }
    }

    #[derive(serde::Serialize)]
    struct Tables<'a> {
        edge_neighbours: &'a EdgeTable,
        all_neighbours: &'a AllTable,
    }

    /// Write both tables as one pretty-printed JSON object keyed by table
    /// name, then by direction name.
    pub fn render_json<W: Write>(out: &mut W, edge: &EdgeTable, all: &AllTable) -> io::Result<()> {
        let tables = Tables {
            edge_neighbours: edge,
            all_neighbours: all,
        };
        serde_json::to_writer_pretty(&mut *out, &tables)?;
        writeln!(out)
    }
}

#[cfg(feature = "serde")]
pub use json::render_json;
