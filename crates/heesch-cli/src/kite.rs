//! Kite neighbour table emission.

use std::io::Write;
use std::str::FromStr;

use heesch_kite::render::{render_cpp, render_json};
use heesch_kite::{all_neighbours, edge_neighbours};

use crate::{Error, Result};

/// How the kite tables are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFormat {
    /// C++ array initializers for the kite grid header.
    #[default]
    Cpp,
    /// One JSON object keyed by table and direction name.
    Json,
}

impl FromStr for TableFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cpp" => Ok(Self::Cpp),
            "json" => Ok(Self::Json),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

/// Derive both kite tables and write them to `out`, edge table first.
pub fn write_kite_tables<W: Write>(out: &mut W, format: TableFormat) -> Result<()> {
    let edge = edge_neighbours();
    let all = all_neighbours();
    tracing::debug!(edge_arity = edge.arity(), all_arity = all.arity(), "derived kite tables");

    match format {
        TableFormat::Cpp => {
            render_cpp(out, "edge_neighbours", &edge)?;
            render_cpp(out, "all_neighbours", &all)?;
        }
        TableFormat::Json => render_json(out, &edge, &all)?,
    }
    out.flush()?;
    Ok(())
}
