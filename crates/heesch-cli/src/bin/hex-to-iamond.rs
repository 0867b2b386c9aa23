//! Hex to iamond expander
//!
//! Reads polyhexes from stdin, one per line as `x y` pairs, and prints every
//! polyiamond obtained by adding one triangle to the hexes' triangulation.

use std::io::{self, BufWriter};

use heesch_cli::{init_tracing, process_records};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("hex_to_iamond=info,heesch=info");

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());

    let stats = process_records(stdin.lock(), &mut out)?;
    tracing::info!(
        records = stats.records,
        hexes = stats.hexes,
        expansions = stats.expansions,
        "done"
    );

    Ok(())
}
