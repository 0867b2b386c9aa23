//! Kite neighbour table generator
//!
//! Prints the edge and all-neighbour offset tables of the kite grid.

use std::env;
use std::io;

use heesch_cli::{init_tracing, write_kite_tables, TableFormat};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("kite_neighbours=info,heesch=info");

    let format = match env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => TableFormat::default(),
    };
    tracing::info!(?format, "generating kite neighbour tables");

    let stdout = io::stdout();
    write_kite_tables(&mut stdout.lock(), format)?;

    Ok(())
}
