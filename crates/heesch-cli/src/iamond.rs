//! Line-by-line hex to iamond expansion.

use std::io::{BufRead, Write};

use heesch_iamond::{embed, expand, format_record, parse_record};

use crate::{Error, Result};

/// Totals for one run over an input stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordStats {
    /// Input lines read
    pub records: usize,
    /// Hexes across all records
    pub hexes: usize,
    /// Output lines written
    pub expansions: usize,
}

/// Read hex records from `input` and write every one-triangle growth of each
/// to `output`, one per line.
///
/// Records are handled one at a time and their output is written before the
/// next line is read. The first malformed line aborts the run.
pub fn process_records<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<RecordStats> {
    let mut stats = RecordStats::default();

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let hexes = parse_record(&line).map_err(|source| Error::Record {
            line: idx + 1,
            content: line.clone(),
            source,
        })?;

        let base = embed(&hexes);
        let mut produced = 0;
        for tris in expand(&base) {
            writeln!(output, "{}", format_record(&tris))?;
            produced += 1;
        }
        tracing::debug!(line = idx + 1, hexes = hexes.len(), produced, "expanded record");

        stats.records += 1;
        stats.hexes += hexes.len();
        stats.expansions += produced;
    }

    output.flush()?;
    Ok(stats)
}
