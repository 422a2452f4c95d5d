//! Truth table output for the CLI frontend.
//!
//! Writes one line per input assignment in the [`Row`](crate::solver::Row)
//! text format, e.g. `0 1 | 1 0`.

use std::io::{self, BufWriter, Write};

use crate::error::{Result, TruthTableError};
use crate::Simulator;

/// Write every remaining row of the simulator to `out`.
///
/// Returns the number of rows written. An evaluation error stops the table
/// at the failing row.
pub fn write_table<W: Write>(simulator: &mut Simulator, mut out: W) -> Result<u64> {
    let mut written = 0u64;
    for row in simulator.rows() {
        let row = row?;
        writeln!(out, "{}", row).map_err(|e| TruthTableError::OutputError { source: e })?;
        written += 1;
    }
    out.flush()
        .map_err(|e| TruthTableError::OutputError { source: e })?;
    Ok(written)
}

/// Write the table to stdout.
pub fn print_table(simulator: &mut Simulator) -> Result<u64> {
    let stdout = io::stdout();
    write_table(simulator, BufWriter::new(stdout.lock()))
}
