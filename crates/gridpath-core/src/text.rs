//! Plain-text grid format.
//!
//! ## Input
//! One grid row per line, cells as whitespace-separated integer marker
//! codes. Blank lines are ignored.
//!
//! ## Dump
//! ```text
//! Grid:
//! 3 3 3
//! 0 1 3
//! 0 0 3
//! ```

use std::io::{self, Write};

use crate::error::GridError;
use crate::grid::Grid;

/// Header line written before a dumped grid.
pub const DUMP_HEADER: &str = "Grid:";

/// Parse a grid from its text form.
pub fn parse_grid(text: &str) -> Result<Grid, GridError> {
    let mut rows = Vec::new();
    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<i32>().map_err(|_| GridError::Parse {
                    line: n + 1,
                    token: tok.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }
    Grid::from_codes(&rows)
}

/// Write the dump form of `grid` (header line, then rows).
pub fn write_dump<W: Write>(grid: &Grid, mut w: W) -> io::Result<()> {
    writeln!(w, "{DUMP_HEADER}")?;
    write!(w, "{grid}")?;
    w.flush()
}

/// The dump form of `grid` as a string.
pub fn dump(grid: &Grid) -> String {
    format!("{DUMP_HEADER}\n{grid}")
}
