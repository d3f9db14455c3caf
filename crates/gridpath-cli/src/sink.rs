//! Result delivery: JSON bodies, grid dumps and result files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use gridpath_astar::SearchOutcome;
use gridpath_core::{Grid, Point, text};
use log::info;
use serde::Serialize;

use crate::error::CliError;
use crate::request::Request;

/// File name used when a result is saved without an explicit destination.
pub const DEFAULT_RESULT_FILE: &str = "astar_result.txt";

/// Message of the JSON notification sent when no path exists.
pub const NO_PATH_MESSAGE: &str = "No path found";

#[derive(Serialize)]
struct FoundBody<'a> {
    path: &'a [Point],
    visited: &'a [Point],
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// Write the JSON body for `outcome`: `{"path": .., "visited": ..}` or
/// `{"error": "No path found"}`, followed by a newline.
pub fn write_json<W: Write>(outcome: &SearchOutcome, mut w: W) -> Result<(), CliError> {
    match outcome {
        SearchOutcome::Found { path, visited } => {
            serde_json::to_writer(&mut w, &FoundBody { path, visited })?;
        }
        SearchOutcome::NoPath { .. } => {
            serde_json::to_writer(
                &mut w,
                &ErrorBody {
                    error: NO_PATH_MESSAGE,
                },
            )?;
        }
    }
    writeln!(w)?;
    w.flush()?;
    Ok(())
}

/// Save the dump of `grid` annotated with `path` to `file`.
pub fn save(grid: &Grid, path: &[Point], file: &Path) -> Result<(), CliError> {
    let f = File::create(file).map_err(|source| CliError::File {
        path: file.to_path_buf(),
        source,
    })?;
    text::write_dump(&grid.with_path(path), BufWriter::new(f)).map_err(|source| CliError::File {
        path: file.to_path_buf(),
        source,
    })?;
    info!("saved {} ({} path cells)", file.display(), path.len());
    Ok(())
}

/// Answer a request.
///
/// - path found, `save_result` set: the annotated grid dump goes to
///   `save_to` when given, otherwise it is streamed to `out`;
/// - path found otherwise: the JSON result is written to `out`;
/// - no path: the JSON notification is written to `out`.
pub fn deliver<W: Write>(
    req: &Request,
    outcome: &SearchOutcome,
    save_to: Option<&Path>,
    mut out: W,
) -> Result<(), CliError> {
    match (outcome.path(), req.save_result) {
        (Some(path), true) => match save_to {
            Some(file) => save(&req.grid, path, file),
            None => Ok(text::write_dump(&req.grid.with_path(path), out)?),
        },
        _ => write_json(outcome, &mut out),
    }
}
