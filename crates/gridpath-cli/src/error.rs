//! Errors raised by the front-ends.

use std::io;
use std::path::PathBuf;

use gridpath_core::GridError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("{}: {source}", path.display())]
    File { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("malformed request: {0}")]
    Request(#[from] serde_json::Error),
    #[error("no {0} given")]
    MissingInput(&'static str),
    #[error("bad coordinate {input:?}: expected two integers `row col`")]
    BadCoordinate { input: String },
}
