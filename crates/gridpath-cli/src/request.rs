//! JSON request decoding.
//!
//! ```json
//! { "grid": [[0, 0, 0], [0, 1, 0], [0, 0, 0]],
//!   "start": [0, 0], "end": [2, 2], "saveResult": false }
//! ```

use std::io::Read;

use gridpath_core::{Grid, Point};
use serde::Deserialize;

use crate::error::CliError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRequest {
    grid: Vec<Vec<i32>>,
    start: Point,
    end: Point,
    #[serde(default)]
    save_result: bool,
}

/// A validated request: the grid is rectangular and both endpoints lie
/// inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub grid: Grid,
    pub start: Point,
    pub end: Point,
    /// Return the annotated grid as a file instead of the JSON result.
    pub save_result: bool,
}

impl Request {
    pub fn from_json(text: &str) -> Result<Self, CliError> {
        let raw: RawRequest = serde_json::from_str(text)?;
        Self::validate(raw)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CliError> {
        let raw: RawRequest = serde_json::from_reader(reader)?;
        Self::validate(raw)
    }

    fn validate(raw: RawRequest) -> Result<Self, CliError> {
        let grid = Grid::from_codes(&raw.grid)?;
        grid.check_bounds(raw.start)?;
        grid.check_bounds(raw.end)?;
        Ok(Self {
            grid,
            start: raw.start,
            end: raw.end,
            save_result: raw.save_result,
        })
    }
}
