use gridpath_core::{Grid, GridError, Point};

use crate::engine::{SearchEngine, SearchOutcome};
use crate::heuristic::{GridPather, Heuristic};

/// Find a shortest path across `grid` from `start` to `end`.
///
/// Endpoints are validated before any search state is allocated. Each call
/// owns a fresh [`SearchEngine`]; use one engine directly to amortise
/// allocations across many queries on the same grid.
pub fn search(
    grid: &Grid,
    start: Point,
    end: Point,
    heuristic: Heuristic,
) -> Result<SearchOutcome, GridError> {
    grid.check_bounds(start)?;
    grid.check_bounds(end)?;
    let mut engine = SearchEngine::new(grid.bounds());
    engine.astar_path(&GridPather::new(grid, heuristic), start, end)
}
