//! Terminal front-end: grid from a file, endpoints from the prompt.

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use gridpath_astar::{Heuristic, SearchOutcome, search};
use gridpath_core::{Point, text};
use log::debug;

use crate::error::CliError;
use crate::sink;

/// Parse `row col` from a line of terminal input.
pub fn parse_point(line: &str) -> Result<Point, CliError> {
    let bad = || CliError::BadCoordinate {
        input: line.trim().to_string(),
    };
    let mut parts = line.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(bad());
    };
    let row = row.parse().map_err(|_| bad())?;
    let col = col.parse().map_err(|_| bad())?;
    Ok(Point::new(row, col))
}

fn prompt_point<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    what: &'static str,
) -> Result<Point, CliError> {
    write!(out, "{what} input (row col): ")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::MissingInput(what));
    }
    parse_point(&line)
}

/// Run one interactive session.
///
/// Prints the grid read from `grid_file`, asks for the start and end
/// positions, and on success prints the annotated grid with the number of
/// expansions and saves the dump to `result_file`.
pub fn run<R: BufRead, W: Write>(
    grid_file: &Path,
    result_file: &Path,
    heuristic: Heuristic,
    mut input: R,
    mut out: W,
) -> Result<SearchOutcome, CliError> {
    let grid_text = fs::read_to_string(grid_file).map_err(|source| CliError::File {
        path: grid_file.to_path_buf(),
        source,
    })?;
    let grid = text::parse_grid(&grid_text)?;
    debug!("loaded {}x{} grid from {}", grid.rows(), grid.cols(), grid_file.display());

    writeln!(out, "grid:")?;
    write!(out, "{grid}")?;

    let start = prompt_point(&mut input, &mut out, "start position")?;
    let end = prompt_point(&mut input, &mut out, "end position")?;

    let outcome = search(&grid, start, end, heuristic)?;
    match outcome.path() {
        Some(path) => {
            writeln!(out, "result grid:")?;
            write!(out, "{}", grid.with_path(path))?;
            writeln!(out, "Steps: {}", outcome.steps())?;
            sink::save(&grid, path, result_file)?;
            writeln!(out, "saved {}", result_file.display())?;
        }
        None => writeln!(out, "path not found")?,
    }
    out.flush()?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::GridError;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn setup(grid: &str) -> (TempDir, PathBuf, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let grid_file = dir.path().join("grid.txt");
        fs::write(&grid_file, grid).unwrap();
        let result_file = dir.path().join("astar_result.txt");
        (dir, grid_file, result_file)
    }

    #[test]
    fn parse_point_accepts_two_integers() {
        assert_eq!(parse_point("2 3\n").unwrap(), Point::new(2, 3));
        assert_eq!(parse_point("  0\t7 ").unwrap(), Point::new(0, 7));
    }

    #[test]
    fn parse_point_rejects_everything_else() {
        for line in ["", "1", "1 2 3", "a b", "1 x", "1.5 2"] {
            assert!(
                matches!(parse_point(line), Err(CliError::BadCoordinate { .. })),
                "{line:?} was accepted"
            );
        }
    }

    #[test]
    fn session_prints_and_saves_result() {
        let (_dir, grid_file, result_file) = setup("0 0 0\n0 1 0\n0 0 0\n");
        let mut out = Vec::new();
        let outcome = run(
            &grid_file,
            &result_file,
            Heuristic::Euclidean,
            "0 0\n2 2\n".as_bytes(),
            &mut out,
        )
        .unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("grid:\n0 0 0\n0 1 0\n0 0 0\n"));
        assert!(printed.contains("start position input (row col): "));
        assert!(printed.contains("end position input (row col): "));
        assert!(printed.contains("result grid:\n3 3 3\n0 1 3\n0 0 3\n"));
        assert!(printed.contains(&format!("Steps: {}\n", outcome.steps())));
        assert!(printed.ends_with(&format!("saved {}\n", result_file.display())));
        assert_eq!(
            fs::read_to_string(&result_file).unwrap(),
            "Grid:\n3 3 3\n0 1 3\n0 0 3\n"
        );
    }

    #[test]
    fn session_without_path_saves_nothing() {
        let (_dir, grid_file, result_file) = setup("0 1 0\n0 1 0\n");
        let mut out = Vec::new();
        let outcome = run(
            &grid_file,
            &result_file,
            Heuristic::Manhattan,
            "0 0\n1 2\n".as_bytes(),
            &mut out,
        )
        .unwrap();
        assert!(!outcome.is_found());
        assert!(String::from_utf8(out).unwrap().ends_with("path not found\n"));
        assert!(!result_file.exists());
    }

    #[test]
    fn missing_grid_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(
            &dir.path().join("nope.txt"),
            &dir.path().join("out.txt"),
            Heuristic::default(),
            "0 0\n0 0\n".as_bytes(),
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::File { .. }));
    }

    #[test]
    fn missing_end_position_is_reported() {
        let (_dir, grid_file, result_file) = setup("0 0\n");
        let err = run(
            &grid_file,
            &result_file,
            Heuristic::default(),
            "0 0\n".as_bytes(),
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::MissingInput("end position")));
    }

    #[test]
    fn out_of_bounds_position_is_reported() {
        let (_dir, grid_file, result_file) = setup("0 0\n");
        let err = run(
            &grid_file,
            &result_file,
            Heuristic::default(),
            "0 0\n5 5\n".as_bytes(),
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Grid(GridError::OutOfBounds { .. })));
    }
}
