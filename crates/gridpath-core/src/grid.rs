//! A rectangular grid of [`Marker`] cells.
//!
//! [`Grid`] owns its cells in row-major order. It is rectangular and
//! non-empty by construction, so the search never has to re-validate it.

use std::fmt;

use crate::error::GridError;
use crate::geom::{Point, Range, CARDINALS};
use crate::marker::Marker;

/// A 2D grid of [`Marker`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Marker>,
    bounds: Range,
}

impl Grid {
    /// Create a `rows × cols` grid filled with [`Marker::Free`].
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::invalid(format!(
                "grid must have at least one cell, got {rows}x{cols}"
            )));
        }
        Ok(Self {
            cells: vec![Marker::Free; rows * cols],
            bounds: Range::with_size(rows, cols),
        })
    }

    /// Build a grid from rows of markers. All rows must have the same,
    /// non-zero length.
    pub fn from_rows(rows: Vec<Vec<Marker>>) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::invalid("grid has no rows"));
        };
        let cols = first.len();
        if cols == 0 {
            return Err(GridError::invalid("grid rows are empty"));
        }
        let nrows = rows.len();
        let mut cells = Vec::with_capacity(nrows * cols);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::invalid(format!(
                    "row {r} has {} cells, expected {cols}",
                    row.len()
                )));
            }
            cells.extend(row);
        }
        Ok(Self {
            cells,
            bounds: Range::with_size(nrows, cols),
        })
    }

    /// Build a grid from rows of integer marker codes.
    pub fn from_codes(rows: &[Vec<i32>]) -> Result<Self, GridError> {
        let mut out = Vec::with_capacity(rows.len());
        for (r, row) in rows.iter().enumerate() {
            let mut markers = Vec::with_capacity(row.len());
            for (c, &value) in row.iter().enumerate() {
                let m = Marker::try_from(value).map_err(|_| GridError::InvalidMarker {
                    value,
                    pos: Point::new(r as i32, c as i32),
                })?;
                markers.push(m);
            }
            out.push(markers);
        }
        Self::from_rows(out)
    }

    /// The bounding range `[0, rows) × [0, cols)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.bounds.rows() as usize
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.bounds.cols() as usize
    }

    /// Whether the grid contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// `Ok` if `p` is inside the grid, [`GridError::OutOfBounds`] otherwise.
    pub fn check_bounds(&self, p: Point) -> Result<(), GridError> {
        if self.contains(p) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                point: p,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    /// Get the marker at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Marker> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Set the marker at a point.
    pub fn set(&mut self, p: Point, m: Marker) -> Result<(), GridError> {
        self.check_bounds(p)?;
        if let Some(i) = self.bounds.index(p) {
            self.cells[i] = m;
        }
        Ok(())
    }

    /// False outside the grid or on any non-free cell.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Marker::is_passable)
    }

    /// Passable cardinal neighbours of `p`, in [`CARDINALS`] order.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        CARDINALS
            .into_iter()
            .map(move |d| p + d)
            .filter(move |&n| self.is_passable(n))
    }

    /// Count how many cells hold the given marker.
    pub fn count(&self, m: Marker) -> usize {
        self.cells.iter().filter(|&&c| c == m).count()
    }

    /// Iterate over `(Point, Marker)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Marker)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Iterate over the rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Marker]> {
        self.cells.chunks(self.cols())
    }

    /// A copy of this grid with every path position overwritten by
    /// [`Marker::Path`]. Positions outside the grid are ignored.
    pub fn with_path(&self, path: &[Point]) -> Grid {
        let mut out = self.clone();
        for &p in path {
            if let Some(i) = out.bounds.index(p) {
                out.cells[i] = Marker::Path;
            }
        }
        out
    }
}

/// One row per line, cells separated by single spaces.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.row_slices() {
            let mut first = true;
            for m in row {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{m}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
