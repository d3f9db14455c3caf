//! Heuristic selection and the [`Grid`] pathers.

use std::fmt;

use gridpath_core::{Grid, Point};

use crate::distance;
use crate::traits::{AstarPather, Pather};

/// Estimate of the remaining move count between two cells.
///
/// Both variants are admissible and consistent for 4-way unit-cost moves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Heuristic {
    /// Straight-line distance.
    #[default]
    Euclidean,
    /// Sum of the row and column differences.
    Manhattan,
}

impl Heuristic {
    #[inline]
    pub fn estimate(self, a: Point, b: Point) -> f64 {
        match self {
            Self::Euclidean => distance::euclidean(a, b),
            Self::Manhattan => f64::from(distance::manhattan(a, b)),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Euclidean => "euclidean",
            Self::Manhattan => "manhattan",
        })
    }
}

/// A [`Grid`] paired with the heuristic to search it with.
#[derive(Copy, Clone, Debug)]
pub struct GridPather<'a> {
    grid: &'a Grid,
    heuristic: Heuristic,
}

impl<'a> GridPather<'a> {
    pub fn new(grid: &'a Grid, heuristic: Heuristic) -> Self {
        Self { grid, heuristic }
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }
}

impl Pather for GridPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(self.grid.neighbors(p));
    }
}

impl AstarPather for GridPather<'_> {
    fn estimate(&self, from: Point, to: Point) -> f64 {
        self.heuristic.estimate(from, to)
    }
}

// A bare grid searches with the default heuristic.

impl Pather for Grid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(Grid::neighbors(self, p));
    }
}

impl AstarPather for Grid {
    fn estimate(&self, from: Point, to: Point) -> f64 {
        Heuristic::default().estimate(from, to)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn heuristic_names() {
        assert_eq!(serde_json::to_string(&Heuristic::Manhattan).unwrap(), "\"manhattan\"");
        let h: Heuristic = serde_json::from_str("\"euclidean\"").unwrap();
        assert_eq!(h, Heuristic::Euclidean);
    }
}
