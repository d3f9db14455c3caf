use gridpath_core::Point;

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append the passable neighbors of `p` into `buf`. The caller clears
    /// `buf` before calling. Every move to a neighbor costs exactly 1.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with an admissible heuristic, as needed by A*.
pub trait AstarPather: Pather {
    /// Estimated remaining cost from `from` to `to`.
    /// Must never overestimate the true number of moves (admissible).
    fn estimate(&self, from: Point, to: Point) -> f64;
}
