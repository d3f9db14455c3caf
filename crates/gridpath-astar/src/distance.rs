use gridpath_core::Point;

/// Straight-line (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dr = f64::from(a.row - b.row);
    let dc = f64::from(a.col - b.col);
    (dr * dr + dc * dc).sqrt()
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_distance() {
        assert_eq!(euclidean(Point::new(0, 0), Point::new(3, 4)), 5.0);
        assert_eq!(euclidean(Point::new(2, 2), Point::new(2, 2)), 0.0);
        assert_eq!(euclidean(Point::new(1, 5), Point::new(4, 1)), 5.0);
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(3, 4)), 7);
        assert_eq!(manhattan(Point::new(-1, 2), Point::new(1, -2)), 6);
    }

    #[test]
    fn euclidean_never_exceeds_manhattan() {
        for r in -4..=4 {
            for c in -4..=4 {
                let p = Point::new(r, c);
                assert!(euclidean(Point::ZERO, p) <= f64::from(manhattan(Point::ZERO, p)));
            }
        }
    }
}
