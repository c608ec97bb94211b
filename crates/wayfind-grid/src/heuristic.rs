//! Grid heuristics for A\*.
//!
//! [`manhattan`] is the default: on a 4-way grid with unit step costs it
//! never overestimates the true remaining cost, so A\* stays optimal.
//! [`chebyshev`] is the 8-way alternative; admissible only when diagonal
//! moves are available, so it is a documented configuration rather than a
//! default.

use wayfind_search::{Cost, Heuristic};

use crate::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> Cost {
    ((a.x - b.x).abs() + (a.y - b.y).abs()) as Cost
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> Cost {
    (a.x - b.x).abs().max((a.y - b.y).abs()) as Cost
}

/// The boxed [`manhattan`] heuristic, ready for
/// [`SearchOptions::heuristic`](wayfind_search::SearchOptions).
pub fn manhattan_heuristic() -> Heuristic<Point> {
    Box::new(|a, b| manhattan(*a, *b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_sums_axes() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(2, 3)), 5);
        assert_eq!(manhattan(Point::new(2, 3), Point::new(0, 0)), 5);
        assert_eq!(manhattan(Point::new(-1, 0), Point::new(1, 0)), 2);
    }

    #[test]
    fn chebyshev_takes_the_larger_axis() {
        assert_eq!(chebyshev(Point::new(0, 0), Point::new(2, 3)), 3);
        assert_eq!(chebyshev(Point::new(0, 0), Point::new(3, 2)), 3);
    }

    #[test]
    fn zero_at_the_goal() {
        let p = Point::new(4, 4);
        assert_eq!(manhattan(p, p), 0);
        assert_eq!(chebyshev(p, p), 0);
    }
}
