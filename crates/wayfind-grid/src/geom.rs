use std::fmt;
use std::ops::{Add, Sub};

/// A 2D integer grid coordinate. X grows right, Y grows down.
///
/// The derived ordering (x, then y) is the total order used for canonical
/// undirected edge keys; frontier tie-breaking never consults it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four cardinal neighbours, in the fixed order up, down, left,
    /// right. This order is part of the determinism contract of
    /// [`GridWorld`](crate::GridWorld).
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y),
            Self::new(self.x + 1, self.y),
        ]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_order_is_up_down_left_right() {
        let p = Point::new(5, 5);
        assert_eq!(
            p.neighbors_4(),
            [
                Point::new(5, 4),
                Point::new(5, 6),
                Point::new(4, 5),
                Point::new(6, 5),
            ]
        );
    }

    #[test]
    fn ordering_is_total() {
        let mut pts = vec![Point::new(2, 0), Point::new(0, 2), Point::new(1, 1)];
        pts.sort();
        assert_eq!(
            pts,
            vec![Point::new(0, 2), Point::new(1, 1), Point::new(2, 0)]
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_round_trip() {
        let p = Point::new(3, -7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
