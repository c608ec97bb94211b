use std::collections::HashSet;

use wayfind_search::{Cost, Environment};

use crate::Point;

/// A bounded 4-way grid with obstacles and unit step costs.
///
/// Neighbors are enumerated in the fixed order up, down, left, right, so
/// repeated searches over the same obstacle configuration are fully
/// deterministic. Obstacles are set before a search starts and must not be
/// mutated mid-search; between searches they may change freely.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridWorld {
    width: i32,
    height: i32,
    obstacles: HashSet<Point>,
}

impl GridWorld {
    /// Create an open grid of the given dimensions.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            obstacles: HashSet::new(),
        }
    }

    /// Create a grid with an initial obstacle set. Obstacles outside the
    /// bounds are harmless; they can never be reached.
    pub fn with_obstacles(
        width: i32,
        height: i32,
        obstacles: impl IntoIterator<Item = Point>,
    ) -> Self {
        Self {
            width,
            height,
            obstacles: obstacles.into_iter().collect(),
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` lies inside the grid bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Whether `p` is inside the bounds and not an obstacle.
    #[inline]
    pub fn walkable(&self, p: Point) -> bool {
        self.contains(p) && !self.obstacles.contains(&p)
    }

    /// Add one obstacle cell.
    pub fn add_obstacle(&mut self, p: Point) {
        self.obstacles.insert(p);
    }

    /// Remove one obstacle cell. Returns whether it was present.
    pub fn remove_obstacle(&mut self, p: Point) -> bool {
        self.obstacles.remove(&p)
    }

    /// The current obstacle set.
    pub fn obstacles(&self) -> &HashSet<Point> {
        &self.obstacles
    }
}

impl Environment for GridWorld {
    type Node = Point;

    fn neighbors(&self, node: &Point, buf: &mut Vec<(Point, Cost)>) {
        for n in node.neighbors_4() {
            if self.walkable(n) {
                buf.push((n, 1));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors_of(world: &GridWorld, p: Point) -> Vec<Point> {
        let mut buf = Vec::new();
        world.neighbors(&p, &mut buf);
        buf.into_iter().map(|(n, _)| n).collect()
    }

    #[test]
    fn corner_has_two_neighbors() {
        let world = GridWorld::new(3, 3);
        assert_eq!(
            neighbors_of(&world, Point::ZERO),
            vec![Point::new(0, 1), Point::new(1, 0)]
        );
    }

    #[test]
    fn interior_enumerates_up_down_left_right() {
        let world = GridWorld::new(3, 3);
        assert_eq!(
            neighbors_of(&world, Point::new(1, 1)),
            vec![
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(0, 1),
                Point::new(2, 1),
            ]
        );
    }

    #[test]
    fn obstacles_are_skipped() {
        let world = GridWorld::with_obstacles(3, 3, [Point::new(1, 0), Point::new(0, 1)]);
        assert!(neighbors_of(&world, Point::ZERO).is_empty());
    }

    #[test]
    fn unit_step_cost() {
        let world = GridWorld::new(2, 2);
        let mut buf = Vec::new();
        world.neighbors(&Point::ZERO, &mut buf);
        assert!(buf.iter().all(|&(_, c)| c == 1));
    }
}
