//! Sequential multi-target missions.
//!
//! A mission visits every book in order and then the shelf, running one
//! search per target. While one target is being sought, every *other*
//! mission target is treated as a dynamic obstacle, so the agent cannot cut
//! through a book it is not currently after. Each leg starts where the
//! previous one ended, and node-expansion totals accumulate across legs.

use wayfind_search::{Mode, Search, SearchOptions, SearchResult, Snapshot, Step, Strategy};

use crate::heuristic::manhattan_heuristic;
use crate::{GridWorld, Point};

/// One completed (or failed) search toward a single target.
#[derive(Debug, Clone)]
pub struct MissionLeg {
    pub target: Point,
    pub result: SearchResult<Point>,
}

/// Outcome of a whole mission.
#[derive(Debug, Clone)]
pub struct MissionReport {
    /// One leg per attempted target, in mission order. A failed leg is
    /// always the last one.
    pub legs: Vec<MissionLeg>,
    /// Running total of nodes expanded across all legs.
    pub total_nodes_expanded: u64,
    /// Whether every target was reached.
    pub completed: bool,
    /// Where the agent ended up.
    pub final_position: Point,
}

/// A multi-target search plan over a static world.
#[derive(Debug, Clone)]
pub struct Mission {
    world: GridWorld,
    books: Vec<Point>,
    shelf: Point,
}

impl Mission {
    /// Create a mission over `world` (static walls only): collect the books
    /// in the given order, then visit the shelf.
    pub fn new(world: GridWorld, books: Vec<Point>, shelf: Point) -> Self {
        Self {
            world,
            books,
            shelf,
        }
    }

    /// The targets in visiting order: books first, shelf last.
    pub fn targets(&self) -> Vec<Point> {
        let mut targets = self.books.clone();
        targets.push(self.shelf);
        targets
    }

    /// Run the mission from `start`, discarding progress snapshots.
    pub fn run(&self, start: Point, strategy: Strategy, mode: Mode) -> MissionReport {
        self.run_observed(start, strategy, mode, |_| {})
    }

    /// Run the mission from `start`, passing every progress snapshot to
    /// `observe` (one call per processed neighbor, as with
    /// [`Search::advance`]).
    ///
    /// A leg with no path is a normal outcome: the mission stops there and
    /// reports `completed: false`.
    pub fn run_observed(
        &self,
        start: Point,
        strategy: Strategy,
        mode: Mode,
        mut observe: impl FnMut(&Snapshot<'_, Point>),
    ) -> MissionReport {
        let targets = self.targets();
        let mut agent = start;
        let mut legs = Vec::with_capacity(targets.len());
        let mut total_nodes_expanded = 0u64;

        for (i, &target) in targets.iter().enumerate() {
            // Every target except the current one is a wall, including
            // books already collected.
            let mut env = self.world.clone();
            for (j, &other) in targets.iter().enumerate() {
                if j != i {
                    env.add_obstacle(other);
                }
            }

            let options = match strategy {
                Strategy::AStar => SearchOptions {
                    heuristic: Some(manhattan_heuristic()),
                    ..Default::default()
                },
                _ => SearchOptions::default(),
            };
            let mut search = Search::new(&env, agent, target, strategy, mode, options);
            let result = loop {
                match search.advance() {
                    Step::Progress(snapshot) => observe(&snapshot),
                    Step::Done(result) => break result,
                }
            };

            total_nodes_expanded += result.nodes_expanded;
            let reached = result.path.is_some();
            log::debug!(
                "mission leg {} -> {}: reached={}, {} nodes expanded",
                agent,
                target,
                reached,
                result.nodes_expanded
            );
            if reached {
                agent = target;
            }
            legs.push(MissionLeg { target, result });
            if !reached {
                return MissionReport {
                    legs,
                    total_nodes_expanded,
                    completed: false,
                    final_position: agent,
                };
            }
        }

        MissionReport {
            legs,
            total_nodes_expanded,
            completed: true,
            final_position: agent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_books_then_shelf() {
        let world = GridWorld::new(4, 4);
        let mission = Mission::new(world, vec![Point::new(2, 0)], Point::new(3, 3));
        let report = mission.run(Point::ZERO, Strategy::Bfs, Mode::Graph);
        assert!(report.completed);
        assert_eq!(report.legs.len(), 2);
        assert_eq!(report.legs[0].target, Point::new(2, 0));
        assert_eq!(report.legs[1].target, Point::new(3, 3));
        assert_eq!(report.final_position, Point::new(3, 3));
        // Each leg begins where the previous one ended.
        let second = report.legs[1].result.path.as_ref().unwrap();
        assert_eq!(second[0], Point::new(2, 0));
    }

    #[test]
    fn totals_accumulate_across_legs() {
        let world = GridWorld::new(5, 5);
        let mission = Mission::new(
            world,
            vec![Point::new(4, 0), Point::new(0, 4)],
            Point::new(4, 4),
        );
        let report = mission.run(Point::ZERO, Strategy::Ucs, Mode::Graph);
        assert!(report.completed);
        let sum: u64 = report
            .legs
            .iter()
            .map(|leg| leg.result.nodes_expanded)
            .sum();
        assert_eq!(report.total_nodes_expanded, sum);
        assert!(sum > 0);
    }

    #[test]
    fn pending_targets_block_the_way() {
        // The only corridor to the book passes through the shelf cell, so
        // the first leg must fail.
        let world = GridWorld::new(3, 1);
        let mission = Mission::new(world, vec![Point::new(2, 0)], Point::new(1, 0));
        let report = mission.run(Point::ZERO, Strategy::Bfs, Mode::Graph);
        assert!(!report.completed);
        assert_eq!(report.legs.len(), 1);
        assert!(report.legs[0].result.path.is_none());
        assert_eq!(report.final_position, Point::ZERO);
    }

    #[test]
    fn astar_mission_matches_bfs_cost_on_unit_grid() {
        let world = GridWorld::with_obstacles(5, 5, [Point::new(2, 1), Point::new(2, 2)]);
        let mission = Mission::new(world, vec![Point::new(4, 2)], Point::new(0, 4));
        let bfs = mission.run(Point::ZERO, Strategy::Bfs, Mode::Graph);
        let astar = mission.run(Point::ZERO, Strategy::AStar, Mode::Graph);
        assert!(bfs.completed && astar.completed);
        for (a, b) in bfs.legs.iter().zip(astar.legs.iter()) {
            assert_eq!(a.result.cost, b.result.cost);
        }
    }

    #[test]
    fn observer_sees_every_processed_neighbor() {
        let world = GridWorld::new(3, 3);
        let mission = Mission::new(world, vec![], Point::new(2, 2));
        let mut snapshots = 0u64;
        let report = mission.run_observed(Point::ZERO, Strategy::Bfs, Mode::Graph, |_| {
            snapshots += 1;
        });
        assert!(report.completed);
        let edge_total: u64 = report
            .legs
            .iter()
            .map(|leg| leg.result.edges.len() as u64)
            .sum();
        assert_eq!(snapshots, edge_total);
    }
}
