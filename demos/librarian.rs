//! Library-robot mission in the terminal.
//!
//! Generates a random world, then sends the robot from the origin to every
//! book and finally to the shelf, one search per target. Search progress is
//! reported from the engine's snapshot stream; each finished leg is drawn as
//! an ASCII map.
//!
//! Usage: `librarian [bfs|dfs|ucs|astar] [graph|tree] [seed]`

use std::env;
use std::process::ExitCode;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use wayfind_grid::{GridWorld, Mission, Point, worldgen};
use wayfind_search::{Mode, Strategy};

const NUM_BOOKS: usize = 3;
const OBSTACLE_RATIO: f64 = 0.18;
/// Print a progress line once per this many snapshots.
const PROGRESS_EVERY: u64 = 512;

fn parse_strategy(s: &str) -> Option<Strategy> {
    match s {
        "bfs" => Some(Strategy::Bfs),
        "dfs" => Some(Strategy::Dfs),
        "ucs" => Some(Strategy::Ucs),
        "astar" => Some(Strategy::AStar),
        _ => None,
    }
}

fn parse_mode(s: &str) -> Option<Mode> {
    match s {
        "graph" => Some(Mode::Graph),
        "tree" => Some(Mode::Tree),
        _ => None,
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(strategy) = args.first().map_or(Some(Strategy::AStar), |s| parse_strategy(s)) else {
        eprintln!("usage: librarian [bfs|dfs|ucs|astar] [graph|tree] [seed]");
        return ExitCode::FAILURE;
    };
    let Some(mode) = args.get(1).map_or(Some(Mode::Graph), |s| parse_mode(s)) else {
        eprintln!("usage: librarian [bfs|dfs|ucs|astar] [graph|tree] [seed]");
        return ExitCode::FAILURE;
    };
    let seed: Option<u64> = args.get(2).and_then(|s| s.parse().ok());

    // Tree mode re-explores freely, so give it a smaller world.
    let size: i32 = match mode {
        Mode::Graph => 12,
        Mode::Tree => 7,
    };
    let num_obstacles = ((size * size) as f64 * OBSTACLE_RATIO) as usize;

    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let layout = match worldgen::generate(&mut rng, size, num_obstacles, NUM_BOOKS) {
        Ok(layout) => layout,
        Err(err) => {
            eprintln!("librarian: {err}");
            return ExitCode::FAILURE;
        }
    };
    let world = GridWorld::with_obstacles(size, size, layout.obstacles.iter().copied());

    println!(
        "librarian: {:?} {:?} on a {size}x{size} grid, {} walls, {} books",
        strategy,
        mode,
        layout.obstacles.len(),
        NUM_BOOKS
    );

    let mission = Mission::new(world.clone(), layout.books.clone(), layout.shelf);
    let mut snapshots = 0u64;
    let report = mission.run_observed(Point::ZERO, strategy, mode, |snapshot| {
        snapshots += 1;
        if snapshots % PROGRESS_EVERY == 0 {
            println!(
                "  searching: {} nodes expanded, {} edges traversed",
                snapshot.nodes_expanded,
                snapshot.edges.len()
            );
        }
    });

    let mut agent = Point::ZERO;
    for (i, leg) in report.legs.iter().enumerate() {
        match &leg.result.path {
            Some(path) => {
                println!(
                    "leg {}: {} -> {} | cost {}, {} nodes expanded",
                    i + 1,
                    agent,
                    leg.target,
                    leg.result.cost,
                    leg.result.nodes_expanded
                );
                print!("{}", render(&world, &layout, agent, path));
                agent = leg.target;
            }
            None => {
                println!(
                    "leg {}: {} -> {} | no path ({} nodes expanded)",
                    i + 1,
                    agent,
                    leg.target,
                    leg.result.nodes_expanded
                );
            }
        }
    }

    println!(
        "mission {}: {} nodes expanded in total, final position {}",
        if report.completed {
            "complete"
        } else {
            "incomplete"
        },
        report.total_nodes_expanded,
        report.final_position
    );
    ExitCode::SUCCESS
}

/// Draw one leg: walls `#`, books `B`, shelf `S`, the leg's path `*`, the
/// robot `R` at the leg start.
fn render(world: &GridWorld, layout: &worldgen::WorldLayout, start: Point, path: &[Point]) -> String {
    let mut out = String::new();
    for y in 0..world.height() {
        for x in 0..world.width() {
            let p = Point::new(x, y);
            let ch = if p == start {
                'R'
            } else if layout.obstacles.contains(&p) {
                '#'
            } else if p == layout.shelf {
                'S'
            } else if layout.books.contains(&p) {
                'B'
            } else if path.contains(&p) {
                '*'
            } else {
                '.'
            };
            out.push(ch);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}
