//! Random world generation: scattered obstacles, book pickups and a shelf.
//!
//! The agent origin (0, 0) is always kept free. Generation is a pure
//! function of the supplied `Rng`, so a seeded generator reproduces the same
//! world.

use std::collections::HashSet;
use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::Point;

/// A generated world: static walls plus mission targets.
#[derive(Debug, Clone)]
pub struct WorldLayout {
    /// Static wall cells.
    pub obstacles: HashSet<Point>,
    /// Book pickup cells, each on a free cell.
    pub books: Vec<Point>,
    /// The shelf cell, distinct from every book.
    pub shelf: Point,
}

/// Errors from world generation.
#[derive(Debug, Clone)]
pub enum WorldGenError {
    /// The grid cannot host the requested obstacles, books and shelf while
    /// keeping the origin free.
    TooCrowded {
        cells: usize,
        obstacles: usize,
        targets: usize,
    },
}

impl fmt::Display for WorldGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooCrowded {
                cells,
                obstacles,
                targets,
            } => write!(
                f,
                "worldgen: {obstacles} obstacles and {targets} targets do not \
                 fit a {cells}-cell grid with a free origin"
            ),
        }
    }
}

impl std::error::Error for WorldGenError {}

/// Generate a random `size` x `size` world.
///
/// Scatters `num_obstacles` walls (never on the origin), then places
/// `num_books` books and one shelf on distinct free cells.
pub fn generate<R: Rng>(
    rng: &mut R,
    size: i32,
    num_obstacles: usize,
    num_books: usize,
) -> Result<WorldLayout, WorldGenError> {
    let cells = (size * size) as usize;
    let targets = num_books + 1;
    // One cell is reserved for the origin.
    if num_obstacles + targets + 1 > cells {
        return Err(WorldGenError::TooCrowded {
            cells,
            obstacles: num_obstacles,
            targets,
        });
    }

    let mut obstacles = HashSet::new();
    while obstacles.len() < num_obstacles {
        let candidate = Point::new(rng.random_range(0..size), rng.random_range(0..size));
        if candidate != Point::ZERO {
            obstacles.insert(candidate);
        }
    }

    let mut free: Vec<Point> = (0..size)
        .flat_map(|x| (0..size).map(move |y| Point::new(x, y)))
        .filter(|p| *p != Point::ZERO && !obstacles.contains(p))
        .collect();
    free.shuffle(rng);

    let books = free[..num_books].to_vec();
    let shelf = free[num_books];

    Ok(WorldLayout {
        obstacles,
        books,
        shelf,
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn layout_respects_counts_and_origin() {
        let mut rng = SmallRng::seed_from_u64(7);
        let layout = generate(&mut rng, 8, 12, 3).unwrap();
        assert_eq!(layout.obstacles.len(), 12);
        assert_eq!(layout.books.len(), 3);
        assert!(!layout.obstacles.contains(&Point::ZERO));
        assert!(!layout.books.contains(&Point::ZERO));
        assert_ne!(layout.shelf, Point::ZERO);
    }

    #[test]
    fn targets_land_on_distinct_free_cells() {
        let mut rng = SmallRng::seed_from_u64(42);
        let layout = generate(&mut rng, 6, 8, 4).unwrap();
        let mut seen: HashSet<Point> = layout.books.iter().copied().collect();
        assert_eq!(seen.len(), 4);
        assert!(seen.insert(layout.shelf));
        for target in seen {
            assert!(!layout.obstacles.contains(&target));
        }
    }

    #[test]
    fn same_seed_same_world() {
        let run = || {
            let mut rng = SmallRng::seed_from_u64(123);
            generate(&mut rng, 10, 18, 3).unwrap()
        };
        let a = run();
        let b = run();
        assert_eq!(a.obstacles, b.obstacles);
        assert_eq!(a.books, b.books);
        assert_eq!(a.shelf, b.shelf);
    }

    #[test]
    fn overcrowded_grid_is_rejected() {
        let mut rng = SmallRng::seed_from_u64(0);
        let err = generate(&mut rng, 2, 3, 1).unwrap_err();
        assert!(matches!(err, WorldGenError::TooCrowded { .. }));
    }
}
