//! 2D grid search spaces for the wayfind engine.
//!
//! Provides the concrete environment the generic engine in `wayfind-search`
//! is usually run against:
//!
//! - [`Point`] — 2D integer coordinate (the node type)
//! - [`GridWorld`] — bounded 4-way grid with obstacles, unit step costs and
//!   a deterministic neighbor order
//! - [`manhattan`] / [`chebyshev`] — grid heuristics for A\*
//! - [`worldgen`] — random obstacle/pickup placement
//! - [`Mission`] — sequential multi-target searches with dynamic obstacles

mod geom;
mod heuristic;
mod mission;
mod world;
pub mod worldgen;

pub use geom::Point;
pub use heuristic::{chebyshev, manhattan, manhattan_heuristic};
pub use mission::{Mission, MissionLeg, MissionReport};
pub use world::GridWorld;
