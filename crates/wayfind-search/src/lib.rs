//! Strategy-generic, stepwise-observable graph search.
//!
//! This crate implements four classical search strategies over a common
//! node/edge abstraction:
//!
//! - **BFS** — breadth-first (FIFO frontier, cost = path length)
//! - **DFS** — depth-first (LIFO frontier, optional depth limit)
//! - **UCS** — uniform-cost (min-heap on cumulative cost)
//! - **A\*** — min-heap on cumulative cost + heuristic estimate
//!
//! Each strategy runs in one of two modes:
//!
//! | Mode | Re-expansion policy |
//! |---|---|
//! | [`Mode::Graph`] | global best-cost ledger (UCS/A\*) or scheduled-set (BFS/DFS) |
//! | [`Mode::Tree`] | no global memory; DFS avoids cycles along its own path |
//!
//! Searches are driven through a resumable [`Search`] handle: every call to
//! [`Search::advance`] processes exactly one neighbor of the node currently
//! being expanded and returns a [`Step::Progress`] snapshot of the frontier
//! diagnostics, until the terminal [`Step::Done`] carries the final
//! [`SearchResult`]. An external renderer can therefore observe the explored
//! region grow edge by edge.
//!
//! The search space is supplied through the [`Environment`] trait, which
//! enumerates neighbors and per-step costs in a deterministic order.

mod engine;
mod env;
mod frontier;
mod ledger;
mod result;

pub use engine::{Mode, Search, SearchOptions, Step, Strategy};
pub use env::{Cost, Environment, Heuristic, UNREACHABLE};
pub use result::{canonical_edge, SearchResult, Snapshot};
