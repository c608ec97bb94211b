use std::fmt::Debug;
use std::hash::Hash;

/// Cumulative or per-step path cost.
pub type Cost = u32;

/// Sentinel cost meaning "no path exists".
pub const UNREACHABLE: Cost = Cost::MAX;

/// A heuristic estimate `h(node, goal)` of the remaining cost to the goal.
///
/// Must be admissible (never overestimate the true remaining cost) for the
/// A\* optimality guarantee to hold; the engine does not verify this.
pub type Heuristic<N> = Box<dyn Fn(&N, &N) -> Cost>;

/// A search space: nodes and their outgoing edges.
///
/// The engine depends on nothing about a node beyond equality, hashing and a
/// total order. The order is used only to build canonical undirected edge
/// keys; frontier tie-breaking never consults it.
///
/// `neighbors` must be deterministic: repeated calls with the same node and
/// the same obstacle configuration return the same neighbors in the same
/// order. Step costs are non-negative by construction of [`Cost`]. The
/// environment is read-only for the duration of a search; callers may update
/// it between searches.
pub trait Environment {
    /// Node identifier. Opaque to the engine.
    type Node: Clone + Eq + Hash + Ord + Debug;

    /// Append each `(neighbor, step_cost)` of `node` to `buf`.
    ///
    /// The caller clears `buf` before calling.
    fn neighbors(&self, node: &Self::Node, buf: &mut Vec<(Self::Node, Cost)>);
}
