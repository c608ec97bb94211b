//! Terminal results and in-flight progress snapshots.

use std::collections::HashMap;

use crate::env::Cost;

/// Canonical undirected key for a traversed edge: the endpoint pair in
/// sorted order, so both directed traversals of a pair share one key.
#[inline]
pub fn canonical_edge<N: Ord>(a: N, b: N) -> (N, N) {
    if a <= b { (a, b) } else { (b, a) }
}

/// The outcome of a completed search.
///
/// Built exactly once, when the goal is popped or the frontier runs out.
/// `path` runs from the start node to the goal inclusive; it is `None` (with
/// `cost == UNREACHABLE`) when no path exists.
///
/// Frontier entries carry their full path prefix instead of backpointers, so
/// memory grows with the product of frontier size and path length. This is a
/// deliberate simplicity trade-off; callers searching very large spaces
/// should bound the space or use DFS's depth limit.
#[derive(Debug, Clone)]
pub struct SearchResult<N> {
    /// Start-to-goal node sequence, or `None` if the goal is unreachable.
    pub path: Option<Vec<N>>,
    /// Cost of `path`, or [`UNREACHABLE`](crate::UNREACHABLE) without one.
    pub cost: Cost,
    /// Number of nodes expanded (popped and processed).
    pub nodes_expanded: u64,
    /// Every directed edge traversal, in order.
    pub edges: Vec<(N, N)>,
    /// Traversal count per canonical undirected edge key.
    pub edge_counts: HashMap<(N, N), u64>,
}

/// A view of the engine's diagnostics, emitted after each processed neighbor.
///
/// Borrows the live engine state; consume it before the next
/// [`advance`](crate::Search::advance) call.
#[derive(Debug)]
pub struct Snapshot<'a, N> {
    /// Number of nodes expanded so far.
    pub nodes_expanded: u64,
    /// Nodes recorded in the ledger, in first-recorded order.
    /// Empty in tree mode.
    pub explored: &'a [N],
    /// Every directed edge traversal so far, in order.
    pub edges: &'a [(N, N)],
    /// Traversal count per canonical undirected edge key, so far.
    pub edge_counts: &'a HashMap<(N, N), u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_edge_sorts_endpoints() {
        assert_eq!(canonical_edge(2, 1), (1, 2));
        assert_eq!(canonical_edge(1, 2), (1, 2));
        assert_eq!(canonical_edge(3, 3), (3, 3));
    }
}
