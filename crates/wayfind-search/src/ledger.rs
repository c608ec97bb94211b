//! Duplicate-suppression record: best-cost ledger or scheduled set.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::env::Cost;

/// Graph-mode memory of where the search has already been.
///
/// Cost-aware strategies (UCS, A*) remember the minimum cost at which each
/// node has been *expanded* and filter duplicates lazily at pop time.
/// BFS/DFS mark nodes at the time they are *scheduled*, preventing duplicate
/// scheduling entirely. Tree mode keeps no global memory.
///
/// Nodes are also kept in first-recorded order so progress snapshots can
/// expose the explored region as a slice.
#[derive(Debug)]
pub(crate) struct Ledger<N> {
    kind: Kind<N>,
    explored: Vec<N>,
}

#[derive(Debug)]
enum Kind<N> {
    /// node -> minimum cost at which it has been expanded (UCS/A* graph mode).
    BestCost(HashMap<N, Cost>),
    /// Nodes already scheduled (BFS/DFS graph mode).
    Scheduled(HashSet<N>),
    /// Tree mode: no global memory.
    None,
}

impl<N: Clone + Eq + Hash> Ledger<N> {
    pub(crate) fn best_cost() -> Self {
        Self {
            kind: Kind::BestCost(HashMap::new()),
            explored: Vec::new(),
        }
    }

    pub(crate) fn scheduled() -> Self {
        Self {
            kind: Kind::Scheduled(HashSet::new()),
            explored: Vec::new(),
        }
    }

    pub(crate) fn none() -> Self {
        Self {
            kind: Kind::None,
            explored: Vec::new(),
        }
    }

    /// Whether a popped entry for `node` at `cost` is redundant and must be
    /// discarded without expansion. Only the best-cost variant filters here.
    pub(crate) fn skip_expansion(&self, node: &N, cost: Cost) -> bool {
        match &self.kind {
            Kind::BestCost(best) => best.get(node).is_some_and(|&c| c <= cost),
            _ => false,
        }
    }

    /// Record that `node` is being expanded at `cost`.
    ///
    /// The stored cost never increases: `skip_expansion` has already rejected
    /// any entry with an equal-or-worse cost.
    pub(crate) fn record_expansion(&mut self, node: &N, cost: Cost) {
        if let Kind::BestCost(best) = &mut self.kind {
            if best.insert(node.clone(), cost).is_none() {
                self.explored.push(node.clone());
            }
        }
    }

    /// Whether `node` has already been scheduled (BFS/DFS graph mode).
    pub(crate) fn already_scheduled(&self, node: &N) -> bool {
        match &self.kind {
            Kind::Scheduled(seen) => seen.contains(node),
            _ => false,
        }
    }

    /// Mark `node` as scheduled (BFS/DFS graph mode). No-op otherwise.
    pub(crate) fn mark_scheduled(&mut self, node: &N) {
        if let Kind::Scheduled(seen) = &mut self.kind {
            if seen.insert(node.clone()) {
                self.explored.push(node.clone());
            }
        }
    }

    /// Nodes recorded so far, in first-recorded order. Empty in tree mode.
    pub(crate) fn explored(&self) -> &[N] {
        &self.explored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_cost_filters_equal_or_worse_pops() {
        let mut ledger: Ledger<u32> = Ledger::best_cost();
        assert!(!ledger.skip_expansion(&7, 5));
        ledger.record_expansion(&7, 5);
        assert!(ledger.skip_expansion(&7, 5));
        assert!(ledger.skip_expansion(&7, 9));
        // A strictly cheaper rediscovery is re-expanded.
        assert!(!ledger.skip_expansion(&7, 3));
    }

    #[test]
    fn best_cost_never_increases() {
        let mut ledger: Ledger<u32> = Ledger::best_cost();
        ledger.record_expansion(&7, 5);
        ledger.record_expansion(&7, 3);
        assert!(ledger.skip_expansion(&7, 3));
        // Explored list keeps one entry per distinct node.
        assert_eq!(ledger.explored(), &[7]);
    }

    #[test]
    fn scheduled_set_marks_once() {
        let mut ledger: Ledger<u32> = Ledger::scheduled();
        assert!(!ledger.already_scheduled(&1));
        ledger.mark_scheduled(&1);
        assert!(ledger.already_scheduled(&1));
        ledger.mark_scheduled(&1);
        assert_eq!(ledger.explored(), &[1]);
    }

    #[test]
    fn tree_mode_remembers_nothing() {
        let mut ledger: Ledger<u32> = Ledger::none();
        ledger.record_expansion(&1, 0);
        ledger.mark_scheduled(&1);
        assert!(!ledger.skip_expansion(&1, 99));
        assert!(!ledger.already_scheduled(&1));
        assert!(ledger.explored().is_empty());
    }
}
