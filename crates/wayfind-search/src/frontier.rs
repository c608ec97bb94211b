//! Per-strategy frontier containers.
//!
//! The cost-aware variants use a min-heap keyed by `(priority, seq)`, where
//! `seq` is a monotonically increasing insertion counter. Ties on priority
//! are therefore broken by insertion order (FIFO), independent of node
//! content, which keeps results deterministic for any node representation.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::env::Cost;

/// A scheduled-but-not-yet-expanded search entry.
///
/// `path` is the node sequence from the start, exclusive of `node` itself.
/// Entries are immutable once pushed.
#[derive(Debug, Clone)]
pub(crate) struct Entry<N> {
    pub(crate) node: N,
    /// Cumulative cost from the start to `node`.
    pub(crate) cost: Cost,
    pub(crate) path: Vec<N>,
}

#[derive(Debug)]
struct HeapEntry<N> {
    priority: Cost,
    /// Monotonically increasing counter used to break ties.
    /// Lower = inserted earlier = popped first among equal priorities.
    seq: u64,
    entry: Entry<N>,
}

impl<N> PartialEq for HeapEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<N> Eq for HeapEntry<N> {}

impl<N> PartialOrd for HeapEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for HeapEntry<N> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Wrapped in Reverse for the BinaryHeap, so "natural" comparison:
        // smaller priority first, then smaller seq.
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Strategy-specific container of pending entries.
#[derive(Debug)]
pub(crate) enum Frontier<N> {
    /// FIFO queue (BFS).
    Fifo(VecDeque<Entry<N>>),
    /// LIFO stack (DFS).
    Lifo(Vec<Entry<N>>),
    /// Min-heap on `(priority, seq)` (UCS, A*).
    MinHeap {
        heap: BinaryHeap<Reverse<HeapEntry<N>>>,
        seq: u64,
    },
}

impl<N> Frontier<N> {
    pub(crate) fn fifo() -> Self {
        Self::Fifo(VecDeque::new())
    }

    pub(crate) fn lifo() -> Self {
        Self::Lifo(Vec::new())
    }

    pub(crate) fn min_heap() -> Self {
        Self::MinHeap {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Schedule an entry. `priority` is ignored by the FIFO/LIFO variants.
    pub(crate) fn push(&mut self, entry: Entry<N>, priority: Cost) {
        match self {
            Self::Fifo(queue) => queue.push_back(entry),
            Self::Lifo(stack) => stack.push(entry),
            Self::MinHeap { heap, seq } => {
                heap.push(Reverse(HeapEntry {
                    priority,
                    seq: *seq,
                    entry,
                }));
                *seq += 1;
            }
        }
    }

    /// Remove and return the highest-priority entry, or `None` if empty.
    pub(crate) fn pop(&mut self) -> Option<Entry<N>> {
        match self {
            Self::Fifo(queue) => queue.pop_front(),
            Self::Lifo(stack) => stack.pop(),
            Self::MinHeap { heap, .. } => heap.pop().map(|Reverse(he)| he.entry),
        }
    }
}
