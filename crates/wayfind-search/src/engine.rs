//! The resumable search engine.
//!
//! [`Search`] drives one `start -> goal` query as an explicit pull-based
//! state machine: each [`Search::advance`] call processes exactly one
//! neighbor of the node currently being expanded and suspends with a
//! [`Step::Progress`] snapshot, until the terminal [`Step::Done`].

use std::collections::HashMap;
use std::mem;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::env::{Cost, Environment, Heuristic, UNREACHABLE};
use crate::frontier::{Entry, Frontier};
use crate::ledger::Ledger;
use crate::result::{canonical_edge, SearchResult, Snapshot};

/// Which frontier policy orders the expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Breadth-first: FIFO frontier, cost counted in edges.
    Bfs,
    /// Depth-first: LIFO frontier, cost counted in edges.
    Dfs,
    /// Uniform-cost: min-heap on cumulative step cost.
    Ucs,
    /// A*: min-heap on cumulative step cost plus heuristic estimate.
    AStar,
}

/// How much the search remembers about where it has been.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Re-explore freely; DFS still avoids cycles along its own path.
    Tree,
    /// Suppress re-expansion via a best-cost ledger (UCS/A*) or a
    /// scheduled-node set (BFS/DFS).
    Graph,
}

/// Optional knobs for a search.
pub struct SearchOptions<N> {
    /// Maximum path length in edges a DFS may schedule. Other strategies
    /// ignore it.
    pub depth_limit: Option<usize>,
    /// Heuristic for [`Strategy::AStar`]. Absent, A* degenerates to UCS
    /// ordering (`h = 0`). Other strategies ignore it.
    pub heuristic: Option<Heuristic<N>>,
    /// Cooperative cancellation flag, polled once per [`Search::advance`].
    /// When set, the search terminates with a no-path result.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl<N> Default for SearchOptions<N> {
    fn default() -> Self {
        Self {
            depth_limit: None,
            heuristic: None,
            cancel: None,
        }
    }
}

/// One suspension of the engine.
#[derive(Debug)]
pub enum Step<'a, N> {
    /// One neighbor was processed; advance again for more.
    Progress(Snapshot<'a, N>),
    /// Terminal outcome. Further `advance` calls return the same value.
    Done(SearchResult<N>),
}

enum State<N> {
    /// Ready to pop the next frontier entry.
    PopNext,
    /// Mid-expansion: neighbors of `node` are processed one per `advance`.
    Expanding {
        node: N,
        cost: Cost,
        path: Vec<N>,
        neighbors: Vec<(N, Cost)>,
        next: usize,
    },
    Finished(SearchResult<N>),
}

/// A single `start -> goal` search over an [`Environment`].
///
/// The handle owns the frontier, ledger and diagnostics for the duration of
/// the search; the environment is only borrowed, so a caller can run any
/// number of sequential searches (updating obstacles between them) against
/// the same environment value.
pub struct Search<'e, E: Environment> {
    env: &'e E,
    goal: E::Node,
    strategy: Strategy,
    mode: Mode,
    depth_limit: Option<usize>,
    heuristic: Option<Heuristic<E::Node>>,
    cancel: Option<Arc<AtomicBool>>,
    frontier: Frontier<E::Node>,
    ledger: Ledger<E::Node>,
    nodes_expanded: u64,
    edges: Vec<(E::Node, E::Node)>,
    edge_counts: HashMap<(E::Node, E::Node), u64>,
    state: State<E::Node>,
    // Scratch buffer reused across expansions.
    nbuf: Vec<(E::Node, Cost)>,
}

impl<'e, E: Environment> Search<'e, E> {
    /// Create a search from `start` to `goal`.
    pub fn new(
        env: &'e E,
        start: E::Node,
        goal: E::Node,
        strategy: Strategy,
        mode: Mode,
        options: SearchOptions<E::Node>,
    ) -> Self {
        let frontier = match strategy {
            Strategy::Bfs => Frontier::fifo(),
            Strategy::Dfs => Frontier::lifo(),
            Strategy::Ucs | Strategy::AStar => Frontier::min_heap(),
        };
        let ledger = match (mode, strategy) {
            (Mode::Tree, _) => Ledger::none(),
            (Mode::Graph, Strategy::Ucs | Strategy::AStar) => Ledger::best_cost(),
            (Mode::Graph, Strategy::Bfs | Strategy::Dfs) => Ledger::scheduled(),
        };
        let mut search = Self {
            env,
            goal,
            strategy,
            mode,
            depth_limit: options.depth_limit,
            heuristic: options.heuristic,
            cancel: options.cancel,
            frontier,
            ledger,
            nodes_expanded: 0,
            edges: Vec::new(),
            edge_counts: HashMap::new(),
            state: State::PopNext,
            nbuf: Vec::with_capacity(8),
        };
        // BFS/DFS graph mode mark nodes when scheduled; that includes the
        // start node itself.
        search.ledger.mark_scheduled(&start);
        let priority = search.priority(0, &start);
        search.frontier.push(
            Entry {
                node: start,
                cost: 0,
                path: Vec::new(),
            },
            priority,
        );
        search
    }

    /// Process one neighbor of the node being expanded.
    ///
    /// Returns [`Step::Progress`] after each processed neighbor (admitted to
    /// the frontier or not) and [`Step::Done`] once the goal is popped, the
    /// frontier runs out, or the cancel flag is observed. Calling `advance`
    /// after `Done` returns the same `Done` value again.
    pub fn advance(&mut self) -> Step<'_, E::Node> {
        loop {
            if let State::Finished(result) = &self.state {
                return Step::Done(result.clone());
            }
            if self.cancelled() {
                self.finish(None, UNREACHABLE);
                continue;
            }
            match mem::replace(&mut self.state, State::PopNext) {
                State::Finished(result) => {
                    // Unreached: handled at the top of the loop.
                    self.state = State::Finished(result);
                }
                State::PopNext => {
                    let Some(entry) = self.frontier.pop() else {
                        self.finish(None, UNREACHABLE);
                        continue;
                    };
                    // Goal test on pop. Fires on the very first pop when
                    // start == goal, before any expansion.
                    if entry.node == self.goal {
                        let Entry {
                            node,
                            cost,
                            mut path,
                        } = entry;
                        path.push(node);
                        self.finish(Some(path), cost);
                        continue;
                    }
                    if self.mode == Mode::Graph {
                        // Lazy duplicate filter for the cost-aware
                        // strategies; a no-op for BFS/DFS, which filtered at
                        // schedule time.
                        if self.ledger.skip_expansion(&entry.node, entry.cost) {
                            continue;
                        }
                        self.ledger.record_expansion(&entry.node, entry.cost);
                    }
                    self.nodes_expanded += 1;
                    log::trace!("expanding {:?} at cost {}", entry.node, entry.cost);
                    let mut neighbors = mem::take(&mut self.nbuf);
                    neighbors.clear();
                    self.env.neighbors(&entry.node, &mut neighbors);
                    if neighbors.is_empty() {
                        // Dead end: nothing to process, no snapshot.
                        self.nbuf = neighbors;
                        continue;
                    }
                    self.state = State::Expanding {
                        node: entry.node,
                        cost: entry.cost,
                        path: entry.path,
                        neighbors,
                        next: 0,
                    };
                }
                State::Expanding {
                    node,
                    cost,
                    path,
                    neighbors,
                    next,
                } => {
                    let (neighbor, step_cost) = neighbors[next].clone();

                    // Edge accounting happens for every enumerated neighbor,
                    // admitted or not.
                    let key = canonical_edge(node.clone(), neighbor.clone());
                    *self.edge_counts.entry(key).or_insert(0) += 1;
                    self.edges.push((node.clone(), neighbor.clone()));

                    if self.admits(&node, &path, &neighbor) {
                        let child_cost = match self.strategy {
                            Strategy::Bfs | Strategy::Dfs => cost + 1,
                            Strategy::Ucs | Strategy::AStar => cost.saturating_add(step_cost),
                        };
                        let mut child_path = Vec::with_capacity(path.len() + 1);
                        child_path.extend_from_slice(&path);
                        child_path.push(node.clone());
                        self.ledger.mark_scheduled(&neighbor);
                        let priority = self.priority(child_cost, &neighbor);
                        self.frontier.push(
                            Entry {
                                node: neighbor,
                                cost: child_cost,
                                path: child_path,
                            },
                            priority,
                        );
                    }

                    if next + 1 == neighbors.len() {
                        self.nbuf = neighbors;
                    } else {
                        self.state = State::Expanding {
                            node,
                            cost,
                            path,
                            neighbors,
                            next: next + 1,
                        };
                    }
                    return Step::Progress(Snapshot {
                        nodes_expanded: self.nodes_expanded,
                        explored: self.ledger.explored(),
                        edges: &self.edges,
                        edge_counts: &self.edge_counts,
                    });
                }
            }
        }
    }

    /// Drive the search to completion, discarding progress snapshots.
    pub fn run(&mut self) -> SearchResult<E::Node> {
        loop {
            if let Step::Done(result) = self.advance() {
                return result;
            }
        }
    }

    /// Frontier priority of a node reached at cumulative cost `g`.
    fn priority(&self, g: Cost, node: &E::Node) -> Cost {
        match self.strategy {
            // FIFO/LIFO frontiers ignore the priority.
            Strategy::Bfs | Strategy::Dfs => 0,
            Strategy::Ucs => g,
            Strategy::AStar => {
                let h = match &self.heuristic {
                    Some(h) => h(node, &self.goal),
                    None => 0,
                };
                g.saturating_add(h)
            }
        }
    }

    /// The strategy's admission rule: whether to schedule `neighbor`,
    /// reached from `current` whose path-so-far is `path`.
    fn admits(&self, current: &E::Node, path: &[E::Node], neighbor: &E::Node) -> bool {
        match self.strategy {
            // Tree-mode ledger remembers nothing, so BFS admits freely there.
            Strategy::Bfs => !self.ledger.already_scheduled(neighbor),
            Strategy::Dfs => {
                if let Some(limit) = self.depth_limit {
                    if path.len() + 1 > limit {
                        return false;
                    }
                }
                match self.mode {
                    Mode::Graph => !self.ledger.already_scheduled(neighbor),
                    // No global memory: only guard against cycles along the
                    // current path.
                    Mode::Tree => neighbor != current && !path.contains(neighbor),
                }
            }
            // Duplicates are filtered lazily at pop time via the ledger.
            Strategy::Ucs | Strategy::AStar => true,
        }
    }

    fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    fn finish(&mut self, path: Option<Vec<E::Node>>, cost: Cost) {
        log::debug!(
            "search done: {:?} {:?}, cost {}, {} nodes expanded",
            self.strategy,
            self.mode,
            cost,
            self.nodes_expanded
        );
        let result = SearchResult {
            path,
            cost,
            nodes_expanded: self.nodes_expanded,
            edges: mem::take(&mut self.edges),
            edge_counts: mem::take(&mut self.edge_counts),
        };
        self.state = State::Finished(result);
    }
}
