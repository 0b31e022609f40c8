//! Breadth-first search with per-level debugging, plus a lazy BFS iterator

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::graph::{Graph, Node};

/// Returned by a BFS debug handler to continue or abort the search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchControl {
    Continue,
    Stop,
}

/// Completed breadth-first search.
///
/// The search runs level by level and stops at the first node satisfying
/// the goal, checked when a node is discovered. Each node keeps the
/// predecessor it was first discovered through.
#[derive(Debug, Clone)]
pub struct BfsSearch<N: Node> {
    solution: Option<N>,
    visited: HashSet<N>,
    discovered_through: HashMap<N, N>,
}

impl<N: Node> BfsSearch<N> {
    pub fn run<G: Graph<N>>(graph: G, start: N, is_solution: impl FnMut(&N) -> bool) -> Self {
        Self::run_with_debug(graph, start, is_solution, |_, _, _| SearchControl::Continue)
    }

    /// Like [`BfsSearch::run`], calling `debug` once per level with the
    /// level number, the nodes on it, and the nodes expanded so far.
    /// Returning [`SearchControl::Stop`] ends the search without a solution.
    pub fn run_with_debug<G: Graph<N>>(
        graph: G,
        start: N,
        mut is_solution: impl FnMut(&N) -> bool,
        mut debug: impl FnMut(usize, &HashSet<N>, &HashSet<N>) -> SearchControl,
    ) -> Self {
        let mut search = Self {
            solution: None,
            visited: HashSet::new(),
            discovered_through: HashMap::new(),
        };
        if is_solution(&start) {
            search.solution = Some(start);
            return search;
        }

        let mut level = 0;
        let mut frontier = HashSet::from([start]);
        while !frontier.is_empty() {
            if debug(level, &frontier, &search.visited) == SearchControl::Stop {
                return search;
            }
            let mut next_level = HashSet::new();
            for current in &frontier {
                search.visited.insert(current.clone());
                for node in graph.neighbors(current) {
                    if search.visited.contains(&node)
                        || frontier.contains(&node)
                        || next_level.contains(&node)
                    {
                        continue;
                    }
                    search.discovered_through.insert(node.clone(), current.clone());
                    if is_solution(&node) {
                        search.solution = Some(node);
                        return search;
                    }
                    next_level.insert(node);
                }
            }
            frontier = next_level;
            level += 1;
        }
        search
    }

    pub fn solution(&self) -> Option<&N> {
        self.solution.as_ref()
    }

    /// Nodes whose neighbors were enumerated
    pub fn visited(&self) -> &HashSet<N> {
        &self.visited
    }

    /// Path from the start to the solution; empty without solution
    pub fn path(&self) -> Vec<N> {
        self.solution
            .as_ref()
            .map(|solution| walk_back(&self.discovered_through, solution))
            .unwrap_or_default()
    }
}

fn walk_back<N: Node>(discovered_through: &HashMap<N, N>, node: &N) -> Vec<N> {
    let mut path = VecDeque::new();
    let mut current = Some(node);
    while let Some(node) = current {
        path.push_front(node.clone());
        current = discovered_through.get(node);
    }
    path.into()
}

/// Debug handler that logs every BFS level at debug level and never stops.
pub fn logging_debugger<N>() -> impl FnMut(usize, &HashSet<N>, &HashSet<N>) -> SearchControl {
    |depth, frontier, visited| {
        debug!(
            depth,
            frontier = frontier.len(),
            visited = visited.len(),
            "bfs_level"
        );
        SearchControl::Continue
    }
}

/// Lazy breadth-first iterator over every node reachable from a start node.
///
/// Each node is yielded exactly once, the start first. The predecessor map
/// grows as the iteration advances.
pub struct BfsTraversal<N: Node, G: Graph<N>> {
    graph: G,
    queue: VecDeque<N>,
    discovered: HashSet<N>,
    discovered_through: HashMap<N, N>,
}

impl<N: Node, G: Graph<N>> BfsTraversal<N, G> {
    pub fn new(graph: G, start: N) -> Self {
        Self {
            graph,
            discovered: HashSet::from([start.clone()]),
            queue: VecDeque::from([start]),
            discovered_through: HashMap::new(),
        }
    }

    pub fn discovered_through(&self) -> &HashMap<N, N> {
        &self.discovered_through
    }

    /// Path from the start to a node already yielded by the iterator
    pub fn path_to(&self, node: &N) -> Vec<N> {
        if !self.discovered.contains(node) {
            return Vec::new();
        }
        walk_back(&self.discovered_through, node)
    }
}

impl<N: Node, G: Graph<N>> Iterator for BfsTraversal<N, G> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let current = self.queue.pop_front()?;
        for node in self.graph.neighbors(&current) {
            if self.discovered.insert(node.clone()) {
                self.discovered_through.insert(node.clone(), current.clone());
                self.queue.push_back(node);
            }
        }
        Some(current)
    }
}
