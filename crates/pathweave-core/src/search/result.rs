//! Search result snapshots and path reconstruction

use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::Node;

/// Outcome of a single-solution search.
///
/// Holds owned copies of the distance and predecessor maps at the time the
/// search returned, so it stays valid while the engine keeps searching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<N: Node, P> {
    pub solution: Option<N>,
    pub distance: HashMap<N, P>,
    pub prev: HashMap<N, N>,
}

impl<N: Node, P: Copy> SearchResult<N, P> {
    pub fn new(solution: Option<N>, distance: HashMap<N, P>, prev: HashMap<N, N>) -> Self {
        Self {
            solution,
            distance,
            prev,
        }
    }

    pub fn success(&self) -> bool {
        self.solution.is_some()
    }

    /// Distance from the start to the solution
    pub fn distance_to_start(&self) -> Option<P> {
        self.solution.as_ref().and_then(|s| self.distance_to(s))
    }

    pub fn distance_to(&self, destination: &N) -> Option<P> {
        self.distance.get(destination).copied()
    }

    /// Path from the start to the solution, both included; empty without solution.
    pub fn path(&self) -> Vec<N> {
        match &self.solution {
            Some(solution) => self.path_to(solution),
            None => Vec::new(),
        }
    }

    /// Number of edges on the solution path
    pub fn steps(&self) -> Option<usize> {
        self.solution.as_ref().map(|s| self.path_to(s).len() - 1)
    }

    /// Path from the start to any discovered node; empty if `destination`
    /// was never reached.
    pub fn path_to(&self, destination: &N) -> Vec<N> {
        if !self.distance.contains_key(destination) {
            return Vec::new();
        }
        let mut path = VecDeque::new();
        let mut current = Some(destination);
        while let Some(node) = current {
            path.push_front(node.clone());
            current = self.prev.get(node);
        }
        path.into()
    }
}

/// Outcome of a multi-solution search.
///
/// Every node can have several predecessors, each on a path of the same
/// minimal distance, so path enumeration yields every optimal path. That is
/// exponential in the worst case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSolutionSearchResult<N: Node, P> {
    pub solutions: HashSet<N>,
    pub distance: HashMap<N, P>,
    pub prev: HashMap<N, Vec<N>>,
}

impl<N: Node, P: Copy> MultiSolutionSearchResult<N, P> {
    pub fn new(
        solutions: HashSet<N>,
        distance: HashMap<N, P>,
        prev: HashMap<N, Vec<N>>,
    ) -> Self {
        Self {
            solutions,
            distance,
            prev,
        }
    }

    pub fn success(&self) -> bool {
        !self.solutions.is_empty()
    }

    /// Distance of the solutions; all of them share it.
    pub fn distance_to_start(&self) -> Option<P> {
        self.solutions
            .iter()
            .next()
            .and_then(|s| self.distance.get(s).copied())
    }

    pub fn distance_to(&self, destination: &N) -> Option<P> {
        self.distance.get(destination).copied()
    }

    /// Every optimal path to every solution
    pub fn paths(&self) -> Vec<Vec<N>> {
        self.solutions.iter().flat_map(|s| self.paths_to(s)).collect()
    }

    /// Every optimal path from the start to `destination`.
    pub fn paths_to(&self, destination: &N) -> Vec<Vec<N>> {
        if !self.distance.contains_key(destination) {
            return Vec::new();
        }

        // Walk the predecessor DAG backwards with an explicit stack; each
        // entry carries the partial path from `destination` back to its node.
        let mut paths = Vec::new();
        let mut stack: Vec<Vec<N>> = vec![vec![destination.clone()]];
        while let Some(partial) = stack.pop() {
            let Some(current) = partial.last() else {
                continue;
            };
            match self.prev.get(current) {
                Some(predecessors) if !predecessors.is_empty() => {
                    for predecessor in predecessors {
                        let mut extended = partial.clone();
                        extended.push(predecessor.clone());
                        stack.push(extended);
                    }
                }
                _ => {
                    let mut path = partial;
                    path.reverse();
                    paths.push(path);
                }
            }
        }
        paths
    }
}
