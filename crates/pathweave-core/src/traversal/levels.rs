//! Level-synchronous traversal that only remembers two levels

use std::collections::HashSet;
use std::iter::FusedIterator;
use std::mem;

use serde::Serialize;

use crate::graph::{Graph, Node};

/// One level yielded by [`AcyclicTraversal`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalLevel<N: Node> {
    pub level: usize,
    pub nodes_on_level: HashSet<N>,
    pub nodes_on_previous_level: HashSet<N>,
}

/// Lazy sequence of levels reachable from a start node.
///
/// The next level holds every neighbor of the current level that is on
/// neither the current nor the previous level. Nothing older is remembered,
/// so a cycle longer than two levels is walked again and the iterator does
/// not end on such graphs. Construct a new one to restart.
pub struct AcyclicTraversal<N: Node, G: Graph<N>> {
    graph: G,
    level: usize,
    previous: HashSet<N>,
    current: HashSet<N>,
    /// Level to yield next; `None` until computed from `current`
    upcoming: Option<HashSet<N>>,
}

impl<N: Node, G: Graph<N>> AcyclicTraversal<N, G> {
    pub fn new(graph: G, start: N) -> Self {
        Self {
            graph,
            level: 0,
            previous: HashSet::new(),
            current: HashSet::new(),
            upcoming: Some(HashSet::from([start])),
        }
    }

    fn expand_current(&self) -> HashSet<N> {
        self.current
            .iter()
            .flat_map(|node| self.graph.neighbors(node))
            .filter(|neighbor| {
                !self.current.contains(neighbor) && !self.previous.contains(neighbor)
            })
            .collect()
    }
}

impl<N: Node, G: Graph<N>> Iterator for AcyclicTraversal<N, G> {
    type Item = TraversalLevel<N>;

    fn next(&mut self) -> Option<TraversalLevel<N>> {
        let upcoming = match self.upcoming.take() {
            Some(upcoming) => upcoming,
            None => self.expand_current(),
        };
        if upcoming.is_empty() {
            self.upcoming = Some(upcoming);
            return None;
        }

        self.previous = mem::replace(&mut self.current, upcoming);
        let item = TraversalLevel {
            level: self.level,
            nodes_on_level: self.current.clone(),
            nodes_on_previous_level: self.previous.clone(),
        };
        self.level += 1;
        Some(item)
    }
}

impl<N: Node, G: Graph<N>> FusedIterator for AcyclicTraversal<N, G> {}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::test_support::open_grid;

    #[test]
    fn test_levels_of_a_tree() {
        let graph: HashMap<u8, Vec<u8>> =
            HashMap::from([(1, vec![2, 3]), (2, vec![4]), (3, vec![4, 5])]);
        let levels: Vec<_> = AcyclicTraversal::new(&graph, 1).collect();

        assert_eq!(levels.len(), 3);
        assert_eq!(levels[0].nodes_on_level, HashSet::from([1]));
        assert!(levels[0].nodes_on_previous_level.is_empty());
        assert_eq!(levels[1].nodes_on_level, HashSet::from([2, 3]));
        assert_eq!(levels[2].level, 2);
        assert_eq!(levels[2].nodes_on_level, HashSet::from([4, 5]));
        assert_eq!(levels[2].nodes_on_previous_level, HashSet::from([2, 3]));
    }

    #[test]
    fn test_undirected_edges_do_not_bounce_back() {
        // Going back to the previous level is excluded
        let graph: HashMap<u8, Vec<u8>> =
            HashMap::from([(1, vec![2]), (2, vec![1, 3]), (3, vec![2])]);
        let sizes: Vec<usize> = AcyclicTraversal::new(&graph, 1)
            .map(|level| level.nodes_on_level.len())
            .collect();
        assert_eq!(sizes, vec![1, 1, 1]);
    }

    #[test]
    fn test_grid_levels_are_diagonals() {
        let levels: Vec<_> = AcyclicTraversal::new(open_grid(3), (0, 0)).collect();
        let sizes: Vec<usize> = levels.iter().map(|l| l.nodes_on_level.len()).collect();
        assert_eq!(sizes, vec![1, 2, 3, 2, 1]);
        assert!(levels
            .iter()
            .all(|l| l.nodes_on_level.iter().all(|(r, c)| r + c == l.level as i32)));
    }

    #[test]
    fn test_long_cycle_is_revisited() {
        // A directed triangle reappears every third level
        let graph: HashMap<u8, Vec<u8>> =
            HashMap::from([(0, vec![1]), (1, vec![2]), (2, vec![0])]);
        let mut traversal = AcyclicTraversal::new(&graph, 0);
        let nodes: Vec<HashSet<u8>> = traversal
            .by_ref()
            .take(4)
            .map(|level| level.nodes_on_level)
            .collect();
        assert_eq!(nodes[3], HashSet::from([0]));
        assert!(traversal.next().is_some());
    }

    #[test]
    fn test_exhausted_traversal_stays_exhausted() {
        let graph: HashMap<u8, Vec<u8>> = HashMap::new();
        let mut traversal = AcyclicTraversal::new(&graph, 7);
        assert_eq!(traversal.next().map(|l| l.level), Some(0));
        assert!(traversal.next().is_none());
        assert!(traversal.next().is_none());
    }
}
