//! Depth-first search with an explicit stack

use std::collections::HashSet;
use std::vec;

use crate::graph::{Graph, Node};

/// Path from `start` to the first node found by depth-first exploration
/// that satisfies `is_solution`; empty if there is none.
pub fn depth_first_search<N, G>(
    graph: G,
    start: N,
    is_solution: impl FnMut(&N) -> bool,
) -> Vec<N>
where
    N: Node,
    G: Graph<N>,
{
    depth_first_search_with_visited(graph, start, is_solution).0
}

/// Like [`depth_first_search`], also returning every node expanded on the
/// way. The solution itself is not counted as visited.
///
/// Neighbors are explored in the order the graph lists them, each subtree
/// completely before the next sibling is looked at.
pub fn depth_first_search_with_visited<N, G>(
    graph: G,
    start: N,
    mut is_solution: impl FnMut(&N) -> bool,
) -> (Vec<N>, HashSet<N>)
where
    N: Node,
    G: Graph<N>,
{
    let mut visited = HashSet::new();
    if is_solution(&start) {
        return (vec![start], visited);
    }

    // Each frame is a node on the current path and its unexplored neighbors
    visited.insert(start.clone());
    let neighbors = graph.neighbors(&start).into_iter();
    let mut stack: Vec<(N, vec::IntoIter<N>)> = vec![(start, neighbors)];
    while let Some((_, neighbors)) = stack.last_mut() {
        let Some(next) = neighbors.next() else {
            stack.pop();
            continue;
        };
        if visited.contains(&next) {
            continue;
        }
        if is_solution(&next) {
            let mut path: Vec<N> = stack.into_iter().map(|(node, _)| node).collect();
            path.push(next);
            return (path, visited);
        }
        visited.insert(next.clone());
        let neighbors = graph.neighbors(&next).into_iter();
        stack.push((next, neighbors));
    }
    (Vec::new(), visited)
}
