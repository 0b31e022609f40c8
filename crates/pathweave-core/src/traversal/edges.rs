//! Breadth-first traversal over graphs whose edges carry a label.
//!
//! Some graphs are easier to describe by the moves available at a node than
//! by the nodes those moves reach: a puzzle state and its legal moves, a
//! number and the operations applied to it. An [`EdgeGraph`] lists the edges
//! out of a node and walks one edge at a time; [`EdgeBfsTraversal`] keeps the
//! edge each node was first reached through, so a solution comes back as the
//! sequence of moves that produced it.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::{Graph, Node};

/// Graph whose nodes are reached by walking labelled edges
pub trait EdgeGraph<N> {
    type Edge;

    fn edges_of(&self, node: &N) -> Vec<Self::Edge>;

    /// Node reached from `node` by taking `edge`
    fn walk_edge(&self, node: &N, edge: &Self::Edge) -> N;
}

impl<N, G> EdgeGraph<N> for &G
where
    G: EdgeGraph<N> + ?Sized,
{
    type Edge = G::Edge;

    fn edges_of(&self, node: &N) -> Vec<G::Edge> {
        (**self).edges_of(node)
    }

    fn walk_edge(&self, node: &N, edge: &G::Edge) -> N {
        (**self).walk_edge(node, edge)
    }
}

/// Closure-backed edge graph built with [`edge_graph_fn`].
#[derive(Clone)]
pub struct FnEdgeGraph<F, W> {
    edges_of: F,
    walk_edge: W,
}

pub fn edge_graph_fn<N, E, F, W>(edges_of: F, walk_edge: W) -> FnEdgeGraph<F, W>
where
    F: Fn(&N) -> Vec<E>,
    W: Fn(&N, &E) -> N,
{
    FnEdgeGraph {
        edges_of,
        walk_edge,
    }
}

impl<N, E, F, W> EdgeGraph<N> for FnEdgeGraph<F, W>
where
    F: Fn(&N) -> Vec<E>,
    W: Fn(&N, &E) -> N,
{
    type Edge = E;

    fn edges_of(&self, node: &N) -> Vec<E> {
        (self.edges_of)(node)
    }

    fn walk_edge(&self, node: &N, edge: &E) -> N {
        (self.walk_edge)(node, edge)
    }
}

/// Views a neighbor graph as an edge graph whose edges are the neighbors
#[derive(Debug, Clone, Copy)]
pub struct NeighborEdges<G>(pub G);

impl<N: Node, G: Graph<N>> EdgeGraph<N> for NeighborEdges<G> {
    type Edge = N;

    fn edges_of(&self, node: &N) -> Vec<N> {
        self.0.neighbors(node)
    }

    fn walk_edge(&self, _node: &N, edge: &N) -> N {
        edge.clone()
    }
}

/// Node found by [`EdgeBfsTraversal::search_by`], with the discovery tree
/// the traversal had built when it got there.
#[derive(Debug, Clone)]
pub struct EdgeSearchResult<N: Node, E> {
    pub node: N,
    /// For every discovered node except the start: where it was reached
    /// from, and by which edge
    pub discovered_through: HashMap<N, (N, E)>,
    pub discovered: HashSet<N>,
}

impl<N: Node, E> EdgeSearchResult<N, E> {
    /// Nodes from the start to the found node
    pub fn path(&self) -> Vec<N> {
        let mut path = vec![self.node.clone()];
        let mut current = &self.node;
        while let Some((previous, _)) = self.discovered_through.get(current) {
            path.push(previous.clone());
            current = previous;
        }
        path.reverse();
        path
    }

    /// Edges taken from the start to the found node
    pub fn edges(&self) -> Vec<&E> {
        edges_to(&self.discovered_through, &self.node)
    }
}

fn edges_to<'a, N: Node, E>(
    discovered_through: &'a HashMap<N, (N, E)>,
    node: &N,
) -> Vec<&'a E> {
    let mut edges = Vec::new();
    let mut current = node;
    while let Some((previous, edge)) = discovered_through.get(current) {
        edges.push(edge);
        current = previous;
    }
    edges.reverse();
    edges
}

/// Lazy breadth-first traversal of an [`EdgeGraph`], yielding every
/// reachable node once, starting with the start node.
pub struct EdgeBfsTraversal<N: Node, G: EdgeGraph<N>> {
    graph: G,
    queue: VecDeque<N>,
    discovered: HashSet<N>,
    discovered_through: HashMap<N, (N, G::Edge)>,
}

impl<N: Node, G: EdgeGraph<N>> EdgeBfsTraversal<N, G> {
    pub fn new(graph: G, start: N) -> Self {
        Self {
            graph,
            discovered: HashSet::from([start.clone()]),
            queue: VecDeque::from([start]),
            discovered_through: HashMap::new(),
        }
    }

    pub fn discovered_through(&self) -> &HashMap<N, (N, G::Edge)> {
        &self.discovered_through
    }

    /// Edges from the start to a node already discovered, `None` otherwise
    pub fn edges_to(&self, node: &N) -> Option<Vec<&G::Edge>> {
        self.discovered
            .contains(node)
            .then(|| edges_to(&self.discovered_through, node))
    }

    /// Run until a node satisfies `is_solution`. `None` once the reachable
    /// graph is exhausted.
    pub fn search_by(
        mut self,
        mut is_solution: impl FnMut(&N) -> bool,
    ) -> Option<EdgeSearchResult<N, G::Edge>> {
        let node = self.find(|node| is_solution(node))?;
        Some(EdgeSearchResult {
            node,
            discovered_through: self.discovered_through,
            discovered: self.discovered,
        })
    }

    pub fn search_to(self, destination: &N) -> Option<EdgeSearchResult<N, G::Edge>> {
        self.search_by(|node| node == destination)
    }
}

impl<N: Node, G: EdgeGraph<N>> Iterator for EdgeBfsTraversal<N, G> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let current = self.queue.pop_front()?;
        for edge in self.graph.edges_of(&current) {
            let node = self.graph.walk_edge(&current, &edge);
            if self.discovered.insert(node.clone()) {
                self.discovered_through.insert(node.clone(), (current.clone(), edge));
                self.queue.push_back(node);
            }
        }
        Some(current)
    }
}
