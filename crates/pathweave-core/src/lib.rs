//! Pathweave Core Library
//!
//! Generic shortest-path and traversal engines over any graph described by
//! its neighbor function: Dijkstra (single and all optimal paths), A*,
//! breadth-first, depth-first and level-synchronous traversal, built on an
//! indexed priority queue with decrease-key and tie extraction.

pub mod error;
pub mod ext;
pub mod graph;
pub mod logging;
pub mod queue;
pub mod search;
pub mod traversal;

#[cfg(test)]
mod test_support;

pub use error::{ExitCode, PathweaveError, Result};
pub use ext::GraphSearchExt;
pub use graph::{graph_fn, Cost, FnGraph, Graph, Heuristic, Node};
pub use queue::MinPriorityQueue;
pub use search::{AStar, AStarState, Dijkstra, MultiSolutionSearchResult, SearchResult};
pub use traversal::{
    depth_first_search, depth_first_search_with_visited, edge_graph_fn, logging_debugger,
    AcyclicTraversal, BfsSearch, BfsTraversal, EdgeBfsTraversal, EdgeGraph, EdgeSearchResult,
    FnEdgeGraph, NeighborEdges, SearchControl, TraversalLevel,
};
