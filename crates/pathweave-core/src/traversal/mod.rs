//! Uninformed traversals: breadth-first, depth-first and level by level

pub mod bfs;
pub mod dfs;
pub mod edges;
pub mod levels;

pub use bfs::{logging_debugger, BfsSearch, BfsTraversal, SearchControl};
pub use dfs::{depth_first_search, depth_first_search_with_visited};
pub use edges::{
    edge_graph_fn, EdgeBfsTraversal, EdgeGraph, EdgeSearchResult, FnEdgeGraph, NeighborEdges,
};
pub use levels::{AcyclicTraversal, TraversalLevel};
