//! Shortest-path engines and the results they produce

pub mod astar;
pub mod dijkstra;
pub mod result;

pub use astar::{AStar, AStarState};
pub use dijkstra::Dijkstra;
pub use result::{MultiSolutionSearchResult, SearchResult};
