//! One-shot search entry points on any graph
//!
//! Each method builds a fresh engine, runs a single query and drops the
//! engine. Construct [`Dijkstra`] or [`AStar`] directly to reuse work
//! across several queries from the same start.

use crate::graph::{Graph, Heuristic, Node};
use crate::search::{AStar, Dijkstra, MultiSolutionSearchResult, SearchResult};
use crate::traversal::{self, AcyclicTraversal, BfsSearch};

pub trait GraphSearchExt<N: Node>: Graph<N> {
    fn dijkstra_search(&self, start: N, end: &N) -> SearchResult<N, Self::Cost> {
        Dijkstra::new(self, start).search_to(end)
    }

    fn dijkstra_search_by(
        &self,
        start: N,
        is_goal: impl FnMut(&N) -> bool,
    ) -> SearchResult<N, Self::Cost> {
        Dijkstra::new(self, start).search_by(is_goal)
    }

    fn dijkstra_search_all(&self, start: N, end: &N) -> MultiSolutionSearchResult<N, Self::Cost> {
        Dijkstra::new(self, start).search_all_to(end)
    }

    fn dijkstra_search_all_by(
        &self,
        start: N,
        is_goal: impl FnMut(&N) -> bool,
    ) -> MultiSolutionSearchResult<N, Self::Cost> {
        Dijkstra::new(self, start).search_all_by(is_goal)
    }

    fn a_star_search(
        &self,
        start: N,
        destination: &N,
        limit_steps: Option<usize>,
    ) -> SearchResult<N, Self::Cost>
    where
        Self: Heuristic<N>,
    {
        AStar::new(self, start).search(destination, limit_steps)
    }

    fn breadth_first_search(
        &self,
        start: N,
        is_solution: impl FnMut(&N) -> bool,
    ) -> BfsSearch<N> {
        BfsSearch::run(self, start, is_solution)
    }

    fn depth_first_search(&self, start: N, is_solution: impl FnMut(&N) -> bool) -> Vec<N> {
        traversal::depth_first_search(self, start, is_solution)
    }

    fn complete_acyclic_traverse(&self, start: N) -> AcyclicTraversal<N, &Self> {
        AcyclicTraversal::new(self, start)
    }
}

impl<N: Node, G: Graph<N> + ?Sized> GraphSearchExt<N> for G {}
