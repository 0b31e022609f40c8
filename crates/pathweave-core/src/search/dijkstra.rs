use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::graph::{Graph, Node};
use crate::log_search_stats;
use crate::logging::SearchStats;
use crate::queue::MinPriorityQueue;
use crate::search::result::{MultiSolutionSearchResult, SearchResult};

/// Distance, predecessor and frontier state of one search mode
#[derive(Debug, Clone)]
struct SearchState<N, P, Prev> {
    dist: HashMap<N, P>,
    prev: HashMap<N, Prev>,
    queue: MinPriorityQueue<N, P>,
    /// Nodes removed from the queue; their distance is final
    settled: HashSet<N>,
}

impl<N: Node, P: crate::graph::Cost, Prev> SearchState<N, P, Prev> {
    fn new(start: &N) -> Self {
        let mut queue = MinPriorityQueue::new();
        queue.insert_or_update(start.clone(), P::zero());
        Self {
            dist: HashMap::from([(start.clone(), P::zero())]),
            prev: HashMap::new(),
            queue,
            settled: HashSet::new(),
        }
    }

    /// Settled nodes accepted by `is_goal` that share the least distance
    fn settled_goals(&self, is_goal: &mut impl FnMut(&N) -> bool) -> Vec<N> {
        let matches: Vec<(&N, P)> = self
            .settled
            .iter()
            .filter(|&node| is_goal(node))
            .filter_map(|node| self.dist.get(node).map(|d| (node, *d)))
            .collect();
        let Some(min) = matches.iter().map(|(_, d)| *d).min() else {
            return Vec::new();
        };
        matches
            .into_iter()
            .filter(|(_, d)| *d == min)
            .map(|(node, _)| node.clone())
            .collect()
    }
}

/// Single-source shortest paths with Dijkstra's algorithm.
///
/// An instance is bound to one start node and may be queried repeatedly.
/// Distances and predecessors accumulate across queries, so later queries
/// reuse all work done by earlier ones. Single-solution and multi-solution
/// queries keep separate state.
pub struct Dijkstra<N: Node, G: Graph<N>> {
    graph: G,
    start: N,
    single: SearchState<N, G::Cost, N>,
    multi: SearchState<N, G::Cost, Vec<N>>,
    stats: SearchStats,
}

impl<N: Node, G: Graph<N>> Dijkstra<N, G> {
    pub fn new(graph: G, start: N) -> Self {
        Self {
            single: SearchState::new(&start),
            multi: SearchState::new(&start),
            graph,
            start,
            stats: SearchStats::default(),
        }
    }

    pub fn start(&self) -> &N {
        &self.start
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Distances discovered so far by single-solution queries
    pub fn distances(&self) -> &HashMap<N, G::Cost> {
        &self.single.dist
    }

    /// Shortest path to `end`
    pub fn search_to(&mut self, end: &N) -> SearchResult<N, G::Cost> {
        self.search_by(|node| node == end)
    }

    /// Explore the whole reachable graph. The result has no solution but
    /// carries every reachable distance.
    pub fn search_exhaustive(&mut self) -> SearchResult<N, G::Cost> {
        self.search_by(|_| false)
    }

    /// Shortest path to the nearest node accepted by `is_goal`
    #[tracing::instrument(level = "debug", skip_all, fields(mode = "single"))]
    pub fn search_by(&mut self, mut is_goal: impl FnMut(&N) -> bool) -> SearchResult<N, G::Cost> {
        if let Some(found) = self.single.settled_goals(&mut is_goal).into_iter().next() {
            debug!("dijkstra_memoized");
            return self.single_result(Some(found));
        }

        let state = &mut self.single;
        while let Some((u, priority)) = state.queue.extract_min_with_priority_or_none() {
            self.stats.record_pop();
            trace!(distance = ?priority, "settle");
            state.settled.insert(u.clone());
            // Goals are expanded too, so later queries see their neighbors
            Self::relax_single(&self.graph, state, &mut self.stats, &u, priority);
            if is_goal(&u) {
                debug!(distance = ?priority, "dijkstra_found");
                log_search_stats!(self.stats, "dijkstra");
                return self.single_result(Some(u));
            }
        }

        debug!(reachable = state.dist.len(), "dijkstra_exhausted");
        log_search_stats!(self.stats, "dijkstra");
        self.single_result(None)
    }

    /// Every shortest path to `end`
    pub fn search_all_to(&mut self, end: &N) -> MultiSolutionSearchResult<N, G::Cost> {
        self.search_all_by(|node| node == end)
    }

    pub fn search_all_exhaustive(&mut self) -> MultiSolutionSearchResult<N, G::Cost> {
        self.search_all_by(|_| false)
    }

    /// Every nearest node accepted by `is_goal`, with every shortest path to each.
    #[tracing::instrument(level = "debug", skip_all, fields(mode = "multi"))]
    pub fn search_all_by(
        &mut self,
        mut is_goal: impl FnMut(&N) -> bool,
    ) -> MultiSolutionSearchResult<N, G::Cost> {
        let memoized = self.multi.settled_goals(&mut is_goal);
        if let Some(distance) = memoized.first().and_then(|n| self.multi.dist.get(n)).copied() {
            let state = &mut self.multi;
            let mut solutions = Self::settle_tied_goals(
                &self.graph,
                state,
                &mut self.stats,
                distance,
                &mut is_goal,
                Vec::new(),
            );
            solutions.extend(memoized);
            debug!(solutions = solutions.len(), "dijkstra_memoized");
            return self.multi_result(solutions.into_iter().collect());
        }

        let state = &mut self.multi;
        while let Some((u, priority)) = state.queue.extract_min_with_priority_or_none() {
            self.stats.record_pop();
            trace!(distance = ?priority, "settle");
            state.settled.insert(u.clone());
            if !is_goal(&u) {
                Self::relax_multi(&self.graph, state, &mut self.stats, &u, priority);
                continue;
            }

            // Nodes tied with `u` may be goals too
            let solutions = Self::settle_tied_goals(
                &self.graph,
                state,
                &mut self.stats,
                priority,
                &mut is_goal,
                vec![u],
            );
            debug!(distance = ?priority, solutions = solutions.len(), "dijkstra_found");
            log_search_stats!(self.stats, "dijkstra_all");
            return self.multi_result(solutions.into_iter().collect());
        }

        debug!(reachable = state.dist.len(), "dijkstra_exhausted");
        log_search_stats!(self.stats, "dijkstra_all");
        self.multi_result(HashSet::new())
    }

    /// Settle and expand `found`, then keep draining queued goals tied at
    /// `distance`. Tied non-goals go back into the queue untouched. Returns
    /// every goal settled here.
    fn settle_tied_goals(
        graph: &G,
        state: &mut SearchState<N, G::Cost, Vec<N>>,
        stats: &mut SearchStats,
        distance: G::Cost,
        is_goal: &mut impl FnMut(&N) -> bool,
        mut found: Vec<N>,
    ) -> Vec<N> {
        let mut solutions = Vec::new();
        let mut deferred = Vec::new();
        loop {
            for goal in found.drain(..) {
                state.settled.insert(goal.clone());
                Self::relax_multi(graph, state, stats, &goal, distance);
                solutions.push(goal);
            }
            if state.queue.min_priority() != Some(&distance) {
                break;
            }
            for tie in state.queue.extract_all_min() {
                if is_goal(&tie) {
                    found.push(tie);
                } else {
                    deferred.push(tie);
                }
            }
            if found.is_empty() {
                break;
            }
        }
        for node in deferred {
            state.queue.insert_or_update(node, distance);
        }
        solutions
    }

    /// Relax every edge out of the settled node `u`, keeping one predecessor
    fn relax_single(
        graph: &G,
        state: &mut SearchState<N, G::Cost, N>,
        stats: &mut SearchStats,
        u: &N,
        distance: G::Cost,
    ) {
        stats.record_expansion();
        for v in graph.neighbors(u) {
            let alt = distance + graph.cost(u, &v);
            if state.dist.get(&v).is_none_or(|known| alt < *known) {
                stats.record_relaxation();
                state.dist.insert(v.clone(), alt);
                state.prev.insert(v.clone(), u.clone());
                state.queue.insert_or_update(v, alt);
            }
        }
    }

    /// Relax every edge out of the settled node `u`, keeping every
    /// predecessor on an equally short path
    fn relax_multi(
        graph: &G,
        state: &mut SearchState<N, G::Cost, Vec<N>>,
        stats: &mut SearchStats,
        u: &N,
        distance: G::Cost,
    ) {
        stats.record_expansion();
        for v in graph.neighbors(u) {
            let alt = distance + graph.cost(u, &v);
            match state.dist.get(&v) {
                Some(known) if alt > *known => {}
                // A settled node's predecessors are final; with zero-cost
                // edges a late tie would close a cycle
                Some(_) if state.settled.contains(&v) => {}
                Some(known) if alt == *known => {
                    // The start has no predecessor list and never gets one
                    if let Some(predecessors) = state.prev.get_mut(&v) {
                        if !predecessors.contains(u) {
                            stats.record_relaxation();
                            predecessors.push(u.clone());
                        }
                    }
                }
                _ => {
                    stats.record_relaxation();
                    state.dist.insert(v.clone(), alt);
                    state.prev.insert(v.clone(), vec![u.clone()]);
                    state.queue.insert_or_update(v, alt);
                }
            }
        }
    }

    fn single_result(&self, solution: Option<N>) -> SearchResult<N, G::Cost> {
        SearchResult::new(solution, self.single.dist.clone(), self.single.prev.clone())
    }

    fn multi_result(&self, solutions: HashSet<N>) -> MultiSolutionSearchResult<N, G::Cost> {
        MultiSolutionSearchResult::new(solutions, self.multi.dist.clone(), self.multi.prev.clone())
    }
}
