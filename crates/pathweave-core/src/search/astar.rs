use std::collections::{HashMap, HashSet};

use num_traits::Zero;
use tracing::{debug, trace};

use crate::graph::{Heuristic, Node};
use crate::log_search_stats;
use crate::logging::SearchStats;
use crate::queue::MinPriorityQueue;
use crate::search::result::SearchResult;

/// Read-only view of an A* instance, handed to the expansion hook.
#[derive(Debug)]
pub struct AStarState<'a, N, P> {
    /// Node the open list would yield next
    pub next: Option<&'a N>,
    pub dist: &'a HashMap<N, P>,
    pub prev: &'a HashMap<N, N>,
}

type ExpandHook<'h, N, P> = Box<dyn FnMut(&AStarState<'_, N, P>, &N) + 'h>;

/// Heuristic-guided shortest paths from one or more start nodes.
///
/// The open list is keyed by `f = g + h`. Closed nodes are final and are
/// never reopened, so optimality needs a consistent heuristic; an
/// inadmissible one still yields valid, possibly longer, paths.
pub struct AStar<'h, N: Node, G: Heuristic<N>> {
    graph: G,
    dist: HashMap<N, G::Cost>,
    prev: HashMap<N, N>,
    open: MinPriorityQueue<N, G::Cost>,
    closed: HashSet<N>,
    on_expand: Option<ExpandHook<'h, N, G::Cost>>,
    stats: SearchStats,
}

/// What the current query is heading for
enum Target<'a, N> {
    Node(&'a N),
    Any,
}

impl<'h, N: Node, G: Heuristic<N>> AStar<'h, N, G> {
    pub fn new(graph: G, start: N) -> Self {
        Self::with_starts(graph, [start])
    }

    /// Search from several start nodes at once, all at distance zero.
    pub fn with_starts(graph: G, starts: impl IntoIterator<Item = N>) -> Self {
        let starts: Vec<N> = starts.into_iter().collect();
        let zero = G::Cost::zero();
        Self {
            graph,
            dist: starts.iter().map(|s| (s.clone(), zero)).collect(),
            prev: HashMap::new(),
            open: starts.into_iter().map(|s| (s, zero)).collect(),
            closed: HashSet::new(),
            on_expand: None,
            stats: SearchStats::default(),
        }
    }

    /// Call `hook` right before every node expansion.
    pub fn with_expand_hook(
        mut self,
        hook: impl FnMut(&AStarState<'_, N, G::Cost>, &N) + 'h,
    ) -> Self {
        self.on_expand = Some(Box::new(hook));
        self
    }

    pub fn state(&self) -> AStarState<'_, N, G::Cost> {
        AStarState {
            next: self.open.peek_or_none(),
            dist: &self.dist,
            prev: &self.prev,
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Shortest path to `destination`, giving up after `limit_steps` nodes
    /// have been taken from the open list.
    #[tracing::instrument(level = "debug", skip_all, fields(limit_steps = ?limit_steps))]
    pub fn search(
        &mut self,
        destination: &N,
        limit_steps: Option<usize>,
    ) -> SearchResult<N, G::Cost> {
        if self.closed.contains(destination) {
            debug!("astar_memoized");
            return self.result(Some(destination.clone()));
        }
        self.run(Target::Node(destination), |node| node == destination, limit_steps)
    }

    /// Shortest path to the nearest node accepted by `is_goal`, estimated
    /// with [`Heuristic::cost_estimation_to_any`].
    #[tracing::instrument(level = "debug", skip_all, fields(limit_steps = ?limit_steps))]
    pub fn search_by(
        &mut self,
        mut is_goal: impl FnMut(&N) -> bool,
        limit_steps: Option<usize>,
    ) -> SearchResult<N, G::Cost> {
        let memoized = self
            .closed
            .iter()
            .filter(|&node| is_goal(node))
            .filter_map(|node| self.dist.get(node).map(|d| (node, *d)))
            .min_by_key(|(_, d)| *d)
            .map(|(node, _)| node.clone());
        if memoized.is_some() {
            debug!("astar_memoized");
            return self.result(memoized);
        }
        self.run(Target::Any, is_goal, limit_steps)
    }

    fn run(
        &mut self,
        target: Target<'_, N>,
        mut is_goal: impl FnMut(&N) -> bool,
        limit_steps: Option<usize>,
    ) -> SearchResult<N, G::Cost> {
        self.reprioritize(&target);

        let mut steps = 0;
        while limit_steps.is_none_or(|limit| steps < limit) {
            steps += 1;
            let Some(current) = self.open.extract_min_or_none() else {
                break;
            };
            self.stats.record_pop();
            self.closed.insert(current.clone());
            // A goal is expanded as well, so the open list stays complete
            // for later queries against this instance
            self.expand(&current, &target);
            if is_goal(&current) {
                debug!(distance = ?self.dist.get(&current), steps, "astar_found");
                log_search_stats!(self.stats, "astar");
                return self.result(Some(current));
            }
        }

        debug!(steps, open = self.open.len(), "astar_not_found");
        log_search_stats!(self.stats, "astar");
        self.result(None)
    }

    fn expand(&mut self, current: &N, target: &Target<'_, N>) {
        if let Some(hook) = self.on_expand.as_mut() {
            let state = AStarState {
                next: self.open.peek_or_none(),
                dist: &self.dist,
                prev: &self.prev,
            };
            hook(&state, current);
        }

        self.stats.record_expansion();
        let Some(&g) = self.dist.get(current) else {
            return;
        };
        for successor in self.graph.neighbors(current) {
            if self.closed.contains(&successor) {
                continue;
            }
            let tentative = g + self.graph.cost(current, &successor);
            let known = self.dist.get(&successor);
            if self.open.contains(&successor) && known.is_some_and(|known| *known <= tentative) {
                continue;
            }

            trace!(g = ?tentative, "open");
            self.stats.record_relaxation();
            let f = tentative + self.estimate(&successor, target);
            self.prev.insert(successor.clone(), current.clone());
            self.dist.insert(successor.clone(), tentative);
            self.open.insert_or_update(successor, f);
        }
    }

    fn estimate(&self, node: &N, target: &Target<'_, N>) -> G::Cost {
        match target {
            Target::Node(destination) => self.graph.cost_estimation(node, destination),
            Target::Any => self.graph.cost_estimation_to_any(node),
        }
    }

    /// Open-list priorities from an earlier query were estimated towards
    /// its own destination; recompute them for the current one.
    fn reprioritize(&mut self, target: &Target<'_, N>) {
        let open: Vec<N> = self.open.iter().cloned().collect();
        for node in open {
            if let Some(&g) = self.dist.get(&node) {
                let f = g + self.estimate(&node, target);
                self.open.insert_or_update(node, f);
            }
        }
    }

    fn result(&self, solution: Option<N>) -> SearchResult<N, G::Cost> {
        SearchResult::new(solution, self.dist.clone(), self.prev.clone())
    }
}
