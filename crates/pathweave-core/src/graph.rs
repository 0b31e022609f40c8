//! Graph contract consumed by every search engine
//!
//! A graph is described by neighborhood only: the engines never see an
//! edge list, they ask for the neighbors of a node when they need them.
//! This keeps implicit and infinite graphs (puzzle state spaces) on the same
//! footing as explicit adjacency maps.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

use num_traits::{One, Zero};

/// Numeric type usable as edge cost and path distance.
///
/// Costs must be non-negative for Dijkstra and A* to be correct; this is
/// not checked.
pub trait Cost: Copy + Ord + Debug + Zero + One + Add<Output = Self> {}

impl<T> Cost for T where T: Copy + Ord + Debug + Zero + One + Add<Output = T> {}

/// Bound required of every node type.
pub trait Node: Clone + Eq + Hash {}

impl<T> Node for T where T: Clone + Eq + Hash {}

/// Trait for providing neighborhood and edge costs
pub trait Graph<N> {
    type Cost: Cost;

    fn neighbors(&self, node: &N) -> Vec<N>;

    /// Cost of moving from `from` to its neighbor `to`; unit cost by default.
    fn cost(&self, _from: &N, _to: &N) -> Self::Cost {
        Self::Cost::one()
    }
}

/// A graph that can estimate the remaining cost towards a destination.
///
/// Estimates must never overestimate the true remaining cost (admissible)
/// for A* to return optimal paths. Inadmissible estimates still yield valid,
/// possibly longer paths.
pub trait Heuristic<N>: Graph<N> {
    fn cost_estimation(&self, from: &N, to: &N) -> Self::Cost;

    /// Estimate towards whichever goal a predicate search is looking for.
    /// Zero by default, which makes A* behave like Dijkstra.
    fn cost_estimation_to_any(&self, _from: &N) -> Self::Cost {
        Self::Cost::zero()
    }
}

impl<N, G> Graph<N> for &G
where
    G: Graph<N> + ?Sized,
{
    type Cost = G::Cost;

    fn neighbors(&self, node: &N) -> Vec<N> {
        (**self).neighbors(node)
    }

    fn cost(&self, from: &N, to: &N) -> Self::Cost {
        (**self).cost(from, to)
    }
}

impl<N, G> Heuristic<N> for &G
where
    G: Heuristic<N> + ?Sized,
{
    fn cost_estimation(&self, from: &N, to: &N) -> Self::Cost {
        (**self).cost_estimation(from, to)
    }

    fn cost_estimation_to_any(&self, from: &N) -> Self::Cost {
        (**self).cost_estimation_to_any(from)
    }
}

/// Adjacency maps are graphs with unit edge costs.
impl<N: Node> Graph<N> for HashMap<N, HashSet<N>> {
    type Cost = u32;

    fn neighbors(&self, node: &N) -> Vec<N> {
        self.get(node)
            .map(|neighbors| neighbors.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl<N: Node> Graph<N> for HashMap<N, Vec<N>> {
    type Cost = u32;

    fn neighbors(&self, node: &N) -> Vec<N> {
        self.get(node).cloned().unwrap_or_default()
    }
}

/// Closure-backed graph built with [`graph_fn`].
#[derive(Clone)]
pub struct FnGraph<F, C, H = NoEstimate> {
    neighbors: F,
    cost: C,
    estimation: H,
}

/// Marker for an [`FnGraph`] without a heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEstimate;

/// Cost function used until [`FnGraph::with_cost`] replaces it.
pub type UnitCost<N> = fn(&N, &N) -> u32;

fn unit_cost<N>(_from: &N, _to: &N) -> u32 {
    1
}

/// Build a graph from a neighbor function. Edges cost `1` until
/// [`FnGraph::with_cost`] supplies a cost function.
pub fn graph_fn<N, F>(neighbors: F) -> FnGraph<F, UnitCost<N>>
where
    F: Fn(&N) -> Vec<N>,
{
    FnGraph {
        neighbors,
        cost: unit_cost::<N>,
        estimation: NoEstimate,
    }
}

impl<F, C, H> FnGraph<F, C, H> {
    pub fn with_cost<N, P, C2>(self, cost: C2) -> FnGraph<F, C2, H>
    where
        C2: Fn(&N, &N) -> P,
        P: Cost,
    {
        FnGraph {
            neighbors: self.neighbors,
            cost,
            estimation: self.estimation,
        }
    }

    /// Attach a heuristic. It receives `None` as destination when A* runs
    /// against a goal predicate instead of a fixed node.
    pub fn with_estimation<N, P, H2>(self, estimation: H2) -> FnGraph<F, C, H2>
    where
        H2: Fn(&N, Option<&N>) -> P,
        P: Cost,
    {
        FnGraph {
            neighbors: self.neighbors,
            cost: self.cost,
            estimation,
        }
    }
}

impl<N, F, C, P, H> Graph<N> for FnGraph<F, C, H>
where
    F: Fn(&N) -> Vec<N>,
    C: Fn(&N, &N) -> P,
    P: Cost,
{
    type Cost = P;

    fn neighbors(&self, node: &N) -> Vec<N> {
        (self.neighbors)(node)
    }

    fn cost(&self, from: &N, to: &N) -> P {
        (self.cost)(from, to)
    }
}

impl<N, F, C, P, H> Heuristic<N> for FnGraph<F, C, H>
where
    F: Fn(&N) -> Vec<N>,
    C: Fn(&N, &N) -> P,
    P: Cost,
    H: Fn(&N, Option<&N>) -> P,
{
    fn cost_estimation(&self, from: &N, to: &N) -> P {
        (self.estimation)(from, Some(to))
    }

    fn cost_estimation_to_any(&self, from: &N) -> P {
        (self.estimation)(from, None)
    }
}
