use std::hash::Hash;

use tracing::debug;
use wayfinder_core::{Graph, NodeIndex, Power};

use super::min_power::{search_minimum_power, MinPowerSolution, SearchTrace};
use super::path::{constrained_dijkstra, Path};
use crate::graph::ComponentLabels;

/// Query front-end over one graph.
///
/// Component labels are computed once at construction, so every query can
/// reject node pairs in different components without searching. The router
/// holds a shared borrow: the graph cannot change while it is alive.
#[derive(Debug, Clone)]
pub struct Router<'g, N> {
    graph: &'g Graph<N>,
    components: ComponentLabels,
}

impl<'g, N> Router<'g, N>
where
    N: Clone + Eq + Hash,
{
    pub fn new(graph: &'g Graph<N>) -> Self {
        Self {
            graph,
            components: ComponentLabels::from_graph(graph),
        }
    }

    pub fn graph(&self) -> &'g Graph<N> {
        self.graph
    }

    pub fn components(&self) -> &ComponentLabels {
        &self.components
    }

    /// Indices of `src` and `dest` if both exist and share a component.
    fn endpoints(&self, src: &N, dest: &N) -> Option<(NodeIndex, NodeIndex)> {
        let src = self.graph.index_of(src)?;
        let dest = self.graph.index_of(dest)?;
        if !self.components.same_component(src, dest) {
            debug!(
                src = src.index(),
                dest = dest.index(),
                "endpoints lie in different components"
            );
            return None;
        }
        Some((src, dest))
    }

    /// Whether any power budget connects `src` and `dest`.
    pub fn connected(&self, src: &N, dest: &N) -> bool {
        self.endpoints(src, dest).is_some()
    }

    /// Minimum-distance path from `src` to `dest` using edges whose power
    /// requirement is at most `power`.
    pub fn shortest_path(&self, src: &N, dest: &N, power: Power) -> Option<Path<N>> {
        let (s, d) = self.endpoints(src, dest)?;
        if s == d {
            return Some(Path::trivial(src.clone()));
        }
        constrained_dijkstra(self.graph, s, d, power)
    }

    /// Smallest budget for which [`Router::shortest_path`] succeeds, with its path.
    pub fn minimum_power(&self, src: &N, dest: &N) -> Option<MinPowerSolution<N>> {
        self.minimum_power_traced(src, dest).map(|(solution, _)| solution)
    }

    /// [`Router::minimum_power`] plus the budgets probed along the way.
    pub fn minimum_power_traced(
        &self,
        src: &N,
        dest: &N,
    ) -> Option<(MinPowerSolution<N>, SearchTrace)> {
        let (s, d) = self.endpoints(src, dest)?;
        if s == d {
            let solution = MinPowerSolution {
                power: Power::ZERO,
                path: Path::trivial(src.clone()),
            };
            return Some((solution, SearchTrace::default()));
        }
        let (solution, trace) = search_minimum_power(self.graph, s, d);
        solution.map(|solution| (solution, trace))
    }
}
