//! Power-constrained shortest paths.
//!
//! Dijkstra's algorithm over the subgraph of edges whose power requirement is
//! within the budget. The frontier is a binary min-heap of
//! `(tentative distance, node index)`; equal distances pop in node insertion
//! order, so results are deterministic for a given graph.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use petgraph::visit::{EdgeRef, VisitMap, Visitable};
use serde::Serialize;
use tracing::trace;
use wayfinder_core::{Distance, Graph, Link, NodeIndex, Power};

/// A route through the graph, source first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path<N> {
    pub nodes: Vec<N>,
    /// Sum of edge distances along the route
    pub distance: Distance,
    /// Largest power requirement among the edges used (zero for a single node)
    pub bottleneck: Power,
}

impl<N> Path<N> {
    /// The single-node route from a node to itself.
    pub fn trivial(node: N) -> Self {
        Self {
            nodes: vec![node],
            distance: Distance::ZERO,
            bottleneck: Power::ZERO,
        }
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn source(&self) -> Option<&N> {
        self.nodes.first()
    }

    pub fn destination(&self) -> Option<&N> {
        self.nodes.last()
    }
}

/// Minimum-distance path from `src` to `dest` using only edges admitted by `power`.
///
/// Returns `None` when `dest` is never reached. The caller handles `src == dest`
/// and the component pre-check.
pub(crate) fn constrained_dijkstra<N: Clone>(
    graph: &Graph<N>,
    src: NodeIndex,
    dest: NodeIndex,
    power: Power,
) -> Option<Path<N>> {
    let topology = graph.topology();
    let node_count = topology.node_count();
    let mut finalized = topology.visit_map();
    let mut best: Vec<Option<Distance>> = vec![None; node_count];
    let mut predecessor: Vec<Option<(NodeIndex, Link)>> = vec![None; node_count];
    let mut frontier = BinaryHeap::new();

    best[src.index()] = Some(Distance::ZERO);
    frontier.push(Reverse((Distance::ZERO, src.index())));

    while let Some(Reverse((distance, idx))) = frontier.pop() {
        let node = NodeIndex::new(idx);
        if !finalized.visit(node) {
            continue;
        }
        if node == dest {
            break;
        }
        for edge in topology.edges(node) {
            let link = *edge.weight();
            if !power.admits(link.power) {
                continue;
            }
            let next = if edge.source() == node {
                edge.target()
            } else {
                edge.source()
            };
            if next == node || finalized.is_visited(&next) {
                continue;
            }
            let candidate = distance + link.distance;
            if best[next.index()].map_or(true, |current| candidate < current) {
                trace!(from = idx, to = next.index(), %candidate, "relaxed");
                best[next.index()] = Some(candidate);
                predecessor[next.index()] = Some((node, link));
                frontier.push(Reverse((candidate, next.index())));
            }
        }
    }

    if !finalized.is_visited(&dest) {
        return None;
    }

    let mut nodes = vec![graph.node(dest).clone()];
    let mut bottleneck = Power::ZERO;
    let mut current = dest;
    while current != src {
        let (previous, link) = predecessor[current.index()]?;
        bottleneck = bottleneck.max(link.power);
        nodes.push(graph.node(previous).clone());
        current = previous;
    }
    nodes.reverse();

    Some(Path {
        nodes,
        distance: best[dest.index()]?,
        bottleneck,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{n, parallel_pair, two_hop_chain};
    use wayfinder_core::NodeId;

    fn route(graph: &Graph, src: usize, dest: usize, power: u64) -> Option<Path<NodeId>> {
        let src = graph.index_of(&n(src)).unwrap();
        let dest = graph.index_of(&n(dest)).unwrap();
        constrained_dijkstra(graph, src, dest, Power(power))
    }

    #[test]
    fn test_budget_filters_edges() {
        let graph = two_hop_chain();
        assert!(route(&graph, 1, 3, 9).is_none());
        let path = route(&graph, 1, 3, 10).unwrap();
        assert_eq!(path.nodes, vec![n(1), n(2), n(3)]);
        assert_eq!(path.distance, Distance(5));
        assert_eq!(path.bottleneck, Power(10));
        assert_eq!(path.hops(), 2);
    }

    #[test]
    fn test_cheaper_parallel_edge_wins() {
        let graph = parallel_pair();
        let path = route(&graph, 1, 2, 1).unwrap();
        assert_eq!(path.nodes, vec![n(1), n(2)]);
        assert_eq!(path.distance, Distance(2));
    }

    #[test]
    fn test_prefers_short_detour_over_long_direct_edge() {
        let mut graph = Graph::new((1..=4).map(n));
        graph.add_edge(n(1), n(4), Power(1), Distance(10));
        graph.add_edge(n(1), n(2), Power(1), Distance(2));
        graph.add_edge(n(2), n(3), Power(1), Distance(2));
        graph.add_edge(n(3), n(4), Power(1), Distance(2));
        let path = route(&graph, 1, 4, 1).unwrap();
        assert_eq!(path.nodes, vec![n(1), n(2), n(3), n(4)]);
        assert_eq!(path.distance, Distance(6));
    }

    #[test]
    fn test_low_budget_takes_longer_route() {
        let mut graph = Graph::new((1..=3).map(n));
        graph.add_edge(n(1), n(3), Power(50), Distance(1));
        graph.add_edge(n(1), n(2), Power(5), Distance(4));
        graph.add_edge(n(2), n(3), Power(5), Distance(4));
        assert_eq!(route(&graph, 1, 3, 5).unwrap().distance, Distance(8));
        assert_eq!(route(&graph, 1, 3, 50).unwrap().nodes, vec![n(1), n(3)]);
    }

    #[test]
    fn test_self_loop_is_ignored() {
        let mut graph = Graph::new((1..=2).map(n));
        graph.add_edge(n(1), n(1), Power(0), Distance(0));
        graph.add_edge(n(1), n(2), Power(0), Distance(3));
        let path = route(&graph, 1, 2, 0).unwrap();
        assert_eq!(path.nodes, vec![n(1), n(2)]);
    }

    #[test]
    fn test_equal_distances_are_deterministic() {
        let mut graph = Graph::new((1..=4).map(n));
        graph.add_edge(n(1), n(3), Power(1), Distance(1));
        graph.add_edge(n(1), n(2), Power(1), Distance(1));
        graph.add_edge(n(2), n(4), Power(1), Distance(1));
        graph.add_edge(n(3), n(4), Power(1), Distance(1));
        let first = route(&graph, 1, 4, 1).unwrap();
        for _ in 0..10 {
            assert_eq!(route(&graph, 1, 4, 1).unwrap(), first);
        }
        assert_eq!(first.distance, Distance(2));
    }

    #[test]
    fn test_trivial_path() {
        let path = Path::trivial(n(4));
        assert_eq!(path.nodes, vec![n(4)]);
        assert_eq!(path.distance, Distance::ZERO);
        assert_eq!(path.hops(), 0);
        assert_eq!(path.source(), path.destination());
    }
}
