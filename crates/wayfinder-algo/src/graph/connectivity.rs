//! Connected components, ignoring power requirements.
//!
//! Components are labelled with an explicit work-list depth-first traversal so
//! that graphs with long chains do not hit call-stack limits. Every node is
//! pushed at most once: it is marked visited at push time, not at pop time.

use std::collections::BTreeSet;
use std::fmt::Display;
use std::hash::Hash;

use petgraph::visit::{VisitMap, Visitable};
use serde::Serialize;
use wayfinder_core::{Graph, NodeIndex};

/// Component label for every node of a graph, indexed by [`NodeIndex`].
#[derive(Debug, Clone)]
pub struct ComponentLabels {
    labels: Vec<usize>,
    members: Vec<Vec<NodeIndex>>,
}

impl ComponentLabels {
    /// Label every node of `graph`.
    ///
    /// Explorations start from each unvisited node in node order, so component
    /// `0` always contains the first node.
    pub fn from_graph<N>(graph: &Graph<N>) -> Self {
        let topology = graph.topology();
        let mut visited = topology.visit_map();
        let mut labels = vec![usize::MAX; topology.node_count()];
        let mut members = Vec::new();
        let mut stack = Vec::new();

        for start in topology.node_indices() {
            if !visited.visit(start) {
                continue;
            }
            let label = members.len();
            let mut component = Vec::new();
            stack.push(start);
            while let Some(node) = stack.pop() {
                labels[node.index()] = label;
                component.push(node);
                for neighbor in topology.neighbors(node) {
                    if visited.visit(neighbor) {
                        stack.push(neighbor);
                    }
                }
            }
            members.push(component);
        }

        Self { labels, members }
    }

    /// Number of components.
    pub fn count(&self) -> usize {
        self.members.len()
    }

    /// Component of the node at `idx`.
    pub fn label(&self, idx: NodeIndex) -> usize {
        self.labels[idx.index()]
    }

    /// Whether two nodes are joined by some path when power is unbounded.
    pub fn same_component(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.label(a) == self.label(b)
    }

    /// Node indices of each component, in traversal order.
    pub fn groups(&self) -> &[Vec<NodeIndex>] {
        &self.members
    }
}

/// Partition of the node set into connected components.
///
/// Neither the order of components nor the order of nodes inside one is
/// meaningful; compare results with [`connected_components_set`].
pub fn connected_components<N: Clone>(graph: &Graph<N>) -> Vec<Vec<N>> {
    ComponentLabels::from_graph(graph)
        .groups()
        .iter()
        .map(|group| group.iter().map(|&idx| graph.node(idx).clone()).collect())
        .collect()
}

/// [`connected_components`] as a set of sets.
pub fn connected_components_set<N: Clone + Ord>(graph: &Graph<N>) -> BTreeSet<BTreeSet<N>> {
    connected_components(graph)
        .into_iter()
        .map(|component| component.into_iter().collect())
        .collect()
}

/// Whether `a` and `b` are connected ignoring power. Absent nodes are never connected.
pub fn are_connected<N: Clone + Eq + Hash>(graph: &Graph<N>, a: &N, b: &N) -> bool {
    match (graph.index_of(a), graph.index_of(b)) {
        (Some(a), Some(b)) => ComponentLabels::from_graph(graph).same_component(a, b),
        _ => false,
    }
}

/// Island summary used in `graph islands`.
#[derive(Debug, Serialize)]
pub struct IslandSummary {
    pub island_id: usize,
    pub node_count: usize,
}

/// Node assignment info for `--emit` output so every node is tagged with its island.
#[derive(Debug, Serialize)]
pub struct NodeAssignment {
    pub node_index: usize,
    pub label: String,
    pub island_id: usize,
}

/// Aggregated island analysis result.
#[derive(Debug, Serialize)]
pub struct IslandAnalysis {
    pub islands: Vec<IslandSummary>,
    pub assignments: Vec<NodeAssignment>,
}

/// Labels connected components and pulls island metadata for CLI reporting.
pub fn find_islands<N: Display>(graph: &Graph<N>) -> IslandAnalysis {
    let components = ComponentLabels::from_graph(graph);
    let islands = components
        .groups()
        .iter()
        .enumerate()
        .map(|(island_id, group)| IslandSummary {
            island_id,
            node_count: group.len(),
        })
        .collect();
    let assignments = graph
        .topology()
        .node_indices()
        .map(|idx| NodeAssignment {
            node_index: idx.index(),
            label: graph.node(idx).to_string(),
            island_id: components.label(idx),
        })
        .collect();
    IslandAnalysis {
        islands,
        assignments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{disconnected_pairs, n, two_hop_chain};
    use wayfinder_core::{Distance, NodeId, Power};

    #[test]
    fn test_components_set_disconnected() {
        let graph = disconnected_pairs();
        let expected: BTreeSet<BTreeSet<NodeId>> = [
            [n(1), n(2)].into_iter().collect(),
            [n(3), n(4)].into_iter().collect(),
        ]
        .into_iter()
        .collect();
        assert_eq!(connected_components_set(&graph), expected);
    }

    #[test]
    fn test_components_ignore_power() {
        let graph = two_hop_chain();
        let components = connected_components(&graph);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), 3);
    }

    #[test]
    fn test_isolated_nodes_are_singletons() {
        let graph = Graph::new((1..=3).map(n));
        let components = connected_components_set(&graph);
        assert_eq!(components.len(), 3);
        assert!(components.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn test_empty_graph_has_no_components() {
        let graph: Graph = Graph::default();
        assert!(connected_components(&graph).is_empty());
        assert_eq!(ComponentLabels::from_graph(&graph).count(), 0);
    }

    #[test]
    fn test_long_chain_does_not_recurse() {
        let count = 200_000;
        let mut graph = Graph::new((1..=count).map(n));
        for i in 1..count {
            graph.add_edge(n(i), n(i + 1), Power(1), Distance(1));
        }
        let components = connected_components(&graph);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), count);
    }

    #[test]
    fn test_self_loop_and_parallel_edges() {
        let mut graph = Graph::new((1..=3).map(n));
        graph.add_edge(n(1), n(1), Power(1), Distance(1));
        graph.add_edge(n(1), n(2), Power(1), Distance(1));
        graph.add_edge(n(2), n(1), Power(1), Distance(1));
        let labels = ComponentLabels::from_graph(&graph);
        assert_eq!(labels.count(), 2);
        let total: usize = labels.groups().iter().map(Vec::len).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_are_connected() {
        let graph = disconnected_pairs();
        assert!(are_connected(&graph, &n(1), &n(2)));
        assert!(!are_connected(&graph, &n(1), &n(3)));
        assert!(!are_connected(&graph, &n(1), &n(99)));
        assert!(are_connected(&graph, &n(3), &n(3)));
    }

    #[test]
    fn test_find_islands() {
        let analysis = find_islands(&disconnected_pairs());
        assert_eq!(analysis.islands.len(), 2);
        assert_eq!(analysis.islands[0].node_count, 2);
        assert_eq!(analysis.assignments.len(), 4);
        assert_eq!(analysis.assignments[0].label, "1");
        assert_eq!(analysis.assignments[0].island_id, 0);
        assert_eq!(analysis.assignments[2].island_id, 1);
    }
}
