//! # wayfinder-core: Capacitated Graph Store
//!
//! Provides the graph representation used by every routing query.
//!
//! ## Design Philosophy
//!
//! Graphs are modeled as **undirected multigraphs** where:
//! - **Nodes**: opaque identifiers (any `Clone + Eq + Hash` value; the loader uses [`NodeId`])
//! - **Edges**: [`Link`]s carrying a minimum traversal [`Power`] and a [`Distance`]
//!
//! Parallel edges between the same pair of nodes are kept as separate links, so
//! the cheaper one wins naturally during path search. The store is built once and
//! then read by the algorithms in `wayfinder-algo` through shared borrows.
//!
//! ## Quick Start
//!
//! ```rust
//! use wayfinder_core::*;
//!
//! let mut graph = Graph::new((1..=3).map(NodeId::new));
//! graph.add_edge(NodeId::new(1), NodeId::new(2), Power(5), Distance(2));
//! graph.add_edge(NodeId::new(2), NodeId::new(3), Power(10), Distance(3));
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//! println!("{graph}");
//! ```
//!
//! ## Modules
//!
//! - [`diagnostics`] - Issue collection for imports and validation
//! - [`graph_utils`] - Degree statistics and DOT export
//! - [`units`] - [`Power`] and [`Distance`] newtypes

use petgraph::prelude::*;
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

pub mod diagnostics;
pub mod error;
pub mod graph_utils;
pub mod units;

pub use diagnostics::{DiagnosticIssue, Diagnostics, ImportDiagnostics, ImportStats};
pub use error::{WayfinderError, WayfinderResult};
pub use graph_utils::*;
pub use petgraph::graph::NodeIndex;
pub use units::{Distance, Power};

/// Node identifier produced by the text loader (nodes `1..=n`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn new(value: usize) -> Self {
        NodeId(value)
    }
    #[inline]
    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for NodeId {
    fn from(value: usize) -> Self {
        NodeId(value)
    }
}

/// Edge attributes shared by both directions of an undirected edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Minimum power needed to traverse the edge
    pub power: Power,
    /// Cost added to a path that uses the edge
    pub distance: Distance,
}

/// One adjacency entry: a neighbor reachable through a single edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacent<'a, N> {
    pub node: &'a N,
    pub power: Power,
    pub distance: Distance,
}

/// Undirected capacitated multigraph keyed by node identity.
///
/// Nodes are created explicitly with [`Graph::add_node`] / [`Graph::new`] or
/// implicitly by [`Graph::add_edge`], and are never removed. Node iteration
/// order is insertion order.
#[derive(Debug, Clone)]
pub struct Graph<N = NodeId> {
    graph: UnGraph<N, Link>,
    index: HashMap<N, NodeIndex>,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            graph: UnGraph::default(),
            index: HashMap::new(),
        }
    }
}

impl<N> Graph<N>
where
    N: Clone + Eq + Hash,
{
    /// Create a graph holding `nodes` and no edges.
    ///
    /// The identifiers are copied into the store; repeated identifiers are
    /// registered once.
    pub fn new<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        let mut graph = Self::default();
        for node in nodes {
            graph.add_node(node);
        }
        graph
    }

    /// Register `node` if it is unseen and return its index either way.
    pub fn add_node(&mut self, node: N) -> NodeIndex {
        if let Some(&idx) = self.index.get(&node) {
            return idx;
        }
        let idx = self.graph.add_node(node.clone());
        self.index.insert(node, idx);
        idx
    }

    /// Insert an undirected edge between `a` and `b`.
    ///
    /// Unseen endpoints are registered first. Every call adds a new edge, even
    /// when an identical one already exists.
    pub fn add_edge(&mut self, a: N, b: N, power: Power, distance: Distance) -> EdgeIndex {
        let from = self.add_node(a);
        let to = self.add_node(b);
        self.graph.add_edge(from, to, Link { power, distance })
    }

    /// [`Graph::add_edge`] with [`Distance::UNIT`].
    pub fn add_edge_default_distance(&mut self, a: N, b: N, power: Power) -> EdgeIndex {
        self.add_edge(a, b, power, Distance::UNIT)
    }

    pub fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Store index of `node`, if present.
    pub fn index_of(&self, node: &N) -> Option<NodeIndex> {
        self.index.get(node).copied()
    }
}

impl<N> Graph<N> {
    #[inline]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.graph.node_weights()
    }

    /// Identifier stored at `idx`.
    pub fn node(&self, idx: NodeIndex) -> &N {
        &self.graph[idx]
    }

    /// Read-only view of the underlying petgraph topology.
    pub fn topology(&self) -> &UnGraph<N, Link> {
        &self.graph
    }

    /// All edges as `(a, b, link)` in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, Link)> {
        self.graph.edge_references().map(move |edge| {
            (
                &self.graph[edge.source()],
                &self.graph[edge.target()],
                *edge.weight(),
            )
        })
    }

    /// Adjacency list of the node at `idx`, in edge insertion order.
    ///
    /// A self-loop appears once in its node's list.
    pub fn adjacency(&self, idx: NodeIndex) -> Vec<Adjacent<'_, N>> {
        let mut entries: Vec<_> = self
            .graph
            .edges(idx)
            .map(|edge| {
                let other = if edge.source() == idx {
                    edge.target()
                } else {
                    edge.source()
                };
                (edge.id(), other, *edge.weight())
            })
            .collect();
        entries.sort_by_key(|(edge, _, _)| edge.index());
        entries
            .into_iter()
            .map(|(_, other, link)| Adjacent {
                node: &self.graph[other],
                power: link.power,
                distance: link.distance,
            })
            .collect()
    }

    /// Largest power requirement over all edges; `None` for an edgeless graph.
    pub fn max_power(&self) -> Option<Power> {
        self.graph.edge_weights().map(|link| link.power).max()
    }
}

impl<N> Graph<N>
where
    N: Clone + Eq + Hash,
{
    /// Adjacency list of `node`; `None` if the node is absent.
    pub fn neighbors(&self, node: &N) -> Option<Vec<Adjacent<'_, N>>> {
        self.index_of(node).map(|idx| self.adjacency(idx))
    }
}

impl<N: fmt::Display> Graph<N> {
    /// Human-readable summary: a header, then one line per node with its
    /// neighbor list as `(neighbor, power, distance)` triples.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Check the graph for suspicious but legal structure.
    pub fn validate_into(&self, diag: &mut Diagnostics) {
        if self.is_empty() {
            diag.add_warning("structure", "Graph has no nodes");
            return;
        }

        for idx in self.graph.node_indices() {
            if self.graph.edges(idx).next().is_none() {
                diag.add_warning_with_entity(
                    "structure",
                    "Node has no incident edges",
                    &format!("Node {}", self.graph[idx]),
                );
            }
        }

        for edge in self.graph.edge_references() {
            let entity = format!(
                "Edge {}-{}",
                self.graph[edge.source()],
                self.graph[edge.target()]
            );
            if edge.source() == edge.target() {
                diag.add_warning_with_entity("structure", "Self-loop never shortens a path", &entity);
            }
            if edge.weight().distance == Distance::ZERO {
                diag.add_warning_with_entity("validation", "Edge has zero distance", &entity);
            }
        }
    }
}

impl<N: fmt::Display> fmt::Display for Graph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "The graph is empty");
        }
        writeln!(
            f,
            "The graph has {} nodes and {} edges.",
            self.node_count(),
            self.edge_count()
        )?;
        for idx in self.graph.node_indices() {
            write!(f, "{}-->[", self.graph[idx])?;
            for (i, entry) in self.adjacency(idx).iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "({}, {}, {})", entry.node, entry.power, entry.distance)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(value: usize) -> NodeId {
        NodeId::new(value)
    }

    #[test]
    fn test_graph_creation() {
        let graph = Graph::new((1..=4).map(n));
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 0);
        let order: Vec<usize> = graph.nodes().map(NodeId::value).collect();
        assert_eq!(order, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_new_copies_caller_nodes() {
        let mut nodes = vec![n(1), n(2)];
        let mut graph = Graph::new(nodes.clone());
        graph.add_edge(n(2), n(9), Power(1), Distance(1));
        nodes.push(n(5));
        assert_eq!(nodes.len(), 3);
        assert_eq!(graph.node_count(), 3);
        assert!(!graph.contains(&n(5)));
    }

    #[test]
    fn test_duplicate_nodes_registered_once() {
        let graph = Graph::new([n(1), n(1), n(2)]);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_add_edge_registers_endpoints() {
        let mut graph = Graph::new([n(1)]);
        graph.add_edge(n(1), n(7), Power(3), Distance(4));
        assert_eq!(graph.node_count(), 2);
        assert!(graph.contains(&n(7)));

        let from_one = graph.neighbors(&n(1)).unwrap();
        assert_eq!(from_one.len(), 1);
        assert_eq!(*from_one[0].node, n(7));
        assert_eq!(from_one[0].power, Power(3));
        assert_eq!(from_one[0].distance, Distance(4));

        let from_seven = graph.neighbors(&n(7)).unwrap();
        assert_eq!(*from_seven[0].node, n(1));
        assert_eq!(from_seven[0].power, Power(3));
    }

    #[test]
    fn test_parallel_edges_kept() {
        let mut graph = Graph::new([n(1), n(2)]);
        graph.add_edge(n(1), n(2), Power(1), Distance(10));
        graph.add_edge(n(1), n(2), Power(1), Distance(2));
        graph.add_edge(n(2), n(1), Power(1), Distance(2));
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.neighbors(&n(1)).unwrap().len(), 3);
        assert_eq!(graph.neighbors(&n(2)).unwrap().len(), 3);
    }

    #[test]
    fn test_adjacency_in_insertion_order() {
        let mut graph = Graph::new((1..=4).map(n));
        graph.add_edge(n(1), n(2), Power(1), Distance(1));
        graph.add_edge(n(3), n(1), Power(2), Distance(1));
        graph.add_edge(n(1), n(4), Power(3), Distance(1));
        let order: Vec<usize> = graph
            .neighbors(&n(1))
            .unwrap()
            .iter()
            .map(|a| a.node.value())
            .collect();
        assert_eq!(order, vec![2, 3, 4]);
    }

    #[test]
    fn test_default_distance() {
        let mut graph = Graph::default();
        graph.add_edge_default_distance(n(1), n(2), Power(8));
        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].2.distance, Distance::UNIT);
    }

    #[test]
    fn test_max_power() {
        let mut graph: Graph = Graph::default();
        assert_eq!(graph.max_power(), None);
        graph.add_edge(n(1), n(2), Power(4), Distance(1));
        graph.add_edge(n(2), n(3), Power(11), Distance(1));
        assert_eq!(graph.max_power(), Some(Power(11)));
    }

    #[test]
    fn test_generic_node_type() {
        let mut graph = Graph::new(["paris".to_string()]);
        graph.add_edge("paris".to_string(), "lyon".to_string(), Power(2), Distance(460));
        assert_eq!(graph.node_count(), 2);
        assert!(graph.neighbors(&"missing".to_string()).is_none());
    }

    #[test]
    fn test_describe_empty() {
        let graph: Graph = Graph::default();
        assert_eq!(graph.describe(), "The graph is empty\n");
    }

    #[test]
    fn test_describe_lines() {
        let mut graph = Graph::new((1..=3).map(n));
        graph.add_edge(n(1), n(2), Power(5), Distance(2));
        let text = graph.describe();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "The graph has 3 nodes and 1 edges.");
        assert_eq!(lines[1], "1-->[(2, 5, 2)]");
        assert_eq!(lines[2], "2-->[(1, 5, 2)]");
        assert_eq!(lines[3], "3-->[]");
    }

    #[test]
    fn test_validation_warnings() {
        let mut graph = Graph::new((1..=3).map(n));
        graph.add_edge(n(1), n(1), Power(1), Distance(1));
        graph.add_edge(n(1), n(2), Power(1), Distance(0));
        let mut diag = Diagnostics::new();
        graph.validate_into(&mut diag);
        assert_eq!(diag.warning_count(), 3);
        assert!(diag.warnings().any(|i| i.message.contains("Self-loop")));
        assert!(diag.warnings().any(|i| i.message.contains("zero distance")));
        assert!(diag
            .warnings()
            .any(|i| i.entity.as_deref() == Some("Node 3")));
    }

    #[test]
    fn test_validation_empty() {
        let graph: Graph = Graph::default();
        let mut diag = Diagnostics::new();
        graph.validate_into(&mut diag);
        assert_eq!(diag.warning_count(), 1);
    }
}
