use crate::{Graph, Power, WayfinderError, WayfinderResult};
use petgraph::algo::connected_components;
use petgraph::visit::EdgeRef;
use serde::Serialize;
use std::fmt::Display;

/// Summary statistics produced by `graph stats` (density/degree/connected components).
#[derive(Debug, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub connected_components: usize,
    pub min_degree: usize,
    pub avg_degree: f64,
    pub max_degree: usize,
    pub density: f64,
    /// Largest edge power requirement; a budget this high reaches every node in its component.
    pub max_power: Option<Power>,
}

/// Calculates graph-level statistics such as density, degree distribution, and component counts.
///
/// Parallel edges count toward degree and density individually.
pub fn graph_stats<N>(graph: &Graph<N>) -> GraphStats {
    let topology = graph.topology();
    let node_count = topology.node_count();
    let edge_count = topology.edge_count();
    let degrees: Vec<usize> = topology
        .node_indices()
        .map(|node| topology.edges(node).count())
        .collect();
    let min_degree = degrees.iter().copied().min().unwrap_or(0);
    let max_degree = degrees.iter().copied().max().unwrap_or(0);
    let avg_degree = if node_count == 0 {
        0.0
    } else {
        degrees.iter().sum::<usize>() as f64 / node_count as f64
    };
    let density = if node_count < 2 {
        0.0
    } else {
        2.0 * edge_count as f64 / (node_count as f64 * (node_count as f64 - 1.0))
    };
    GraphStats {
        node_count,
        edge_count,
        connected_components: connected_components(topology),
        min_degree,
        avg_degree,
        max_degree,
        density,
        max_power: graph.max_power(),
    }
}

/// Export the topology to a DOT string (Graphviz) so external tools can visualize the layout.
pub fn export_graph<N: Display>(graph: &Graph<N>, format: &str) -> WayfinderResult<String> {
    match format.to_ascii_lowercase().as_str() {
        "graphviz" | "dot" => Ok(render_dot(graph)),
        other => Err(WayfinderError::Other(format!(
            "unsupported graph export format '{other}'"
        ))),
    }
}

fn render_dot<N: Display>(graph: &Graph<N>) -> String {
    let topology = graph.topology();
    let mut buffer = String::new();
    buffer.push_str("graph wayfinder {\n");
    for node in topology.node_indices() {
        let label = sanitize_label(&topology[node].to_string());
        buffer.push_str(&format!("  n{} [label=\"{}\"];\n", node.index(), label));
    }
    for edge in topology.edge_references() {
        let source = edge.source().index();
        let target = edge.target().index();
        let link = edge.weight();
        buffer.push_str(&format!(
            "  n{source} -- n{target} [label=\"p={} d={}\"];\n",
            link.power, link.distance
        ));
    }
    buffer.push('}');
    buffer
}

fn sanitize_label(label: &str) -> String {
    label.replace('"', "\\\"")
}
