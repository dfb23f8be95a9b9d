//! Write graphs back out in the plain-text description format.
//!
//! Only graphs whose nodes are exactly `1..=n` can be described, since the
//! format names nodes implicitly by the header count.

use std::fs;
use std::path::Path;

use wayfinder_core::{Graph, NodeId, WayfinderError, WayfinderResult};

/// Render `graph` as `n m` followed by one `a b power distance` line per edge.
pub fn write_graph(graph: &Graph<NodeId>) -> WayfinderResult<String> {
    let node_count = graph.node_count();
    if let Some(stray) = graph
        .nodes()
        .find(|node| node.value() == 0 || node.value() > node_count)
    {
        return Err(WayfinderError::Other(format!(
            "node {stray} cannot be written: nodes must be numbered 1..={node_count}"
        )));
    }

    let mut buffer = format!("{} {}\n", node_count, graph.edge_count());
    for (a, b, link) in graph.edges() {
        buffer.push_str(&format!("{} {} {} {}\n", a, b, link.power, link.distance));
    }
    Ok(buffer)
}

/// [`write_graph`] to a file.
pub fn save_graph(graph: &Graph<NodeId>, path: impl AsRef<Path>) -> WayfinderResult<()> {
    fs::write(path, write_graph(graph)?)?;
    Ok(())
}
