pub mod completions;
pub mod config;
pub mod graph;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::warn;
use wayfinder_core::{Diagnostics, Graph, NodeId};
use wayfinder_io::load_graph;

/// Load a graph description, surfacing loader and structure warnings through tracing.
pub(crate) fn load(path: &Path) -> Result<Graph<NodeId>> {
    let result =
        load_graph(path).with_context(|| format!("loading graph {}", path.display()))?;
    for issue in &result.diagnostics.issues {
        warn!("{}: {issue}", path.display());
    }

    let mut checks = Diagnostics::new();
    result.graph.validate_into(&mut checks);
    for issue in checks.warnings() {
        warn!("{}: {issue}", path.display());
    }
    Ok(result.graph)
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value).context("serializing output to JSON")?;
    println!("{payload}");
    Ok(())
}
