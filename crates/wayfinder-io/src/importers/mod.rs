//! Graph description importers.

use std::fs;
use std::path::Path;

use tracing::info;
use wayfinder_core::{Graph, ImportDiagnostics, NodeId, WayfinderResult};

pub mod text;

pub use text::{parse_graph, MAX_DECLARED_NODES};

/// A loaded graph and what the loader noticed along the way.
#[derive(Debug)]
pub struct ImportResult {
    pub graph: Graph<NodeId>,
    pub diagnostics: ImportDiagnostics,
}

/// Read and parse a graph description file.
pub fn load_graph(path: impl AsRef<Path>) -> WayfinderResult<ImportResult> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let result = parse_graph(&content)?;
    info!(
        path = %path.display(),
        "loaded graph: {}",
        result.diagnostics.summary()
    );
    Ok(result)
}
