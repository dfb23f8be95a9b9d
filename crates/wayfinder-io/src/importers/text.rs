//! Plain-text graph description parser
//!
//! ```text
//! n m
//! node1 node2 power_min [distance]
//! ...              (exactly m edge lines)
//! ```
//!
//! Nodes are named `1..=n`. A missing distance defaults to 1. Blank lines are
//! skipped everywhere. `n` may not exceed [`MAX_DECLARED_NODES`]; every
//! declared node is allocated up front.

use tracing::{debug, warn};
use wayfinder_core::{
    Distance, Graph, ImportDiagnostics, NodeId, Power, WayfinderError, WayfinderResult,
};

use super::ImportResult;

/// Largest node count a header may declare.
pub const MAX_DECLARED_NODES: usize = 1 << 24;

/// A parsed edge line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EdgeRow {
    a: usize,
    b: usize,
    power: u64,
    distance: Option<u64>,
}

/// Non-blank lines with their 1-based line numbers
fn numbered_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

fn parse_integer<T: std::str::FromStr>(token: &str, line: usize, what: &str) -> WayfinderResult<T> {
    token
        .parse()
        .map_err(|_| WayfinderError::format(line, format!("invalid {what} '{token}'")))
}

fn parse_header(line_no: usize, line: &str) -> WayfinderResult<(usize, usize)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(WayfinderError::format(
            line_no,
            format!("header must be 'n m', found {} tokens", tokens.len()),
        ));
    }
    let nodes: usize = parse_integer(tokens[0], line_no, "node count")?;
    if nodes > MAX_DECLARED_NODES {
        return Err(WayfinderError::format(
            line_no,
            format!("node count {nodes} exceeds the supported maximum {MAX_DECLARED_NODES}"),
        ));
    }
    Ok((nodes, parse_integer(tokens[1], line_no, "edge count")?))
}

fn parse_edge_row(line_no: usize, line: &str) -> WayfinderResult<EdgeRow> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 3 && tokens.len() != 4 {
        return Err(WayfinderError::format(
            line_no,
            format!(
                "edge line must have 3 or 4 integer tokens, found {}",
                tokens.len()
            ),
        ));
    }
    Ok(EdgeRow {
        a: parse_integer(tokens[0], line_no, "node")?,
        b: parse_integer(tokens[1], line_no, "node")?,
        power: parse_integer(tokens[2], line_no, "power")?,
        distance: match tokens.get(3) {
            Some(token) => Some(parse_integer(token, line_no, "distance")?),
            None => None,
        },
    })
}

/// Parse a graph description held in memory
pub fn parse_graph(content: &str) -> WayfinderResult<ImportResult> {
    let mut lines = numbered_lines(content);
    let mut diagnostics = ImportDiagnostics::new();

    let (declared_nodes, declared_edges) = match lines.next() {
        Some((line_no, line)) => parse_header(line_no, line)?,
        None => return Err(WayfinderError::format(1, "missing header line 'n m'")),
    };

    let mut graph = Graph::new((1..=declared_nodes).map(NodeId::new));
    let mut last_line = 1;

    for read in 0..declared_edges {
        let (line_no, line) = lines.next().ok_or_else(|| {
            WayfinderError::format(
                last_line + 1,
                format!("expected {declared_edges} edge lines, found {read}"),
            )
        })?;
        last_line = line_no;
        let row = parse_edge_row(line_no, line)?;

        for node in [row.a, row.b] {
            if node == 0 || node > declared_nodes {
                let message = format!("node {node} outside declared range 1..={declared_nodes}");
                warn!(line = line_no, "{message}");
                diagnostics.add_warning_at_line("reference", &message, line_no);
            }
        }

        let distance = match row.distance {
            Some(d) => Distance(d),
            None => {
                diagnostics.stats.defaulted_distances += 1;
                Distance::UNIT
            }
        };
        graph.add_edge(NodeId::new(row.a), NodeId::new(row.b), Power(row.power), distance);
    }

    for (line_no, _) in lines {
        diagnostics.add_warning_at_line("parse", "line after the declared edges ignored", line_no);
        diagnostics.stats.ignored_lines += 1;
    }

    diagnostics.stats.declared_nodes = declared_nodes;
    diagnostics.stats.declared_edges = declared_edges;
    diagnostics.stats.nodes = graph.node_count();
    diagnostics.stats.edges = graph.edge_count();
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        warnings = diagnostics.warning_count(),
        "parsed graph description"
    );

    Ok(ImportResult { graph, diagnostics })
}
