//! Diagnostics for graph imports and structural checks.
//!
//! Loading a graph description can succeed while still noticing things a user
//! should hear about: an edge naming a node outside the declared `1..n` range,
//! trailing lines after the declared edges, zero-distance edges. Those are
//! collected here as warnings instead of being logged and forgotten. Anything
//! worse is a [`crate::WayfinderError`] and aborts the load.
//!
//! # Example
//!
//! ```
//! use wayfinder_core::diagnostics::Diagnostics;
//!
//! let mut diag = Diagnostics::new();
//! diag.add_warning("structure", "Graph has no nodes");
//! diag.add_warning_with_entity("structure", "Node has no incident edges", "Node 12");
//!
//! assert_eq!(diag.warning_count(), 2);
//! ```

use serde::Serialize;

/// A single warning raised during an import or a structural check
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticIssue {
    /// Category for grouping (e.g., "parse", "structure", "reference")
    pub category: String,
    pub message: String,
    /// 1-based input line, for file-based operations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Entity reference (e.g., "Node 14", "Edge 1-2")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
}

impl DiagnosticIssue {
    pub fn new(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            message: message.into(),
            line: None,
            entity: None,
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }
}

impl std::fmt::Display for DiagnosticIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[warning:{}] {}", self.category, self.message)?;

        if let Some(entity) = &self.entity {
            write!(f, " ({})", entity)?;
        }
        if let Some(line) = self.line {
            write!(f, " at line {}", line)?;
        }

        Ok(())
    }
}

fn issue_summary(warnings: usize) -> String {
    match warnings {
        0 => "No issues".to_string(),
        1 => "1 warning".to_string(),
        w => format!("{w} warnings"),
    }
}

/// Warnings from a structural check such as [`crate::Graph::validate_into`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct Diagnostics {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<DiagnosticIssue>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_warning(&mut self, category: &str, message: &str) {
        self.issues.push(DiagnosticIssue::new(category, message));
    }

    pub fn add_warning_with_entity(&mut self, category: &str, message: &str, entity: &str) {
        self.issues
            .push(DiagnosticIssue::new(category, message).with_entity(entity));
    }

    pub fn warning_count(&self) -> usize {
        self.issues.len()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &DiagnosticIssue> {
        self.issues.iter()
    }
}

// ============================================================================
// Import-Specific Extensions
// ============================================================================

/// Counters gathered while reading a graph description.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportStats {
    /// `n` from the header line
    pub declared_nodes: usize,
    /// `m` from the header line
    pub declared_edges: usize,
    /// Nodes in the resulting graph (exceeds `declared_nodes` when edges name new nodes)
    pub nodes: usize,
    pub edges: usize,
    /// Edge lines that omitted the distance column
    pub defaulted_distances: usize,
    /// Non-empty lines after the last declared edge
    pub ignored_lines: usize,
}

/// Complete diagnostics for an import operation
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportDiagnostics {
    pub stats: ImportStats,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<DiagnosticIssue>,
}

impl ImportDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_warning_at_line(&mut self, category: &str, message: &str, line: usize) {
        self.issues
            .push(DiagnosticIssue::new(category, message).with_line(line));
    }

    pub fn warning_count(&self) -> usize {
        self.issues.len()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} nodes, {} edges ({} with default distance) | {}",
            self.stats.nodes,
            self.stats.edges,
            self.stats.defaulted_distances,
            issue_summary(self.warning_count())
        )
    }
}

impl std::fmt::Display for ImportDiagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Import: {}", self.summary())?;
        for issue in &self.issues {
            writeln!(f, "  {}", issue)?;
        }
        Ok(())
    }
}
