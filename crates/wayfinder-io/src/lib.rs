//! # wayfinder-io: Graph Description I/O
//!
//! Reads and writes the plain-text graph description format:
//!
//! ```text
//! 7 5          <- n m: nodes are 1..=7, five edge lines follow
//! 1 2 5 2      <- node1 node2 power_min distance
//! 2 3 10       <- distance omitted: defaults to 1
//! ...
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wayfinder_io::load_graph;
//!
//! fn main() -> wayfinder_core::WayfinderResult<()> {
//!     let result = load_graph("network.01.in")?;
//!     println!("{}", result.diagnostics);
//!     println!("{}", result.graph);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Malformed input (wrong token count, non-integer token, missing header or
//! edge lines) fails with [`wayfinder_core::WayfinderError::Format`] carrying
//! the offending line number. Recoverable oddities, such as an edge naming a
//! node outside `1..=n`, are reported in [`ImportResult::diagnostics`].

pub mod exporters;
pub mod importers;

pub use exporters::{save_graph, write_graph};
pub use importers::{load_graph, parse_graph, ImportResult, MAX_DECLARED_NODES};
