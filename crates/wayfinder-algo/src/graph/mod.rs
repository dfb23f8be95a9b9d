//! Graph algorithms that ignore power requirements.
//!
//! - **Connectivity**: connected components, island summaries, and cached
//!   per-node component labels used to short-circuit impossible routing queries.
//!
//! ```ignore
//! use wayfinder_algo::graph::{connected_components_set, find_islands};
//!
//! let islands = find_islands(&graph);
//! for island in &islands.islands {
//!     println!("Island {}: {} node(s)", island.island_id, island.node_count);
//! }
//! ```

pub mod connectivity;

pub use connectivity::{
    are_connected, connected_components, connected_components_set, find_islands,
    ComponentLabels, IslandAnalysis, IslandSummary, NodeAssignment,
};
