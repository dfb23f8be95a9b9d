//! # wayfinder-algo: Routing Algorithms for Capacitated Graphs
//!
//! Answers three questions about a [`wayfinder_core::Graph`]:
//!
//! | Question | Entry point |
//! |----------|-------------|
//! | Are two nodes connected at all? | [`graph::connected_components`], [`graph::ComponentLabels`] |
//! | Shortest path for a given power budget? | [`routing::shortest_path_under_power`] |
//! | Smallest budget that connects two nodes? | [`routing::minimum_power`] |
//!
//! ## Architecture
//!
//! - **[`graph`]**: power-agnostic connectivity (explicit work-list traversal)
//! - **[`routing::path`]**: Dijkstra restricted to edges admitted by the budget
//! - **[`routing::min_power`]**: doubling + bisection over the monotone feasibility predicate
//! - **[`routing::Router`]**: caches component labels so repeated queries skip impossible pairs
//!
//! All algorithms borrow the graph immutably and keep their working state local
//! to one query.
//!
//! ## Example
//!
//! ```ignore
//! use wayfinder_algo::Router;
//! use wayfinder_io::load_graph;
//!
//! let graph = load_graph("network.01.in")?.graph;
//! let router = Router::new(&graph);
//!
//! if let Some(solution) = router.minimum_power(&src, &dest) {
//!     println!("power {} via {:?}", solution.power, solution.path.nodes);
//! }
//! ```

pub mod graph;
pub mod routing;
pub mod test_utils;

pub use graph::{
    are_connected, connected_components, connected_components_set, find_islands,
    ComponentLabels, IslandAnalysis,
};
pub use routing::{
    minimum_power, shortest_path_under_power, MinPowerSolution, Path, Probe, Router, SearchTrace,
};
