//! Routing under a power budget.
//!
//! | Query | Function | Result |
//! |-------|----------|--------|
//! | Shortest path within a budget | [`shortest_path_under_power`] | `Option<Path>` |
//! | Smallest budget that connects two nodes | [`minimum_power`] | `Option<MinPowerSolution>` |
//!
//! Both free functions build a one-shot [`Router`]. When several queries run
//! against the same graph, construct the router once and reuse it so the
//! component labels are computed only once.
//!
//! ```
//! use wayfinder_algo::routing::{minimum_power, shortest_path_under_power};
//! use wayfinder_core::{Distance, Graph, NodeId, Power};
//!
//! let n = NodeId::new;
//! let mut graph = Graph::new((1..=3).map(n));
//! graph.add_edge(n(1), n(2), Power(5), Distance(2));
//! graph.add_edge(n(2), n(3), Power(10), Distance(3));
//!
//! assert!(shortest_path_under_power(&graph, &n(1), &n(3), Power(9)).is_none());
//!
//! let solution = minimum_power(&graph, &n(1), &n(3)).unwrap();
//! assert_eq!(solution.power, Power(10));
//! assert_eq!(solution.path.nodes, vec![n(1), n(2), n(3)]);
//! ```

use std::hash::Hash;

use wayfinder_core::{Graph, Power};

pub mod min_power;
pub mod path;
pub mod router;

pub use min_power::{MinPowerSolution, Probe, SearchTrace};
pub use path::Path;
pub use router::Router;

/// Minimum-distance path from `src` to `dest` using only edges with power requirement `<= power`.
///
/// `None` when either node is absent or no such path exists.
pub fn shortest_path_under_power<N>(
    graph: &Graph<N>,
    src: &N,
    dest: &N,
    power: Power,
) -> Option<Path<N>>
where
    N: Clone + Eq + Hash,
{
    Router::new(graph).shortest_path(src, dest, power)
}

/// Smallest power budget connecting `src` and `dest`, with a shortest path at that budget.
///
/// `None` when the nodes are absent or not connected at any budget.
pub fn minimum_power<N>(graph: &Graph<N>, src: &N, dest: &N) -> Option<MinPowerSolution<N>>
where
    N: Clone + Eq + Hash,
{
    Router::new(graph).minimum_power(src, dest)
}
