//! Small graphs shared by unit tests, integration tests, and benchmarks.

use wayfinder_core::{Distance, Graph, NodeId, Power};

pub fn n(value: usize) -> NodeId {
    NodeId::new(value)
}

/// `1 -(p5,d2)- 2 -(p10,d3)- 3`
pub fn two_hop_chain() -> Graph {
    let mut graph = Graph::new((1..=3).map(n));
    graph.add_edge(n(1), n(2), Power(5), Distance(2));
    graph.add_edge(n(2), n(3), Power(10), Distance(3));
    graph
}

/// Components `{1, 2}` and `{3, 4}`, with only `1 - 2` joined by an edge.
pub fn disconnected_pairs() -> Graph {
    let mut graph = Graph::new((1..=4).map(n));
    graph.add_edge_default_distance(n(1), n(2), Power(1));
    graph
}

/// Two parallel `1 - 2` edges at power 1, distances 10 and 2.
pub fn parallel_pair() -> Graph {
    let mut graph = Graph::new((1..=2).map(n));
    graph.add_edge(n(1), n(2), Power(1), Distance(10));
    graph.add_edge(n(1), n(2), Power(1), Distance(2));
    graph
}

/// `rows x cols` grid; edge power and distance derived from the position so
/// the graph is reproducible without a random source.
pub fn grid(rows: usize, cols: usize) -> Graph {
    let id = |r: usize, c: usize| n(r * cols + c + 1);
    let mut graph = Graph::new((0..rows * cols).map(|i| n(i + 1)));
    for r in 0..rows {
        for c in 0..cols {
            let weight = ((r * 31 + c * 17) % 97) as u64 + 1;
            if c + 1 < cols {
                graph.add_edge(id(r, c), id(r, c + 1), Power(weight), Distance(weight % 13 + 1));
            }
            if r + 1 < rows {
                graph.add_edge(id(r, c), id(r + 1, c), Power(98 - weight), Distance(weight % 7 + 1));
            }
        }
    }
    graph
}
