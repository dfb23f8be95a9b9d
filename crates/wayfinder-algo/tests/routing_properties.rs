//! Randomized checks of the routing algorithms against brute-force oracles.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wayfinder_algo::test_utils::n;
use wayfinder_algo::{connected_components, Path, Router};
use wayfinder_core::{Distance, Graph, NodeId, Power};

fn random_graph(rng: &mut StdRng, nodes: usize, edges: usize) -> Graph {
    let mut graph = Graph::new((1..=nodes).map(n));
    for _ in 0..edges {
        let a = rng.gen_range(1..=nodes);
        let b = rng.gen_range(1..=nodes);
        let power = rng.gen_range(0..40);
        let distance = rng.gen_range(0..25);
        graph.add_edge(n(a), n(b), Power(power), Distance(distance));
    }
    graph
}

/// Nodes reachable from `src` using edges with power `<= budget`.
fn reachable(graph: &Graph, src: NodeId, budget: Option<Power>) -> HashSet<NodeId> {
    let mut seen = HashSet::from([src]);
    let mut queue = VecDeque::from([src]);
    while let Some(node) = queue.pop_front() {
        for entry in graph.neighbors(&node).unwrap() {
            let allowed = budget.map_or(true, |b| entry.power <= b);
            if allowed && seen.insert(*entry.node) {
                queue.push_back(*entry.node);
            }
        }
    }
    seen
}

/// Bellman-Ford style relaxation over the admitted edges.
fn oracle_distance(graph: &Graph, src: NodeId, dest: NodeId, budget: Power) -> Option<Distance> {
    let mut best: HashMap<NodeId, u64> = HashMap::from([(src, 0)]);
    for _ in 0..graph.node_count() {
        let mut changed = false;
        for (a, b, link) in graph.edges() {
            if link.power > budget {
                continue;
            }
            for (from, to) in [(*a, *b), (*b, *a)] {
                if let Some(&d) = best.get(&from) {
                    let candidate = d + link.distance.value();
                    if best.get(&to).map_or(true, |&current| candidate < current) {
                        best.insert(to, candidate);
                        changed = true;
                    }
                }
            }
        }
        if !changed {
            break;
        }
    }
    best.get(&dest).map(|&d| Distance(d))
}

/// Smallest budget among `{0} ∪ edge powers` that connects the pair.
fn oracle_min_power(graph: &Graph, src: NodeId, dest: NodeId) -> Option<Power> {
    let mut candidates: BTreeSet<Power> = graph.edges().map(|(_, _, link)| link.power).collect();
    candidates.insert(Power::ZERO);
    candidates
        .into_iter()
        .find(|&budget| reachable(graph, src, Some(budget)).contains(&dest))
}

/// Path must follow admitted edges, and its distance must match the cheapest
/// admitted parallel edge per hop.
fn assert_valid_path(graph: &Graph, path: &Path<NodeId>, budget: Power) {
    let mut total = Distance::ZERO;
    let mut bottleneck = Power::ZERO;
    for hop in path.nodes.windows(2) {
        let cheapest = graph
            .neighbors(&hop[0])
            .unwrap()
            .into_iter()
            .filter(|entry| *entry.node == hop[1] && entry.power <= budget)
            .min_by_key(|entry| entry.distance)
            .expect("consecutive path nodes share an admitted edge");
        total = total + cheapest.distance;
        bottleneck = bottleneck.max(cheapest.power);
    }
    assert_eq!(total, path.distance);
    assert!(path.bottleneck <= budget);
    assert!(bottleneck <= budget);
}

#[test]
fn components_partition_the_node_set() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..30 {
        let (nodes, edges) = (rng.gen_range(1..40), rng.gen_range(0..50));
        let graph = random_graph(&mut rng, nodes, edges);
        let components = connected_components(&graph);
        let mut seen = HashSet::new();
        for component in &components {
            for node in component {
                assert!(seen.insert(*node), "node {node} in two components");
            }
            let first = component[0];
            assert_eq!(reachable(&graph, first, None), component.iter().copied().collect());
        }
        assert_eq!(seen.len(), graph.node_count());
    }
}

#[test]
fn shortest_paths_match_oracle() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..40 {
        let (nodes, edges) = (rng.gen_range(2..25), rng.gen_range(0..60));
        let graph = random_graph(&mut rng, nodes, edges);
        let router = Router::new(&graph);
        for _ in 0..10 {
            let src = n(rng.gen_range(1..=nodes));
            let dest = n(rng.gen_range(1..=nodes));
            let budget = Power(rng.gen_range(0..45));
            let found = router.shortest_path(&src, &dest, budget);
            let expected = oracle_distance(&graph, src, dest, budget);
            assert_eq!(found.as_ref().map(|p| p.distance), expected);
            if let Some(path) = found {
                assert_eq!(path.source(), Some(&src));
                assert_eq!(path.destination(), Some(&dest));
                assert_valid_path(&graph, &path, budget);
            }
        }
    }
}

#[test]
fn same_node_is_trivial() {
    let mut rng = StdRng::seed_from_u64(3);
    let graph = random_graph(&mut rng, 20, 30);
    let router = Router::new(&graph);
    for node in graph.nodes() {
        for budget in [0, 5, 1_000] {
            let path = router.shortest_path(node, node, Power(budget)).unwrap();
            assert_eq!(path.nodes, vec![*node]);
            assert_eq!(path.distance, Distance::ZERO);
        }
    }
}

#[test]
fn feasibility_is_monotone_in_power() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..20 {
        let graph = random_graph(&mut rng, 15, 25);
        let router = Router::new(&graph);
        for _ in 0..10 {
            let src = n(rng.gen_range(1..=15));
            let dest = n(rng.gen_range(1..=15));
            let mut feasible = false;
            for budget in 0..45 {
                let now = router.shortest_path(&src, &dest, Power(budget)).is_some();
                assert!(!feasible || now, "lost feasibility at power {budget}");
                feasible = now;
            }
        }
    }
}

#[test]
fn minimum_power_matches_oracle() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..40 {
        let (nodes, edges) = (rng.gen_range(2..20), rng.gen_range(1..40));
        let graph = random_graph(&mut rng, nodes, edges);
        let router = Router::new(&graph);
        for _ in 0..8 {
            let src = n(rng.gen_range(1..=nodes));
            let dest = n(rng.gen_range(1..=nodes));
            let solution = router.minimum_power(&src, &dest);
            assert_eq!(
                solution.as_ref().map(|s| s.power),
                oracle_min_power(&graph, src, dest)
            );
            let Some(solution) = solution else {
                continue;
            };
            assert!(router.shortest_path(&src, &dest, solution.power).is_some());
            if solution.power > Power::ZERO {
                let below = Power(solution.power.value() - 1);
                assert!(router.shortest_path(&src, &dest, below).is_none());
            }
            assert_valid_path(&graph, &solution.path, solution.power);
            if src != dest {
                assert_eq!(solution.path.bottleneck, solution.power);
            }
        }
    }
}
