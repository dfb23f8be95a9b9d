//! Minimum power budget between two nodes.
//!
//! Feasibility is monotone in the budget: every edge usable at `p` is usable at
//! any larger budget. The search therefore doubles the budget from 1 until a
//! path appears, then bisects the last bracket on integers. Callers must have
//! checked that both nodes share a component, otherwise doubling would never
//! find a feasible budget.

use serde::Serialize;
use tracing::debug;
use wayfinder_core::{Graph, NodeIndex, Power};

use super::path::{constrained_dijkstra, Path};

/// Smallest feasible budget together with a shortest path at that budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinPowerSolution<N> {
    pub power: Power,
    pub path: Path<N>,
}

/// One evaluation of the feasibility predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Probe {
    pub power: Power,
    pub feasible: bool,
}

/// Every budget tried by a minimum-power search, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchTrace {
    pub probes: Vec<Probe>,
}

impl SearchTrace {
    fn record(&mut self, power: Power, feasible: bool) {
        debug!(%power, feasible, "power probe");
        self.probes.push(Probe { power, feasible });
    }

    /// Number of shortest-path runs performed.
    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }
}

/// Feasibility predicate for one `(src, dest)` pair, recording every call.
struct Oracle<'g, N> {
    graph: &'g Graph<N>,
    src: NodeIndex,
    dest: NodeIndex,
    trace: SearchTrace,
}

impl<N: Clone> Oracle<'_, N> {
    fn feasible(&mut self, power: Power) -> bool {
        let found = constrained_dijkstra(self.graph, self.src, self.dest, power).is_some();
        self.trace.record(power, found);
        found
    }

    fn witness(self, power: Power) -> (Option<MinPowerSolution<N>>, SearchTrace) {
        let solution = constrained_dijkstra(self.graph, self.src, self.dest, power)
            .map(|path| MinPowerSolution { power, path });
        (solution, self.trace)
    }
}

/// Doubling + bisection over the budget. `src` and `dest` must be distinct and
/// connected when power is unbounded.
pub(crate) fn search_minimum_power<N: Clone>(
    graph: &Graph<N>,
    src: NodeIndex,
    dest: NodeIndex,
) -> (Option<MinPowerSolution<N>>, SearchTrace) {
    let mut oracle = Oracle {
        graph,
        src,
        dest,
        trace: SearchTrace::default(),
    };

    // Doubling: find the first feasible power of two.
    let mut upper = Power(1);
    let mut last_failure = None;
    while !oracle.feasible(upper) {
        if upper == Power::MAX {
            return (None, oracle.trace);
        }
        last_failure = Some(upper);
        upper = upper.doubled();
    }

    let mut lower = match last_failure {
        Some(power) => power,
        // Budget 1 already works; zero is the only smaller candidate.
        None if oracle.feasible(Power::ZERO) => return oracle.witness(Power::ZERO),
        None => Power::ZERO,
    };

    // Bisection: `lower` is infeasible, `upper` is feasible.
    while upper.value() - lower.value() > 1 {
        let mid = lower.midpoint(upper);
        if oracle.feasible(mid) {
            upper = mid;
        } else {
            lower = mid;
        }
    }

    debug!(power = %upper, probes = oracle.trace.len(), "minimum power found");
    oracle.witness(upper)
}
