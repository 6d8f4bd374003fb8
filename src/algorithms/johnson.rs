/*
 * SPDX-FileCopyrightText: 2026 llp-kernel contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*
 * Johnson's price function: a vertex potential that reweights every edge
 * non-negative, budgeted against negative cycles exactly like
 * Bellman-Ford.
 */

use crate::error::Error;
use crate::kernel::{Kernel, LlpProgram};
use crate::value::WeightedDigraph;
use crossbeam_utils::CachePadded;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

/// Parallel computation of Johnson's reweighting potential.
///
/// `price[v]` ascends to the smallest value satisfying `price[v] >=
/// price[u] - w(u, v)` for every parent edge `(u, v, w)`; reweighting every
/// edge by `w + price[u] - price[v]` then makes all weights non-negative.
/// Budgeted per vertex against negative cycles the same way as
/// `BellmanFord`.
pub struct Johnson {
    graph: WeightedDigraph,
    price: Vec<AtomicI64>,
    temp: Vec<AtomicI64>,
    budget: Vec<AtomicUsize>,
    /// Read by every worker's `eligible` check each wave; cache-padded to
    /// avoid false sharing with neighboring budget/state entries.
    neg_cycle: CachePadded<AtomicBool>,
}

impl Johnson {
    pub fn new(graph: WeightedDigraph) -> Self {
        let n = graph.num_vertices();
        let budget_per_vertex = n.saturating_sub(1);
        let price = (0..n).map(|_| AtomicI64::new(0)).collect();
        let temp = (0..n).map(|_| AtomicI64::new(0)).collect();
        let budget = (0..n)
            .map(|_| AtomicUsize::new(budget_per_vertex))
            .collect();
        Johnson {
            graph,
            price,
            temp,
            budget,
            neg_cycle: CachePadded::new(AtomicBool::new(false)),
        }
    }

    fn node_value(&self, v: usize) -> i64 {
        self.price[v].load(Ordering::Acquire)
    }

    /// Runs to a fixed point. `Ok(None)` if a negative cycle was detected;
    /// `Ok(Some(price))` otherwise.
    pub fn solve(&self) -> Result<Option<Vec<i64>>, Error> {
        let n = self.graph.num_vertices();
        if n == 0 {
            return Ok(Some(Vec::new()));
        }
        let kernel = Kernel::new(n);
        kernel.solve(self)?;
        if self.neg_cycle.load(Ordering::Acquire) {
            Ok(None)
        } else {
            Ok(Some((0..n).map(|v| self.node_value(v)).collect()))
        }
    }
}

impl LlpProgram for Johnson {
    fn len(&self) -> usize {
        self.graph.num_vertices()
    }

    fn eligible(&self, _v: usize) -> bool {
        !self.neg_cycle.load(Ordering::Acquire)
    }

    fn forbidden(&self, _kind: usize, v: usize) -> bool {
        let mut best = self.node_value(v);
        for &(u, w) in self.graph.parents(v) {
            let candidate = self.node_value(u).saturating_sub(w);
            if candidate > best {
                best = candidate;
            }
        }
        self.temp[v].store(best, Ordering::Release);
        best > self.node_value(v)
    }

    fn advance_step(&self, _step: usize, v: usize) -> Result<(), Error> {
        if self.budget[v].load(Ordering::Acquire) == 0 {
            self.neg_cycle.store(true, Ordering::Relaxed);
            return Ok(());
        }
        self.price[v].store(self.temp[v].load(Ordering::Acquire), Ordering::Release);
        self.budget[v].fetch_sub(1, Ordering::AcqRel);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_reweights_every_edge_non_negative() {
        let graph = WeightedDigraph::from_arcs(
            6,
            [
                (0, 1, 2),
                (0, 3, 1),
                (1, 2, 1),
                (3, 2, 2),
                (3, 4, 5),
                (2, 4, 3),
                (4, 5, 0),
            ],
        );
        let johnson = Johnson::new(graph);
        let price = johnson.solve().unwrap().unwrap();
        let check = WeightedDigraph::from_arcs(
            6,
            [
                (0, 1, 2),
                (0, 3, 1),
                (1, 2, 1),
                (3, 2, 2),
                (3, 4, 5),
                (2, 4, 3),
                (4, 5, 0),
            ],
        );
        for v in 0..6 {
            for &(u, w) in check.parents(v) {
                assert!(
                    price[v] >= price[u] - w,
                    "edge {u}->{v} (w={w}) violates price[v] >= price[u] - w"
                );
            }
        }
    }

    #[test]
    fn detects_a_negative_cycle() {
        let graph = WeightedDigraph::from_arcs(3, [(0, 1, 1), (1, 2, 1), (2, 1, -5)]);
        let johnson = Johnson::new(graph);
        assert_eq!(johnson.solve().unwrap(), None);
    }

    #[test]
    fn single_vertex_graph() {
        let graph = WeightedDigraph::from_arcs(1, []);
        let johnson = Johnson::new(graph);
        assert_eq!(johnson.solve().unwrap().unwrap(), vec![0]);
    }
}
