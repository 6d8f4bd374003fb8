/*
 * SPDX-FileCopyrightText: 2026 llp-kernel contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*
 * Bellman-Ford: single-source shortest distances, budgeted against
 * negative cycles.
 */

use crate::error::Error;
use crate::kernel::{Kernel, LlpProgram};
use crate::value::WeightedDigraph;
use crossbeam_utils::CachePadded;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

/// `+infinity`: unreachable, and the clamp ceiling for saturating relax
/// arithmetic.
pub const SENTINEL: i64 = i64::MAX / 4;

fn saturating_relax(from: i64, weight: i64) -> i64 {
    if from >= SENTINEL {
        SENTINEL
    } else {
        from.saturating_add(weight).min(SENTINEL)
    }
}

/// Parallel single-source shortest distances with negative-cycle detection.
///
/// Each vertex gets a budget of `n - 1` applied relaxations; a relaxation
/// proposed after the budget is spent means more than `n - 1` improvements
/// were needed to settle that vertex, which is only possible if a negative
/// cycle is reachable from `src`.
pub struct BellmanFord {
    graph: WeightedDigraph,
    src: usize,
    d: Vec<AtomicI64>,
    temp: Vec<AtomicI64>,
    budget: Vec<AtomicUsize>,
    /// Read by every worker's `eligible` check each wave; cache-padded to
    /// avoid false sharing with neighboring budget/state entries.
    neg_cycle: CachePadded<AtomicBool>,
}

impl BellmanFord {
    pub fn new(graph: WeightedDigraph, src: usize) -> Self {
        let n = graph.num_vertices();
        let budget_per_vertex = n.saturating_sub(1);
        let d: Vec<AtomicI64> = (0..n)
            .map(|v| AtomicI64::new(if v == src { 0 } else { SENTINEL }))
            .collect();
        let temp = (0..n).map(|_| AtomicI64::new(0)).collect();
        let budget = (0..n)
            .map(|_| AtomicUsize::new(budget_per_vertex))
            .collect();
        BellmanFord {
            graph,
            src,
            d,
            temp,
            budget,
            neg_cycle: CachePadded::new(AtomicBool::new(false)),
        }
    }

    fn node_value(&self, v: usize) -> i64 {
        self.d[v].load(Ordering::Acquire)
    }

    /// Runs to a fixed point. `Ok(None)` if a negative cycle reachable from
    /// `src` was detected; `Ok(Some(d))` otherwise, with the sentinel for
    /// every vertex unreachable from `src`.
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

impl LlpProgram for BellmanFord {
    fn len(&self) -> usize {
        self.graph.num_vertices()
    }

    fn eligible(&self, _v: usize) -> bool {
        !self.neg_cycle.load(Ordering::Acquire)
    }

    fn forbidden(&self, _kind: usize, v: usize) -> bool {
        let mut best = self.node_value(v);
        for &(u, w) in self.graph.parents(v) {
            let relaxed = saturating_relax(self.node_value(u), w);
            if relaxed < best {
                best = relaxed;
            }
        }
        self.temp[v].store(best, Ordering::Release);
        best < self.node_value(v)
    }

    fn advance_step(&self, _step: usize, v: usize) -> Result<(), Error> {
        if self.budget[v].load(Ordering::Acquire) == 0 {
            self.neg_cycle.store(true, Ordering::Relaxed);
            return Ok(());
        }
        self.d[v].store(self.temp[v].load(Ordering::Acquire), Ordering::Release);
        self.budget[v].fetch_sub(1, Ordering::AcqRel);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_bellman_ford_example() {
        // 0 -> 1 (10), 0 -> 2 (-1); vertex 3 unreachable.
        let graph = WeightedDigraph::from_arcs(4, [(0, 1, 10), (0, 2, -1)]);
        let bf = BellmanFord::new(graph, 0);
        let d = bf.solve().unwrap().unwrap();
        assert_eq!(d, vec![0, 10, -1, SENTINEL]);
    }

    #[test]
    fn detects_a_negative_cycle_reachable_from_source() {
        // 0 -> 1 -> 2 -> 1 with the 2 -> 1 edge weighing -5: a negative
        // cycle on 1 <-> 2, reachable from 0.
        let graph = WeightedDigraph::from_arcs(3, [(0, 1, 1), (1, 2, 1), (2, 1, -5)]);
        let bf = BellmanFord::new(graph, 0);
        assert_eq!(bf.solve().unwrap(), None);
    }

    #[test]
    fn single_vertex_graph() {
        let graph = WeightedDigraph::from_arcs(1, []);
        let bf = BellmanFord::new(graph, 0);
        assert_eq!(bf.solve().unwrap().unwrap(), vec![0]);
    }

    #[test]
    fn unreachable_vertex_outside_a_negative_cycle_stays_a_sentinel() {
        let graph = WeightedDigraph::from_arcs(3, [(0, 1, 4)]);
        let bf = BellmanFord::new(graph, 0);
        assert_eq!(bf.solve().unwrap().unwrap(), vec![0, 4, SENTINEL]);
    }
}
