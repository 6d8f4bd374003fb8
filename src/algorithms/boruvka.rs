/*
 * SPDX-FileCopyrightText: 2026 llp-kernel contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*
 * Boruvka: minimum spanning forest by repeated cheapest-outgoing-edge
 * merges, a conformance example of the `LlpProgram` interface rather than
 * one of the five required instances.
 */

use crate::error::Error;
use crate::kernel::{Kernel, LlpProgram};
use crate::value::WeightedUndirectedGraph;
use std::sync::atomic::{AtomicBool, AtomicIsize, AtomicUsize, Ordering};

const FIND_CHEAPEST: usize = 0;
const FLATTEN: usize = 1;

/// Parallel Boruvka minimum spanning forest.
///
/// Not coordinatewise-monotone in the sense of the five required LLP
/// instances -- its lattice is "number of components remaining," strictly
/// decreasing -- but implemented against the same `LlpProgram` interface.
/// The forbidden predicate (`FIND_CHEAPEST`) is "this component still has
/// an unprocessed cheapest outgoing edge"; the single advance step merges
/// the globally smallest-indexed eligible representative into its chosen
/// target, the one merge direction a round can guarantee without two
/// representatives racing to claim each other (whichever of a pair has the
/// larger index is the one that stays put; the smaller always has a larger
/// target somewhere among the active set, so every round before the last
/// merges at least one component). A round ends with the same
/// pointer-jump-to-rooted-stars flatten `FastComponents` uses (`FLATTEN`),
/// keeping `component[]` fully path-compressed so the next round's
/// membership scan is a plain equality test.
pub struct Boruvka {
    graph: WeightedUndirectedGraph,
    component: Vec<AtomicUsize>,
    cheapest_edge: Vec<AtomicIsize>,
    cheapest_target: Vec<AtomicUsize>,
    in_mst: Vec<AtomicBool>,
}

impl Boruvka {
    pub fn new(graph: WeightedUndirectedGraph) -> Self {
        let n = graph.num_vertices();
        let m = graph.num_edges();
        let component = (0..n).map(AtomicUsize::new).collect();
        let cheapest_edge = (0..n).map(|_| AtomicIsize::new(-1)).collect();
        let cheapest_target = (0..n).map(|_| AtomicUsize::new(0)).collect();
        let in_mst = (0..m).map(|_| AtomicBool::new(false)).collect();
        Boruvka {
            graph,
            component,
            cheapest_edge,
            cheapest_target,
            in_mst,
        }
    }

    fn component_of(&self, v: usize) -> usize {
        self.component[v].load(Ordering::Acquire)
    }

    /// Runs to a fixed point. Returns the MST edge list and the flattened
    /// `component[]` (every vertex mapped to its component's final
    /// representative, the largest index in that component).
    pub fn solve(&self) -> Result<(Vec<(usize, usize, i64)>, Vec<usize>), Error> {
        let n = self.graph.num_vertices();
        if n == 0 {
            return Ok((Vec::new(), Vec::new()));
        }
        let kernel = Kernel::new(n);
        LlpProgram::run(self, &kernel)?;
        let mst_edges = self
            .graph
            .edges()
            .iter()
            .enumerate()
            .filter(|&(id, _)| self.in_mst[id].load(Ordering::Acquire))
            .map(|(_, &edge)| edge)
            .collect();
        let component = (0..n).map(|v| self.component_of(v)).collect();
        Ok((mst_edges, component))
    }
}

impl LlpProgram for Boruvka {
    fn len(&self) -> usize {
        self.graph.num_vertices()
    }

    fn num_forbidden_kinds(&self) -> usize {
        2
    }

    fn forbidden(&self, kind: usize, v: usize) -> bool {
        match kind {
            FIND_CHEAPEST => {
                if self.component_of(v) != v {
                    return false;
                }
                let n = self.graph.num_vertices();
                let mut best: Option<(i64, usize, usize)> = None;
                for u in 0..n {
                    if self.component_of(u) != v {
                        continue;
                    }
                    for &(neighbor, edge_id, weight) in self.graph.incident_edges(u) {
                        let target = self.component_of(neighbor);
                        if target == v {
                            continue;
                        }
                        let better = match best {
                            None => true,
                            Some((best_weight, _, _)) => weight < best_weight,
                        };
                        if better {
                            best = Some((weight, edge_id, target));
                        }
                    }
                }
                match best {
                    Some((_, edge_id, target)) => {
                        self.cheapest_edge[v].store(edge_id as isize, Ordering::Release);
                        self.cheapest_target[v].store(target, Ordering::Release);
                        true
                    }
                    None => {
                        self.cheapest_edge[v].store(-1, Ordering::Release);
                        false
                    }
                }
            }
            FLATTEN => self.component_of(v) != self.component_of(self.component_of(v)),
            _ => unreachable!("Boruvka only defines kinds 0 and 1"),
        }
    }

    fn advance_step(&self, _step: usize, v: usize) -> Result<(), Error> {
        let target = self.cheapest_target[v].load(Ordering::Acquire);
        if target > v {
            let edge_id = self.cheapest_edge[v].load(Ordering::Acquire) as usize;
            self.in_mst[edge_id].store(true, Ordering::Release);
            self.component[v].store(target, Ordering::Release);
        }
        Ok(())
    }

    /// Overridden because a round is "find cheapest, merge, flatten" rather
    /// than a single collect/advance cycle, and the flatten is itself a
    /// nested fixed point, shared with `FastComponents`.
    fn run(&self, kernel: &Kernel) -> Result<(), Error>
    where
        Self: Sized,
    {
        loop {
            let has_forbidden = kernel.collect_forbidden(self, FIND_CHEAPEST);
            if !has_forbidden {
                return Ok(());
            }
            kernel.advance(self)?;
            kernel.inner_fixed_point(self, FLATTEN, |v| {
                let grandparent = self.component_of(self.component_of(v));
                self.component[v].store(grandparent, Ordering::Release);
            })?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_spanning_tree_weight_and_edge_count() {
        let graph = WeightedUndirectedGraph::from_edges(
            5,
            [
                (0, 1, 4),
                (0, 2, 1),
                (1, 2, 2),
                (1, 3, 5),
                (2, 3, 8),
                (3, 4, 3),
                (2, 4, 10),
            ],
        );
        let boruvka = Boruvka::new(graph);
        let (mst, component) = boruvka.solve().unwrap();
        assert_eq!(mst.len(), 4);
        let total_weight: i64 = mst.iter().map(|&(_, _, w)| w).sum();
        assert_eq!(total_weight, 11);
        for v in 1..5 {
            assert_eq!(component[v], component[0]);
        }
    }

    #[test]
    fn disconnected_graph_yields_a_spanning_forest() {
        let graph = WeightedUndirectedGraph::from_edges(4, [(0, 1, 1), (2, 3, 1)]);
        let boruvka = Boruvka::new(graph);
        let (mst, component) = boruvka.solve().unwrap();
        assert_eq!(mst.len(), 2);
        assert_eq!(component[0], component[1]);
        assert_eq!(component[2], component[3]);
        assert_ne!(component[0], component[2]);
    }

    #[test]
    fn single_vertex_graph_has_no_edges() {
        let graph = WeightedUndirectedGraph::from_edges(1, []);
        let boruvka = Boruvka::new(graph);
        let (mst, component) = boruvka.solve().unwrap();
        assert!(mst.is_empty());
        assert_eq!(component, vec![0]);
    }
}
