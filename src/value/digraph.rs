/*
 * SPDX-FileCopyrightText: 2026 llp-kernel contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*
 * The weighted directed graph value type: adjacency-matrix form (per
 * vertex, a list of (destination, weight) outgoing arcs) plus the parent
 * lists Bellman-Ford and Johnson drive their forbidden predicates from.
 */

/// A weighted directed graph, stored as per-vertex outgoing arc lists plus
/// the derived per-vertex incoming ("parent") arc lists.
///
/// `parents(v)` is a side product built once at construction, mirroring the
/// loader's duty of building parent lists alongside the outgoing
/// adjacency (SPEC_FULL.md §6).
pub struct WeightedDigraph {
    n: usize,
    out_arcs: Vec<Vec<(usize, i64)>>,
    in_arcs: Vec<Vec<(usize, i64)>>,
}

impl WeightedDigraph {
    /// Builds a graph on `n` vertices from an explicit arc list
    /// `(u, v, weight)` meaning `u -> v`.
    pub fn from_arcs(n: usize, arcs: impl IntoIterator<Item = (usize, usize, i64)>) -> Self {
        let mut out_arcs = vec![Vec::new(); n];
        let mut in_arcs = vec![Vec::new(); n];
        for (u, v, w) in arcs {
            out_arcs[u].push((v, w));
            in_arcs[v].push((u, w));
        }
        WeightedDigraph {
            n,
            out_arcs,
            in_arcs,
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.n
    }

    /// The outgoing arcs of `v` as `(destination, weight)` pairs.
    pub fn successors(&self, v: usize) -> &[(usize, i64)] {
        &self.out_arcs[v]
    }

    /// The incoming arcs of `v` as `(source, weight)` pairs -- the "parent
    /// list" every budgeted instance (Bellman-Ford, Johnson) relaxes `v`
    /// against.
    pub fn parents(&self, v: usize) -> &[(usize, i64)] {
        &self.in_arcs[v]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parents_are_the_transpose_of_successors() {
        let g = WeightedDigraph::from_arcs(3, [(0, 1, 10), (0, 2, 5), (2, 1, 1)]);
        assert_eq!(g.successors(0), &[(1, 10), (2, 5)]);
        assert_eq!(g.parents(1), &[(0, 10), (2, 1)]);
        assert_eq!(g.parents(2), &[(0, 5)]);
        assert!(g.parents(0).is_empty());
    }
}
