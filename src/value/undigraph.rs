/*
 * SPDX-FileCopyrightText: 2026 llp-kernel contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*
 * The weighted undirected graph value type: an edge list plus the
 * per-vertex incidence lists FastComponents and Boruvka drive their
 * predicates from.
 */

/// A weighted undirected graph, stored as an edge list plus derived
/// per-vertex incidence lists.
///
/// Every edge `(u, v, w)` is symmetrized into both `u`'s and `v`'s
/// incidence list at construction, matching the loader's duty (SPEC_FULL.md
/// §6) of loading each neighbor `v` of `u` as both `u -> v` and `v -> u`.
pub struct WeightedUndirectedGraph {
    n: usize,
    edges: Vec<(usize, usize, i64)>,
    /// `incidence[v]` is the list of `(neighbor, edge_id, weight)` for
    /// every edge touching `v`.
    incidence: Vec<Vec<(usize, usize, i64)>>,
}

impl WeightedUndirectedGraph {
    /// Builds a graph on `n` vertices from an edge list `(u, v, weight)`.
    /// Self-loops are rejected by FastComponents/Boruvka's callers, not
    /// here, since an empty-neighborhood self-loop is a legal (if useless)
    /// graph shape for other consumers.
    pub fn from_edges(n: usize, edges: impl IntoIterator<Item = (usize, usize, i64)>) -> Self {
        let edges: Vec<(usize, usize, i64)> = edges.into_iter().collect();
        let mut incidence = vec![Vec::new(); n];
        for (id, &(u, v, w)) in edges.iter().enumerate() {
            incidence[u].push((v, id, w));
            incidence[v].push((u, id, w));
        }
        WeightedUndirectedGraph {
            n,
            edges,
            incidence,
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.n
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[(usize, usize, i64)] {
        &self.edges
    }

    pub fn edge(&self, id: usize) -> (usize, usize, i64) {
        self.edges[id]
    }

    /// The neighbors of `v`, ignoring weights -- what FastComponents' outer
    /// forbidden predicate and pointer-jumping sub-steps iterate over.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.incidence[v].iter().map(|&(u, _, _)| u)
    }

    /// The edges incident to `v` as `(neighbor, edge_id, weight)` -- what
    /// Boruvka's cheapest-outgoing-edge step scans.
    pub fn incident_edges(&self, v: usize) -> &[(usize, usize, i64)] {
        &self.incidence[v]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetrized_incidence() {
        let g = WeightedUndirectedGraph::from_edges(4, [(0, 1, 3), (1, 2, 5)]);
        assert_eq!(g.neighbors(0).collect::<Vec<_>>(), vec![1]);
        assert_eq!(g.neighbors(1).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(g.neighbors(3).collect::<Vec<_>>(), Vec::<usize>::new());
        assert_eq!(g.incident_edges(1), &[(0, 0, 3), (2, 1, 5)]);
    }
}
