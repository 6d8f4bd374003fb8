/*
 * SPDX-FileCopyrightText: 2026 llp-kernel contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*
 * Reduce: parallel subtree-sum reduction, the simplest LLP instance and the
 * summation-tree building block PrefixSum reuses.
 */

use super::sizing::reduce_padded_len;
use crate::error::Error;
use crate::kernel::{Kernel, LlpProgram};
use crate::value::IntArray;
use std::sync::atomic::{AtomicI64, Ordering};

/// `-infinity` for the Reduce/PrefixSum lattice: low enough that any real
/// partial sum compares greater, but far from `i64::MIN` so saturating
/// arithmetic never wraps.
pub const NEG_INF: i64 = i64::MIN / 4;

/// Parallel subtree-sum reduction over an implicit binary tree.
///
/// `G` has `padded_len - 1` nodes: non-leaf-parents at
/// `[0, padded_len/2 - 1)` and leaf-parents at
/// `[padded_len/2 - 1, padded_len - 1)`, each leaf-parent combining two
/// (possibly zero-padded) entries of the input array.
pub struct Reduce {
    array: IntArray,
    num_nodes: usize,
    non_leaf_parent_bound: usize,
    g: Vec<AtomicI64>,
    temp: Vec<AtomicI64>,
}

impl Reduce {
    pub fn new(array: IntArray) -> Self {
        let padded_len = reduce_padded_len(array.len());
        Self::with_padded_len(array, padded_len)
    }

    /// Builds the engine over an explicit `padded_len` rather than deriving
    /// it from `array.len()`. `PrefixSum` uses this to build the same kind
    /// of tree at its own sizing (`sizing::tree_padded_len`) to serve as
    /// its summation tree `S`.
    pub(crate) fn with_padded_len(array: IntArray, padded_len: usize) -> Self {
        let num_nodes = padded_len.saturating_sub(1);
        let non_leaf_parent_bound = (padded_len / 2).saturating_sub(1);
        let g = (0..num_nodes).map(|_| AtomicI64::new(NEG_INF)).collect();
        let temp = (0..num_nodes).map(|_| AtomicI64::new(0)).collect();
        Reduce {
            array,
            num_nodes,
            non_leaf_parent_bound,
            g,
            temp,
        }
    }

    /// The children-combine value for `v`, per SPEC_FULL.md §4.4: the sum
    /// of the two children for an internal node, or the sum of the two
    /// (possibly padded) input entries for a leaf-parent.
    fn combine(&self, v: usize) -> i64 {
        let padded_len = self.num_nodes + 1;
        if v < self.non_leaf_parent_bound {
            self.node_value(2 * v + 1) + self.node_value(2 * v + 2)
        } else {
            let base = 2 * v + 2 - padded_len;
            self.array.get(base) + self.array.get(base + 1)
        }
    }

    fn node_value(&self, v: usize) -> i64 {
        self.g[v].load(Ordering::Acquire)
    }

    /// Runs to a fixed point and returns the whole tree: `G[0..num_nodes)`,
    /// where `num_nodes` is `n` itself (odd `n`, one zero-padding leaf) or
    /// `n - 1` (even `n`, no padding needed) -- the heap-array convention
    /// leaves no slot for a node beyond what the input actually needs.
    pub fn solve(&self) -> Result<Vec<i64>, Error> {
        self.run()?;
        Ok((0..self.num_nodes).map(|i| self.node_value(i)).collect())
    }

    /// Runs to a fixed point and returns the full internal tree, used by
    /// `PrefixSum` as its summation tree `S`. Identical to
    /// [`solve`](Self::solve); kept as a separate name for that call site's
    /// clarity.
    pub fn full_tree(&self) -> Result<Vec<i64>, Error> {
        self.solve()
    }

    fn run(&self) -> Result<(), Error> {
        let kernel = Kernel::new(self.num_nodes);
        kernel.solve(self)
    }
}

impl LlpProgram for Reduce {
    fn len(&self) -> usize {
        self.num_nodes
    }

    fn forbidden(&self, _kind: usize, v: usize) -> bool {
        let combined = self.combine(v);
        self.temp[v].store(combined, Ordering::Release);
        self.node_value(v) < combined
    }

    fn advance_step(&self, _step: usize, v: usize) -> Result<(), Error> {
        self.g[v].store(self.temp[v].load(Ordering::Acquire), Ordering::Release);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_reduce_example() {
        let array = IntArray::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        let reduce = Reduce::new(array);
        let tree = reduce.solve().unwrap();
        assert_eq!(tree, vec![55, 37, 18, 34, 3, 7, 11, 15, 19]);
    }

    #[test]
    fn root_is_total_sum_and_internal_nodes_sum_children() {
        let array = IntArray::new(vec![4, -2, 7, 1, 0, 9, -3, 5]);
        let total: i64 = (0..8).map(|i| array.get(i)).sum();
        let reduce = Reduce::new(array);
        let full = reduce.full_tree().unwrap();
        assert_eq!(full[0], total);
        for v in 0..reduce.non_leaf_parent_bound {
            assert_eq!(full[v], full[2 * v + 1] + full[2 * v + 2]);
        }
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let reduce = Reduce::new(IntArray::new(vec![]));
        assert_eq!(reduce.solve().unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn power_of_two_padding_boundary() {
        // n = 7 pads to 8, and the output is still length 7.
        let array = IntArray::new(vec![1, 1, 1, 1, 1, 1, 1]);
        assert_eq!(reduce_padded_len(array.len()), 8);
        let reduce = Reduce::new(array);
        let out = reduce.solve().unwrap();
        assert_eq!(out.len(), 7);
        assert_eq!(out[0], 7);
    }
}
