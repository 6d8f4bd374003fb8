/*
 * SPDX-FileCopyrightText: 2026 llp-kernel contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*
 * PrefixSum: inclusive prefix sums via a top-down pass over a precomputed
 * Reduce summation tree.
 */

use super::reduce::{Reduce, NEG_INF};
use super::sizing::tree_padded_len;
use crate::error::Error;
use crate::kernel::{Kernel, LlpProgram};
use crate::value::IntArray;
use std::sync::atomic::{AtomicI64, Ordering};

/// Parallel inclusive prefix sum.
///
/// `G` has `2N - 1` nodes, read as a binary tree in 1-indexed heap-child
/// order (`V = v + 1`, children `2V`/`2V + 1`). `G[0]` is the fixed root
/// (`0`); every other node either copies its parent (a left child) or adds
/// its left sibling's subtree sum -- from the precomputed summation tree
/// `S`, or directly from `A` at the leaf level -- to its parent (a right
/// child). The output adds each leaf's own array entry on top, turning the
/// tree's exclusive prefixes into inclusive ones.
pub struct PrefixSum {
    array: IntArray,
    padded_len: usize,
    summation_tree: Vec<i64>,
    num_nodes: usize,
    g: Vec<AtomicI64>,
    temp: Vec<AtomicI64>,
}

impl PrefixSum {
    pub fn new(array: IntArray) -> Result<Self, Error> {
        let padded_len = tree_padded_len(array.len());
        let summation_tree = if padded_len == 0 {
            Vec::new()
        } else {
            Reduce::with_padded_len(array.clone(), padded_len).full_tree()?
        };
        let num_nodes = if padded_len == 0 { 0 } else { 2 * padded_len - 1 };
        let g: Vec<AtomicI64> = (0..num_nodes)
            .map(|v| AtomicI64::new(if v == 0 { 0 } else { NEG_INF }))
            .collect();
        let temp = (0..num_nodes).map(|_| AtomicI64::new(0)).collect();
        Ok(PrefixSum {
            array,
            padded_len,
            summation_tree,
            num_nodes,
            g,
            temp,
        })
    }

    fn node_value(&self, v: usize) -> i64 {
        self.g[v].load(Ordering::Acquire)
    }

    /// The proposed value for `v >= 1`, per SPEC_FULL.md §4.5's three-way
    /// split on `V = v + 1`.
    fn target(&self, v: usize) -> i64 {
        let capital_v = v + 1;
        let parent = self.node_value(capital_v / 2 - 1);
        if capital_v % 2 == 0 {
            parent
        } else if capital_v < self.padded_len {
            parent + self.summation_tree[capital_v - 2]
        } else {
            parent + self.array.get(capital_v - self.padded_len - 1)
        }
    }

    /// Runs to a fixed point and returns the inclusive prefix sum array.
    pub fn solve(&self) -> Result<Vec<i64>, Error> {
        let n = self.array.len();
        if n == 0 {
            return Ok(Vec::new());
        }
        let kernel = Kernel::new(self.num_nodes);
        kernel.solve(self)?;
        // Leaves always start at the fixed offset `padded_len - 1`
        // (standard iterative-segment-tree layout); any zero-padding is at
        // the *end* of `A`, so the real data occupies the *first* `n` of
        // the `padded_len` leaves, not the last `n`.
        let first_leaf = self.padded_len - 1;
        Ok((0..n)
            .map(|i| self.node_value(first_leaf + i) + self.array.get(i))
            .collect())
    }
}

impl LlpProgram for PrefixSum {
    fn len(&self) -> usize {
        self.num_nodes
    }

    fn eligible(&self, v: usize) -> bool {
        v != 0
    }

    fn forbidden(&self, _kind: usize, v: usize) -> bool {
        let proposed = self.target(v);
        self.temp[v].store(proposed, Ordering::Release);
        self.node_value(v) < proposed
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
    fn seed_prefix_sum_example() {
        let array = IntArray::new(vec![1, 2, 3, 4, 5, 6, 7, 8]);
        let prefix_sum = PrefixSum::new(array).unwrap();
        let out = prefix_sum.solve().unwrap();
        assert_eq!(out, vec![1, 3, 6, 10, 15, 21, 28, 36]);
    }

    #[test]
    fn last_entry_equals_reduce_of_the_whole_array() {
        let a = vec![4, -2, 7, 1, 0, 9, -3, 5, 2];
        let total: i64 = a.iter().sum();
        let prefix_sum = PrefixSum::new(IntArray::new(a)).unwrap();
        let out = prefix_sum.solve().unwrap();
        assert_eq!(*out.last().unwrap(), total);
    }

    #[test]
    fn power_of_two_padding_boundary() {
        // n = 7, not a power of two: the tree pads to N = 8 but the output
        // is still length 7.
        let a = vec![1, 1, 1, 1, 1, 1, 1];
        let prefix_sum = PrefixSum::new(IntArray::new(a)).unwrap();
        let out = prefix_sum.solve().unwrap();
        assert_eq!(out, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let prefix_sum = PrefixSum::new(IntArray::new(vec![])).unwrap();
        assert_eq!(prefix_sum.solve().unwrap(), Vec::<i64>::new());
    }
}
