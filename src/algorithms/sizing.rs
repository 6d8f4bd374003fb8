/*
 * SPDX-FileCopyrightText: 2026 llp-kernel contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*
 * Tree-sizing conventions shared by Reduce and PrefixSum. The two build
 * different implicit binary trees over the same input length and round
 * differently, so each gets its own helper rather than a single shared
 * "padded length" living on the array value type.
 */

/// The padded length `N` Reduce builds its `N - 1`-node tree over: `n`
/// itself if already even, else `n + 1` (a single zero-padded slot so the
/// bottom level can pair up). `0` for `n == 0`.
///
/// Reduce's tree is a plain array-backed binary heap, which (unlike
/// PrefixSum's iterative segment tree) needs no power-of-two leaf count to
/// stay a valid complete tree: node `v`'s children `2v+1`/`2v+2` are real
/// tree nodes exactly when they are `< N - 1`, and leaf-parents read
/// straight from `A` otherwise, for any `N`. Rounding all the way to the
/// next power of two would desynchronize the leaf-parent pairing from the
/// input order (verified against the worked seed example).
pub(crate) fn reduce_padded_len(n: usize) -> usize {
    if n == 0 {
        0
    } else if n % 2 == 0 {
        n
    } else {
        n + 1
    }
}

/// The padded length `N` PrefixSum builds its `2N - 1`-node tree over: the
/// smallest power of two `>= n` (at least `2`, so the tree has at least one
/// internal node). `0` for `n == 0`.
///
/// PrefixSum trims its output to the *first* `n` entries of the leaf
/// level (the zero-padding, if any, lands on the trailing leaves), so
/// (unlike Reduce) an exact `N = n` tree is already correct when `n` is a
/// power of two.
pub(crate) fn tree_padded_len(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        n.next_power_of_two().max(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_padding_only_rounds_odd_lengths_up_by_one() {
        assert_eq!(reduce_padded_len(0), 0);
        assert_eq!(reduce_padded_len(7), 8);
        assert_eq!(reduce_padded_len(8), 8);
        assert_eq!(reduce_padded_len(10), 10);
    }

    #[test]
    fn tree_padding_is_exact_at_powers_of_two() {
        assert_eq!(tree_padded_len(0), 0);
        assert_eq!(tree_padded_len(1), 2);
        assert_eq!(tree_padded_len(7), 8);
        assert_eq!(tree_padded_len(8), 8);
    }
}
