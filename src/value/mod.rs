/*
 * SPDX-FileCopyrightText: 2026 llp-kernel contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*
 * Graph/array value types shared by the algorithm instances and loaders.
 */

mod array;
mod digraph;
mod undigraph;

pub use array::IntArray;
pub use digraph::WeightedDigraph;
pub use undigraph::WeightedUndirectedGraph;
