/*
 * SPDX-FileCopyrightText: 2026 llp-kernel contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*
 * The LLP algorithm instances: each implements `LlpProgram` to define its
 * own state vector, forbidden predicate(s) and advance step(s).
 */

pub(crate) mod sizing;

pub mod bellman_ford;
pub mod boruvka;
pub mod fast_components;
pub mod gale_shapley;
pub mod johnson;
pub mod prefix_sum;
pub mod reduce;

pub use bellman_ford::BellmanFord;
pub use boruvka::Boruvka;
pub use fast_components::FastComponents;
pub use gale_shapley::GaleShapley;
pub use johnson::Johnson;
pub use prefix_sum::PrefixSum;
pub use reduce::Reduce;
