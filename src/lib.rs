/*
 * SPDX-FileCopyrightText: 2026 llp-kernel contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*
 * A library of parallel graph and array algorithms built on a shared
 * lattice-linear-predicate fixed-point kernel: repeatedly find every index
 * whose local state violates its invariant, advance all of them at once,
 * and repeat until none do.
 */

pub mod algorithms;
pub mod dispatch;
pub mod error;
pub mod executor;
pub mod index_set;
pub mod io;
pub mod kernel;
pub mod value;

pub use error::Error;
pub use kernel::{Kernel, LlpProgram};
