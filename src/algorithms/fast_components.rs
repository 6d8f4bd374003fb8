/*
 * SPDX-FileCopyrightText: 2026 llp-kernel contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*
 * FastComponents: parallel connected components via pointer-jumping to
 * rooted stars.
 */

use crate::error::Error;
use crate::kernel::{Kernel, LlpProgram};
use crate::value::WeightedUndirectedGraph;
use std::sync::atomic::{AtomicUsize, Ordering};

const OUTER: usize = 0;
const POINTER_JUMP: usize = 1;

/// Parallel connected components, by repeatedly hooking each tree's root to
/// the largest parent seen in its neighborhood and pointer-jumping every
/// vertex straight to its root.
///
/// Every component settles with `parent[v]` equal to the largest vertex
/// index in that component.
pub struct FastComponents {
    graph: WeightedUndirectedGraph,
    parent: Vec<AtomicUsize>,
    vmax: Vec<AtomicUsize>,
}

impl FastComponents {
    pub fn new(graph: WeightedUndirectedGraph) -> Self {
        let n = graph.num_vertices();
        let parent = (0..n).map(AtomicUsize::new).collect();
        let vmax = (0..n).map(|_| AtomicUsize::new(0)).collect();
        FastComponents {
            graph,
            parent,
            vmax,
        }
    }

    fn parent_of(&self, v: usize) -> usize {
        self.parent[v].load(Ordering::Acquire)
    }

    /// Runs to a fixed point and returns `parent[]`.
    pub fn solve(&self) -> Result<Vec<usize>, Error> {
        let n = self.graph.num_vertices();
        if n == 0 {
            return Ok(Vec::new());
        }
        let kernel = Kernel::new(n);
        LlpProgram::run(self, &kernel)?;
        Ok((0..n).map(|v| self.parent_of(v)).collect())
    }
}

impl LlpProgram for FastComponents {
    fn len(&self) -> usize {
        self.graph.num_vertices()
    }

    fn num_forbidden_kinds(&self) -> usize {
        2
    }

    fn forbidden(&self, kind: usize, v: usize) -> bool {
        match kind {
            OUTER => self
                .graph
                .neighbors(v)
                .any(|u| self.parent_of(v) < self.parent_of(u)),
            POINTER_JUMP => self.parent_of(v) != self.parent_of(self.parent_of(v)),
            _ => unreachable!("FastComponents only defines kinds 0 and 1"),
        }
    }

    fn num_advance_steps(&self) -> usize {
        2
    }

    /// Sub-step 0 (vmax compute) runs over every vertex and sub-step 1
    /// (hook) over every current root, regardless of `L`: a tree member
    /// can carry fresh information a root needs even when neither the
    /// member nor the root is individually outer-forbidden this wave.
    fn selection_for_step(&self, step: usize) -> Option<Vec<usize>> {
        let n = self.graph.num_vertices();
        match step {
            0 => Some((0..n).collect()),
            1 => Some((0..n).filter(|&v| self.parent_of(v) == v).collect()),
            _ => None,
        }
    }

    fn advance_step(&self, step: usize, v: usize) -> Result<(), Error> {
        match step {
            0 => {
                let mut m = self.parent_of(v);
                for u in self.graph.neighbors(v) {
                    m = m.max(self.parent_of(u));
                }
                self.vmax[v].store(m, Ordering::Release);
            }
            1 => {
                debug_assert_eq!(self.parent_of(v), v, "selection_for_step(1) only selects roots");
                // Aggregate over every current member of v's tree, not just
                // v's own graph-neighbors: a member hooked in an earlier
                // wave need not be graph-adjacent to its root at all.
                let mut m = self.vmax[v].load(Ordering::Acquire);
                for u in 0..self.graph.num_vertices() {
                    if self.parent_of(u) == v {
                        m = m.max(self.vmax[u].load(Ordering::Acquire));
                    }
                }
                self.parent[v].store(m, Ordering::Release);
            }
            _ => unreachable!("FastComponents only declares 2 advance steps"),
        }
        Ok(())
    }

    /// Overridden because sub-step 3 (pointer-jump to rooted stars) is
    /// itself a nested fixed point, not an ordinary advance sub-step.
    fn run(&self, kernel: &Kernel) -> Result<(), Error>
    where
        Self: Sized,
    {
        loop {
            let has_forbidden = kernel.collect_forbidden(self, OUTER);
            if !has_forbidden {
                return Ok(());
            }
            kernel.advance(self)?;
            kernel.inner_fixed_point(self, POINTER_JUMP, |v| {
                let grandparent = self.parent_of(self.parent_of(v));
                self.parent[v].store(grandparent, Ordering::Release);
            })?;
        }
    }
}
