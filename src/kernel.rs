/*
 * SPDX-FileCopyrightText: 2026 llp-kernel contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*
 * The LLP orchestrator: the `LlpProgram` capability trait and the default
 * collect-forbidden / advance fixed-point loop that drives it.
 */

use crate::error::Error;
use crate::executor::ParallelExecutor;
use crate::index_set::IndexSet;
use log::debug;

/// The contract an algorithm instance supplies to the kernel.
///
/// This is the trait-of-hooks alternative to the source's abstract base
/// class with overridable methods (SPEC_FULL.md §9): every method here
/// takes `&self`, because many workers call `forbidden`/`advance_step`
/// concurrently during a phase, and interior mutability over the instance's
/// state vector (atomics, partitioned by index) is what makes that sound.
pub trait LlpProgram: Sync {
    /// The index count `n`.
    fn len(&self) -> usize;

    /// Whether `v` may be forbidden this iteration. Defaults to "always".
    fn eligible(&self, _v: usize) -> bool {
        true
    }

    /// The number of forbidden-predicate variants this program exposes.
    /// Defaults to 1; only multi-phase programs like `FastComponents` need
    /// more than one.
    fn num_forbidden_kinds(&self) -> usize {
        1
    }

    /// Whether `v`'s local state violates its invariant, under predicate
    /// variant `kind`.
    fn forbidden(&self, kind: usize, v: usize) -> bool;

    /// The number of ordered sub-steps in one advance wave. Defaults to 1.
    fn num_advance_steps(&self) -> usize {
        1
    }

    /// Perform sub-step `step` on index `v`, advancing it monotonically.
    fn advance_step(&self, step: usize, v: usize) -> Result<(), Error>;

    /// If `Some`, sub-step `step` runs over exactly this index set instead
    /// of the wave's `L`. Defaults to `None` (use `L`).
    fn selection_for_step(&self, _step: usize) -> Option<Vec<usize>> {
        None
    }

    /// Runs this program to a fixed point. The default delegates to
    /// [`Kernel::solve`]; multi-phase programs (`FastComponents`,
    /// `Boruvka`) override this to interleave an inner fixed point between
    /// outer waves.
    fn run(&self, kernel: &Kernel) -> Result<(), Error>
    where
        Self: Sized,
    {
        kernel.solve(self)
    }
}

/// The fixed-point driver: one executor and one index set `L`, reused
/// across every wave of a solve.
pub struct Kernel {
    executor: ParallelExecutor,
    l: IndexSet,
}

impl Kernel {
    pub fn new(n: usize) -> Self {
        Kernel {
            executor: ParallelExecutor::new(n),
            l: IndexSet::new(n),
        }
    }

    pub fn l(&self) -> &IndexSet {
        &self.l
    }

    /// Clears `L`, then in parallel sets `L[v]` for every eligible `v`
    /// forbidden under predicate variant `kind`. Returns whether `L` is
    /// non-empty.
    pub fn collect_forbidden<P: LlpProgram + ?Sized>(&self, program: &P, kind: usize) -> bool {
        self.l.clear();
        let all: Vec<usize> = (0..program.len()).collect();
        self.executor.invoke_all_and_join_infallible(&all, |v| {
            if program.eligible(v) && program.forbidden(kind, v) {
                self.l.set(v);
            }
        });
        !self.l.is_empty()
    }

    /// Runs every advance sub-step, in order, over `L` (or the sub-step's
    /// override selection), joining before the next sub-step begins.
    pub fn advance<P: LlpProgram + ?Sized>(&self, program: &P) -> Result<(), Error> {
        for step in 0..program.num_advance_steps() {
            let indices = match program.selection_for_step(step) {
                Some(v) => v,
                None => self.l.to_vec(),
            };
            self.executor
                .invoke_all_and_join(&indices, |v| program.advance_step(step, v))?;
        }
        Ok(())
    }

    /// The default outer loop: `collect_forbidden(0)` / `advance` until no
    /// index is forbidden.
    pub fn solve<P: LlpProgram + ?Sized>(&self, program: &P) -> Result<(), Error> {
        let mut wave = 0usize;
        loop {
            let has_forbidden = self.collect_forbidden(program, 0);
            if !has_forbidden {
                debug!("fixed point reached after {wave} wave(s)");
                return Ok(());
            }
            debug!(
                "wave {wave}: {} forbidden index(es)",
                self.l.cardinality()
            );
            self.advance(program)?;
            wave += 1;
        }
    }

    /// Runs the inner pointer-jump-to-fixed-point loop used by
    /// `FastComponents`' sub-step 3: while `collect_forbidden(kind)` is
    /// non-empty, invoke `jump` over `L` and join before checking again.
    pub fn inner_fixed_point<P, F>(&self, program: &P, kind: usize, jump: F) -> Result<(), Error>
    where
        P: LlpProgram + ?Sized,
        F: Fn(usize) + Sync,
    {
        loop {
            let has_forbidden = self.collect_forbidden(program, kind);
            if !has_forbidden {
                return Ok(());
            }
            let indices = self.l.to_vec();
            self.executor.invoke_all_and_join_infallible(&indices, &jump);
        }
    }
}
