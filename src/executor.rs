/*
 * SPDX-FileCopyrightText: 2026 llp-kernel contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*
 * The parallel executor: a dedicated `rayon` thread pool plus the single
 * invoke-all-and-join primitive the orchestrator drives every phase
 * through.
 */

use crate::error::Error;
use rayon::prelude::*;
use rayon::ThreadPool;

/// A reasonable cap on worker count relative to hardware parallelism, so a
/// caller solving many small instances concurrently does not oversubscribe.
const MAX_THREAD_MULTIPLIER: usize = 4;

/// A fixed-size worker pool executing a bounded set of index-keyed tasks in
/// parallel and joining them as a barrier.
///
/// One `ParallelExecutor` is owned by each algorithm instance and is
/// released (the pool torn down) when the instance is dropped.
pub struct ParallelExecutor {
    pool: ThreadPool,
}

impl ParallelExecutor {
    /// Builds a pool sized to `n`, capped at a reasonable multiple of the
    /// available hardware parallelism.
    pub fn new(n: usize) -> Self {
        let hw = std::thread::available_parallelism()
            .map(|p| p.get())
            .unwrap_or(1);
        let num_threads = n.max(1).min(hw * MAX_THREAD_MULTIPLIER);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .expect("failed to build the LLP kernel's worker pool");
        ParallelExecutor { pool }
    }

    /// Invokes `task(v)` for every `v` in `indices`, in parallel, and blocks
    /// until every invocation has actually run to completion, whether or
    /// not any failed.
    ///
    /// No ordering is guaranteed among tasks of the same batch. If any task
    /// fails, the aggregate call fails with one of the observed failures;
    /// every other task still runs to completion regardless (only its
    /// outcome is discarded), since each task writes only its own
    /// coordinate and cannot observe a partial write from a failing
    /// sibling. `map`/`reduce` drive every element unconditionally, unlike
    /// a short-circuiting combinator (`find_any`, `try_fold`) that could
    /// stop dispatching work once a failure surfaces.
    pub fn invoke_all_and_join<F>(&self, indices: &[usize], task: F) -> Result<(), Error>
    where
        F: Fn(usize) -> Result<(), Error> + Sync,
    {
        self.pool.install(|| {
            let failure = indices
                .par_iter()
                .map(|&v| task(v).err())
                .reduce(|| None, Option::or);
            match failure {
                Some(e) => Err(e),
                None => Ok(()),
            }
        })
    }

    /// Like [`invoke_all_and_join`](Self::invoke_all_and_join), but for
    /// infallible per-index work, which is the common case for advance
    /// steps that cannot fail.
    pub fn invoke_all_and_join_infallible<F>(&self, indices: &[usize], task: F)
    where
        F: Fn(usize) + Sync,
    {
        self.pool.install(|| {
            indices.par_iter().for_each(|&v| task(v));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn runs_every_index_exactly_once() {
        let executor = ParallelExecutor::new(100);
        let touched = (0..100).map(|_| AtomicUsize::new(0)).collect::<Vec<_>>();
        let indices: Vec<usize> = (0..100).collect();
        executor.invoke_all_and_join_infallible(&indices, |v| {
            touched[v].fetch_add(1, Ordering::Relaxed);
        });
        assert!(touched.iter().all(|c| c.load(Ordering::Relaxed) == 1));
    }

    #[test]
    fn propagates_first_failure() {
        let executor = ParallelExecutor::new(16);
        let indices: Vec<usize> = (0..16).collect();
        let result = executor.invoke_all_and_join(&indices, |v| {
            if v == 7 {
                Err(Error::worker_failure("boom"))
            } else {
                Ok(())
            }
        });
        assert!(result.is_err());
    }

    #[test]
    fn every_task_runs_even_when_one_fails() {
        let executor = ParallelExecutor::new(16);
        let touched = (0..16).map(|_| AtomicUsize::new(0)).collect::<Vec<_>>();
        let indices: Vec<usize> = (0..16).collect();
        let result = executor.invoke_all_and_join(&indices, |v| {
            touched[v].fetch_add(1, Ordering::Relaxed);
            if v == 7 {
                Err(Error::worker_failure("boom"))
            } else {
                Ok(())
            }
        });
        assert!(result.is_err());
        assert!(touched.iter().all(|c| c.load(Ordering::Relaxed) == 1));
    }
}
