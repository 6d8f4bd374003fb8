/*
 * SPDX-FileCopyrightText: 2026 llp-kernel contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*
 * Gale-Shapley: stable matching by iterated men-propose / women-resolve
 * rounds, a conformance example of the `LlpProgram` interface.
 */

use crate::error::Error;
use crate::kernel::{Kernel, LlpProgram};
use std::sync::atomic::{AtomicBool, AtomicIsize, AtomicUsize, Ordering};

const PROPOSE: usize = 0;
const RESOLVE: usize = 1;

/// Parallel Gale-Shapley stable matching, men-proposing.
///
/// The one instance in the library where the advance step itself, not just
/// the forbidden predicate, must serialize conflicting writes: several free
/// men can propose to the same woman in one wave. Resolved by partitioning
/// the advance into two sub-steps instead of one, each with a single writer
/// per coordinate: `PROPOSE` is keyed by man and writes only that man's own
/// `proposing_to` scratch; `RESOLVE` is keyed by woman (via
/// `selection_for_step`, since the wave's `L` is man-indexed) and writes
/// only that woman's own `fiance` coordinate, after scanning for every man
/// currently proposing to her.
pub struct GaleShapley {
    n: usize,
    men_pref: Vec<Vec<usize>>,
    /// `women_rank[w][m]` is `m`'s position in woman `w`'s preference list
    /// (lower is more preferred), the inverse of her preference list.
    women_rank: Vec<Vec<usize>>,
    next_proposal: Vec<AtomicUsize>,
    proposing_to: Vec<AtomicIsize>,
    matched: Vec<AtomicBool>,
    fiance: Vec<AtomicIsize>,
}

impl GaleShapley {
    /// `men_pref[v]` and `women_pref[w]` must each be a permutation of
    /// `0..n` (the full preference list), per SPEC_FULL.md §4.10.
    pub fn new(men_pref: Vec<Vec<usize>>, women_pref: Vec<Vec<usize>>) -> Self {
        let n = men_pref.len();
        let women_rank: Vec<Vec<usize>> = women_pref
            .iter()
            .map(|pref| {
                let mut rank = vec![0usize; n];
                for (position, &man) in pref.iter().enumerate() {
                    rank[man] = position;
                }
                rank
            })
            .collect();
        GaleShapley {
            n,
            men_pref,
            women_rank,
            next_proposal: (0..n).map(|_| AtomicUsize::new(0)).collect(),
            proposing_to: (0..n).map(|_| AtomicIsize::new(-1)).collect(),
            matched: (0..n).map(|_| AtomicBool::new(false)).collect(),
            fiance: (0..n).map(|_| AtomicIsize::new(-1)).collect(),
        }
    }

    fn woman_prefers(&self, w: usize, a: usize, b: usize) -> bool {
        self.women_rank[w][a] < self.women_rank[w][b]
    }

    /// Runs to a fixed point. Returns `(fiance, husband)`: `fiance[w]` is
    /// `w`'s matched man, `husband[v]` is the inverse, `v`'s matched woman.
    pub fn solve(&self) -> Result<(Vec<usize>, Vec<usize>), Error> {
        if self.n == 0 {
            return Ok((Vec::new(), Vec::new()));
        }
        let kernel = Kernel::new(self.n);
        kernel.solve(self)?;
        let fiance: Vec<usize> = (0..self.n)
            .map(|w| self.fiance[w].load(Ordering::Acquire) as usize)
            .collect();
        let mut husband = vec![0usize; self.n];
        for (w, &man) in fiance.iter().enumerate() {
            husband[man] = w;
        }
        Ok((fiance, husband))
    }
}

impl LlpProgram for GaleShapley {
    fn len(&self) -> usize {
        self.n
    }

    fn forbidden(&self, _kind: usize, v: usize) -> bool {
        !self.matched[v].load(Ordering::Acquire) && self.next_proposal[v].load(Ordering::Acquire) < self.n
    }

    fn num_advance_steps(&self) -> usize {
        2
    }

    fn selection_for_step(&self, step: usize) -> Option<Vec<usize>> {
        if step == RESOLVE {
            Some((0..self.n).collect())
        } else {
            None
        }
    }

    fn advance_step(&self, step: usize, v: usize) -> Result<(), Error> {
        match step {
            PROPOSE => {
                let next = self.next_proposal[v].load(Ordering::Acquire);
                let woman = self.men_pref[v][next];
                self.proposing_to[v].store(woman as isize, Ordering::Release);
                self.next_proposal[v].fetch_add(1, Ordering::AcqRel);
            }
            RESOLVE => {
                let w = v;
                let mut winner: Option<usize> = None;
                for man in 0..self.n {
                    if self.proposing_to[man].load(Ordering::Acquire) == w as isize {
                        let better = match winner {
                            None => true,
                            Some(current) => self.woman_prefers(w, man, current),
                        };
                        if better {
                            winner = Some(man);
                        }
                    }
                }
                if let Some(winner) = winner {
                    let previous = self.fiance[w].load(Ordering::Acquire);
                    if previous != winner as isize {
                        if previous >= 0 {
                            self.matched[previous as usize].store(false, Ordering::Release);
                        }
                        self.fiance[w].store(winner as isize, Ordering::Release);
                        self.matched[winner].store(true, Ordering::Release);
                    }
                }
            }
            _ => unreachable!("GaleShapley only declares 2 advance steps"),
        }
        Ok(())
    }
}
