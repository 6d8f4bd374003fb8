/*
 * SPDX-FileCopyrightText: 2026 llp-kernel contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*
 * The index set `L`: a bitset over `[0, n)` safe for concurrent `set` from
 * many workers, built on word-level atomic OR rather than a lock.
 */

use std::sync::atomic::{AtomicU64, Ordering};

const BITS: usize = 64;

/// A bitset over `[0, n)`.
///
/// `set` is safe to call concurrently from many workers: distinct (and even
/// coinciding) bits OR together correctly via `fetch_or` on the backing
/// word. `clear` and iteration are not meant to race with `set`; the kernel
/// only clears between waves and only iterates after a wave's barrier.
pub struct IndexSet {
    len: usize,
    words: Vec<AtomicU64>,
}

impl IndexSet {
    pub fn new(len: usize) -> Self {
        let num_words = len.div_ceil(BITS).max(1);
        let mut words = Vec::with_capacity(num_words);
        words.resize_with(num_words, || AtomicU64::new(0));
        IndexSet { len, words }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Clears every bit. Must not be called concurrently with `set`.
    pub fn clear(&self) {
        for word in &self.words {
            word.store(0, Ordering::Relaxed);
        }
    }

    /// Sets bit `i`. Safe to call from many workers concurrently, even for
    /// the same `i` or bits sharing a word.
    pub fn set(&self, i: usize) {
        debug_assert!(i < self.len);
        let (word, bit) = (i / BITS, i % BITS);
        self.words[word].fetch_or(1u64 << bit, Ordering::Relaxed);
    }

    pub fn test(&self, i: usize) -> bool {
        debug_assert!(i < self.len);
        let (word, bit) = (i / BITS, i % BITS);
        (self.words[word].load(Ordering::Relaxed) >> bit) & 1 != 0
    }

    pub fn cardinality(&self) -> usize {
        self.words
            .iter()
            .map(|w| w.load(Ordering::Relaxed).count_ones() as usize)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| w.load(Ordering::Relaxed) == 0)
    }

    /// Iterates the set bits in ascending order. Not meant to run
    /// concurrently with `set`/`clear`.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(move |(wi, w)| {
            let word = w.load(Ordering::Relaxed);
            (0..BITS).filter_map(move |bit| {
                let idx = wi * BITS + bit;
                if idx < self.len && (word >> bit) & 1 != 0 {
                    Some(idx)
                } else {
                    None
                }
            })
        })
    }

    /// A snapshot `Vec<usize>` of the set bits, convenient as a parallel
    /// iteration source for `rayon`.
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_test_clear() {
        let l = IndexSet::new(130);
        assert!(l.is_empty());
        l.set(0);
        l.set(63);
        l.set(64);
        l.set(129);
        assert!(l.test(0));
        assert!(l.test(63));
        assert!(l.test(64));
        assert!(l.test(129));
        assert!(!l.test(1));
        assert_eq!(l.cardinality(), 4);
        assert_eq!(l.to_vec(), vec![0, 63, 64, 129]);
        l.clear();
        assert!(l.is_empty());
    }

    #[test]
    fn concurrent_set_union() {
        use std::sync::Arc;
        use std::thread;

        let l = Arc::new(IndexSet::new(1000));
        let mut handles = vec![];
        for t in 0..8 {
            let l = Arc::clone(&l);
            handles.push(thread::spawn(move || {
                for i in (t..1000).step_by(8) {
                    l.set(i);
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(l.cardinality(), 1000);
    }
}
