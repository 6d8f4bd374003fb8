/*
 * SPDX-FileCopyrightText: 2026 llp-kernel contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*
 * Error taxonomy for the LLP kernel and its loaders/dispatcher.
 */

use thiserror::Error;

/// Errors surfaced by loaders, the dispatcher, and the parallel executor.
///
/// Negative-cycle detection is deliberately *not* a variant here: per
/// Bellman-Ford and Johnson's contract it is reported as `Ok(None)` from
/// `solve()`, never as an `Err`.
#[derive(Error, Debug)]
pub enum Error {
    /// A malformed line, out-of-range vertex index, mismatched
    /// destination/weight lengths, truncated file, or duplicate trailing
    /// content.
    #[error("input format error at line {line}: {reason}")]
    InputFormat {
        /// 1-based line number where the problem was detected, or 0 if the
        /// problem spans the whole file (e.g. truncation).
        line: usize,
        reason: String,
    },

    /// A non-positive size or an unknown algorithm name.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A task run by the parallel executor failed; this is the only way a
    /// `solve()` call can fail at runtime once its input has been
    /// successfully parsed.
    #[error("worker failure: {reason}")]
    WorkerFailure { reason: String },
}

impl Error {
    pub fn input_format(line: usize, reason: impl Into<String>) -> Self {
        Error::InputFormat {
            line,
            reason: reason.into(),
        }
    }

    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn worker_failure(reason: impl Into<String>) -> Self {
        Error::WorkerFailure {
            reason: reason.into(),
        }
    }
}
