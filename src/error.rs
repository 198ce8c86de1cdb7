// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Error taxonomy for graph construction
//!
//! Construction is pure computation over trusted in-memory records, so the
//! taxonomy is small. Reaching a size or depth cap is normal termination,
//! never an error.

use thiserror::Error;

/// Errors raised while building catalogs and graphs
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The requested seed repository is not in the record set.
    /// Recoverable: callers should surface the name and re-prompt.
    #[error("repository not found: {0}")]
    RepositoryNotFound(String),

    /// A record without a `full_name` cannot be indexed or graphed.
    /// Raised instead of silently dropping the record so the caller can
    /// decide whether to skip it or abort the batch.
    #[error("malformed record at index {index}: missing full_name")]
    MalformedRecord {
        /// Zero-based position of the record in the input sequence
        index: usize,
    },
}
