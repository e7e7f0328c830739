// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for docindex-git

use thiserror::Error;

/// Errors that can occur while reading version history
#[derive(Debug, Error)]
pub enum GitError {
    /// Error from git2 library
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),

    /// No repository at or above the specified path
    #[error("Repository not found: {path}")]
    RepositoryNotFound {
        /// The path that was searched for a repository
        path: String,
    },

    /// Commit time outside the range chrono can represent
    #[error("Commit {sha} has an invalid timestamp: {seconds}")]
    InvalidTimestamp {
        /// The commit SHA
        sha: String,
        /// Seconds since the Unix epoch as stored in the commit
        seconds: i64,
    },
}
