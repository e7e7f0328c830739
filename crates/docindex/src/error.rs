// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for docindex

use thiserror::Error;

/// Errors that abort an index build
///
/// Missing version history is not among them: it degrades the summary
/// instead (see [`crate::provider::HistoryLookup`]).
#[derive(Debug, Error)]
pub enum IndexError {
    /// Document directory or document could not be read
    #[error(transparent)]
    Docs(#[from] docindex_docs::DocsError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
