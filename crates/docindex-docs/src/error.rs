// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for docindex-docs

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while scanning documents
#[derive(Debug, Error)]
pub enum DocsError {
    /// The document directory is missing or cannot be listed
    #[error("Cannot read document directory {}: {source}", path.display())]
    DirectoryAccess {
        /// Directory that was listed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A directory entry's metadata cannot be read
    #[error("Cannot stat {}: {source}", path.display())]
    Metadata {
        /// Path of the entry
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A document's contents cannot be read
    #[error("Cannot read document {}: {source}", path.display())]
    DocumentRead {
        /// Path of the document
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl DocsError {
    /// Whether this error concerns the directory itself rather than one document
    #[must_use]
    pub fn is_directory_access(&self) -> bool {
        matches!(self, Self::DirectoryAccess { .. })
    }
}
