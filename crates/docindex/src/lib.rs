// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! docindex: index-page metadata for a directory of HTML documents
//!
//! Scans the documents, splits their titles into category and status fields,
//! attaches the last commit touching each file, and produces a plain summary
//! for the index template.
//!
//! # Example
//!
//! ```no_run
//! let summary = docindex::build_index_summary("src/html", ".", 20).expect("build");
//! let context = summary.to_plain().to_value().expect("to json");
//! println!("{context}");
//! ```

use std::path::Path;

use docindex_docs::FsStore;

pub mod builder;
pub mod config;
pub mod error;
pub mod locale;
pub mod plain;
pub mod provider;
pub mod record;

pub use builder::IndexBuilder;
pub use config::IndexConfig;
pub use error::IndexError;
pub use plain::{PlainDocument, PlainSummary};
pub use provider::{BranchProvider, GitHistory, HistoryLookup, HistoryProvider};
pub use record::{BuildSummary, DocumentRecord};

/// Build the index summary for `docs_dir` using the filesystem and git
///
/// # Errors
///
/// Returns `IndexError::Docs` if the document directory or a document cannot
/// be read.
pub fn build_index_summary(
    docs_dir: impl AsRef<Path>,
    repo: impl AsRef<Path>,
    history_count: usize,
) -> Result<BuildSummary, IndexError> {
    let config = IndexConfig::new(docs_dir.as_ref(), repo.as_ref()).with_history_count(history_count);
    IndexBuilder::new(config).build(&FsStore, &GitHistory, &GitHistory)
}
