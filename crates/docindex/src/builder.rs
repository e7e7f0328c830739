// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The index metadata builder
//!
//! One build scans the document directory, turns every document into a
//! [`DocumentRecord`], attaches the last commit that touched it, and reads the
//! branch name.
//!
//! # Example
//!
//! ```no_run
//! use docindex::builder::IndexBuilder;
//! use docindex::config::IndexConfig;
//! use docindex::provider::GitHistory;
//! use docindex_docs::FsStore;
//!
//! let builder = IndexBuilder::new(IndexConfig::new("src/html", "."));
//! let summary = builder.build(&FsStore, &GitHistory, &GitHistory).expect("build");
//! println!("{} documents on {}", summary.documents.len(), summary.branch);
//! ```

use docindex_docs::{DocumentStore, title};
use docindex_git::Commit;
use tracing::{debug, info};

use crate::config::IndexConfig;
use crate::error::IndexError;
use crate::provider::{BranchProvider, HistoryLookup, HistoryProvider};
use crate::record::{BuildSummary, DocumentRecord};

/// Element whose text carries the document metadata
const TITLE_ELEMENT: &str = "title";

/// Builds [`BuildSummary`] values for one configuration
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    config: IndexConfig,
}

impl IndexBuilder {
    /// Create a builder for the given configuration
    #[must_use]
    pub fn new(config: IndexConfig) -> Self {
        Self { config }
    }

    /// The configuration this builder was created with
    #[must_use]
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Read every document in the configured directory, in listing order
    ///
    /// # Errors
    ///
    /// Returns `IndexError::Docs` if the directory cannot be listed or a
    /// document cannot be read.
    pub fn scan<S: DocumentStore + ?Sized>(
        &self,
        store: &S,
    ) -> Result<Vec<DocumentRecord>, IndexError> {
        let mut records = Vec::new();

        for entry in store.list(&self.config.docs_dir)? {
            if !entry.is_document(&self.config.extension) {
                continue;
            }
            let text = store.read(&entry.path)?;
            let whole_title = title::element_text(&text, TITLE_ELEMENT).unwrap_or_default();
            let record = DocumentRecord::new(&entry.name, &whole_title, entry.modified);

            debug!(
                name = %record.name,
                category = %record.category,
                status = %record.status,
                "scanned document"
            );
            records.push(record);
        }

        Ok(records)
    }

    /// Run a full build
    ///
    /// # Errors
    ///
    /// Returns `IndexError::Docs` if the document directory or a document
    /// cannot be read. History failures never surface here.
    pub fn build<S, H, B>(&self, store: &S, history: &H, branch: &B) -> Result<BuildSummary, IndexError>
    where
        S: DocumentStore + ?Sized,
        H: HistoryProvider + ?Sized,
        B: BranchProvider + ?Sized,
    {
        let mut documents = self.scan(store)?;

        let lookup = HistoryLookup::fetch(history, &self.config.repo, self.config.history_count);
        let history_available = match &lookup {
            HistoryLookup::Available(commits) => {
                apply_history(&mut documents, commits, &self.config.extension);
                true
            }
            HistoryLookup::Unavailable { .. } => false,
        };

        let summary = BuildSummary {
            documents,
            branch: branch.current_branch(&self.config.repo),
            history_available,
        };

        info!(
            documents = summary.documents.len(),
            with_commits = summary.documents_with_commits(),
            branch = %summary.branch,
            history_available,
            "built index summary"
        );
        Ok(summary)
    }
}

/// Attach commit data to every record touched by `commits`
///
/// `commits` is walked in the given order and each match overwrites the
/// previous one, so the last matching commit wins. Only touched files with
/// `extension` count, and they are compared by base name.
pub fn apply_history(records: &mut [DocumentRecord], commits: &[Commit], extension: &str) {
    for record in records.iter_mut() {
        for commit in commits {
            if commit.touches(&record.name, extension) {
                record.set_commit(commit);
            }
        }
    }
}
