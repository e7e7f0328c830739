// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Document stores
//!
//! A store lists the entries of a directory (with their type and modification
//! time) and reads whole documents. [`FsStore`] reads the real filesystem;
//! [`MemoryStore`] serves documents held in memory.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::DocsError;

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEntry {
    /// Full path of the entry
    pub path: PathBuf,
    /// Base name of the entry
    pub name: String,
    /// Whether the entry is a regular file
    pub is_file: bool,
    /// Last modification time
    pub modified: DateTime<Utc>,
}

impl DocumentEntry {
    /// Whether this entry is a regular file with the given extension
    #[must_use]
    pub fn is_document(&self, extension: &str) -> bool {
        self.is_file && self.path.extension().and_then(|e| e.to_str()) == Some(extension)
    }
}

/// Source of documents for the index builder
pub trait DocumentStore {
    /// List the entries of `dir` in the order the store yields them
    ///
    /// # Errors
    ///
    /// Returns `DocsError::DirectoryAccess` if the directory cannot be listed.
    fn list(&self, dir: &Path) -> Result<Vec<DocumentEntry>, DocsError>;

    /// Read a whole document as text
    ///
    /// # Errors
    ///
    /// Returns `DocsError::DocumentRead` if the document cannot be read.
    fn read(&self, path: &Path) -> Result<String, DocsError>;
}

/// Store backed by `std::fs`
///
/// Listing order is whatever the operating system returns. Entries are
/// stat'ed through symlinks. Invalid UTF-8 in documents is replaced rather
/// than rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl DocumentStore for FsStore {
    fn list(&self, dir: &Path) -> Result<Vec<DocumentEntry>, DocsError> {
        let access = |source| DocsError::DirectoryAccess {
            path: dir.to_path_buf(),
            source,
        };

        let mut entries = Vec::new();
        for dir_entry in fs::read_dir(dir).map_err(access)? {
            let path = dir_entry.map_err(access)?.path();
            let metadata = fs::metadata(&path).map_err(|source| DocsError::Metadata {
                path: path.clone(),
                source,
            })?;
            let modified = metadata.modified().map_err(|source| DocsError::Metadata {
                path: path.clone(),
                source,
            })?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            entries.push(DocumentEntry {
                name,
                is_file: metadata.is_file(),
                modified: DateTime::<Utc>::from(modified),
                path,
            });
        }

        debug!(dir = %dir.display(), entries = entries.len(), "listed directory");
        Ok(entries)
    }

    fn read(&self, path: &Path) -> Result<String, DocsError> {
        let bytes = fs::read(path).map_err(|source| DocsError::DocumentRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Store serving documents from memory, in insertion order
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    dir: PathBuf,
    files: Vec<(DocumentEntry, String)>,
}

impl MemoryStore {
    /// Create an empty store rooted at `dir`
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            files: Vec::new(),
        }
    }

    /// Add a file with its contents and modification time
    #[must_use]
    pub fn with_file(mut self, name: &str, contents: &str, modified: DateTime<Utc>) -> Self {
        let entry = DocumentEntry {
            path: self.dir.join(name),
            name: name.to_string(),
            is_file: true,
            modified,
        };
        self.files.push((entry, contents.to_string()));
        self
    }

    /// Add a subdirectory entry
    #[must_use]
    pub fn with_dir(mut self, name: &str, modified: DateTime<Utc>) -> Self {
        let entry = DocumentEntry {
            path: self.dir.join(name),
            name: name.to_string(),
            is_file: false,
            modified,
        };
        self.files.push((entry, String::new()));
        self
    }
}

impl DocumentStore for MemoryStore {
    fn list(&self, dir: &Path) -> Result<Vec<DocumentEntry>, DocsError> {
        if dir != self.dir {
            return Err(DocsError::DirectoryAccess {
                path: dir.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        Ok(self.files.iter().map(|(entry, _)| entry.clone()).collect())
    }

    fn read(&self, path: &Path) -> Result<String, DocsError> {
        self.files
            .iter()
            .find(|(entry, _)| entry.is_file && entry.path == path)
            .map(|(_, contents)| contents.clone())
            .ok_or_else(|| DocsError::DocumentRead {
                path: path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
    }
}
