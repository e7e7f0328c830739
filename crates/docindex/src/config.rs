//! Configuration for the index builder
//!
//! [`IndexConfig`] is what the builder is constructed with. [`Config`] is the
//! command-line surface of the `docindex` binary and produces an
//! [`IndexConfig`].

use std::path::PathBuf;

use clap::Parser;

/// Number of recent commits searched for document changes
pub const DEFAULT_HISTORY_COUNT: usize = 20;

/// Extension of the documents that make up the index
pub const DOCUMENT_EXTENSION: &str = "html";

/// Default document directory, relative to the project root
pub const DEFAULT_DOCS_DIR: &str = "src/html";

/// Settings for one index build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// Directory holding the documents
    pub docs_dir: PathBuf,
    /// Repository location for history and branch lookups
    pub repo: PathBuf,
    /// Number of recent commits to search
    pub history_count: usize,
    /// Document file extension, without the dot
    pub extension: String,
}

impl IndexConfig {
    /// Config for `docs_dir` in `repo` with default history depth and extension
    #[must_use]
    pub fn new(docs_dir: impl Into<PathBuf>, repo: impl Into<PathBuf>) -> Self {
        Self {
            docs_dir: docs_dir.into(),
            repo: repo.into(),
            history_count: DEFAULT_HISTORY_COUNT,
            extension: DOCUMENT_EXTENSION.to_string(),
        }
    }

    /// Set how many recent commits are searched
    #[must_use]
    pub fn with_history_count(mut self, count: usize) -> Self {
        self.history_count = count;
        self
    }
}

/// docindex - build index-page metadata for a directory of HTML documents
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "docindex")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Directory containing the HTML documents to index
    ///
    /// Defaults to ./src/html.
    #[arg(short, long, env = "DOCINDEX_DOCS")]
    pub docs: Option<PathBuf>,

    /// Repository used for commit history and branch name
    ///
    /// Any path inside the repository works. Defaults to the current
    /// working directory.
    #[arg(short, long, env = "DOCINDEX_REPO")]
    pub repo: Option<PathBuf>,

    /// Number of recent commits to search for document changes
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Write the JSON summary to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long, default_value = "false")]
    pub compact: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so stdout only carries JSON.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - only warnings and errors are logged
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Document directory, defaulting to `src/html`
    #[must_use]
    pub fn docs_path(&self) -> PathBuf {
        self.docs
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCS_DIR))
    }

    /// Repository path, defaulting to the current directory
    #[must_use]
    pub fn repo_path(&self) -> PathBuf {
        self.repo
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// History depth, defaulting to [`DEFAULT_HISTORY_COUNT`]
    #[must_use]
    pub fn history_count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_HISTORY_COUNT)
    }

    /// Builder settings derived from the command line
    #[must_use]
    pub fn index_config(&self) -> IndexConfig {
        IndexConfig::new(self.docs_path(), self.repo_path()).with_history_count(self.history_count())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The document directory doesn't exist or isn't a directory
    /// - The history count is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let docs = self.docs_path();
        if !docs.exists() {
            return Err(ConfigError::DocsDirNotFound(docs));
        }
        if !docs.is_dir() {
            return Err(ConfigError::DocsDirNotDirectory(docs));
        }
        if self.history_count() == 0 {
            return Err(ConfigError::InvalidHistoryCount);
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Document directory not found
    #[error("Document directory not found: {0}")]
    DocsDirNotFound(PathBuf),

    /// Document path is not a directory
    #[error("Document path is not a directory: {0}")]
    DocsDirNotDirectory(PathBuf),

    /// History count of zero
    #[error("History count must be at least 1")]
    InvalidHistoryCount,
}
