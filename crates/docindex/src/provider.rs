// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Version-history collaborators
//!
//! The builder reads history and the branch name through these traits so it
//! never depends on a real repository. [`GitHistory`] is the `git2`-backed
//! implementation of both.

use std::path::Path;

use docindex_git::{Commit, GitError, GitRepo, WalkOptions};
use tracing::{debug, warn};

/// Source of recent commits
pub trait HistoryProvider {
    /// The `count` most recent commits reachable from HEAD, newest first
    ///
    /// # Errors
    ///
    /// Returns `GitError` if `repo` is not a repository or cannot be walked.
    fn recent_changes(&self, repo: &Path, count: usize) -> Result<Vec<Commit>, GitError>;
}

/// Source of the checked-out branch name
pub trait BranchProvider {
    /// Active branch name, or an empty string when it cannot be determined
    fn current_branch(&self, repo: &Path) -> String;
}

/// History and branch lookups through `git2`
#[derive(Debug, Clone, Copy, Default)]
pub struct GitHistory;

impl HistoryProvider for GitHistory {
    fn recent_changes(&self, repo: &Path, count: usize) -> Result<Vec<Commit>, GitError> {
        GitRepo::discover(repo)?.walk_commits(&WalkOptions::latest(count))
    }
}

impl BranchProvider for GitHistory {
    fn current_branch(&self, repo: &Path) -> String {
        match GitRepo::discover(repo).and_then(|r| r.current_branch()) {
            Ok(Some(branch)) => branch,
            Ok(None) => {
                debug!(repo = %repo.display(), "HEAD is detached, no branch name");
                String::new()
            }
            Err(e) => {
                debug!(repo = %repo.display(), error = %e, "branch lookup failed");
                String::new()
            }
        }
    }
}

/// Outcome of asking a [`HistoryProvider`] for commits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryLookup {
    /// Commits in oldest-first order
    Available(Vec<Commit>),
    /// History could not be read; the build goes on without it
    Unavailable {
        /// Why the lookup failed
        reason: String,
    },
}

impl HistoryLookup {
    /// Query `provider` and put the result in oldest-first order
    ///
    /// Failures are logged and turned into [`HistoryLookup::Unavailable`].
    pub fn fetch<H: HistoryProvider + ?Sized>(provider: &H, repo: &Path, count: usize) -> Self {
        match provider.recent_changes(repo, count) {
            Ok(mut commits) => {
                commits.reverse();
                debug!(count = commits.len(), "read version history");
                Self::Available(commits)
            }
            Err(e) => {
                warn!(repo = %repo.display(), error = %e, "version history unavailable, index will have no commit data");
                Self::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Whether commits were read
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use similar_asserts::assert_eq;

    struct FixedHistory(Vec<Commit>);

    impl HistoryProvider for FixedHistory {
        fn recent_changes(&self, _repo: &Path, count: usize) -> Result<Vec<Commit>, GitError> {
            Ok(self.0.iter().take(count).cloned().collect())
        }
    }

    struct FailingHistory;

    impl HistoryProvider for FailingHistory {
        fn recent_changes(&self, repo: &Path, _count: usize) -> Result<Vec<Commit>, GitError> {
            Err(GitError::RepositoryNotFound {
                path: repo.display().to_string(),
            })
        }
    }

    fn commit(sha_char: char, hour: u32) -> Commit {
        Commit {
            sha: sha_char.to_string().repeat(40),
            message: format!("commit {sha_char}"),
            author: "A".to_string(),
            author_email: "a@example.com".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0).unwrap(),
            files: Vec::new(),
        }
    }

    #[test]
    fn test_fetch_reverses_to_oldest_first() {
        let provider = FixedHistory(vec![commit('c', 3), commit('b', 2), commit('a', 1)]);
        let lookup = HistoryLookup::fetch(&provider, Path::new("."), 20);

        match lookup {
            HistoryLookup::Available(commits) => {
                let shas: Vec<&str> = commits.iter().map(|c| c.short_sha()).collect();
                assert_eq!(shas, vec!["aaaaaaa", "bbbbbbb", "ccccccc"]);
            }
            HistoryLookup::Unavailable { .. } => panic!("Expected history"),
        }
    }

    #[test]
    fn test_fetch_passes_count() {
        let provider = FixedHistory(vec![commit('c', 3), commit('b', 2), commit('a', 1)]);
        let lookup = HistoryLookup::fetch(&provider, Path::new("."), 2);

        match lookup {
            HistoryLookup::Available(commits) => assert_eq!(commits.len(), 2),
            HistoryLookup::Unavailable { .. } => panic!("Expected history"),
        }
    }

    #[test]
    fn test_fetch_failure_is_unavailable() {
        let lookup = HistoryLookup::fetch(&FailingHistory, Path::new("/not/a/repo"), 20);

        assert!(!lookup.is_available());
        match lookup {
            HistoryLookup::Unavailable { reason } => assert!(reason.contains("/not/a/repo")),
            HistoryLookup::Available(_) => panic!("Expected unavailable"),
        }
    }

    #[test]
    fn test_git_history_outside_repository() {
        let lookup = HistoryLookup::fetch(&GitHistory, Path::new("/nonexistent/docindex"), 20);
        assert!(!lookup.is_available());
        assert_eq!(GitHistory.current_branch(Path::new("/nonexistent/docindex")), "");
    }
}
