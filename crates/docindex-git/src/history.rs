// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit history and branch lookup
//!
//! This module reads recent commits and the active branch from a repository
//! using the `git2` crate.

use crate::commit::Commit;
use crate::error::GitError;
use chrono::{DateTime, TimeZone, Utc};
use git2::{DiffOptions, ErrorCode, Repository, Sort};
use std::path::Path;
use tracing::debug;

/// Configuration for walking commits
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Maximum number of commits to retrieve
    pub limit: Option<usize>,
}

impl WalkOptions {
    /// Create options for walking the N most recent commits
    #[must_use]
    pub fn latest(n: usize) -> Self {
        Self { limit: Some(n) }
    }
}

/// A git repository wrapper for reading history
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Discover and open a git repository containing the given path
    ///
    /// This walks up the directory tree to find a `.git` directory.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if no repository is found.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        debug!(git_dir = %repo.path().display(), "opened repository");
        Ok(Self { repo })
    }

    /// Walk commits from HEAD newest first, collecting the files each one touched
    ///
    /// # Errors
    ///
    /// Returns `GitError` if the repository has no HEAD, cannot be walked, or
    /// holds a commit time outside the representable range.
    pub fn walk_commits(&self, options: &WalkOptions) -> Result<Vec<Commit>, GitError> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME | Sort::TOPOLOGICAL)?;
        revwalk.push_head()?;

        let limit = options.limit.unwrap_or(usize::MAX);
        let mut commits = Vec::new();

        for oid_result in revwalk.take(limit) {
            let git_commit = self.repo.find_commit(oid_result?)?;
            commits.push(self.extract_commit(&git_commit)?);
        }

        debug!(count = commits.len(), "walked commits");
        Ok(commits)
    }

    fn extract_commit(&self, git_commit: &git2::Commit<'_>) -> Result<Commit, GitError> {
        let sha = git_commit.id().to_string();
        let timestamp = commit_time(&sha, git_commit.committer().when().seconds())?;

        Ok(Commit {
            message: git_commit.message().unwrap_or("").to_string(),
            author: git_commit.author().name().unwrap_or("Unknown").to_string(),
            author_email: git_commit.author().email().unwrap_or("").to_string(),
            timestamp,
            files: self.touched_files(git_commit)?,
            sha,
        })
    }

    /// Paths changed relative to the parent (everything for root commits)
    ///
    /// Merge commits report no paths, matching `git log --name-status`.
    fn touched_files(&self, git_commit: &git2::Commit<'_>) -> Result<Vec<String>, GitError> {
        let parent_tree = match git_commit.parent_count() {
            0 => None,
            1 => Some(git_commit.parent(0)?.tree()?),
            _ => return Ok(Vec::new()),
        };
        let tree = git_commit.tree()?;

        let mut opts = DiffOptions::new();
        let diff =
            self.repo
                .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), Some(&mut opts))?;

        Ok(diff
            .deltas()
            .filter_map(|delta| {
                delta
                    .new_file()
                    .path()
                    .or_else(|| delta.old_file().path())
                    .map(|p| p.to_string_lossy().into_owned())
            })
            .collect())
    }

    /// Name of the checked-out branch
    ///
    /// Returns `None` for a detached HEAD. A branch with no commits yet still
    /// resolves to its name.
    ///
    /// # Errors
    ///
    /// Returns `GitError` if HEAD cannot be read at all.
    pub fn current_branch(&self) -> Result<Option<String>, GitError> {
        match self.repo.head() {
            Ok(head) if head.is_branch() => Ok(head.shorthand().map(str::to_string)),
            Ok(_) => Ok(None),
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                let head = self.repo.find_reference("HEAD")?;
                Ok(head
                    .symbolic_target()
                    .map(|target| target.trim_start_matches("refs/heads/").to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn commit_time(sha: &str, seconds: i64) -> Result<DateTime<Utc>, GitError> {
    Utc.timestamp_opt(seconds, 0)
        .single()
        .ok_or_else(|| GitError::InvalidTimestamp {
            sha: sha.to_string(),
            seconds,
        })
}
