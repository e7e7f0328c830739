// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! docindex-git: version history for the docindex builder
//!
//! Reads the most recent commits of a repository together with the files each
//! commit touched, and resolves the currently checked-out branch.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use docindex_git::{GitRepo, WalkOptions};
//!
//! let repo = GitRepo::discover(".").expect("open repo");
//! let commits = repo.walk_commits(&WalkOptions::latest(20)).expect("walk commits");
//!
//! for c in commits.iter().rev() {
//!     println!("{} {} ({} files)", c.short_sha(), c.subject(), c.files.len());
//! }
//! ```

pub mod commit;
pub mod error;
pub mod history;

pub use commit::Commit;
pub use error::GitError;
pub use history::{GitRepo, WalkOptions};

