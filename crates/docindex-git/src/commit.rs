//! Change records read from version history

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Length of the abbreviated commit identifier
pub const SHORT_SHA_LEN: usize = 7;

/// One commit together with the repository paths it touched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// The commit SHA (40 hex characters)
    pub sha: String,
    /// Full commit message
    pub message: String,
    /// Author name
    pub author: String,
    /// Author email
    pub author_email: String,
    /// Committer timestamp
    pub timestamp: DateTime<Utc>,
    /// Paths touched by the commit, relative to the repository root
    pub files: Vec<String>,
}

impl Commit {
    /// Get the abbreviated SHA
    #[must_use]
    pub fn short_sha(&self) -> &str {
        &self.sha[..SHORT_SHA_LEN.min(self.sha.len())]
    }

    /// Get the first line of the commit message (subject)
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Message text after the subject line, trimmed
    #[must_use]
    pub fn body(&self) -> &str {
        self.message
            .split_once('\n')
            .map(|(_, rest)| rest.trim())
            .unwrap_or("")
    }

    /// Base names of touched files carrying the given extension
    pub fn touched_names<'a>(&'a self, extension: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.files.iter().filter_map(move |file| {
            let path = Path::new(file);
            if path.extension().and_then(|e| e.to_str()) != Some(extension) {
                return None;
            }
            path.file_name().and_then(|n| n.to_str())
        })
    }

    /// Whether any touched file with `extension` has the base name `name`
    #[must_use]
    pub fn touches(&self, name: &str, extension: &str) -> bool {
        self.touched_names(extension).any(|n| n == name)
    }
}
