// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Index records
//!
//! [`DocumentRecord`] holds what the index page shows for one document, and
//! [`BuildSummary`] is the full result of one build.

use chrono::{DateTime, Utc};
use docindex_docs::TitleParts;
use docindex_git::Commit;
use serde::{Deserialize, Serialize};

use crate::locale;

/// Status marking a document as not yet published
pub const STATUS_YET: &str = "yet";

/// Metadata for one document in the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    /// File base name
    pub name: String,
    /// First title segment
    pub title: String,
    /// First two characters of `name`
    pub category: String,
    /// Second title segment
    pub category_text: Option<String>,
    /// Third title segment, empty when missing
    pub status: String,
    /// File modification time; `None` for unpublished documents
    pub modified_at: Option<DateTime<Utc>>,
    /// `modified_at` in the fixed Korean locale
    pub modified_at_localized: Option<String>,
    /// Date of the last matching commit
    pub last_commit_date: Option<String>,
    /// Abbreviated SHA of the last matching commit
    pub last_commit_short_hash: Option<String>,
}

impl DocumentRecord {
    /// Build a record from a document's name, whole title text and mtime
    #[must_use]
    pub fn new(name: &str, whole_title: &str, modified: DateTime<Utc>) -> Self {
        let TitleParts {
            title,
            category_text,
            status,
        } = TitleParts::split(whole_title);
        let status = status.unwrap_or_default();

        let (modified_at, modified_at_localized) = if status == STATUS_YET {
            (None, None)
        } else {
            (Some(modified), Some(locale::localized_datetime(modified)))
        };

        Self {
            name: name.to_string(),
            title,
            category: category_of(name),
            category_text,
            status,
            modified_at,
            modified_at_localized,
            last_commit_date: None,
            last_commit_short_hash: None,
        }
    }

    /// Whether the document is marked as not yet published
    #[must_use]
    pub fn is_unpublished(&self) -> bool {
        self.status == STATUS_YET
    }

    /// Whether commit data has been attached
    #[must_use]
    pub fn has_commit(&self) -> bool {
        self.last_commit_short_hash.is_some()
    }

    /// Attach a commit's date and abbreviated SHA
    pub fn set_commit(&mut self, commit: &Commit) {
        self.last_commit_date = Some(locale::localized_date(commit.timestamp));
        self.last_commit_short_hash = Some(commit.short_sha().to_string());
    }
}

/// Category code of a document: the first two characters of its name
#[must_use]
pub fn category_of(name: &str) -> String {
    name.chars().take(2).collect()
}

/// Everything the index template needs from one build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSummary {
    /// Documents in directory listing order
    pub documents: Vec<DocumentRecord>,
    /// Checked-out branch name, empty if unknown
    pub branch: String,
    /// Whether version history could be read
    pub history_available: bool,
}

impl BuildSummary {
    /// Number of documents that received commit data
    #[must_use]
    pub fn documents_with_commits(&self) -> usize {
        self.documents.iter().filter(|d| d.has_commit()).count()
    }

    /// Find a document by file name
    #[must_use]
    pub fn document(&self, name: &str) -> Option<&DocumentRecord> {
        self.documents.iter().find(|d| d.name == name)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: category is always the first two characters of the name
        #[test]
        fn prop_category_is_name_prefix(name in "\\PC{0,30}") {
            let record = DocumentRecord::new(&name, "T", Utc::now());
            let expected: String = name.chars().take(2).collect();
            prop_assert_eq!(&record.category, &expected);
            prop_assert!(name.starts_with(&record.category));
        }

        /// Property: dates are present unless the status is exactly "yet"
        #[test]
        fn prop_dates_suppressed_only_for_yet(status in "(yet|[a-z]{0,8})") {
            let title = format!("T : C : {}", status);
            let record = DocumentRecord::new("01-a.html", &title, Utc::now());
            prop_assert_eq!(record.modified_at.is_none(), status == STATUS_YET);
            prop_assert_eq!(record.modified_at_localized.is_none(), status == STATUS_YET);
        }

        /// Property: serde round trip preserves a record
        #[test]
        fn prop_record_roundtrip(
            name in "[0-9]{2}-[a-z]{1,10}\\.html",
            title in "[A-Za-z ]{0,20}",
            ts in 0i64..2_000_000_000i64,
        ) {
            let modified = DateTime::from_timestamp(ts, 0).unwrap_or_else(Utc::now);
            let record = DocumentRecord::new(&name, &title, modified);
            let json = serde_json::to_string(&record).expect("serialize");
            let back: DocumentRecord = serde_json::from_str(&json).expect("deserialize");
            prop_assert_eq!(record, back);
        }
    }
}
