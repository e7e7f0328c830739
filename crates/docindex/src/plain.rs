// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Template-ready plain data
//!
//! The index template reads a flat object of strings and booleans. This module
//! converts a [`BuildSummary`] into that shape:
//!
//! - `nfiles`: one object per document with `name`, `title`, `category`,
//!   `categoryText`, `status`, `mdate`, `ndate`, `committerDate`, `abbrevHash`
//! - `branch`
//! - `historyAvailable`
//!
//! Dates hidden for unpublished documents become empty strings. Optional
//! fields without a value are left out.

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::error::IndexError;
use crate::record::{BuildSummary, DocumentRecord};

/// Plain form of a [`DocumentRecord`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlainDocument {
    /// File base name
    pub name: String,
    /// First title segment
    pub title: String,
    /// Two-character category code
    pub category: String,
    /// Second title segment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_text: Option<String>,
    /// Third title segment or empty
    pub status: String,
    /// Modification time as RFC 3339 UTC with milliseconds, or empty
    pub mdate: String,
    /// Localized modification time, or empty
    pub ndate: String,
    /// Localized date of the last matching commit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committer_date: Option<String>,
    /// Abbreviated SHA of the last matching commit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbrev_hash: Option<String>,
}

impl From<&DocumentRecord> for PlainDocument {
    fn from(record: &DocumentRecord) -> Self {
        Self {
            name: record.name.clone(),
            title: record.title.clone(),
            category: record.category.clone(),
            category_text: record.category_text.clone(),
            status: record.status.clone(),
            mdate: record
                .modified_at
                .map(|at| at.to_rfc3339_opts(SecondsFormat::Millis, true))
                .unwrap_or_default(),
            ndate: record.modified_at_localized.clone().unwrap_or_default(),
            committer_date: record.last_commit_date.clone(),
            abbrev_hash: record.last_commit_short_hash.clone(),
        }
    }
}

/// Plain form of a [`BuildSummary`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlainSummary {
    /// Documents in listing order
    pub nfiles: Vec<PlainDocument>,
    /// Checked-out branch
    pub branch: String,
    /// Whether commit data could be attached
    pub history_available: bool,
}

impl PlainSummary {
    /// Render as a JSON value for a template context
    ///
    /// # Errors
    ///
    /// Returns `IndexError::Json` if serialization fails.
    pub fn to_value(&self) -> Result<serde_json::Value, IndexError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Render as JSON text, pretty-printed unless `compact`
    ///
    /// # Errors
    ///
    /// Returns `IndexError::Json` if serialization fails.
    pub fn to_json(&self, compact: bool) -> Result<String, IndexError> {
        let json = if compact {
            serde_json::to_string(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };
        Ok(json)
    }
}

impl BuildSummary {
    /// Convert to the plain data handed to the index template
    #[must_use]
    pub fn to_plain(&self) -> PlainSummary {
        PlainSummary {
            nfiles: self.documents.iter().map(PlainDocument::from).collect(),
            branch: self.branch.clone(),
            history_available: self.history_available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use serde_json::json;
    use similar_asserts::assert_eq;

    fn mtime() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 5, 6, 4, 5).unwrap()
    }

    fn summary() -> BuildSummary {
        let mut detail = DocumentRecord::new("02-detail.html", "Detail : Usage", mtime());
        detail.last_commit_date = Some("2024. 1. 6.".to_string());
        detail.last_commit_short_hash = Some("1945ab9".to_string());

        BuildSummary {
            documents: vec![
                DocumentRecord::new("01-intro.html", "Intro : Setup : yet", mtime()),
                detail,
            ],
            branch: "main".to_string(),
            history_available: true,
        }
    }

    #[test]
    fn test_plain_schema() {
        let value = summary().to_plain().to_value().expect("to value");

        assert_eq!(
            value,
            json!({
                "nfiles": [
                    {
                        "name": "01-intro.html",
                        "title": "Intro",
                        "category": "01",
                        "categoryText": "Setup",
                        "status": "yet",
                        "mdate": "",
                        "ndate": ""
                    },
                    {
                        "name": "02-detail.html",
                        "title": "Detail",
                        "category": "02",
                        "categoryText": "Usage",
                        "status": "",
                        "mdate": "2024-01-05T06:04:05.000Z",
                        "ndate": "2024. 1. 5. 오후 3:04:05 (GMT+9)",
                        "committerDate": "2024. 1. 6.",
                        "abbrevHash": "1945ab9"
                    }
                ],
                "branch": "main",
                "historyAvailable": true
            })
        );
    }

    #[test]
    fn test_plain_omits_missing_category_text() {
        let record = DocumentRecord::new("03-x.html", "Only title", mtime());
        let value = serde_json::to_value(PlainDocument::from(&record)).expect("to value");

        assert!(value.get("categoryText").is_none());
        assert!(value.get("committerDate").is_none());
        assert!(value.get("abbrevHash").is_none());
    }

    #[test]
    fn test_plain_json_roundtrip() {
        let plain = summary().to_plain();
        let json = plain.to_json(false).expect("json");
        let back: PlainSummary = serde_json::from_str(&json).expect("parse");
        assert_eq!(plain, back);
    }

    #[test]
    fn test_compact_json_is_single_line() {
        let json = summary().to_plain().to_json(true).expect("json");
        assert!(!json.contains('\n'));
        let pretty = summary().to_plain().to_json(false).expect("json");
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn test_plain_keeps_document_order() {
        let plain = summary().to_plain();
        let names: Vec<&str> = plain.nfiles.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["01-intro.html", "02-detail.html"]);
    }
}
