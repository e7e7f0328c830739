// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Title extraction
//!
//! Document titles follow the convention `Title : Category text : status`.
//! Missing segments are simply absent; a title with no separator at all is
//! just a title.

use scraper::{Html, Selector};

/// Separator between title segments
pub const TITLE_SEPARATOR: &str = " : ";

/// Concatenated text content of every `element` in `html`
///
/// Returns `None` if `element` is not a valid selector or nothing matches.
#[must_use]
pub fn element_text(html: &str, element: &str) -> Option<String> {
    let selector = Selector::parse(element).ok()?;
    let document = Html::parse_document(html);

    let mut matched = false;
    let mut text = String::new();
    for node in document.select(&selector) {
        matched = true;
        text.extend(node.text());
    }
    matched.then_some(text)
}

/// Positional segments of a document title
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleParts {
    /// First segment (always present, possibly empty)
    pub title: String,
    /// Second segment
    pub category_text: Option<String>,
    /// Third segment
    pub status: Option<String>,
}

impl TitleParts {
    /// Split a whole title on [`TITLE_SEPARATOR`]
    ///
    /// Segments after the third are ignored.
    #[must_use]
    pub fn split(whole: &str) -> Self {
        let mut segments = whole.split(TITLE_SEPARATOR).map(str::to_string);
        Self {
            title: segments.next().unwrap_or_default(),
            category_text: segments.next(),
            status: segments.next(),
        }
    }
}
