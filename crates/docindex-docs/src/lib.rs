// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! docindex-docs: HTML document scanning for docindex
//!
//! Lists the documents of a directory, reads them, and pulls the
//! `" : "`-delimited fields out of their `<title>` element.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use docindex_docs::{DocumentStore, FsStore, TitleParts, title};
//! use std::path::Path;
//!
//! let store = FsStore;
//! for entry in store.list(Path::new("src/html")).expect("list") {
//!     if entry.is_document("html") {
//!         let text = store.read(&entry.path).expect("read");
//!         let whole = title::element_text(&text, "title").unwrap_or_default();
//!         let parts = TitleParts::split(&whole);
//!         println!("{} -> {}", entry.name, parts.title);
//!     }
//! }
//! ```

pub mod error;
pub mod store;
pub mod title;

pub use error::DocsError;
pub use store::{DocumentEntry, DocumentStore, FsStore, MemoryStore};
pub use title::{TITLE_SEPARATOR, TitleParts};
