//! Shared test utilities for the simple-folio test suite.
//!
//! Provides fixture documents, fixture directory setup, and small extractors
//! over resolution results so tests read as assertions about sections and
//! labels rather than about struct plumbing.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let resolution = resolve(&full_document());
//! assert_eq!(nav_labels(&resolution), vec!["Home", "About", /* ... */]);
//! ```

use serde_json::{Value, json};
use std::path::Path;
use tempfile::TempDir;

use crate::document::PortfolioDocument;
use crate::resolve::Resolution;

const FIXTURE_JSON: &str = include_str!("../fixtures/content/portfolio.json");

// =========================================================================
// Fixture documents
// =========================================================================

/// The full fixture document as raw JSON, for tests that mutate it.
///
/// All six sections populated; two experience records (the second without
/// achievements), two projects, and a resume link.
pub fn full_document_value() -> Value {
    serde_json::from_str(FIXTURE_JSON).expect("fixture must be valid JSON")
}

pub fn full_document() -> PortfolioDocument {
    document(full_document_value())
}

/// Only `personal` populated.
pub fn minimal_document() -> PortfolioDocument {
    document(json!({
        "personal": {
            "name": "Ada Lindqvist",
            "title": "Systems Engineer"
        }
    }))
}

/// Wrap a JSON object as a document. Panics on non-objects.
pub fn document(value: Value) -> PortfolioDocument {
    PortfolioDocument::from_value(value).expect("test document must be a JSON object")
}

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    for entry in walkdir::WalkDir::new(&fixtures) {
        let entry = entry.unwrap();
        let rel = entry.path().strip_prefix(&fixtures).unwrap();
        let dst = tmp.path().join(rel);
        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&dst).unwrap();
        } else {
            std::fs::copy(entry.path(), &dst).unwrap();
        }
    }
    tmp
}

// =========================================================================
// Extractors
// =========================================================================

/// Navigation labels in menu order.
pub fn nav_labels(resolution: &Resolution) -> Vec<&str> {
    resolution
        .navigation
        .iter()
        .map(|entry| entry.label.as_str())
        .collect()
}

/// Extract the markup of the element whose `id` attribute is `id`, up to the
/// next section boundary. Good enough for asserting on what a section contains.
pub fn section_html<'a>(html: &'a str, id: &str) -> &'a str {
    let marker = format!(r#"id="{id}""#);
    let start = html
        .find(&marker)
        .unwrap_or_else(|| panic!("element with id '{id}' not found"));
    let rest = &html[start..];
    let end = ["</section>", "</footer>"]
        .iter()
        .filter_map(|close| rest.find(close).map(|pos| pos + close.len()))
        .min()
        .unwrap_or(rest.len());
    &rest[..end]
}
