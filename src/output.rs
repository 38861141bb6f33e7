//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Sections
//!     hero         visible
//!     about        visible
//!     experience   hidden
//!     projects     visible
//!     contact      hidden
//!     footer       visible
//!
//! Navigation
//! 001 Home → #hero
//! 002 About → #about
//! 003 Projects → #projects
//! 004 Resume → assets/resume.pdf
//! ```
//!
//! ## Build
//!
//! One block per [`BuildEvent`], printed as the build progresses:
//!
//! ```text
//! Resolved 4 of 6 sections
//!     hero, about, projects, footer
//! Content ready: Ada Lindqvist
//! Assets
//!     assets/style.3f9a1c2e.css
//!     assets/site.81b0d4aa.js
//! Page → dist/index.html
//!     Copied 2 content assets
//! ```
//!
//! # Architecture
//!
//! Each output has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::generate::{BuildEvent, BuildSummary};
use crate::resolve::Resolution;
use crate::section::SectionId;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn section_list(sections: &[SectionId]) -> String {
    sections
        .iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Check output
// ============================================================================

/// Format the result of `check`: every section's visibility, then the menu.
pub fn format_check_output(resolution: &Resolution) -> Vec<String> {
    let mut lines = vec!["Sections".to_string()];
    for descriptor in &resolution.descriptors {
        let state = if descriptor.eligible {
            "visible"
        } else {
            "hidden"
        };
        lines.push(format!(
            "{}{:<12} {}",
            indent(1),
            descriptor.id.as_str(),
            state
        ));
    }

    lines.push(String::new());
    lines.push("Navigation".to_string());
    if resolution.navigation.is_empty() {
        lines.push(format!("{}(empty)", indent(1)));
    }
    for (i, entry) in resolution.navigation.iter().enumerate() {
        lines.push(format!(
            "{} {} → {}",
            format_index(i + 1),
            entry.label,
            entry.target.href()
        ));
    }
    lines
}

/// Print check output to stdout.
pub fn print_check_output(resolution: &Resolution) {
    for line in format_check_output(resolution) {
        println!("{}", line);
    }
}

// ============================================================================
// Build output
// ============================================================================

/// Format a single build progress event as display lines.
pub fn format_build_event(event: &BuildEvent) -> Vec<String> {
    match event {
        BuildEvent::FetchFailed { source, message } => vec![
            "Could not load portfolio document".to_string(),
            format!("{}Source: {}", indent(1), source),
            format!("{}Error: {}", indent(1), message),
            format!("{}Wrote recovery page", indent(1)),
        ],
        BuildEvent::Resolved(resolution) => {
            let mut lines = vec![format!(
                "Resolved {} of {} sections",
                resolution.sections.len(),
                SectionId::ALL.len()
            )];
            if !resolution.sections.is_empty() {
                lines.push(format!(
                    "{}{}",
                    indent(1),
                    section_list(&resolution.sections)
                ));
            }
            lines
        }
        BuildEvent::ContentReady { document } => {
            let name = document.personal().text("name").unwrap_or("(unnamed)");
            vec![format!("Content ready: {}", name)]
        }
        BuildEvent::AssetsWritten { files } => {
            let mut lines = vec!["Assets".to_string()];
            lines.extend(files.iter().map(|f| format!("{}{}", indent(1), f)));
            lines
        }
        BuildEvent::PageWritten {
            path,
            copied_assets,
        } => {
            let mut lines = vec![format!("Page → {}", path.display())];
            if *copied_assets > 0 {
                let noun = if *copied_assets == 1 {
                    "asset"
                } else {
                    "assets"
                };
                lines.push(format!(
                    "{}Copied {} content {}",
                    indent(1),
                    copied_assets,
                    noun
                ));
            }
            lines
        }
    }
}

/// Format the closing summary of a successful build.
pub fn format_build_summary(summary: &BuildSummary) -> Vec<String> {
    vec![format!(
        "Built {} sections, {} menu entries",
        summary.resolution.sections.len(),
        summary.resolution.navigation.len()
    )]
}

/// Print build summary to stdout.
pub fn print_build_summary(summary: &BuildSummary) {
    for line in format_build_summary(summary) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::WrittenAssets;
    use crate::resolve::resolve;
    use crate::test_helpers::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::path::PathBuf;
    use std::sync::Arc;

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn check_output_full_document() {
        let lines = format_check_output(&resolve(&full_document()));
        assert_eq!(
            lines,
            vec![
                "Sections",
                "    hero         visible",
                "    about        visible",
                "    experience   visible",
                "    projects     visible",
                "    contact      visible",
                "    footer       visible",
                "",
                "Navigation",
                "001 Home → #hero",
                "002 About → #about",
                "003 Experience → #experience",
                "004 Projects → #projects",
                "005 Contact → #contact",
                "006 Resume → assets/resume.pdf",
            ]
        );
    }

    #[test]
    fn check_output_empty_document() {
        let lines = format_check_output(&resolve(&document(json!({}))));
        assert!(lines.contains(&"    hero         hidden".to_string()));
        assert_eq!(lines.last().unwrap(), "    (empty)");
    }

    #[test]
    fn resolved_event_lists_sections() {
        let event = BuildEvent::Resolved(resolve(&minimal_document()));
        assert_eq!(
            format_build_event(&event),
            vec!["Resolved 2 of 6 sections", "    hero, footer"]
        );
    }

    #[test]
    fn resolved_event_without_sections() {
        let event = BuildEvent::Resolved(resolve(&document(json!({}))));
        assert_eq!(format_build_event(&event), vec!["Resolved 0 of 6 sections"]);
    }

    #[test]
    fn content_ready_event_names_owner() {
        let event = BuildEvent::ContentReady {
            document: Arc::new(full_document()),
        };
        assert_eq!(
            format_build_event(&event),
            vec!["Content ready: Ada Lindqvist"]
        );
    }

    #[test]
    fn fetch_failed_event() {
        let event = BuildEvent::FetchFailed {
            source: "https://example.com/p.json".into(),
            message: "https://example.com/p.json returned HTTP 404".into(),
        };
        let lines = format_build_event(&event);
        assert_eq!(lines[0], "Could not load portfolio document");
        assert_eq!(lines[1], "    Source: https://example.com/p.json");
        assert!(lines[2].ends_with("HTTP 404"));
    }

    #[test]
    fn page_written_event_pluralizes() {
        let one = BuildEvent::PageWritten {
            path: PathBuf::from("dist/index.html"),
            copied_assets: 1,
        };
        assert_eq!(
            format_build_event(&one),
            vec!["Page → dist/index.html", "    Copied 1 content asset"]
        );
        let none = BuildEvent::PageWritten {
            path: PathBuf::from("dist/index.html"),
            copied_assets: 0,
        };
        assert_eq!(format_build_event(&none), vec!["Page → dist/index.html"]);
    }

    #[test]
    fn build_summary_line() {
        let summary = BuildSummary {
            resolution: resolve(&full_document()),
            index: PathBuf::from("dist/index.html"),
            assets: WrittenAssets {
                stylesheet: "assets/style.00000000.css".into(),
                script: "assets/site.00000000.js".into(),
                motion: None,
            },
            copied_assets: 0,
        };
        assert_eq!(
            format_build_summary(&summary),
            vec!["Built 6 sections, 6 menu entries"]
        );
    }
}
