//! Content resolution: which sections are shown and what the menu links to.
//!
//! [`resolve`] makes one eligibility pass over [`SectionId::ALL`] and derives
//! both outputs from it:
//!
//! ```text
//! document ──► descriptors (6, canonical order)
//!                 ├─► sections    = eligible ids
//!                 └─► navigation  = eligible ids − footer (+ Resume)
//! ```
//!
//! Because visible sections and navigation entries come out of the same
//! [`Resolution`], a section can never be shown without its menu entry or
//! linked without being shown.
//!
//! ## Eligibility
//!
//! No section is eligible unless `personal` is non-empty. Beyond that:
//!
//! | Section | Eligible when |
//! |---------|---------------|
//! | hero, footer | `personal` is non-empty |
//! | about | `about` is non-empty (sub-fields are not validated) |
//! | experience, projects | the field is a list with at least one element |
//! | contact | `contact` is non-empty |
//!
//! The resume entry is only appended when at least one section is visible.
//!
//! Resolution is pure and total: a partially populated document never fails,
//! it just resolves to fewer sections.

use crate::document::PortfolioDocument;
use crate::section::{SectionId, nav_label};
use serde::Serialize;

/// Label of the trailing resume entry.
pub const RESUME_LABEL: &str = "Resume";

/// Eligibility verdict for one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionDescriptor {
    pub id: SectionId,
    pub eligible: bool,
}

/// Where a navigation entry points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum NavTarget {
    /// In-page anchor `#<id>`.
    Section(SectionId),
    /// External link (the resume).
    External(String),
}

impl NavTarget {
    pub fn href(&self) -> String {
        match self {
            NavTarget::Section(id) => id.anchor().to_string(),
            NavTarget::External(url) => url.clone(),
        }
    }
}

/// A single menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    pub label: String,
    pub target: NavTarget,
}

/// Output of [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// One descriptor per known section, in canonical order.
    pub descriptors: Vec<SectionDescriptor>,
    /// Eligible sections in canonical order.
    pub sections: Vec<SectionId>,
    pub navigation: Vec<NavigationEntry>,
}

impl Resolution {
    pub fn is_visible(&self, id: SectionId) -> bool {
        self.sections.contains(&id)
    }

    /// Section ids linked from the menu, in menu order.
    pub fn section_ids_in_nav(&self) -> Vec<SectionId> {
        self.navigation
            .iter()
            .filter_map(|entry| match entry.target {
                NavTarget::Section(id) => Some(id),
                NavTarget::External(_) => None,
            })
            .collect()
    }
}

/// Decide eligibility for a single section.
pub fn is_eligible(document: &PortfolioDocument, id: SectionId) -> bool {
    if !document.has_content("personal") {
        return false;
    }
    let field = id.source_field();
    if id.requires_list() {
        document.has_items(field)
    } else {
        document.has_content(field)
    }
}

/// Resolve the visible sections and the navigation menu from one pass.
pub fn resolve(document: &PortfolioDocument) -> Resolution {
    let descriptors: Vec<SectionDescriptor> = SectionId::ALL
        .iter()
        .map(|&id| SectionDescriptor {
            id,
            eligible: is_eligible(document, id),
        })
        .collect();

    let sections: Vec<SectionId> = descriptors
        .iter()
        .filter(|d| d.eligible)
        .map(|d| d.id)
        .collect();

    let mut navigation: Vec<NavigationEntry> = sections
        .iter()
        .filter(|id| id.is_navigable())
        .map(|&id| NavigationEntry {
            label: nav_label(id).into_owned(),
            target: NavTarget::Section(id),
        })
        .collect();

    if let Some(url) = document.resume_url().filter(|_| !sections.is_empty()) {
        navigation.push(NavigationEntry {
            label: RESUME_LABEL.to_string(),
            target: NavTarget::External(url.to_string()),
        });
    }

    tracing::debug!(
        sections = ?sections,
        nav_entries = navigation.len(),
        "Resolved portfolio sections"
    );

    Resolution {
        descriptors,
        sections,
        navigation,
    }
}
