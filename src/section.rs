//! The closed set of page sections.
//!
//! Every section the page can show is a [`SectionId`]. The same enumeration
//! drives eligibility ([`crate::resolve`]), navigation labels, and renderer
//! dispatch ([`crate::render`]), so adding a section is a compile error in
//! each of those places until it is handled.
//!
//! ## Canonical Order
//!
//! ```text
//! hero → about → experience → projects → contact → footer
//! ```
//!
//! This is the layout order of the generated page. [`SectionId::ALL`] lists
//! the variants in exactly that order and is the only place it is spelled out.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// A named, independently hideable region of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    About,
    Experience,
    Projects,
    Contact,
    Footer,
}

/// Fixed navigation labels. Footer is deliberately absent: it is never a
/// navigation target.
const NAV_LABELS: &[(SectionId, &str)] = &[
    (SectionId::Hero, "Home"),
    (SectionId::About, "About"),
    (SectionId::Experience, "Experience"),
    (SectionId::Projects, "Projects"),
    (SectionId::Contact, "Contact"),
];

impl SectionId {
    /// All sections in canonical rendering order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Contact,
        SectionId::Footer,
    ];

    /// Identifier used for the DOM id and the navigation anchor.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
            SectionId::Footer => "footer",
        }
    }

    /// In-page anchor `#<id>`.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "#hero",
            SectionId::About => "#about",
            SectionId::Experience => "#experience",
            SectionId::Projects => "#projects",
            SectionId::Contact => "#contact",
            SectionId::Footer => "#footer",
        }
    }

    /// Whether this section may appear in the navigation menu.
    pub fn is_navigable(self) -> bool {
        self != SectionId::Footer
    }

    /// The top-level document field whose presence decides eligibility.
    ///
    /// Hero and footer have no data of their own; both follow `personal`.
    pub fn source_field(self) -> &'static str {
        match self {
            SectionId::Hero | SectionId::Footer => "personal",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Whether the source field must be a list to count as present.
    pub fn requires_list(self) -> bool {
        matches!(self, SectionId::Experience | SectionId::Projects)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display label for a section: the fixed mapping, or the capitalized
/// identifier when the mapping has no entry.
pub fn nav_label(id: SectionId) -> Cow<'static, str> {
    NAV_LABELS
        .iter()
        .find(|(candidate, _)| *candidate == id)
        .map(|(_, label)| Cow::Borrowed(*label))
        .unwrap_or_else(|| Cow::Owned(capitalize(id.as_str())))
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
