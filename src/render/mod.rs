//! View rendering: turning a [`Resolution`] into page sections.
//!
//! A [`View`] has one slot per [`SectionId`]. [`render`] walks all six
//! sections and overwrites every slot: eligible ones become
//! [`SlotState::Visible`] with freshly rendered content, the rest become
//! [`SlotState::Hidden`]. Nothing is appended, so rendering the same input
//! twice leaves the view in the same state.
//!
//! ## Dispatch
//!
//! [`SectionId::renderer`] is an exhaustive match over the same enumeration
//! the resolver uses for eligibility, so a new section cannot be resolved
//! without also being renderable.
//!
//! ## Escaping
//!
//! Every piece of document text reaches the page through Maud interpolation,
//! which HTML-escapes it. No renderer in this module uses `PreEscaped`.
//!
//! ## Hooks for the page scripts
//!
//! The motion script finds its targets through attributes set here:
//! `data-animate` on elements that fade in, `data-stagger` on containers
//! whose children animate in sequence, and the `.section-title`, `.card` and
//! `.tag` classes. The contact form carries its simulation parameters as
//! `data-delay-ms` / `data-success-rate`.

mod icons;
mod sections;

pub use icons::{DEFAULT_ICON, icon_class};

use crate::config::ContactFormConfig;
use crate::document::PortfolioDocument;
use crate::resolve::Resolution;
use crate::section::SectionId;
use maud::{Markup, html};
use std::collections::BTreeMap;

/// Inputs to section rendering that don't come from the document.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Year used for the copyright line and for open-ended experience periods.
    pub current_year: i32,
    pub contact_form: &'a ContactFormConfig,
    /// Sections that will be on the page, for in-page links.
    pub visible: &'a [SectionId],
}

impl RenderContext<'_> {
    pub fn is_visible(&self, id: SectionId) -> bool {
        self.visible.contains(&id)
    }
}

/// A section's content renderer.
pub type SectionRenderer = fn(&PortfolioDocument, &RenderContext<'_>) -> Markup;

impl SectionId {
    /// The renderer producing this section's content.
    pub fn renderer(self) -> SectionRenderer {
        match self {
            SectionId::Hero => sections::hero,
            SectionId::About => sections::about,
            SectionId::Experience => sections::experience,
            SectionId::Projects => sections::projects,
            SectionId::Contact => sections::contact,
            SectionId::Footer => sections::footer,
        }
    }
}

/// Visibility and content of one section.
#[derive(Debug, Clone)]
pub enum SlotState {
    Hidden,
    Visible(Markup),
}

impl SlotState {
    pub fn is_visible(&self) -> bool {
        matches!(self, SlotState::Visible(_))
    }
}

/// The page's section slots.
#[derive(Debug, Clone)]
pub struct View {
    slots: BTreeMap<SectionId, SlotState>,
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// A view with every section hidden.
    pub fn new() -> Self {
        Self {
            slots: SectionId::ALL
                .iter()
                .map(|&id| (id, SlotState::Hidden))
                .collect(),
        }
    }

    pub fn slot(&self, id: SectionId) -> &SlotState {
        // Every id is inserted in `new` and slots are only ever replaced.
        &self.slots[&id]
    }

    /// Visible sections in canonical order.
    pub fn visible_sections(&self) -> Vec<SectionId> {
        self.slots
            .iter()
            .filter(|(_, state)| state.is_visible())
            .map(|(id, _)| *id)
            .collect()
    }

    /// The `<main>` sections followed by the `<footer>`, hidden ones included
    /// as empty, `hidden` elements.
    pub fn to_markup(&self) -> Markup {
        html! {
            main #content {
                @for id in SectionId::ALL.iter().filter(|id| **id != SectionId::Footer) {
                    (self.section_markup(*id))
                }
            }
            (self.section_markup(SectionId::Footer))
        }
    }

    fn section_markup(&self, id: SectionId) -> Markup {
        let name = id.as_str();
        match (id, self.slot(id)) {
            (SectionId::Footer, SlotState::Visible(content)) => html! {
                footer.site-footer id=(name) data-section=(name) { (content) }
            },
            (SectionId::Footer, SlotState::Hidden) => html! {
                footer.site-footer id=(name) hidden aria-hidden="true" {}
            },
            (_, SlotState::Visible(content)) => html! {
                section class={ "section section-" (name) } id=(name) data-section=(name) {
                    (content)
                }
            },
            (_, SlotState::Hidden) => html! {
                section class={ "section section-" (name) } id=(name) hidden aria-hidden="true" {}
            },
        }
    }
}

/// Apply a resolution to the view, replacing every slot.
pub fn render(
    view: &mut View,
    resolution: &Resolution,
    document: &PortfolioDocument,
    ctx: &RenderContext<'_>,
) {
    for id in SectionId::ALL {
        let state = if resolution.is_visible(id) {
            SlotState::Visible(id.renderer()(document, ctx))
        } else {
            SlotState::Hidden
        };
        view.slots.insert(id, state);
    }
    tracing::debug!(visible = ?view.visible_sections(), "Rendered sections");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve;
    use crate::test_helpers::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn render_document(document: &PortfolioDocument) -> (View, String) {
        let form = ContactFormConfig::default();
        let resolution = resolve(document);
        let ctx = RenderContext {
            current_year: 2025,
            contact_form: &form,
            visible: &resolution.sections,
        };
        let mut view = View::new();
        render(&mut view, &resolution, document, &ctx);
        let html = view.to_markup().into_string();
        (view, html)
    }

    #[test]
    fn new_view_is_all_hidden() {
        let view = View::new();
        assert!(view.visible_sections().is_empty());
        let html = view.to_markup().into_string();
        assert_eq!(html.matches(r#"aria-hidden="true""#).count(), 6);
    }

    #[test]
    fn visible_sections_match_resolution() {
        let doc = full_document();
        let (view, _) = render_document(&doc);
        assert_eq!(view.visible_sections(), resolve(&doc).sections);
    }

    #[test]
    fn hidden_sections_are_empty() {
        let (view, html) = render_document(&minimal_document());
        assert_eq!(
            view.visible_sections(),
            vec![SectionId::Hero, SectionId::Footer]
        );
        let about = section_html(&html, "about");
        assert!(about.contains("hidden"));
        assert!(about.ends_with("></section>"));
        assert!(!about.contains("section-title"));
    }

    #[test]
    fn render_is_idempotent() {
        let doc = full_document();
        let form = ContactFormConfig::default();
        let resolution = resolve(&doc);
        let ctx = RenderContext {
            current_year: 2025,
            contact_form: &form,
            visible: &resolution.sections,
        };
        let mut view = View::new();
        render(&mut view, &resolution, &doc, &ctx);
        let first = view.to_markup().into_string();
        render(&mut view, &resolution, &doc, &ctx);
        let second = view.to_markup().into_string();
        assert_eq!(first, second);
        assert_eq!(second.matches(r#"class="card experience-card""#).count(), 2);
    }

    #[test]
    fn rerender_with_smaller_document_hides_sections() {
        let form = ContactFormConfig::default();
        let full = full_document();
        let minimal = minimal_document();
        let (full_resolution, minimal_resolution) = (resolve(&full), resolve(&minimal));
        let mut view = View::new();
        let ctx = RenderContext {
            current_year: 2025,
            contact_form: &form,
            visible: &full_resolution.sections,
        };
        render(&mut view, &full_resolution, &full, &ctx);
        let ctx = RenderContext {
            visible: &minimal_resolution.sections,
            ..ctx
        };
        render(&mut view, &minimal_resolution, &minimal, &ctx);
        assert!(!view.slot(SectionId::Projects).is_visible());
        assert!(!view.to_markup().into_string().contains("tidewater"));
    }

    #[test]
    fn dispatch_covers_every_section() {
        let doc = full_document();
        let form = ContactFormConfig::default();
        let ctx = RenderContext {
            current_year: 2025,
            contact_form: &form,
            visible: &SectionId::ALL,
        };
        for id in SectionId::ALL {
            let html = id.renderer()(&doc, &ctx).into_string();
            assert!(!html.is_empty(), "{id} rendered nothing");
        }
    }

    #[test]
    fn document_text_is_escaped() {
        let doc = document(json!({
            "personal": {"name": "<script>alert('x')</script>", "title": "A & B"},
            "about": {"description": "<b>bold</b>", "skills": ["<img src=x>"]},
        }));
        let (_, html) = render_document(&doc);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("A &amp; B"));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!html.contains("<img src=x>"));
    }

    #[test]
    fn main_element_carries_content_id() {
        let (_, html) = render_document(&minimal_document());
        assert!(html.contains(r#"<main id="content">"#));
    }

    #[test]
    fn hero_fallback_links_only_target_visible_sections() {
        let doc = document(json!({
            "personal": {"name": "Ada"},
            "hero": {
                "primaryButton": {"text": "See work"},
                "secondaryButton": {"text": "Say hi"}
            },
            "contact": {"title": "Get in touch"}
        }));
        let (_, html) = render_document(&doc);
        let hero = section_html(&html, "hero");
        assert!(!hero.contains("See work"));
        assert!(hero.contains(r##"href="#contact""##));
        assert!(hero.contains("Say hi"));
    }

    #[test]
    fn footer_outside_main() {
        let (_, html) = render_document(&full_document());
        let main_end = html.find("</main>").unwrap();
        let footer_start = html.find("<footer").unwrap();
        assert!(footer_start > main_end);
    }
}
