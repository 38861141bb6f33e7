//! Per-section content renderers.
//!
//! Each renderer is a straight projection of document fields into markup.
//! The only branching is omission: a sub-fragment whose field is missing or
//! malformed is left out, and the rest of the section renders normally.

use super::RenderContext;
use super::icons::icon_class;
use crate::config::ContactFormConfig;
use crate::document::{PortfolioDocument, Record};
use crate::section::SectionId;
use maud::{Markup, html};
use std::collections::BTreeSet;

// ============================================================================
// Shared fragments
// ============================================================================

fn section_title(title: &str) -> Markup {
    html! {
        h2.section-title data-animate="fade-up" { (title) }
    }
}

/// Technology chips.
fn tag_list(tags: &[&str], extra_class: &str) -> Markup {
    html! {
        @if !tags.is_empty() {
            ul class={ "tag-list " (extra_class) } data-stagger {
                @for tag in tags {
                    li.tag { (tag) }
                }
            }
        }
    }
}

/// Icon-only links for `{platform, url, label}` records.
fn social_links(links: &[Record<'_>]) -> Markup {
    html! {
        @if links.iter().any(|l| l.url("url").is_some()) {
            ul.social-links {
                @for link in links {
                    @if let Some(url) = link.url("url") {
                        @let platform = link.text("platform").unwrap_or("");
                        @let label = link.text_any(&["label", "platform"]).unwrap_or("Link");
                        li {
                            a.social-link href=(url) target="_blank" rel="noopener noreferrer"
                                aria-label=(label) title=(label) {
                                i class=(icon_class(platform)) aria-hidden="true" {}
                            }
                        }
                    }
                }
            }
        }
    }
}

struct CardLink<'a> {
    label: &'static str,
    icon: &'static str,
    href: &'a str,
}

/// Fields of an experience or project card.
struct Card<'a> {
    kind: &'static str,
    heading: Option<&'a str>,
    role: Option<&'a str>,
    meta: Vec<&'a str>,
    image: Option<&'a str>,
    description: Option<&'a str>,
    achievements: Vec<&'a str>,
    technologies: Vec<&'a str>,
    links: Vec<CardLink<'a>>,
}

fn card(card: &Card<'_>) -> Markup {
    html! {
        article class={ "card " (card.kind) "-card" } data-animate="fade-up" {
            @if let Some(src) = card.image {
                div.card-image {
                    img src=(src) alt=(card.heading.unwrap_or("")) loading="lazy";
                }
            }
            header.card-header {
                div.card-heading {
                    @if let Some(heading) = card.heading {
                        h3.card-title { (heading) }
                    }
                    @if let Some(role) = card.role {
                        p.card-role { (role) }
                    }
                }
                @if !card.meta.is_empty() {
                    div.card-meta {
                        @for item in &card.meta {
                            span { (item) }
                        }
                    }
                }
            }
            @if let Some(description) = card.description {
                p.card-description { (description) }
            }
            @if !card.achievements.is_empty() {
                ul.achievements {
                    @for achievement in &card.achievements {
                        li { (achievement) }
                    }
                }
            }
            (tag_list(&card.technologies, "tech-tags"))
            @if !card.links.is_empty() {
                div.card-links {
                    @for link in &card.links {
                        a.card-link href=(link.href) target="_blank" rel="noopener noreferrer" {
                            i class=(link.icon) aria-hidden="true" {}
                            " " (link.label)
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Section renderers
// ============================================================================

/// Hero call-to-action buttons as `(text, href, class)`.
///
/// A button without an explicit link falls back to its default section, and
/// is dropped when that section isn't on the page.
fn hero_buttons<'a>(
    hero: &Record<'a>,
    ctx: &RenderContext<'_>,
) -> Vec<(&'a str, &'a str, &'static str)> {
    [
        ("primaryButton", "btn btn-primary", SectionId::Projects),
        ("secondaryButton", "btn btn-secondary", SectionId::Contact),
    ]
    .into_iter()
    .filter_map(|(key, class, fallback)| {
        let button = hero.record(key);
        let text = button.text("text")?;
        let href = match button.url_any(&["href", "link"]) {
            Some(href) => href,
            None if ctx.is_visible(fallback) => fallback.anchor(),
            None => return None,
        };
        Some((text, href, class))
    })
    .collect()
}

pub(super) fn hero(document: &PortfolioDocument, ctx: &RenderContext<'_>) -> Markup {
    let personal = document.personal();
    let hero = document.hero();
    let buttons = hero_buttons(&hero, ctx);

    html! {
        div.container.hero-inner {
            div.hero-text {
                @if let Some(greeting) = hero.text("greeting") {
                    p.hero-greeting data-animate="fade-up" { (greeting) }
                }
                @if let Some(name) = personal.text("name") {
                    h1.hero-name data-animate="fade-up" { (name) }
                }
                @if let Some(title) = personal.text("title") {
                    p.hero-title data-animate="fade-up" { (title) }
                }
                @if let Some(description) = hero.text("description") {
                    p.hero-description data-animate="fade-up" { (description) }
                }
                @if !buttons.is_empty() {
                    div.hero-actions data-animate="fade-up" {
                        @for (text, href, class) in &buttons {
                            a class=(class) href=(href) { (text) }
                        }
                    }
                }
            }
            @if let Some(avatar) = personal.url("avatar") {
                div.hero-avatar data-animate="fade-in" {
                    img src=(avatar) alt=(personal.text("name").unwrap_or("Portrait"));
                }
            }
        }
    }
}

pub(super) fn about(document: &PortfolioDocument, ctx: &RenderContext<'_>) -> Markup {
    let about = document.about();
    let paragraphs = about.paragraphs("description");
    let skills = about.strings("skills");
    let stats = about_stats(document, ctx.current_year);

    html! {
        div.container {
            (section_title("About Me"))
            div.about-grid {
                @if !paragraphs.is_empty() {
                    div.about-text data-stagger {
                        @for paragraph in &paragraphs {
                            p data-animate="fade-up" { (paragraph) }
                        }
                    }
                }
                @if !stats.is_empty() {
                    dl.about-stats data-stagger {
                        @for (value, label) in &stats {
                            div.stat data-animate="fade-up" {
                                dt.stat-value data-count=(value) { (value) "+" }
                                dd.stat-label { (label) }
                            }
                        }
                    }
                }
                @if !skills.is_empty() {
                    div.skills {
                        h3.skills-title { "Skills" }
                        (tag_list(&skills, "skill-tags"))
                    }
                }
            }
        }
    }
}

/// Headline numbers for the about section. A stat with nothing to count is
/// left out rather than shown as zero.
fn about_stats(document: &PortfolioDocument, current_year: i32) -> Vec<(usize, &'static str)> {
    let mut stats = Vec::new();
    if let Some(years) = document.experience_span_years(current_year) {
        stats.push((years as usize, "Years Experience"));
    }
    let projects = document.projects().len();
    if projects > 0 {
        stats.push((projects, "Projects"));
    }
    let technologies: BTreeSet<String> = document
        .experience()
        .iter()
        .chain(document.projects().iter())
        .flat_map(|record| record.strings("technologies"))
        .map(str::to_lowercase)
        .collect();
    if !technologies.is_empty() {
        stats.push((technologies.len(), "Technologies"));
    }
    stats
}

pub(super) fn experience(document: &PortfolioDocument, _ctx: &RenderContext<'_>) -> Markup {
    let records = document.experience();
    html! {
        div.container {
            (section_title("Experience"))
            div.timeline {
                @for record in &records {
                    (card(&Card {
                        kind: "experience",
                        heading: record.text_any(&["company", "title"]),
                        role: record.text_any(&["role", "position"]),
                        meta: [record.text("period"), record.text("location")]
                            .into_iter()
                            .flatten()
                            .collect(),
                        image: None,
                        description: record.text("description"),
                        achievements: record.strings("achievements"),
                        technologies: record.strings("technologies"),
                        links: Vec::new(),
                    }))
                }
            }
        }
    }
}

pub(super) fn projects(document: &PortfolioDocument, _ctx: &RenderContext<'_>) -> Markup {
    let records = document.projects();
    html! {
        div.container {
            (section_title("Featured Projects"))
            div.project-grid {
                @for record in &records {
                    (card(&Card {
                        kind: "project",
                        heading: record.text_any(&["title", "name"]),
                        role: record.text("role"),
                        meta: record.text("period").into_iter().collect(),
                        image: record.url("image"),
                        description: record.text("description"),
                        achievements: record.strings("achievements"),
                        technologies: record.strings("technologies"),
                        links: project_links(record),
                    }))
                }
            }
        }
    }
}

fn project_links<'a>(record: &Record<'a>) -> Vec<CardLink<'a>> {
    let mut links = Vec::new();
    if let Some(href) = record.url_any(&["link", "url", "demo"]) {
        links.push(CardLink {
            label: "Live",
            icon: "fas fa-external-link-alt",
            href,
        });
    }
    if let Some(href) = record.url_any(&["repository", "github", "repo"]) {
        links.push(CardLink {
            label: "Code",
            icon: "fab fa-github",
            href,
        });
    }
    links
}

pub(super) fn contact(document: &PortfolioDocument, ctx: &RenderContext<'_>) -> Markup {
    let contact = document.contact();
    let personal = document.personal();
    let social = contact.records("social");
    let email = personal.text("email");
    let phone = personal.text("phone");
    let location = personal.text("location");

    html! {
        div.container {
            (section_title(contact.text("title").unwrap_or("Get In Touch")))
            @if let Some(description) = contact.text("description") {
                p.section-subtitle data-animate="fade-up" { (description) }
            }
            div.contact-grid {
                div.contact-info data-animate="fade-up" {
                    @if let Some(email) = email {
                        a.contact-item href={ "mailto:" (email) } {
                            i.fas.fa-envelope aria-hidden="true" {}
                            span { (email) }
                        }
                    }
                    @if let Some(phone) = phone {
                        a.contact-item href={ "tel:" (tel_href(phone)) } {
                            i.fas.fa-phone aria-hidden="true" {}
                            span { (phone) }
                        }
                    }
                    @if let Some(location) = location {
                        div.contact-item {
                            i.fas.fa-map-marker-alt aria-hidden="true" {}
                            span { (location) }
                        }
                    }
                    (social_links(&social))
                }
                @if ctx.contact_form.enabled {
                    (contact_form(ctx.contact_form))
                }
            }
        }
    }
}

/// Digits and a leading `+` only.
fn tel_href(phone: &str) -> String {
    phone
        .chars()
        .enumerate()
        .filter(|(i, c)| c.is_ascii_digit() || (*i == 0 && *c == '+'))
        .map(|(_, c)| c)
        .collect()
}

fn contact_form(config: &ContactFormConfig) -> Markup {
    html! {
        form #contact-form .contact-form data-animate="fade-up" novalidate
            data-delay-ms=(config.delay_ms) data-success-rate=(config.success_rate) {
            div.form-group {
                label for="contact-name" { "Name" }
                input #contact-name type="text" name="name" autocomplete="name" required;
            }
            div.form-group {
                label for="contact-email" { "Email" }
                input #contact-email type="email" name="email" autocomplete="email" required;
            }
            div.form-group {
                label for="contact-subject" { "Subject" }
                input #contact-subject type="text" name="subject";
            }
            div.form-group {
                label for="contact-message" { "Message" }
                textarea #contact-message name="message" rows="5" required {}
            }
            button.btn.btn-primary type="submit" {
                span.btn-label { "Send Message" }
            }
            p.form-status role="status" aria-live="polite" {}
        }
    }
}

pub(super) fn footer(document: &PortfolioDocument, ctx: &RenderContext<'_>) -> Markup {
    let name = document.personal().text("name");
    let social = document.contact().records("social");
    html! {
        div.container.footer-inner {
            p.copyright {
                "© " (ctx.current_year)
                @if let Some(name) = name {
                    " " (name)
                }
                ". All rights reserved."
            }
            (social_links(&social))
            a.back-to-top href="#hero" aria-label="Back to top" {
                i.fas.fa-arrow-up aria-hidden="true" {}
            }
        }
    }
}
