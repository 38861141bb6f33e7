//! Site generation.
//!
//! Turns a content directory into a single-page portfolio:
//!
//! ```text
//! content/                         dist/
//! ├── config.toml                  ├── index.html
//! ├── portfolio.json   ──build──►  └── assets/
//! └── assets/                          ├── style.3f9a1c2e.css
//!     ├── avatar.jpg                   ├── site.81b0d4aa.js
//!     └── resume.pdf                   ├── motion.0c7e55f1.js
//!                                      ├── avatar.jpg       (copied)
//!                                      └── resume.pdf       (copied)
//! ```
//!
//! ## Build Sequence
//!
//! 1. Load `config.toml` (stock defaults merged in).
//! 2. Load the portfolio document. If that fails, a recovery page is written
//!    in place of the portfolio and the build stops with [`GenerateError::Fetch`].
//! 3. Resolve sections and navigation, render them into a fresh [`View`].
//! 4. Signal *content ready*; write the fingerprinted CSS/JS and signal
//!    *animations ready*. The [`ReadinessGate`] joins the two.
//! 5. Once the gate opens, write `index.html` and copy `assets/`.
//!
//! Progress is reported as [`BuildEvent`]s over an optional channel; the CLI
//! prints them from a separate thread.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time and written with a content
//! fingerprint in the filename so they can be cached forever:
//! - `static/style.css`: base styles (colors and layout variables injected from config)
//! - `static/site.js`: navigation, theme toggle, contact form, loading overlay
//! - `static/motion.js`: scroll-triggered entrance animations (omitted when
//!   `motion.enabled = false`)
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Document text is always interpolated, so it is escaped; the only
//! `PreEscaped` content is the crate's own inline theme bootstrap.

use crate::config::{self, ConfigError, SiteConfig};
use crate::document::PortfolioDocument;
use crate::fetch::{self, DocumentSource, FetchError};
use crate::ready::{GateError, ReadinessGate, Slot};
use crate::render::{self, RenderContext, View};
use crate::resolve::{NavTarget, NavigationEntry, Resolution, resolve};
use crate::section::SectionId;
use chrono::{Datelike, Local};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("cannot load portfolio document: {0}")]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Gate(#[from] GateError),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const SITE_JS: &str = include_str!("../static/site.js");
const MOTION_JS: &str = include_str!("../static/motion.js");

const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// Applies the saved theme before first paint so the page doesn't flash.
const THEME_BOOTSTRAP: &str = r#"(function(){try{var t=localStorage.getItem("folio-theme");if(t==="light"||t==="dark"){document.documentElement.setAttribute("data-theme",t);}}catch(e){}})();"#;

/// Subdirectory of the content and output directories holding static files.
const ASSETS_DIR: &str = "assets";

/// Inputs to [`build`].
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Content directory (holds `config.toml`, the document, `assets/`).
    pub source: PathBuf,
    /// Output directory.
    pub output: PathBuf,
    /// Document location overriding `config.data`.
    pub data: Option<String>,
}

/// Hrefs of the generated scripts and stylesheet, relative to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenAssets {
    pub stylesheet: String,
    pub script: String,
    pub motion: Option<String>,
}

impl WrittenAssets {
    pub fn files(&self) -> Vec<&str> {
        let mut files = vec![self.stylesheet.as_str(), self.script.as_str()];
        files.extend(self.motion.as_deref());
        files
    }
}

/// Progress events emitted while building.
#[derive(Debug, Clone)]
pub enum BuildEvent {
    /// The document could not be loaded; the recovery page was written.
    FetchFailed { source: String, message: String },
    Resolved(Resolution),
    /// Sections are rendered. Carries the document they were rendered from.
    ContentReady { document: Arc<PortfolioDocument> },
    AssetsWritten { files: Vec<String> },
    PageWritten { path: PathBuf, copied_assets: usize },
}

/// Result of a successful build.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub resolution: Resolution,
    pub index: PathBuf,
    pub assets: WrittenAssets,
    pub copied_assets: usize,
}

fn emit(events: &Option<Sender<BuildEvent>>, event: BuildEvent) {
    if let Some(tx) = events {
        // A dropped receiver only means nobody is printing.
        tx.send(event).ok();
    }
}

/// Build the site described by `options`.
pub fn build(
    options: &BuildOptions,
    events: Option<Sender<BuildEvent>>,
) -> Result<BuildSummary, GenerateError> {
    let config = config::load_config(&options.source)?;
    let source = document_source(&config, &options.source, options.data.as_deref());
    fs::create_dir_all(&options.output)?;
    let index = options.output.join("index.html");

    let document = match fetch::fetch(&source, config.fetch_timeout()) {
        Ok(document) => Arc::new(document),
        Err(err) => {
            tracing::warn!(source = %source, error = %err, "Writing recovery page");
            let page = render_recovery_page(&config, &err);
            fs::write(&index, page.into_string())?;
            emit(
                &events,
                BuildEvent::FetchFailed {
                    source: source.to_string(),
                    message: err.to_string(),
                },
            );
            return Err(err.into());
        }
    };

    let resolution = resolve(&document);
    tracing::info!(sections = ?resolution.sections, "Resolved sections");
    emit(&events, BuildEvent::Resolved(resolution.clone()));

    let ctx = RenderContext {
        current_year: current_year(),
        contact_form: &config.contact_form,
        visible: &resolution.sections,
    };
    let mut view = View::new();
    render::render(&mut view, &resolution, &document, &ctx);

    let mut gate = ReadinessGate::new();
    emit(
        &events,
        BuildEvent::ContentReady {
            document: Arc::clone(&document),
        },
    );
    let mut opened = gate.set_content(Arc::clone(&document))?;

    let assets = write_assets(&config, &options.output)?;
    emit(
        &events,
        BuildEvent::AssetsWritten {
            files: assets.files().into_iter().map(String::from).collect(),
        },
    );
    if opened.is_none() {
        opened = gate.set_animations(assets)?;
    }
    let ready = opened
        .ok_or_else(|| GateError::Incomplete(gate.missing().unwrap_or(Slot::Animations)))?;

    let page = render_page(&config, &ready.content, &resolution, &view, &ready.animations);
    fs::write(&index, page.into_string())?;
    let copied_assets = copy_content_assets(&options.source, &options.output)?;
    tracing::info!(path = %index.display(), copied_assets, "Wrote page");
    emit(
        &events,
        BuildEvent::PageWritten {
            path: index.clone(),
            copied_assets,
        },
    );

    Ok(BuildSummary {
        resolution,
        index,
        assets: ready.animations,
        copied_assets,
    })
}

/// Load and resolve the document without writing anything.
pub fn check(source_dir: &Path, data: Option<&str>) -> Result<Resolution, GenerateError> {
    let config = config::load_config(source_dir)?;
    let source = document_source(&config, source_dir, data);
    let document = fetch::fetch(&source, config.fetch_timeout())?;
    Ok(resolve(&document))
}

fn document_source(config: &SiteConfig, source_dir: &Path, data: Option<&str>) -> DocumentSource {
    DocumentSource::parse(data.unwrap_or(&config.data), source_dir)
}

// ============================================================================
// Assets
// ============================================================================

/// First 8 hex chars of the SHA-256 of `bytes`.
pub fn fingerprint(bytes: &[u8]) -> String {
    let digest = format!("{:x}", Sha256::digest(bytes));
    digest[..8].to_string()
}

fn stylesheet(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_theme_css(&config.theme, &config.motion),
        CSS_STATIC
    )
}

/// Write `<stem>.<fingerprint>.<ext>` under `output/assets/`, returning its href.
fn write_fingerprinted(
    output: &Path,
    stem: &str,
    ext: &str,
    contents: &str,
) -> std::io::Result<String> {
    let name = format!("{stem}.{}.{ext}", fingerprint(contents.as_bytes()));
    fs::write(output.join(ASSETS_DIR).join(&name), contents)?;
    Ok(format!("{ASSETS_DIR}/{name}"))
}

fn write_assets(config: &SiteConfig, output: &Path) -> std::io::Result<WrittenAssets> {
    fs::create_dir_all(output.join(ASSETS_DIR))?;
    let stylesheet = write_fingerprinted(output, "style", "css", &stylesheet(config))?;
    let script = write_fingerprinted(output, "site", "js", SITE_JS)?;
    let motion = if config.motion.enabled {
        Some(write_fingerprinted(output, "motion", "js", MOTION_JS)?)
    } else {
        None
    };
    Ok(WrittenAssets {
        stylesheet,
        script,
        motion,
    })
}

/// Copy `<source>/assets/` into `<output>/assets/`. Returns the number of
/// files copied; a missing assets directory copies nothing.
fn copy_content_assets(source: &Path, output: &Path) -> std::io::Result<usize> {
    let src = source.join(ASSETS_DIR);
    if !src.is_dir() {
        return Ok(0);
    }
    let dst = output.join(ASSETS_DIR);
    let mut copied = 0;
    for entry in walkdir::WalkDir::new(&src).follow_links(true) {
        let entry = entry?;
        let rel = entry.path().strip_prefix(&src).unwrap_or(entry.path());
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

// ============================================================================
// Time
// ============================================================================

/// Calendar year in the builder's local time zone.
fn current_year() -> i32 {
    Local::now().year()
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(config: &SiteConfig, title: &str, head: Markup, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(config.site.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @if let Some(description) = &config.site.description {
                    meta name="description" content=(description);
                }
                script { (PreEscaped(THEME_BOOTSTRAP)) }
                link rel="stylesheet" href=(FONT_AWESOME_CSS) crossorigin="anonymous" referrerpolicy="no-referrer";
                (head)
            }
            (body)
        }
    }
}

/// Renders the fixed header: brand, menu, mobile toggle, theme toggle
fn site_header(brand: &str, brand_href: &str, nav: Markup) -> Markup {
    html! {
        header.site-header #site-header {
            nav.navbar.container aria-label="Main" {
                a.brand href=(brand_href) { (brand) }
                button.menu-toggle type="button" aria-controls="nav-links"
                    aria-expanded="false" aria-label="Toggle menu" {
                    i.fas.fa-bars aria-hidden="true" {}
                }
                (nav)
                button.theme-toggle type="button" aria-label="Toggle dark mode" {
                    i.fas.fa-moon aria-hidden="true" {}
                }
            }
        }
    }
}

/// Renders the navigation menu from resolved entries
pub fn render_nav(navigation: &[NavigationEntry]) -> Markup {
    html! {
        ul.nav-links #nav-links {
            @for entry in navigation {
                li {
                    @match &entry.target {
                        NavTarget::Section(id) => {
                            a.nav-link href=(entry.target.href()) data-nav=(id.as_str()) {
                                (entry.label)
                            }
                        }
                        NavTarget::External(url) => {
                            a.nav-link.nav-external href=(url) target="_blank" rel="noopener" {
                                i.fas.fa-file-alt aria-hidden="true" {}
                                " " (entry.label)
                            }
                        }
                    }
                }
            }
        }
    }
}

/// `<title>`: configured title, else "name | title", else whatever exists.
fn page_title(config: &SiteConfig, document: &PortfolioDocument) -> String {
    if let Some(title) = config.site.title.as_deref().filter(|t| !t.trim().is_empty()) {
        return title.to_string();
    }
    let personal = document.personal();
    match (personal.text("name"), personal.text("title")) {
        (Some(name), Some(title)) => format!("{name} | {title}"),
        (Some(name), None) => name.to_string(),
        (None, Some(title)) => title.to_string(),
        (None, None) => "Portfolio".to_string(),
    }
}

fn loading_overlay() -> Markup {
    html! {
        div.loading-overlay #loading-overlay role="status" aria-label="Loading" {
            div.spinner {}
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the portfolio page
fn render_page(
    config: &SiteConfig,
    document: &PortfolioDocument,
    resolution: &Resolution,
    view: &View,
    assets: &WrittenAssets,
) -> Markup {
    let brand = document
        .personal()
        .text("name")
        .or(config.site.title.as_deref())
        .unwrap_or("Portfolio");
    let brand_href = if resolution.is_visible(SectionId::Hero) {
        "#hero"
    } else {
        "#"
    };

    let head = html! {
        link rel="stylesheet" href=(assets.stylesheet);
    };
    let body = html! {
        body data-motion=(if assets.motion.is_some() { "on" } else { "off" })
            data-stagger-ms=(config.motion.stagger_ms) {
            (loading_overlay())
            (site_header(brand, brand_href, render_nav(&resolution.navigation)))
            (view.to_markup())
            // site.js listens for the motion script's ready event, so it loads first.
            script src=(assets.script) defer {}
            @if let Some(motion) = &assets.motion {
                script src=(motion) defer {}
            }
        }
    };

    base_document(config, &page_title(config, document), head, body)
}

/// Renders the page shown when the document cannot be loaded
///
/// Self-contained: the stylesheet is inlined because no assets are written
/// on this path. Every section stays hidden.
fn render_recovery_page(config: &SiteConfig, error: &FetchError) -> Markup {
    let head = html! {
        style { (PreEscaped(stylesheet(config))) }
    };
    let body = html! {
        body.recovery {
            main.recovery-page {
                div.recovery-card role="alert" {
                    i.fas.fa-triangle-exclamation.recovery-icon aria-hidden="true" {}
                    h1 { "This portfolio could not be loaded" }
                    p.recovery-message { (error.to_string()) }
                    button.btn.btn-primary type="button" onclick="window.location.reload()" {
                        i.fas.fa-rotate-right aria-hidden="true" {}
                        " Reload"
                    }
                }
            }
            (View::new().to_markup())
        }
    };
    let title = config.site.title.as_deref().unwrap_or("Portfolio");
    base_document(config, title, head, body)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::TempDir;

    fn options(source: &Path, output: &Path) -> BuildOptions {
        BuildOptions {
            source: source.to_path_buf(),
            output: output.to_path_buf(),
            data: None,
        }
    }

    fn build_fixtures() -> (TempDir, TempDir, BuildSummary) {
        let source = setup_fixtures();
        let output = TempDir::new().unwrap();
        let summary = build(&options(source.path(), output.path()), None).unwrap();
        (source, output, summary)
    }

    #[test]
    fn nav_renders_entries() {
        let resolution = resolve(&full_document());
        let html = render_nav(&resolution.navigation).into_string();
        assert!(html.contains(r##"href="#about""##));
        assert!(html.contains(">About<"));
        assert!(!html.contains("#footer"));
    }

    #[test]
    fn external_nav_entry_opens_new_tab() {
        let resolution = resolve(&full_document());
        let html = render_nav(&resolution.navigation).into_string();
        assert!(html.contains(
            r#"href="assets/resume.pdf" target="_blank" rel="noopener""#
        ));
    }

    #[test]
    fn fingerprint_is_eight_hex_chars() {
        let fp = fingerprint(b"body { color: red }");
        assert_eq!(fp.len(), 8);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(fp, fingerprint(b"body { color: red }"));
        assert_ne!(fp, fingerprint(b"body { color: blue }"));
    }

    #[test]
    fn current_year_is_plausible() {
        let year = current_year();
        assert!((2025..2200).contains(&year), "{year}");
    }

    #[test]
    fn built_footer_uses_current_year() {
        let (_source, _output, summary) = build_fixtures();
        let html = fs::read_to_string(summary.index).unwrap();
        assert!(html.contains(&format!("© {} Ada Lindqvist", current_year())));
    }

    #[test]
    fn page_title_fallbacks() {
        let config = SiteConfig::default();
        assert_eq!(
            page_title(&config, &full_document()),
            "Ada Lindqvist | Systems Engineer"
        );
        assert_eq!(
            page_title(&config, &document(json!({"personal": {"name": "Ada"}}))),
            "Ada"
        );
        assert_eq!(page_title(&config, &document(json!({}))), "Portfolio");

        let mut config = SiteConfig::default();
        config.site.title = Some("My Site".into());
        assert_eq!(page_title(&config, &full_document()), "My Site");
    }

    #[test]
    fn build_writes_page_and_assets() {
        let (_source, output, summary) = build_fixtures();
        assert!(summary.index.exists());
        for file in summary.assets.files() {
            assert!(output.path().join(file).exists(), "missing {file}");
        }
        assert!(output.path().join("assets/avatar.svg").exists());
        assert!(output.path().join("assets/resume.pdf").exists());
        assert_eq!(summary.copied_assets, 2);
    }

    #[test]
    fn build_page_references_assets() {
        let (_source, output, summary) = build_fixtures();
        let html = fs::read_to_string(output.path().join("index.html")).unwrap();
        assert!(html.contains(&summary.assets.stylesheet));
        assert!(html.contains(&summary.assets.script));
        assert!(html.contains(summary.assets.motion.as_deref().unwrap()));
        assert!(html.contains(FONT_AWESOME_CSS));
    }

    #[test]
    fn page_chrome_carries_script_hook_ids() {
        let (_source, output, _) = build_fixtures();
        let html = fs::read_to_string(output.path().join("index.html")).unwrap();
        for id in ["site-header", "nav-links", "loading-overlay", "content", "contact-form"] {
            assert!(html.contains(&format!(r#"id="{id}""#)), "{id}");
        }
    }

    #[test]
    fn site_script_loads_before_motion_script() {
        let (_source, output, summary) = build_fixtures();
        let html = fs::read_to_string(output.path().join("index.html")).unwrap();
        let site = html.find(&summary.assets.script).unwrap();
        let motion = html.find(summary.assets.motion.as_deref().unwrap()).unwrap();
        assert!(site < motion);
    }

    #[test]
    fn motion_script_starts_on_content_ready() {
        assert!(MOTION_JS.contains(r#"addEventListener("folio:content-ready", start"#));
        assert!(MOTION_JS.contains(r#"hasAttribute("data-content-ready")"#));
        let marked = SITE_JS.find(r#"setAttribute("data-content-ready""#).unwrap();
        let dispatched = SITE_JS.find(r#"new CustomEvent("folio:content-ready")"#).unwrap();
        assert!(marked < dispatched);
    }

    #[test]
    fn build_uses_config_title_and_form_delay() {
        let (_source, output, _) = build_fixtures();
        let html = fs::read_to_string(output.path().join("index.html")).unwrap();
        assert!(html.contains("<title>Ada Lindqvist — Systems Engineer</title>"));
        assert!(html.contains(r#"data-delay-ms="800""#));
    }

    #[test]
    fn build_shows_all_sections_for_full_document() {
        let (_source, output, summary) = build_fixtures();
        assert_eq!(summary.resolution.sections, SectionId::ALL.to_vec());
        let html = fs::read_to_string(output.path().join("index.html")).unwrap();
        for id in SectionId::ALL {
            assert!(
                html.contains(&format!(r#"data-section="{id}""#)),
                "{id} not visible"
            );
        }
    }

    #[test]
    fn build_with_motion_disabled_skips_motion_script() {
        let source = setup_fixtures();
        fs::write(
            source.path().join("config.toml"),
            "[motion]\nenabled = false\n",
        )
        .unwrap();
        let output = TempDir::new().unwrap();
        let summary = build(&options(source.path(), output.path()), None).unwrap();
        assert_eq!(summary.assets.motion, None);
        let html = fs::read_to_string(&summary.index).unwrap();
        assert!(!html.contains("motion."));
        assert!(html.contains(r#"data-motion="off""#));
    }

    #[test]
    fn build_emits_events_in_order() {
        let source = setup_fixtures();
        let output = TempDir::new().unwrap();
        let (tx, rx) = std::sync::mpsc::channel();
        build(&options(source.path(), output.path()), Some(tx)).unwrap();
        let kinds: Vec<&str> = rx
            .iter()
            .map(|event| match event {
                BuildEvent::FetchFailed { .. } => "fetch-failed",
                BuildEvent::Resolved(_) => "resolved",
                BuildEvent::ContentReady { .. } => "content-ready",
                BuildEvent::AssetsWritten { .. } => "assets-written",
                BuildEvent::PageWritten { .. } => "page-written",
            })
            .collect();
        assert_eq!(
            kinds,
            vec!["resolved", "content-ready", "assets-written", "page-written"]
        );
    }

    #[test]
    fn content_ready_carries_document() {
        let source = setup_fixtures();
        let output = TempDir::new().unwrap();
        let (tx, rx) = std::sync::mpsc::channel();
        build(&options(source.path(), output.path()), Some(tx)).unwrap();
        let document = rx
            .iter()
            .find_map(|event| match event {
                BuildEvent::ContentReady { document } => Some(document),
                _ => None,
            })
            .unwrap();
        assert_eq!(document.personal().text("name"), Some("Ada Lindqvist"));
    }

    #[test]
    fn data_override_replaces_config_location() {
        let source = setup_fixtures();
        fs::write(
            source.path().join("other.json"),
            r#"{"personal": {"name": "Grace"}}"#,
        )
        .unwrap();
        let output = TempDir::new().unwrap();
        let mut opts = options(source.path(), output.path());
        opts.data = Some("other.json".into());
        let summary = build(&opts, None).unwrap();
        assert_eq!(
            summary.resolution.sections,
            vec![SectionId::Hero, SectionId::Footer]
        );
        assert!(summary.resolution.navigation.iter().all(|e| e.label != "About"));
    }

    #[test]
    fn fetch_failure_writes_recovery_page() {
        let source = setup_fixtures();
        fs::remove_file(source.path().join("portfolio.json")).unwrap();
        let output = TempDir::new().unwrap();
        let (tx, rx) = std::sync::mpsc::channel();

        let err = build(&options(source.path(), output.path()), Some(tx)).unwrap_err();
        assert!(matches!(err, GenerateError::Fetch(FetchError::Io { .. })));

        let events: Vec<BuildEvent> = rx.iter().collect();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], BuildEvent::FetchFailed { .. }));

        let html = fs::read_to_string(output.path().join("index.html")).unwrap();
        assert!(html.contains("This portfolio could not be loaded"));
        assert!(html.contains("portfolio.json"));
        assert!(html.contains("window.location.reload()"));
        assert!(!html.contains("data-section="));
        assert_eq!(html.matches(r#"aria-hidden="true""#).count(), 6 + 2);
        assert!(!output.path().join("assets").exists());
    }

    #[test]
    fn recovery_message_is_escaped() {
        let config = SiteConfig::default();
        let err = FetchError::NotAnObject {
            origin: "<script>x</script>".into(),
        };
        let html = render_recovery_page(&config, &err).into_string();
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
    }

    #[test]
    fn null_document_is_fetch_failure() {
        let source = setup_fixtures();
        fs::write(source.path().join("portfolio.json"), "null").unwrap();
        let output = TempDir::new().unwrap();
        let err = build(&options(source.path(), output.path()), None).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::Fetch(FetchError::NotAnObject { .. })
        ));
    }

    #[test]
    fn invalid_config_fails_before_fetch() {
        let source = setup_fixtures();
        fs::write(
            source.path().join("config.toml"),
            "[contact_form]\nsuccess_rate = 2.0\n",
        )
        .unwrap();
        let output = TempDir::new().unwrap();
        let err = build(&options(source.path(), output.path()), None).unwrap_err();
        assert!(matches!(err, GenerateError::Config(_)));
        assert!(!output.path().join("index.html").exists());
    }

    #[test]
    fn check_resolves_without_writing() {
        let source = setup_fixtures();
        let resolution = check(source.path(), None).unwrap();
        assert_eq!(nav_labels(&resolution).last(), Some(&"Resume"));
        assert!(!source.path().join("index.html").exists());
    }

    #[test]
    fn check_reports_missing_document() {
        let source = setup_fixtures();
        let err = check(source.path(), Some("missing.json")).unwrap_err();
        assert!(matches!(err, GenerateError::Fetch(_)));
    }

    #[test]
    fn copy_without_assets_dir_copies_nothing() {
        let source = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        assert_eq!(copy_content_assets(source.path(), output.path()).unwrap(), 0);
    }
}
