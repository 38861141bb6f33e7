//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The portfolio
//! *content* lives in the JSON document; this file only controls how the
//! page is built and presented: where the document comes from, colors,
//! layout, motion, and the contact form simulation.
//!
//! ## Config File Location
//!
//! ```text
//! content/
//! ├── config.toml         # Optional; overrides stock defaults
//! ├── portfolio.json      # The portfolio document (see `data`)
//! └── assets/             # Copied to <output>/assets/
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! data = "portfolio.json"   # Path (relative to content dir) or http(s) URL
//!
//! [site]
//! lang = "en"
//! # title = "..."          # Defaults to "<name> | <title>" from the document
//! # description = "..."    # <meta name="description">
//!
//! [theme]
//! max_width = "72rem"
//! font_family = "system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif"
//!
//! [theme.section_padding]
//! size = "8vw"
//! min = "3rem"
//! max = "7rem"
//!
//! [colors.light]
//! background = "#ffffff"
//! surface = "#f5f5f7"
//! text = "#16161a"
//! text_muted = "#5f6170"
//! border = "#e2e2e8"
//! accent = "#4f46e5"
//! accent_contrast = "#ffffff"
//!
//! [colors.dark]
//! background = "#0d0d12"
//! surface = "#17171f"
//! text = "#ececf1"
//! text_muted = "#9a9cab"
//! border = "#2a2a35"
//! accent = "#818cf8"
//! accent_contrast = "#0d0d12"
//!
//! [motion]
//! enabled = true
//! duration_ms = 600
//! stagger_ms = 80
//! distance = "24px"
//!
//! [contact_form]
//! enabled = true
//! delay_ms = 1500
//! success_rate = 0.9
//!
//! [fetch]
//! timeout_secs = 10
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [colors.dark]
//! accent = "#f59e0b"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Location of the portfolio document: a path relative to the content
    /// directory, or an `http://` / `https://` URL.
    #[serde(default = "default_data")]
    pub data: String,
    /// Page metadata.
    pub site: SiteMeta,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Layout settings.
    pub theme: ThemeConfig,
    /// Scroll-triggered entrance animations.
    pub motion: MotionConfig,
    /// Simulated contact form submission.
    pub contact_form: ContactFormConfig,
    /// Remote document loading.
    pub fetch: FetchConfig,
}

fn default_data() -> String {
    "portfolio.json".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data: default_data(),
            site: SiteMeta::default(),
            colors: ColorConfig::default(),
            theme: ThemeConfig::default(),
            motion: MotionConfig::default(),
            contact_form: ContactFormConfig::default(),
            fetch: FetchConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Timeout for loading the portfolio document.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch.timeout_secs)
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data.trim().is_empty() {
            return Err(ConfigError::Validation("data must not be empty".into()));
        }
        if self.site.lang.trim().is_empty() {
            return Err(ConfigError::Validation("site.lang must not be empty".into()));
        }
        if !(0.0..=1.0).contains(&self.contact_form.success_rate) {
            return Err(ConfigError::Validation(
                "contact_form.success_rate must be between 0.0 and 1.0".into(),
            ));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "fetch.timeout_secs must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// Page metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    /// `<html lang>` value.
    pub lang: String,
    /// `<title>` override. When absent the title is built from the
    /// document's `personal.name` and `personal.title`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// `<meta name="description">` content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            title: None,
            description: None,
        }
    }
}

/// Scroll-triggered entrance animation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    /// When false, no motion script is emitted and content is shown immediately.
    pub enabled: bool,
    /// Duration of a single entrance transition.
    pub duration_ms: u32,
    /// Delay between consecutive children of a staggered group.
    pub stagger_ms: u32,
    /// Initial vertical offset of animated elements (CSS length).
    pub distance: String,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: 600,
            stagger_ms: 80,
            distance: "24px".to_string(),
        }
    }
}

/// Contact form simulation parameters.
///
/// The form never leaves the browser: submission waits `delay_ms` and then
/// succeeds with probability `success_rate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactFormConfig {
    /// Render the form inside the contact section.
    pub enabled: bool,
    pub delay_ms: u32,
    /// Probability (0.0–1.0) that a simulated submission succeeds.
    pub success_rate: f64,
}

impl Default for ContactFormConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            delay_ms: 1500,
            success_rate: 0.9,
        }
    }
}

/// Remote document loading settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FetchConfig {
    /// Overall timeout for fetching a remote document.
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout_secs: 10 }
    }
}

/// A responsive CSS size expressed as `clamp(min, size, max)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClampSize {
    /// Preferred/fluid value, typically viewport-relative (e.g. `"8vw"`).
    pub size: String,
    /// Minimum bound (e.g. `"3rem"`).
    pub min: String,
    /// Maximum bound (e.g. `"7rem"`).
    pub max: String,
}

impl ClampSize {
    /// Render as a CSS `clamp()` expression.
    pub fn to_css(&self) -> String {
        format!("clamp({}, {}, {})", self.min, self.size, self.max)
    }
}

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Maximum width of the content column (CSS value).
    pub max_width: String,
    /// Body font stack.
    pub font_family: String,
    /// Vertical padding of each section.
    pub section_padding: ClampSize,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            max_width: "72rem".to_string(),
            font_family: "system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif".to_string(),
            section_padding: ClampSize {
                size: "8vw".to_string(),
                min: "3rem".to_string(),
                max: "7rem".to_string(),
            },
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background.
    pub background: String,
    /// Card and chip background.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Secondary text (periods, roles, captions).
    pub text_muted: String,
    pub border: String,
    /// Buttons, links, active navigation.
    pub accent: String,
    /// Text drawn on top of `accent`.
    pub accent_contrast: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            surface: "#f5f5f7".to_string(),
            text: "#16161a".to_string(),
            text_muted: "#5f6170".to_string(),
            border: "#e2e2e8".to_string(),
            accent: "#4f46e5".to_string(),
            accent_contrast: "#ffffff".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0d0d12".to_string(),
            surface: "#17171f".to_string(),
            text: "#ececf1".to_string(),
            text_muted: "#9a9cab".to_string(),
            border: "#2a2a35".to_string(),
            accent: "#818cf8".to_string(),
            accent_contrast: "#0d0d12".to_string(),
        }
    }

    fn css_variables(&self, indent: &str) -> String {
        [
            ("--color-bg", &self.background),
            ("--color-surface", &self.surface),
            ("--color-text", &self.text),
            ("--color-text-muted", &self.text_muted),
            ("--color-border", &self.border),
            ("--color-accent", &self.accent),
            ("--color-accent-contrast", &self.accent_contrast),
        ]
        .iter()
        .map(|(name, value)| format!("{indent}{name}: {value};"))
        .collect::<Vec<_>>()
        .join("\n")
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    let config = resolve_config(base, overlay)?;
    tracing::debug!(root = %root.display(), data = %config.data, "Loaded site config");
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Folio Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# The portfolio content itself lives in the JSON document named by `data`.
# Unknown keys will cause an error.

# Portfolio document: a path relative to this directory, or an http(s) URL.
data = "portfolio.json"

# ---------------------------------------------------------------------------
# Page metadata
# ---------------------------------------------------------------------------
[site]
lang = "en"
# Page title. Defaults to "<name> | <title>" from the document.
# title = "Jane Doe | Engineer"
# <meta name="description"> content.
# description = "Portfolio of Jane Doe"

# ---------------------------------------------------------------------------
# Layout
# ---------------------------------------------------------------------------
[theme]
# Maximum width of the content column (CSS value).
max_width = "72rem"
font_family = "system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif"

# Vertical padding of each section, as CSS clamp(min, size, max).
[theme.section_padding]
size = "8vw"
min = "3rem"
max = "7rem"

# ---------------------------------------------------------------------------
# Colors - Light mode
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
surface = "#f5f5f7"          # Cards, tag chips
text = "#16161a"
text_muted = "#5f6170"       # Periods, roles, captions
border = "#e2e2e8"
accent = "#4f46e5"           # Buttons, links, active nav item
accent_contrast = "#ffffff"  # Text on accent backgrounds

# ---------------------------------------------------------------------------
# Colors - Dark mode (system preference or the theme toggle)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0d0d12"
surface = "#17171f"
text = "#ececf1"
text_muted = "#9a9cab"
border = "#2a2a35"
accent = "#818cf8"
accent_contrast = "#0d0d12"

# ---------------------------------------------------------------------------
# Scroll-triggered entrance animations
# ---------------------------------------------------------------------------
[motion]
# Set to false to ship no motion script at all.
enabled = true
duration_ms = 600
# Delay between consecutive cards/tags in a staggered group.
stagger_ms = 80
# Initial vertical offset of animated elements.
distance = "24px"

# ---------------------------------------------------------------------------
# Contact form (simulated: nothing is sent anywhere)
# ---------------------------------------------------------------------------
[contact_form]
enabled = true
# How long the fake submission takes.
delay_ms = 1500
# Probability that a submission reports success (0.0 - 1.0).
success_rate = 0.9

# ---------------------------------------------------------------------------
# Remote documents
# ---------------------------------------------------------------------------
[fetch]
# Timeout for loading `data` over http(s).
timeout_secs = 10
"##
}

/// Generate CSS custom properties from color config.
///
/// Dark colors apply when the visitor's system prefers dark and no explicit
/// choice was made, or when the theme toggle set `data-theme="dark"`.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
{light}
}}

@media (prefers-color-scheme: dark) {{
    :root:not([data-theme="light"]) {{
{dark_nested}
    }}
}}

:root[data-theme="dark"] {{
{dark}
}}"#,
        light = colors.light.css_variables("    "),
        dark_nested = colors.dark.css_variables("        "),
        dark = colors.dark.css_variables("    "),
    )
}

/// Generate CSS custom properties from theme and motion config.
pub fn generate_theme_css(theme: &ThemeConfig, motion: &MotionConfig) -> String {
    format!(
        r#":root {{
    --max-width: {max_width};
    --font-family: {font_family};
    --section-padding: {section_padding};
    --motion-duration: {duration}ms;
    --motion-distance: {distance};
}}"#,
        max_width = theme.max_width,
        font_family = theme.font_family,
        section_padding = theme.section_padding.to_css(),
        duration = motion.duration_ms,
        distance = motion.distance,
    )
}
