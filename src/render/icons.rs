//! Social platform → icon glyph lookup.
//!
//! Icons are Font Awesome class pairs. Platform names match
//! case-insensitively; anything unrecognized gets the generic link glyph.

/// Glyph for platforms without a dedicated icon.
pub const DEFAULT_ICON: &str = "fas fa-link";

const PLATFORM_ICONS: &[(&str, &str)] = &[
    ("github", "fab fa-github"),
    ("gitlab", "fab fa-gitlab"),
    ("linkedin", "fab fa-linkedin"),
    ("twitter", "fab fa-twitter"),
    ("x", "fab fa-x-twitter"),
    ("instagram", "fab fa-instagram"),
    ("facebook", "fab fa-facebook"),
    ("youtube", "fab fa-youtube"),
    ("dribbble", "fab fa-dribbble"),
    ("behance", "fab fa-behance"),
    ("medium", "fab fa-medium"),
    ("dev", "fab fa-dev"),
    ("stackoverflow", "fab fa-stack-overflow"),
    ("codepen", "fab fa-codepen"),
    ("mastodon", "fab fa-mastodon"),
    ("email", "fas fa-envelope"),
    ("mail", "fas fa-envelope"),
    ("website", "fas fa-globe"),
    ("web", "fas fa-globe"),
];

/// Icon class for a platform name such as `"GitHub"` or `"linkedin"`.
pub fn icon_class(platform: &str) -> &'static str {
    let key = platform.trim().to_lowercase();
    PLATFORM_ICONS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, class)| *class)
        .unwrap_or(DEFAULT_ICON)
}
