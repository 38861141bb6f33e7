//! # Simple Folio
//!
//! A static site generator for single-page developer portfolios. One JSON
//! document is the data source: each section of the page appears only when
//! the document has content for it, and the navigation menu is derived from
//! the same decision, so the two can never disagree.
//!
//! # Architecture
//!
//! ```text
//! fetch      portfolio.json / URL  →  PortfolioDocument
//! resolve    document              →  Resolution { sections, navigation }
//! render     resolution + document →  View (one slot per section)
//! ready      content ready + animations ready  →  gate opens
//! generate   view + assets         →  dist/index.html
//! ```
//!
//! Resolution is a pure function of the document. Rendering is idempotent:
//! every slot of the [`render::View`] is replaced on each pass. The page is
//! written only after the [`ready::ReadinessGate`] has received both of its
//! signals.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`section`] | The closed set of page sections, their order and menu labels |
//! | [`document`] | The parsed document and tolerant, never-failing field access |
//! | [`fetch`] | Loading the document from a file or over HTTP |
//! | [`resolve`] | Section eligibility and navigation, in one pass |
//! | [`render`] | Per-section HTML and the `View` slot model |
//! | [`ready`] | Two-signal readiness gate |
//! | [`generate`] | The build: page assembly, fingerprinted assets, recovery page |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Tolerant Documents
//!
//! The document is hand-edited, so it is kept as JSON rather than
//! deserialized into strict structs. A field that is missing, `null`, empty,
//! or of the wrong type reads as absent; a malformed sub-field drops only its
//! own fragment of the page. The only hard failure is not having a document
//! at all, which produces a recovery page instead of the portfolio.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). All interpolation
//! is auto-escaped, so document text can never inject markup.

pub mod config;
pub mod document;
pub mod fetch;
pub mod generate;
pub mod output;
pub mod ready;
pub mod render;
pub mod resolve;
pub mod section;

#[cfg(test)]
pub(crate) mod test_helpers;
