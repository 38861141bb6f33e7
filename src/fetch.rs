//! Loading the portfolio document.
//!
//! The document is retrieved exactly once per build, in one round trip,
//! from either a local file or an `http(s)` URL:
//!
//! ```text
//! data = "portfolio.json"                     → <content dir>/portfolio.json
//! data = "https://example.com/portfolio.json" → GET, no auth, no pagination
//! ```
//!
//! Any failure here (unreadable file, transport error, non-success status,
//! a body that is not JSON, or JSON that is not an object) is a
//! [`FetchError`]. It is the only error that aborts a build: without the
//! document no section can be resolved. There is no retry and no fallback
//! to stale data.

use crate::document::PortfolioDocument;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use ureq::Agent;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: ureq::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("{origin} is not valid JSON: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{origin} does not contain a portfolio document (expected a JSON object)")]
    NotAnObject { origin: String },
}

/// Where the document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    File(PathBuf),
    Url(String),
}

impl DocumentSource {
    /// Interpret a configured location. URLs pass through; anything else is
    /// a path, resolved against `base_dir` when relative.
    pub fn parse(location: &str, base_dir: &Path) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            DocumentSource::Url(location.to_string())
        } else {
            let path = Path::new(location);
            if path.is_absolute() {
                DocumentSource::File(path.to_path_buf())
            } else {
                DocumentSource::File(base_dir.join(path))
            }
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::File(path) => write!(f, "{}", path.display()),
            DocumentSource::Url(url) => f.write_str(url),
        }
    }
}

/// Retrieve and parse the document.
pub fn fetch(source: &DocumentSource, timeout: Duration) -> Result<PortfolioDocument, FetchError> {
    let body = match source {
        DocumentSource::File(path) => {
            std::fs::read_to_string(path).map_err(|source| FetchError::Io {
                path: path.clone(),
                source,
            })?
        }
        DocumentSource::Url(url) => fetch_url(url, timeout)?,
    };
    let document = parse_document(&body, &source.to_string())?;
    tracing::info!(source = %source, bytes = body.len(), "Loaded portfolio document");
    Ok(document)
}

/// Parse a document body. `origin` only labels errors.
pub fn parse_document(body: &str, origin: &str) -> Result<PortfolioDocument, FetchError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|source| FetchError::Json {
            origin: origin.to_string(),
            source,
        })?;
    PortfolioDocument::from_value(value).ok_or_else(|| FetchError::NotAnObject {
        origin: origin.to_string(),
    })
}

fn create_agent(timeout: Duration) -> Agent {
    Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build()
        .into()
}

fn fetch_url(url: &str, timeout: Duration) -> Result<String, FetchError> {
    let http_error = |source| FetchError::Http {
        url: url.to_string(),
        source,
    };
    let response = create_agent(timeout)
        .get(url)
        .header("Accept", "application/json")
        .call()
        .map_err(http_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let mut body = response.into_body();
    body.read_to_string().map_err(http_error)
}
