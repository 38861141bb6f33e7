//! The portfolio document and tolerant field access.
//!
//! The document is a single hand-edited JSON file, so its shape is trusted
//! only loosely. [`PortfolioDocument`] keeps the parsed JSON as-is and hands
//! out [`Record`] views whose accessors never fail: a field that is missing
//! *or* shaped unexpectedly (a string where a list belongs, a number where
//! text belongs) simply reads as absent. Missing fields are the normal way a
//! section opts out; malformed ones are logged at `debug` and skipped.
//!
//! ```text
//! {
//!   "personal":   { "name": "...", "title": "...", "email": "...", "resume": "..." },
//!   "hero":       { "greeting": "...", "description": "...",
//!                   "primaryButton": { "text": "...", "href": "..." } },
//!   "about":      { "description": ["...", "..."], "skills": ["Rust", "SQL"] },
//!   "experience": [ { "company": "...", "role": "...", "period": "2019 - Present", ... } ],
//!   "projects":   [ { "title": "...", "technologies": ["..."], ... } ],
//!   "contact":    { "title": "...", "social": [ { "platform": "GitHub", "url": "..." } ] },
//!   "resume":     "/assets/resume.pdf"
//! }
//! ```

use serde_json::{Map, Value};

/// URL schemes allowed in rendered `href` and `src` attributes.
pub const SAFE_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];

/// Words that close an open-ended experience period.
const OPEN_ENDED_WORDS: [&str; 4] = ["present", "current", "now", "today"];

/// The parsed portfolio document. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioDocument {
    root: Map<String, Value>,
}

impl PortfolioDocument {
    /// Wrap a parsed JSON value. Anything other than an object is not a
    /// document and yields `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(root) => Some(Self { root }),
            _ => None,
        }
    }

    /// Raw access to a top-level field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.root.get(name)
    }

    /// True when the top-level field exists and is non-empty (see [`is_non_empty`]).
    pub fn has_content(&self, name: &str) -> bool {
        self.field(name).is_some_and(is_non_empty)
    }

    /// True when the top-level field is a list with at least one element.
    pub fn has_items(&self, name: &str) -> bool {
        matches!(self.field(name), Some(Value::Array(items)) if !items.is_empty())
    }

    pub fn personal(&self) -> Record<'_> {
        self.record("personal")
    }

    pub fn hero(&self) -> Record<'_> {
        self.record("hero")
    }

    pub fn about(&self) -> Record<'_> {
        self.record("about")
    }

    pub fn contact(&self) -> Record<'_> {
        self.record("contact")
    }

    pub fn experience(&self) -> Vec<Record<'_>> {
        records_of(self.field("experience"), "experience")
    }

    pub fn projects(&self) -> Vec<Record<'_>> {
        records_of(self.field("projects"), "projects")
    }

    /// A top-level field viewed as a record.
    pub fn record<'a>(&'a self, name: &'a str) -> Record<'a> {
        Record::of(self.field(name), name)
    }

    /// Resume link, from the top-level `resume` field first, then `personal.resume`.
    ///
    /// Either may be a plain URL string or an object with a `url` key. A
    /// link with a disallowed scheme (see [`safe_url`]) reads as absent.
    pub fn resume_url(&self) -> Option<&str> {
        resume_link(self.field("resume"))
            .or_else(|| resume_link(self.personal().value("resume")))
            .and_then(safe_url)
    }

    /// Years spanned by the experience list, derived from each record's
    /// `period` (e.g. `"2019 - Present"`, `"Mar 2016 – Jan 2019"`).
    ///
    /// `current_year` stands in for open-ended periods ("Present", "Current",
    /// "Now"). Returns `None` when no period contains a recognizable year.
    pub fn experience_span_years(&self, current_year: i32) -> Option<u32> {
        let mut earliest: Option<i32> = None;
        let mut latest: Option<i32> = None;
        for record in self.experience() {
            let Some(period) = record.text("period") else {
                continue;
            };
            let mut years = years_in(period);
            if is_open_ended(period) {
                years.push(current_year);
            }
            for year in years {
                earliest = Some(earliest.map_or(year, |e| e.min(year)));
                latest = Some(latest.map_or(year, |l| l.max(year)));
            }
        }
        let span = latest? - earliest?;
        Some(span.max(1) as u32)
    }
}

/// Emptiness rule shared by every section: absent, `null`, blank strings,
/// empty lists and empty objects are all "empty".
pub fn is_non_empty(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

/// `url` trimmed, if it may be placed in an `href` or `src`.
///
/// Relative paths and fragments pass. Absolute URLs pass only with one of
/// [`SAFE_SCHEMES`]; `javascript:`, `data:` and anything else are rejected.
pub fn safe_url(url: &str) -> Option<&str> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    match url.find([':', '/', '?', '#']) {
        Some(end) if url[end..].starts_with(':') => {
            let scheme = url[..end].to_ascii_lowercase();
            if SAFE_SCHEMES.contains(&scheme.as_str()) {
                Some(url)
            } else {
                tracing::debug!(url, "disallowed URL scheme, ignoring");
                None
            }
        }
        _ => Some(url),
    }
}

/// A tolerant read-only view over a JSON object.
///
/// Constructed over anything; a non-object (or a missing value) behaves as
/// an empty record.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    map: Option<&'a Map<String, Value>>,
    name: &'a str,
}

impl<'a> Record<'a> {
    fn of(value: Option<&'a Value>, name: &'a str) -> Self {
        let map = match value {
            Some(Value::Object(map)) => Some(map),
            None | Some(Value::Null) => None,
            Some(_) => {
                tracing::debug!(field = name, "expected an object, ignoring");
                None
            }
        };
        Self { map, name }
    }

    /// Whether the underlying value was an object.
    pub fn is_present(&self) -> bool {
        self.map.is_some()
    }

    /// Raw access to a key.
    pub fn value(&self, key: &str) -> Option<&'a Value> {
        self.map.and_then(|m| m.get(key))
    }

    /// Non-blank string value of `key`.
    pub fn text(&self, key: &str) -> Option<&'a str> {
        match self.value(key)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.as_str()),
            Value::String(_) | Value::Null => None,
            _ => {
                tracing::debug!(record = self.name, field = key, "expected text, ignoring");
                None
            }
        }
    }

    /// First non-blank string among several candidate keys.
    pub fn text_any(&self, keys: &[&str]) -> Option<&'a str> {
        keys.iter().find_map(|k| self.text(k))
    }

    /// Text of `key` that passes [`safe_url`].
    pub fn url(&self, key: &str) -> Option<&'a str> {
        self.text(key).and_then(safe_url)
    }

    /// First candidate key holding a [`safe_url`].
    pub fn url_any(&self, keys: &[&str]) -> Option<&'a str> {
        keys.iter().find_map(|k| self.url(k))
    }

    /// String elements of a list field.
    ///
    /// Elements may be strings or objects with a `name` key; other elements
    /// are skipped. A non-list value reads as an empty list.
    pub fn strings(&self, key: &str) -> Vec<&'a str> {
        match self.value(key) {
            Some(Value::Array(items)) => items.iter().filter_map(string_like).collect(),
            None | Some(Value::Null) => Vec::new(),
            Some(_) => {
                tracing::debug!(record = self.name, field = key, "expected a list, ignoring");
                Vec::new()
            }
        }
    }

    /// Paragraphs of a text field: a single string is one paragraph, a list
    /// contributes each of its string elements.
    pub fn paragraphs(&self, key: &str) -> Vec<&'a str> {
        match self.value(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => vec![s.as_str()],
            Some(Value::Array(_)) => self.strings(key),
            _ => Vec::new(),
        }
    }

    /// Nested object field.
    pub fn record(&self, key: &'a str) -> Record<'a> {
        Record::of(self.value(key), key)
    }

    /// Object elements of a nested list field.
    pub fn records(&self, key: &'a str) -> Vec<Record<'a>> {
        records_of(self.value(key), key)
    }
}

fn records_of<'a>(value: Option<&'a Value>, name: &'a str) -> Vec<Record<'a>> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter(|item| {
                let ok = item.is_object();
                if !ok {
                    tracing::debug!(field = name, "skipping non-object list element");
                }
                ok
            })
            .map(|item| Record::of(Some(item), name))
            .collect(),
        None | Some(Value::Null) => Vec::new(),
        Some(_) => {
            tracing::debug!(field = name, "expected a list of records, ignoring");
            Vec::new()
        }
    }
}

fn string_like(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.as_str()),
        Value::Object(map) => match map.get("name") {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        },
        _ => None,
    }
}

fn resume_link(value: Option<&Value>) -> Option<&str> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.as_str()),
        Value::Object(map) => match map.get("url") {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        },
        _ => None,
    }
}

/// Four-digit years (1900–2199) appearing as standalone digit runs.
fn years_in(text: &str) -> Vec<i32> {
    text.split(|c: char| !c.is_ascii_digit())
        .filter(|run| run.len() == 4)
        .filter_map(|run| run.parse::<i32>().ok())
        .filter(|year| (1900..2200).contains(year))
        .collect()
}

/// True when one of the period's words is an open-ended marker. Whole words
/// only, so "Unknown" or "Nowhere" don't count.
fn is_open_ended(period: &str) -> bool {
    period
        .split(|c: char| !c.is_alphabetic())
        .any(|word| OPEN_ENDED_WORDS.iter().any(|w| word.eq_ignore_ascii_case(w)))
}
