//! Core value types shared across sources, logic, and UI.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One story record as returned by the item endpoint.
///
/// Only `id` is required. Every other field may be missing upstream (dead or
/// deleted items, text posts without a link), so they are all optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Upstream identifier.
    pub id: u64,
    /// Display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Link target; absent for text posts.
    #[serde(default)]
    pub url: Option<String>,
    /// Points.
    #[serde(default)]
    pub score: Option<i64>,
    /// Submitter user name.
    #[serde(default)]
    pub by: Option<String>,
    /// Submission time (Unix seconds).
    #[serde(default)]
    pub time: Option<i64>,
    /// Comment count.
    #[serde(default)]
    pub descendants: Option<u64>,
    /// Item kind (`story`, `job`, `poll`, ...).
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Remaining upstream fields, kept as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// What: Title text with an absent title treated as empty.
    ///
    /// Output:
    /// - Borrowed title, or `""` when the upstream record has none.
    #[must_use]
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// What: Hostname of the item's link with one leading `www.` removed.
    ///
    /// Output:
    /// - `Some(domain)` when the item has a parsable URL with a host; `None` otherwise.
    #[must_use]
    pub fn domain(&self) -> Option<String> {
        self.url
            .as_deref()
            .and_then(crate::logic::domain::extract_domain)
    }
}

/// Loading lifecycle of the shell's corpus.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Fetch in flight.
    #[default]
    Loading,
    /// Corpus available.
    Loaded,
    /// Last fetch attempt failed; nothing was loaded.
    Failed(String),
}
