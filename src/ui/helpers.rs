//! Text helpers shared by the renderer and the print mode.

use chrono::{DateTime, Utc};

use crate::logic::{Filter, ViewState};
use crate::state::Item;
use crate::util::age_since;

/// What: Headline for a story row.
///
/// Inputs:
/// - `rank`: 1-based display position.
/// - `item`: Story.
///
/// Output:
/// - `"{rank}. {title} ({domain})"`; the domain suffix is omitted for text posts.
#[must_use]
pub fn headline(rank: usize, item: &Item) -> String {
    let title = item.title_text();
    let title = if title.is_empty() { "[untitled]" } else { title };
    item.domain().map_or_else(
        || format!("{rank}. {title}"),
        |d| format!("{rank}. {title} ({d})"),
    )
}

/// What: Metadata line under a story headline.
///
/// Output:
/// - e.g. `"111 points by dhouston, 3 hours ago, 71 comments"`; missing parts are skipped.
#[must_use]
pub fn meta_line(item: &Item, now: DateTime<Utc>) -> String {
    let mut parts: Vec<String> = Vec::new();
    match (item.score, item.by.as_deref()) {
        (Some(score), Some(by)) => parts.push(format!("{score} points by {by}")),
        (Some(score), None) => parts.push(format!("{score} points")),
        (None, Some(by)) => parts.push(format!("by {by}")),
        (None, None) => {}
    }
    let age = age_since(item.time, now);
    if !age.is_empty() {
        parts.push(age);
    }
    if let Some(n) = item.descendants {
        parts.push(if n == 1 {
            "1 comment".to_string()
        } else {
            format!("{n} comments")
        });
    }
    parts.join(", ")
}

/// Short description of the active filter for the header.
#[must_use]
pub fn filter_label(state: &ViewState) -> String {
    match &state.filter {
        Filter::Unfiltered => "top stories".to_string(),
        Filter::Domain(d) => format!("site: {d}"),
        Filter::Search(t) => format!("search: \"{t}\""),
    }
}

/// `"showing X of Y"` footer text.
#[must_use]
pub fn progress_label(shown: usize, total: usize) -> String {
    format!("showing {shown} of {total}")
}
