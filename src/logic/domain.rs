//! Domain extraction from story links.

use url::Url;

/// What: Derive the display domain of a story link.
///
/// Inputs:
/// - `url`: Absolute URL string as stored on the item.
///
/// Output:
/// - `Some(host)` with exactly one leading `www.` removed; `None` when the URL
///   cannot be parsed, has no host, or the remaining host is empty.
///
/// Details:
/// - Never panics on malformed input; failure is the `None` sentinel.
/// - Hosts are lowercased by the URL parser for special schemes (`http`, `https`).
#[must_use]
pub fn extract_domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}
