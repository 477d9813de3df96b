//! Small helpers for opening links and formatting story metadata.

use chrono::{DateTime, Utc};
use unicode_width::UnicodeWidthChar;

/// What: Validate a story link before it is handed to a browser launcher.
///
/// Inputs:
/// - `url`: Link as received from upstream.
///
/// Output:
/// - `Some(normalized)` for absolute `http`/`https` URLs; `None` otherwise.
///
/// Details:
/// - The normalized form is the `url` crate's serialization, so spaces and quotes are
///   percent-encoded and the result is passed to the launcher as a single argument.
#[must_use]
pub fn launchable_url(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url.trim()).ok()?;
    matches!(parsed.scheme(), "http" | "https").then(|| parsed.to_string())
}

/// What: Launcher programs to try, in order, for opening `url`.
///
/// Inputs:
/// - `url`: Already validated URL (see [`launchable_url`]).
///
/// Output:
/// - `(program, args)` pairs; the URL is always one whole argument.
///
/// Details:
/// - Windows goes through `rundll32 url.dll,FileProtocolHandler`, then `explorer`, so no
///   shell ever parses the URL (`&`, `|`, `^` stay literal).
/// - Unix-like systems use `xdg-open` with `open` as fallback.
#[must_use]
pub fn launcher_commands(url: &str) -> Vec<(&'static str, Vec<String>)> {
    if cfg!(target_os = "windows") {
        vec![
            (
                "rundll32",
                vec!["url.dll,FileProtocolHandler".to_string(), url.to_string()],
            ),
            ("explorer", vec![url.to_string()]),
        ]
    } else {
        vec![
            ("xdg-open", vec![url.to_string()]),
            ("open", vec![url.to_string()]),
        ]
    }
}

/// What: Open a URL in the default browser (cross-platform).
///
/// Inputs:
/// - `url`: URL string to open.
///
/// Output:
/// - `true` when the URL was accepted and a launch was attempted; `false` for
///   links that are not `http`/`https`.
///
/// Details:
/// - Tries each of [`launcher_commands`] on a background thread until one spawns.
/// - During tests, no process is spawned.
pub fn open_url(url: &str) -> bool {
    let Some(url) = launchable_url(url) else {
        tracing::warn!(url, "refusing to open non-http link");
        return false;
    };
    #[cfg(not(test))]
    {
        use std::process::{Command, Stdio};

        std::thread::spawn(move || {
            let mut last_err = None;
            for (program, args) in launcher_commands(&url) {
                match Command::new(program)
                    .args(&args)
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn()
                {
                    Ok(_) => return,
                    Err(e) => last_err = Some(e),
                }
            }
            if let Some(e) = last_err {
                tracing::warn!(error = %e, url = %url, "no browser launcher available");
            }
        });
    }
    #[cfg(test)]
    let _ = url;
    true
}

/// What: Human-readable age of a Unix timestamp relative to `now`.
///
/// Inputs:
/// - `ts`: Submission time in Unix seconds, if known.
/// - `now`: Reference instant.
///
/// Output:
/// - `"5 minutes ago"`, `"1 hour ago"`, `"3 days ago"`; empty string when `ts` is unknown.
#[must_use]
pub fn age_since(ts: Option<i64>, now: DateTime<Utc>) -> String {
    let Some(ts) = ts else {
        return String::new();
    };
    let secs = now.timestamp().saturating_sub(ts).max(0);
    let (n, unit) = if secs < 60 {
        return "just now".to_string();
    } else if secs < 3600 {
        (secs / 60, "minute")
    } else if secs < 86_400 {
        (secs / 3600, "hour")
    } else {
        (secs / 86_400, "day")
    };
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// What: Truncate `s` to at most `max_width` terminal columns.
///
/// Output:
/// - `s` unchanged when it fits; otherwise a prefix ending in `…` within `max_width`.
///
/// Details:
/// - Width is measured in display columns, so wide glyphs count double.
#[must_use]
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    /// What: Ages pick the largest whole unit and pluralize
    ///
    /// - Input: Offsets of 30s, 60s, 2h, 1 day, 3 days, and an unknown timestamp
    /// - Output: Matching English phrases; empty for unknown
    fn age_since_formats_units() {
        let now = Utc
            .timestamp_opt(1_700_000_000, 0)
            .single()
            .expect("valid timestamp");
        let at = |delta: i64| Some(now.timestamp() - delta);
        assert_eq!(age_since(at(30), now), "just now");
        assert_eq!(age_since(at(60), now), "1 minute ago");
        assert_eq!(age_since(at(7200), now), "2 hours ago");
        assert_eq!(age_since(at(86_400), now), "1 day ago");
        assert_eq!(age_since(at(3 * 86_400), now), "3 days ago");
        assert_eq!(age_since(None, now), "");
        assert_eq!(age_since(Some(now.timestamp() + 500), now), "just now");
        assert!(age_since(Some(i64::MIN), now).ends_with("days ago"));
        assert_eq!(age_since(Some(i64::MAX), now), "just now");
    }

    #[test]
    fn truncate_respects_display_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    /// What: Query strings with shell metacharacters reach the launcher intact
    ///
    /// - Input: `https://x.com/?a=1&calc`
    /// - Output: URL unchanged, passed as one argument, never through `cmd` or `powershell`
    fn launcher_keeps_ampersand_urls_whole() {
        let url = launchable_url("https://x.com/?a=1&calc").expect("http url accepted");
        assert_eq!(url, "https://x.com/?a=1&calc");
        let commands = launcher_commands(&url);
        assert!(!commands.is_empty());
        for (program, args) in commands {
            assert!(program != "cmd" && program != "powershell");
            assert_eq!(args.last().map(String::as_str), Some(url.as_str()));
            assert_eq!(args.iter().filter(|a| a.contains("calc")).count(), 1);
        }
    }

    #[test]
    fn launchable_url_rejects_other_schemes_and_encodes_quotes() {
        assert_eq!(launchable_url("javascript:alert(1)"), None);
        assert_eq!(launchable_url("file:///etc/passwd"), None);
        assert_eq!(launchable_url("not a url"), None);
        let quoted = launchable_url("https://x.com/?q=it's here").expect("http url accepted");
        assert!(!quoted.contains('\''));
        assert!(!quoted.contains(' '));
    }

    #[test]
    fn open_url_is_inert_under_test() {
        assert!(open_url("https://example.com"));
        assert!(!open_url("ftp://example.com/file"));
    }
}
