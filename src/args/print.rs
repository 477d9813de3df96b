//! One-shot print mode: fetch, filter, print, exit.

use std::io::Write;
use std::sync::Arc;

use hnview::config::Settings;
use hnview::logic::{Projector, View};
use hnview::sources;
use hnview::ui::helpers::{filter_label, headline, progress_label};

use super::Args;

/// What: Normalize a `--domain` argument into a URL the domain extractor accepts.
///
/// Inputs:
/// - `raw`: Full URL or bare host such as `github.com`.
///
/// Output:
/// - `raw` unchanged when it has a scheme; otherwise `https://` + `raw`.
pub fn domain_arg_to_url(raw: &str) -> String {
    let raw = raw.trim();
    if raw.contains("://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}

/// What: Apply the requested filter and page count to a projector.
///
/// Details:
/// - A domain that cannot be derived leaves the projector unfiltered.
pub fn project(projector: &mut Projector, args: &Args) {
    if let Some(term) = &args.search {
        let _ = projector.apply_search(term);
    } else if let Some(domain) = &args.domain {
        let (found, _) = projector.apply_domain_filter(&domain_arg_to_url(domain));
        if found.is_none() {
            tracing::warn!(domain = %domain, "could not derive a domain; showing all stories");
        }
    }
    for _ in 1..args.pages {
        if !projector.has_more() {
            break;
        }
        let _ = projector.load_more();
    }
}

/// What: Write a view as plain text lines.
///
/// Output:
/// - Header with the filter label, one headline per item, and a progress footer.
///
/// # Errors
/// - Propagates write failures from `out`.
pub fn write_view(
    out: &mut impl Write,
    label: &str,
    view: &View<'_>,
) -> std::io::Result<()> {
    writeln!(out, "Hacker News: {label}")?;
    for (i, item) in view.items.iter().enumerate() {
        writeln!(out, "{}", headline(i + 1, item))?;
    }
    writeln!(out, "{}", progress_label(view.len(), view.total))
}

/// What: Handle print mode: fetch the corpus and print the requested view.
///
/// Inputs:
/// - `args`: Parsed arguments carrying the filter and page count.
/// - `settings`: Loaded settings.
///
/// Output:
/// - Process exit code: `0` on success, `1` when the fetch or output fails.
pub async fn handle_print(args: &Args, settings: &Settings) -> i32 {
    tracing::info!(
        search = ?args.search,
        domain = ?args.domain,
        pages = args.pages,
        "print mode requested from CLI"
    );
    let corpus = match sources::fetch_corpus(settings.fetch_options()).await {
        Ok(c) => Arc::new(c),
        Err(e) => {
            eprintln!("hnview: failed to load stories: {e}");
            tracing::error!(error = %e, "print mode fetch failed");
            return 1;
        }
    };
    let mut projector = Projector::new(corpus, settings.page_size, settings.domain_match);
    project(&mut projector, args);
    let label = filter_label(projector.state());
    let view = projector.view();
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    match write_view(&mut lock, &label, &view) {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!(error = %e, "failed to write stories");
            1
        }
    }
}
