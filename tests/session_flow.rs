//! End-to-end flow through the presentation boundary with a recording listener.

#![cfg(test)]

use std::sync::Arc;

use hnview::logic::{Command, DomainMatch, Session, View, ViewListener};
use hnview::state::{Corpus, Item};

/// Listener that records every notification it receives.
#[derive(Debug, Default)]
struct Recorder {
    fetched: usize,
    views: Vec<(Vec<u64>, usize)>,
}

impl ViewListener for Recorder {
    fn on_fetch_complete(&mut self, corpus: &Corpus) {
        self.fetched += corpus.len();
    }

    fn on_view_change(&mut self, view: &View<'_>) {
        self.views.push((view.ids(), view.total));
    }
}

/// What: Build a 70-item corpus; every seventh story links to github.com.
///
/// Output:
/// - Corpus with 10 github.com items and titles `story N`.
fn corpus() -> Arc<Corpus> {
    Arc::new(Corpus::new(
        (1..=70)
            .map(|i| Item {
                id: i,
                title: Some(format!("Story {i}")),
                url: Some(if i % 7 == 0 {
                    format!("https://github.com/repo/{i}")
                } else {
                    format!("https://site{i}.example.com/")
                }),
                kind: Some("story".into()),
                ..Default::default()
            })
            .collect(),
    ))
}

#[test]
/// What: Browse, filter by domain, page, search, and reset
///
/// - Input: Page size 30 over 70 stories
/// - Output: Listener sees each view in order with correct sizes and totals
fn browse_filter_page_search_reset() {
    let mut session = Session::new(corpus(), 30, DomainMatch::Exact, Recorder::default());
    assert_eq!(session.listener().fetched, 70);
    assert_eq!(session.displayed_len(), 30);
    assert!(session.has_more());

    session.load_more();
    session.load_more();
    assert_eq!(session.displayed_len(), 70);
    assert!(!session.has_more());

    session.select_domain("https://www.github.com/anything");
    assert_eq!(session.state().domain(), Some("github.com"));
    assert_eq!(session.displayed_len(), 10);
    assert_eq!(session.total_count(), 10);

    session.search("STORY 1");
    assert_eq!(session.state().domain(), None);
    // story 1, 10..=19
    assert_eq!(session.total_count(), 11);

    session.dispatch(&Command::ResetToAll);
    assert_eq!(session.displayed_len(), 30);

    let views = &session.listener().views;
    let sizes: Vec<(usize, usize)> = views.iter().map(|(ids, t)| (ids.len(), *t)).collect();
    assert_eq!(
        sizes,
        vec![(30, 70), (60, 70), (70, 70), (10, 10), (11, 11), (30, 70)]
    );
    assert_eq!(views[3].0, vec![7, 14, 21, 28, 35, 42, 49, 56, 63, 70]);
}

#[test]
/// What: Unusable domain selection still notifies but changes nothing
///
/// - Input: Search active, then `select_domain("")`
/// - Output: Search kept; view identical to the previous one
fn unusable_domain_selection_keeps_view() {
    let mut session = Session::new(corpus(), 5, DomainMatch::Exact, Recorder::default());
    session.search("story 7");
    session.select_domain("");
    assert_eq!(session.state().search_term(), Some("story 7"));
    let views = &session.listener().views;
    assert_eq!(views[views.len() - 1], views[views.len() - 2]);
}

#[test]
fn item_lookup_follows_display_order() {
    let mut session = Session::new(corpus(), 30, DomainMatch::Exact, Recorder::default());
    session.select_domain("https://github.com/");
    assert_eq!(session.item(0).map(|i| i.id), Some(7));
    assert_eq!(session.item(1).map(|i| i.id), Some(14));
    assert!(session.item(10).is_none());
}
