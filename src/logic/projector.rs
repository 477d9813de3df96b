//! Paged, filterable projection over an immutable corpus.

use std::sync::Arc;

use crate::logic::domain::extract_domain;
use crate::logic::view::{Command, DomainMatch, Filter, ViewState, matching_positions, reduce};
use crate::state::{Corpus, Item};

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: usize = 30;

/// Snapshot of the displayed slice.
#[derive(Debug, Clone)]
pub struct View<'a> {
    /// Displayed items in rank order.
    pub items: Vec<&'a Item>,
    /// Number of corpus items matching the active filter.
    pub total: usize,
}

impl View<'_> {
    /// Number of displayed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is displayed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether another page can be loaded.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.items.len() < self.total
    }

    /// Identifiers of the displayed items.
    #[must_use]
    pub fn ids(&self) -> Vec<u64> {
        self.items.iter().map(|it| it.id).collect()
    }
}

/// Holds the corpus, the view state, and the displayed positions.
///
/// Filter changes rebuild the displayed positions from the first page;
/// `load_more` appends the next page computed under the same filter.
#[derive(Debug, Clone)]
pub struct Projector {
    /// Shared read-only corpus.
    corpus: Arc<Corpus>,
    /// Current reducer state.
    state: ViewState,
    /// Positions into `corpus` currently displayed.
    displayed: Vec<usize>,
    /// Items per page, at least 1.
    page_size: usize,
    /// Domain comparison mode.
    domain_match: DomainMatch,
}

impl Projector {
    /// What: Create a projector showing the first unfiltered page.
    ///
    /// Inputs:
    /// - `corpus`: Fetched corpus.
    /// - `page_size`: Items per page; clamped to at least 1.
    /// - `domain_match`: Domain comparison mode.
    ///
    /// Output:
    /// - Projector in the `Unfiltered` state.
    #[must_use]
    pub fn new(corpus: Arc<Corpus>, page_size: usize, domain_match: DomainMatch) -> Self {
        let mut projector = Self {
            corpus,
            state: ViewState::default(),
            displayed: Vec::new(),
            page_size: page_size.max(1),
            domain_match,
        };
        projector.rebuild();
        projector
    }

    /// Current view state.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Items per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// What: Apply any command through the reducer and update the displayed slice.
    ///
    /// Inputs:
    /// - `command`: User command.
    ///
    /// Output:
    /// - Current view after the command.
    ///
    /// Details:
    /// - `LoadMore` appends one page; every other command rebuilds from the first page,
    ///   except a `SelectDomain` that could not extract a domain, which changes nothing.
    pub fn apply(&mut self, command: &Command) -> View<'_> {
        let next = reduce(&self.state, command);
        match command {
            Command::LoadMore => {
                let matching = self.matching();
                let start = self.displayed.len().min(matching.len());
                let end = start.saturating_add(self.page_size).min(matching.len());
                self.displayed.extend_from_slice(&matching[start..end]);
                self.state = next;
            }
            Command::SelectDomain(url) if extract_domain(url).is_none() => {
                tracing::debug!(url = %url, "domain selection without usable domain ignored");
            }
            _ => {
                self.state = next;
                self.rebuild();
            }
        }
        tracing::debug!(
            filter = ?self.state.filter,
            page_count = self.state.page_count,
            displayed = self.displayed.len(),
            "view updated"
        );
        self.view()
    }

    /// What: Filter by the domain of `url`.
    ///
    /// Inputs:
    /// - `url`: Item URL whose domain becomes the filter.
    ///
    /// Output:
    /// - `(Some(domain), view)` on success; `(None, view)` with state untouched when
    ///   no domain can be extracted.
    pub fn apply_domain_filter(&mut self, url: &str) -> (Option<String>, View<'_>) {
        let Some(domain) = extract_domain(url) else {
            tracing::debug!(url, "no domain in selected url");
            return (None, self.view());
        };
        (Some(domain), self.apply(&Command::SelectDomain(url.to_string())))
    }

    /// Case-insensitive title search; empty `term` clears all filters.
    pub fn apply_search(&mut self, term: &str) -> View<'_> {
        self.apply(&Command::Search(term.to_string()))
    }

    /// Append the next page under the active filter.
    pub fn load_more(&mut self) -> View<'_> {
        self.apply(&Command::LoadMore)
    }

    /// Clear filters and show the first unfiltered page.
    pub fn reset_to_all(&mut self) -> View<'_> {
        self.apply(&Command::ResetToAll)
    }

    /// Number of corpus items matching the active filter.
    #[must_use]
    pub fn total_count(&self) -> usize {
        match &self.state.filter {
            Filter::Unfiltered => self.corpus.len(),
            Filter::Domain(d) if self.domain_match == DomainMatch::Exact => {
                self.corpus.positions_for_domain(d).len()
            }
            _ => self.matching().len(),
        }
    }

    /// Whether `load_more` would reveal further items.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.displayed.len() < self.total_count()
    }

    /// Current displayed slice and total.
    #[must_use]
    pub fn view(&self) -> View<'_> {
        View {
            items: self
                .displayed
                .iter()
                .filter_map(|&pos| self.corpus.get(pos))
                .collect(),
            total: self.total_count(),
        }
    }

    /// Displayed item at display index `index`.
    #[must_use]
    pub fn displayed_item(&self, index: usize) -> Option<&Item> {
        self.displayed
            .get(index)
            .and_then(|&pos| self.corpus.get(pos))
    }

    /// Number of displayed items.
    #[must_use]
    pub const fn displayed_len(&self) -> usize {
        self.displayed.len()
    }

    fn matching(&self) -> Vec<usize> {
        matching_positions(&self.corpus, &self.state.filter, self.domain_match)
    }

    /// Recompute the displayed prefix for the current state.
    fn rebuild(&mut self) {
        let limit = self.state.page_count.saturating_mul(self.page_size);
        let mut matching = self.matching();
        matching.truncate(limit);
        self.displayed = matching;
    }
}
