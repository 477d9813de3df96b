//! View state, user commands, and the pure reducer between them.

use serde::{Deserialize, Serialize};

use crate::logic::domain::extract_domain;
use crate::state::Corpus;

/// Active filter. A single enum keeps domain filter and search term mutually exclusive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    /// Whole corpus.
    #[default]
    Unfiltered,
    /// Items whose domain matches the normalized domain.
    Domain(String),
    /// Items whose lowercased title contains the lowercased term.
    Search(String),
}

/// How a domain filter is compared against each item's domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainMatch {
    /// Normalized domains must be equal.
    #[default]
    Exact,
    /// Filter value must be a substring of the item's domain.
    Contains,
}

/// Filter plus number of pages shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    /// Active filter.
    pub filter: Filter,
    /// Pages revealed under `filter`, starting at 1.
    pub page_count: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filter: Filter::Unfiltered,
            page_count: 1,
        }
    }
}

impl ViewState {
    /// Active search term, if any.
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        match &self.filter {
            Filter::Search(t) => Some(t),
            _ => None,
        }
    }

    /// Active domain filter, if any.
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        match &self.filter {
            Filter::Domain(d) => Some(d),
            _ => None,
        }
    }
}

/// User commands forwarded from the shell into the view pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Filter by the domain of this item URL.
    SelectDomain(String),
    /// Filter by title substring; empty clears.
    Search(String),
    /// Reveal the next page under the active filter.
    LoadMore,
    /// Clear all filters and show the first page.
    ResetToAll,
}

/// What: Compute the next view state for a command.
///
/// Inputs:
/// - `state`: Current view state.
/// - `command`: User command.
///
/// Output:
/// - New view state; `state` itself is untouched.
///
/// Details:
/// - `SelectDomain` with an unparsable URL returns `state` unchanged (silent no-op).
/// - `Search` stores the lowercased term; an empty term yields `Unfiltered`.
/// - Every filter change resets `page_count` to 1; `LoadMore` only advances it.
#[must_use]
pub fn reduce(state: &ViewState, command: &Command) -> ViewState {
    match command {
        Command::SelectDomain(url) => extract_domain(url).map_or_else(
            || state.clone(),
            |domain| ViewState {
                filter: Filter::Domain(domain),
                page_count: 1,
            },
        ),
        Command::Search(term) => {
            let filter = if term.is_empty() {
                Filter::Unfiltered
            } else {
                Filter::Search(term.to_lowercase())
            };
            ViewState {
                filter,
                page_count: 1,
            }
        }
        Command::LoadMore => ViewState {
            filter: state.filter.clone(),
            page_count: state.page_count.saturating_add(1),
        },
        Command::ResetToAll => ViewState::default(),
    }
}

/// What: Positions of corpus items matching `filter`, in rank order.
///
/// Inputs:
/// - `corpus`: Items with precomputed domains.
/// - `filter`: Active filter.
/// - `mode`: Domain comparison mode.
///
/// Output:
/// - Ascending positions into `corpus`.
///
/// Details:
/// - Exact domain filters are answered from the corpus domain index.
/// - Items without a domain never match a domain filter.
#[must_use]
pub fn matching_positions(corpus: &Corpus, filter: &Filter, mode: DomainMatch) -> Vec<usize> {
    match filter {
        Filter::Unfiltered => (0..corpus.len()).collect(),
        Filter::Domain(domain) => match mode {
            DomainMatch::Exact => corpus.positions_for_domain(domain).to_vec(),
            DomainMatch::Contains => (0..corpus.len())
                .filter(|&pos| {
                    corpus
                        .domain_at(pos)
                        .is_some_and(|d| d.contains(domain.as_str()))
                })
                .collect(),
        },
        Filter::Search(term) => corpus
            .items()
            .iter()
            .enumerate()
            .filter(|(_, item)| item.title_text().to_lowercase().contains(term.as_str()))
            .map(|(pos, _)| pos)
            .collect(),
    }
}
