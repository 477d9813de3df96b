//! Presentation boundary: commands in, view notifications out.

use std::sync::Arc;

use crate::logic::projector::{Projector, View};
use crate::logic::view::{Command, DomainMatch, ViewState};
use crate::state::{Corpus, Item};

/// Receiver of view notifications, implemented by the shell.
pub trait ViewListener {
    /// Called once when a session is created from a freshly fetched corpus.
    fn on_fetch_complete(&mut self, corpus: &Corpus);

    /// Called with the initial view and after every dispatched command.
    fn on_view_change(&mut self, view: &View<'_>);
}

/// Listener that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopListener;

impl ViewListener for NoopListener {
    fn on_fetch_complete(&mut self, _corpus: &Corpus) {}

    fn on_view_change(&mut self, _view: &View<'_>) {}
}

/// A loaded corpus bound to a projector and a listener.
#[derive(Debug)]
pub struct Session<L: ViewListener> {
    /// Paging and filtering over the corpus.
    projector: Projector,
    /// Shell-side observer.
    listener: L,
}

impl<L: ViewListener> Session<L> {
    /// What: Start a session over a fetched corpus.
    ///
    /// Inputs:
    /// - `corpus`: Corpus produced by the retriever.
    /// - `page_size`: Items per page.
    /// - `domain_match`: Domain comparison mode.
    /// - `listener`: Shell observer.
    ///
    /// Output:
    /// - Session in the unfiltered state.
    ///
    /// Details:
    /// - Fires `on_fetch_complete` exactly once, then `on_view_change` with the first page.
    pub fn new(
        corpus: Arc<Corpus>,
        page_size: usize,
        domain_match: DomainMatch,
        mut listener: L,
    ) -> Self {
        listener.on_fetch_complete(&corpus);
        let projector = Projector::new(corpus, page_size, domain_match);
        listener.on_view_change(&projector.view());
        Self {
            projector,
            listener,
        }
    }

    /// Apply a user command and notify the listener.
    pub fn dispatch(&mut self, command: &Command) {
        let view = self.projector.apply(command);
        self.listener.on_view_change(&view);
    }

    /// Shortcut for [`Command::SelectDomain`].
    pub fn select_domain(&mut self, url: &str) {
        self.dispatch(&Command::SelectDomain(url.to_string()));
    }

    /// Shortcut for [`Command::Search`].
    pub fn search(&mut self, term: &str) {
        self.dispatch(&Command::Search(term.to_string()));
    }

    /// Shortcut for [`Command::LoadMore`].
    pub fn load_more(&mut self) {
        self.dispatch(&Command::LoadMore);
    }

    /// Shortcut for [`Command::ResetToAll`].
    pub fn reset_to_all(&mut self) {
        self.dispatch(&Command::ResetToAll);
    }

    /// What: Open the link of the displayed item at `index` externally.
    ///
    /// Output:
    /// - `true` when the item exists and has an `http`/`https` URL to open.
    ///
    /// Details:
    /// - Pure pass-through to [`crate::util::open_url`]; view state is unchanged.
    pub fn open_external(&self, index: usize) -> bool {
        match self.projector.displayed_item(index).and_then(|it| it.url.as_deref()) {
            Some(url) => {
                tracing::info!(url, "opening story link");
                crate::util::open_url(url)
            }
            None => false,
        }
    }

    /// Current view.
    #[must_use]
    pub fn view(&self) -> View<'_> {
        self.projector.view()
    }

    /// Current view state.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        self.projector.state()
    }

    /// Displayed item at display index `index`.
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&Item> {
        self.projector.displayed_item(index)
    }

    /// Number of displayed items.
    #[must_use]
    pub const fn displayed_len(&self) -> usize {
        self.projector.displayed_len()
    }

    /// Whether more items can be loaded.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.projector.has_more()
    }

    /// Matching item count.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.projector.total_count()
    }

    /// Listener, for shells that keep state in it.
    #[must_use]
    pub const fn listener(&self) -> &L {
        &self.listener
    }
}
