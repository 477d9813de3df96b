//! Shell state held by the terminal runtime.

use ratatui::widgets::ListState;

use crate::config::Settings;
use crate::logic::{Session, View, ViewListener};
use crate::state::{Corpus, LoadStatus};

/// Keyboard focus of the shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Navigating the story list.
    #[default]
    Browse,
    /// Typing into the search box.
    Search,
}

/// View listener that keeps the last notification for the status line.
#[derive(Debug, Default, Clone)]
pub struct ShellListener {
    /// Corpus size reported at fetch completion.
    pub fetched: usize,
    /// Displayed count after the last command.
    pub shown: usize,
    /// Matching total after the last command.
    pub total: usize,
    /// Number of view notifications received.
    pub changes: u64,
}

impl ViewListener for ShellListener {
    fn on_fetch_complete(&mut self, corpus: &Corpus) {
        self.fetched = corpus.len();
    }

    fn on_view_change(&mut self, view: &View<'_>) {
        self.shown = view.len();
        self.total = view.total;
        self.changes += 1;
    }
}

/// Everything the event loop and renderer need.
#[derive(Debug)]
pub struct AppState {
    /// Loaded settings.
    pub settings: Settings,
    /// Corpus loading lifecycle.
    pub status: LoadStatus,
    /// Active session once the corpus is loaded.
    pub session: Option<Session<ShellListener>>,
    /// Selected row in the story list.
    pub list_state: ListState,
    /// Current keyboard focus.
    pub input_mode: InputMode,
    /// Search box contents, as typed.
    pub search_input: String,
    /// Set when the user asked to quit.
    pub should_quit: bool,
    /// Set when a retry was requested after a failed load.
    pub retry_requested: bool,
}

impl AppState {
    /// Fresh state in `Loading`.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            status: LoadStatus::Loading,
            session: None,
            list_state: ListState::default(),
            input_mode: InputMode::Browse,
            search_input: String::new(),
            should_quit: false,
            retry_requested: false,
        }
    }

    /// What: Install a freshly fetched corpus.
    ///
    /// Inputs:
    /// - `corpus`: Result of a successful fetch.
    ///
    /// Details:
    /// - Replaces any previous session and selects the first row.
    pub fn on_corpus_loaded(&mut self, corpus: std::sync::Arc<Corpus>) {
        let session = Session::new(
            corpus,
            self.settings.page_size,
            self.settings.domain_match,
            ShellListener::default(),
        );
        let first = (session.displayed_len() > 0).then_some(0);
        self.session = Some(session);
        self.status = LoadStatus::Loaded;
        self.list_state.select(first);
        self.search_input.clear();
        self.input_mode = InputMode::Browse;
    }

    /// Record a failed fetch; any previous session is dropped.
    pub fn on_corpus_failed(&mut self, message: String) {
        self.session = None;
        self.status = LoadStatus::Failed(message);
        self.list_state.select(None);
    }

    /// Index of the selected row, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// What: Move the selection by `delta` rows, loading more when stepping past the end.
    ///
    /// Inputs:
    /// - `delta`: Positive moves down, negative moves up.
    pub fn move_selection(&mut self, delta: isize) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let len = session.displayed_len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let cur = self.list_state.selected().unwrap_or(0);
        let target = cur.saturating_add_signed(delta);
        if target >= len && session.has_more() {
            session.load_more();
        }
        let len = session.displayed_len();
        self.list_state.select(Some(target.min(len - 1)));
    }

    /// Keep the selection inside the displayed range after a filter change.
    pub fn clamp_selection(&mut self) {
        let len = self.session.as_ref().map_or(0, Session::displayed_len);
        if len == 0 {
            self.list_state.select(None);
        } else {
            let cur = self.list_state.selected().unwrap_or(0);
            self.list_state.select(Some(cur.min(len - 1)));
        }
    }

    /// Re-run the search with the current input box contents.
    pub fn refresh_search(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.search(&self.search_input);
        }
        self.list_state.select(Some(0));
        self.clamp_selection();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Item;
    use std::sync::Arc;

    fn loaded(n: u64, page_size: usize) -> AppState {
        let mut app = AppState::new(Settings {
            page_size,
            ..Settings::default()
        });
        let items = (1..=n)
            .map(|i| Item {
                id: i,
                title: Some(format!("story {i}")),
                ..Default::default()
            })
            .collect();
        app.on_corpus_loaded(Arc::new(Corpus::new(items)));
        app
    }

    #[test]
    /// What: Stepping past the last row loads the next page
    ///
    /// - Input: 12 items, page size 5, selection at row 4, move down
    /// - Output: 10 rows displayed, selection on row 5
    fn moving_past_end_loads_more() {
        let mut app = loaded(12, 5);
        app.list_state.select(Some(4));
        app.move_selection(1);
        let session = app.session.as_ref().expect("session");
        assert_eq!(session.displayed_len(), 10);
        assert_eq!(app.selected(), Some(5));
        assert_eq!(session.listener().shown, 10);
    }

    #[test]
    fn selection_clamps_at_bounds() {
        let mut app = loaded(3, 5);
        app.move_selection(-4);
        assert_eq!(app.selected(), Some(0));
        app.move_selection(10);
        assert_eq!(app.selected(), Some(2));
    }

    #[test]
    fn failure_drops_session() {
        let mut app = loaded(3, 5);
        app.on_corpus_failed("boom".into());
        assert!(app.session.is_none());
        assert_eq!(app.status, LoadStatus::Failed("boom".into()));
        assert_eq!(app.selected(), None);
    }

    #[test]
    fn search_input_drives_filter() {
        let mut app = loaded(12, 30);
        app.search_input = "STORY 1".into();
        app.refresh_search();
        let session = app.session.as_ref().expect("session");
        assert_eq!(session.displayed_len(), 4);
        assert_eq!(session.state().search_term(), Some("story 1"));
    }
}
