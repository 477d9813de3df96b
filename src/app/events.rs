//! Key handling: translate terminal input into session commands.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::{AppState, InputMode, LoadStatus};

/// What: Route one key press to the active input mode.
///
/// Inputs:
/// - `app`: Mutable shell state.
/// - `key`: Key event from the terminal.
///
/// Details:
/// - Release/repeat events are ignored; `Ctrl-c` quits from any mode.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }
    match app.input_mode {
        InputMode::Search => handle_search_key(app, key),
        InputMode::Browse => handle_browse_key(app, key),
    }
}

/// Search box editing; every keystroke re-runs the search.
fn handle_search_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.search_input.clear();
            app.refresh_search();
            app.input_mode = InputMode::Browse;
        }
        KeyCode::Enter => app.input_mode = InputMode::Browse,
        KeyCode::Backspace => {
            if app.search_input.pop().is_some() {
                app.refresh_search();
            }
        }
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
        {
            app.search_input.push(ch);
            app.refresh_search();
        }
        _ => {}
    }
}

fn handle_browse_key(app: &mut AppState, key: KeyEvent) {
    let page = isize::try_from(app.settings.page_size).unwrap_or(isize::MAX);
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => app.move_selection(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_selection(-1),
        KeyCode::PageDown => app.move_selection(page),
        KeyCode::PageUp => app.move_selection(-page),
        KeyCode::Enter | KeyCode::Char('o') => open_selected(app),
        KeyCode::Char('d') => filter_by_selected_domain(app),
        KeyCode::Char('/') if app.status == LoadStatus::Loaded => {
            app.input_mode = InputMode::Search;
        }
        KeyCode::Char('m') => {
            if let Some(session) = app.session.as_mut() {
                session.load_more();
            }
            app.clamp_selection();
        }
        KeyCode::Char('h') | KeyCode::Home => {
            if let Some(session) = app.session.as_mut() {
                session.reset_to_all();
            }
            app.search_input.clear();
            app.list_state.select(Some(0));
            app.clamp_selection();
        }
        KeyCode::Char('r') if matches!(app.status, LoadStatus::Failed(_)) => {
            app.retry_requested = true;
        }
        _ => {}
    }
}

fn open_selected(app: &AppState) {
    if let (Some(session), Some(sel)) = (app.session.as_ref(), app.selected())
        && !session.open_external(sel)
    {
        tracing::debug!(index = sel, "selected story has no link to open");
    }
}

/// Filter by the domain of the selected story; text posts leave the view unchanged.
fn filter_by_selected_domain(app: &mut AppState) {
    let Some(sel) = app.selected() else {
        return;
    };
    let Some(session) = app.session.as_mut() else {
        return;
    };
    let Some(url) = session.item(sel).and_then(|it| it.url.clone()) else {
        return;
    };
    session.select_domain(&url);
    if session.state().domain().is_some() {
        app.search_input.clear();
        app.list_state.select(Some(0));
    }
    app.clamp_selection();
}
