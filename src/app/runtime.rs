//! Event loop driving the terminal shell.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

use crate::config::Settings;
use crate::sources::{self, FetchOptions};
use crate::state::{AppState, Corpus, LoadStatus};
use crate::ui::ui;

use super::Result;
use super::events::handle_key;
use super::terminal::{is_headless, restore_terminal, setup_terminal};

/// Outcome of one corpus fetch, already stringified for display.
type FetchOutcome = std::result::Result<Arc<Corpus>, String>;

/// What: Run the terminal shell until the user quits.
///
/// Inputs:
/// - `settings`: Loaded user settings.
///
/// Output:
/// - `Ok(())` on normal exit; `Err` on terminal I/O failures.
///
/// # Errors
/// - Terminal setup, drawing, or restore failures.
///
/// Details:
/// - The corpus fetch runs on a spawned task; the UI shows `Loading` until it reports back.
/// - With `HNVIEW_TEST_HEADLESS=1` no terminal is touched and input is not read.
pub async fn run(settings: Settings) -> Result<()> {
    let headless = is_headless();
    if !headless {
        setup_terminal()?;
    }
    let res = event_loop(settings, headless).await;
    if !headless && let Err(e) = restore_terminal() {
        tracing::error!(error = %e, "failed to restore terminal");
    }
    res
}

/// Draw, wait for input or a fetch outcome, repeat until quit.
async fn event_loop(settings: Settings, headless: bool) -> Result<()> {
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };
    let mut app = AppState::new(settings);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<CEvent>();
    let event_thread_cancelled = Arc::new(AtomicBool::new(false));
    spawn_event_thread(headless, event_tx, event_thread_cancelled.clone());

    let (fetch_tx, mut fetch_rx) = mpsc::unbounded_channel::<FetchOutcome>();
    spawn_fetch(app.settings.fetch_options(), fetch_tx.clone());

    let mut tick = tokio::time::interval(Duration::from_millis(250));
    loop {
        if let Some(t) = terminal.as_mut() {
            t.draw(|f| ui(f, &mut app))?;
        }
        if app.should_quit {
            break;
        }
        tokio::select! {
            Some(ev) = event_rx.recv() => {
                if let CEvent::Key(key) = ev {
                    handle_key(&mut app, key);
                }
            }
            Some(outcome) = fetch_rx.recv() => match outcome {
                Ok(corpus) => app.on_corpus_loaded(corpus),
                Err(msg) => app.on_corpus_failed(msg),
            },
            _ = tick.tick() => {}
        }
        if app.retry_requested {
            app.retry_requested = false;
            app.status = LoadStatus::Loading;
            tracing::info!("retrying corpus fetch");
            spawn_fetch(app.settings.fetch_options(), fetch_tx.clone());
        }
    }
    event_thread_cancelled.store(true, Ordering::Relaxed);
    Ok(())
}

/// What: Fetch the corpus on a background task and report the outcome.
///
/// Inputs:
/// - `options`: Retriever options.
/// - `tx`: Channel the outcome is sent on.
fn spawn_fetch(options: FetchOptions, tx: mpsc::UnboundedSender<FetchOutcome>) {
    tokio::spawn(async move {
        let outcome = match sources::fetch_corpus(options).await {
            Ok(corpus) => Ok(Arc::new(corpus)),
            Err(e) => {
                tracing::error!(error = %e, "corpus fetch failed");
                Err(e.to_string())
            }
        };
        let _ = tx.send(outcome);
    });
}

/// What: Read terminal events on a dedicated thread and forward them.
///
/// Inputs:
/// - `headless`: When true, no thread is started.
/// - `event_tx`: Channel for terminal events.
/// - `event_thread_cancelled`: Set on exit so the thread stops polling.
///
/// Details:
/// - Polls with a short timeout so cancellation is noticed promptly.
fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    event_thread_cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if event_thread_cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        // transient read errors are ignored
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "terminal event poll failed");
                    break;
                }
            }
        }
    });
}
