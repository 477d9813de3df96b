//! Terminal rendering of the story list.

pub mod helpers;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::state::{AppState, InputMode, LoadStatus};
use crate::util::truncate_to_width;

use helpers::{filter_label, headline, meta_line, progress_label};

/// Accent used for titles and the selection.
const ACCENT: Color = Color::Rgb(255, 102, 0);

/// What: Draw the whole screen for the current state.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Shell state; `list_state` is updated by the stateful list widget.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    render_header(f, app, chunks[0]);
    let status = app.status.clone();
    match &status {
        LoadStatus::Loading => render_message(f, chunks[1], "Loading top stories…", Color::Gray),
        LoadStatus::Failed(msg) => {
            let text = format!("Failed to load stories: {msg}\n\nPress r to retry or q to quit.");
            render_message(f, chunks[1], &text, Color::Red);
        }
        LoadStatus::Loaded => render_list(f, app, chunks[1]),
    }
    render_footer(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let label = app
        .session
        .as_ref()
        .map(|s| filter_label(s.state()))
        .unwrap_or_default();
    let line = Line::from(vec![
        Span::styled(
            " Hacker News ",
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(label, Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_message(f: &mut Frame, area: Rect, text: &str, color: Color) {
    let p = Paragraph::new(text.to_string())
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(p, area);
}

fn render_list(f: &mut Frame, app: &mut AppState, area: Rect) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    let width = usize::from(area.width.saturating_sub(4));
    let now = chrono::Utc::now();
    let view = session.view();
    let items: Vec<ListItem> = view
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let head = truncate_to_width(&headline(i + 1, item), width);
            let meta = truncate_to_width(&meta_line(item, now), width.saturating_sub(3));
            ListItem::new(vec![
                Line::from(Span::styled(
                    head,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("   {meta}"),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();
    let empty = items.is_empty();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");
    if empty {
        render_message(f, area, "No matching stories.", Color::Gray);
    } else {
        f.render_stateful_widget(list, area, &mut app.list_state);
    }
}

fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let line = match app.input_mode {
        InputMode::Search => Line::from(vec![
            Span::styled("Search: ", Style::default().fg(ACCENT)),
            Span::raw(app.search_input.clone()),
            Span::styled("▏", Style::default().fg(ACCENT)),
        ]),
        InputMode::Browse => {
            let progress = app
                .session
                .as_ref()
                .map(|s| {
                    let seen = s.listener();
                    let more = if seen.shown < seen.total {
                        "  m: more"
                    } else {
                        ""
                    };
                    format!("{}{more}", progress_label(seen.shown, seen.total))
                })
                .unwrap_or_default();
            Line::from(vec![
                Span::styled(progress, Style::default().fg(Color::Gray)),
                Span::raw("   "),
                Span::styled(
                    "j/k move  enter open  d site  / search  h home  q quit",
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
    };
    let p = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(p, area);
}
