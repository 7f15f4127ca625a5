//! Terminal UI rendering.
//!
//! All drawing logic lives here, separated from application state ([`App`])
//! and input handling ([`crate::input`]).
//!
//! ## For contributors
//!
//! * Both screens share the layout: a main area on top and a one-line
//!   status bar at the bottom.
//! * The list screen shows score, title and host per story.  The detail
//!   screen shows one story and its link; `o` hands the link to the
//!   system browser from the main loop.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, FetchStatus, Screen};
use crate::source::Post;

const TITLE: &str = " H4X0R NEWS ";

/// Draw the complete UI for one frame.
pub fn draw(app: &mut App, frame: &mut Frame) {
    let [main_area, status_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    match &app.screen {
        Screen::List => draw_post_list(app, frame, main_area),
        Screen::Detail(post) => draw_detail(post, frame, main_area),
    }
    draw_status_bar(app, frame, status_area);
}

/// Render the scrollable story list.
fn draw_post_list(app: &mut App, frame: &mut Frame, area: Rect) {
    let list_items: Vec<ListItem> = app
        .posts
        .iter()
        .map(|post| {
            let mut spans = vec![
                Span::styled(
                    format!("{:>5}", post.score),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(" "),
                Span::styled(&post.title, Style::default().fg(Color::White)),
            ];
            if let Some(host) = post.host() {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    format!("({host})"),
                    Style::default().fg(Color::Cyan),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(list_items)
        .block(Block::default().title(TITLE).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        )
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// Render a single story.  A story without a link gets a placeholder.
fn draw_detail(post: &Post, frame: &mut Frame, area: Rect) {
    let link = match post.url.as_deref() {
        Some(url) => Span::styled(
            url,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        ),
        None => Span::styled("(no link)", Style::default().fg(Color::DarkGray)),
    };

    let text = vec![
        Line::from(Span::styled(
            &post.title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("points ", Style::default().fg(Color::DarkGray)),
            Span::raw(post.score.to_string()),
            Span::styled("   id ", Style::default().fg(Color::DarkGray)),
            Span::raw(&post.id),
        ]),
        Line::default(),
        Line::from(link),
    ];

    let detail = Paragraph::new(text)
        .block(Block::default().title(TITLE).borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    frame.render_widget(detail, area);
}

/// One-line description of the fetch state.
pub fn status_text(status: &FetchStatus) -> String {
    match status {
        FetchStatus::NotFetched => "Not fetched yet".into(),
        FetchStatus::Loading => "Loading…".into(),
        FetchStatus::Loaded { count: 0, fetched_at } => format!(
            "No stories on the front page ({})",
            fetched_at.with_timezone(&Local).format("%H:%M:%S")
        ),
        FetchStatus::Loaded { count, fetched_at } => format!(
            "Fetched {count} stories at {}",
            fetched_at.with_timezone(&Local).format("%H:%M:%S")
        ),
        FetchStatus::Failed { reason } => format!("Error: {reason}"),
    }
}

/// Render the bottom status bar.
fn draw_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let colour = match app.status {
        FetchStatus::Failed { .. } => Color::Red,
        _ => Color::Yellow,
    };
    let help = match app.screen {
        Screen::List => "  q: quit  ↑/↓: scroll  enter: open  r: refresh",
        Screen::Detail(_) => "  o: open in browser  esc: back",
    };

    let message = match &app.notice {
        Some(notice) => notice.clone(),
        None => status_text(&app.status),
    };

    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(message, Style::default().fg(colour)),
        Span::raw("  "),
        Span::styled(
            format!("{} items", app.posts.len()),
            Style::default().fg(Color::Green),
        ),
        Span::raw(help),
    ]));
    frame.render_widget(status, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
