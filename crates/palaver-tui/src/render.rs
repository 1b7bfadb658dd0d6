//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame, and never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::truncate_with_ellipsis;
use crate::overlays::render_utils::{InputHint, hint_spans};
use crate::state::{AppState, Focus};
use crate::transcript::SPINNER_FRAMES;
use crate::{input, overlays, thread, transcript};

const HEADER_HEIGHT: u16 = 3;
const COMPOSER_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let [body, status] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(STATUS_HEIGHT)])
        .areas(area);

    let [sidebar, main] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(thread::SIDEBAR_WIDTH.min(body.width / 2)),
            Constraint::Min(0),
        ])
        .areas(body);

    let [header, messages, composer] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(COMPOSER_HEIGHT),
        ])
        .areas(main);

    thread::render_thread_list(app, frame, sidebar);
    input::render_header(app, frame, header);
    transcript::render_transcript(app, frame, messages);
    input::render_composer(app, frame, composer);
    render_status_line(app, frame, status);

    if let Some(kind) = app.widget.confirm().active() {
        overlays::render_confirm(frame, area, kind);
    }
}

fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();

    if app.widget.is_loading() {
        let glyph = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
        spans.push(Span::styled(
            format!("{glyph} "),
            Style::default().fg(Color::Yellow),
        ));
    }
    spans.push(Span::styled(
        app.shell.description.clone(),
        Style::default().fg(Color::DarkGray),
    ));
    spans.push(Span::raw("  "));

    let used: usize = spans.iter().map(Span::width).sum();
    let hints = status_hints(app.focus);
    let hint_line = Line::from(hint_spans(&hints, Color::Cyan));
    if used + hint_line.width() <= area.width as usize {
        spans.extend(hint_line.spans);
    } else {
        let rest = (area.width as usize).saturating_sub(used);
        let plain: String = hint_line.spans.iter().map(|s| s.content.as_ref()).collect();
        spans.push(Span::styled(
            truncate_with_ellipsis(&plain, rest),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn status_hints(focus: Focus) -> Vec<InputHint<'static>> {
    let mut hints = match focus {
        Focus::Threads => vec![InputHint::new("↑↓", "move"), InputHint::new("Enter", "open")],
        Focus::Composer => vec![InputHint::new("Enter", "send")],
        Focus::Title => vec![
            InputHint::new("Enter", "save"),
            InputHint::new("Esc", "leave"),
        ],
    };
    hints.extend([
        InputHint::new("Tab", "focus"),
        InputHint::new("^N", "new"),
        InputHint::new("^E", "rename"),
        InputHint::new("^D", "clear"),
        InputHint::new("^X", "clear all"),
        InputHint::new("^Q", "quit"),
    ]);
    hints
}
