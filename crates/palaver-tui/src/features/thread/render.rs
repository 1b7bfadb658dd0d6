//! Thread list rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use crate::common::truncate_with_ellipsis;
use crate::state::{AppState, Focus};

/// Width of the thread list column.
pub const SIDEBAR_WIDTH: u16 = 34;

pub fn render_thread_list(app: &AppState, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Threads;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let inner_width = area.width.saturating_sub(4) as usize;
    let selected_id = app.widget.selected().map(|thread| thread.id);

    let items: Vec<ListItem> = app
        .widget
        .threads()
        .iter()
        .map(|thread| {
            let is_selected = Some(thread.id) == selected_id;
            let title_style = if is_selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let status = thread.status.label();
            let title_width = inner_width.saturating_sub(status.len() + 3);

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(truncate_with_ellipsis(&thread.title, title_width), title_style),
                    Span::raw(" "),
                    Span::styled("● ", Style::default().fg(Color::Green)),
                    Span::styled(status, Style::default().fg(Color::DarkGray)),
                ]),
                Line::from(Span::styled(
                    truncate_with_ellipsis(&thread.description, inner_width),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(Span::styled(
                    avatar_label(app, &thread.avatar),
                    Style::default().fg(Color::Blue),
                )),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Conversations ");
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Rgb(40, 44, 52)))
        .highlight_symbol("▌");

    let mut list_state = ListState::default().with_selected(Some(app.list_cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Character name for an avatar URL, for terminals that cannot show images.
pub(crate) fn avatar_label(app: &AppState, url: &str) -> String {
    app.widget
        .catalog()
        .character_for(url)
        .map_or_else(|| "◉".to_string(), |character| format!("◉ {character}"))
}
