//! Header and composer rendering.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::common::truncate_with_ellipsis;
use crate::features::thread::render::avatar_label;
use crate::state::{AppState, Focus};

pub const COMPOSER_PLACEHOLDER: &str = "Type your message...";

/// Renders the selected thread's avatar label and title (or the title editor).
pub fn render_header(app: &AppState, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Title;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(thread) = app.widget.selected() else {
        return;
    };

    let label = avatar_label(app, &thread.avatar);
    let prefix = format!("{label}  ");
    let mut spans = vec![Span::styled(
        prefix.clone(),
        Style::default().fg(Color::Blue),
    )];

    if app.widget.is_editing_title() {
        let buffer = app.widget.title_input();
        spans.push(Span::styled(
            buffer.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::UNDERLINED),
        ));
        spans.push(Span::styled(
            "  Enter to save",
            Style::default().fg(Color::DarkGray),
        ));

        if focused {
            let offset = (prefix.width() + buffer.width()) as u16;
            frame.set_cursor_position(Position::new(
                (inner.x + offset).min(inner.right().saturating_sub(1)),
                inner.y,
            ));
        }
    } else {
        let available = (inner.width as usize).saturating_sub(prefix.width() + 12);
        spans.push(Span::styled(
            truncate_with_ellipsis(&thread.title, available),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!("  ● {}", thread.status.label()),
            Style::default().fg(Color::Green),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

/// Renders the message input, dimmed while a reply is loading.
pub fn render_composer(app: &AppState, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Composer;
    let loading = app.widget.is_loading();
    let border_color = match (focused, loading) {
        (_, true) => Color::DarkGray,
        (true, false) => Color::Cyan,
        (false, false) => Color::Gray,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(if loading { " Waiting for reply " } else { " Message " });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input = app.widget.input();
    let line = if input.is_empty() {
        Line::from(Span::styled(
            COMPOSER_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        // Keep the tail visible when the text outgrows the field.
        let width = inner.width.saturating_sub(1) as usize;
        let visible: String = tail_fitting(input, width);
        let style = if loading {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        Line::from(Span::styled(visible, style))
    };
    frame.render_widget(Paragraph::new(line), inner);

    if focused && !loading {
        let visible_width = tail_fitting(input, inner.width.saturating_sub(1) as usize).width();
        frame.set_cursor_position(Position::new(inner.x + visible_width as u16, inner.y));
    }
}

/// Longest suffix of `text` (newlines shown as spaces) that fits `width` columns.
fn tail_fitting(text: &str, width: usize) -> String {
    let flat = text.replace(['\r', '\n'], " ");
    let mut used = 0;
    let mut start = flat.len();
    for (idx, ch) in flat.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    flat[start..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_fitting_keeps_end() {
        assert_eq!(tail_fitting("hello world", 5), "world");
        assert_eq!(tail_fitting("short", 10), "short");
        assert_eq!(tail_fitting("a\nb", 10), "a b");
    }
}
