//! Message pane rendering.
//!
//! User messages sit on the right, bot replies on the left under the
//! thread's avatar label. Lines are bottom-aligned so the newest message
//! stays visible.

use palaver_core::{Message, Sender};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::common::wrap_text;
use crate::features::thread::render::avatar_label;
use crate::state::AppState;

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Messages wider than this share of the pane wrap.
const BUBBLE_WIDTH_PERCENT: usize = 75;

pub fn render_transcript(app: &AppState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bot_label = app
        .widget
        .selected()
        .map(|thread| avatar_label(app, &thread.avatar))
        .unwrap_or_default();

    let mut lines = build_transcript_lines(app.widget.messages(), &bot_label, inner.width as usize);
    if app.widget.is_loading() {
        let frame_glyph = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
        lines.push(Line::from(Span::styled(
            format!("{frame_glyph} {bot_label} is typing..."),
            Style::default().fg(Color::DarkGray),
        )));
    }

    if lines.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "No messages yet. Say hello!",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center);
        let middle = Rect {
            y: inner.y + inner.height / 2,
            height: 1.min(inner.height),
            ..inner
        };
        frame.render_widget(hint, middle);
        return;
    }

    let height = inner.height as usize;
    let scroll = lines.len().saturating_sub(height);
    let paragraph = Paragraph::new(lines).scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, inner);
}

/// Lays out messages as styled lines for a pane of the given width.
pub fn build_transcript_lines(
    messages: &[Message],
    bot_label: &str,
    width: usize,
) -> Vec<Line<'static>> {
    let bubble_width = (width * BUBBLE_WIDTH_PERCENT / 100).max(1);
    let mut lines = Vec::new();

    for message in messages {
        if !lines.is_empty() {
            lines.push(Line::default());
        }

        match message.sender {
            Sender::User => {
                lines.push(
                    Line::from(Span::styled(
                        format!("{} · {}", message.time, message.sender.label()),
                        Style::default().fg(Color::DarkGray),
                    ))
                    .alignment(Alignment::Right),
                );
                for row in wrap_text(&message.text, bubble_width) {
                    lines.push(
                        Line::from(Span::styled(row, Style::default().fg(Color::Cyan)))
                            .alignment(Alignment::Right),
                    );
                }
            }
            Sender::Bot => {
                lines.push(Line::from(vec![
                    Span::styled(
                        bot_label.to_string(),
                        Style::default()
                            .fg(Color::Blue)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(" · {}", message.time),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]));
                for row in wrap_text(&message.text, bubble_width) {
                    lines.push(Line::from(Span::raw(row)));
                }
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use palaver_core::MessageId;

    use super::*;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_user_and_bot_lines() {
        let messages = vec![
            Message::user(MessageId(1), "Hi"),
            Message::bot(MessageId(2), "Hello there"),
        ];

        let lines = build_transcript_lines(&messages, "◉ AI Assistant", 40);

        assert!(text_of(&lines[0]).ends_with("· you"));
        assert_eq!(lines[0].alignment, Some(Alignment::Right));
        assert_eq!(text_of(&lines[1]), "Hi");
        assert!(text_of(&lines[2]).is_empty());
        assert!(text_of(&lines[3]).starts_with("◉ AI Assistant · "));
        assert_eq!(text_of(&lines[4]), "Hello there");
    }

    #[test]
    fn test_long_messages_wrap() {
        let messages = vec![Message::bot(MessageId(1), "one two three four five six")];

        let lines = build_transcript_lines(&messages, "bot", 12);

        assert!(lines.len() > 2);
        assert!(lines.iter().skip(1).all(|line| line.width() <= 9));
    }

    #[test]
    fn test_empty_transcript_has_no_lines() {
        assert!(build_transcript_lines(&[], "bot", 40).is_empty());
    }
}
