//! Confirmation overlay for clearing one or all conversations.

use crossterm::event::{KeyCode, KeyEvent};
use palaver_core::ConfirmKind;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::OverlayTransition;
use super::render_utils::{InputHint, OverlayConfig, render_overlay};
use crate::state::AppState;

/// What a key press means to an open confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Accept,
    Cancel,
    Ignore,
}

impl ConfirmAction {
    pub fn from_key(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y' | 'Y') => Self::Accept,
            KeyCode::Esc | KeyCode::Char('n' | 'N') => Self::Cancel,
            _ => Self::Ignore,
        }
    }
}

/// Applies a key to the visible confirmation of `kind`.
pub fn handle_confirm_key(app: &mut AppState, kind: ConfirmKind, key: KeyEvent) -> OverlayTransition {
    match ConfirmAction::from_key(key) {
        ConfirmAction::Accept => {
            app.widget.accept_confirm(kind);
            OverlayTransition::Close
        }
        ConfirmAction::Cancel => {
            app.widget.cancel_confirm(kind);
            OverlayTransition::Close
        }
        ConfirmAction::Ignore => OverlayTransition::Stay,
    }
}

fn copy_for(kind: ConfirmKind) -> (&'static str, &'static str) {
    match kind {
        ConfirmKind::ClearCurrent => (
            "Clear this conversation?",
            "Its messages will be removed and the conversation closed.",
        ),
        ConfirmKind::ClearAll => (
            "Clear all conversations?",
            "Every conversation and message will be removed.",
        ),
    }
}

pub fn render_confirm(frame: &mut Frame, area: Rect, kind: ConfirmKind) {
    let (title, body) = copy_for(kind);
    let hints = [
        InputHint::new("Enter/y", "confirm"),
        InputHint::new("Esc/n", "cancel"),
    ];
    let layout = render_overlay(
        frame,
        area,
        area.height,
        &OverlayConfig {
            title,
            border_color: Color::Red,
            width: 52,
            height: 7,
            hints: &hints,
        },
    );

    let paragraph = Paragraph::new(Line::from(Span::styled(
        body,
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, layout.body);
}
