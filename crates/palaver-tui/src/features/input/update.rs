//! Key handling for the composer and the title field.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::effects::UiEffect;
use crate::state::{AppState, Focus};

/// Handles a key while the composer has focus.
///
/// Editing and submission are ignored while a reply is loading.
pub fn handle_composer_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if app.widget.is_loading() {
        return vec![];
    }

    match key.code {
        KeyCode::Enter => app
            .widget
            .submit_input()
            .map(UiEffect::GenerateReply)
            .into_iter()
            .collect(),
        KeyCode::Backspace => {
            let mut text = app.widget.input().to_string();
            text.pop();
            app.widget.set_input(text);
            vec![]
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.widget.set_input("");
            vec![]
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut text = app.widget.input().to_string();
            text.push(c);
            app.widget.set_input(text);
            vec![]
        }
        _ => vec![],
    }
}

/// Handles a key while the title field has focus.
///
/// `Enter` commits; a blank title keeps the field open. `Esc` commits the
/// same way and hands focus back to the composer either way.
pub fn handle_title_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Enter => {
            if app.widget.commit_title_edit() {
                app.focus = Focus::Composer;
            }
        }
        KeyCode::Esc => {
            app.widget.commit_title_edit();
            app.focus = Focus::Composer;
        }
        KeyCode::Backspace => {
            let mut text = app.widget.title_input().to_string();
            text.pop();
            app.widget.set_title_input(text);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut text = app.widget.title_input().to_string();
            text.push(c);
            app.widget.set_title_input(text);
        }
        _ => {}
    }

    vec![]
}

/// Inserts pasted text into whichever buffer has focus.
pub fn insert_text(app: &mut AppState, pasted: &str) {
    match app.focus {
        Focus::Title => {
            let single_line = pasted.replace(['\r', '\n'], " ");
            let text = format!("{}{single_line}", app.widget.title_input());
            app.widget.set_title_input(text);
        }
        Focus::Composer if !app.widget.is_loading() => {
            let text = format!("{}{pasted}", app.widget.input());
            app.widget.set_input(text);
        }
        _ => {}
    }
}
