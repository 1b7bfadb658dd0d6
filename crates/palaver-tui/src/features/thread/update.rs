//! Thread list key handling.

use crossterm::event::{KeyCode, KeyEvent};

use crate::effects::UiEffect;
use crate::state::{AppState, Focus};

/// Moves the list cursor; `Enter` selects the highlighted thread.
pub fn handle_list_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let last = app.widget.threads().len().saturating_sub(1);

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.list_cursor = app.list_cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.list_cursor = (app.list_cursor + 1).min(last);
        }
        KeyCode::Home | KeyCode::Char('g') => app.list_cursor = 0,
        KeyCode::End | KeyCode::Char('G') => app.list_cursor = last,
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(id) = app.widget.threads().get(app.list_cursor).map(|t| t.id) {
                app.widget.select_thread(id);
                app.focus = Focus::Composer;
            }
        }
        _ => {}
    }

    vec![]
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use palaver_core::config::ShellConfig;
    use palaver_core::thread::DEFAULT_THREAD_ID;
    use palaver_core::{AvatarCatalog, ChatWidget, ThreadRngSource};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with_threads(extra: usize) -> AppState {
        let mut widget = ChatWidget::new(AvatarCatalog::default(), Box::new(ThreadRngSource));
        for _ in 0..extra {
            widget.create_thread();
        }
        let mut app = AppState::new(widget, ShellConfig::default());
        app.focus = Focus::Threads;
        app
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut app = app_with_threads(1);
        handle_list_key(&mut app, key(KeyCode::Up));
        assert_eq!(app.list_cursor, 0);
        for _ in 0..5 {
            handle_list_key(&mut app, key(KeyCode::Down));
        }
        assert_eq!(app.list_cursor, 1);
    }

    #[test]
    fn test_enter_selects_highlighted_thread() {
        let mut app = app_with_threads(2);
        handle_list_key(&mut app, key(KeyCode::End));

        handle_list_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.widget.selected().unwrap().id, DEFAULT_THREAD_ID);
        assert_eq!(app.focus, Focus::Composer);
    }
}
