//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use palaver_core::{ConfirmKind, ThreadId};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::{AppState, Focus};
use crate::{input, overlays, thread};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    let before = list_snapshot(app);
    let effects = match event {
        UiEvent::Tick => {
            if app.widget.is_loading() {
                app.spinner_frame = app.spinner_frame.wrapping_add(1);
            }
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::ReplyResolved(outcome) => {
            app.widget.resolve_reply(outcome);
            vec![]
        }
    };

    if list_snapshot(app) == before {
        app.clamp_list_cursor();
    } else {
        app.sync_list_cursor();
    }
    app.sync_focus();
    effects
}

/// Selection and list length; the cursor follows the selection only when
/// one of these changes.
fn list_snapshot(app: &AppState) -> (Option<ThreadId>, usize) {
    (
        app.widget.selected().map(|thread| thread.id),
        app.widget.threads().len(),
    )
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => {
            if app.widget.confirm().active().is_none() {
                input::insert_text(app, &text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && matches!(key.code, KeyCode::Char('c' | 'q')) {
        app.should_quit = true;
        return vec![UiEffect::Quit];
    }

    // An open confirmation owns the keyboard
    if let Some(kind) = app.widget.confirm().active() {
        overlays::handle_confirm_key(app, kind, key);
        return vec![];
    }

    if ctrl {
        match key.code {
            KeyCode::Char('n') => {
                app.widget.create_thread();
                app.focus = Focus::Title;
                return vec![];
            }
            KeyCode::Char('e') => {
                app.widget.begin_title_edit();
                app.focus = Focus::Title;
                return vec![];
            }
            KeyCode::Char('d') => {
                app.widget.request_confirm(ConfirmKind::ClearCurrent);
                return vec![];
            }
            KeyCode::Char('x') => {
                app.widget.request_confirm(ConfirmKind::ClearAll);
                return vec![];
            }
            _ => {}
        }
    }

    if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
        app.cycle_focus();
        return vec![];
    }

    match app.focus {
        Focus::Threads => thread::handle_list_key(app, key),
        Focus::Composer => input::handle_composer_key(app, key),
        Focus::Title => input::handle_title_key(app, key),
    }
}

#[cfg(test)]
mod tests {
    use palaver_core::config::ShellConfig;
    use palaver_core::thread::DEFAULT_THREAD_ID;
    use palaver_core::{AvatarCatalog, ChatWidget, ReplyOutcome, ThreadRngSource};

    use super::*;

    fn app() -> AppState {
        let widget = ChatWidget::new(AvatarCatalog::default(), Box::new(ThreadRngSource));
        AppState::new(widget, ShellConfig::default())
    }

    fn press(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn ctrl(app: &mut AppState, c: char) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char(c),
                KeyModifiers::CONTROL,
            ))),
        )
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        assert_eq!(ctrl(&mut app, 'c'), vec![UiEffect::Quit]);
        assert!(app.should_quit);
    }

    #[test]
    fn test_send_then_reply_round() {
        let mut app = app();
        type_text(&mut app, "Hello there");

        let effects = press(&mut app, KeyCode::Enter);
        let [UiEffect::GenerateReply(request)] = effects.as_slice() else {
            panic!("expected a reply request, got {effects:?}");
        };
        assert_eq!(request.thread_id, DEFAULT_THREAD_ID);

        update(
            &mut app,
            UiEvent::ReplyResolved(ReplyOutcome {
                thread_id: request.thread_id,
                result: Ok("General Kenobi".to_string()),
            }),
        );

        assert!(!app.widget.is_loading());
        assert_eq!(app.widget.messages().len(), 2);
        assert_eq!(app.widget.threads()[0].description, "General Kenobi");
    }

    #[test]
    fn test_new_thread_focuses_title() {
        let mut app = app();

        ctrl(&mut app, 'n');
        type_text(&mut app, "Ideas");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.widget.threads().len(), 2);
        assert_eq!(app.widget.threads()[0].title, "Ideas");
        assert_eq!(app.focus, Focus::Composer);
        assert_eq!(app.list_cursor, 0);
    }

    #[test]
    fn test_clear_current_requires_confirmation() {
        let mut app = app();
        ctrl(&mut app, 'n');
        press(&mut app, KeyCode::Esc);

        ctrl(&mut app, 'd');
        assert_eq!(app.widget.confirm().active(), Some(ConfirmKind::ClearCurrent));
        // Typing goes to the overlay, not the composer
        type_text(&mut app, "zz");
        assert!(app.widget.input().is_empty());

        press(&mut app, KeyCode::Char('y'));

        assert_eq!(app.widget.threads().len(), 1);
        assert_eq!(app.widget.selected().unwrap().id, DEFAULT_THREAD_ID);
        assert!(app.widget.confirm().active().is_none());
    }

    #[test]
    fn test_clear_all_cancelled() {
        let mut app = app();
        ctrl(&mut app, 'n');
        press(&mut app, KeyCode::Esc);

        ctrl(&mut app, 'x');
        press(&mut app, KeyCode::Char('n'));

        assert_eq!(app.widget.threads().len(), 2);
        assert!(app.widget.confirm().active().is_none());
    }

    #[test]
    fn test_tab_then_list_selection() {
        let mut app = app();
        ctrl(&mut app, 'n');
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, Focus::Composer);

        // Title edit is still pending after Esc, so the cycle visits it
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Title);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Threads);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.widget.selected().unwrap().id, DEFAULT_THREAD_ID);
        assert_eq!(app.list_cursor, 1);
    }

    #[test]
    fn test_spinner_advances_only_while_loading() {
        let mut app = app();
        update(&mut app, UiEvent::Tick);
        assert_eq!(app.spinner_frame, 0);

        type_text(&mut app, "hi");
        press(&mut app, KeyCode::Enter);
        update(&mut app, UiEvent::Tick);
        assert_eq!(app.spinner_frame, 1);
    }

    #[test]
    fn test_paste_into_composer() {
        let mut app = app();
        update(
            &mut app,
            UiEvent::Terminal(Event::Paste("from clipboard".to_string())),
        );
        assert_eq!(app.widget.input(), "from clipboard");
    }
}
