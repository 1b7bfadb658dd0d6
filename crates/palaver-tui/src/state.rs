//! Application state composition.
//!
//! ```text
//! AppState
//! ├── widget: ChatWidget   (threads, conversations, buffers, gates)
//! ├── focus: Focus         (which region receives keystrokes)
//! ├── list_cursor          (highlighted row in the thread list)
//! ├── shell: ShellConfig   (window title, status description)
//! └── spinner_frame        (loading animation)
//! ```
//!
//! The widget holds everything the chat itself means; the rest is purely
//! about driving it from a keyboard.

use palaver_core::ChatWidget;
use palaver_core::config::ShellConfig;

/// Region that receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Threads,
    Composer,
    Title,
}

pub struct AppState {
    pub widget: ChatWidget,
    pub focus: Focus,
    pub list_cursor: usize,
    pub shell: ShellConfig,
    pub spinner_frame: usize,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(widget: ChatWidget, shell: ShellConfig) -> Self {
        let mut state = Self {
            widget,
            focus: Focus::Composer,
            list_cursor: 0,
            shell,
            spinner_frame: 0,
            should_quit: false,
        };
        state.sync_list_cursor();
        state
    }

    /// Moves focus to the next region; the title field joins the cycle only
    /// while a title edit is pending.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Threads => Focus::Composer,
            Focus::Composer if self.widget.is_editing_title() => Focus::Title,
            Focus::Composer | Focus::Title => Focus::Threads,
        };
    }

    /// Points the list cursor at the selected thread, or keeps it in range
    /// when the selection is not listed.
    pub fn sync_list_cursor(&mut self) {
        let threads = self.widget.threads();
        let selected = self.widget.selected().map(|thread| thread.id);
        if let Some(index) = threads.iter().position(|t| Some(t.id) == selected) {
            self.list_cursor = index;
        } else {
            self.clamp_list_cursor();
        }
    }

    pub fn clamp_list_cursor(&mut self) {
        self.list_cursor = self
            .list_cursor
            .min(self.widget.threads().len().saturating_sub(1));
    }

    /// Drops title focus once no title edit is pending.
    pub fn sync_focus(&mut self) {
        if self.focus == Focus::Title && !self.widget.is_editing_title() {
            self.focus = Focus::Composer;
        }
    }
}

#[cfg(test)]
mod tests {
    use palaver_core::{AvatarCatalog, ThreadRngSource};

    use super::*;

    fn app() -> AppState {
        let widget = ChatWidget::new(AvatarCatalog::default(), Box::new(ThreadRngSource));
        AppState::new(widget, ShellConfig::default())
    }

    #[test]
    fn test_focus_cycle_skips_title_when_not_editing() {
        let mut app = app();
        assert_eq!(app.focus, Focus::Composer);
        app.cycle_focus();
        assert_eq!(app.focus, Focus::Threads);
        app.cycle_focus();
        assert_eq!(app.focus, Focus::Composer);
    }

    #[test]
    fn test_focus_cycle_includes_title_while_editing() {
        let mut app = app();
        app.widget.begin_title_edit();
        app.cycle_focus();
        assert_eq!(app.focus, Focus::Title);
        app.cycle_focus();
        assert_eq!(app.focus, Focus::Threads);
    }

    #[test]
    fn test_cursor_follows_selection() {
        let mut app = app();
        app.widget.create_thread();
        app.widget.create_thread();
        let last = app.widget.threads()[2].id;
        app.widget.select_thread(last);

        app.sync_list_cursor();

        assert_eq!(app.list_cursor, 2);
    }

    #[test]
    fn test_title_focus_released_after_rename() {
        let mut app = app();
        app.widget.create_thread();
        app.focus = Focus::Title;
        app.widget.rename_thread("Done");

        app.sync_focus();

        assert_eq!(app.focus, Focus::Composer);
    }
}
