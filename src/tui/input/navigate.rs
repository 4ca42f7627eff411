use crossterm::event::{KeyCode, KeyEvent};

use crate::model::Filter;
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,

        // Back to the entry field
        KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Enter => {
            app.mode = Mode::Insert;
            app.draft_cursor = app.store.draft_text().len();
        }

        // Movement
        KeyCode::Char('j') | KeyCode::Down => {
            if app.cursor + 1 < app.visible_len() {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.visible_len().saturating_sub(1);
        }

        // Task actions
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.selected_task_id() {
                app.store.toggle_done(id);
            }
        }
        KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => {
            if let Some(id) = app.selected_task_id() {
                app.store.remove_task(id);
            }
        }
        KeyCode::Char('C') => {
            app.store.clear_completed();
        }

        // Filters
        KeyCode::Char('1') => set_filter(app, Filter::All),
        KeyCode::Char('2') => set_filter(app, Filter::Active),
        KeyCode::Char('3') => set_filter(app, Filter::Completed),
        KeyCode::Tab | KeyCode::Char('f') => {
            let next = app.store.filter().next();
            set_filter(app, next);
        }

        KeyCode::Char('D') => app.store.toggle_dark_mode(),
        _ => {}
    }
}

fn set_filter(app: &mut App, filter: Filter) {
    if app.store.filter() != filter {
        app.store.set_filter(filter);
        app.cursor = 0;
        app.scroll_offset = 0;
    }
}
