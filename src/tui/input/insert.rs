use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary, word_boundary_left};

pub(super) fn handle_insert(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Enter => {
            if app.store.submit_draft().is_some() {
                app.draft_cursor = 0;
                // New tasks land at the top
                app.cursor = 0;
                app.scroll_offset = 0;
            }
        }
        KeyCode::Esc | KeyCode::Tab => {
            app.mode = Mode::Navigate;
        }
        KeyCode::Backspace if ctrl || alt => delete_word_left(app),
        KeyCode::Backspace => {
            let end = app.draft_cursor;
            if let Some(start) = prev_grapheme_boundary(app.store.draft_text(), end) {
                delete_range(app, start, end);
                app.draft_cursor = start;
            }
        }
        KeyCode::Delete => {
            let start = app.draft_cursor;
            if let Some(end) = next_grapheme_boundary(app.store.draft_text(), start) {
                delete_range(app, start, end);
            }
        }
        KeyCode::Left => {
            if let Some(pos) = prev_grapheme_boundary(app.store.draft_text(), app.draft_cursor) {
                app.draft_cursor = pos;
            }
        }
        KeyCode::Right => {
            if let Some(pos) = next_grapheme_boundary(app.store.draft_text(), app.draft_cursor) {
                app.draft_cursor = pos;
            }
        }
        KeyCode::Home => app.draft_cursor = 0,
        KeyCode::End => app.draft_cursor = app.store.draft_text().len(),
        KeyCode::Char('a') if ctrl => app.draft_cursor = 0,
        KeyCode::Char('e') if ctrl => app.draft_cursor = app.store.draft_text().len(),
        KeyCode::Char('w') if ctrl => delete_word_left(app),
        KeyCode::Char('u') if ctrl => {
            app.store.set_draft_text(String::new());
            app.draft_cursor = 0;
        }
        KeyCode::Char(c) if !ctrl && !alt => {
            let mut buf = [0u8; 4];
            insert_str(app, c.encode_utf8(&mut buf));
        }
        _ => {}
    }
}

/// Insert text at the draft cursor and move the cursor past it
pub(super) fn insert_str(app: &mut App, text: &str) {
    let mut draft = app.store.draft_text().to_string();
    let at = app.draft_cursor.min(draft.len());
    draft.insert_str(at, text);
    app.store.set_draft_text(draft);
    app.draft_cursor = at + text.len();
}

fn delete_range(app: &mut App, start: usize, end: usize) {
    let mut draft = app.store.draft_text().to_string();
    draft.replace_range(start..end, "");
    app.store.set_draft_text(draft);
}

fn delete_word_left(app: &mut App) {
    let end = app.draft_cursor;
    let start = word_boundary_left(app.store.draft_text(), end);
    if start < end {
        delete_range(app, start, end);
        app.draft_cursor = start;
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;
    use pretty_assertions::assert_eq;

    use crate::model::UiConfig;
    use crate::tui::app::{App, Mode};
    use crate::tui::input::test_keys::*;

    fn app() -> App {
        App::from_config(&UiConfig::default())
    }

    fn texts(app: &App) -> Vec<String> {
        app.store.tasks().iter().map(|t| t.text.clone()).collect()
    }

    #[test]
    fn typing_then_enter_adds_task() {
        let mut app = app();
        type_str(&mut app, "buy milk");
        assert_eq!(app.store.draft_text(), "buy milk");
        press(&mut app, KeyCode::Enter);
        assert_eq!(texts(&app), vec!["buy milk"]);
        assert_eq!(app.store.draft_text(), "");
        assert_eq!(app.draft_cursor, 0);
        assert_eq!(app.mode, Mode::Insert);
    }

    #[test]
    fn enter_on_blank_draft_does_nothing() {
        let mut app = app();
        type_str(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert!(app.store.is_empty());
        assert_eq!(app.store.draft_text(), "   ");
        assert_eq!(app.draft_cursor, 3);
    }

    #[test]
    fn new_task_goes_first_and_takes_cursor() {
        let mut app = app();
        type_str(&mut app, "A");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "B");
        press(&mut app, KeyCode::Enter);
        assert_eq!(texts(&app), vec!["B", "A"]);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn cursor_editing() {
        let mut app = app();
        type_str(&mut app, "wlk");
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        type_str(&mut app, "a");
        assert_eq!(app.store.draft_text(), "walk");

        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.store.draft_text(), "alk");

        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.store.draft_text(), "al");
        assert_eq!(app.draft_cursor, 2);
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let mut app = app();
        type_str(&mut app, "a🎉");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.store.draft_text(), "a");
        assert_eq!(app.draft_cursor, 1);
    }

    #[test]
    fn ctrl_w_and_ctrl_u() {
        let mut app = app();
        type_str(&mut app, "walk the dog");
        press_ctrl(&mut app, 'w');
        assert_eq!(app.store.draft_text(), "walk the ");
        press_ctrl(&mut app, 'u');
        assert_eq!(app.store.draft_text(), "");
        assert_eq!(app.draft_cursor, 0);
    }

    #[test]
    fn esc_and_tab_leave_insert_mode() {
        let mut a = app();
        press(&mut a, KeyCode::Esc);
        assert_eq!(a.mode, Mode::Navigate);

        let mut b = app();
        press(&mut b, KeyCode::Tab);
        assert_eq!(b.mode, Mode::Navigate);
    }

    #[test]
    fn navigate_letters_are_typed_in_insert_mode() {
        let mut app = app();
        type_str(&mut app, "qdx");
        assert!(!app.should_quit);
        assert_eq!(app.store.draft_text(), "qdx");
    }
}
