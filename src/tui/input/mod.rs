mod insert;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use insert::handle_insert;
use navigate::handle_navigate;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    let key = normalize_key(key);
    match app.mode {
        Mode::Insert => handle_insert(app, key),
        Mode::Navigate => handle_navigate(app, key),
    }
    app.clamp_cursor();
}

/// Handle a bracketed paste: in Insert mode the text lands in the draft at
/// the cursor, with newlines flattened to spaces.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.mode != Mode::Insert || text.is_empty() {
        return;
    }
    let clean = text.replace('\r', "").replace('\n', " ");
    insert::insert_str(app, &clean);
}

/// Some terminals report Shift+letter as a lowercase char with SHIFT set;
/// fold that into the uppercase char so bindings can match on the code alone.
fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}


#[cfg(test)]
mod tests {
    use super::test_keys::*;
    use super::*;
    use crate::model::UiConfig;

    #[test]
    fn test_ctrl_c_quits_from_any_mode() {
        let mut app = App::from_config(&UiConfig::default());
        press_ctrl(&mut app, 'c');
        assert!(app.should_quit);

        let mut app = App::from_config(&UiConfig::default());
        app.mode = Mode::Navigate;
        press_ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn test_shift_lowercase_is_normalized() {
        let key = normalize_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::SHIFT));
        assert_eq!(key.code, KeyCode::Char('D'));
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut app = App::from_config(&UiConfig::default());
        handle_paste(&mut app, "buy\r\nmilk");
        assert_eq!(app.store.draft_text(), "buy milk");
        assert_eq!(app.draft_cursor, "buy milk".len());
    }

    #[test]
    fn test_paste_ignored_in_navigate() {
        let mut app = App::from_config(&UiConfig::default());
        app.mode = Mode::Navigate;
        handle_paste(&mut app, "x");
        assert_eq!(app.store.draft_text(), "");
    }
}
