use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{TaskId, TaskStore, UiConfig};

use super::input;
use super::render;
use super::theme::{Theme, ThemeSet};

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Keystrokes edit the draft
    Insert,
    /// Keystrokes act on the task list
    Navigate,
}

/// Main application state. Owns the one `TaskStore` for the session.
pub struct App {
    pub store: TaskStore,
    pub mode: Mode,
    pub should_quit: bool,
    pub themes: ThemeSet,
    pub show_key_hints: bool,
    /// Cursor index into the visible task list
    pub cursor: usize,
    /// First visible row of the task list
    pub scroll_offset: usize,
    /// Byte offset of the edit cursor within the draft
    pub draft_cursor: usize,
}

impl App {
    pub fn new(store: TaskStore, themes: ThemeSet) -> Self {
        App {
            store,
            // The entry field has focus on startup
            mode: Mode::Insert,
            should_quit: false,
            themes,
            show_key_hints: true,
            cursor: 0,
            scroll_offset: 0,
            draft_cursor: 0,
        }
    }

    /// Build an app with an empty store configured from `[ui]`
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut store = TaskStore::with_date_format(ui.date_format.clone());
        store.set_filter(ui.default_filter);
        if ui.dark_mode {
            store.toggle_dark_mode();
        }
        let mut app = App::new(store, ThemeSet::from_config(ui));
        app.show_key_hints = ui.show_key_hints;
        app
    }

    /// Palette for the current dark-mode flag
    pub fn theme(&self) -> &Theme {
        self.themes.pick(self.store.dark_mode())
    }

    /// Number of rows in the visible list
    pub fn visible_len(&self) -> usize {
        self.store.visible_tasks().len()
    }

    /// Id of the task under the cursor
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.store.visible_tasks().get(self.cursor).map(|t| t.id)
    }

    /// Keep the cursor inside the visible list after it shrinks or the
    /// filter changes
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Adjust `scroll_offset` so the cursor row is on screen
    pub fn scroll_to_cursor(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + visible_height {
            self.scroll_offset = self.cursor + 1 - visible_height;
        }
    }
}

/// Run the TUI application
pub fn run(mut app: App) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    log::info!("event=tui_start");
    let result = run_event_loop(&mut terminal, &mut app);
    log::info!(
        "event=tui_stop tasks={} ok={}",
        app.store.len(),
        result.is_ok()
    );

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
