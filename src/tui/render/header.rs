use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_segmentation::UnicodeSegmentation;

use super::helpers::justify;
use crate::tui::app::{App, Mode};
use crate::util::unicode::{display_width, truncate_to_width};

pub const TITLE: &str = "My To-Do List";
pub const PLACEHOLDER: &str = "Enter a task";
const PROMPT: &str = " > ";
const ADD_BUTTON: &str = "[Add] ";
const CURSOR: &str = "\u{258C}"; // ▌

/// Render the title line
pub fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let line = Line::from(Span::styled(
        format!(" {}", TITLE),
        Style::default()
            .fg(theme.text_bright)
            .bg(theme.background)
            .add_modifier(Modifier::BOLD),
    ));
    let paragraph = Paragraph::new(line).style(Style::default().bg(theme.background));
    frame.render_widget(paragraph, area);
}

/// Render the entry row: prompt, draft (or placeholder), and the Add button
pub fn render_entry_row(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let bg = theme.input_bg;
    let width = area.width as usize;
    let draft = app.store.draft_text();
    let editing = app.mode == Mode::Insert;

    let mut left = vec![Span::styled(PROMPT, Style::default().fg(theme.dim).bg(bg))];
    let available = width.saturating_sub(display_width(PROMPT) + display_width(ADD_BUTTON) + 1);

    if draft.is_empty() {
        if editing {
            left.push(Span::styled(
                CURSOR,
                Style::default().fg(theme.highlight).bg(bg),
            ));
        }
        left.push(Span::styled(
            truncate_to_width(PLACEHOLDER, available),
            Style::default().fg(theme.dim).bg(bg),
        ));
    } else {
        let text_style = Style::default().fg(theme.text_bright).bg(bg);
        if editing {
            let at = app.draft_cursor.min(draft.len());
            let (before, after) = fit_around_cursor(&draft[..at], &draft[at..], available);
            left.push(Span::styled(before, text_style));
            left.push(Span::styled(
                CURSOR,
                Style::default().fg(theme.highlight).bg(bg),
            ));
            left.push(Span::styled(after, text_style));
        } else {
            left.push(Span::styled(truncate_to_width(draft, available), text_style));
        }
    }

    let add_style = if draft.trim().is_empty() {
        Style::default().fg(theme.dim).bg(bg)
    } else {
        Style::default()
            .fg(theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    };
    let spans = justify(
        left,
        vec![Span::styled(ADD_BUTTON, add_style)],
        width,
        Style::default().bg(bg),
    );

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Fit the text around the cursor into `available` cells (one cell is the
/// cursor itself). Text before the cursor loses graphemes from the left
/// first; text after it is truncated.
fn fit_around_cursor(before: &str, after: &str, available: usize) -> (String, String) {
    let room = available.saturating_sub(1);
    let mut before_graphemes: Vec<&str> = before.graphemes(true).collect();
    let mut before_width = display_width(before);
    while before_width > room && !before_graphemes.is_empty() {
        let g = before_graphemes.remove(0);
        before_width -= display_width(g);
    }
    let after_room = room - before_width;
    (before_graphemes.concat(), truncate_to_width(after, after_room))
}
