use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::helpers::spans_width;
use crate::model::{Filter, Task};
use crate::tui::app::{App, Mode};
use crate::tui::theme::Theme;
use crate::util::unicode::{display_width, truncate_to_width};

/// Message shown when the filter leaves nothing to display
pub fn empty_message(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "No tasks yet",
        Filter::Active => "No active tasks",
        Filter::Completed => "No completed tasks",
    }
}

/// Render the filtered task list, newest first
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let visible_height = area.height as usize;
    app.scroll_to_cursor(visible_height);

    let theme = app.theme();
    let tasks = app.store.visible_tasks();

    if tasks.is_empty() {
        let empty = Paragraph::new(format!(" {}", empty_message(app.store.filter())))
            .style(Style::default().fg(theme.dim).bg(theme.background));
        frame.render_widget(empty, area);
        return;
    }

    let show_cursor = app.mode == Mode::Navigate;
    let width = area.width as usize;
    let lines: Vec<Line> = tasks
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
        .map(|(i, task)| task_line(theme, task, show_cursor && i == app.cursor, width))
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(theme.background));
    frame.render_widget(paragraph, area);
}

/// One row: checkbox, text (crossed out when done), dimmed creation date
fn task_line<'a>(theme: &Theme, task: &Task, is_cursor: bool, width: usize) -> Line<'a> {
    let bg = if is_cursor {
        theme.selection_bg
    } else {
        theme.background
    };

    let check_style = if task.done {
        Style::default().fg(theme.highlight).bg(bg)
    } else {
        Style::default().fg(theme.text).bg(bg)
    };
    let text_style = if task.done {
        Style::default()
            .fg(theme.done)
            .bg(bg)
            .add_modifier(Modifier::CROSSED_OUT)
    } else if is_cursor {
        Style::default()
            .fg(theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_bright).bg(bg)
    };

    let prefix = format!(" [{}] ", task.checkbox_char());
    let date = format!("  {} ", task.created_date);
    let text_room = width.saturating_sub(display_width(&prefix) + display_width(&date));

    let mut spans = vec![
        Span::styled(prefix, check_style),
        Span::styled(truncate_to_width(&task.text, text_room), text_style),
        Span::styled(date, Style::default().fg(theme.dim).bg(bg)),
    ];

    // Pad cursor line
    if is_cursor {
        let content_width = spans_width(&spans);
        if content_width < width {
            spans.push(Span::styled(
                " ".repeat(width - content_width),
                Style::default().bg(bg),
            ));
        }
    }

    Line::from(spans)
}
