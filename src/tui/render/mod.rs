pub mod filter_bar;
pub mod header;
mod helpers;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub(crate) mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme().background);
    frame.render_widget(Block::default().style(bg_style), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // spacer
            Constraint::Length(1), // entry row
            Constraint::Length(1), // spacer
            Constraint::Length(1), // filter bar
            Constraint::Length(1), // rule
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_title(frame, app, chunks[0]);
    header::render_entry_row(frame, app, chunks[2]);
    filter_bar::render_filter_bar(frame, app, chunks[4]);

    let theme = app.theme();
    let rule = Paragraph::new(Line::from("\u{2500}".repeat(chunks[5].width as usize)))
        .style(Style::default().fg(theme.dim).bg(theme.background));
    frame.render_widget(rule, chunks[5]);

    task_list::render_task_list(frame, app, chunks[6]);
    status_row::render_status_row(frame, app, chunks[7]);
}
