use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::helpers::justify;
use crate::tui::app::{App, Mode};

const INSERT_HINTS: &str = "Enter add  Esc list  Ctrl-C quit ";
const NAVIGATE_HINTS: &str = "space done  d delete  1/2/3 filter  C clear  D dark  i type  q quit ";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let bg = theme.background;
    let width = area.width as usize;

    let (label, hints) = match app.mode {
        Mode::Insert => (" -- INSERT --", INSERT_HINTS),
        Mode::Navigate => ("", NAVIGATE_HINTS),
    };

    let left = vec![Span::styled(label, Style::default().fg(theme.highlight).bg(bg))];
    let right = if app.show_key_hints {
        vec![Span::styled(hints, Style::default().fg(theme.dim).bg(bg))]
    } else {
        Vec::new()
    };

    let line = Line::from(justify(left, right, width, Style::default().bg(bg)));
    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
