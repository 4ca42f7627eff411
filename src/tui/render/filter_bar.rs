use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::helpers::justify;
use crate::model::{Filter, StoreView};
use crate::tui::app::App;
use crate::tui::theme::Theme;

pub const CLEAR_LABEL: &str = "Clear Completed";
/// Shown in light mode: switch to dark
pub const MOON: &str = "\u{263E}";
/// Shown in dark mode: switch to light
pub const SUN: &str = "\u{2600}";

/// Render "N left", the filter buttons, Clear Completed, and the dark toggle
pub fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let view = app.store.view();
    let spans = filter_bar_spans(theme, &view, area.width as usize);
    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.background));
    frame.render_widget(paragraph, area);
}

fn filter_bar_spans<'a>(theme: &Theme, view: &StoreView<'_>, width: usize) -> Vec<Span<'a>> {
    let bg = theme.background;

    let mut left = vec![Span::styled(
        format!(" {} left  ", view.remaining),
        Style::default().fg(theme.text).bg(bg),
    )];
    for filter in Filter::ALL {
        let style = if filter == view.filter {
            Style::default()
                .fg(theme.background)
                .bg(theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text).bg(bg)
        };
        left.push(Span::styled(format!(" {} ", filter.label()), style));
    }

    let clear_style = if view.has_completed {
        Style::default().fg(theme.danger).bg(bg)
    } else {
        Style::default().fg(theme.dim).bg(bg)
    };
    let icon = if view.dark_mode { SUN } else { MOON };
    let right = vec![
        Span::styled(CLEAR_LABEL, clear_style),
        Span::styled("  ", Style::default().bg(bg)),
        Span::styled(icon, Style::default().fg(theme.highlight).bg(bg)),
        Span::styled(" ", Style::default().bg(bg)),
    ];

    justify(left, right, width, Style::default().bg(bg))
}
