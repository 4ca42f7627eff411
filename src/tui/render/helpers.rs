use ratatui::style::Style;
use ratatui::text::Span;

use crate::util::unicode;

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Join `left` and `right` with enough padding to push `right` to the edge
/// of `width`. If they don't fit, `right` is dropped.
pub(super) fn justify<'a>(
    mut left: Vec<Span<'a>>,
    right: Vec<Span<'a>>,
    width: usize,
    pad_style: Style,
) -> Vec<Span<'a>> {
    let used = spans_width(&left) + spans_width(&right);
    if used <= width {
        left.push(Span::styled(" ".repeat(width - used), pad_style));
        left.extend(right);
    } else {
        let lw = spans_width(&left);
        if lw < width {
            left.push(Span::styled(" ".repeat(width - lw), pad_style));
        }
    }
    left
}
