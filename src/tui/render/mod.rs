pub mod add_dialog;
pub mod board_view;
pub mod detail_view;
pub mod status_row;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthChar;

use super::app::{App, Overlay};

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | board | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    board_view::render_board(frame, app, chunks[1]);
    status_row::render_status_row(frame, app, chunks[2]);

    match &app.overlay {
        Some(Overlay::Add(_)) => add_dialog::render_add_dialog(frame, app, area),
        Some(Overlay::Detail(_)) => detail_view::render_detail_view(frame, app, area),
        None => {}
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = vec![Span::styled(
        " [kz] kazi",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    let count = app
        .tasks
        .as_ref()
        .map(|t| format!("{} tasks ", t.len()))
        .unwrap_or_default();
    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let count_width = count.chars().count();
    if used + count_width < width {
        spans.push(Span::styled(
            " ".repeat(width - used - count_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            count,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    ));
    let paragraph = Paragraph::new(vec![Line::from(spans), separator]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Center a rect of the given percentage size inside `area`
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

/// Truncate to a display width, appending an ellipsis when cut
pub(crate) fn truncate(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            out.push('\u{2026}');
            return out;
        }
        width += w;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate("board", 10), "board");
    }

    #[test]
    fn test_truncate_appends_ellipsis() {
        assert_eq!(truncate("a long task title", 8), "a long \u{2026}");
    }
}
