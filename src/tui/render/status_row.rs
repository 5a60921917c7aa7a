use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, ToastKind};

/// Render the status row (bottom of screen): toast, else key hints
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = if let Some(toast) = &app.toast {
        let color = match toast.kind {
            ToastKind::Info => app.theme.green,
            ToastKind::Error => app.theme.red,
        };
        Line::from(Span::styled(
            format!(" {}", toast.message),
            Style::default().fg(color).bg(bg),
        ))
    } else if app.tasks.is_none() && app.load_error.is_none() {
        Line::from(Span::styled(
            " Loading tasks\u{2026}",
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        let hint = "a new  Enter open  r refresh  q quit ";
        let hint_width = hint.chars().count();
        let mut spans = Vec::new();
        if hint_width < width {
            spans.push(Span::styled(
                " ".repeat(width - hint_width),
                Style::default().bg(bg),
            ));
        }
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        Line::from(spans)
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
