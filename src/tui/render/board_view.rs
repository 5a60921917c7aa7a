use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::Task;
use crate::ops::board::{Column, partition};
use crate::tui::app::App;

use super::truncate;

/// Render the five status columns
pub fn render_board(frame: &mut Frame, app: &App, area: Rect) {
    let Some(tasks) = app.tasks.as_ref() else {
        let placeholder = if app.load_error.is_some() {
            " Could not load the board"
        } else {
            " Loading tasks\u{2026}"
        };
        let paragraph = Paragraph::new(placeholder)
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(paragraph, area);
        return;
    };

    let columns = partition(tasks);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(area);

    for (idx, column) in columns.iter().enumerate() {
        render_column(frame, app, column, idx, chunks[idx]);
    }
}

fn render_column(frame: &mut Frame, app: &App, column: &Column, idx: usize, area: Rect) {
    let bg = app.theme.background;
    let accent = app.theme.status_color(column.status);
    let is_active = idx == app.cursor.column;

    let border_style = if is_active {
        Style::default().fg(accent).bg(bg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ({}) ", column.title, column.tasks.len()),
            Style::default().fg(accent).bg(bg).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if column.tasks.is_empty() {
        return;
    }

    // Keep the selected card visible
    let height = inner.height as usize;
    let scroll = if is_active && height > 0 {
        app.cursor.row.saturating_sub(height - 1)
    } else {
        0
    };

    let width = inner.width as usize;
    let lines: Vec<Line> = column
        .tasks
        .iter()
        .enumerate()
        .skip(scroll)
        .take(height)
        .map(|(row, task)| card_line(app, task, width, is_active && row == app.cursor.row))
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, inner);
}

fn card_line(app: &App, task: &Task, width: usize, selected: bool) -> Line<'static> {
    let bg = if selected {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let title_style = if selected {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", task.energy_level.symbol()),
            Style::default()
                .fg(app.theme.energy_color(task.energy_level))
                .bg(bg),
        ),
    ];

    // title, then tags, within the card width
    let mut rest = truncate(&task.title, width.saturating_sub(4));
    if !task.tags.is_empty() {
        let tags: Vec<String> = task.tags.iter().map(|t| format!("#{}", t)).collect();
        rest = truncate(
            &format!("{}  {}", rest, tags.join(" ")),
            width.saturating_sub(4),
        );
    }
    spans.push(Span::styled(rest, title_style));

    Line::from(spans)
}
