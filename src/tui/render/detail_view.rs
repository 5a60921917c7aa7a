use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, DetailRegion, Overlay};

use super::centered_rect;

/// Render the task detail dialog over the board
pub fn render_detail_view(frame: &mut Frame, app: &App, area: Rect) {
    let Some(Overlay::Detail(view)) = &app.overlay else {
        return;
    };
    let task = &view.task;

    let overlay_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);
    let bright_style = Style::default().fg(app.theme.text_bright).bg(bg);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.status_color(task.status)).bg(bg))
        .title(Span::styled(
            " Task ",
            bright_style.add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("   ", Style::default().bg(bg)),
        Span::styled(
            task.title.clone(),
            bright_style.add_modifier(Modifier::BOLD),
        ),
    ]));

    if let Some(description) = &task.description {
        lines.push(Line::from(""));
        for text_line in description.lines() {
            lines.push(Line::from(vec![
                Span::styled("   ", Style::default().bg(bg)),
                Span::styled(text_line.to_string(), text_style),
            ]));
        }
    }

    lines.push(Line::from(""));
    push_choice_row(
        &mut lines,
        app,
        view.region == DetailRegion::Status,
        "status",
        task.status.label(),
        app.theme.status_color(task.status),
    );
    push_choice_row(
        &mut lines,
        app,
        view.region == DetailRegion::Energy,
        "energy",
        task.energy_level.label(),
        app.theme.energy_color(task.energy_level),
    );

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("   created: ", dim_style),
        Span::styled(task.created_at.format("%Y-%m-%d").to_string(), text_style),
        Span::styled("   updated: ", dim_style),
        Span::styled(task.updated_at.format("%Y-%m-%d").to_string(), text_style),
    ]));

    if !task.tags.is_empty() {
        let mut spans = vec![Span::styled("   tags: ", dim_style)];
        for (i, tag) in task.tags.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ", Style::default().bg(bg)));
            }
            spans.push(Span::styled(
                format!("#{}", tag),
                Style::default().fg(app.theme.cyan).bg(bg),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    {
        let is_active = view.region == DetailRegion::Delete;
        let delete_style = if is_active {
            Style::default()
                .fg(app.theme.red)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.red).bg(bg)
        };
        lines.push(Line::from(vec![
            region_indicator(app, is_active),
            Span::styled("Delete Task", delete_style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " \u{2190}\u{2192} change  Tab next  d delete  Esc close",
        dim_style,
    )));

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, inner);
}

fn push_choice_row(
    lines: &mut Vec<Line<'static>>,
    app: &App,
    is_active: bool,
    label: &str,
    value: &str,
    value_color: ratatui::style::Color,
) {
    let bg = app.theme.background;
    let mut value_style = Style::default().fg(value_color).bg(bg);
    if is_active {
        value_style = value_style.add_modifier(Modifier::BOLD);
    }

    let mut spans = vec![
        region_indicator(app, is_active),
        Span::styled(
            format!("{}: ", label),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ];
    if is_active {
        spans.push(Span::styled(
            "\u{25C2} ",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
    }
    spans.push(Span::styled(value.to_string(), value_style));
    if is_active {
        spans.push(Span::styled(
            " \u{25B8}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
    }
    lines.push(Line::from(spans));
}

fn region_indicator(app: &App, is_active: bool) -> Span<'static> {
    if is_active {
        Span::styled(
            " \u{258E} ",
            Style::default().fg(app.theme.highlight).bg(app.theme.background),
        )
    } else {
        Span::styled("   ", Style::default().bg(app.theme.background))
    }
}
