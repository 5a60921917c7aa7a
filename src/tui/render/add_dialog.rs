use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{AddDialog, AddField, App, Overlay};

use super::centered_rect;

/// Render the create-task dialog over the board
pub fn render_add_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let Some(Overlay::Add(dialog)) = &app.overlay else {
        return;
    };

    let overlay_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);
    let bright_style = Style::default().fg(app.theme.text_bright).bg(bg);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .title(Span::styled(
            " New Task ",
            bright_style.add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));
    push_text_field(&mut lines, app, dialog, AddField::Title, "title", &dialog.title);
    lines.push(Line::from(""));
    push_text_field(
        &mut lines,
        app,
        dialog,
        AddField::Description,
        "description",
        &dialog.description,
    );
    lines.push(Line::from(""));
    push_choice_field(
        &mut lines,
        app,
        dialog,
        AddField::Status,
        "column",
        dialog.status.label(),
    );
    lines.push(Line::from(""));
    push_choice_field(
        &mut lines,
        app,
        dialog,
        AddField::Energy,
        "energy",
        dialog.energy.label(),
    );

    lines.push(Line::from(""));
    if dialog.title.trim().is_empty() {
        lines.push(Line::from(Span::styled(" title is required", dim_style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Enter create  Tab next field  \u{2190}\u{2192} change  Esc cancel",
        dim_style,
    )));

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, inner);
}

fn push_text_field(
    lines: &mut Vec<Line<'static>>,
    app: &App,
    dialog: &AddDialog,
    field: AddField,
    label: &str,
    value: &str,
) {
    let is_active = dialog.field == field;
    let mut spans = vec![
        region_indicator(app, is_active),
        Span::styled(
            format!("{}: ", label),
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        ),
        Span::styled(
            value.to_string(),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.background),
        ),
    ];
    if is_active {
        // block cursor at the end of the buffer
        spans.push(Span::styled(
            " ",
            Style::default()
                .fg(app.theme.background)
                .bg(app.theme.text_bright),
        ));
    }
    lines.push(Line::from(spans));
}

fn push_choice_field(
    lines: &mut Vec<Line<'static>>,
    app: &App,
    dialog: &AddDialog,
    field: AddField,
    label: &str,
    value: &str,
) {
    let is_active = dialog.field == field;
    let value_style = if is_active {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.background)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(app.theme.background)
    };

    let mut spans = vec![
        region_indicator(app, is_active),
        Span::styled(
            format!("{}: ", label),
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        ),
    ];
    if is_active {
        spans.push(Span::styled(
            "\u{25C2} ",
            Style::default().fg(app.theme.highlight).bg(app.theme.background),
        ));
    }
    spans.push(Span::styled(value.to_string(), value_style));
    if is_active {
        spans.push(Span::styled(
            " \u{25B8}",
            Style::default().fg(app.theme.highlight).bg(app.theme.background),
        ));
    }
    lines.push(Line::from(spans));
}

/// A small accent mark on the left for the active field
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
