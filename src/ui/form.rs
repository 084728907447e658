//! Ticket Creation Form rendering.

use crate::api::DraftField;
use crate::screens::form::{Focus, TicketForm};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Render the ticket form.
///
/// # Arguments
/// * `form` - Form state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// The focused field has a yellow border and a `_` cursor. The submit
/// control shows "Submitting..." and is greyed out while a request is
/// pending.
pub fn render_form(form: &TicketForm, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(Span::styled(
            "Create New Ticket",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    Widget::render(block, area, buf);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Subtitle
            Constraint::Length(3), // Email
            Constraint::Length(3), // Title
            Constraint::Min(4),    // Description
            Constraint::Length(1), // Validation hint
            Constraint::Length(3), // Submit
        ])
        .split(inner);

    let subtitle = Paragraph::new(Line::from(Span::styled(
        "Please fill out the form below to submit your ticket",
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center);
    Widget::render(subtitle, chunks[0], buf);

    render_field(form, DraftField::Email, chunks[1], buf);
    render_field(form, DraftField::Title, chunks[2], buf);
    render_field(form, DraftField::Description, chunks[3], buf);

    if let Some(hint) = &form.validation {
        let hint = Paragraph::new(Span::styled(
            format!("⚠ {}", hint),
            Style::default().fg(Color::Red),
        ));
        Widget::render(hint, chunks[4], buf);
    }

    render_submit(form, chunks[5], buf);
}

fn render_field(form: &TicketForm, field: DraftField, area: Rect, buf: &mut Buffer) {
    let focused = form.focus == Focus::Field(field);
    let value = form.draft.field(field);

    let mut lines: Vec<Line> = value.split('\n').map(Line::raw).collect();
    if focused && let Some(last) = lines.last_mut() {
        last.push_span(Span::styled("_", Style::default().fg(Color::Yellow)));
    }

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let mut paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(format!("{} *", field.label()))
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    if field == DraftField::Description {
        paragraph = paragraph.wrap(Wrap { trim: false });
    }

    Widget::render(paragraph, area, buf);
}

fn render_submit(form: &TicketForm, area: Rect, buf: &mut Buffer) {
    let focused = form.focus == Focus::Submit;

    let (label, style) = if form.is_submitting() {
        ("⟳ Submitting...", Style::default().fg(Color::DarkGray))
    } else if focused {
        (
            "Submit Ticket",
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("Submit Ticket", Style::default().fg(Color::Blue))
    };

    let button = Paragraph::new(Span::styled(label, style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if focused {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                }),
        );

    Widget::render(button, area, buf);
}
