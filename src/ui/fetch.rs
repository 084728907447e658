//! Loading and error panels shared by the list screens.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Render the loading indicator inside a panel titled `title`.
pub fn render_loading(title: &str, area: Rect, buf: &mut Buffer) {
    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(
            "⟳ Loading...",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().title(title).borders(Borders::ALL));

    Widget::render(paragraph, area, buf);
}

/// Render the error panel in place of a collection.
pub fn render_error(message: &str, area: Rect, buf: &mut Buffer) {
    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(message, Style::default().fg(Color::Red))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(Span::styled(
                "Error",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );

    Widget::render(paragraph, area, buf);
}

/// Render an empty-state panel: a bold heading and a hint below it.
pub fn render_empty(title: &str, heading: &str, hint: &str, area: Rect, buf: &mut Buffer) {
    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(
            heading,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(hint, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().title(title).borders(Borders::ALL));

    Widget::render(paragraph, area, buf);
}
