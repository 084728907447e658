//! Header bar rendering.
//!
//! Shows the application title and the current route.

use crate::app::Route;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub const APP_TITLE: &str = "Autotask CX Client";

/// Render the header bar.
///
/// # Arguments
/// * `route` - Current route
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
pub fn render_header(route: &Route, area: Rect, buf: &mut Buffer) {
    let line = Line::from(vec![
        Span::styled(
            APP_TITLE,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            route.title(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", route.path()), Style::default().fg(Color::Gray)),
    ]);

    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    Widget::render(paragraph, area, buf);
}
