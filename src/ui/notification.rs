//! Notification overlay rendering.

use crate::screens::form::{Notification, NotificationKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

const MAX_WIDTH: u16 = 50;

/// Render a notification in the top-right corner of `area`.
///
/// # Arguments
/// * `notification` - Notification to show
/// * `area` - Full frame area
/// * `buf` - Buffer to render to
pub fn render_notification(notification: &Notification, area: Rect, buf: &mut Buffer) {
    let rect = overlay_rect(area, notification.message.chars().count() as u16 + 6);

    let (icon, color) = match notification.kind {
        NotificationKind::Success => ("✔", Color::Green),
        NotificationKind::Error => ("✖", Color::Red),
    };

    let line = Line::from(vec![
        Span::styled(format!("{} ", icon), Style::default().fg(color)),
        Span::styled(
            notification.message.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    Widget::render(Clear, rect, buf);
    Widget::render(paragraph, rect, buf);
}

/// Three-line box of (at most) `width` cells, one cell in from the top-right corner.
fn overlay_rect(area: Rect, width: u16) -> Rect {
    let width = width.min(MAX_WIDTH).min(area.width);
    let height = 3.min(area.height);
    let x = area.right().saturating_sub(width + 1).max(area.x);
    let y = area.y + 1.min(area.height.saturating_sub(height));
    Rect::new(x, y, width, height)
}
