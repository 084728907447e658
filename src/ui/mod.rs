//! UI components module.
//!
//! Contains ratatui widgets for displaying the application interface.

pub mod directory;
pub mod fetch;
pub mod form;
pub mod header;
pub mod notification;
pub mod tickets;

use crate::api::BadgeTone;
use crate::app::{App, Screen};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub use directory::render_directory;
pub use form::render_form;
pub use header::render_header;
pub use notification::render_notification;
pub use tickets::render_tickets;

/// Split the frame into header, body and status bar.
fn split(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Screen body
            Constraint::Length(3), // Status bar
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Area the active screen is drawn in.
pub fn body_area(area: Rect) -> Rect {
    split(area)[1]
}

/// Render the complete UI.
///
/// # Arguments
/// * `f` - Frame to render to
/// * `app` - Application state
pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();
    let [header, body, status] = split(area);
    let buf = f.buffer_mut();

    render_header(app.route(), header, buf);

    match &app.screen {
        Screen::Directory(dir) => render_directory(dir, body, buf),
        Screen::Tickets(list) => render_tickets(list, body, buf),
        Screen::NewTicket(form) => {
            render_form(form, body, buf);
            if let Some(notification) = &form.notification {
                render_notification(notification, area, buf);
            }
        }
    }

    render_status(app, status, buf);
}

fn key_hints(screen: &Screen) -> &'static str {
    match screen {
        Screen::Directory(_) => "←↑↓→ move  Enter open tickets  n new ticket  r reload  q quit",
        Screen::Tickets(_) => "↑↓ move  Esc back  n new ticket  r reload  q quit",
        Screen::NewTicket(_) => "Tab next field  Enter next/submit  Ctrl-S submit  Esc back  Ctrl-C quit",
    }
}

fn render_status(app: &App, area: Rect, buf: &mut Buffer) {
    let mut spans = Vec::new();
    if let Some(message) = &app.status_message {
        spans.push(Span::styled(message.as_str(), Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
    }
    spans.push(Span::styled(
        key_hints(&app.screen),
        Style::default().fg(Color::Gray),
    ));

    let status = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    Widget::render(status, area, buf);
}

/// Terminal colour of a badge tone.
pub fn tone_color(tone: BadgeTone) -> Color {
    match tone {
        BadgeTone::Green => Color::Green,
        BadgeTone::Red => Color::Red,
        BadgeTone::Yellow => Color::Yellow,
    }
}
