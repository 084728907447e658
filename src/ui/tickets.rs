//! Company Ticket List rendering.
//!
//! Displays a company's tickets with status badges.

use crate::screens::FetchState;
use crate::screens::tickets::TicketListScreen;
use crate::ui::fetch::{render_empty, render_error, render_loading};
use crate::ui::tone_color;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget},
};

/// Render the ticket list.
///
/// # Arguments
/// * `screen` - Ticket list state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Each ticket takes four lines:
/// - Line 1: Title (bold)
/// - Line 2: First line of the description
/// - Line 3: Submitter, creation date and status badge
/// - Line 4: Separator
pub fn render_tickets(screen: &TicketListScreen, area: Rect, buf: &mut Buffer) {
    let title = format!("Company {}", screen.company_id);

    let tickets = match screen.loader.state() {
        FetchState::Loading => return render_loading(&title, area, buf),
        FetchState::Failed(message) => return render_error(message, area, buf),
        FetchState::Loaded(tickets) => tickets,
    };

    let title = format!("{} · {}", title, screen.count_heading());

    if tickets.is_empty() {
        return render_empty(
            &title,
            "No tickets found",
            "Get started by creating a new ticket (press 'n').",
            area,
            buf,
        );
    }

    let separator = "─".repeat(area.width.saturating_sub(2).max(10) as usize);

    let items: Vec<ListItem> = tickets
        .iter()
        .map(|ticket| {
            let badge = ticket.badge();
            let description = ticket.description.lines().next().unwrap_or_default();

            let line1 = Line::from(Span::styled(
                ticket.title.as_str(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
            let line2 = Line::from(Span::styled(
                description.to_string(),
                Style::default().fg(Color::Gray),
            ));
            let line3 = Line::from(vec![
                Span::styled(format!("✉ {}", ticket.email), Style::default().fg(Color::Cyan)),
                Span::raw("   "),
                Span::styled(
                    format!("◷ {}", ticket.format_created()),
                    Style::default().fg(Color::Magenta),
                ),
                Span::raw("   "),
                Span::styled(
                    badge.label,
                    Style::default()
                        .fg(tone_color(badge.tone))
                        .add_modifier(Modifier::BOLD),
                ),
            ]);
            let line4 = Line::from(Span::styled(
                separator.clone(),
                Style::default().fg(Color::DarkGray),
            ));

            ListItem::new(vec![line1, line2, line3, line4])
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(screen.selected.min(tickets.len() - 1)));

    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::Blue));

    StatefulWidget::render(list, area, buf, &mut list_state);
}
