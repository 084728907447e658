//! Company Directory rendering.
//!
//! Displays companies as a grid of cards with an active badge.

use crate::api::Company;
use crate::screens::FetchState;
use crate::screens::directory::DirectoryScreen;
use crate::ui::fetch::{render_empty, render_error, render_loading};
use crate::ui::tone_color;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const TITLE: &str = "Company Directory";

/// Render the company directory.
///
/// # Arguments
/// * `screen` - Directory state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Each card shows the company name as its title, followed by phone, city,
/// website and the active badge. The selected card has a yellow border.
pub fn render_directory(screen: &DirectoryScreen, area: Rect, buf: &mut Buffer) {
    let companies = match screen.loader.state() {
        FetchState::Loading => return render_loading(TITLE, area, buf),
        FetchState::Failed(message) => return render_error(message, area, buf),
        FetchState::Loaded(companies) => companies,
    };

    if companies.is_empty() {
        return render_empty(
            TITLE,
            "No companies found",
            "Press 'r' to reload.",
            area,
            buf,
        );
    }

    let title = format!("{} ({})", TITLE, companies.len());
    Widget::render(Block::default().title(title).borders(Borders::ALL), area, buf);

    let grid = screen.grid(area);
    for (index, rect) in grid.visible(companies.len()) {
        render_card(&companies[index], index == screen.selected, rect, buf);
    }
}

fn render_card(company: &Company, selected: bool, area: Rect, buf: &mut Buffer) {
    let label = Style::default().fg(Color::Gray);

    let website = match company.website() {
        Some(web) => Span::styled(web, Style::default().fg(Color::Blue)),
        None => Span::styled("No website", Style::default().fg(Color::DarkGray)),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Phone: ", label),
            Span::raw(company.phone.as_str()),
        ]),
        Line::from(vec![
            Span::styled("City:  ", label),
            Span::raw(company.city.as_str()),
        ]),
        Line::from(vec![Span::styled("Web:   ", label), website]),
        Line::from(Span::styled(
            company.active_label(),
            Style::default()
                .fg(tone_color(company.active_tone()))
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let border_style = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let card = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(
                company.name.as_str(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    Widget::render(card, area, buf);
}
