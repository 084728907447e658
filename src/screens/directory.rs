//! Company Directory screen state.
//!
//! Holds the company listing and the card selection of the grid.

use crate::api::{Company, TicketApi};
use crate::screens::fetch::Loader;
use ratatui::layout::{Margin, Position, Rect};
use std::sync::Arc;

/// Minimum width of a company card, in cells.
pub const CARD_MIN_WIDTH: u16 = 32;
/// Height of a company card including its border.
pub const CARD_HEIGHT: u16 = 6;

/// Company Directory state.
#[derive(Debug)]
pub struct DirectoryScreen {
    pub loader: Loader<Company>,
    /// Index of the selected card
    pub selected: usize,
}

impl DirectoryScreen {
    /// Enter the screen and start fetching companies.
    pub fn open(api: Arc<dyn TicketApi>) -> Self {
        let loader = Loader::spawn(
            async move { api.list_companies().await },
            "Failed to fetch companies",
        );
        Self { loader, selected: 0 }
    }

    pub fn companies(&self) -> &[Company] {
        self.loader.items()
    }

    pub fn selected_company(&self) -> Option<&Company> {
        self.companies().get(self.selected)
    }

    pub fn move_left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.selected + 1 < self.companies().len() {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self, columns: usize) {
        if self.selected >= columns {
            self.selected -= columns;
        }
    }

    pub fn move_down(&mut self, columns: usize) {
        if self.selected + columns < self.companies().len() {
            self.selected += columns;
        }
    }

    /// Card placement for the grid drawn inside `area` (the bordered panel).
    pub fn grid(&self, area: Rect) -> CardGrid {
        CardGrid::new(area, self.selected)
    }

    /// Index of the card under a terminal cell, if any.
    pub fn card_at(&self, area: Rect, column: u16, row: u16) -> Option<usize> {
        let grid = self.grid(area);
        grid.visible(self.companies().len())
            .find(|(_, rect)| rect.contains(Position::new(column, row)))
            .map(|(index, _)| index)
    }
}

/// Geometry of the company card grid.
///
/// Shared by rendering and mouse hit-testing so both agree on where each
/// card sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardGrid {
    /// Area inside the panel border
    pub inner: Rect,
    pub columns: usize,
    pub visible_rows: usize,
    /// First grid row shown (keeps the selected card on screen)
    pub first_row: usize,
}

impl CardGrid {
    pub fn new(area: Rect, selected: usize) -> Self {
        let inner = area.inner(Margin::new(1, 1));
        let columns = columns_for_width(inner.width);
        let visible_rows = ((inner.height / CARD_HEIGHT) as usize).max(1);
        let selected_row = selected / columns;
        let first_row = selected_row.saturating_sub(visible_rows - 1);
        Self {
            inner,
            columns,
            visible_rows,
            first_row,
        }
    }

    /// Screen rectangle of card `index`, if it is within the visible rows.
    pub fn card_rect(&self, index: usize) -> Option<Rect> {
        let row = index / self.columns;
        if row < self.first_row || row >= self.first_row + self.visible_rows {
            return None;
        }
        let column = (index % self.columns) as u16;
        let width = self.inner.width / self.columns as u16;
        let rect = Rect::new(
            self.inner.x + column * width,
            self.inner.y + (row - self.first_row) as u16 * CARD_HEIGHT,
            width,
            CARD_HEIGHT,
        );
        Some(rect.intersection(self.inner))
    }

    /// Visible cards as `(index, rect)` pairs for a list of `len` cards.
    pub fn visible(&self, len: usize) -> impl Iterator<Item = (usize, Rect)> + '_ {
        let start = self.first_row * self.columns;
        let end = ((self.first_row + self.visible_rows) * self.columns).min(len);
        (start.min(end)..end).filter_map(|index| self.card_rect(index).map(|rect| (index, rect)))
    }
}

/// Number of card columns that fit in `width` cells.
pub fn columns_for_width(width: u16) -> usize {
    ((width / CARD_MIN_WIDTH) as usize).max(1)
}
