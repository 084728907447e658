//! Company Ticket List screen state.

use crate::api::{Ticket, TicketApi};
use crate::screens::fetch::Loader;
use std::sync::Arc;

/// Tickets of one company.
#[derive(Debug)]
pub struct TicketListScreen {
    /// Company taken from the route
    pub company_id: String,
    pub loader: Loader<Ticket>,
    /// Currently selected ticket index
    pub selected: usize,
}

impl TicketListScreen {
    /// Enter the screen and start fetching the company's tickets.
    pub fn open(api: Arc<dyn TicketApi>, company_id: String) -> Self {
        let id = company_id.clone();
        let loader = Loader::spawn(
            async move { api.list_company_tickets(&id).await },
            "Failed to fetch tickets",
        );
        Self {
            company_id,
            loader,
            selected: 0,
        }
    }

    pub fn tickets(&self) -> &[Ticket] {
        self.loader.items()
    }

    /// Heading over the list, e.g. "1 Ticket Found" or "3 Tickets Found".
    pub fn count_heading(&self) -> String {
        let count = self.tickets().len();
        let noun = if count == 1 { "Ticket" } else { "Tickets" };
        format!("{} {} Found", count, noun)
    }

    /// Move selection up, wrapping to the bottom.
    pub fn move_up(&mut self) {
        let len = self.tickets().len();
        if len == 0 {
            return;
        }
        self.selected = if self.selected == 0 {
            len - 1
        } else {
            self.selected - 1
        };
    }

    /// Move selection down, wrapping to the top.
    pub fn move_down(&mut self) {
        let len = self.tickets().len();
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1) % len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::fetch::FetchState;
    use crate::screens::fetch::tests::settle;
    use crate::screens::test_support::{MockApi, ticket};
    use reqwest::StatusCode;

    #[tokio::test]
    async fn test_tickets_requested_for_route_company() {
        let api = MockApi::with_tickets(vec![ticket("1", "Printer", "open")]);
        let mut screen = TicketListScreen::open(api.clone(), "42".to_string());
        settle(&mut screen.loader).await;

        assert_eq!(*api.ticket_requests.lock().unwrap(), vec!["42".to_string()]);
        assert_eq!(screen.tickets().len(), 1);
        assert_eq!(screen.count_heading(), "1 Ticket Found");
    }

    #[tokio::test]
    async fn test_empty_ticket_list() {
        let mut screen = TicketListScreen::open(MockApi::with_tickets(Vec::new()), "7".to_string());
        settle(&mut screen.loader).await;

        assert_eq!(screen.loader.state(), &FetchState::Loaded(Vec::new()));
        assert_eq!(screen.count_heading(), "0 Tickets Found");
        screen.move_down();
        assert_eq!(screen.selected, 0);
    }

    #[tokio::test]
    async fn test_ticket_fetch_rejected() {
        let mut screen = TicketListScreen::open(MockApi::failing(), "7".to_string());
        assert!(screen.loader.is_loading());
        settle(&mut screen.loader).await;

        assert!(matches!(screen.loader.state(), FetchState::Failed(_)));
    }

    #[tokio::test]
    async fn test_ticket_fetch_status_error() {
        let api = MockApi::rejecting(StatusCode::SERVICE_UNAVAILABLE);
        let mut screen = TicketListScreen::open(api, "7".to_string());
        settle(&mut screen.loader).await;

        assert_eq!(
            screen.loader.state(),
            &FetchState::Failed("Failed to fetch tickets".to_string())
        );
    }

    #[tokio::test]
    async fn test_ticket_selection_wraps() {
        let api = MockApi::with_tickets(vec![
            ticket("1", "A", "open"),
            ticket("2", "B", "closed"),
            ticket("3", "C", "pending"),
        ]);
        let mut screen = TicketListScreen::open(api, "1".to_string());
        settle(&mut screen.loader).await;

        screen.move_up();
        assert_eq!(screen.tickets()[screen.selected].title, "C");
        screen.move_down();
        assert_eq!(screen.selected, 0);
        screen.move_down();
        assert_eq!(screen.tickets()[screen.selected].title, "B");
    }
}
