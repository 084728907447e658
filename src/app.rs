//! Application state management.
//!
//! Manages routes, the navigation history and the active screen.

use crate::api::TicketApi;
use crate::screens::directory::columns_for_width;
use crate::screens::{DirectoryScreen, FetchState, TicketForm, TicketListScreen};
use anyhow::Result;
use ratatui::layout::{Margin, Rect};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Path-shaped identifier of a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Directory,
    /// `/company/{companyId}/tickets`
    CompanyTickets(String),
    /// `/ticket/create`
    NewTicket,
}

impl Route {
    /// Parse a route path.
    ///
    /// # Arguments
    /// * `path` - Route path such as `/company/42/tickets`
    ///
    /// # Returns
    /// * `Result<Route>` - Parsed route or error naming the path
    pub fn parse(path: &str) -> Result<Self> {
        let segments: Vec<&str> = path
            .trim()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Ok(Route::Directory),
            ["company", id, "tickets"] => Ok(Route::CompanyTickets((*id).to_string())),
            ["ticket", "create"] => Ok(Route::NewTicket),
            _ => Err(anyhow::anyhow!("Unknown route: {}", path)),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Directory => "/".to_string(),
            Route::CompanyTickets(id) => format!("/company/{}/tickets", id),
            Route::NewTicket => "/ticket/create".to_string(),
        }
    }

    /// Heading of the screen behind this route.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Directory => "Company Directory",
            Route::CompanyTickets(_) => "Company Tickets",
            Route::NewTicket => "Create New Ticket",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// The screen currently shown.
#[derive(Debug)]
pub enum Screen {
    Directory(DirectoryScreen),
    Tickets(TicketListScreen),
    NewTicket(TicketForm),
}

/// Main application state.
pub struct App {
    api: Arc<dyn TicketApi>,
    /// Visited routes; the last one is the current route
    history: Vec<Route>,
    /// Active screen state
    pub screen: Screen,
    /// Lifetime of the form's success notification
    notification_ttl: Duration,
    /// Body area of the last drawn frame
    pub viewport: Rect,
    /// Status message to display
    pub status_message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Create the application and enter `route`.
    ///
    /// # Details
    /// Entering a list screen spawns its fetch, so this must run inside a
    /// tokio runtime.
    pub fn new(api: Arc<dyn TicketApi>, route: Route, notification_ttl: Duration) -> Self {
        let screen = Self::enter(&api, &route, notification_ttl);
        Self {
            api,
            history: vec![route],
            screen,
            notification_ttl,
            viewport: Rect::default(),
            status_message: None,
            should_quit: false,
        }
    }

    fn enter(api: &Arc<dyn TicketApi>, route: &Route, notification_ttl: Duration) -> Screen {
        tracing::debug!(route = %route, "entering screen");
        match route {
            Route::Directory => Screen::Directory(DirectoryScreen::open(Arc::clone(api))),
            Route::CompanyTickets(id) => {
                Screen::Tickets(TicketListScreen::open(Arc::clone(api), id.clone()))
            }
            Route::NewTicket => Screen::NewTicket(TicketForm::new(notification_ttl)),
        }
    }

    pub fn route(&self) -> &Route {
        // history always holds at least the start route
        &self.history[self.history.len() - 1]
    }

    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    /// Navigate to `route`, replacing the active screen.
    pub fn navigate(&mut self, route: Route) {
        self.screen = Self::enter(&self.api, &route, self.notification_ttl);
        self.history.push(route);
        self.status_message = None;
    }

    /// Return to the previous route. No-op on the first route.
    pub fn back(&mut self) {
        if !self.can_go_back() {
            return;
        }
        self.history.pop();
        self.screen = Self::enter(&self.api, self.route(), self.notification_ttl);
        self.status_message = None;
    }

    /// Re-enter the current list screen, fetching again.
    ///
    /// # Details
    /// Ignored while the screen's request is still pending.
    pub fn reload(&mut self) {
        let busy = match &self.screen {
            Screen::Directory(dir) => dir.loader.is_loading(),
            Screen::Tickets(list) => list.loader.is_loading(),
            Screen::NewTicket(_) => true,
        };
        if busy {
            return;
        }
        self.screen = Self::enter(&self.api, self.route(), self.notification_ttl);
        self.set_status("Reloading...".to_string());
    }

    /// Open the ticket list of the selected company.
    pub fn open_selected_company(&mut self) {
        let company_id = match &self.screen {
            Screen::Directory(dir) => dir.selected_company().map(|c| c.id.clone()),
            _ => None,
        };
        if let Some(id) = company_id {
            self.navigate(Route::CompanyTickets(id));
        }
    }

    /// Submit the ticket form.
    pub fn submit_ticket(&mut self) {
        if let Screen::NewTicket(form) = &mut self.screen {
            form.submit(Arc::clone(&self.api));
        }
    }

    /// Number of card columns in the directory grid.
    pub fn directory_columns(&self) -> usize {
        columns_for_width(self.viewport.inner(Margin::new(1, 1)).width)
    }

    /// Apply finished requests of the active screen.
    ///
    /// # Arguments
    /// * `now` - Current instant, used to time notifications
    pub async fn poll(&mut self, now: Instant) {
        let status = match &mut self.screen {
            Screen::Directory(dir) => {
                if !dir.loader.poll().await {
                    return;
                }
                match dir.loader.state() {
                    FetchState::Loaded(companies) => {
                        Some(loaded_status(companies.len(), "company", "companies"))
                    }
                    _ => None,
                }
            }
            Screen::Tickets(list) => {
                if !list.loader.poll().await {
                    return;
                }
                match list.loader.state() {
                    FetchState::Loaded(tickets) => {
                        Some(loaded_status(tickets.len(), "ticket", "tickets"))
                    }
                    _ => None,
                }
            }
            Screen::NewTicket(form) => {
                form.poll(now).await;
                return;
            }
        };
        self.status_message = status;
    }

    /// Advance time-based state.
    pub fn tick(&mut self, now: Instant) {
        if let Screen::NewTicket(form) = &mut self.screen {
            form.tick(now);
        }
    }

    /// Set status message.
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

fn loaded_status(count: usize, one: &str, many: &str) -> String {
    let noun = if count == 1 { one } else { many };
    format!("Loaded {} {}", count, noun)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::screens::test_support::{MockApi, company, ticket};
    use std::time::Duration;

    /// Poll the app until the active list screen settles.
    pub(crate) async fn settle(app: &mut App) {
        tokio::time::timeout(Duration::from_secs(2), async {
            loop {
                let loading = match &app.screen {
                    Screen::Directory(dir) => dir.loader.is_loading(),
                    Screen::Tickets(list) => list.loader.is_loading(),
                    Screen::NewTicket(form) => form.is_submitting(),
                };
                if !loading {
                    break;
                }
                app.poll(Instant::now()).await;
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("app never settled");
    }

    fn test_api() -> Arc<MockApi> {
        Arc::new(MockApi {
            companies: vec![company("1", "Acme", true), company("2", "Globex", false)],
            tickets: vec![ticket("10", "Printer", "open")],
            ..MockApi::default()
        })
    }

    #[test]
    fn test_route_parse() {
        assert_eq!(Route::parse("/").unwrap(), Route::Directory);
        assert_eq!(Route::parse("").unwrap(), Route::Directory);
        assert_eq!(
            Route::parse("/company/42/tickets/").unwrap(),
            Route::CompanyTickets("42".to_string())
        );
        assert_eq!(Route::parse("ticket/create").unwrap(), Route::NewTicket);
        assert!(Route::parse("/company/42").is_err());
        assert!(Route::parse("/tickets").is_err());
    }

    #[test]
    fn test_route_path() {
        for path in ["/", "/company/42/tickets", "/ticket/create"] {
            assert_eq!(Route::parse(path).unwrap().path(), path);
        }
        assert_eq!(Route::NewTicket.to_string(), "/ticket/create");
    }

    #[tokio::test]
    async fn test_app_starts_on_route() {
        let app = App::new(test_api(), Route::NewTicket, Duration::from_secs(5));
        assert!(matches!(app.screen, Screen::NewTicket(_)));
        assert!(!app.can_go_back());
        assert!(!app.should_quit());
    }

    #[tokio::test]
    async fn test_app_directory_to_tickets_and_back() {
        let api = test_api();
        let mut app = App::new(api.clone(), Route::Directory, Duration::from_secs(5));
        settle(&mut app).await;
        assert_eq!(app.status_message.as_deref(), Some("Loaded 2 companies"));

        if let Screen::Directory(dir) = &mut app.screen {
            dir.move_right();
        }
        app.open_selected_company();
        assert_eq!(app.route(), &Route::CompanyTickets("2".to_string()));
        assert!(app.status_message.is_none());

        settle(&mut app).await;
        match &app.screen {
            Screen::Tickets(list) => assert_eq!(list.tickets().len(), 1),
            _ => panic!("expected ticket list"),
        }
        assert_eq!(*api.ticket_requests.lock().unwrap(), vec!["2".to_string()]);

        app.back();
        assert_eq!(app.route(), &Route::Directory);
        assert!(matches!(app.screen, Screen::Directory(_)));
        app.back();
        assert_eq!(app.route(), &Route::Directory);
    }

    #[tokio::test]
    async fn test_app_reload_refetches() {
        let api = test_api();
        let mut app = App::new(
            api.clone(),
            Route::CompanyTickets("5".to_string()),
            Duration::from_secs(5),
        );
        settle(&mut app).await;

        app.reload();
        assert_eq!(app.status_message.as_deref(), Some("Reloading..."));
        settle(&mut app).await;
        assert_eq!(api.ticket_requests.lock().unwrap().len(), 2);
        assert_eq!(app.status_message.as_deref(), Some("Loaded 1 ticket"));
    }

    #[test]
    fn test_loaded_status_plural() {
        assert_eq!(loaded_status(1, "ticket", "tickets"), "Loaded 1 ticket");
        assert_eq!(loaded_status(0, "ticket", "tickets"), "Loaded 0 tickets");
        assert_eq!(loaded_status(3, "company", "companies"), "Loaded 3 companies");
    }

    #[tokio::test]
    async fn test_app_submit_ticket() {
        let api = test_api();
        let mut app = App::new(api.clone(), Route::NewTicket, Duration::from_secs(5));
        if let Screen::NewTicket(form) = &mut app.screen {
            form.draft.email = "a@b.com".to_string();
            form.draft.title = "T".to_string();
            form.draft.description = "D".to_string();
        }

        app.submit_ticket();
        settle(&mut app).await;

        assert_eq!(api.submitted().len(), 1);
        match &app.screen {
            Screen::NewTicket(form) => {
                assert_eq!(form.draft, crate::api::TicketDraft::default());
                assert!(form.notification.is_some());
            }
            _ => panic!("expected form"),
        }

        app.tick(Instant::now() + Duration::from_secs(6));
        match &app.screen {
            Screen::NewTicket(form) => assert!(form.notification.is_none()),
            _ => panic!("expected form"),
        }
    }

    #[tokio::test]
    async fn test_directory_columns_follow_viewport() {
        let mut app = App::new(test_api(), Route::Directory, Duration::from_secs(5));
        assert_eq!(app.directory_columns(), 1);
        app.viewport = Rect::new(0, 3, 100, 30);
        assert_eq!(app.directory_columns(), 3);
    }
}
