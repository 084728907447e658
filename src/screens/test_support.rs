//! In-memory `TicketApi` used by screen, app and rendering tests.

use crate::api::{ApiError, Company, Ticket, TicketApi, TicketDraft};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct MockApi {
    pub companies: Vec<Company>,
    pub tickets: Vec<Ticket>,
    /// Answer every request with this HTTP status
    pub reject_with: Option<StatusCode>,
    /// Fail every request at the transport level
    pub network_down: bool,
    /// Delay before a create request is recorded and answered
    pub submit_delay: Option<Duration>,
    pub submitted: Mutex<Vec<TicketDraft>>,
    pub ticket_requests: Mutex<Vec<String>>,
}

impl MockApi {
    pub fn with_companies(companies: Vec<Company>) -> Arc<Self> {
        Arc::new(Self {
            companies,
            ..Self::default()
        })
    }

    pub fn with_tickets(tickets: Vec<Ticket>) -> Arc<Self> {
        Arc::new(Self {
            tickets,
            ..Self::default()
        })
    }

    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn rejecting(status: StatusCode) -> Arc<Self> {
        Arc::new(Self {
            reject_with: Some(status),
            ..Self::default()
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            network_down: true,
            ..Self::default()
        })
    }

    pub fn slow(submit_delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            submit_delay: Some(submit_delay),
            ..Self::default()
        })
    }

    pub fn submitted(&self) -> Vec<TicketDraft> {
        self.submitted.lock().unwrap().clone()
    }

    fn failure(&self, path: &str) -> Option<ApiError> {
        if self.network_down {
            return Some(network_error());
        }
        self.reject_with.map(|status| ApiError::Status {
            status,
            url: format!("http://mock{}", path),
        })
    }
}

/// A real transport-level reqwest error.
pub fn network_error() -> ApiError {
    let err = reqwest::Client::new()
        .get("not a url")
        .build()
        .unwrap_err();
    ApiError::Transport(err)
}

#[async_trait]
impl TicketApi for MockApi {
    async fn list_companies(&self) -> Result<Vec<Company>, ApiError> {
        match self.failure("/api/companies") {
            Some(err) => Err(err),
            None => Ok(self.companies.clone()),
        }
    }

    async fn list_company_tickets(&self, company_id: &str) -> Result<Vec<Ticket>, ApiError> {
        self.ticket_requests
            .lock()
            .unwrap()
            .push(company_id.to_string());
        match self.failure(&format!("/api/company/{}/tickets", company_id)) {
            Some(err) => Err(err),
            None => Ok(self.tickets.clone()),
        }
    }

    async fn create_ticket(&self, draft: &TicketDraft) -> Result<(), ApiError> {
        if let Some(delay) = self.submit_delay {
            tokio::time::sleep(delay).await;
        }
        self.submitted.lock().unwrap().push(draft.clone());
        match self.failure("/api/tickets") {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

pub fn company(id: &str, name: &str, is_active: bool) -> Company {
    Company {
        id: id.to_string(),
        name: name.to_string(),
        phone: "555-0100".to_string(),
        web_address: Some(format!("{}.example", name.to_lowercase())),
        is_active,
        city: "Austin".to_string(),
    }
}

pub fn ticket(id: &str, title: &str, status: &str) -> Ticket {
    Ticket {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{} description", title),
        email: "user@example.com".to_string(),
        status: status.to_string(),
        created_at: "2024-03-05T10:00:00".to_string(),
    }
}
