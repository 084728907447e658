//! HTTP client for the ticketing API.
//!
//! Handles the company listing, per-company ticket listing and ticket
//! creation endpoints.

use crate::api::error::ApiError;
use crate::api::models::{Company, Ticket, TicketDraft};
use crate::config::Config;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

/// Operations the screens need from the ticketing backend.
#[async_trait]
pub trait TicketApi: Send + Sync {
    /// `GET /api/companies`
    async fn list_companies(&self) -> Result<Vec<Company>, ApiError>;

    /// `GET /api/company/{company_id}/tickets`
    async fn list_company_tickets(&self, company_id: &str) -> Result<Vec<Ticket>, ApiError>;

    /// `POST /api/tickets` with the draft as JSON body.
    async fn create_ticket(&self, draft: &TicketDraft) -> Result<(), ApiError>;
}

/// reqwest-backed implementation of [`TicketApi`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// HTTP client for API requests
    client: Client,
    /// Base URL of the API (without the `/api` prefix)
    base_url: Url,
}

impl ApiClient {
    /// Create a new API client from configuration.
    ///
    /// # Arguments
    /// * `config` - Application configuration
    ///
    /// # Returns
    /// * `Result<ApiClient>` - New client or error
    ///
    /// # Details
    /// Fails when the configured API url is not an absolute http(s) url.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let base_url = config.api_base_url()?;

        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self::with_client(client, base_url))
    }

    /// Create a client around an existing HTTP client.
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Build an endpoint url below the base url.
    ///
    /// # Arguments
    /// * `segments` - Path segments, each percent-encoded as one segment
    ///
    /// # Returns
    /// * `Result<Url, ApiError>` - Endpoint url or error
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue a GET request and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl TicketApi for ApiClient {
    async fn list_companies(&self) -> Result<Vec<Company>, ApiError> {
        let url = self.endpoint(&["api", "companies"])?;
        self.get_json(url).await
    }

    async fn list_company_tickets(&self, company_id: &str) -> Result<Vec<Ticket>, ApiError> {
        let url = self.endpoint(&["api", "company", company_id, "tickets"])?;
        self.get_json(url).await
    }

    async fn create_ticket(&self, draft: &TicketDraft) -> Result<(), ApiError> {
        let url = self.endpoint(&["api", "tickets"])?;
        tracing::debug!(%url, "POST");

        let response = self.client.post(url.clone()).json(draft).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(())
    }
}
