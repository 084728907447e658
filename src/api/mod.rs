//! Ticketing API integration module.
//!
//! Provides the HTTP client and the records exchanged with the backend.

pub mod client;
pub mod error;
pub mod models;

pub use client::{ApiClient, TicketApi};
pub use error::ApiError;
pub use models::{BadgeTone, Company, DraftField, Ticket, TicketDraft};
