//! Screen state module.
//!
//! Each screen owns its state and the request it has in flight.

pub mod directory;
pub mod fetch;
pub mod form;
pub mod tickets;

#[cfg(test)]
pub(crate) mod test_support;

pub use directory::DirectoryScreen;
pub use fetch::FetchState;
pub use form::TicketForm;
pub use tickets::TicketListScreen;
