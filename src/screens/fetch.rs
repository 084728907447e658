//! Load-once lifecycle shared by the list screens.
//!
//! A screen starts `Loading` with one request in flight, and settles into
//! either `Loaded` or `Failed` exactly once.

use crate::api::ApiError;
use std::future::Future;
use tokio::task::{JoinError, JoinHandle};

/// What a list screen currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    Loading,
    Failed(String),
    Loaded(Vec<T>),
}

/// Owns the in-flight read request of a list screen and its result.
#[derive(Debug)]
pub struct Loader<T> {
    state: FetchState<T>,
    task: Option<JoinHandle<Result<Vec<T>, ApiError>>>,
    /// Message shown when the server answers with a non-success status
    status_message: &'static str,
}

impl<T: Send + 'static> Loader<T> {
    /// Spawn `request` and start in the loading state.
    ///
    /// # Arguments
    /// * `request` - The read request
    /// * `status_message` - Message shown for non-success HTTP statuses
    ///
    /// # Details
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(request: F, status_message: &'static str) -> Self
    where
        F: Future<Output = Result<Vec<T>, ApiError>> + Send + 'static,
    {
        Self {
            state: FetchState::Loading,
            task: Some(tokio::spawn(request)),
            status_message,
        }
    }

    /// Apply the request result once it has finished.
    ///
    /// # Returns
    /// * `bool` - True if the state changed on this call
    pub async fn poll(&mut self) -> bool {
        if !self.task.as_ref().is_some_and(JoinHandle::is_finished) {
            return false;
        }
        if let Some(task) = self.task.take() {
            let result = task.await;
            self.settle(result);
        }
        true
    }

    fn settle(&mut self, result: Result<Result<Vec<T>, ApiError>, JoinError>) {
        self.state = match result {
            Ok(Ok(items)) => {
                tracing::info!(count = items.len(), "fetch succeeded");
                FetchState::Loaded(items)
            }
            Ok(Err(err)) => {
                tracing::warn!(error = %err, "fetch failed");
                if err.is_status() {
                    FetchState::Failed(self.status_message.to_string())
                } else {
                    FetchState::Failed(err.to_string())
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "fetch task aborted");
                FetchState::Failed(format!("{}: {}", self.status_message, err))
            }
        };
    }
}

impl<T> Loader<T> {
    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading)
    }

    /// Loaded items, empty while loading or after a failure.
    pub fn items(&self) -> &[T] {
        match &self.state {
            FetchState::Loaded(items) => items,
            _ => &[],
        }
    }
}

impl<T> Drop for Loader<T> {
    // A screen that is left never sees its pending result.
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
