//! Ticket Creation Form state.
//!
//! Manages the draft, field focus, the pending submission and the
//! notification shown once it settles.

use crate::api::{ApiError, DraftField, TicketApi, TicketDraft};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::{JoinError, JoinHandle};

pub const SUCCESS_MESSAGE: &str = "Ticket submitted successfully!";
pub const ERROR_MESSAGE: &str = "Error submitting ticket. Please try again.";
pub const REQUIRED_MESSAGE: &str = "Please fill out this field.";

/// Focusable elements of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(DraftField),
    Submit,
}

impl Focus {
    const ORDER: [Focus; 4] = [
        Focus::Field(DraftField::Email),
        Focus::Field(DraftField::Title),
        Focus::Field(DraftField::Description),
        Focus::Submit,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient message shown over the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    /// When set, the notification disappears at this instant
    pub expires_at: Option<Instant>,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// Ticket Creation Form state.
#[derive(Debug)]
pub struct TicketForm {
    pub draft: TicketDraft,
    pub focus: Focus,
    pub notification: Option<Notification>,
    /// Required-field hint for the focused field
    pub validation: Option<String>,
    pending: Option<JoinHandle<Result<(), ApiError>>>,
    /// How long a success notification stays up
    notification_ttl: Duration,
}

impl TicketForm {
    /// Create an empty form.
    ///
    /// # Arguments
    /// * `notification_ttl` - Lifetime of the success notification
    pub fn new(notification_ttl: Duration) -> Self {
        Self {
            draft: TicketDraft::default(),
            focus: Focus::Field(DraftField::Email),
            notification: None,
            validation: None,
            pending: None,
            notification_ttl,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Type a character into the focused field.
    pub fn input_char(&mut self, ch: char) {
        if let Focus::Field(field) = self.focus {
            self.draft.field_mut(field).push(ch);
            self.validation = None;
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        if let Focus::Field(field) = self.focus {
            self.draft.field_mut(field).pop();
        }
    }

    /// Start a line break in the description.
    pub fn newline(&mut self) {
        if self.focus == Focus::Field(DraftField::Description) {
            self.draft.description.push('\n');
        }
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Submit the draft.
    ///
    /// # Arguments
    /// * `api` - API used for the create request
    ///
    /// # Returns
    /// * `bool` - True if a request was started
    ///
    /// # Details
    /// Ignored while a submission is pending. A blank field focuses that
    /// field and shows the required-field hint instead of sending.
    pub fn submit(&mut self, api: Arc<dyn TicketApi>) -> bool {
        if self.is_submitting() {
            return false;
        }

        if let Some(missing) = self.draft.first_missing() {
            self.focus = Focus::Field(missing);
            self.validation = Some(REQUIRED_MESSAGE.to_string());
            return false;
        }

        self.validation = None;
        self.notification = None;
        let draft = self.draft.clone();
        tracing::debug!(email = %draft.email, title = %draft.title, "submitting ticket");
        self.pending = Some(tokio::spawn(async move { api.create_ticket(&draft).await }));
        true
    }

    /// Apply the submission result once it has finished.
    ///
    /// # Returns
    /// * `bool` - True if the pending submission settled on this call
    pub async fn poll(&mut self, now: Instant) -> bool {
        if !self.pending.as_ref().is_some_and(JoinHandle::is_finished) {
            return false;
        }
        if let Some(task) = self.pending.take() {
            let result = task.await;
            self.settle(result, now);
        }
        true
    }

    fn settle(&mut self, result: Result<Result<(), ApiError>, JoinError>, now: Instant) {
        match result {
            Ok(Ok(())) => {
                tracing::info!("ticket submitted");
                self.notification = Some(Notification {
                    kind: NotificationKind::Success,
                    message: SUCCESS_MESSAGE.to_string(),
                    expires_at: Some(now + self.notification_ttl),
                });
                self.draft.clear();
                self.focus = Focus::Field(DraftField::Email);
            }
            Ok(Err(err)) => {
                tracing::warn!(error = %err, "ticket submission failed");
                self.show_error();
            }
            Err(err) => {
                tracing::error!(error = %err, "ticket submission task aborted");
                self.show_error();
            }
        }
    }

    fn show_error(&mut self) {
        self.notification = Some(Notification {
            kind: NotificationKind::Error,
            message: ERROR_MESSAGE.to_string(),
            expires_at: None,
        });
    }

    /// Drop the notification once its time is up.
    pub fn tick(&mut self, now: Instant) {
        if self.notification.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notification = None;
        }
    }
}

impl Drop for TicketForm {
    // Leaving the form cancels a submission that has not landed yet.
    fn drop(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}
