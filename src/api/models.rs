//! Ticketing API models and data structures.
//!
//! Contains the company and ticket records returned by the API and the
//! draft sent when creating a ticket.

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// An organizational account on whose behalf tickets are filed.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Company identifier (numeric ids are kept as text)
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Display name
    #[serde(alias = "companyName")]
    pub name: String,
    /// Contact phone number
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    /// Company website, if any
    #[serde(default)]
    pub web_address: Option<String>,
    /// Whether the account is active
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    /// City of the primary address
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
}

impl Company {
    /// Label shown on the company card's status badge.
    pub fn active_label(&self) -> &'static str {
        if self.is_active { "Active" } else { "Inactive" }
    }

    /// Tone of the company card's status badge.
    pub fn active_tone(&self) -> BadgeTone {
        if self.is_active {
            BadgeTone::Green
        } else {
            BadgeTone::Red
        }
    }

    /// Website for display, skipping blank values.
    pub fn website(&self) -> Option<&str> {
        self.web_address
            .as_deref()
            .map(str::trim)
            .filter(|w| !w.is_empty())
    }
}

/// A support request filed against a company.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Ticket {
    /// Ticket identifier (numeric ids are kept as text)
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Short summary
    pub title: String,
    /// Full description
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Submitter email
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    /// Lifecycle status, open-ended (e.g. "open", "closed", "pending")
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    /// Creation timestamp as sent by the API
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

impl Ticket {
    /// Status badge for this ticket.
    pub fn badge(&self) -> StatusBadge {
        StatusBadge::for_status(&self.status)
    }

    /// Format the creation timestamp as a local date (MM/DD/YYYY).
    ///
    /// # Details
    /// Accepts RFC 3339 timestamps and naive `YYYY-MM-DDTHH:MM:SS[.f]`
    /// timestamps. Anything else is returned unchanged.
    pub fn format_created(&self) -> String {
        let raw = self.created_at.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return ts.with_timezone(&Local).format("%m/%d/%Y").to_string();
        }
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return ts.format("%m/%d/%Y").to_string();
        }
        raw.to_string()
    }
}

/// Colour family of a badge. Mapped to terminal colours by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Green,
    Red,
    Yellow,
}

/// Label and tone rendered for a ticket status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub tone: BadgeTone,
}

impl StatusBadge {
    /// Build the badge for a raw status value.
    ///
    /// # Details
    /// `"open"` is green, `"closed"` is red, everything else falls back to
    /// yellow with its first character upper-cased. Matching is exact.
    pub fn for_status(status: &str) -> Self {
        let tone = match status {
            "open" => BadgeTone::Green,
            "closed" => BadgeTone::Red,
            _ => BadgeTone::Yellow,
        };
        Self {
            label: capitalize(status),
            tone,
        }
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Field of a ticket draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Email,
    Title,
    Description,
}

impl DraftField {
    /// All fields in form order.
    pub const ALL: [DraftField; 3] = [DraftField::Email, DraftField::Title, DraftField::Description];

    /// Form label of the field.
    pub fn label(self) -> &'static str {
        match self {
            DraftField::Email => "Email",
            DraftField::Title => "Title",
            DraftField::Description => "Description",
        }
    }
}

/// Unsaved form input for a new ticket. Serialized as the create request body.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct TicketDraft {
    pub email: String,
    pub title: String,
    pub description: String,
}

impl TicketDraft {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Email => &self.email,
            DraftField::Title => &self.title,
            DraftField::Description => &self.description,
        }
    }

    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Email => &mut self.email,
            DraftField::Title => &mut self.title,
            DraftField::Description => &mut self.description,
        }
    }

    /// First field left blank, in form order.
    pub fn first_missing(&self) -> Option<DraftField> {
        DraftField::ALL
            .into_iter()
            .find(|field| self.field(*field).trim().is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Accept an identifier sent either as a JSON string or a JSON number.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
        Uint(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Int(n) => n.to_string(),
        Id::Uint(n) => n.to_string(),
    })
}

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
