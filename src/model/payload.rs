//! Typed request bodies a backend would receive for each form.

use chrono::NaiveDate;
use serde::Serialize;

use super::snapshot::{FormKind, FormSnapshot};
use super::validation::{ValidationError, parse_date, parse_number};

/// Errors converting a snapshot into its payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("budget must be a number: {0}")]
    Budget(ValidationError),
    #[error("deadline must be a date: {0}")]
    Deadline(ValidationError),
}

/// Body of a contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Body of a service request. Optional text fields are sent as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub sub_details: String,
    pub details: String,
    pub notes: String,
    pub platform: String,
    pub attachment_link: String,
    pub priority: String,
    pub budget: Option<u32>,
    pub deadline: Option<NaiveDate>,
}

/// A submission body, tagged by form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Contact(ContactMessage),
    Service(ServiceRequest),
}

impl Payload {
    /// Converts a snapshot into the payload for its form.
    pub fn from_snapshot(snapshot: &FormSnapshot) -> Result<Self, PayloadError> {
        let text = |name: &str| snapshot.value(name).to_string();
        match snapshot.form {
            FormKind::Contact => Ok(Self::Contact(ContactMessage {
                name: text("name"),
                email: text("email"),
                message: text("message"),
            })),
            FormKind::Service => {
                let budget = optional(snapshot.value("budget"), parse_number)
                    .map_err(PayloadError::Budget)?;
                let deadline = optional(snapshot.value("deadline"), parse_date)
                    .map_err(PayloadError::Deadline)?;
                Ok(Self::Service(ServiceRequest {
                    name: text("name"),
                    email: text("email"),
                    phone: text("phone"),
                    service: text("service"),
                    sub_details: text("sub_details"),
                    details: text("details"),
                    notes: text("notes"),
                    platform: text("platform"),
                    attachment_link: text("attachment_link"),
                    priority: text("priority"),
                    budget,
                    deadline,
                }))
            }
        }
    }

    /// Path of the backend route that accepts this payload.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Contact(_) => "/contact",
            Self::Service(_) => "/request-service",
        }
    }
}

fn optional<T>(
    value: &str,
    parse: fn(&str) -> Result<T, ValidationError>,
) -> Result<Option<T>, ValidationError> {
    if value.is_empty() {
        Ok(None)
    } else {
        parse(value).map(Some)
    }
}
