//! Contact message entity and its creation input.
//!
//! Contact messages are write-once: created by the public contact form,
//! never updated or deleted through the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainResult;
use crate::id::ContactMessageId;
use crate::user::required;

/// A stored contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated input for creating a contact message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    name: String,
    email: String,
    message: String,
    phone: Option<String>,
    company: Option<String>,
}

impl NewContactMessage {
    /// `name`, `email` and `message` must be non-blank; `phone` and
    /// `company` are optional and normalised to `None` when blank.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
        phone: Option<String>,
        company: Option<String>,
    ) -> DomainResult<Self> {
        Ok(Self {
            name: required(name.into(), "name")?,
            email: required(email.into(), "email")?,
            message: required(message.into(), "message")?,
            phone: optional(phone),
            company: optional(company),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
