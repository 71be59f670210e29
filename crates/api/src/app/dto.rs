//! Request DTOs.
//!
//! Responses serialize the core entities directly (their serde derives carry
//! the wire shape), so only request bodies need dedicated types here.

use serde::Deserialize;

use sitedesk_core::{DomainResult, NewContactMessage, NewUser};

/// Body of `POST /users` and `PUT /users/:id`.
#[derive(Debug, Deserialize)]
pub struct UserBody {
    pub name: String,
    pub email: String,
}

impl UserBody {
    pub fn validate(self) -> DomainResult<NewUser> {
        NewUser::new(self.name, self.email)
    }
}

/// Body of `POST /contact`.
#[derive(Debug, Deserialize)]
pub struct ContactBody {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

impl ContactBody {
    pub fn validate(self) -> DomainResult<NewContactMessage> {
        NewContactMessage::new(self.name, self.email, self.message, self.phone, self.company)
    }
}
