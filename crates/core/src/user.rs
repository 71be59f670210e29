//! User entity and its creation/update input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::UserId;

/// A stored user row.
///
/// `email` is unique across all users; the storage layer enforces this
/// atomically, so two rows never share an email even under concurrent
/// creates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Validated input for creating a user, and for replacing the mutable
/// fields of an existing one (PUT carries the same shape).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    /// Trim both fields and require them to be non-blank.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> DomainResult<Self> {
        let name = required(name.into(), "name")?;
        let email = required(email.into(), "email")?;
        Ok(Self { name, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

pub(crate) fn required(value: String, field: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_trims_valid_input() {
        let new = NewUser::new("  Ada Lovelace ", "ada@example.com").unwrap();
        assert_eq!(new.name(), "Ada Lovelace");
        assert_eq!(new.email(), "ada@example.com");
    }

    #[test]
    fn rejects_blank_name() {
        let err = NewUser::new("   ", "ada@example.com").unwrap_err();
        assert_eq!(err, DomainError::validation("name is required"));
    }

    #[test]
    fn rejects_blank_email() {
        let err = NewUser::new("Ada", "").unwrap_err();
        assert_eq!(err, DomainError::validation("email is required"));
    }
}
