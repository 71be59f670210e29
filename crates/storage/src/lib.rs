//! `sitedesk-storage` — storage collaborator behind the HTTP handlers.
//!
//! Defines the [`UserStore`] and [`ContactStore`] traits the API is written
//! against, plus two implementations:
//!
//! - [`memory`]: in-process stores for tests and local development.
//! - [`postgres`]: sqlx-backed stores for production.
//!
//! Uniqueness of the user email is enforced *inside* the store (unique index
//! in Postgres, a single write-lock section in memory), so callers never need
//! a check-then-insert sequence and there is no race window.

use async_trait::async_trait;

use sitedesk_core::{ContactMessage, NewContactMessage, NewUser, User, UserId};

pub mod error;
pub mod memory;
pub mod postgres;

pub use error::StoreError;
pub use memory::{InMemoryContactStore, InMemoryUserStore};
pub use postgres::{PostgresContactStore, PostgresUserStore};

/// Storage operations over the `users` table.
///
/// Every method is a single atomic storage operation; no cross-call
/// transactional composition is offered or needed.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users, newest first.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// Fetch one user, `StoreError::NotFound` if absent.
    async fn get(&self, id: UserId) -> Result<User, StoreError>;

    /// Insert a user; `StoreError::Conflict` if the email is taken.
    async fn insert(&self, new: NewUser) -> Result<User, StoreError>;

    /// Replace name/email of an existing user.
    ///
    /// `NotFound` if the row is absent, `Conflict` if the email belongs to a
    /// *different* user (keeping one's own email is allowed).
    async fn update(&self, id: UserId, change: NewUser) -> Result<User, StoreError>;

    /// Remove a user; `NotFound` if absent.
    async fn delete(&self, id: UserId) -> Result<(), StoreError>;
}

/// Storage operations over the `contacts` table (create + list only).
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// All contact messages, newest first.
    async fn list(&self) -> Result<Vec<ContactMessage>, StoreError>;

    /// Insert a contact message unconditionally.
    async fn insert(&self, new: NewContactMessage) -> Result<ContactMessage, StoreError>;
}
