//! Postgres-backed stores (sqlx).
//!
//! Every operation is one SQL statement; mutations use `RETURNING` so the
//! existence check and the write are atomic on the server. Email uniqueness
//! rests on a unique index, and the resulting SQLSTATE 23505 rejection is
//! translated to [`StoreError::Conflict`].
//!
//! Schema management lives outside this crate. The stores expect:
//!
//! ```sql
//! CREATE TABLE users (
//!     id         BIGSERIAL PRIMARY KEY,
//!     name       TEXT NOT NULL,
//!     email      TEXT NOT NULL UNIQUE,
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT now()
//! );
//!
//! CREATE TABLE contacts (
//!     id         BIGSERIAL PRIMARY KEY,
//!     name       TEXT NOT NULL,
//!     email      TEXT NOT NULL,
//!     message    TEXT NOT NULL,
//!     phone      TEXT,
//!     company    TEXT,
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT now()
//! );
//! ```

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use sitedesk_core::{
    ContactMessage, ContactMessageId, NewContactMessage, NewUser, User, UserId,
};

use crate::error::StoreError;
use crate::{ContactStore, UserStore};

/// Build a connection pool with bounded waits.
///
/// Acquire and statement timeouts keep any single request from blocking
/// indefinitely on a wedged database.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let options = PgConnectOptions::from_str(database_url)?
        .options([("statement_timeout", "5000")]);

    PgPoolOptions::new()
        .max_connections(8)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
}

/// Map a sqlx failure, treating unique violations as a collision on `field`.
fn translate(err: sqlx::Error, field: &str) -> StoreError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return StoreError::conflict(field);
        }
    }
    tracing::error!(error = %err, "postgres store operation failed");
    StoreError::unavailable(err.to_string())
}

/// Map a sqlx failure with no unique constraint in play.
fn storage_failed(err: sqlx::Error) -> StoreError {
    tracing::error!(error = %err, "postgres store operation failed");
    StoreError::unavailable(err.to_string())
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.id),
            name: row.name,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ContactRow {
    id: i64,
    name: String,
    email: String,
    message: String,
    phone: Option<String>,
    company: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<ContactRow> for ContactMessage {
    fn from(row: ContactRow) -> Self {
        Self {
            id: ContactMessageId::new(row.id),
            name: row.name,
            email: row.email,
            message: row.message,
            phone: row.phone,
            company: row.company,
            created_at: row.created_at,
        }
    }
}

/// User store over the `users` table.
#[derive(Debug, Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, created_at FROM users \
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage_failed)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn get(&self, id: UserId) -> Result<User, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, created_at FROM users WHERE id = $1",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_failed)?;

        row.map(User::from).ok_or(StoreError::NotFound)
    }

    async fn insert(&self, new: NewUser) -> Result<User, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (name, email) VALUES ($1, $2) \
             RETURNING id, name, email, created_at",
        )
        .bind(new.name())
        .bind(new.email())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| translate(e, "email"))?;

        Ok(row.into())
    }

    async fn update(&self, id: UserId, change: NewUser) -> Result<User, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            "UPDATE users SET name = $2, email = $3 WHERE id = $1 \
             RETURNING id, name, email, created_at",
        )
        .bind(id.value())
        .bind(change.name())
        .bind(change.email())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| translate(e, "email"))?;

        row.map(User::from).ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: UserId) -> Result<(), StoreError> {
        let deleted = sqlx::query_scalar::<_, i64>("DELETE FROM users WHERE id = $1 RETURNING id")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_failed)?;

        match deleted {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound),
        }
    }
}

/// Contact-message store over the `contacts` table.
#[derive(Debug, Clone)]
pub struct PostgresContactStore {
    pool: PgPool,
}

impl PostgresContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for PostgresContactStore {
    async fn list(&self) -> Result<Vec<ContactMessage>, StoreError> {
        let rows = sqlx::query_as::<_, ContactRow>(
            "SELECT id, name, email, message, phone, company, created_at FROM contacts \
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage_failed)?;

        Ok(rows.into_iter().map(ContactMessage::from).collect())
    }

    async fn insert(&self, new: NewContactMessage) -> Result<ContactMessage, StoreError> {
        let row = sqlx::query_as::<_, ContactRow>(
            "INSERT INTO contacts (name, email, message, phone, company) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, name, email, message, phone, company, created_at",
        )
        .bind(new.name())
        .bind(new.email())
        .bind(new.message())
        .bind(new.phone())
        .bind(new.company())
        .fetch_one(&self.pool)
        .await
        .map_err(storage_failed)?;

        Ok(row.into())
    }
}
