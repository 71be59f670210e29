//! In-memory stores.
//!
//! Intended for tests/dev. Rows live in a `RwLock`-guarded table; the write
//! lock makes the email-uniqueness check and the insert a single atomic
//! section, matching the guarantee the Postgres unique index gives.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use sitedesk_core::{ContactMessage, ContactMessageId, NewContactMessage, NewUser, User, UserId};

use crate::error::StoreError;
use crate::{ContactStore, UserStore};

#[derive(Debug)]
struct Table<T> {
    rows: Vec<T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn mint_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory user store.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    table: RwLock<Table<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> StoreError {
    StoreError::unavailable("lock poisoned")
}

/// Newest first; id breaks ties so the order is stable when timestamps
/// collide within clock resolution.
fn newest_first<T, I: Ord>(rows: &mut [T], key: impl Fn(&T) -> (chrono::DateTime<Utc>, I)) {
    rows.sort_by(|a, b| key(b).cmp(&key(a)));
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let table = self.table.read().map_err(|_| poisoned())?;
        let mut rows = table.rows.clone();
        newest_first(&mut rows, |u| (u.created_at, u.id));
        Ok(rows)
    }

    async fn get(&self, id: UserId) -> Result<User, StoreError> {
        let table = self.table.read().map_err(|_| poisoned())?;
        table
            .rows
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn insert(&self, new: NewUser) -> Result<User, StoreError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        if table.rows.iter().any(|u| u.email == new.email()) {
            return Err(StoreError::conflict("email"));
        }
        let user = User {
            id: UserId::new(table.mint_id()),
            name: new.name().to_string(),
            email: new.email().to_string(),
            created_at: Utc::now(),
        };
        table.rows.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: UserId, change: NewUser) -> Result<User, StoreError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        if !table.rows.iter().any(|u| u.id == id) {
            return Err(StoreError::NotFound);
        }
        if table
            .rows
            .iter()
            .any(|u| u.id != id && u.email == change.email())
        {
            return Err(StoreError::conflict("email"));
        }
        let row = table
            .rows
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(StoreError::NotFound)?;
        row.name = change.name().to_string();
        row.email = change.email().to_string();
        Ok(row.clone())
    }

    async fn delete(&self, id: UserId) -> Result<(), StoreError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        let position = table
            .rows
            .iter()
            .position(|u| u.id == id)
            .ok_or(StoreError::NotFound)?;
        table.rows.remove(position);
        Ok(())
    }
}

/// In-memory contact-message store.
#[derive(Debug, Default)]
pub struct InMemoryContactStore {
    table: RwLock<Table<ContactMessage>>,
}

impl InMemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactStore for InMemoryContactStore {
    async fn list(&self) -> Result<Vec<ContactMessage>, StoreError> {
        let table = self.table.read().map_err(|_| poisoned())?;
        let mut rows = table.rows.clone();
        newest_first(&mut rows, |c| (c.created_at, c.id));
        Ok(rows)
    }

    async fn insert(&self, new: NewContactMessage) -> Result<ContactMessage, StoreError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        let contact = ContactMessage {
            id: ContactMessageId::new(table.mint_id()),
            name: new.name().to_string(),
            email: new.email().to_string(),
            message: new.message().to_string(),
            phone: new.phone().map(str::to_string),
            company: new.company().map(str::to_string),
            created_at: Utc::now(),
        };
        table.rows.push(contact.clone());
        Ok(contact)
    }
}
