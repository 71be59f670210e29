//! Storage wiring for the HTTP layer.
//!
//! Handlers receive an `Arc<AppServices>` via `Extension` and only ever talk
//! to the store traits, so the same router runs against Postgres in
//! production and the in-memory stores in tests.

use std::sync::Arc;

use sqlx::PgPool;

use sitedesk_storage::{
    ContactStore, InMemoryContactStore, InMemoryUserStore, PostgresContactStore,
    PostgresUserStore, UserStore,
};

pub struct AppServices {
    pub users: Arc<dyn UserStore>,
    pub contacts: Arc<dyn ContactStore>,
}

impl AppServices {
    /// Production wiring: both stores share one connection pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PostgresUserStore::new(pool.clone())),
            contacts: Arc::new(PostgresContactStore::new(pool)),
        }
    }

    /// Test/dev wiring: everything in process memory.
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserStore::new()),
            contacts: Arc::new(InMemoryContactStore::new()),
        }
    }
}
