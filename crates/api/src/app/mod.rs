//! HTTP application wiring (Axum router + injected services).
//!
//! The folder is structured like:
//! - `services.rs`: the storage collaborators handlers run against
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: request DTOs and JSON mapping
//! - `errors.rs`: the uniform response envelope and error mapping
//! - `extract.rs`: body extraction that rejects malformed JSON with 400

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod extract;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests, which inject in-memory services here).
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/users", routes::users::router())
        .merge(routes::contacts::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_id))
                .layer(Extension(services)),
        )
}
