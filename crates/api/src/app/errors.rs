//! The uniform response envelope and error mapping.
//!
//! Every JSON response is `{ "success": bool, "data"?: ..., "message"?: ... }`.
//! Client-facing statuses are limited to 404 (missing row), 400 (validation
//! or email collision) and 500 with a fixed per-route message; internal
//! error detail goes to the logs, never to the client.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use serde_json::json;

use sitedesk_core::DomainError;
use sitedesk_storage::StoreError;

/// 200 with `data`.
pub fn ok(data: impl Serialize) -> axum::response::Response {
    envelope(StatusCode::OK, data)
}

/// 201 with `data`.
pub fn created(data: impl Serialize) -> axum::response::Response {
    envelope(StatusCode::CREATED, data)
}

fn envelope(status: StatusCode, data: impl Serialize) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "success": true,
            "data": data,
        })),
    )
        .into_response()
}

/// Failure envelope: `{success: false, message}`.
pub fn fail(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "success": false,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Map a store failure on a user operation.
///
/// `failure_message` is the fixed client-facing text for the 500 path
/// (e.g. "Failed to create user").
pub fn user_store_error(
    err: StoreError,
    failure_message: &'static str,
) -> axum::response::Response {
    match err {
        StoreError::NotFound => fail(StatusCode::NOT_FOUND, "User not found"),
        StoreError::Conflict(_) => fail(StatusCode::BAD_REQUEST, "Email already exists"),
        StoreError::Unavailable(detail) => {
            tracing::error!(detail = %detail, "user store failure");
            fail(StatusCode::INTERNAL_SERVER_ERROR, failure_message)
        }
    }
}

/// Map a store failure on a contact operation. Contacts have no uniqueness
/// rule, so a conflict here is as unexpected as any other storage failure.
pub fn contact_store_error(
    err: StoreError,
    failure_message: &'static str,
) -> axum::response::Response {
    match err {
        StoreError::NotFound => fail(StatusCode::NOT_FOUND, "Contact not found"),
        StoreError::Conflict(_) | StoreError::Unavailable(_) => {
            tracing::error!(error = %err, "contact store failure");
            fail(StatusCode::INTERNAL_SERVER_ERROR, failure_message)
        }
    }
}

/// Map a boundary validation failure (blank required field, bad id).
pub fn domain_error(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => fail(StatusCode::BAD_REQUEST, msg),
        DomainError::InvalidId(_) | DomainError::NotFound => {
            fail(StatusCode::NOT_FOUND, "User not found")
        }
        DomainError::Conflict(_) => fail(StatusCode::BAD_REQUEST, "Email already exists"),
    }
}
