//! User CRUD routes.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};

use sitedesk_core::UserId;

use crate::app::extract::ApiJson;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// A path segment that fails to parse as an integer can never match a row;
/// report it the same way as a lookup miss.
fn parse_id(raw: &str) -> Result<UserId, axum::response::Response> {
    raw.parse::<UserId>().map_err(errors::domain_error)
}

pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.users.list().await {
        Ok(users) => errors::ok(users),
        Err(e) => errors::user_store_error(e, "Failed to fetch users"),
    }
}

pub async fn get_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.users.get(id).await {
        Ok(user) => errors::ok(user),
        Err(e) => errors::user_store_error(e, "Failed to fetch user"),
    }
}

pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<dto::UserBody>,
) -> axum::response::Response {
    let new = match body.validate() {
        Ok(new) => new,
        Err(e) => return errors::domain_error(e),
    };

    match services.users.insert(new).await {
        Ok(user) => {
            tracing::info!(id = %user.id, "user created");
            errors::created(user)
        }
        Err(e) => errors::user_store_error(e, "Failed to create user"),
    }
}

pub async fn update_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<dto::UserBody>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let change = match body.validate() {
        Ok(change) => change,
        Err(e) => return errors::domain_error(e),
    };

    match services.users.update(id, change).await {
        Ok(user) => {
            tracing::info!(id = %user.id, "user updated");
            errors::ok(user)
        }
        Err(e) => errors::user_store_error(e, "Failed to update user"),
    }
}

pub async fn delete_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.users.delete(id).await {
        Ok(()) => {
            tracing::info!(%id, "user deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => errors::user_store_error(e, "Failed to delete user"),
    }
}
