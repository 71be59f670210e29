//! Contact-form routes.
//!
//! List lives at `/contacts`, create at `/contact` (singular): that is the
//! shape the site's frontend already posts to.

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::app::extract::ApiJson;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/contacts", get(list_contacts))
        .route("/contact", post(create_contact))
}

pub async fn list_contacts(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.contacts.list().await {
        Ok(contacts) => errors::ok(contacts),
        Err(e) => errors::contact_store_error(e, "Failed to fetch contacts"),
    }
}

pub async fn create_contact(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<dto::ContactBody>,
) -> axum::response::Response {
    let new = match body.validate() {
        Ok(new) => new,
        Err(e) => return errors::domain_error(e),
    };

    match services.contacts.insert(new).await {
        Ok(contact) => {
            tracing::info!(id = %contact.id, "contact message stored");
            errors::created(contact)
        }
        Err(e) => errors::contact_store_error(e, "Failed to create contact"),
    }
}
