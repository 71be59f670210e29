//! Body extraction with enveloped rejections.

use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::Json;

use super::errors;

/// `Json<T>` that turns malformed bodies (bad JSON, missing required fields,
/// wrong types, wrong content type) into a 400 with the standard envelope
/// instead of axum's default rejection. Handler logic never sees a malformed
/// body.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = axum::response::Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(errors::fail(StatusCode::BAD_REQUEST, rejection.body_text())),
        }
    }
}
