//! Request body extraction.

use crate::error::ApiError;
use axum::async_trait;
use axum::body::{self, Body};
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

/// Largest request body read before rejecting.
const BODY_LIMIT: usize = 64 * 1024;

/// A JSON body that falls back to `T::default()` only when the body is empty.
///
/// A body that is present but not JSON (wrong content type, bad syntax,
/// wrongly typed fields) is a 400. Missing fields are handled by `T`'s own
/// `#[serde(default)]`.
#[derive(Debug, Clone, Default)]
pub struct JsonOrDefault<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonOrDefault<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();
        let bytes = body::to_bytes(body, BODY_LIMIT)
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read request body: {e}")))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonOrDefault(T::default()));
        }

        let req = Request::from_parts(parts, Body::from(bytes));
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        Ok(JsonOrDefault(value))
    }
}
