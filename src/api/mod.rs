//! REST Wrappers
//!
//! Frontend bindings to backend endpoints, organized by content type.

mod gallery;
mod documents;
mod testimonials;
mod team;

use gloo_net::http::Response;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};

// Re-export all public items
pub use gallery::*;
pub use documents::*;
pub use testimonials::*;
pub use team::*;

/// Decode a success body as JSON, or turn the failure into an `ApiError`
async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let response = ensure_ok(response).await?;
    response.json::<T>().await.map_err(ApiError::from)
}

/// Pass through 2xx responses, classify everything else
async fn ensure_ok(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    tracing::warn!("[API] {} returned {}", response.url(), status);
    Err(ApiError::from_status(status, &body))
}
