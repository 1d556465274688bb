//! REST API helpers for communicating with the journal backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged here and then returned to the caller so pages can
//! render an error state instead of panicking during hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::config::ApiConfig;
use super::types::Profile;

/// Errors surfaced by the HTTP and mock data helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent.
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16 },

    /// The response body could not be decoded.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The caller passed parameters the endpoint cannot serve.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The endpoint is browser-only and was called during server rendering.
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_endpoint(config: &ApiConfig, profile_id: &str) -> String {
    config.endpoint(&format!("/profiles/{}", urlencoding::encode(profile_id)))
}

/// Fetch a profile from `{base}/profiles/{id}`.
///
/// # Errors
///
/// Returns `ApiError` if the request fails, the server responds with a
/// non-OK status, or the body is not a profile. The error is logged first.
pub async fn fetch_profile(config: &ApiConfig, profile_id: &str) -> Result<Profile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let result = request_profile(&profile_endpoint(config, profile_id)).await;
        if let Err(e) = &result {
            leptos::logging::error!("fetch_profile {profile_id} failed: {e}");
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, profile_id);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn request_profile(url: &str) -> Result<Profile, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status { status: resp.status() });
    }
    resp.json::<Profile>().await.map_err(|e| ApiError::Parse(e.to_string()))
}
