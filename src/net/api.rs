//! REST API helpers for communicating with the PCUBE backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the session
//! token from `localStorage` attached as a bearer header.
//! Server-side (SSR): stubs returning a transport failure since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call decodes through [`super::types::decode_envelope`], so callers
//! see exactly three failure kinds ([`ApiFailure`]) and never a panic or a
//! missing field.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiFailure, Movie, User};

/// Stub failure used by every endpoint outside the browser.
#[cfg(not(feature = "hydrate"))]
const SSR_UNAVAILABLE: &str = "not available on the server";

/// Fetch the currently authenticated user from `GET /api/users/current`.
///
/// # Errors
///
/// Returns an [`ApiFailure`] when the backend rejects the session, the
/// request fails in transit, or the response does not match the envelope.
pub async fn get_current_user() -> Result<User, ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        fetch_envelope("/api/users/current").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiFailure::Transport(SSR_UNAVAILABLE.to_owned()))
    }
}

/// Fetch the movie catalog from `GET /api/movies`.
///
/// # Errors
///
/// Returns an [`ApiFailure`] on rejection, transport failure, or a
/// malformed response.
pub async fn list_movies() -> Result<Vec<Movie>, ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        fetch_envelope("/api/movies").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiFailure::Transport(SSR_UNAVAILABLE.to_owned()))
    }
}

/// GET `url`, attach the bearer token if one is stored, and decode the
/// response envelope into `T`.
#[cfg(feature = "hydrate")]
async fn fetch_envelope<T>(url: &str) -> Result<T, ApiFailure>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let mut request = gloo_net::http::Request::get(url);
    if let Some(token) = crate::util::token::read() {
        request = request.header("Authorization", &format!("Bearer {token}"));
    }

    let response = request
        .send()
        .await
        .map_err(|e| ApiFailure::Transport(e.to_string()))?;

    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|e| ApiFailure::Transport(e.to_string()))?;

    super::types::decode_envelope(&body)
}
