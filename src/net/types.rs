//! Wire types for the PCUBE backend and the validated response envelope.
//!
//! ERROR HANDLING
//! ==============
//! Every backend response is decoded through [`decode_envelope`] instead of
//! reading `success`/`data` fields ad hoc. A response that does not match the
//! envelope schema fails with [`ApiFailure::MalformedResponse`] rather than
//! propagating missing fields into the UI.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;
use serde_json::Value;

/// The authenticated user as returned by `GET /api/users/current`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
}

/// A movie in the catalog. Replaced wholesale on each fetch, never mutated.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub poster: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(rename = "releaseDate", default)]
    pub release_date: Option<String>,
}

/// How an API call can fail.
///
/// `Rejected` is an authoritative negative from the backend (`success:
/// false`); the other two are transient faults and must not trigger
/// destructive state changes in callers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiFailure {
    /// Well-formed response with `success: false`.
    Rejected(String),
    /// The request never produced a well-formed response (network error,
    /// non-JSON body).
    Transport(String),
    /// The response parsed as JSON but did not match the envelope schema.
    MalformedResponse(String),
}

impl ApiFailure {
    /// Human-readable message for the transient notice.
    pub fn message(&self) -> &str {
        match self {
            Self::Rejected(m) | Self::Transport(m) | Self::MalformedResponse(m) => m,
        }
    }
}

/// Message used when the backend rejects a request without saying why.
const DEFAULT_REJECTION: &str = "request failed";

/// Decode a `{ success, data?, message? }` envelope into its payload.
///
/// # Errors
///
/// - [`ApiFailure::Rejected`] when `success` is `false` (message taken from
///   the envelope, defaulted when absent).
/// - [`ApiFailure::MalformedResponse`] when the envelope or payload does not
///   match the expected schema. Unknown extra fields are tolerated.
pub fn decode_envelope<T>(body: &Value) -> Result<T, ApiFailure>
where
    T: for<'de> Deserialize<'de>,
{
    let Some(success) = body.get("success").and_then(Value::as_bool) else {
        return Err(ApiFailure::MalformedResponse(
            "response is missing the `success` flag".to_owned(),
        ));
    };

    if !success {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_REJECTION)
            .to_owned();
        return Err(ApiFailure::Rejected(message));
    }

    let Some(data) = body.get("data") else {
        return Err(ApiFailure::MalformedResponse(
            "successful response is missing `data`".to_owned(),
        ));
    };

    T::deserialize(data)
        .map_err(|e| ApiFailure::MalformedResponse(format!("unexpected `data` shape: {e}")))
}
