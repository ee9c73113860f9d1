//! Error types for REST resource operations.
//!
//! Every operation that performs I/O resolves to `Result<_, RestError>`.
//! The variants separate the three failure kinds callers branch on:
//!
//! - [`RestError::Api`] — the server answered with a non-2xx status. The
//!   server's own status, message and error code are carried verbatim.
//! - [`RestError::MalformedResponse`] — the server answered 2xx but the body
//!   did not have the promised shape. This is a contract violation between
//!   client and server and is never retried.
//! - [`RestError::Http`] — the request never completed (network failure) or
//!   was rejected before sending (request validation).
//!
//! Pagination exhaustion is not an error: page navigation returns `Ok(None)`
//! when there is no adjacent page.
//!
//! # Example
//!
//! ```rust,ignore
//! use relay_api::rest::RestError;
//!
//! match context.fetch().await {
//!     Ok(instance) => println!("status: {:?}", instance.status),
//!     Err(RestError::Api(e)) => eprintln!("API error {}: {}", e.status, e.message),
//!     Err(e) => eprintln!("request failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::{HttpError, HttpResponse};

/// An error answer from the API (non-2xx status).
///
/// The body of an error response is a JSON object carrying at least a
/// `status` and a human-readable `message`, and usually a Relay-specific
/// `code` with a `more_info` documentation link. All of these are surfaced
/// verbatim, together with the URL the request was issued against.
///
/// A non-JSON error body still produces an `ApiError`; the raw body text
/// becomes the message.
#[derive(Debug, Error)]
#[error("[HTTP {status}] Error {code:?} fetching {url}: {message}")]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The server-provided error message, or the raw body when not JSON.
    pub message: String,
    /// The Relay-specific error code, when the server provided one.
    pub code: Option<u64>,
    /// Link to documentation for this error, when provided.
    pub more_info: Option<String>,
    /// The URL the failing request was issued against.
    pub url: String,
    /// Request ID from the `X-Request-Id` header, for support tickets.
    pub request_id: Option<String>,
}

impl ApiError {
    /// Builds an `ApiError` from a non-2xx HTTP response.
    ///
    /// Reads `status`, `message`, `code` and `more_info` from the JSON body
    /// when parseable; otherwise the raw body text is used as the message.
    #[must_use]
    pub fn from_response(response: &HttpResponse, url: &str) -> Self {
        let request_id = response.request_id().map(ToString::to_string);

        response.json().ok().map_or_else(
            || Self {
                status: response.code,
                message: response.body.clone(),
                code: None,
                more_info: None,
                url: url.to_string(),
                request_id: request_id.clone(),
            },
            |body| Self {
                status: response.code,
                message: body
                    .get("message")
                    .and_then(serde_json::Value::as_str)
                    .map_or_else(|| body.to_string(), ToString::to_string),
                code: body.get("code").and_then(serde_json::Value::as_u64),
                more_info: body
                    .get("more_info")
                    .and_then(serde_json::Value::as_str)
                    .map(ToString::to_string),
                url: url.to_string(),
                request_id: request_id.clone(),
            },
        )
    }
}

/// Error type for REST resource operations.
#[derive(Debug, Error)]
pub enum RestError {
    /// The server answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The server answered 2xx but the body did not have the expected shape.
    ///
    /// Raised when a body is not valid JSON, or a list response is missing
    /// its `meta` object or the keyed record array.
    #[error("Malformed response from {url}: {detail}")]
    MalformedResponse {
        /// The URL the request was issued against.
        url: String,
        /// What was wrong with the body.
        detail: String,
    },

    /// The request never completed, or failed validation before sending.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Returns `true` for the API-error kind (non-2xx server answer).
    #[must_use]
    pub const fn is_api_error(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// Returns the HTTP status code for API errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status),
            _ => None,
        }
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
    assert_send_sync::<RestError>();
};
