//! HTTP-specific error types for the Relay API SDK.
//!
//! This module contains error types for the transport layer. The transport
//! deliberately does *not* treat non-2xx statuses as errors: every completed
//! request produces an [`HttpResponse`](crate::clients::HttpResponse),
//! whatever its status code, and the REST layer decides what a 4xx or 5xx
//! means. A transport error is raised only when a request fails validation
//! before sending or never completes at all.
//!
//! # Example
//!
//! ```rust,ignore
//! use relay_api::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("HTTP {}", response.code),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent if it fails validation
/// checks, such as a POST request without a body.
///
/// # Example
///
/// ```rust
/// use relay_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// println!("{}", error); // "Cannot use post without specifying data."
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A body was supplied for a method that takes none.
    #[error("Cannot use {method} with a request body.")]
    UnexpectedBody {
        /// The HTTP method that rejects a body.
        method: String,
    },
}

/// Unified error type for transport-level failures.
///
/// A request that reached the server and came back with any HTTP status is
/// not a transport failure; these variants cover only requests that were
/// rejected locally or never completed.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed before sending.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error; the request never completed.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
    assert_send_sync::<InvalidHttpRequestError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_body_error_message() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying data.");
    }

    #[test]
    fn test_unexpected_body_error_message() {
        let error = InvalidHttpRequestError::UnexpectedBody {
            method: "get".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use get with a request body.");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let invalid: &dyn std::error::Error = &InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        let _ = invalid;

        let http: &dyn std::error::Error =
            &HttpError::InvalidRequest(InvalidHttpRequestError::MissingBody {
                method: "post".to_string(),
            });
        let _ = http;
    }
}
