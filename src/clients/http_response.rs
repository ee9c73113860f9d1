//! HTTP response types for the Relay API SDK.
//!
//! This module provides the [`HttpResponse`] type returned by the transport.
//! The body is kept as raw text; the REST layer decides whether a body must
//! parse as JSON and what a parse failure means for a given status code.

use std::collections::HashMap;

/// An HTTP response from the Relay API.
///
/// Any completed request produces an `HttpResponse`, whatever its status
/// code. Non-2xx statuses are interpreted by the REST layer, not here.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body text.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if the body is not valid
    /// JSON. An empty body parses as an empty object, since DELETE responses
    /// legitimately carry no content.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        if self.body.is_empty() {
            return Ok(serde_json::Value::Object(serde_json::Map::new()));
        }
        serde_json::from_str(&self.body)
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error
    /// reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Retry-After` header value in seconds, if present.
    ///
    /// Sent with 429 responses to indicate when the request may be retried.
    #[must_use]
    pub fn retry_after(&self) -> Option<f64> {
        self.headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok())
    }
}
