//! HTTP request types for the Relay API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Relay API.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Relay API.
///
/// The API uses GET for reads, POST for both creation and updates, and
/// DELETE for removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources and pages.
    Get,
    /// HTTP POST method for creating and updating resources.
    Post,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// An HTTP request to be sent to the Relay API.
///
/// The URL is absolute: the REST layer resolves path templates against a
/// domain and version prefix before a request reaches the transport, and
/// pagination URLs arrive from the server already fully formed.
///
/// Use [`HttpRequest::builder`] to construct requests.
///
/// # Example
///
/// ```rust
/// use relay_api::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// // GET request
/// let get_request = HttpRequest::builder(
///     HttpMethod::Get,
///     "https://api.relay.com/v1/Accounts/ACxx/Usage/Records",
/// )
/// .query_param("PageSize", "50")
/// .build()
/// .unwrap();
///
/// // POST request with JSON body
/// let post_request = HttpRequest::builder(
///     HttpMethod::Post,
///     "https://api.relay.com/v1/Accounts/ACxx/Usage/Triggers",
/// )
/// .body(json!({"FriendlyName": "alert"}))
/// .build()
/// .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute URL for this request.
    pub url: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters to append to the URL.
    pub query: Option<HashMap<String, String>>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
    /// Number of times to attempt the request (default: 1).
    pub tries: u32,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `http_method` is `Post` but `body` is `None`
    /// - `http_method` is `Get` or `Delete` but a `body` is present
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match self.http_method {
            HttpMethod::Post => {
                if self.body.is_none() {
                    return Err(InvalidHttpRequestError::MissingBody {
                        method: self.http_method.to_string(),
                    });
                }
            }
            HttpMethod::Get | HttpMethod::Delete => {
                if self.body.is_some() {
                    return Err(InvalidHttpRequestError::UnexpectedBody {
                        method: self.http_method.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    url: String,
    body: Option<serde_json::Value>,
    query: Option<HashMap<String, String>>,
    extra_headers: Option<HashMap<String, String>>,
    tries: u32,
}

impl HttpRequestBuilder {
    /// Creates a new builder with the required method and URL.
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            http_method: method,
            url: url.into(),
            body: None,
            query: None,
            extra_headers: None,
            tries: 1,
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets additional headers to include in the request.
    #[must_use]
    pub fn extra_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.extra_headers = Some(headers);
        self
    }

    /// Sets the number of attempts for this request.
    ///
    /// Only 429 responses are retried; see
    /// [`HttpClient::request`](crate::clients::HttpClient::request).
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = tries;
        self
    }

    /// Builds the request, validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if validation fails; see
    /// [`HttpRequest::verify`].
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            url: self.url,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
            tries: self.tries.max(1),
        };

        request.verify()?;
        Ok(request)
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpMethod>();
    assert_send_sync::<HttpRequest>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_request_builds_without_body() {
        let request = HttpRequest::builder(HttpMethod::Get, "https://api.relay.com/v1/Accounts")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.url, "https://api.relay.com/v1/Accounts");
        assert!(request.body.is_none());
        assert_eq!(request.tries, 1);
    }

    #[test]
    fn test_post_without_body_fails_validation() {
        let result =
            HttpRequest::builder(HttpMethod::Post, "https://api.relay.com/v1/Accounts").build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { .. })
        ));
    }

    #[test]
    fn test_get_with_body_fails_validation() {
        let result = HttpRequest::builder(HttpMethod::Get, "https://api.relay.com/v1/Accounts")
            .body(json!({"x": 1}))
            .build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::UnexpectedBody { .. })
        ));
    }

    #[test]
    fn test_query_param_accumulates() {
        let request = HttpRequest::builder(HttpMethod::Get, "https://api.relay.com/v1/Records")
            .query_param("PageSize", "50")
            .query_param("Category", "calls")
            .build()
            .unwrap();

        let query = request.query.unwrap();
        assert_eq!(query.get("PageSize"), Some(&"50".to_string()));
        assert_eq!(query.get("Category"), Some(&"calls".to_string()));
    }

    #[test]
    fn test_tries_clamps_to_at_least_one() {
        let request = HttpRequest::builder(HttpMethod::Get, "https://api.relay.com/v1/Records")
            .tries(0)
            .build()
            .unwrap();

        assert_eq!(request.tries, 1);
    }

    #[test]
    fn test_http_method_display_lowercase() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }
}
