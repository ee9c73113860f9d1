//! Domain and version dispatch for REST requests.
//!
//! A [`Domain`] pairs an API host base URL with the shared [`HttpClient`];
//! a [`Version`] scopes a domain with its version prefix (e.g. `v1` on the
//! stable host, `Proxy` on the preview host). Together they resolve the
//! relative paths produced by URL templating into absolute URLs and issue
//! the actual transport calls.
//!
//! Pagination URLs handed back by the server (`next_page_url` and friends)
//! are already absolute and are issued verbatim through [`Version::page`],
//! never re-templated.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::rest::errors::{ApiError, RestError};

/// An API host reachable through the shared HTTP client.
#[derive(Debug)]
pub struct Domain {
    client: Arc<HttpClient>,
    base_url: String,
}

impl Domain {
    /// Creates a domain for the given base URL.
    ///
    /// A trailing slash on the base URL is stripped so paths compose
    /// predictably.
    #[must_use]
    pub fn new(client: Arc<HttpClient>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Returns the base URL of this domain.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues a request through the shared HTTP client.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged when the request fails
    /// validation or never completes.
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, RestError> {
        Ok(self.client.request(request).await?)
    }
}

impl PartialEq for Domain {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

/// One version of an API domain.
///
/// A `Version` is the dispatch point every list, context and page issues its
/// requests through. It is cheap to clone; clones share the underlying
/// domain and HTTP client.
///
/// Two versions with the same base URL and prefix are interchangeable, and
/// compare equal.
#[derive(Debug, Clone)]
pub struct Version {
    domain: Arc<Domain>,
    prefix: String,
}

impl Version {
    /// Creates a version with the given prefix under a domain.
    #[must_use]
    pub fn new(domain: Arc<Domain>, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into().trim_matches('/').to_string();
        Self { domain, prefix }
    }

    /// Returns the version prefix (e.g. `v1`).
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the domain this version dispatches through.
    #[must_use]
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Resolves a relative path into an absolute URL under this version.
    #[must_use]
    pub fn absolute_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if self.prefix.is_empty() {
            format!("{}/{}", self.domain.base_url(), path)
        } else {
            format!("{}/{}/{}", self.domain.base_url(), self.prefix, path)
        }
    }

    /// Issues a GET for a single resource and returns the parsed body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Api`] for a non-2xx answer,
    /// [`RestError::MalformedResponse`] when a 2xx body is not JSON, or
    /// [`RestError::Http`] for transport failures.
    pub async fn fetch(
        &self,
        url: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<Value, RestError> {
        self.issue(HttpMethod::Get, url, query, None).await
    }

    /// Issues a POST creating a resource and returns the parsed body.
    ///
    /// # Errors
    ///
    /// Same error contract as [`Version::fetch`].
    pub async fn create(&self, url: &str, body: Value) -> Result<Value, RestError> {
        self.issue(HttpMethod::Post, url, None, Some(body)).await
    }

    /// Issues a POST updating a resource and returns the parsed body.
    ///
    /// # Errors
    ///
    /// Same error contract as [`Version::fetch`].
    pub async fn update(&self, url: &str, body: Value) -> Result<Value, RestError> {
        self.issue(HttpMethod::Post, url, None, Some(body)).await
    }

    /// Issues a DELETE for a resource.
    ///
    /// Returns `true` on success. DELETE answers carry no body worth
    /// parsing, so none is read.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Api`] for a non-2xx answer or
    /// [`RestError::Http`] for transport failures.
    pub async fn delete(&self, url: &str) -> Result<bool, RestError> {
        let request = self.build_request(HttpMethod::Delete, url, None, None)?;
        let response = self.domain.request(request).await?;

        if response.is_ok() {
            Ok(true)
        } else {
            Err(ApiError::from_response(&response, url).into())
        }
    }

    /// Issues a GET for one page of a collection and returns the parsed body.
    ///
    /// The URL may be a templated collection URL or a fully formed
    /// `next_page_url`/`previous_page_url` from earlier page metadata.
    ///
    /// # Errors
    ///
    /// Same error contract as [`Version::fetch`].
    pub async fn page(
        &self,
        url: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<Value, RestError> {
        self.issue(HttpMethod::Get, url, query, None).await
    }

    async fn issue(
        &self,
        method: HttpMethod,
        url: &str,
        query: Option<HashMap<String, String>>,
        body: Option<Value>,
    ) -> Result<Value, RestError> {
        let request = self.build_request(method, url, query, body)?;
        let response = self.domain.request(request).await?;

        if !response.is_ok() {
            return Err(ApiError::from_response(&response, url).into());
        }

        response.json().map_err(|e| RestError::MalformedResponse {
            url: url.to_string(),
            detail: format!("body is not valid JSON: {e}"),
        })
    }

    fn build_request(
        &self,
        method: HttpMethod,
        url: &str,
        query: Option<HashMap<String, String>>,
        body: Option<Value>,
    ) -> Result<HttpRequest, RestError> {
        let mut builder = HttpRequest::builder(method, url);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }
        Ok(builder.build().map_err(crate::clients::HttpError::from)?)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.prefix == other.prefix && *self.domain == *other.domain
    }
}

// Verify dispatch types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Domain>();
    assert_send_sync::<Version>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccountSid, AuthToken, RelayConfig};

    fn test_client() -> Arc<HttpClient> {
        let config = RelayConfig::builder()
            .account_sid(AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap())
            .auth_token(AuthToken::new("token").unwrap())
            .build()
            .unwrap();
        Arc::new(HttpClient::new(&config))
    }

    #[test]
    fn test_domain_strips_trailing_slash() {
        let domain = Domain::new(test_client(), "https://api.relay.com/");
        assert_eq!(domain.base_url(), "https://api.relay.com");
    }

    #[test]
    fn test_absolute_url_joins_base_prefix_and_path() {
        let domain = Arc::new(Domain::new(test_client(), "https://api.relay.com"));
        let version = Version::new(domain, "v1");

        assert_eq!(
            version.absolute_url("Accounts/ACxx/Usage/Records"),
            "https://api.relay.com/v1/Accounts/ACxx/Usage/Records"
        );
        // Leading slash on the path does not double up
        assert_eq!(
            version.absolute_url("/Accounts/ACxx"),
            "https://api.relay.com/v1/Accounts/ACxx"
        );
    }

    #[test]
    fn test_absolute_url_with_empty_prefix() {
        let domain = Arc::new(Domain::new(test_client(), "https://preview.relay.com"));
        let version = Version::new(domain, "");

        assert_eq!(
            version.absolute_url("Services"),
            "https://preview.relay.com/Services"
        );
    }

    #[test]
    fn test_versions_with_equal_base_and_prefix_compare_equal() {
        let client = test_client();
        let a = Version::new(
            Arc::new(Domain::new(Arc::clone(&client), "https://api.relay.com")),
            "v1",
        );
        let b = Version::new(
            Arc::new(Domain::new(Arc::clone(&client), "https://api.relay.com")),
            "v1",
        );
        let c = Version::new(
            Arc::new(Domain::new(client, "https://preview.relay.com")),
            "v1",
        );

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_version_prefix_is_normalized() {
        let domain = Arc::new(Domain::new(test_client(), "https://api.relay.com"));
        let version = Version::new(domain, "/v1/");
        assert_eq!(version.prefix(), "v1");
    }
}
