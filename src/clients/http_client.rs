//! HTTP client for Relay API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Relay API with automatic retry handling for rate limits.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::RelayConfig;

/// Fixed retry wait time in seconds when the server sends no `Retry-After`.
pub const RETRY_WAIT_TIME: u64 = 1;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Relay API.
///
/// The client handles:
/// - Default headers including User-Agent and HTTP Basic authorization
/// - Automatic retry for 429 responses, honoring `Retry-After`
/// - Response header and body capture
///
/// The client is the transport boundary of the SDK: it reports a completed
/// request as an [`HttpResponse`] whatever its status code, and raises
/// [`HttpError`] only when a request fails validation or never completes.
/// Interpretation of non-2xx statuses belongs to the REST layer.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use relay_api::{RelayConfig, AccountSid, AuthToken};
/// use relay_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = RelayConfig::builder()
///     .account_sid(AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa")?)
///     .auth_token(AuthToken::new("token")?)
///     .build()?;
///
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(
///     HttpMethod::Get,
///     "https://api.relay.com/v1/Accounts/ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa/Usage/Records",
/// )
/// .build()?;
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client authenticated with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: &RelayConfig) -> Self {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}relay-api-rust v{SDK_VERSION} | Rust {rust_version}");

        // HTTP Basic credentials from account SID and auth token
        let credentials = BASE64.encode(format!(
            "{}:{}",
            config.account_sid().as_ref(),
            config.auth_token().as_ref()
        ));

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Authorization".to_string(), format!("Basic {credentials}"));

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            default_headers,
        }
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the Relay API.
    ///
    /// 429 responses are retried up to `request.tries` attempts, waiting for
    /// the server's `Retry-After` (or a fixed fallback) between attempts.
    /// Once attempts are exhausted, the final 429 response is returned as-is
    /// so the caller still sees the server's answer. No other status code is
    /// retried.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        // Validate request first
        request.verify()?;

        // Merge headers
        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut tries: u32 = 0;
        loop {
            tries += 1;
            tracing::debug!(
                method = %request.http_method,
                url = %request.url,
                attempt = tries,
                "issuing request"
            );

            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&request.url),
                HttpMethod::Post => self.client.post(&request.url),
                HttpMethod::Delete => self.client.delete(&request.url),
            };

            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            if let Some(query) = &request.query {
                req_builder = req_builder.query(query);
            }

            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body = res.text().await.unwrap_or_default();

            let response = HttpResponse::new(code, res_headers, body);

            // Only rate limiting is retried; everything else is the caller's
            // to interpret.
            if code != 429 || tries >= request.tries {
                return Ok(response);
            }

            let delay = response
                .retry_after()
                .map_or(std::time::Duration::from_secs(RETRY_WAIT_TIME), |secs| {
                    std::time::Duration::from_secs_f64(secs)
                });
            tracing::warn!(
                url = %request.url,
                delay_secs = delay.as_secs_f64(),
                "rate limited, retrying"
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
