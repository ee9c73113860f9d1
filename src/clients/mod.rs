//! HTTP client types for Relay API communication.
//!
//! This module provides the transport layer of the SDK: a thin, authenticated
//! HTTP client plus the request and response types it exchanges. The REST
//! navigation layer in [`crate::rest`] sits on top of it.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A completed response, whatever its status code
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, DELETE)
//! - [`HttpError`]: Transport-level failures (validation, network)
//!
//! # Example
//!
//! ```rust,ignore
//! use relay_api::{RelayConfig, AccountSid, AuthToken};
//! use relay_api::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let config = RelayConfig::builder()
//!     .account_sid(AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa")?)
//!     .auth_token(AuthToken::new("token")?)
//!     .build()?;
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "https://api.relay.com/v1/...")
//!     .build()?;
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! The client retries only 429 (rate limited) responses, using the
//! `Retry-After` header value or 1 second if not present. The default
//! `tries` is 1, meaning no automatic retries. Configure via
//! [`HttpRequest::builder`] with `.tries(n)` to enable retries. Once
//! attempts are exhausted the final response is returned, not an error, so
//! the server's answer is never swallowed.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, RETRY_WAIT_TIME, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
