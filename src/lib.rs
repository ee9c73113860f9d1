//! # Relay API Rust SDK
//!
//! A Rust SDK for the Relay REST API, providing type-safe configuration,
//! an authenticated async HTTP client, and a generic resource-navigation
//! and auto-pagination layer the whole resource tree is built on.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`RelayConfig`] and [`RelayConfigBuilder`]
//! - Validated newtypes for credentials ([`AccountSid`], [`AuthToken`])
//! - An async HTTP client with rate-limit retry via [`clients`]
//! - The navigation core — lists, pages, contexts, instances — via [`rest`]
//! - Concrete resource families via [`rest::resources`]
//!
//! ## Quick Start
//!
//! ```rust
//! use relay_api::{AccountSid, AuthToken, Client, RelayConfig};
//!
//! let config = RelayConfig::builder()
//!     .account_sid(AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap())
//!     .auth_token(AuthToken::new("my-auth-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = Client::new(config);
//! ```
//!
//! ## Traversing Collections
//!
//! Collection operations come in eager, lazy and callback flavors; all of
//! them paginate behind the scenes and deliver records in server order:
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//! use relay_api::rest::ListOptions;
//!
//! // Eager: collect everything (or up to a limit)
//! let records = client
//!     .account()
//!     .usage()
//!     .records()
//!     .list(Default::default(), ListOptions::new().limit(500))
//!     .await?;
//!
//! // Lazy: pull items one at a time, pages fetched on demand
//! let stream = client.account().usage().records().stream(
//!     Default::default(),
//!     ListOptions::new(),
//! );
//! futures::pin_mut!(stream);
//! while let Some(record) = stream.try_next().await? {
//!     println!("{:?}", record.category);
//! }
//!
//! // Single page, with explicit navigation
//! let page = client.account().usage().records().page(&Default::default(), Some(50)).await?;
//! if let Some(next) = page.next_page().await? {
//!     println!("second page has {} records", next.len());
//! }
//! ```
//!
//! ## Addressing Single Resources
//!
//! ```rust,ignore
//! let trigger = client
//!     .account()
//!     .usage()
//!     .triggers()
//!     .get("UTaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa")
//!     .fetch()
//!     .await?;
//!
//! // Instances re-fetch, update and remove themselves
//! let refreshed = trigger.fetch().await?;
//! trigger.remove().await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: newtypes and URL templating validate eagerly
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Async-first**: designed for the Tokio runtime
//! - **Immutable snapshots**: instances never mutate; updates return new ones

mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use client::{Client, DEFAULT_API_HOST, DEFAULT_PREVIEW_HOST};
pub use config::{AccountSid, AuthToken, HostUrl, RelayConfig, RelayConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError,
};

// Re-export the navigation core
pub use rest::{
    ApiError, ListOptions, PageMeta, RecordPage, ResourceContext, ResourceInstance, ResourceList,
    RestError, Solution, Version,
};
