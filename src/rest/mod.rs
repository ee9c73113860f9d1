//! REST resource navigation for the Relay API.
//!
//! This module is the navigation and auto-pagination core of the SDK. A
//! small set of generic abstractions turns a URL template plus an HTTP verb
//! into a typed, lazily-materialized, page-iterable object graph:
//!
//! - **[`Solution`]**: the resolved path variables addressing one resource
//!   or collection, captured at construction and immutable afterwards
//! - **[`ResourceList<T>`]**: collection operations — `create`, `page`,
//!   `list`, `stream`, `each` — plus the `get` indexer for a context
//! - **[`RecordPage<T>`]**: one fetched page with its `meta`, navigable via
//!   `next_page`/`previous_page` (exhaustion is `Ok(None)`, not an error)
//! - **[`ResourceContext<T>`]**: direct `fetch`/`update`/`remove` on one
//!   record
//! - **[`ResourceInstance<T>`]**: an immutable typed snapshot with a
//!   lazily-built context for self-referential calls
//! - **[`Domain`]/[`Version`]**: dispatch from relative templated paths to
//!   absolute URLs on the right API host
//!
//! Concrete resource families in [`resources`] configure these generics with
//! their field shapes and URL templates; they add no navigation logic of
//! their own.
//!
//! # Example
//!
//! ```rust,ignore
//! use relay_api::{Client, RelayConfig};
//! use relay_api::rest::ListOptions;
//!
//! let client = Client::new(config);
//!
//! // Eager traversal across pages
//! let records = client
//!     .account()
//!     .usage()
//!     .records()
//!     .list(Default::default(), ListOptions::new().limit(200))
//!     .await?;
//!
//! // Single-record addressing
//! let trigger = client
//!     .account()
//!     .usage()
//!     .triggers()
//!     .get("UTaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa")
//!     .fetch()
//!     .await?;
//! ```

mod context;
mod domain;
mod errors;
mod instance;
mod list;
mod page;
mod resource;
mod solution;

pub mod resources;

// Public exports
pub use context::ResourceContext;
pub use domain::{Domain, Version};
pub use errors::{ApiError, RestError};
pub use instance::ResourceInstance;
pub use list::{ListOptions, ResourceList};
pub use page::{PageMeta, RecordPage};
pub use resource::{
    serialize_to_query, Addressable, Creatable, Deletable, Resource, Updatable,
};
pub use solution::Solution;
