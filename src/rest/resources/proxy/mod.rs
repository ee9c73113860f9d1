//! Messaging-proxy resources on the preview API host.
//!
//! The proxy hierarchy is service → session → participant → message
//! interaction. [`Proxy`] is the entry namespace handed out by
//! [`Client::proxy`](crate::Client::proxy); the families below it are
//! reached by navigation.

pub mod message_interaction;
pub mod participant;
pub mod service;
pub mod session;

use std::sync::OnceLock;

use crate::rest::resources::proxy::service::ServiceList;
use crate::rest::{ResourceList, Solution, Version};

/// Entry namespace for the proxy API.
///
/// # Example
///
/// ```rust,ignore
/// let interaction = client
///     .proxy()
///     .services()
///     .get("KSaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa")
///     .sessions()
///     .get("KCaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa")
///     .participants()
///     .get("KPaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa")
///     .message_interactions()
///     .create(&Default::default())
///     .await?;
/// ```
#[derive(Debug)]
pub struct Proxy {
    version: Version,
    services: OnceLock<ServiceList>,
}

impl Proxy {
    /// Creates the proxy namespace for a preview-host version.
    #[must_use]
    pub const fn new(version: Version) -> Self {
        Self {
            version,
            services: OnceLock::new(),
        }
    }

    /// Returns the service collection, building the list on first access.
    #[must_use]
    pub fn services(&self) -> &ServiceList {
        self.services
            .get_or_init(|| ResourceList::new(self.version.clone(), Solution::new()))
    }
}
