//! Service resource on the preview proxy API.
//!
//! A service is the root of the messaging-proxy hierarchy: sessions live
//! under a service, participants under a session, and message interactions
//! under a participant.
//!
//! # Example
//!
//! ```rust,ignore
//! let services = client.proxy().services();
//!
//! let service = services
//!     .create(&CreateServiceParams {
//!         unique_name: Some("support-line".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // Walk down the hierarchy without further fetches
//! let sessions = service.sessions();
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rest::resources::proxy::session::SessionList;
use crate::rest::{
    Addressable, Creatable, Deletable, RecordPage, Resource, ResourceContext, ResourceInstance,
    ResourceList, Updatable,
};

/// One proxy service as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Service {
    /// Unique identifier of this service.
    pub sid: Option<String>,
    /// SID of the owning account.
    pub account_sid: Option<String>,
    /// Application-provided name, unique per account.
    pub unique_name: Option<String>,
    /// URL called on session events.
    pub callback_url: Option<String>,
    /// Whether sessions auto-create on inbound traffic.
    pub auto_create: Option<bool>,
    /// When the service was created.
    pub date_created: Option<DateTime<Utc>>,
    /// When the service was last updated.
    pub date_updated: Option<DateTime<Utc>>,
    /// Absolute URL of this service.
    pub url: Option<String>,
    /// URLs of the service's sub-resources.
    pub links: Option<Map<String, Value>>,
    /// Fields this SDK release does not model, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Service {
    const NAME: &'static str = "Service";
    const LIST_TEMPLATE: &'static str = "Services";
    type ListParams = ();
}

impl Addressable for Service {
    const CONTEXT_TEMPLATE: &'static str = "Services/{serviceSid}";
    const IDENTITY_KEY: &'static str = "serviceSid";

    fn identity(&self) -> Option<&str> {
        self.sid.as_deref()
    }
}

impl Creatable for Service {
    type CreateParams = CreateServiceParams;
}

impl Updatable for Service {
    type UpdateParams = UpdateServiceParams;
}

impl Deletable for Service {}

/// Properties accepted when creating a service.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CreateServiceParams {
    /// Application-provided name, unique per account.
    #[serde(rename = "UniqueName", skip_serializing_if = "Option::is_none")]
    pub unique_name: Option<String>,
    /// URL called on session events.
    #[serde(rename = "CallbackUrl", skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    /// Whether sessions auto-create on inbound traffic.
    #[serde(rename = "AutoCreate", skip_serializing_if = "Option::is_none")]
    pub auto_create: Option<bool>,
}

/// Properties accepted when updating a service.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UpdateServiceParams {
    /// Application-provided name, unique per account.
    #[serde(rename = "UniqueName", skip_serializing_if = "Option::is_none")]
    pub unique_name: Option<String>,
    /// URL called on session events.
    #[serde(rename = "CallbackUrl", skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    /// Whether sessions auto-create on inbound traffic.
    #[serde(rename = "AutoCreate", skip_serializing_if = "Option::is_none")]
    pub auto_create: Option<bool>,
}

/// Collection handle for services.
pub type ServiceList = ResourceList<Service>;

/// Addressable handle for one service.
pub type ServiceContext = ResourceContext<Service>;

/// One fetched page of services.
pub type ServicePage = RecordPage<Service>;

/// A fetched service snapshot.
pub type ServiceInstance = ResourceInstance<Service>;

impl ResourceContext<Service> {
    /// Returns the sessions of this service.
    ///
    /// The list is a pure function of this context's solution; no network
    /// call happens here.
    #[must_use]
    pub fn sessions(&self) -> SessionList {
        ResourceList::new(self.version().clone(), self.solution().clone())
    }
}

impl ResourceInstance<Service> {
    /// Returns the sessions of this service.
    ///
    /// # Panics
    ///
    /// Panics if the payload carried no service SID to scope the sessions
    /// under.
    #[must_use]
    pub fn sessions(&self) -> SessionList {
        self.context().sessions()
    }
}
