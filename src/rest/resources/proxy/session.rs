//! Session resource on the preview proxy API.
//!
//! A session is one masked conversation under a service. Participants join a
//! session and exchange message interactions through it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rest::resources::proxy::participant::ParticipantList;
use crate::rest::{
    Addressable, Creatable, Deletable, RecordPage, Resource, ResourceContext, ResourceInstance,
    ResourceList, Updatable,
};

/// One proxy session as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Session {
    /// Unique identifier of this session.
    pub sid: Option<String>,
    /// SID of the service this session belongs to.
    pub service_sid: Option<String>,
    /// SID of the owning account.
    pub account_sid: Option<String>,
    /// Application-provided name, unique per service.
    pub unique_name: Option<String>,
    /// Lifecycle status (`in-progress`, `closed`, `failed`, ...).
    pub status: Option<String>,
    /// Seconds of inactivity after which the session ends.
    pub ttl: Option<u64>,
    /// When the session started.
    pub start_time: Option<DateTime<Utc>>,
    /// When the session ended, if it has.
    pub end_time: Option<DateTime<Utc>>,
    /// When the session was created.
    pub date_created: Option<DateTime<Utc>>,
    /// When the session was last updated.
    pub date_updated: Option<DateTime<Utc>>,
    /// Absolute URL of this session.
    pub url: Option<String>,
    /// URLs of the session's sub-resources.
    pub links: Option<Map<String, Value>>,
    /// Fields this SDK release does not model, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Session {
    const NAME: &'static str = "Session";
    const LIST_TEMPLATE: &'static str = "Services/{serviceSid}/Sessions";
    type ListParams = ();
}

impl Addressable for Session {
    const CONTEXT_TEMPLATE: &'static str = "Services/{serviceSid}/Sessions/{sessionSid}";
    const IDENTITY_KEY: &'static str = "sessionSid";

    fn identity(&self) -> Option<&str> {
        self.sid.as_deref()
    }
}

impl Creatable for Session {
    type CreateParams = CreateSessionParams;
}

impl Updatable for Session {
    type UpdateParams = UpdateSessionParams;
}

impl Deletable for Session {}

/// Properties accepted when creating a session.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CreateSessionParams {
    /// Application-provided name, unique per service.
    #[serde(rename = "UniqueName", skip_serializing_if = "Option::is_none")]
    pub unique_name: Option<String>,
    /// Seconds of inactivity after which the session ends.
    #[serde(rename = "Ttl", skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
    /// Initial lifecycle status.
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Properties accepted when updating a session.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UpdateSessionParams {
    /// Seconds of inactivity after which the session ends.
    #[serde(rename = "Ttl", skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
    /// New lifecycle status (e.g. `closed` to end the session).
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Collection handle for sessions.
pub type SessionList = ResourceList<Session>;

/// Addressable handle for one session.
pub type SessionContext = ResourceContext<Session>;

/// One fetched page of sessions.
pub type SessionPage = RecordPage<Session>;

/// A fetched session snapshot.
pub type SessionInstance = ResourceInstance<Session>;

impl ResourceContext<Session> {
    /// Returns the participants of this session.
    ///
    /// The list is a pure function of this context's solution; no network
    /// call happens here.
    #[must_use]
    pub fn participants(&self) -> ParticipantList {
        ResourceList::new(self.version().clone(), self.solution().clone())
    }
}

impl ResourceInstance<Session> {
    /// Returns the participants of this session.
    ///
    /// # Panics
    ///
    /// Panics if the payload carried no session SID to scope the
    /// participants under.
    #[must_use]
    pub fn participants(&self) -> ParticipantList {
        self.context().participants()
    }
}
