//! MessageInteraction resource on the preview proxy API.
//!
//! A message interaction is one proxied message delivered on behalf of a
//! participant, recording both the inbound and the outbound leg. Creating
//! one sends a message to the participant through the session's masked
//! numbers; interactions can afterwards be fetched and listed but never
//! changed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rest::{
    Addressable, Creatable, RecordPage, Resource, ResourceContext, ResourceInstance, ResourceList,
};

/// One message interaction as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MessageInteraction {
    /// Unique identifier of this interaction.
    pub sid: Option<String>,
    /// SID of the owning service.
    pub service_sid: Option<String>,
    /// SID of the session this interaction happened in.
    pub session_sid: Option<String>,
    /// SID of the participant this interaction belongs to.
    pub participant_sid: Option<String>,
    /// SID of the owning account.
    pub account_sid: Option<String>,
    /// Message body or structured data of the interaction.
    pub data: Option<String>,
    /// Delivery status of the interaction.
    pub status: Option<String>,
    /// Participant SID of the inbound leg, when present.
    pub inbound_participant_sid: Option<String>,
    /// Resource SID of the inbound leg, when present.
    pub inbound_resource_sid: Option<String>,
    /// Delivery status of the inbound leg.
    pub inbound_resource_status: Option<String>,
    /// Resource type of the inbound leg (e.g. `Message`).
    pub inbound_resource_type: Option<String>,
    /// URL of the inbound leg's resource.
    pub inbound_resource_url: Option<String>,
    /// Participant SID of the outbound leg, when present.
    pub outbound_participant_sid: Option<String>,
    /// Resource SID of the outbound leg, when present.
    pub outbound_resource_sid: Option<String>,
    /// Delivery status of the outbound leg.
    pub outbound_resource_status: Option<String>,
    /// Resource type of the outbound leg (e.g. `Message`).
    pub outbound_resource_type: Option<String>,
    /// URL of the outbound leg's resource.
    pub outbound_resource_url: Option<String>,
    /// When the interaction was created.
    pub date_created: Option<DateTime<Utc>>,
    /// When the interaction was last updated.
    pub date_updated: Option<DateTime<Utc>>,
    /// Absolute URL of this interaction.
    pub url: Option<String>,
    /// Fields this SDK release does not model, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for MessageInteraction {
    const NAME: &'static str = "MessageInteraction";
    const LIST_TEMPLATE: &'static str =
        "Services/{serviceSid}/Sessions/{sessionSid}/Participants/{participantSid}/MessageInteractions";
    type ListParams = ();
}

impl Addressable for MessageInteraction {
    const CONTEXT_TEMPLATE: &'static str =
        "Services/{serviceSid}/Sessions/{sessionSid}/Participants/{participantSid}/MessageInteractions/{sid}";

    fn identity(&self) -> Option<&str> {
        self.sid.as_deref()
    }
}

impl Creatable for MessageInteraction {
    type CreateParams = CreateMessageInteractionParams;
}

/// Properties accepted when creating a message interaction.
///
/// All properties are optional; creating with none sends an empty
/// interaction through the session.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CreateMessageInteractionParams {
    /// Message body to deliver to the participant.
    #[serde(rename = "Data", skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// Collection handle for message interactions.
pub type MessageInteractionList = ResourceList<MessageInteraction>;

/// Addressable handle for one message interaction.
pub type MessageInteractionContext = ResourceContext<MessageInteraction>;

/// One fetched page of message interactions.
pub type MessageInteractionPage = RecordPage<MessageInteraction>;

/// A fetched message interaction snapshot.
pub type MessageInteractionInstance = ResourceInstance<MessageInteraction>;
