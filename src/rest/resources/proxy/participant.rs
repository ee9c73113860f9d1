//! Participant resource on the preview proxy API.
//!
//! A participant is one party of a session, identified by a real address
//! (phone number or channel identifier) and masked behind a proxy
//! identifier. Participants can be added and removed but never updated; to
//! change one, remove it and add a replacement.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rest::resources::proxy::message_interaction::MessageInteractionList;
use crate::rest::{
    Addressable, Creatable, Deletable, RecordPage, Resource, ResourceContext, ResourceInstance,
    ResourceList,
};

/// One session participant as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Participant {
    /// Unique identifier of this participant.
    pub sid: Option<String>,
    /// SID of the session this participant belongs to.
    pub session_sid: Option<String>,
    /// SID of the owning service.
    pub service_sid: Option<String>,
    /// SID of the owning account.
    pub account_sid: Option<String>,
    /// The participant's real address.
    pub identifier: Option<String>,
    /// Display name of the participant.
    pub friendly_name: Option<String>,
    /// The masked address other parties see.
    pub proxy_identifier: Option<String>,
    /// When the participant was added.
    pub date_created: Option<DateTime<Utc>>,
    /// When the participant was last updated.
    pub date_updated: Option<DateTime<Utc>>,
    /// Absolute URL of this participant.
    pub url: Option<String>,
    /// URLs of the participant's sub-resources.
    pub links: Option<Map<String, Value>>,
    /// Fields this SDK release does not model, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Participant {
    const NAME: &'static str = "Participant";
    const LIST_TEMPLATE: &'static str =
        "Services/{serviceSid}/Sessions/{sessionSid}/Participants";
    type ListParams = ();
}

impl Addressable for Participant {
    const CONTEXT_TEMPLATE: &'static str =
        "Services/{serviceSid}/Sessions/{sessionSid}/Participants/{participantSid}";
    const IDENTITY_KEY: &'static str = "participantSid";

    fn identity(&self) -> Option<&str> {
        self.sid.as_deref()
    }
}

impl Creatable for Participant {
    type CreateParams = CreateParticipantParams;
}

impl Deletable for Participant {}

/// Properties accepted when adding a participant.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CreateParticipantParams {
    /// The participant's real address (required by the API).
    #[serde(rename = "Identifier", skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Display name of the participant.
    #[serde(rename = "FriendlyName", skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    /// A specific masked address to use.
    #[serde(rename = "ProxyIdentifier", skip_serializing_if = "Option::is_none")]
    pub proxy_identifier: Option<String>,
}

/// Collection handle for participants.
pub type ParticipantList = ResourceList<Participant>;

/// Addressable handle for one participant.
pub type ParticipantContext = ResourceContext<Participant>;

/// One fetched page of participants.
pub type ParticipantPage = RecordPage<Participant>;

/// A fetched participant snapshot.
pub type ParticipantInstance = ResourceInstance<Participant>;

impl ResourceContext<Participant> {
    /// Returns the message interactions of this participant.
    ///
    /// The list is a pure function of this context's solution; no network
    /// call happens here.
    #[must_use]
    pub fn message_interactions(&self) -> MessageInteractionList {
        ResourceList::new(self.version().clone(), self.solution().clone())
    }
}

impl ResourceInstance<Participant> {
    /// Returns the message interactions of this participant.
    ///
    /// # Panics
    ///
    /// Panics if the payload carried no participant SID to scope the
    /// interactions under.
    #[must_use]
    pub fn message_interactions(&self) -> MessageInteractionList {
        self.context().message_interactions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpClient;
    use crate::config::{AccountSid, AuthToken, RelayConfig};
    use crate::rest::{Domain, Solution, Version};
    use std::sync::Arc;

    fn proxy_version() -> Version {
        let config = RelayConfig::builder()
            .account_sid(AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap())
            .auth_token(AuthToken::new("token").unwrap())
            .build()
            .unwrap();
        let client = Arc::new(HttpClient::new(&config));
        Version::new(
            Arc::new(Domain::new(client, "https://preview.relay.com")),
            "Proxy",
        )
    }

    fn session_scoped() -> Solution {
        Solution::new()
            .with("serviceSid", "KSaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa")
            .with("sessionSid", "KCaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa")
    }

    #[test]
    fn test_participant_deserialization() {
        let json = r#"{
            "sid": "KPaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "session_sid": "KCaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "service_sid": "KSaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "account_sid": "ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "identifier": "+14155551234",
            "friendly_name": null,
            "proxy_identifier": "+14155559876",
            "date_created": "2025-06-01T10:05:00Z",
            "date_updated": "2025-06-01T10:05:00Z"
        }"#;

        let participant: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(participant.identifier.as_deref(), Some("+14155551234"));
        assert_eq!(participant.friendly_name, None);
        assert_eq!(
            participant.proxy_identifier.as_deref(),
            Some("+14155559876")
        );
    }

    #[test]
    fn test_context_url_covers_three_path_variables() {
        let list: ParticipantList = ResourceList::new(proxy_version(), session_scoped());

        assert_eq!(
            list.get("KPaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").url(),
            "https://preview.relay.com/Proxy/Services/KSaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa/Sessions/KCaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa/Participants/KPaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"
        );
    }

    #[test]
    fn test_message_interactions_accessor_scopes_by_participant() {
        let list: ParticipantList = ResourceList::new(proxy_version(), session_scoped());
        let interactions = list
            .get("KPaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa")
            .message_interactions();

        assert_eq!(
            interactions.url(),
            "https://preview.relay.com/Proxy/Services/KSaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa/Sessions/KCaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa/Participants/KPaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa/MessageInteractions"
        );
    }

    #[test]
    fn test_create_params_serialize_to_pascal_case() {
        let params = CreateParticipantParams {
            identifier: Some("+14155551234".to_string()),
            ..Default::default()
        };

        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body["Identifier"], "+14155551234");
        assert!(body.get("FriendlyName").is_none());
    }
}
