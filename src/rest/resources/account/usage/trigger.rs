//! UsageTrigger resource.
//!
//! Usage triggers fire a webhook when an account's usage of some category
//! crosses a threshold. Unlike usage records they are full CRUD: they can be
//! created, fetched, updated and removed, and each trigger has its own SID
//! and URL.
//!
//! # Example
//!
//! ```rust,ignore
//! use relay_api::rest::resources::account::usage::trigger::CreateUsageTriggerParams;
//!
//! let trigger = account
//!     .usage()
//!     .triggers()
//!     .create(&CreateUsageTriggerParams {
//!         callback_url: Some("https://example.com/usage".to_string()),
//!         trigger_value: Some("100".to_string()),
//!         usage_category: Some("sms".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // Later, raise the threshold
//! let trigger = trigger
//!     .update(&UpdateUsageTriggerParams {
//!         trigger_value: Some("500".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rest::{
    Addressable, Creatable, Deletable, RecordPage, Resource, ResourceContext, ResourceInstance,
    ResourceList, Updatable,
};

/// One usage trigger as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UsageTrigger {
    /// Unique identifier of this trigger.
    pub sid: Option<String>,
    /// SID of the owning account.
    pub account_sid: Option<String>,
    /// API version used for the callback.
    pub api_version: Option<String>,
    /// HTTP method used for the callback request.
    pub callback_method: Option<String>,
    /// URL called when the trigger fires.
    pub callback_url: Option<String>,
    /// Current value of the watched usage.
    pub current_value: Option<String>,
    /// When the trigger was created.
    pub date_created: Option<DateTime<Utc>>,
    /// When the trigger last fired, if it has.
    pub date_fired: Option<DateTime<Utc>>,
    /// When the trigger was last updated.
    pub date_updated: Option<DateTime<Utc>>,
    /// Display name of the trigger.
    pub friendly_name: Option<String>,
    /// How often the trigger resets (`daily`, `monthly`, `yearly`), if ever.
    pub recurring: Option<String>,
    /// Which usage dimension fires the trigger (`count`, `usage`, `price`).
    pub trigger_by: Option<String>,
    /// Threshold value that fires the trigger.
    pub trigger_value: Option<String>,
    /// Relative URI of this trigger.
    pub uri: Option<String>,
    /// The usage category being watched.
    pub usage_category: Option<String>,
    /// Relative URI of the usage record being watched.
    pub usage_record_uri: Option<String>,
    /// Fields this SDK release does not model, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for UsageTrigger {
    const NAME: &'static str = "UsageTrigger";
    const LIST_TEMPLATE: &'static str = "Accounts/{accountSid}/Usage/Triggers";
    type ListParams = UsageTriggerListParams;
}

impl Addressable for UsageTrigger {
    const CONTEXT_TEMPLATE: &'static str = "Accounts/{accountSid}/Usage/Triggers/{sid}";

    fn identity(&self) -> Option<&str> {
        self.sid.as_deref()
    }
}

impl Creatable for UsageTrigger {
    type CreateParams = CreateUsageTriggerParams;
}

impl Updatable for UsageTrigger {
    type UpdateParams = UpdateUsageTriggerParams;
}

impl Deletable for UsageTrigger {}

/// Filters accepted when listing usage triggers.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UsageTriggerListParams {
    /// Only include triggers with this recurrence.
    #[serde(rename = "Recurring", skip_serializing_if = "Option::is_none")]
    pub recurring: Option<String>,
    /// Only include triggers watching this dimension.
    #[serde(rename = "TriggerBy", skip_serializing_if = "Option::is_none")]
    pub trigger_by: Option<String>,
    /// Only include triggers watching this usage category.
    #[serde(rename = "UsageCategory", skip_serializing_if = "Option::is_none")]
    pub usage_category: Option<String>,
}

/// Properties accepted when creating a usage trigger.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CreateUsageTriggerParams {
    /// URL called when the trigger fires (required by the API).
    #[serde(rename = "CallbackUrl", skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    /// Threshold value that fires the trigger (required by the API).
    #[serde(rename = "TriggerValue", skip_serializing_if = "Option::is_none")]
    pub trigger_value: Option<String>,
    /// The usage category to watch (required by the API).
    #[serde(rename = "UsageCategory", skip_serializing_if = "Option::is_none")]
    pub usage_category: Option<String>,
    /// HTTP method for the callback request.
    #[serde(rename = "CallbackMethod", skip_serializing_if = "Option::is_none")]
    pub callback_method: Option<String>,
    /// Display name of the trigger.
    #[serde(rename = "FriendlyName", skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    /// How often the trigger resets.
    #[serde(rename = "Recurring", skip_serializing_if = "Option::is_none")]
    pub recurring: Option<String>,
    /// Which usage dimension fires the trigger.
    #[serde(rename = "TriggerBy", skip_serializing_if = "Option::is_none")]
    pub trigger_by: Option<String>,
}

/// Properties accepted when updating a usage trigger.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UpdateUsageTriggerParams {
    /// HTTP method for the callback request.
    #[serde(rename = "CallbackMethod", skip_serializing_if = "Option::is_none")]
    pub callback_method: Option<String>,
    /// URL called when the trigger fires.
    #[serde(rename = "CallbackUrl", skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    /// Display name of the trigger.
    #[serde(rename = "FriendlyName", skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
}

/// Collection handle for usage triggers.
pub type UsageTriggerList = ResourceList<UsageTrigger>;

/// Addressable handle for one usage trigger.
pub type UsageTriggerContext = ResourceContext<UsageTrigger>;

/// One fetched page of usage triggers.
pub type UsageTriggerPage = RecordPage<UsageTrigger>;

/// A fetched usage trigger snapshot.
pub type UsageTriggerInstance = ResourceInstance<UsageTrigger>;
