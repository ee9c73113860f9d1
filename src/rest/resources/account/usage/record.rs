//! UsageRecord resource.
//!
//! Usage records summarize what an account consumed in a given period and
//! what it cost. They are read-only: the family supports listing with
//! category and date filters, and nothing else — records have no SID and no
//! per-record URL.
//!
//! # Example
//!
//! ```rust,ignore
//! use relay_api::rest::resources::account::usage::record::UsageRecordListParams;
//! use relay_api::rest::ListOptions;
//!
//! let params = UsageRecordListParams {
//!     category: Some("sms".to_string()),
//!     ..Default::default()
//! };
//! let records = account.usage().records().list(params, ListOptions::new()).await?;
//! for record in &records {
//!     println!("{:?}: {:?} {:?}", record.category, record.usage, record.usage_unit);
//! }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rest::{RecordPage, Resource, ResourceInstance, ResourceList};

/// One usage record as returned by the API.
///
/// All fields are optional: the server omits what does not apply, and the
/// open `extra` map preserves anything this SDK release does not know about.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UsageRecord {
    /// SID of the account the usage belongs to.
    pub account_sid: Option<String>,
    /// API version used when the usage occurred.
    pub api_version: Option<String>,
    /// The usage category (e.g. `sms`, `calls`).
    pub category: Option<String>,
    /// Number of billed usage events.
    pub count: Option<String>,
    /// Unit `count` is measured in.
    pub count_unit: Option<String>,
    /// Human-readable description of the usage.
    pub description: Option<String>,
    /// Last date of the covered period.
    pub end_date: Option<NaiveDate>,
    /// Total price of the usage.
    pub price: Option<String>,
    /// Currency of `price`.
    pub price_unit: Option<String>,
    /// First date of the covered period.
    pub start_date: Option<NaiveDate>,
    /// URIs of per-period subresources (daily, monthly, ...).
    pub subresource_uris: Option<Map<String, Value>>,
    /// Relative URI of this record's collection slice.
    pub uri: Option<String>,
    /// Amount of usage.
    pub usage: Option<String>,
    /// Unit `usage` is measured in.
    pub usage_unit: Option<String>,
    /// Fields this SDK release does not model, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for UsageRecord {
    const NAME: &'static str = "UsageRecord";
    const LIST_TEMPLATE: &'static str = "Accounts/{accountSid}/Usage/Records";
    type ListParams = UsageRecordListParams;
}

/// Filters accepted when listing usage records.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UsageRecordListParams {
    /// Only include usage of this category.
    #[serde(rename = "Category", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Only include usage on or after this date.
    #[serde(rename = "StartDate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Only include usage on or before this date.
    #[serde(rename = "EndDate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// Collection handle for usage records.
pub type UsageRecordList = ResourceList<UsageRecord>;

/// One fetched page of usage records.
pub type UsageRecordPage = RecordPage<UsageRecord>;

/// A fetched usage record snapshot.
pub type UsageRecordInstance = ResourceInstance<UsageRecord>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::serialize_to_query;

    #[test]
    fn test_usage_record_deserialization() {
        let json = r#"{
            "account_sid": "ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "api_version": "v1",
            "category": "sms",
            "count": "5",
            "count_unit": "messages",
            "description": "Short messages",
            "end_date": "2025-06-30",
            "price": "0.40",
            "price_unit": "usd",
            "start_date": "2025-06-01",
            "subresource_uris": {
                "daily": "/v1/Accounts/ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa/Usage/Records/Daily"
            },
            "uri": "/v1/Accounts/ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa/Usage/Records?Category=sms",
            "usage": "5",
            "usage_unit": "messages"
        }"#;

        let record: UsageRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.category.as_deref(), Some("sms"));
        assert_eq!(record.count.as_deref(), Some("5"));
        assert_eq!(
            record.start_date,
            Some(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
        );
        assert_eq!(
            record.end_date,
            Some(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap())
        );
        assert!(record
            .subresource_uris
            .as_ref()
            .unwrap()
            .contains_key("daily"));
        assert!(record.extra.is_empty());
    }

    #[test]
    fn test_list_params_serialize_to_pascal_case_query() {
        let params = UsageRecordListParams {
            category: Some("calls".to_string()),
            start_date: NaiveDate::from_ymd_opt(2025, 6, 1),
            end_date: None,
        };

        let query = serialize_to_query(&params);
        assert_eq!(query.get("Category"), Some(&"calls".to_string()));
        assert_eq!(query.get("StartDate"), Some(&"2025-06-01".to_string()));
        assert!(!query.contains_key("EndDate"));
    }

    #[test]
    fn test_list_template_is_account_scoped() {
        assert_eq!(
            UsageRecord::LIST_TEMPLATE,
            "Accounts/{accountSid}/Usage/Records"
        );
        assert_eq!(UsageRecord::NAME, "UsageRecord");
    }

    #[test]
    fn test_unknown_fields_are_preserved() {
        let json = r#"{"category": "sms", "as_of": "2025-07-01T00:00:00Z"}"#;
        let record: UsageRecord = serde_json::from_str(json).unwrap();

        assert_eq!(
            record.extra.get("as_of").and_then(|v| v.as_str()),
            Some("2025-07-01T00:00:00Z")
        );
    }
}
