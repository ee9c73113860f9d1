//! Capability traits for REST resources.
//!
//! Every resource family in the API is described by one plain struct (its
//! typed field shape) plus a handful of trait implementations naming what
//! the family supports. The generic navigation types —
//! [`ResourceList`](crate::rest::ResourceList),
//! [`ResourceContext`](crate::rest::ResourceContext),
//! [`ResourceInstance`](crate::rest::ResourceInstance) and
//! [`RecordPage`](crate::rest::RecordPage) — gate their operations on these
//! traits, so a read-only family simply never gains `create` or `remove`.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use relay_api::rest::{Resource, Addressable, Creatable};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Session {
//!     pub sid: Option<String>,
//!     pub status: Option<String>,
//!     #[serde(flatten)]
//!     pub extra: serde_json::Map<String, serde_json::Value>,
//! }
//!
//! impl Resource for Session {
//!     const NAME: &'static str = "Session";
//!     const LIST_TEMPLATE: &'static str = "Services/{serviceSid}/Sessions";
//!     type ListParams = ();
//! }
//!
//! impl Addressable for Session {
//!     const CONTEXT_TEMPLATE: &'static str = "Services/{serviceSid}/Sessions/{sessionSid}";
//!     const IDENTITY_KEY: &'static str = "sessionSid";
//!     fn identity(&self) -> Option<&str> {
//!         self.sid.as_deref()
//!     }
//! }
//! ```

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// A resource family that can be listed.
///
/// The struct implementing this trait is the typed snapshot of one record as
/// the API returns it. Implementors keep an open `#[serde(flatten)]` map for
/// fields the API adds later, so unknown fields are preserved rather than
/// rejected.
pub trait Resource: DeserializeOwned + Serialize + Clone + Send + Sync + 'static {
    /// The singular name of the resource (e.g. `"Session"`), used in error
    /// messages.
    const NAME: &'static str;

    /// URL template of the collection, relative to a version prefix.
    ///
    /// Placeholders are path variables covered by the list's
    /// [`Solution`](crate::rest::Solution).
    const LIST_TEMPLATE: &'static str;

    /// Filter parameters accepted when listing (use `()` if none).
    type ListParams: Serialize + Default + Send + Sync;
}

/// A resource family whose single records can be addressed directly.
///
/// Usage records, for example, are listable but have no per-record URL and
/// therefore do not implement this trait.
pub trait Addressable: Resource {
    /// URL template of a single record, relative to a version prefix.
    const CONTEXT_TEMPLATE: &'static str;

    /// Name of the path variable holding the record identity in
    /// [`CONTEXT_TEMPLATE`](Addressable::CONTEXT_TEMPLATE).
    const IDENTITY_KEY: &'static str = "sid";

    /// Returns the record's identity (its SID), when the payload carried one.
    fn identity(&self) -> Option<&str>;
}

/// A resource family supporting creation via POST on the collection.
pub trait Creatable: Resource {
    /// Properties accepted when creating a record.
    type CreateParams: Serialize + Default + Send + Sync;
}

/// A resource family supporting updates via POST on a single record.
pub trait Updatable: Addressable {
    /// Properties accepted when updating a record.
    type UpdateParams: Serialize + Default + Send + Sync;
}

/// A resource family supporting removal via DELETE on a single record.
pub trait Deletable: Addressable {}

/// Serializes a params struct to a query parameter map.
///
/// `None` fields are skipped, scalars are stringified, and arrays become
/// comma-separated values, matching how the API reads its query string.
///
/// # Panics
///
/// Panics if the params cannot be serialized to JSON. Parameter structs are
/// plain data defined at build time, so this is a programming error.
#[must_use]
pub fn serialize_to_query<T: Serialize>(params: &T) -> HashMap<String, String> {
    let value = serde_json::to_value(params)
        .unwrap_or_else(|e| panic!("Failed to serialize query parameters: {e}"));

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[test]
    fn test_serialize_to_query_handles_basic_types() {
        #[derive(Serialize)]
        struct Params {
            #[serde(rename = "PageSize")]
            page_size: u32,
            #[serde(rename = "Category")]
            category: String,
            #[serde(rename = "Recurring")]
            recurring: bool,
        }

        let params = Params {
            page_size: 50,
            category: "sms".to_string(),
            recurring: true,
        };

        let query = serialize_to_query(&params);
        assert_eq!(query.get("PageSize"), Some(&"50".to_string()));
        assert_eq!(query.get("Category"), Some(&"sms".to_string()));
        assert_eq!(query.get("Recurring"), Some(&"true".to_string()));
    }

    #[test]
    fn test_serialize_to_query_skips_none() {
        #[derive(Serialize)]
        struct Params {
            #[serde(skip_serializing_if = "Option::is_none")]
            category: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            start_date: Option<String>,
        }

        let params = Params {
            category: Some("calls".to_string()),
            start_date: None,
        };

        let query = serialize_to_query(&params);
        assert_eq!(query.get("category"), Some(&"calls".to_string()));
        assert!(!query.contains_key("start_date"));
    }

    #[test]
    fn test_serialize_to_query_handles_arrays() {
        #[derive(Serialize)]
        struct Params {
            categories: Vec<String>,
        }

        let params = Params {
            categories: vec!["sms".to_string(), "calls".to_string()],
        };

        let query = serialize_to_query(&params);
        assert_eq!(query.get("categories"), Some(&"sms,calls".to_string()));
    }

    #[test]
    fn test_serialize_to_query_of_unit_is_empty() {
        let query = serialize_to_query(&());
        assert!(query.is_empty());
    }
}
