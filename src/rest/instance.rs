//! Immutable snapshots of fetched resources.
//!
//! A [`ResourceInstance`] pairs one record's typed field values with the
//! version and path solution it came from. The instance is a value snapshot:
//! it holds no live connection, and refresh or update operations return a
//! *new* instance rather than mutating this one.
//!
//! Instances of addressable families lazily build their own
//! [`ResourceContext`] on the first self-referential call (`fetch`,
//! `update`, `remove`) and reuse it afterwards; the memoization is a
//! once-only initialization that stays correct under concurrent access.

use std::ops::Deref;
use std::sync::OnceLock;

use serde_json::Value;

use crate::rest::context::ResourceContext;
use crate::rest::errors::RestError;
use crate::rest::resource::{Addressable, Deletable, Resource, Updatable};
use crate::rest::solution::Solution;
use crate::rest::Version;

/// A read-only snapshot of one resource's fields.
///
/// Derefs to the typed record, so fields read naturally:
///
/// ```rust,ignore
/// let interaction = context.fetch().await?;
/// println!("{:?} {:?}", interaction.sid, interaction.status);
/// ```
#[derive(Debug, Clone)]
pub struct ResourceInstance<T> {
    properties: T,
    version: Version,
    solution: Solution,
    context: OnceLock<ResourceContext<T>>,
}

impl<T: Resource> ResourceInstance<T> {
    /// Wraps an already-deserialized record.
    #[must_use]
    pub fn new(version: Version, solution: Solution, properties: T) -> Self {
        Self {
            properties,
            version,
            solution,
            context: OnceLock::new(),
        }
    }

    /// Deserializes a raw response payload into an instance.
    ///
    /// Known fields land in the typed record; unknown fields are preserved
    /// in the record's open `extra` map rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::MalformedResponse`] when the payload does not
    /// deserialize into the resource's field shape.
    pub fn from_payload(
        version: Version,
        solution: Solution,
        payload: &Value,
        url: &str,
    ) -> Result<Self, RestError> {
        let properties: T =
            serde_json::from_value(payload.clone()).map_err(|e| RestError::MalformedResponse {
                url: url.to_string(),
                detail: format!("payload does not deserialize as {}: {e}", T::NAME),
            })?;

        Ok(Self::new(version, solution, properties))
    }

    /// Returns the typed record.
    #[must_use]
    pub const fn properties(&self) -> &T {
        &self.properties
    }

    /// Consumes the instance, returning the typed record.
    #[must_use]
    pub fn into_properties(self) -> T {
        self.properties
    }

    /// Returns the version this instance dispatches through.
    #[must_use]
    pub const fn version(&self) -> &Version {
        &self.version
    }

    /// Returns the path solution this instance was materialized under.
    #[must_use]
    pub const fn solution(&self) -> &Solution {
        &self.solution
    }
}

impl<T: Addressable> ResourceInstance<T> {
    /// Returns this instance's context, building it on first use.
    ///
    /// The context's solution is the instance's own solution extended with
    /// the record identity. Repeated calls return the same context.
    ///
    /// # Panics
    ///
    /// Panics if the payload carried no identity; a record without one
    /// cannot be addressed.
    pub fn context(&self) -> &ResourceContext<T> {
        self.context.get_or_init(|| {
            let identity = self.properties.identity().unwrap_or_else(|| {
                panic!(
                    "{} payload has no '{}'; cannot build a context for it",
                    T::NAME,
                    T::IDENTITY_KEY
                )
            });
            ResourceContext::new(
                self.version.clone(),
                self.solution.clone().with(T::IDENTITY_KEY, identity),
            )
        })
    }

    /// Re-fetches the resource, returning a fresh instance.
    ///
    /// # Errors
    ///
    /// Propagates the [`RestError`] of the underlying fetch.
    pub async fn fetch(&self) -> Result<Self, RestError> {
        self.context().fetch().await
    }
}

impl<T: Updatable> ResourceInstance<T> {
    /// Updates the resource, returning the new state as a fresh instance.
    ///
    /// This instance keeps its current field values.
    ///
    /// # Errors
    ///
    /// Propagates the [`RestError`] of the underlying update.
    pub async fn update(&self, params: &T::UpdateParams) -> Result<Self, RestError> {
        self.context().update(params).await
    }
}

impl<T: Deletable> ResourceInstance<T> {
    /// Deletes the resource, returning `true` on success.
    ///
    /// # Errors
    ///
    /// Propagates the [`RestError`] of the underlying delete.
    pub async fn remove(&self) -> Result<bool, RestError> {
        self.context().remove().await
    }
}

impl<T> Deref for ResourceInstance<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpClient;
    use crate::config::{AccountSid, AuthToken, RelayConfig};
    use crate::rest::Domain;
    use serde::{Deserialize, Serialize};
    use serde_json::json;
    use std::sync::Arc;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Widget {
        sid: Option<String>,
        name: Option<String>,
        #[serde(flatten)]
        extra: serde_json::Map<String, Value>,
    }

    impl Resource for Widget {
        const NAME: &'static str = "Widget";
        const LIST_TEMPLATE: &'static str = "Widgets";
        type ListParams = ();
    }

    impl Addressable for Widget {
        const CONTEXT_TEMPLATE: &'static str = "Widgets/{sid}";
        fn identity(&self) -> Option<&str> {
            self.sid.as_deref()
        }
    }

    fn test_version() -> Version {
        let config = RelayConfig::builder()
            .account_sid(AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap())
            .auth_token(AuthToken::new("token").unwrap())
            .build()
            .unwrap();
        let client = Arc::new(HttpClient::new(&config));
        Version::new(Arc::new(Domain::new(client, "https://api.relay.com")), "v1")
    }

    #[test]
    fn test_from_payload_deserializes_known_fields() {
        let payload = json!({"sid": "WD1", "name": "gizmo"});
        let instance: ResourceInstance<Widget> =
            ResourceInstance::from_payload(test_version(), Solution::new(), &payload, "u").unwrap();

        assert_eq!(instance.sid.as_deref(), Some("WD1"));
        assert_eq!(instance.name.as_deref(), Some("gizmo"));
    }

    #[test]
    fn test_from_payload_preserves_unknown_fields() {
        let payload = json!({"sid": "WD1", "added_in_v2": {"nested": true}});
        let instance: ResourceInstance<Widget> =
            ResourceInstance::from_payload(test_version(), Solution::new(), &payload, "u").unwrap();

        assert_eq!(
            instance.extra.get("added_in_v2"),
            Some(&json!({"nested": true}))
        );
    }

    #[test]
    fn test_from_payload_preserves_null_fields_as_none() {
        let payload = json!({"sid": "WD1", "name": null});
        let instance: ResourceInstance<Widget> =
            ResourceInstance::from_payload(test_version(), Solution::new(), &payload, "u").unwrap();

        assert_eq!(instance.name, None);
    }

    #[test]
    fn test_deref_exposes_record_fields() {
        let instance = ResourceInstance::new(
            test_version(),
            Solution::new(),
            Widget {
                sid: Some("WD1".to_string()),
                name: Some("gizmo".to_string()),
                extra: serde_json::Map::new(),
            },
        );

        // Field access through Deref
        assert_eq!(instance.name.as_deref(), Some("gizmo"));
    }

    #[test]
    fn test_context_is_memoized() {
        let instance = ResourceInstance::new(
            test_version(),
            Solution::new(),
            Widget {
                sid: Some("WD1".to_string()),
                name: None,
                extra: serde_json::Map::new(),
            },
        );

        let first = instance.context() as *const _;
        let second = instance.context() as *const _;
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_context_solution_includes_identity() {
        let instance = ResourceInstance::new(
            test_version(),
            Solution::new(),
            Widget {
                sid: Some("WD42".to_string()),
                name: None,
                extra: serde_json::Map::new(),
            },
        );

        assert_eq!(instance.context().solution().get("sid"), Some("WD42"));
        assert_eq!(
            instance.context().url(),
            "https://api.relay.com/v1/Widgets/WD42"
        );
    }

    #[test]
    #[should_panic(expected = "Widget payload has no 'sid'")]
    fn test_context_panics_without_identity() {
        let instance = ResourceInstance::new(
            test_version(),
            Solution::new(),
            Widget {
                sid: None,
                name: None,
                extra: serde_json::Map::new(),
            },
        );
        let _ = instance.context();
    }

    #[test]
    fn test_from_payload_rejects_wrong_shape() {
        let payload = json!(["not", "an", "object"]);
        let result: Result<ResourceInstance<Widget>, _> =
            ResourceInstance::from_payload(test_version(), Solution::new(), &payload, "u");

        assert!(matches!(result, Err(RestError::MalformedResponse { .. })));
    }
}
