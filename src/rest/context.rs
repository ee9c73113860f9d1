//! Addressable handles for single resources.
//!
//! A [`ResourceContext`] is a lightweight handle bound to one record's
//! resolved path variables. It holds no fetched data and no connection;
//! constructing one performs no I/O. Two contexts with equal solution and
//! version are behaviorally interchangeable and compare equal.

use std::marker::PhantomData;

use serde_json::Value;

use crate::rest::errors::RestError;
use crate::rest::instance::ResourceInstance;
use crate::rest::resource::{Addressable, Deletable, Updatable};
use crate::rest::solution::Solution;
use crate::rest::Version;

/// An addressable handle supporting direct operations on one resource.
///
/// Obtained from a list's [`get`](crate::rest::ResourceList::get) indexer or
/// lazily from an instance. Contexts are stateless between calls and cheap
/// to clone.
#[derive(Debug, Clone)]
pub struct ResourceContext<T> {
    version: Version,
    solution: Solution,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Addressable> ResourceContext<T> {
    /// Creates a context from a solution covering the resource's context
    /// template.
    #[must_use]
    pub fn new(version: Version, solution: Solution) -> Self {
        Self {
            version,
            solution,
            _marker: PhantomData,
        }
    }

    /// Returns the version this context dispatches through.
    #[must_use]
    pub const fn version(&self) -> &Version {
        &self.version
    }

    /// Returns the path solution addressing this resource.
    #[must_use]
    pub const fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Renders the absolute URL of this resource.
    ///
    /// # Panics
    ///
    /// Panics if the solution does not cover the context template; path
    /// variables are fixed at construction time, so this is a programming
    /// error.
    #[must_use]
    pub fn url(&self) -> String {
        self.version
            .absolute_url(&self.solution.render(T::CONTEXT_TEMPLATE))
    }

    /// Fetches the current state of the resource.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Api`] for non-2xx answers,
    /// [`RestError::MalformedResponse`] for unusable 2xx bodies, and
    /// [`RestError::Http`] for transport failures.
    pub async fn fetch(&self) -> Result<ResourceInstance<T>, RestError> {
        let url = self.url();
        let payload = self.version.fetch(&url, None).await?;
        ResourceInstance::from_payload(self.version.clone(), self.solution.clone(), &payload, &url)
    }
}

impl<T: Updatable> ResourceContext<T> {
    /// Updates the resource and returns the new state as a fresh instance.
    ///
    /// The existing instance (if any) is untouched; updates never mutate in
    /// place.
    ///
    /// # Errors
    ///
    /// Same error contract as [`ResourceContext::fetch`].
    ///
    /// # Panics
    ///
    /// Panics if the params cannot be serialized to JSON, which would be a
    /// programming error in the params struct.
    pub async fn update(&self, params: &T::UpdateParams) -> Result<ResourceInstance<T>, RestError> {
        let url = self.url();
        let body = serde_json::to_value(params)
            .unwrap_or_else(|e| panic!("Failed to serialize update parameters: {e}"));
        let body = if body.is_null() {
            Value::Object(serde_json::Map::new())
        } else {
            body
        };
        let payload = self.version.update(&url, body).await?;
        ResourceInstance::from_payload(self.version.clone(), self.solution.clone(), &payload, &url)
    }
}

impl<T: Deletable> ResourceContext<T> {
    /// Deletes the resource, returning `true` on success.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Api`] for non-2xx answers and
    /// [`RestError::Http`] for transport failures.
    pub async fn remove(&self) -> Result<bool, RestError> {
        self.version.delete(&self.url()).await
    }
}

impl<T: Addressable> PartialEq for ResourceContext<T> {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version && self.solution == other.solution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpClient;
    use crate::config::{AccountSid, AuthToken, RelayConfig};
    use crate::rest::{Domain, Resource};
    use serde::{Deserialize, Serialize};
    use std::sync::Arc;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Widget {
        sid: Option<String>,
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

    fn test_version(base: &str) -> Version {
        let config = RelayConfig::builder()
            .account_sid(AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap())
            .auth_token(AuthToken::new("token").unwrap())
            .build()
            .unwrap();
        let client = Arc::new(HttpClient::new(&config));
        Version::new(Arc::new(Domain::new(client, base)), "v1")
    }

    #[test]
    fn test_url_renders_context_template() {
        let context: ResourceContext<Widget> = ResourceContext::new(
            test_version("https://api.relay.com"),
            Solution::new().with("sid", "WD123"),
        );

        assert_eq!(context.url(), "https://api.relay.com/v1/Widgets/WD123");
    }

    #[test]
    fn test_contexts_with_equal_solution_and_version_compare_equal() {
        let a: ResourceContext<Widget> = ResourceContext::new(
            test_version("https://api.relay.com"),
            Solution::new().with("sid", "WD123"),
        );
        let b: ResourceContext<Widget> = ResourceContext::new(
            test_version("https://api.relay.com"),
            Solution::new().with("sid", "WD123"),
        );

        assert_eq!(a, b);
    }

    #[test]
    fn test_contexts_with_different_solutions_differ() {
        let a: ResourceContext<Widget> = ResourceContext::new(
            test_version("https://api.relay.com"),
            Solution::new().with("sid", "WD123"),
        );
        let b: ResourceContext<Widget> = ResourceContext::new(
            test_version("https://api.relay.com"),
            Solution::new().with("sid", "WD456"),
        );

        assert_ne!(a, b);
    }

    #[test]
    #[should_panic(expected = "No value for path variable 'sid'")]
    fn test_url_panics_when_solution_is_incomplete() {
        let context: ResourceContext<Widget> =
            ResourceContext::new(test_version("https://api.relay.com"), Solution::new());
        let _ = context.url();
    }
}
