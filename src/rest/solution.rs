//! Path solutions for URL template rendering.
//!
//! A [`Solution`] is the set of resolved path-variable values that identifies
//! one addressable resource or collection. It is captured when a list or
//! context is constructed and never changes afterwards.
//!
//! # URL Templates
//!
//! Templates use `{name}` placeholders for path variables:
//! - `Accounts/{accountSid}/Usage/Records`
//! - `Services/{serviceSid}/Sessions/{sessionSid}`
//!
//! Path variables are always known at construction time, never at call time,
//! so an unresolved placeholder is a programming error and rendering fails
//! fast rather than producing a broken URL.
//!
//! # Example
//!
//! ```rust
//! use relay_api::rest::Solution;
//!
//! let solution = Solution::new()
//!     .with("serviceSid", "KSaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa")
//!     .with("sessionSid", "KCaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
//!
//! let url = solution.render("Services/{serviceSid}/Sessions/{sessionSid}");
//! assert_eq!(
//!     url,
//!     "Services/KSaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa/Sessions/KCaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"
//! );
//! ```

use std::collections::BTreeMap;

/// An immutable mapping of path-variable names to values.
///
/// Every list and context holds a `Solution` covering the placeholders of its
/// URL templates. Solutions are value types: extending one with [`with`]
/// produces a new `Solution`, leaving the original untouched, so a list can
/// hand a copy of its own solution to nested lists and contexts without
/// aliasing concerns.
///
/// [`with`]: Solution::with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    params: BTreeMap<String, String>,
}

impl Solution {
    /// Creates an empty solution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new solution extended with the given path variable.
    ///
    /// Existing entries are preserved; setting a name twice keeps the most
    /// recent value.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Returns the value for a path variable, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Returns `true` if the solution contains no path variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of path variables in the solution.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Renders a URL template by substituting every `{name}` placeholder.
    ///
    /// Substitution is deterministic and idempotent: rendering the same
    /// template against the same solution always yields the same URL, and a
    /// fully rendered URL contains no placeholders left to substitute.
    ///
    /// # Panics
    ///
    /// Panics if the template references a placeholder the solution does not
    /// cover, or covers with an empty value. Path variables are fixed at
    /// construction time, so this is a programming error, not a runtime
    /// condition to recover from.
    #[must_use]
    pub fn render(&self, template: &str) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            result.push_str(&rest[..open]);
            let after_open = &rest[open + 1..];
            let close = after_open.find('}').unwrap_or_else(|| {
                panic!("Unterminated placeholder in URL template '{template}'")
            });
            let name = &after_open[..close];
            let value = self.get(name).unwrap_or_else(|| {
                panic!("No value for path variable '{name}' in URL template '{template}'")
            });
            assert!(
                !value.is_empty(),
                "Empty value for path variable '{name}' in URL template '{template}'"
            );
            result.push_str(value);
            rest = &after_open[close + 1..];
        }

        result.push_str(rest);
        result
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Solution {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// Verify Solution is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Solution>();
};
