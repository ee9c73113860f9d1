//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear
//! error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Relay account SID.
///
/// Account SIDs are 34 character strings starting with `AC`, e.g.
/// `ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa`. The newtype rejects anything else
/// on construction, so a value of this type is always a plausible SID.
///
/// # Serialization
///
/// `AccountSid` serializes to and deserializes from the plain SID string.
///
/// # Example
///
/// ```rust
/// use relay_api::AccountSid;
///
/// let sid = AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap();
/// assert_eq!(sid.as_ref(), "ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
///
/// assert!(AccountSid::new("AC123").is_err());
/// assert!(AccountSid::new("XXaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountSid(String);

impl AccountSid {
    const PREFIX: &'static str = "AC";
    const LENGTH: usize = 34;

    /// Creates a new validated account SID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAccountSid`] if the value is not a
    /// 34 character `AC`-prefixed alphanumeric string.
    pub fn new(sid: impl Into<String>) -> Result<Self, ConfigError> {
        let sid = sid.into();

        let valid = sid.len() == Self::LENGTH
            && sid.starts_with(Self::PREFIX)
            && sid.chars().all(|c| c.is_ascii_alphanumeric());

        if valid {
            Ok(Self(sid))
        } else {
            Err(ConfigError::InvalidAccountSid { sid })
        }
    }
}

impl AsRef<str> for AccountSid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountSid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for AccountSid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccountSid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated Relay auth token.
///
/// This newtype ensures the token is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `AuthToken(*****)` instead of the actual token.
///
/// # Example
///
/// ```rust
/// use relay_api::AuthToken;
///
/// let token = AuthToken::new("my-auth-token").unwrap();
/// assert_eq!(format!("{:?}", token), "AuthToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a new validated auth token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAuthToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(*****)")
    }
}

/// A validated base URL for an API host.
///
/// This newtype validates that the URL has a scheme and a host, and strips
/// any trailing slash so URLs compose cleanly with version prefixes.
///
/// # Example
///
/// ```rust
/// use relay_api::HostUrl;
///
/// let url = HostUrl::new("https://api.relay.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.relay.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl(String);

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL has no scheme or
    /// no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let Some(scheme_end) = url.find("://") else {
            return Err(ConfigError::InvalidHostUrl { url });
        };

        let scheme = &url[..scheme_end];
        let host = &url[scheme_end + 3..];
        if scheme.is_empty()
            || !scheme.chars().all(|c| c.is_ascii_alphabetic())
            || host.is_empty()
        {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        Ok(Self(url))
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HostUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
