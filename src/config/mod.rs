//! Configuration types for the Relay API SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for API communication with Relay.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`RelayConfig`]: The main configuration struct holding all SDK settings
//! - [`RelayConfigBuilder`]: A builder for constructing [`RelayConfig`] instances
//! - [`AccountSid`]: A validated account SID newtype
//! - [`AuthToken`]: A validated auth token newtype with masked debug output
//! - [`HostUrl`]: A validated API host base URL
//!
//! # Example
//!
//! ```rust
//! use relay_api::{RelayConfig, AccountSid, AuthToken};
//!
//! let config = RelayConfig::builder()
//!     .account_sid(AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap())
//!     .auth_token(AuthToken::new("my-auth-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{AccountSid, AuthToken, HostUrl};

use crate::error::ConfigError;

/// Configuration for the Relay API SDK.
///
/// Holds the account credentials used to authenticate every request, and
/// optional overrides for the API hosts (useful behind proxies and in
/// tests against a local mock server).
///
/// Construct instances with [`RelayConfig::builder`]. Configuration is
/// immutable once built; create a new config to change settings.
#[derive(Clone, Debug)]
pub struct RelayConfig {
    account_sid: AccountSid,
    auth_token: AuthToken,
    api_host: Option<HostUrl>,
    preview_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl RelayConfig {
    /// Returns a new builder for constructing a `RelayConfig`.
    #[must_use]
    pub const fn builder() -> RelayConfigBuilder {
        RelayConfigBuilder::new()
    }

    /// Returns the account SID requests are issued on behalf of.
    #[must_use]
    pub const fn account_sid(&self) -> &AccountSid {
        &self.account_sid
    }

    /// Returns the auth token used for request authentication.
    #[must_use]
    pub const fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }

    /// Returns the override for the stable API host, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the override for the preview API host, if configured.
    #[must_use]
    pub const fn preview_host(&self) -> Option<&HostUrl> {
        self.preview_host.as_ref()
    }

    /// Returns the configured User-Agent prefix, if any.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

/// Builder for [`RelayConfig`] instances.
///
/// # Example
///
/// ```rust
/// use relay_api::{RelayConfig, AccountSid, AuthToken, HostUrl};
///
/// let config = RelayConfig::builder()
///     .account_sid(AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap())
///     .auth_token(AuthToken::new("token").unwrap())
///     .api_host(HostUrl::new("http://localhost:4010").unwrap())
///     .user_agent_prefix("my-app/2.1")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.user_agent_prefix(), Some("my-app/2.1"));
/// ```
#[derive(Debug, Default)]
pub struct RelayConfigBuilder {
    account_sid: Option<AccountSid>,
    auth_token: Option<AuthToken>,
    api_host: Option<HostUrl>,
    preview_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl RelayConfigBuilder {
    const fn new() -> Self {
        Self {
            account_sid: None,
            auth_token: None,
            api_host: None,
            preview_host: None,
            user_agent_prefix: None,
        }
    }

    /// Sets the account SID (required).
    #[must_use]
    pub fn account_sid(mut self, sid: AccountSid) -> Self {
        self.account_sid = Some(sid);
        self
    }

    /// Sets the auth token (required).
    #[must_use]
    pub fn auth_token(mut self, token: AuthToken) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Overrides the base URL of the stable API host.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Overrides the base URL of the preview API host.
    #[must_use]
    pub fn preview_host(mut self, host: HostUrl) -> Self {
        self.preview_host = Some(host);
        self
    }

    /// Sets a prefix for the User-Agent header of every request.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `account_sid` or
    /// `auth_token` was not set.
    pub fn build(self) -> Result<RelayConfig, ConfigError> {
        let account_sid = self.account_sid.ok_or(ConfigError::MissingRequiredField {
            field: "account_sid",
        })?;
        let auth_token = self.auth_token.ok_or(ConfigError::MissingRequiredField {
            field: "auth_token",
        })?;

        Ok(RelayConfig {
            account_sid,
            auth_token,
            api_host: self.api_host,
            preview_host: self.preview_host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

// Verify config types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RelayConfig>();
};
