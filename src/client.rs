//! Top-level client for the Relay API.
//!
//! [`Client`] wires the configured credentials into one shared HTTP client,
//! builds the domain/version dispatch for each API host, and hands out the
//! entry namespaces of the resource tree.

use std::sync::{Arc, OnceLock};

use crate::clients::HttpClient;
use crate::config::RelayConfig;
use crate::rest::resources::account::AccountContext;
use crate::rest::resources::proxy::Proxy;
use crate::rest::{Domain, Version};

/// Base URL of the stable API host.
pub const DEFAULT_API_HOST: &str = "https://api.relay.com";

/// Base URL of the preview API host.
pub const DEFAULT_PREVIEW_HOST: &str = "https://preview.relay.com";

/// The Relay API client.
///
/// One client serves both API hosts; the underlying HTTP client and
/// connection pool are shared. Entry namespaces are built lazily and cached,
/// so repeated access is cheap and identity-stable.
///
/// # Example
///
/// ```rust,ignore
/// use relay_api::{AccountSid, AuthToken, Client, RelayConfig};
/// use relay_api::rest::ListOptions;
///
/// let config = RelayConfig::builder()
///     .account_sid(AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa")?)
///     .auth_token(AuthToken::new("token")?)
///     .build()?;
/// let client = Client::new(config);
///
/// let records = client
///     .account()
///     .usage()
///     .records()
///     .list(Default::default(), ListOptions::new())
///     .await?;
/// ```
#[derive(Debug)]
pub struct Client {
    config: RelayConfig,
    v1: Version,
    proxy_version: Version,
    account: OnceLock<AccountContext>,
    proxy: OnceLock<Proxy>,
}

impl Client {
    /// Creates a client from the given configuration.
    ///
    /// Host overrides in the configuration replace the default API hosts;
    /// everything else about dispatch is fixed here.
    #[must_use]
    pub fn new(config: RelayConfig) -> Self {
        let http = Arc::new(HttpClient::new(&config));

        let api_base = config
            .api_host()
            .map_or(DEFAULT_API_HOST, AsRef::as_ref)
            .to_string();
        let preview_base = config
            .preview_host()
            .map_or(DEFAULT_PREVIEW_HOST, AsRef::as_ref)
            .to_string();

        let api_domain = Arc::new(Domain::new(Arc::clone(&http), api_base));
        let preview_domain = Arc::new(Domain::new(http, preview_base));

        Self {
            v1: Version::new(api_domain, "v1"),
            proxy_version: Version::new(preview_domain, "Proxy"),
            account: OnceLock::new(),
            proxy: OnceLock::new(),
            config,
        }
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Returns the `v1` version on the stable API host.
    #[must_use]
    pub const fn v1(&self) -> &Version {
        &self.v1
    }

    /// Returns the authenticated account's context, built on first access.
    #[must_use]
    pub fn account(&self) -> &AccountContext {
        self.account.get_or_init(|| {
            AccountContext::new(self.v1.clone(), self.config.account_sid().as_ref())
        })
    }

    /// Returns a context for an arbitrary account SID.
    ///
    /// Unlike [`account`](Client::account), this builds a fresh context per
    /// call; the authenticated credentials are still used for the requests.
    #[must_use]
    pub fn accounts(&self, account_sid: impl Into<String>) -> AccountContext {
        AccountContext::new(self.v1.clone(), account_sid)
    }

    /// Returns the proxy namespace on the preview host, built on first
    /// access.
    #[must_use]
    pub fn proxy(&self) -> &Proxy {
        self.proxy
            .get_or_init(|| Proxy::new(self.proxy_version.clone()))
    }
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};
