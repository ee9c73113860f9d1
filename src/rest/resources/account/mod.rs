//! Account-scoped resources on the stable API host.
//!
//! The account is the root of the stable API's resource hierarchy. An
//! [`AccountContext`] captures the account SID once and hands out the
//! account's sub-resource families scoped by it.

pub mod usage;

use std::sync::OnceLock;

use crate::rest::resources::account::usage::UsageList;
use crate::rest::{Solution, Version};

/// Handle for one account's resources.
///
/// Obtained from [`Client::account`](crate::Client::account) for the
/// authenticated account or [`Client::accounts`](crate::Client::accounts)
/// for any other. Construction performs no I/O.
#[derive(Debug)]
pub struct AccountContext {
    version: Version,
    solution: Solution,
    usage: OnceLock<UsageList>,
}

impl AccountContext {
    /// Creates a context for the given account SID.
    #[must_use]
    pub fn new(version: Version, account_sid: impl Into<String>) -> Self {
        Self {
            version,
            solution: Solution::new().with("accountSid", account_sid),
            usage: OnceLock::new(),
        }
    }

    /// Returns the path solution scoping this account.
    #[must_use]
    pub const fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Returns the account's usage family, building it on first access.
    #[must_use]
    pub fn usage(&self) -> &UsageList {
        self.usage
            .get_or_init(|| UsageList::new(self.version.clone(), self.solution.clone()))
    }
}
