//! Usage namespace under an account.
//!
//! `Usage` is not a record family of its own: it is the grouping node for
//! the account's usage sub-resources, [`records`](UsageList::records) and
//! [`triggers`](UsageList::triggers). Accessing a sub-resource performs no
//! network call; the nested list is built from this list's own solution on
//! first access and cached, so repeated access returns the same instance.

pub mod record;
pub mod trigger;

use std::sync::OnceLock;

use crate::rest::resources::account::usage::record::UsageRecordList;
use crate::rest::resources::account::usage::trigger::UsageTriggerList;
use crate::rest::{ResourceList, Solution, Version};

/// The usage family of an account.
///
/// # Example
///
/// ```rust,ignore
/// let usage = client.account().usage();
///
/// // Nested lists are memoized; both calls see the same list.
/// let records = usage.records();
/// assert!(std::ptr::eq(records, usage.records()));
/// ```
#[derive(Debug)]
pub struct UsageList {
    version: Version,
    solution: Solution,
    records: OnceLock<UsageRecordList>,
    triggers: OnceLock<UsageTriggerList>,
}

impl UsageList {
    /// Creates the usage namespace from an account-scoped solution.
    #[must_use]
    pub fn new(version: Version, solution: Solution) -> Self {
        Self {
            version,
            solution,
            records: OnceLock::new(),
            triggers: OnceLock::new(),
        }
    }

    /// Returns the account's usage records, building the list on first
    /// access.
    #[must_use]
    pub fn records(&self) -> &UsageRecordList {
        self.records
            .get_or_init(|| ResourceList::new(self.version.clone(), self.solution.clone()))
    }

    /// Returns the account's usage triggers, building the list on first
    /// access.
    #[must_use]
    pub fn triggers(&self) -> &UsageTriggerList {
        self.triggers
            .get_or_init(|| ResourceList::new(self.version.clone(), self.solution.clone()))
    }
}
