//! Best-effort webhook notification.
//!
//! The allow-list is compiled once at startup into a fast membership
//! structure; the per-request check is pure.

mod webhook;

use std::collections::HashSet;

use async_trait::async_trait;
use tally_core::error::Result;

pub use webhook::WebhookSink;

/// Keys eligible for notification, parsed once at startup.
#[derive(Debug, Default, Clone)]
pub struct NotifyList {
    keys: HashSet<String>,
}

impl NotifyList {
    /// Parse a comma-separated list, trimming entries and dropping empties.
    pub fn parse(raw: &str) -> NotifyList {
        let keys = raw
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect();
        NotifyList { keys }
    }

    /// Exact-match membership check.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Outbound notification destination.
///
/// Errors are for the caller to log and discard: a failed delivery must never
/// fail the request that triggered it. At most one attempt per qualifying
/// request; no retry, no queueing.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn notify(&self, key: &str, new_count: u64) -> Result<()>;
}
