//! Counter persistence.
//!
//! The store is the only shared mutable state in the service. All mutation
//! goes through [`CounterStore::increment_and_get`]; per-key serialization of
//! increments is the one correctness-critical concurrency property.

mod file;
mod memory;

use async_trait::async_trait;
use tally_core::error::Result;

pub use file::FileCounterStore;
pub use memory::MemoryCounterStore;

/// Durable mapping from key to hit count.
///
/// Implementations own the counter state exclusively; nothing outside the
/// store may read-modify-write counts.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Atomically read the count (absent = 0), add one, persist, and return
    /// the new value. Concurrent calls for one key must each observe a
    /// distinct value with no duplicates and no gaps.
    async fn increment_and_get(&self, key: &str) -> Result<u64>;

    /// Current count without mutation; 0 for unseen keys.
    async fn get(&self, key: &str) -> Result<u64>;

    /// Short label for the health payload.
    fn kind(&self) -> &'static str;
}
