use async_trait::async_trait;
use dashmap::DashMap;

use tally_core::error::Result;

use super::CounterStore;

/// In-memory store backed by `DashMap`.
///
/// Backs tests and the empty-path configuration; counts do not survive a
/// restart.
#[derive(Default)]
pub struct MemoryCounterStore {
    counters: DashMap<String, u64>,
}

impl MemoryCounterStore {
    pub fn new() -> Self {
        Self {
            counters: DashMap::new(),
        }
    }
}

#[async_trait]
impl CounterStore for MemoryCounterStore {
    async fn increment_and_get(&self, key: &str) -> Result<u64> {
        // entry() holds the shard write lock for the whole read-modify-write
        let mut count = self.counters.entry(key.to_string()).or_insert(0);
        *count += 1;
        Ok(*count)
    }

    async fn get(&self, key: &str) -> Result<u64> {
        Ok(self.counters.get(key).map(|c| *c).unwrap_or(0))
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}
