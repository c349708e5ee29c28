//! JSON-snapshot store.
//!
//! The whole map lives in memory behind an async mutex; every increment
//! rewrites the snapshot through a temp file + rename, so a crash mid-write
//! leaves the previous snapshot intact. The mutex also serializes increments,
//! which satisfies the per-key atomicity contract.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use tally_core::error::{Result, TallyError};

use super::CounterStore;

/// On-disk layout: counters nested under a fixed namespace.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    counter: HashMap<String, u64>,
}

#[derive(Debug)]
pub struct FileCounterStore {
    path: PathBuf,
    counters: Mutex<HashMap<String, u64>>,
}

impl FileCounterStore {
    /// Open the store, loading an existing snapshot if present.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let counters = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let snap: Snapshot = serde_json::from_slice(&bytes).map_err(|e| {
                    TallyError::Storage(format!("corrupt snapshot {}: {e}", path.display()))
                })?;
                snap.counter
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                return Err(TallyError::Storage(format!(
                    "open {}: {e}",
                    path.display()
                )))
            }
        };
        Ok(Self {
            path,
            counters: Mutex::new(counters),
        })
    }

    async fn persist(&self, counters: &HashMap<String, u64>) -> Result<()> {
        let snap = Snapshot {
            counter: counters.clone(),
        };
        let bytes = serde_json::to_vec_pretty(&snap)
            .map_err(|e| TallyError::Storage(format!("encode snapshot: {e}")))?;

        let tmp = tmp_path(&self.path);
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| TallyError::Storage(format!("write {}: {e}", tmp.display())))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| TallyError::Storage(format!("rename {}: {e}", self.path.display())))?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(".tmp");
    PathBuf::from(os)
}

#[async_trait]
impl CounterStore for FileCounterStore {
    async fn increment_and_get(&self, key: &str) -> Result<u64> {
        let mut counters = self.counters.lock().await;
        let count = counters.entry(key.to_string()).or_insert(0);
        *count += 1;
        let new_count = *count;
        self.persist(&counters).await?;
        Ok(new_count)
    }

    async fn get(&self, key: &str) -> Result<u64> {
        Ok(self.counters.lock().await.get(key).copied().unwrap_or(0))
    }

    fn kind(&self) -> &'static str {
        "file"
    }
}
