//! In-memory record store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use smbshare_core::result::AppResult;
use smbshare_core::traits::store::RecordStore;

/// Keeps records in memory. Used by tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore<T> {
    records: RwLock<Vec<T>>,
}

impl<T> MemoryStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-populated with `records`.
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl<T> RecordStore<T> for MemoryStore<T>
where
    T: Clone + std::fmt::Debug + Send + Sync + 'static,
{
    fn store_type(&self) -> &str {
        "memory"
    }

    async fn load(&self) -> AppResult<Vec<T>> {
        Ok(self.records.read().await.clone())
    }

    async fn save(&self, records: &[T]) -> AppResult<()> {
        *self.records.write().await = records.to_vec();
        Ok(())
    }
}
