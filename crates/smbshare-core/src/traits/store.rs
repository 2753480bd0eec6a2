//! Persistence trait for whole-list record stores.

use async_trait::async_trait;

use crate::result::AppResult;

/// A store that persists an ordered list of records as one unit.
///
/// The share list is small and always rewritten in full, so the trait
/// exposes only whole-list load and save. Implementations exist for a
/// JSON file on disk and for memory; both live in `smbshare-store`.
#[async_trait]
pub trait RecordStore<T>: Send + Sync + std::fmt::Debug + 'static
where
    T: Send + Sync + 'static,
{
    /// Return the store kind (e.g. "json", "memory").
    fn store_type(&self) -> &str;

    /// Load every record, in stored order. A store that has never been
    /// written returns an empty list.
    async fn load(&self) -> AppResult<Vec<T>>;

    /// Replace the stored list with `records`.
    async fn save(&self, records: &[T]) -> AppResult<()>;
}
