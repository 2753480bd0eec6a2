//! JSON array file store.

use std::fmt;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;
use tracing::{debug, info};

use smbshare_core::error::{AppError, ErrorKind};
use smbshare_core::result::AppResult;
use smbshare_core::traits::store::RecordStore;

use crate::atomic::write_atomic;

/// Stores records as a pretty-printed JSON array in one file.
///
/// A missing or blank file loads as an empty list.
pub struct JsonFileStore<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    /// Create a store backed by `path`. The file is not touched until
    /// the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T> fmt::Debug for JsonFileStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonFileStore")
            .field("path", &self.path)
            .finish()
    }
}

#[async_trait]
impl<T> RecordStore<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    fn store_type(&self) -> &str {
        "json"
    }

    async fn load(&self) -> AppResult<Vec<T>> {
        let data = match fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Store file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read store: {}", self.path.display()),
                    e,
                ));
            }
        };

        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&data).map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Store file is not a valid JSON list: {}", self.path.display()),
                e,
            )
        })
    }

    async fn save(&self, records: &[T]) -> AppResult<()> {
        let mut data = serde_json::to_vec_pretty(records)?;
        data.push(b'\n');
        write_atomic(&self.path, data).await?;
        info!(path = %self.path.display(), records = records.len(), "Saved store");
        Ok(())
    }
}
