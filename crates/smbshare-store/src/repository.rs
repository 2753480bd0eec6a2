//! Share repository over a [`RecordStore`].

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use smbshare_core::error::AppError;
use smbshare_core::result::AppResult;
use smbshare_core::traits::store::RecordStore;
use smbshare_entity::share::Share;

/// Repository for share CRUD operations.
///
/// Names are matched case-insensitively, the way Samba matches section
/// names. Every mutation is a load-modify-save cycle held under one
/// mutex, so concurrent writers cannot lose each other's changes.
#[derive(Debug, Clone)]
pub struct ShareRepository {
    store: Arc<dyn RecordStore<Share>>,
    write_lock: Arc<Mutex<()>>,
}

impl ShareRepository {
    /// Create a new share repository.
    pub fn new(store: Arc<dyn RecordStore<Share>>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Kind of the backing store.
    pub fn store_type(&self) -> &str {
        self.store.store_type()
    }

    /// List all shares in stored order.
    pub async fn list(&self) -> AppResult<Vec<Share>> {
        self.store.load().await
    }

    /// Find a share by name.
    pub async fn find(&self, name: &str) -> AppResult<Option<Share>> {
        let shares = self.store.load().await?;
        Ok(shares.into_iter().find(|s| same_name(&s.name, name)))
    }

    /// Append a share. Fails with `Conflict` if the name is taken.
    pub async fn insert(&self, share: Share) -> AppResult<Share> {
        let _guard = self.write_lock.lock().await;
        let mut shares = self.store.load().await?;

        if shares.iter().any(|s| same_name(&s.name, &share.name)) {
            return Err(AppError::conflict(format!(
                "Share '{}' already exists",
                share.name
            )));
        }

        shares.push(share.clone());
        self.store.save(&shares).await?;
        info!(share = %share.name, "Share created");
        Ok(share)
    }

    /// Replace the share called `name`, keeping its position.
    ///
    /// The replacement may carry a new name as long as no other share
    /// already uses it.
    pub async fn update(&self, name: &str, share: Share) -> AppResult<Share> {
        let _guard = self.write_lock.lock().await;
        let mut shares = self.store.load().await?;

        let index = shares
            .iter()
            .position(|s| same_name(&s.name, name))
            .ok_or_else(|| AppError::not_found(format!("Share '{name}' not found")))?;

        let renamed_onto_other = shares
            .iter()
            .enumerate()
            .any(|(i, s)| i != index && same_name(&s.name, &share.name));
        if renamed_onto_other {
            return Err(AppError::conflict(format!(
                "Share '{}' already exists",
                share.name
            )));
        }

        shares[index] = share.clone();
        self.store.save(&shares).await?;
        info!(share = %name, new_name = %share.name, "Share updated");
        Ok(share)
    }

    /// Remove the share called `name` and return it.
    pub async fn delete(&self, name: &str) -> AppResult<Share> {
        let _guard = self.write_lock.lock().await;
        let mut shares = self.store.load().await?;

        let index = shares
            .iter()
            .position(|s| same_name(&s.name, name))
            .ok_or_else(|| AppError::not_found(format!("Share '{name}' not found")))?;

        let removed = shares.remove(index);
        self.store.save(&shares).await?;
        info!(share = %removed.name, "Share deleted");
        Ok(removed)
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}
