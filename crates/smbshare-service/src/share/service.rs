//! Share CRUD service.

use std::sync::Arc;

use tracing::{info, warn};

use smbshare_core::error::AppError;
use smbshare_core::result::AppResult;
use smbshare_entity::share::Share;
use smbshare_samba::ShareRejected;
use smbshare_samba::sanitizer::{Attributes, sanitize_share, share_from_attributes};
use smbshare_samba::validator::{ValidationReport, validate, validate_all};
use smbshare_store::ShareRepository;

/// Manages share creation, listing, update and removal.
///
/// Every share entering the store is sanitized and must pass validation,
/// so the store only ever holds renderable shares unless it was edited
/// by hand.
#[derive(Debug, Clone)]
pub struct ShareService {
    /// Share repository.
    share_repo: Arc<ShareRepository>,
}

impl ShareService {
    /// Creates a new share service.
    pub fn new(share_repo: Arc<ShareRepository>) -> Self {
        Self { share_repo }
    }

    /// Kind of the backing store.
    pub fn store_type(&self) -> &str {
        self.share_repo.store_type()
    }

    /// Lists every stored share.
    pub async fn list_shares(&self) -> AppResult<Vec<Share>> {
        self.share_repo.list().await
    }

    /// Gets a share by name.
    pub async fn get_share(&self, name: &str) -> AppResult<Share> {
        self.share_repo
            .find(name)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Share '{name}' not found")))
    }

    /// Creates a share from a structured record.
    pub async fn create_share(&self, share: Share) -> AppResult<Share> {
        let share = accept(share)?;
        let share = self.share_repo.insert(share).await?;
        info!(share = %share.name, security = %share.security, "Share added");
        Ok(share)
    }

    /// Creates a share from flat form attributes.
    pub async fn create_share_from_form(&self, attributes: &Attributes) -> AppResult<Share> {
        self.create_share(share_from_attributes(attributes)).await
    }

    /// Replaces the share called `name`.
    pub async fn update_share(&self, name: &str, share: Share) -> AppResult<Share> {
        let share = accept(share)?;
        self.share_repo.update(name, share).await
    }

    /// Deletes the share called `name`.
    pub async fn delete_share(&self, name: &str) -> AppResult<Share> {
        self.share_repo.delete(name).await
    }

    /// Validates every stored share.
    pub async fn validation_report(&self) -> AppResult<ValidationReport> {
        let shares = self.share_repo.list().await?;
        let shares: Vec<Share> = shares.into_iter().map(sanitize_share).collect();
        Ok(validate_all(&shares))
    }
}

fn accept(share: Share) -> Result<Share, AppError> {
    let share = sanitize_share(share);
    validate(&share).map_err(|errors| {
        warn!(share = %share.name, errors = errors.len(), "Share rejected");
        AppError::from(ShareRejected {
            name: share.name.clone(),
            errors,
        })
    })?;
    Ok(share)
}
