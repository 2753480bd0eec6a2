//! Configuration preview and publishing.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{info, warn};

use smbshare_core::result::AppResult;
use smbshare_samba::assembler::{ConfigAssembler, GeneratedConfig};
use smbshare_samba::validator::ShareValidation;
use smbshare_store::{ApplyReport, ConfigApplier, ShareRepository};

/// Result of generating and publishing the configuration.
#[derive(Debug, Clone, Serialize)]
pub struct ApplyOutcome {
    /// Write and reload details.
    #[serde(flatten)]
    pub report: ApplyReport,
    /// Number of share sections written.
    pub share_count: usize,
    /// Shares left out of the file.
    pub warnings: Vec<ShareValidation>,
}

/// Renders the stored shares and publishes them to the SMB daemon.
///
/// Applies hold one lock from loading the share list until the reload
/// finishes, so the last apply to complete publishes the newest list.
#[derive(Debug, Clone)]
pub struct ConfigService {
    share_repo: Arc<ShareRepository>,
    assembler: Arc<ConfigAssembler>,
    applier: Arc<ConfigApplier>,
    publish_lock: Arc<Mutex<()>>,
}

impl ConfigService {
    /// Creates a new config service.
    pub fn new(
        share_repo: Arc<ShareRepository>,
        assembler: Arc<ConfigAssembler>,
        applier: Arc<ConfigApplier>,
    ) -> Self {
        Self {
            share_repo,
            assembler,
            applier,
            publish_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Renders the stored shares without writing anything.
    pub async fn preview(&self) -> AppResult<GeneratedConfig> {
        let shares = self.share_repo.list().await?;
        Ok(self.assembler.generate(&shares))
    }

    /// Renders the stored shares, writes the file and reloads the daemon.
    pub async fn apply(&self) -> AppResult<ApplyOutcome> {
        let _guard = self.publish_lock.lock().await;
        let generated = self.preview().await?;
        if generated.has_warnings() {
            warn!(
                skipped = generated.warnings.len(),
                "Applying configuration with skipped shares"
            );
        }

        let report = self.applier.apply(&generated.text).await?;
        info!(
            shares = generated.share_count,
            reloaded = report.reloaded,
            "Configuration applied"
        );

        Ok(ApplyOutcome {
            report,
            share_count: generated.share_count,
            warnings: generated.warnings,
        })
    }
}
