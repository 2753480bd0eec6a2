//! Publishes generated configuration and reloads the SMB daemon.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::process::Command;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use smbshare_core::config::SambaConfig;
use smbshare_core::error::{AppError, ErrorKind};
use smbshare_core::result::AppResult;

use crate::atomic::write_atomic;

/// Outcome of a successful apply.
#[derive(Debug, Clone, Serialize)]
pub struct ApplyReport {
    /// File the configuration was written to.
    pub config_path: String,
    /// Size of the written text.
    pub bytes_written: usize,
    /// Whether a reload command ran.
    pub reloaded: bool,
    /// When the file was replaced.
    pub applied_at: DateTime<Utc>,
}

/// Writes configuration text to disk and runs the reload command.
///
/// Applies are serialized: a second caller waits until the first has
/// finished writing and reloading.
#[derive(Debug)]
pub struct ConfigApplier {
    config_path: PathBuf,
    reload_command: Vec<String>,
    reload_timeout: Duration,
    lock: Mutex<()>,
}

impl ConfigApplier {
    /// Create an applier from the `[samba]` settings.
    pub fn new(config: &SambaConfig) -> Self {
        let reload_command = if config.reload_enabled() {
            config.reload_command.clone()
        } else {
            Vec::new()
        };
        Self {
            config_path: PathBuf::from(&config.config_path),
            reload_command,
            reload_timeout: Duration::from_secs(config.reload_timeout_seconds),
            lock: Mutex::new(()),
        }
    }

    /// Replace the config file with `text`, then reload.
    ///
    /// A reload failure is reported as `ExternalService`; the new file
    /// stays in place.
    pub async fn apply(&self, text: &str) -> AppResult<ApplyReport> {
        let _guard = self.lock.lock().await;

        write_atomic(&self.config_path, text.as_bytes().to_vec()).await?;
        let applied_at = Utc::now();
        info!(
            path = %self.config_path.display(),
            bytes = text.len(),
            "Samba configuration written"
        );

        let reloaded = self.reload().await?;

        Ok(ApplyReport {
            config_path: self.config_path.display().to_string(),
            bytes_written: text.len(),
            reloaded,
            applied_at,
        })
    }

    async fn reload(&self) -> AppResult<bool> {
        let Some((program, args)) = self.reload_command.split_first() else {
            warn!("No reload command configured, skipping reload");
            return Ok(false);
        };

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.reload_timeout, output)
            .await
            .map_err(|_| {
                error!(command = %program, timeout = ?self.reload_timeout, "Reload timed out");
                AppError::external_service(format!(
                    "Reload command '{program}' timed out after {}s",
                    self.reload_timeout.as_secs()
                ))
            })?
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("Failed to run reload command '{program}'"),
                    e,
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            error!(command = %program, status = %output.status, stderr = %stderr, "Reload failed");
            return Err(AppError::external_service(format!(
                "Reload command '{program}' exited with {}",
                output.status
            ))
            .with_details(serde_json::json!({ "stderr": stderr })));
        }

        info!(command = %program, "SMB daemon reloaded");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dir: &std::path::Path, reload: &[&str], timeout: u64) -> SambaConfig {
        SambaConfig {
            config_path: dir.join("samba/shares.conf").display().to_string(),
            reload_command: reload.iter().map(|s| s.to_string()).collect(),
            reload_timeout_seconds: timeout,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_apply_without_reload() {
        let dir = tempfile::tempdir().expect("tempdir");
        let applier = ConfigApplier::new(&config(dir.path(), &[], 5));

        let report = applier.apply("[a]\n    path = /mnt/a\n").await.expect("apply");
        assert!(!report.reloaded);
        assert_eq!(report.bytes_written, 22);

        let written = std::fs::read_to_string(&report.config_path).expect("read");
        assert_eq!(written, "[a]\n    path = /mnt/a\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_apply_runs_reload() {
        let dir = tempfile::tempdir().expect("tempdir");
        let applier = ConfigApplier::new(&config(dir.path(), &["true"], 5));
        let report = applier.apply("").await.expect("apply");
        assert!(report.reloaded);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failed_reload_keeps_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = config(dir.path(), &["false"], 5);
        let applier = ConfigApplier::new(&cfg);

        let err = applier.apply("[x]\n").await.expect_err("reload fails");
        assert_eq!(err.kind, ErrorKind::ExternalService);
        let written = std::fs::read_to_string(&cfg.config_path).expect("read");
        assert_eq!(written, "[x]\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_reload_timeout() {
        let dir = tempfile::tempdir().expect("tempdir");
        let applier = ConfigApplier::new(&config(dir.path(), &["sleep", "5"], 1));
        let err = applier.apply("").await.expect_err("timeout");
        assert_eq!(err.kind, ErrorKind::ExternalService);
        assert!(err.message.contains("timed out"));
    }

    #[tokio::test]
    async fn test_missing_program() {
        let dir = tempfile::tempdir().expect("tempdir");
        let applier =
            ConfigApplier::new(&config(dir.path(), &["smbshare-no-such-binary"], 5));
        let err = applier.apply("").await.expect_err("spawn fails");
        assert_eq!(err.kind, ErrorKind::ExternalService);
    }
}
