//! Write-then-rename file replacement.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use smbshare_core::error::{AppError, ErrorKind};
use smbshare_core::result::AppResult;

/// Replace `path` with `contents` atomically.
///
/// The data goes to a temporary file in the same directory, is synced,
/// then renamed over the target. Readers see either the old file or the
/// new one, never a partial write. Missing parent directories are
/// created.
pub async fn write_atomic(path: &Path, contents: Vec<u8>) -> AppResult<()> {
    let target = path.to_path_buf();
    tokio::task::spawn_blocking(move || write_blocking(&target, &contents))
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Atomic write task failed", e))?
}

fn write_blocking(path: &Path, contents: &[u8]) -> AppResult<()> {
    let dir = parent_dir(path);
    std::fs::create_dir_all(&dir).map_err(|e| {
        AppError::with_source(
            ErrorKind::Storage,
            format!("Failed to create directory: {}", dir.display()),
            e,
        )
    })?;

    let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| {
        AppError::with_source(
            ErrorKind::Storage,
            format!("Failed to create temporary file in {}", dir.display()),
            e,
        )
    })?;
    tmp.write_all(contents)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write temporary file for {}", path.display()),
                e,
            )
        })?;

    tmp.persist(path).map_err(|e| {
        AppError::with_source(
            ErrorKind::Storage,
            format!("Failed to replace {}", path.display()),
            e.error,
        )
    })?;
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
