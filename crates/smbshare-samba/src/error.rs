//! Validation error classification.
//!
//! Validation never throws: [`crate::validator::validate`] returns a list
//! of [`ValidationError`]s. [`ShareRejected`] wraps that list when a caller
//! (the share service) decides to refuse the whole request.

use serde::Serialize;
use smbshare_core::error::AppError;
use thiserror::Error;

/// One violated structural rule on a share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    /// Name is empty or has characters outside `[A-Za-z0-9_-]`.
    #[error("Share name must be non-empty and contain only letters, digits, '_' or '-'")]
    InvalidShareName,

    /// Path is empty or not under `/mnt/`.
    #[error("Path must start with /mnt/")]
    InvalidPath,

    /// Create mask is not four octal digits.
    #[error("Create mask must be four octal digits")]
    InvalidCreateMask,

    /// Directory mask is not four octal digits.
    #[error("Directory mask must be four octal digits")]
    InvalidDirectoryMask,
}

impl ValidationError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidShareName => "invalid_share_name",
            Self::InvalidPath => "invalid_path",
            Self::InvalidCreateMask => "invalid_create_mask",
            Self::InvalidDirectoryMask => "invalid_directory_mask",
        }
    }

    /// Share field the error belongs to, for form rendering.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidShareName => "name",
            Self::InvalidPath => "path",
            Self::InvalidCreateMask => "create_mask",
            Self::InvalidDirectoryMask => "directory_mask",
        }
    }
}

/// A share refused because it failed validation.
#[derive(Debug, Clone, Error)]
#[error("Share '{name}' failed validation: {}", codes(.errors))]
pub struct ShareRejected {
    /// Submitted share name (may itself be the invalid part).
    pub name: String,
    /// Every rule the share violated.
    pub errors: Vec<ValidationError>,
}

fn codes(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ValidationError::code)
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<ShareRejected> for AppError {
    fn from(err: ShareRejected) -> Self {
        let fields: Vec<serde_json::Value> = err
            .errors
            .iter()
            .map(|e| {
                serde_json::json!({
                    "field": e.field(),
                    "code": e.code(),
                    "message": e.to_string(),
                })
            })
            .collect();

        AppError::validation(err.to_string()).with_details(serde_json::json!({
            "share": err.name,
            "errors": fields,
        }))
    }
}
