//! Structural validation of share records.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use smbshare_entity::share::Share;

use crate::error::ValidationError;
use crate::mask::PermissionBits;

/// Prefix every exported path must start with.
pub const PATH_PREFIX: &str = "/mnt/";

static SHARE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("share name pattern compiles"));

/// Check a share against every structural rule.
///
/// All rules are evaluated; the error list is in rule order.
pub fn validate(share: &Share) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !is_valid_name(&share.name) {
        errors.push(ValidationError::InvalidShareName);
    }
    if !share.path.starts_with(PATH_PREFIX) {
        errors.push(ValidationError::InvalidPath);
    }
    if let Some(mask) = &share.create_mask {
        if !PermissionBits::is_valid_mask(mask) {
            errors.push(ValidationError::InvalidCreateMask);
        }
    }
    if let Some(mask) = &share.directory_mask {
        if !PermissionBits::is_valid_mask(mask) {
            errors.push(ValidationError::InvalidDirectoryMask);
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Whether `name` is usable as a section header.
pub fn is_valid_name(name: &str) -> bool {
    SHARE_NAME.is_match(name)
}

/// Validation outcome for one share in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareValidation {
    /// Position of the share in the input sequence.
    pub index: usize,
    /// Share name as submitted.
    pub name: String,
    /// Violated rules.
    pub errors: Vec<ValidationError>,
}

/// Validation outcome for a whole share list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Number of shares checked.
    pub checked: usize,
    /// Shares with at least one error, in input order.
    pub failures: Vec<ShareValidation>,
}

impl ValidationReport {
    /// Whether every share passed.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Validate every share, collecting failures by position.
pub fn validate_all(shares: &[Share]) -> ValidationReport {
    let failures = shares
        .iter()
        .enumerate()
        .filter_map(|(index, share)| {
            validate(share).err().map(|errors| ShareValidation {
                index,
                name: share.name.clone(),
                errors,
            })
        })
        .collect();

    ValidationReport {
        checked: shares.len(),
        failures,
    }
}
